use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

/// Brings `value` into the closed interval `[lower, upper]`.
///
/// `lower` must not be greater than `upper`.
///
/// ```
/// use oxdaytime::clamp;
///
/// assert_eq!(clamp(-3, 0, 23), 0);
/// assert_eq!(clamp(12, 0, 23), 12);
/// assert_eq!(clamp(42, 0, 23), 23);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// A value that always stays inside of its closed interval.
///
/// Every write goes through [`clamp`] so out of range values are brought to the nearest bound instead of being rejected.
///
/// ```
/// use oxdaytime::Clamped;
///
/// let mut alpha = Clamped::new(2.5, 0.0..=1.0);
/// assert_eq!(alpha.get(), 1.0);
/// alpha.set(-1.0);
/// assert_eq!(alpha.get(), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Clamped<T> {
    value: T,
    lower: T,
    upper: T,
}

impl<T: PartialOrd + Copy> Clamped<T> {
    #[inline]
    pub fn new(value: T, range: RangeInclusive<T>) -> Self {
        let (lower, upper) = range.into_inner();
        Self {
            value: clamp(value, lower, upper),
            lower,
            upper,
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }

    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = clamp(value, self.lower, self.upper);
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> RangeInclusive<T> {
        self.lower..=self.upper
    }
}

/// Only the wrapped value matters, the bounds are not part of the identity.
impl<T: PartialEq> PartialEq for Clamped<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Clamped<T> {}

impl<T: Hash> Hash for Clamped<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_values() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(0, 0, 10), 0);
        assert_eq!(clamp(10, 0, 10), 10);
        assert_eq!(clamp(-1, 0, 10), 0);
        assert_eq!(clamp(11, 0, 10), 10);
        assert_eq!(clamp(i64::MIN, 0, 59), 0);
        assert_eq!(clamp(i64::MAX, 0, 59), 59);
        assert_eq!(clamp(7, 7, 7), 7);
        assert!((clamp(0.5, 0.0, 1.0) - 0.5_f64).abs() < f64::EPSILON);
    }

    #[test]
    fn clamped_new() {
        assert_eq!(Clamped::new(24, 0..=23).get(), 23);
        assert_eq!(Clamped::new(-2, 0..=23).get(), 0);
        assert_eq!(Clamped::new(12, 0..=23).get(), 12);
        assert_eq!(Clamped::new(12, 0..=23).range(), 0..=23);
    }

    #[test]
    fn clamped_set() {
        let mut minute = Clamped::new(0, 0..=59);
        minute.set(60);
        assert_eq!(minute.get(), 59);
        minute.set(-60);
        assert_eq!(minute.get(), 0);
        minute.set(30);
        assert_eq!(minute.get(), 30);
    }

    #[test]
    fn clamped_eq_ignores_bounds() {
        assert_eq!(Clamped::new(5, 0..=10), Clamped::new(5, 0..=59));
        assert_ne!(Clamped::new(5, 0..=10), Clamped::new(6, 0..=10));
    }
}
