//! Key ordering
//!
//! The tree never calls `Ord` directly: every placement decision goes through
//! a [`Comparator`], a strict "less than" predicate. Two keys are equivalent
//! when neither is less than the other.

/// Strict weak ordering over keys
pub trait Comparator<K: ?Sized> {
    /// Returns true when `a` must be placed before `b`
    fn less(&self, a: &K, b: &K) -> bool;

    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Natural `<` ordering of the key type
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: PartialOrd + ?Sized> Comparator<K> for NaturalOrder {
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}
