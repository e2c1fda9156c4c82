use std::fmt::{Display, Formatter};
use std::hash::Hash;

use hashbrown::HashSet;

/// An unordered collection of unique elements.
///
/// The underlying implementation uses a hash set: elements must be hashable and
/// equality-comparable, and iteration order is unspecified (two successive calls
/// to [`Set::members`] may yield different orders). A set only grows: there is no
/// removal operation.
///
/// ```
/// use vocab_collections::Set;
///
/// let mut s: Set<i32> = [1, 2, 3].into_iter().collect();
/// s.insert(4);
/// assert!(s.contains(&2));
/// assert_eq!(s.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Set<E> {
    elements: HashSet<E>,
}

impl<E: Eq + Hash> Set<E> {
    pub fn new() -> Set<E> {
        Set {
            elements: HashSet::new(),
        }
    }

    /// Inserts an element into the set. Inserting an element already present is a no-op.
    pub fn insert(&mut self, element: E) {
        self.elements.insert(element);
    }

    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements of the set, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.elements.iter()
    }
}

impl<E: Eq + Hash + Clone> Set<E> {
    /// All elements of the set, in unspecified order.
    pub fn members(&self) -> Vec<E> {
        self.elements.iter().cloned().collect()
    }

    /// Returns a new set containing the elements present in either operand.
    /// Neither operand is modified.
    pub fn union(&self, other: &Set<E>) -> Set<E> {
        let mut result = self.clone();
        result.elements.extend(other.elements.iter().cloned());
        result
    }

    /// Returns a new set containing the elements present in both operands.
    /// Neither operand is modified.
    pub fn intersection(&self, other: &Set<E>) -> Set<E> {
        Set {
            elements: self.elements.intersection(&other.elements).cloned().collect(),
        }
    }
}

impl<E: Eq + Hash> Default for Set<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Eq + Hash> FromIterator<E> for Set<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Set {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<E: Eq + Hash> Extend<E> for Set<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<E: Eq + Hash> PartialEq for Set<E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}
impl<E: Eq + Hash> Eq for Set<E> {}

impl<E: Eq + Hash + Display> Display for Set<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        let mut first = true;
        for e in &self.elements {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
            first = false;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn sorted<E: Ord>(mut v: Vec<E>) -> Vec<E> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_construction_deduplicates() {
        let s: Set<i32> = [1, 2, 2, 3, 1].into_iter().collect();
        assert_eq!(s.len(), 3);
        assert!(s.contains(&1));
        assert!(s.contains(&2));
        assert!(s.contains(&3));
        assert!(!s.contains(&4));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut s = Set::new();
        s.insert(1);
        s.insert(2);
        s.insert(2);
        assert_eq!(s.len(), 2);
        assert_eq!(sorted(s.members()), vec![1, 2]);
    }

    #[test]
    fn test_extend() {
        let mut s: Set<i32> = Set::new();
        s.extend([1, 2, 3]);
        s.extend([3, 4]);
        assert_eq!(sorted(s.members()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_union_and_intersection() {
        let a: Set<i32> = [1, 2, 3].into_iter().collect();
        let b: Set<i32> = [3, 4, 5].into_iter().collect();

        assert_eq!(sorted(a.union(&b).members()), vec![1, 2, 3, 4, 5]);
        assert_eq!(a.intersection(&b).members(), vec![3]);

        // operands are left untouched
        assert_eq!(sorted(a.members()), vec![1, 2, 3]);
        assert_eq!(sorted(b.members()), vec![3, 4, 5]);

        // both operations agree with element-wise membership
        for e in 0..7 {
            assert_eq!(a.union(&b).contains(&e), a.contains(&e) || b.contains(&e));
            assert_eq!(a.intersection(&b).contains(&e), a.contains(&e) && b.contains(&e));
        }
    }

    #[test]
    fn test_set_equality() {
        let a: Set<i32> = [1, 2, 3].into_iter().collect();
        let b: Set<i32> = [3, 2, 1, 1].into_iter().collect();
        let c: Set<i32> = [1, 2].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let empty: Set<i32> = Set::new();
        assert_eq!(empty.to_string(), "[]");

        let singleton: Set<&str> = ["a"].into_iter().collect();
        assert_eq!(singleton.to_string(), "[a]");

        // order is unspecified, only check the content
        let s: Set<&str> = ["a", "b", "c"].into_iter().collect();
        let rendered = s.to_string();
        let inner = rendered.strip_prefix('[').unwrap().strip_suffix(']').unwrap();
        let items = inner.split(", ").sorted().collect_vec();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_members_match_deduplicated_input() {
        let mut rng = SmallRng::seed_from_u64(2398570);
        for _ in 0..100 {
            let xs: Vec<u8> = (0..rng.random_range(0..50)).map(|_| rng.random_range(0..20)).collect();
            let s: Set<u8> = xs.iter().copied().collect();
            let expected = sorted(xs).into_iter().dedup().collect_vec();
            assert_eq!(sorted(s.members()), expected);
        }
    }
}
