use std::collections::HashMap;
use std::hash::Hash;

use crate::Cost;

/// Best known cost and backpointer for one vertex.
#[derive(Debug, Clone)]
pub(crate) struct Seen<T> {
    pub(crate) cost: Cost,
    /// `None` marks a start vertex.
    pub(crate) parent: Option<T>,
}

/// The settled-set: visited check and backpointer table in one map.
///
/// An entry exists for every vertex that has ever been pushed to the
/// frontier. Entries are only replaced by strictly cheaper ones, so with
/// non-negative edge costs the backpointer chains are acyclic.
#[derive(Debug, Clone)]
pub(crate) struct Settled<T> {
    map: HashMap<T, Seen<T>>,
}

impl<T: Clone + Eq + Hash> Settled<T> {
    pub(crate) fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Record `v` as a start vertex with the given initial cost.
    ///
    /// Returns `false` if `v` is already known at a cost no greater.
    pub(crate) fn seed(&mut self, v: T, cost: Cost) -> bool {
        if self.map.get(&v).is_some_and(|s| s.cost <= cost) {
            return false;
        }
        self.map.insert(v, Seen { cost, parent: None });
        true
    }

    /// Record that `to` can be reached through `from` at `cost`.
    ///
    /// Returns `true` if `to` was unknown or `cost` beats its recorded cost.
    pub(crate) fn relax(&mut self, from: &T, to: T, cost: Cost) -> bool {
        if self.map.get(&to).is_some_and(|s| s.cost <= cost) {
            return false;
        }
        self.map.insert(
            to,
            Seen {
                cost,
                parent: Some(from.clone()),
            },
        );
        true
    }

    #[inline]
    pub(crate) fn cost(&self, v: &T) -> Option<Cost> {
        self.map.get(v).map(|s| s.cost)
    }

    #[inline]
    pub(crate) fn contains(&self, v: &T) -> bool {
        self.map.contains_key(v)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn vertices(&self) -> impl ExactSizeIterator<Item = &T> {
        self.map.keys()
    }

    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = (&T, Cost)> {
        self.map.iter().map(|(v, s)| (v, s.cost))
    }

    /// Predecessors of `v`, nearest first, ending at a start vertex.
    ///
    /// `v` itself is not yielded. The walk is bounded by the number of
    /// known vertices, so it terminates even if a caller broke the
    /// non-negative cost contract and produced a cycle.
    pub(crate) fn ancestors(&self, v: &T) -> Ancestors<'_, T> {
        Ancestors {
            settled: self,
            cur: self.parent(v),
            budget: self.map.len(),
        }
    }

    /// Path from a start vertex to `v`, inclusive.
    ///
    /// An unknown `v` has no backpointer and yields `[v]`; callers check
    /// [`contains`](Self::contains) first when that matters.
    pub(crate) fn path_to(&self, v: &T) -> Vec<T> {
        let mut path = vec![v.clone()];
        path.extend(self.ancestors(v).cloned());
        path.reverse();
        path
    }

    #[inline]
    fn parent(&self, v: &T) -> Option<&T> {
        self.map.get(v).and_then(|s| s.parent.as_ref())
    }
}

/// Iterator over backpointers, see [`Settled::ancestors`].
pub(crate) struct Ancestors<'a, T> {
    settled: &'a Settled<T>,
    cur: Option<&'a T>,
    budget: usize,
}

impl<'a, T: Clone + Eq + Hash> Iterator for Ancestors<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.budget == 0 {
            return None;
        }
        self.budget -= 1;
        let v = self.cur.take()?;
        self.cur = self.settled.parent(v);
        Some(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relax_keeps_cheapest() {
        let mut s = Settled::new();
        assert!(s.seed('a', 0));
        assert!(s.relax(&'a', 'b', 5));
        assert!(!s.relax(&'a', 'b', 5));
        assert!(!s.relax(&'a', 'b', 7));
        assert!(s.relax(&'c', 'b', 3));
        assert_eq!(s.cost(&'b'), Some(3));
        assert_eq!(s.parent(&'b'), Some(&'c'));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn seed_takes_minimum_initial_cost() {
        let mut s = Settled::new();
        assert!(s.seed('a', 4));
        assert!(!s.seed('a', 9));
        assert!(s.seed('a', 1));
        assert_eq!(s.cost(&'a'), Some(1));
        assert_eq!(s.parent(&'a'), None);
    }

    #[test]
    fn path_walks_backpointers() {
        let mut s = Settled::new();
        s.seed(0, 0);
        s.relax(&0, 1, 1);
        s.relax(&1, 2, 2);
        s.relax(&2, 3, 3);
        assert_eq!(s.path_to(&3), vec![0, 1, 2, 3]);
        assert_eq!(s.path_to(&0), vec![0]);
        assert!(!s.contains(&9));
        assert_eq!(s.ancestors(&3).copied().collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn ancestors_terminate_on_cycle() {
        let mut s = Settled::new();
        s.seed(0, 10);
        s.relax(&0, 1, 5);
        // A negative edge lets 0 be "improved" through its own descendant.
        s.relax(&1, 0, 2);
        assert!(s.ancestors(&1).count() <= s.len());
    }
}
