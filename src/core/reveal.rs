//! One-shot scroll reveal bookkeeping.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks which elements are still waiting to be revealed.
///
/// An element is revealed on its first intersection and is never observed or
/// revealed again.
#[derive(Debug, Clone)]
pub struct RevealSet<K> {
    pending: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K> Default for RevealSet<K> {
    fn default() -> Self {
        Self {
            pending: HashSet::new(),
            revealed: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> RevealSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `key`. Returns false if it is already observed or was
    /// revealed before.
    pub fn observe(&mut self, key: K) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        self.pending.insert(key)
    }

    /// Handle an intersection report. Returns true exactly when `key` must be
    /// revealed now and dropped from observation.
    pub fn on_intersection(&mut self, key: &K, is_intersecting: bool) -> bool {
        if !is_intersecting || !self.pending.remove(key) {
            return false;
        }
        self.revealed.insert(key.clone());
        true
    }

    #[cfg(test)]
    fn is_observed(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    #[cfg(test)]
    fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    /// Nothing is left to reveal
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    fn revealed_len(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_intersection_reveals() {
        let mut set = RevealSet::new();
        assert!(set.observe(1));

        assert!(set.on_intersection(&1, true));
        assert!(set.is_revealed(&1));
        assert!(!set.is_observed(&1));
    }

    #[test]
    fn test_non_intersecting_report_keeps_waiting() {
        let mut set = RevealSet::new();
        set.observe("pricing");

        assert!(!set.on_intersection(&"pricing", false));
        assert!(set.is_observed(&"pricing"));
        assert!(!set.is_revealed(&"pricing"));
    }

    #[test]
    fn test_reveal_happens_once() {
        let mut set = RevealSet::new();
        set.observe(7);

        assert!(set.on_intersection(&7, true));
        assert!(!set.on_intersection(&7, true));
        assert!(!set.on_intersection(&7, false));
        assert!(set.is_revealed(&7));
    }

    #[test]
    fn test_revealed_element_is_not_observed_again() {
        let mut set = RevealSet::new();
        set.observe(3);
        set.on_intersection(&3, true);

        assert!(!set.observe(3));
        assert!(!set.is_observed(&3));
        assert_eq!(set.pending_len(), 0);
        assert_eq!(set.revealed_len(), 1);
    }

    #[test]
    fn test_settled_once_every_element_is_revealed() {
        let mut set = RevealSet::new();
        set.observe("story");
        set.observe("privacy");
        assert!(!set.is_settled());

        set.on_intersection(&"story", true);
        assert!(!set.is_settled());

        set.on_intersection(&"privacy", true);
        assert!(set.is_settled());
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut set: RevealSet<u32> = RevealSet::new();
        assert!(!set.on_intersection(&42, true));
        assert!(!set.is_revealed(&42));
    }

    #[test]
    fn test_elements_are_independent() {
        let mut set = RevealSet::new();
        for id in 0..4 {
            set.observe(id);
        }

        assert!(set.on_intersection(&2, true));
        assert_eq!(set.pending_len(), 3);
        assert!(!set.is_revealed(&0));
    }
}
