//! Reveal on Scroll
//!
//! One-shot entrance animation: an element is revealed the first time it
//! enters the viewport and is never observed again.

use std::collections::HashSet;
use std::hash::Hash;

/// Fraction of the element that must be visible
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport by 50px at the bottom
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Class that plays the entrance transition
pub const REVEALED_CLASS: &str = "animate-in";

/// Elements animated on the marketing page
pub const REVEAL_SELECTORS: [&str; 6] = [
    ".section__title",
    ".section__subtitle",
    ".service__card",
    ".about__text",
    ".about__skills",
    ".hero__content",
];

/// Selector list for `querySelectorAll`
pub fn reveal_selector() -> String {
    REVEAL_SELECTORS.join(", ")
}

/// Which elements are waiting to be revealed and which are done
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    observed: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            observed: HashSet::new(),
            revealed: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`; `false` if it was already revealed or watched
    pub fn observe(&mut self, key: K) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        self.observed.insert(key)
    }

    /// Handle an intersection report
    ///
    /// Returns `true` exactly once per key, when it first intersects; the
    /// caller then applies [`REVEALED_CLASS`] and stops observing it.
    pub fn on_intersection(&mut self, key: &K, is_intersecting: bool) -> bool {
        if !is_intersecting || !self.observed.remove(key) {
            return false;
        }
        self.revealed.insert(key.clone());
        true
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    /// Elements still waiting for their first intersection
    pub fn pending(&self) -> usize {
        self.observed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_once() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.observe(1));
        assert!(tracker.observe(2));

        assert!(!tracker.on_intersection(&1, false));
        assert!(tracker.on_intersection(&1, true));
        assert!(tracker.is_revealed(&1));

        // Leaving and re-entering the viewport does nothing
        assert!(!tracker.on_intersection(&1, false));
        assert!(!tracker.on_intersection(&1, true));
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn test_revealed_elements_are_not_reobserved() {
        let mut tracker = RevealTracker::new();
        tracker.observe("hero");
        tracker.on_intersection(&"hero", true);

        assert!(!tracker.observe("hero"));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut tracker: RevealTracker<u32> = RevealTracker::new();
        assert!(!tracker.on_intersection(&7, true));
        assert!(!tracker.is_revealed(&7));
    }

    #[test]
    fn test_selector() {
        assert!(reveal_selector().starts_with(".section__title, .section__subtitle"));
    }
}
