//! One-shot reveal of elements as they scroll into view.

use std::collections::HashSet;

pub const WATCH_SELECTOR: &str = ".animate-on-scroll, .counter";
pub const VISIBLE_CLASS: &str = "animate-in";
/// Attribute holding an element's id in the [`RevealTracker`].
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Intersection settings shared by the reveal observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserverOptions {
    pub fn from_config(config: &crate::config::PageConfig) -> Self {
        Self {
            threshold: config.observer_threshold,
            root_margin: config.observer_root_margin.clone(),
        }
    }
}

/// What to do for an element that just became visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub id: usize,
    /// Index in the counter board of the counter this element is or contains.
    pub counter: Option<usize>,
}

/// Remembers which watched elements have already been revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    watched: Vec<Option<usize>>,
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching an element, optionally linked to a counter.
    pub fn watch(&mut self, counter: Option<usize>) -> usize {
        self.watched.push(counter);
        self.watched.len() - 1
    }

    /// Record an intersection change. Yields a [`Reveal`] only the first time
    /// `id` is seen intersecting.
    pub fn on_intersection(&mut self, id: usize, is_intersecting: bool) -> Option<Reveal> {
        if !is_intersecting {
            return None;
        }
        let counter = *self.watched.get(id)?;
        if !self.revealed.insert(id) {
            return None;
        }
        Some(Reveal { id, counter })
    }

    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed.contains(&id)
    }
}
