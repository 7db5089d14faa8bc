/// Waitlist counters shown on the page, indexed in document order.
///
/// Holds the authoritative target of each counter. The form handler bumps
/// it on a successful signup, the reveal animation reads it.
#[derive(Debug, Clone, Default)]
pub struct CounterBoard {
    entries: Vec<CounterEntry>,
}

#[derive(Debug, Clone)]
struct CounterEntry {
    target: u64,
    animated: bool,
}

impl CounterBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a counter and return its index.
    pub fn register(&mut self, target: u64) -> usize {
        self.entries.push(CounterEntry {
            target,
            animated: false,
        });
        self.entries.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn target(&self, index: usize) -> Option<u64> {
        self.entries.get(index).map(|e| e.target)
    }

    pub fn targets(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.target).collect()
    }

    /// Add one signup to every counter and return the new targets.
    pub fn increment_all(&mut self) -> Vec<u64> {
        for entry in &mut self.entries {
            entry.target = entry.target.saturating_add(1);
        }
        self.targets()
    }

    /// Claim the one-time count-up animation of a counter.
    ///
    /// Returns the target to animate to the first time, `None` afterwards or
    /// for an unknown index.
    pub fn claim_animation(&mut self, index: usize) -> Option<u64> {
        let entry = self.entries.get_mut(index)?;
        if entry.animated {
            return None;
        }
        entry.animated = true;
        Some(entry.target)
    }
}
