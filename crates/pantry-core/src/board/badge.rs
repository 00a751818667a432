//! Count Badge
//!
//! Sidebar/navbar counters (pantry items, allergens, cart).

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountBadge {
    count: u32,
}

impl CountBadge {
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    /// Read a badge back from its displayed text; anything unparseable is 0
    pub fn parse(text: &str) -> Self {
        Self::new(text.trim().parse().unwrap_or(0))
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set(&mut self, count: u32) {
        self.count = count;
    }

    /// Floored at zero
    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    /// Cart badge hides itself at zero
    pub fn is_visible(&self) -> bool {
        self.count > 0
    }
}
