// Lumen recent colors
//
// Custom colors the user applied, most recent first. Preset swatches are
// never recorded since they are always one tap away.

use std::collections::VecDeque;

use lumen_utils::Color;

#[derive(Debug, Clone)]
pub struct RecentColors {
    colors: VecDeque<Color>,
    capacity: usize,
}

impl RecentColors {
    pub fn new(capacity: usize) -> Self {
        Self {
            colors: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Record `color` at the front unless it is one of `presets`.
    ///
    /// A color already in the list moves to the front instead of being
    /// duplicated; the oldest entry falls off when full. Returns whether the
    /// color was recorded.
    pub fn record(&mut self, color: Color, presets: &[Color]) -> bool {
        if presets.contains(&color) {
            return false;
        }

        self.colors.retain(|c| *c != color);
        self.colors.push_front(color);
        self.colors.truncate(self.capacity);
        true
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// The recent-colors row is hidden while this is true
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
