//! Marked cells, keyed by grid position.

use std::collections::HashMap;

use super::grid::Coord;

/// Which grid positions a player has marked.
///
/// Marks belong to positions, not to entries: reshuffling or editing the
/// card leaves them where they are. They are not part of the share token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    marks: HashMap<Coord, bool>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the mark at `coord`; an unseen position starts unmarked.
    pub fn toggle(&mut self, coord: Coord) {
        let mark = self.marks.entry(coord).or_insert(false);
        *mark = !*mark;
    }

    pub fn is_selected(&self, coord: Coord) -> bool {
        self.marks.get(&coord).copied().unwrap_or(false)
    }

    /// Marked positions in row-major order.
    pub fn marked(&self) -> Vec<Coord> {
        let mut marked: Vec<Coord> = self
            .marks
            .iter()
            .filter(|(_, on)| **on)
            .map(|(c, _)| *c)
            .collect();
        marked.sort_by_key(|c| (c.y, c.x));
        marked
    }

    /// Number of marked positions.
    pub fn count(&self) -> usize {
        self.marks.values().filter(|on| **on).count()
    }
}
