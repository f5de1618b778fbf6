//! Grid layout for a bingo card.
//!
//! The grid is the smallest square that fits every entry plus the center
//! cell. The center cell sits at linear index `size * size / 2`; entries fill
//! the cells before and after it in their original order, and any cells left
//! over at the end are empty.

use std::fmt;

/// A zero-indexed grid position, `x` across and `y` down from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The cell contents of a card in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    size: usize,
    cells: Vec<String>,
}

/// Side length of the grid holding `entry_count` entries and the center cell.
///
/// This is `ceil(sqrt(entry_count + 1))`, computed without floating point.
pub fn grid_size(entry_count: usize) -> usize {
    let needed = entry_count + 1;
    let mut size = needed.isqrt();
    if size * size < needed {
        size += 1;
    }
    size
}

impl GridLayout {
    /// Lay out `entries` around `center_cell`.
    pub fn build(entries: &[impl AsRef<str>], center_cell: &str) -> Self {
        let size = grid_size(entries.len());
        let total = size * size;
        let mid = total / 2;

        let split = mid.min(entries.len());
        let (before, after) = entries.split_at(split);

        let mut cells: Vec<String> = Vec::with_capacity(total);
        cells.extend(before.iter().map(|e| e.as_ref().to_string()));
        // Only a single entry leaves a gap before the center.
        cells.resize(mid, String::new());
        cells.push(center_cell.to_string());
        cells.extend(after.iter().map(|e| e.as_ref().to_string()));
        cells.resize(total, String::new());

        Self { size, cells }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order; `size * size` of them.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Linear index of the center cell.
    pub fn center_index(&self) -> usize {
        self.cells.len() / 2
    }

    /// Coordinate of the center cell.
    pub fn center(&self) -> Coord {
        self.coord_of(self.center_index())
    }

    /// Coordinate of the cell at linear index `i`.
    pub fn coord_of(&self, i: usize) -> Coord {
        Coord::new(i % self.size, i / self.size)
    }

    /// Linear index of `coord`, or `None` when it lies outside the grid.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.y * self.size + coord.x)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Text of the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Option<&str> {
        self.index_of(coord).map(|i| self.cells[i].as_str())
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(self.size)
    }

    /// Iterate over every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &str)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.coord_of(i), cell.as_str()))
    }
}
