use rand::Rng;
use thiserror::Error;

use super::grid::Coord;
use super::selection::SelectionSet;
use super::shuffle::shuffle_with;
use super::state::BingoState;

/// A single user edit to the card or to the play state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the title.
    SetTitle(String),
    /// Replace the center cell text.
    SetCenterCell(String),
    /// Replace the raw newline-delimited entries block.
    SetEntries(String),
    /// Reorder the entries randomly.
    Shuffle,
    /// Flip the mark on one grid position.
    Toggle(Coord),
}

impl Action {
    /// Whether applying this action changes the grid contents.
    pub fn affects_layout(&self) -> bool {
        matches!(
            self,
            Action::SetCenterCell(_) | Action::SetEntries(_) | Action::Shuffle
        )
    }
}

/// Errors from applying an action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("cell {coord} is outside the {size}x{size} grid")]
    OutOfBounds { coord: Coord, size: usize },
}

/// Apply `action` to the card state and selection.
///
/// `grid_size` is the side length of the grid the action is applied to;
/// toggles outside it are rejected and leave the selection unchanged.
/// Marks are never moved or cleared by content changes.
pub fn reduce<R: Rng + ?Sized>(
    state: &mut BingoState,
    selection: &mut SelectionSet,
    grid_size: usize,
    action: Action,
    rng: &mut R,
) -> Result<(), ActionError> {
    match action {
        Action::SetTitle(title) => state.title = title,
        Action::SetCenterCell(text) => state.center_cell = text,
        Action::SetEntries(text) => state.entries_text = text,
        Action::Shuffle => {
            let shuffled = shuffle_with(&state.entries(), rng);
            state.set_entries(&shuffled);
        }
        Action::Toggle(coord) => {
            if coord.x >= grid_size || coord.y >= grid_size {
                return Err(ActionError::OutOfBounds {
                    coord,
                    size: grid_size,
                });
            }
            selection.toggle(coord);
        }
    }
    Ok(())
}
