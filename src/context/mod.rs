//! Core data model for bingo cards.
//!
//! This module contains:
//! - `BingoState` - Title, center cell and entries of a card
//! - `GridLayout` - The derived square layout of a card
//! - `SelectionSet` - Per-position marks made during play
//! - `BingoContext` - Application state updated through `Action`s
//! - Share token encoding and the global settings file

pub mod action;
pub mod codec;
pub mod grid;
pub mod selection;
pub mod settings;
pub mod shuffle;
mod state;

use std::cell::OnceCell;

use rand::Rng;
use url::Url;

pub use action::{Action, ActionError};
pub use codec::{DecodeError, EncodeError, ShareUrlError};
pub use grid::{Coord, GridLayout};
pub use selection::SelectionSet;
pub use settings::{ClipboardConfig, GlobalConfig, SettingsError};
pub use state::{BingoState, DEFAULT_CENTER_CELL, DEFAULT_ENTRY_COUNT, DEFAULT_TITLE};

/// Application state for one card session.
///
/// BingoContext is the single source of truth for a session. It owns:
/// - The card state, which is what share links carry
/// - The selection, which lives only as long as the session
/// - A memoized grid, rebuilt only after the entries or center text change
///
/// All mutations go through [`BingoContext::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct BingoContext {
    state: BingoState,
    selection: SelectionSet,
    grid: OnceCell<GridLayout>,
}

impl BingoContext {
    /// Create a context for `state` with nothing marked.
    pub fn new(state: BingoState) -> Self {
        Self {
            state,
            selection: SelectionSet::new(),
            grid: OnceCell::new(),
        }
    }

    /// Create a context from an optional share token, falling back to the
    /// default card when it is missing or undecodable.
    pub fn from_token(token: Option<&str>) -> Self {
        Self::new(codec::load(token))
    }

    pub fn state(&self) -> &BingoState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The grid for the current entries and center text.
    pub fn grid(&self) -> &GridLayout {
        self.grid
            .get_or_init(|| GridLayout::build(&self.state.entries(), &self.state.center_cell))
    }

    pub fn is_selected(&self, coord: Coord) -> bool {
        self.selection.is_selected(coord)
    }

    /// Apply an action, using the thread RNG for shuffles.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        self.dispatch_with(action, &mut rand::rng())
    }

    /// Apply an action, drawing shuffle randomness from `rng`.
    pub fn dispatch_with<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<(), ActionError> {
        let size = self.grid().size();
        let invalidates = action.affects_layout();

        tracing::debug!(?action, "dispatch");
        action::reduce(&mut self.state, &mut self.selection, size, action, rng)?;

        if invalidates {
            self.grid.take();
        }
        Ok(())
    }

    /// Encode the card as a share token.
    pub fn token(&self) -> Result<String, EncodeError> {
        codec::encode(&self.state)
    }

    /// Build the share URL for the card on top of `base_url`.
    pub fn share_url(&self, base_url: &str) -> Result<Url, ShareUrlError> {
        codec::share_url(base_url, &self.state)
    }

    /// Consume the context, keeping only the shareable state.
    pub fn into_state(self) -> BingoState {
        self.state
    }
}
