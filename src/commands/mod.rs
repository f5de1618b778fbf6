//! CLI command implementations.
//!
//! Each command is implemented in its own submodule. Commands resolve the
//! card from a share link, work on a BingoContext, and write their output to
//! the writer they are given.

mod edit;
mod html;
mod new;
pub mod play;
mod share;
pub mod shared;
mod show;
mod shuffle;

pub use edit::{edit, EditOptions};
pub use html::html;
pub use new::{build_card, new, NewOptions};
pub use play::play;
pub use share::share;
pub use show::show;
pub use shuffle::shuffle;
