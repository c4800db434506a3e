//! Navigation: getting from "nowhere" to a directory or a set of files
//!
//! Every guided choice reports a [`SelectionOutcome`], so cancelling at any
//! prompt unwinds through the callers as an ordinary value.

pub mod menu;
pub mod outcome;
pub mod path;
pub mod resolver;
pub mod selector;
pub mod state;

pub use menu::{Menu, MenuAction};
pub use outcome::SelectionOutcome;
pub use path::{Ascent, FilePath, WorkingPath, ascend};
pub use resolver::PathResolver;
pub use selector::FileSelector;
pub use state::NavState;
