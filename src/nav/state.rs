//! Guided-navigation state machine
//!
//! ```text
//!  Unset ──pick drive──▶ DriveSelected ──descend──▶ Descended(1) ──descend──▶ Descended(n+1)
//!    ▲                       │    ▲                      │
//!    └──────go up at root────┘    └──────go up───────────┘
//!
//!  any active state ──stay──▶ Committed      any state ──cancel──▶ Cancelled
//! ```

use super::path::{Ascent, WorkingPath, ascend};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    /// No location chosen yet; the user has to pick a drive
    Unset,
    /// Sitting at a drive root
    DriveSelected(WorkingPath),
    /// `depth` levels below the drive root
    Descended { path: WorkingPath, depth: usize },
    /// The user chose to stay here
    Committed(WorkingPath),
    Cancelled,
}

impl NavState {
    /// The location being browsed, for the active states
    #[must_use]
    pub const fn current(&self) -> Option<&WorkingPath> {
        match self {
            Self::DriveSelected(path) | Self::Descended { path, .. } => Some(path),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed(_) | Self::Cancelled)
    }

    /// A drive was picked; only meaningful before the walk has finished
    #[must_use]
    pub fn pick_drive(self, root: WorkingPath) -> Self {
        if self.is_terminal() {
            return self;
        }
        Self::DriveSelected(root)
    }

    /// Enter a listed subdirectory
    #[must_use]
    pub fn descend(self, child: WorkingPath) -> Self {
        match self {
            Self::DriveSelected(_) => Self::Descended {
                path: child,
                depth: 1,
            },
            Self::Descended { depth, .. } => Self::Descended {
                path: child,
                depth: depth + 1,
            },
            other => other,
        }
    }

    /// Go up one level. At a drive root the walk falls back to drive
    /// selection instead of producing a shorter path.
    #[must_use]
    pub fn ascend(self, separator: char) -> Self {
        match self {
            Self::DriveSelected(_) => Self::Unset,
            Self::Descended { path, depth } => match ascend(&path, separator) {
                Ascent::DriveRoot => Self::Unset,
                Ascent::Parent(parent) if parent.is_root(separator) => Self::DriveSelected(parent),
                Ascent::Parent(parent) => Self::Descended {
                    path: parent,
                    depth: depth.saturating_sub(1).max(1),
                },
            },
            other => other,
        }
    }

    /// Stay at the current location
    #[must_use]
    pub fn commit(self) -> Self {
        match self {
            Self::DriveSelected(path) | Self::Descended { path, .. } => Self::Committed(path),
            Self::Unset => Self::Cancelled,
            other => other,
        }
    }

    #[must_use]
    pub fn cancel(self) -> Self {
        match self {
            Self::Committed(path) => Self::Committed(path),
            _ => Self::Cancelled,
        }
    }
}
