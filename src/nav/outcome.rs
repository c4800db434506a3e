//! Result vocabulary shared by every guided choice

/// Outcome of a guided choice
///
/// Every menu, prompt loop and navigation step reports back with one of
/// these variants. Cancellation is an ordinary value, so it composes through
/// nested calls without any out-of-band flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome<T> {
    /// The user picked a value
    Selected(T),
    /// The user asked to stay where they are (or to stop adding)
    StayOrStop,
    /// The user asked to go up one level
    GoUp,
    /// The user abandoned the operation
    Cancelled,
}

impl<T> SelectionOutcome<T> {
    /// Returns `true` for [`SelectionOutcome::Cancelled`]
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns the selected value, if any
    #[must_use]
    pub fn selected(self) -> Option<T> {
        match self {
            Self::Selected(value) => Some(value),
            _ => None,
        }
    }

    /// Map the selected value, leaving the other variants untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SelectionOutcome<U> {
        match self {
            Self::Selected(value) => SelectionOutcome::Selected(f(value)),
            Self::StayOrStop => SelectionOutcome::StayOrStop,
            Self::GoUp => SelectionOutcome::GoUp,
            Self::Cancelled => SelectionOutcome::Cancelled,
        }
    }

    /// Split into the selected value or the non-selected outcome retyped for
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns the non-selected variant as `Err` so callers can hand it
    /// straight back up.
    pub fn into_selected<U>(self) -> Result<T, SelectionOutcome<U>> {
        match self {
            Self::Selected(value) => Ok(value),
            Self::StayOrStop => Err(SelectionOutcome::StayOrStop),
            Self::GoUp => Err(SelectionOutcome::GoUp),
            Self::Cancelled => Err(SelectionOutcome::Cancelled),
        }
    }
}

/// Unwrap a `Result<SelectionOutcome<T>, E>` inside a function that itself
/// returns `Result<SelectionOutcome<U>, E>`, returning early with any
/// non-selected outcome.
#[macro_export]
macro_rules! selected {
    ($outcome:expr) => {
        match $outcome?.into_selected() {
            Ok(value) => value,
            Err(other) => return Ok(other),
        }
    };
}
