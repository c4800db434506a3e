//! Numbered menus with a fixed tail of navigation actions
//!
//! A menu lists `N` entries followed by its tail actions, so the actions
//! always sit at `N+1`, `N+2`, ... The numbering is computed once when the
//! menu is built; an empty listing still produces a usable menu made only
//! of the tail.

use super::outcome::SelectionOutcome;
use crate::ui::{InputError, Prompt};

/// Actions appended after the listed entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Stay,
    GoUp,
    Cancel,
}

impl MenuAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stay => "Stay in the current directory.",
            Self::GoUp => "Go up one level.",
            Self::Cancel => "Return to the start screen.",
        }
    }

    const fn outcome<T>(self) -> SelectionOutcome<T> {
        match self {
            Self::Stay => SelectionOutcome::StayOrStop,
            Self::GoUp => SelectionOutcome::GoUp,
            Self::Cancel => SelectionOutcome::Cancelled,
        }
    }
}

/// A numbered menu of labelled values plus tail actions
#[derive(Debug, Clone)]
pub struct Menu<T> {
    entries: Vec<(String, T)>,
    actions: Vec<MenuAction>,
}

impl<T> Menu<T> {
    #[must_use]
    pub fn new(entries: Vec<(String, T)>, actions: &[MenuAction]) -> Self {
        Self {
            entries,
            actions: actions.to_vec(),
        }
    }

    /// Total number of selectable lines, entries and actions together
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len() + self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rendered lines, `"1) label"` style
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let labels = self
            .entries
            .iter()
            .map(|(label, _)| label.as_str())
            .chain(self.actions.iter().map(|a| a.label()));
        labels
            .enumerate()
            .map(|(i, label)| format!("{}) {label}", i + 1))
            .collect()
    }

    /// What the 1-based `number` stands for; `None` when out of range
    #[must_use]
    pub fn pick(&self, number: usize) -> Option<SelectionOutcome<&T>> {
        let index = number.checked_sub(1)?;
        if let Some((_, value)) = self.entries.get(index) {
            return Some(SelectionOutcome::Selected(value));
        }
        self.actions
            .get(index - self.entries.len())
            .map(|action| action.outcome())
    }

    /// Print the menu and `instruction`, then read a valid number.
    ///
    /// ESC at the retry prompt is the same as picking "cancel".
    ///
    /// # Errors
    ///
    /// Returns error if reading from the terminal fails.
    pub fn choose(
        &self,
        prompt: &Prompt<'_>,
        instruction: &str,
    ) -> Result<SelectionOutcome<&T>, InputError> {
        let output = prompt.output();
        for line in self.lines() {
            output.write(&line);
        }
        output.write(instruction);

        Ok(prompt
            .choose_number(self.len())?
            .and_then(|number| self.pick(number))
            .unwrap_or(SelectionOutcome::Cancelled))
    }
}
