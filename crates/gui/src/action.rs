//! Contains [Action], the requests panels hand back to the controller, and
//! [ActionSlot], which holds at most one of them per frame.

/// A request from the user that the controller should carry out.
///
/// Panels return `Option<Action>`, [None] meaning nothing was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    OpenFiles,
    OpenDirectory,
    Export,
    Quit,
    ToggleDebugLog,
    ReportBug,
    /// Show the match at this row of the matches table.
    ShowMatch(usize),
    /// Show the pano at this row of the panos table.
    ShowPano(usize),
}

impl Action {
    /// The row index carried by [Action::ShowMatch] and [Action::ShowPano].
    pub fn payload(&self) -> Option<usize> {
        match *self {
            Action::ShowMatch(index) | Action::ShowPano(index) => Some(index),
            Action::OpenFiles
            | Action::OpenDirectory
            | Action::Export
            | Action::Quit
            | Action::ToggleDebugLog
            | Action::ReportBug => None,
        }
    }
}

/// What an [ActionSlot] does when offered a second action in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Collision {
    /// Keep the action that arrived first and drop the new one.
    #[default]
    KeepFirst,
    /// Replace the stored action with the new one.
    KeepLast,
}

/// Collects the (at most one) action a panel produces during a frame.
///
/// A second action in the same frame shouldn't happen with a single pointer,
/// so whenever it does the [Collision] policy decides the winner and the
/// loser is logged.
#[derive(Debug, Clone, Default)]
pub struct ActionSlot {
    action: Option<Action>,
    on_collision: Collision,
}

impl ActionSlot {
    pub fn new(on_collision: Collision) -> Self {
        Self {
            action: None,
            on_collision,
        }
    }

    /// Offers `action` to the slot, returning whether it's now the stored one.
    pub fn offer(&mut self, action: Action) -> bool {
        let Some(existing) = self.action else {
            self.action = Some(action);
            return true;
        };

        match self.on_collision {
            Collision::KeepFirst => {
                util::debug_log_warning!(
                    "Dropping {action:?}, {existing:?} was already requested this frame."
                );
                false
            }
            Collision::KeepLast => {
                util::debug_log_warning!(
                    "Replacing {existing:?} with {action:?}, both were requested this frame."
                );
                self.action = Some(action);
                true
            }
        }
    }

    /// Offers the action if there is one (see [Self::offer]).
    pub fn offer_opt(&mut self, action: Option<Action>) {
        if let Some(action) = action {
            self.offer(action);
        }
    }

    /// The stored action.
    pub fn get(&self) -> Option<Action> {
        self.action
    }

    /// Empties the slot, returning what it held.
    pub fn take(&mut self) -> Option<Action> {
        self.action.take()
    }
}
