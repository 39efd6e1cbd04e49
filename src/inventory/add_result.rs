use std::fmt;

/// Classification of an add operation's outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Nothing was admitted
    AddedNone,

    /// Part of the requested amount was admitted
    AddedSome,

    /// The full requested amount was admitted
    AddedAll,
}

/// Result of asking an inventory to add an item
///
/// The message is human-readable diagnostic text for the UI; logic must
/// branch on `outcome` and `amount_added`, never on the message.
#[derive(Debug, Clone, PartialEq)]
pub struct AddResult {
    pub outcome: AddOutcome,
    pub amount_added: u32,
    pub message: String,
}

impl AddResult {
    /// Nothing was added
    pub fn added_none(message: impl Into<String>) -> Self {
        AddResult {
            outcome: AddOutcome::AddedNone,
            amount_added: 0,
            message: message.into(),
        }
    }

    /// Only part of the requested amount was added
    pub fn added_some(amount_added: u32, message: impl Into<String>) -> Self {
        AddResult {
            outcome: AddOutcome::AddedSome,
            amount_added,
            message: message.into(),
        }
    }

    /// The full requested amount was added
    pub fn added_all(amount_added: u32, message: impl Into<String>) -> Self {
        AddResult {
            outcome: AddOutcome::AddedAll,
            amount_added,
            message: message.into(),
        }
    }

    /// Returns true if at least one unit was admitted
    pub fn is_success(&self) -> bool {
        self.outcome != AddOutcome::AddedNone
    }
}

impl fmt::Display for AddResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
