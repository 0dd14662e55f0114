//! Typed confirmation gate for destructive operations.
//!
//! Gateway delete methods accept only a [`ConfirmedDeletion`], which can be
//! produced solely by confirming a [`PendingDeletion`]. Dropping the
//! pending value cancels the deletion; no call can have been issued because
//! the confirmed value never existed.

/// A deletion that has been requested but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending deletion issues no call until confirmed"]
pub struct PendingDeletion<Id> {
    id: Id,
}

impl<Id> PendingDeletion<Id> {
    /// Stages a deletion for the given entity.
    pub const fn new(id: Id) -> Self {
        Self { id }
    }

    /// Returns the entity staged for deletion.
    pub const fn id(&self) -> &Id {
        &self.id
    }

    /// Confirms the deletion, unlocking the destructive call.
    pub fn confirm(self) -> ConfirmedDeletion<Id> {
        ConfirmedDeletion { id: self.id }
    }

    /// Cancels the deletion.
    pub fn cancel(self) {
        drop(self);
    }
}

/// Proof that the user explicitly confirmed a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedDeletion<Id> {
    id: Id,
}

impl<Id> ConfirmedDeletion<Id> {
    /// Returns the entity to delete.
    pub const fn id(&self) -> &Id {
        &self.id
    }

    /// Consumes the confirmation, yielding the entity identifier.
    pub fn into_id(self) -> Id {
        self.id
    }
}
