//! Board error slots.
//!
//! The board shows at most one error line. Three sources can fill it and a
//! fixed priority decides which one is visible: local messages (validation
//! and handler failures) first, then the last room-creation transport error,
//! then the last comment transport error.

/// Where a visible error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSource {
    /// Set by a handler: validation failure or handled mutation failure.
    Local,
    /// Transport error from the last room creation.
    CreateRoom,
    /// Transport error from the last comment.
    AddComment,
}

/// The error currently shown and its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShownError<'a> {
    /// Slot the message was taken from.
    pub source: ErrorSource,
    /// User-facing text.
    pub message: &'a str,
}

/// Error slots with a priority rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlots {
    local: Option<String>,
    create_room: Option<String>,
    add_comment: Option<String>,
}

impl ErrorSlots {
    /// Overwrite the local message.
    pub fn set_local(&mut self, message: impl Into<String>) {
        self.local = Some(message.into());
    }

    /// Clear the local message.
    pub fn clear_local(&mut self) {
        self.local = None;
    }

    /// Record a transport error for a mutation.
    ///
    /// `ErrorSource::Local` is routed to the local slot.
    pub fn set(&mut self, source: ErrorSource, message: impl Into<String>) {
        *self.slot_mut(source) = Some(message.into());
    }

    /// Clear one slot. Mutation slots are cleared when the mutation is
    /// issued again.
    pub fn clear(&mut self, source: ErrorSource) {
        *self.slot_mut(source) = None;
    }

    /// Clear every slot.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Local message only (the thread view shows nothing else).
    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }

    /// Highest-priority message, if any.
    pub fn shown(&self) -> Option<ShownError<'_>> {
        [
            (ErrorSource::Local, &self.local),
            (ErrorSource::CreateRoom, &self.create_room),
            (ErrorSource::AddComment, &self.add_comment),
        ]
        .into_iter()
        .find_map(|(source, slot)| slot.as_deref().map(|message| ShownError { source, message }))
    }

    fn slot_mut(&mut self, source: ErrorSource) -> &mut Option<String> {
        match source {
            ErrorSource::Local => &mut self.local,
            ErrorSource::CreateRoom => &mut self.create_room,
            ErrorSource::AddComment => &mut self.add_comment,
        }
    }
}
