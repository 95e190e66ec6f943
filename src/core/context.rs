//! The single context slot shared by the operations of one sequence.

/// Property currently being executed and the message a failure would report.
///
/// Only meaningful between a `Select` and the next one. Selection replaces
/// the whole value; nothing carries over from the previous sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ChainContext {
    property: String,
    pending_message: Option<String>,
}

impl ChainContext {
    pub(crate) fn select(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            pending_message: None,
        }
    }

    pub(crate) fn property(&self) -> &str {
        &self.property
    }

    pub(crate) fn pending_message(&self) -> Option<&str> {
        self.pending_message.as_deref()
    }

    pub(crate) fn set_pending_message(&mut self, message: Option<String>) {
        self.pending_message = message;
    }
}
