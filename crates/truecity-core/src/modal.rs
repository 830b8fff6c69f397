// crates/truecity-core/src/modal.rs

//! The dialog around the selector: it owns the hidden input the host
//! submits and the location text shown next to the "open" button. Saving is
//! refused while the selection is incomplete, and the dialog stays open.

use crate::controller::CascadeController;
use crate::error::ValidationError;
use crate::messages::{MessageKey, Messages};
use crate::serializer::Committed;
use crate::widget::{Feedback, SelectList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(Committed),
    /// The save action was prevented; the modal is still open.
    Prevented(ValidationError),
}

#[derive(Debug, Clone)]
pub struct SelectorModal {
    title: String,
    open: bool,
    hidden_value: String,
    location_text: String,
}

impl SelectorModal {
    /// `hidden_value` is the value the host rendered into its input (a
    /// stored location or nothing), `location_text` the summary shown
    /// before any change.
    pub fn new(messages: &Messages, hidden_value: Option<String>, location_text: impl Into<String>) -> Self {
        Self {
            title: messages.get(MessageKey::SelectLocationTitle).to_owned(),
            open: false,
            hidden_value: hidden_value.unwrap_or_default(),
            location_text: location_text.into(),
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without saving. Lists keep whatever the user did to them;
    /// only the hidden value and text stay as they were.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    pub fn save<W: SelectList, F: Feedback>(&mut self, controller: &mut CascadeController<W, F>) -> SaveOutcome {
        match controller.commit() {
            Ok(committed) => {
                self.hidden_value = committed.json();
                self.location_text = committed.summary.clone();
                self.open = false;
                SaveOutcome::Saved(committed)
            }
            Err(e) => SaveOutcome::Prevented(e),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value the host will submit with its form.
    pub fn hidden_value(&self) -> &str {
        &self.hidden_value
    }

    /// Stored value to seed the next selector with, if any.
    pub fn stored(&self) -> Option<&str> {
        Some(self.hidden_value.as_str()).filter(|v| !v.is_empty())
    }

    pub fn location_text(&self) -> &str {
        &self.location_text
    }
}
