//! Modal dialog state for the UI.

/// Modal dialogs that temporarily capture keyboard input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal is active.
    #[default]
    None,
    /// Informational alert with a message.
    Alert {
        /// Alert text.
        message: String,
    },
    /// "Select first N rows" popover anchored to the Title header.
    BulkSelect {
        /// Digits typed so far (an optional leading `-` is accepted).
        input: String,
    },
    /// Keybindings overview.
    Help,
}
