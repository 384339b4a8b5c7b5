use serde::Serialize;

use crate::utils::constants::service::ANSI_HIGHLIGHT;

/// What a run hands back to the host for displaying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutput {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_lang: Option<&'static str>,
    /// Marks the text as an error message, to be styled accordingly
    pub error: bool,
}

impl RunOutput {
    /// The verbatim output of the service, which may contain ANSI escapes
    pub fn ansi<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            highlight_lang: Some(ANSI_HIGHLIGHT),
            error: false,
        }
    }

    pub fn error<T: Into<String>>(message: T) -> Self {
        Self {
            text: message.into(),
            highlight_lang: None,
            error: true,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error
    }
}
