//! Reply payload delivered back to the transport.

use serde::Serialize;

/// Who gets to see a reply. Every reply this core produces is scoped
/// to the requester; there is no broadcast path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
}

/// Final payload of one handled command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub visibility: Visibility,
}

impl Reply {
    pub fn private(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: Visibility::Private,
        }
    }
}
