use serde::{Deserialize, Serialize};

/// Screenplay excerpt sent when no other script is supplied.
pub const DEFAULT_SCRIPT: &str = "INT. COFFEE SHOP - DAY\n\nANNA sips her coffee, lost in thought.\n\nMARK\nA penny for them?\n\nEXT. PARK - DAY\n\nAnna walks through the park. Leaves crunch under her feet. She checks her phone, then sighs.";

/// Request body: `{"script": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptPayload {
    pub script: String,
}

impl ScriptPayload {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl Default for ScriptPayload {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT)
    }
}

/// Status code and raw body text, as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResponse {
    pub status: u16,
    pub body: String,
}
