use serde::{Deserialize, Serialize};

/// Settings controlling how request documents are rendered
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeSettings {
    /// Emit indented, multi-line JSON instead of the compact form
    #[serde(default)]
    pub pretty: bool,
}

impl EncodeSettings {
    /// Compact output, suitable for sending over the wire
    pub fn compact() -> Self {
        Self::default()
    }

    /// Set whether output is pretty-printed
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
