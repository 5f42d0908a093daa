//! Wire-level error payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat field-to-message error payload, e.g. `{"text": "..."}` for a
/// validation failure or `{"alreadyliked": "..."}` for a business-rule
/// violation. Clients key on the field names to place messages in the UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody(pub BTreeMap<String, String>);

impl ErrorBody {
    /// A payload with a single keyed message.
    pub fn field(key: impl Into<String>, message: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(key.into(), message.into());
        Self(map)
    }

    /// Add another keyed message.
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.0.insert(key.into(), message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
