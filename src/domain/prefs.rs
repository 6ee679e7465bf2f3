//! On-disk user preferences

use serde::{Deserialize, Serialize};

/// Contents of preferences.json. Only the language survives restarts;
/// unknown fields are ignored so older files keep loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}
