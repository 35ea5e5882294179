// Configuration constants for the player tag selector
// Element ids, key bindings and styling live here so templates and code agree

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::AppResult;

/// Element ids the host page provides
pub mod elements {
    /// Text field the user types player names into
    pub const INPUT_ID: &str = "player-input";

    /// Container the selected tags are rendered into
    pub const TAGS_ID: &str = "player-tags";

    /// Hidden form field holding the JSON-encoded selection
    pub const HIDDEN_ID: &str = "players_json";

    /// Suggestion list attached to the text field
    pub const DATALIST_ID: &str = "players-list";
}

/// Key bindings
pub mod keys {
    /// Key that confirms the typed name
    pub const SUBMIT: &str = "Enter";
}

/// Tag rendering constants
pub mod tags {
    /// CSS classes of one rendered tag
    pub const TAG_CLASS: &str = "inline-flex items-center max-h-[44px] bg-gradient-to-r from-red-500 to-red-600 text-white px-4 py-2 rounded-full text-sm font-bold shadow";

    /// CSS classes of the dismiss button inside a tag
    pub const DISMISS_CLASS: &str = "mr-3 text-white hover:text-gray-200 text-lg";

    /// Label of the dismiss button
    pub const DISMISS_LABEL: &str = "×";

    /// Data attribute carrying the player id on the dismiss button
    pub const ID_ATTRIBUTE: &str = "data-player-id";
}

/// Form and payload constants
pub mod form {
    /// Name of the submitted hidden field
    pub const FIELD_NAME: &str = "players_json";

    /// Display name for ids that match no player
    pub const UNKNOWN_PLAYER: &str = "Unknown";
}

/// Runtime configuration of one selector instance.
///
/// Every field falls back to the constants above, so a config file only needs
/// the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorConfig {
    pub input_id: String,
    pub tags_id: String,
    pub hidden_id: String,
    pub datalist_id: String,
    pub submit_key: String,
    pub tag_class: String,
    pub dismiss_class: String,
    pub dismiss_label: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            input_id: elements::INPUT_ID.to_string(),
            tags_id: elements::TAGS_ID.to_string(),
            hidden_id: elements::HIDDEN_ID.to_string(),
            datalist_id: elements::DATALIST_ID.to_string(),
            submit_key: keys::SUBMIT.to_string(),
            tag_class: tags::TAG_CLASS.to_string(),
            dismiss_class: tags::DISMISS_CLASS.to_string(),
            dismiss_label: tags::DISMISS_LABEL.to_string(),
        }
    }
}

impl SelectorConfig {
    /// JSON文字列から設定を読み込む
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSONファイルから設定を読み込む
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }
}
