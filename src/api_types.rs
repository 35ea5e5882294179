// API型定義 - TypeScript自動生成対応
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of a selectable player
pub type PlayerId = i64;

// =============================================================================
// Core Domain Types
// =============================================================================

/// 選択候補となるプレイヤー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
pub struct Candidate {
    #[ts(type = "number")]
    pub id: PlayerId,
    pub name: String,
}

impl Candidate {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One rendered tag: the visible label plus the dismiss control for `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TagChip {
    #[ts(type = "number")]
    pub id: PlayerId,
    pub label: String,
    pub class: String,
    pub dismiss_label: String,
}

// =============================================================================
// Page Payload Types
// =============================================================================

/// ページテンプレートに埋め込む初期化データ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WidgetBootstrap {
    pub players: Vec<Candidate>,
    #[serde(default)]
    #[ts(type = "Array<number>")]
    pub selected_players: Vec<PlayerId>,
}

/// JSON schema of the bootstrap payload, for hosts that validate templates
pub fn bootstrap_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(WidgetBootstrap)
}
