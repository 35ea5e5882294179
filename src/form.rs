// フォーム送信側の処理
// 隠しフィールドの復元とテンプレート用の初期化データ

use std::collections::HashSet;

use crate::api_types::{Candidate, PlayerId, WidgetBootstrap};
use crate::config::form;
use crate::errors::{AppError, AppResult};

/// Decodes the submitted hidden field.
///
/// The value must be a JSON array of ids without repeats. Ids are not checked
/// against the candidate list.
pub fn decode_submission(raw: &str) -> AppResult<Vec<PlayerId>> {
    let ids: Vec<PlayerId> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(duplicate) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(AppError::validation(
            form::FIELD_NAME,
            format!("duplicate player {duplicate}"),
        ));
    }

    Ok(ids)
}

/// Decodes a stored id list. A missing or blank value is an empty list.
pub fn decode_stored(raw: Option<&str>) -> AppResult<Vec<PlayerId>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_str(value)?),
    }
}

/// Display names for `ids`, in order. Unknown ids get a placeholder name.
pub fn player_names(ids: &[PlayerId], candidates: &[Candidate]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            candidates
                .iter()
                .find(|c| c.id == *id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| form::UNKNOWN_PLAYER.to_string())
        })
        .collect()
}

impl WidgetBootstrap {
    pub fn new(players: Vec<Candidate>, selected_players: Vec<PlayerId>) -> Self {
        Self {
            players,
            selected_players,
        }
    }

    /// Parses the two JSON values a page template embeds
    pub fn from_template(players_json: &str, selected_json: &str) -> AppResult<Self> {
        let players: Vec<Candidate> = serde_json::from_str(players_json)?;
        let selected_players = decode_stored(Some(selected_json))?;
        Ok(Self::new(players, selected_players))
    }

    /// JSON of the candidate list, as `[{"id":1,"name":"..."}]`
    pub fn players_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.players)?)
    }

    /// JSON of the preselected ids, as `[1,2]`
    pub fn selected_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.selected_players)?)
    }
}
