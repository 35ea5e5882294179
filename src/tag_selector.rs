use log::debug;

use crate::api_types::{Candidate, PlayerId, TagChip};
use crate::config::SelectorConfig;
use crate::selection::Selection;
use crate::suggestions::SuggestionSource;
use crate::view::TagView;

/// 複数プレイヤーを選択するタグ入力ウィジェット
///
/// Owns the selection of one widget instance. Every mutation re-renders the
/// tags and re-syncs the hidden field through the injected view.
pub struct TagSelector<V: TagView> {
    source: SuggestionSource,
    selection: Selection,
    view: V,
    config: SelectorConfig,
}

impl<V: TagView> TagSelector<V> {
    pub fn new(candidates: Vec<Candidate>, preselected: Vec<PlayerId>, view: V) -> Self {
        Self::with_config(candidates, preselected, view, SelectorConfig::default())
    }

    pub fn with_config(
        candidates: Vec<Candidate>,
        preselected: Vec<PlayerId>,
        view: V,
        config: SelectorConfig,
    ) -> Self {
        let mut selector = Self {
            source: SuggestionSource::new(candidates),
            selection: Selection::from_ids(preselected),
            view,
            config,
        };

        let options = selector.source.options();
        selector.view.install_suggestions(&options);

        // 初期選択の表示
        selector.render();
        selector.sync_hidden();
        selector
    }

    /// Selects the candidate whose name matches `name` exactly (after trimming).
    ///
    /// Unknown names and already-selected players are ignored and the text
    /// field keeps its content. Returns whether the selection changed.
    pub fn add(&mut self, name: &str) -> bool {
        let Some(id) = self.source.find_by_name(name).map(|c| c.id) else {
            debug!("Ignoring unknown player name: {:?}", name.trim());
            return false;
        };

        if !self.selection.insert(id) {
            debug!("Player {id} is already selected");
            return false;
        }

        debug!("Selected player {id}");
        self.render();
        self.sync_hidden();
        self.view.clear_input();
        true
    }

    /// Deselects `id`. Returns whether it was selected.
    pub fn remove(&mut self, id: PlayerId) -> bool {
        let removed = self.selection.remove(id);
        if removed {
            debug!("Deselected player {id}");
        } else {
            debug!("Player {id} was not selected");
        }

        self.render();
        self.sync_hidden();
        removed
    }

    /// Handles a key press in the text field.
    ///
    /// Returns `true` when the key was the submit key, in which case the host
    /// should suppress its default action even if nothing was added.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != self.config.submit_key {
            return false;
        }

        let text = self.view.input_value();
        self.add(&text);
        true
    }

    /// Rebuilds the tag list in selection order. Ids without a candidate are skipped.
    pub fn render(&mut self) {
        self.view.clear_tags();

        for &id in self.selection.ids() {
            let Some(candidate) = self.source.find_by_id(id) else {
                continue;
            };

            let chip = TagChip {
                id,
                label: candidate.name.clone(),
                class: self.config.tag_class.clone(),
                dismiss_label: self.config.dismiss_label.clone(),
            };
            self.view.append_tag(&chip);
        }
    }

    /// Writes the JSON-encoded selection into the hidden field
    pub fn sync_hidden(&mut self) {
        let value = self.selection.to_json();
        self.view.set_hidden_value(&value);
    }

    pub fn selection(&self) -> &[PlayerId] {
        self.selection.ids()
    }

    pub fn hidden_value(&self) -> String {
        self.selection.to_json()
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.source.candidates()
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.source.options()
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
