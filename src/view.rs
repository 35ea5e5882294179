// TagView - 画面要素への操作を抽象化
// DOMが無い環境でもセレクタを動かせるように責務を分離

use crate::api_types::TagChip;

/// Element operations the selector needs from its host
pub trait TagView {
    /// Attaches the suggestion options to the text field
    fn install_suggestions(&mut self, names: &[String]);

    /// Current content of the text field
    fn input_value(&self) -> String;

    fn clear_input(&mut self);

    /// Removes every rendered tag
    fn clear_tags(&mut self);

    fn append_tag(&mut self, chip: &TagChip);

    /// Writes the serialized selection into the hidden field
    fn set_hidden_value(&mut self, value: &str);
}

/// In-memory view for tests and headless hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub input: String,
    pub tags: Vec<TagChip>,
    pub hidden_value: String,
    pub suggestions: Vec<String>,
    pub render_count: usize,
    pub sync_count: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user typing into the text field
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Labels of the rendered tags, in display order
    pub fn tag_labels(&self) -> Vec<&str> {
        self.tags.iter().map(|chip| chip.label.as_str()).collect()
    }
}

impl TagView for MemoryView {
    fn install_suggestions(&mut self, names: &[String]) {
        self.suggestions = names.to_vec();
    }

    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn clear_tags(&mut self) {
        self.tags.clear();
        self.render_count += 1;
    }

    fn append_tag(&mut self, chip: &TagChip) {
        self.tags.push(chip.clone());
    }

    fn set_hidden_value(&mut self, value: &str) {
        self.hidden_value = value.to_string();
        self.sync_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_view_records_operations() {
        let mut view = MemoryView::new();
        view.type_text("Bob");
        assert_eq!(view.input_value(), "Bob");

        view.clear_tags();
        view.append_tag(&TagChip {
            id: 2,
            label: "Bob".to_string(),
            class: "tag".to_string(),
            dismiss_label: "×".to_string(),
        });
        view.set_hidden_value("[2]");
        view.clear_input();

        assert_eq!(view.tag_labels(), vec!["Bob"]);
        assert_eq!(view.hidden_value, "[2]");
        assert!(view.input.is_empty());
        assert_eq!(view.render_count, 1);
        assert_eq!(view.sync_count, 1);
    }
}
