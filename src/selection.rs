use crate::api_types::PlayerId;

/// Ordered, duplicate-free list of selected player ids.
///
/// Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<PlayerId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from preselected ids, keeping the first occurrence of each.
    pub fn from_ids(ids: impl IntoIterator<Item = PlayerId>) -> Self {
        let mut selection = Self::new();
        for id in ids {
            selection.insert(id);
        }
        selection
    }

    /// Appends `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: PlayerId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes `id`. Returns whether it was present.
    pub fn remove(&mut self, id: PlayerId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&selected| selected != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[PlayerId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Compact JSON array of the ids, e.g. `[1,2]`
    pub fn to_json(&self) -> String {
        serde_json::Value::from(self.ids.clone()).to_string()
    }
}
