// 候補リストとサジェスト用データソース

use std::collections::HashMap;

use crate::api_types::{Candidate, PlayerId};

/// Fixed candidate set with lookups by exact name and by id.
///
/// When names or ids repeat, the first candidate in the supplied order wins.
#[derive(Debug, Clone, Default)]
pub struct SuggestionSource {
    candidates: Vec<Candidate>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<PlayerId, usize>,
}

impl SuggestionSource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let mut by_name = HashMap::with_capacity(candidates.len());
        let mut by_id = HashMap::with_capacity(candidates.len());

        for (index, candidate) in candidates.iter().enumerate() {
            by_name.entry(candidate.name.clone()).or_insert(index);
            by_id.entry(candidate.id).or_insert(index);
        }

        Self {
            candidates,
            by_name,
            by_id,
        }
    }

    /// Exact-match lookup on the trimmed name. Blank input matches a blank name.
    pub fn find_by_name(&self, name: &str) -> Option<&Candidate> {
        self.by_name
            .get(name.trim())
            .map(|&index| &self.candidates[index])
    }

    pub fn find_by_id(&self, id: PlayerId) -> Option<&Candidate> {
        self.by_id.get(&id).map(|&index| &self.candidates[index])
    }

    /// One option per candidate, in candidate order
    pub fn options(&self) -> Vec<String> {
        self.candidates.iter().map(|c| c.name.clone()).collect()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}
