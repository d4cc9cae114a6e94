//! Expansion State
//!
//! Tracks which blocks and sections are open in the sidebar tree. When
//! constructed with a storage key, every change is mirrored to local
//! storage under `{key}_blocks` / `{key}_sections`.

use crate::storage;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    expanded_blocks: HashSet<u32>,
    expanded_sections: HashSet<u32>,
    storage_key: Option<String>,
}

impl ExpansionState {
    /// Create empty state; with `Some(key)`, seed from persisted storage
    pub fn new(storage_key: Option<String>) -> Self {
        let (expanded_blocks, expanded_sections) = match &storage_key {
            Some(key) => (
                storage::load_id_set(&format!("{key}_blocks")),
                storage::load_id_set(&format!("{key}_sections")),
            ),
            None => (HashSet::new(), HashSet::new()),
        };
        Self {
            expanded_blocks,
            expanded_sections,
            storage_key,
        }
    }

    pub fn is_block_expanded(&self, id: u32) -> bool {
        self.expanded_blocks.contains(&id)
    }

    pub fn is_section_expanded(&self, id: u32) -> bool {
        self.expanded_sections.contains(&id)
    }

    pub fn toggle_block(&mut self, id: u32) {
        if !self.expanded_blocks.remove(&id) {
            self.expanded_blocks.insert(id);
        }
        self.persist();
    }

    pub fn toggle_section(&mut self, id: u32) {
        if !self.expanded_sections.remove(&id) {
            self.expanded_sections.insert(id);
        }
        self.persist();
    }

    pub fn expand_block(&mut self, id: u32) {
        self.expanded_blocks.insert(id);
        self.persist();
    }

    pub fn collapse_block(&mut self, id: u32) {
        self.expanded_blocks.remove(&id);
        self.persist();
    }

    pub fn expand_section(&mut self, id: u32) {
        self.expanded_sections.insert(id);
        self.persist();
    }

    pub fn collapse_section(&mut self, id: u32) {
        self.expanded_sections.remove(&id);
        self.persist();
    }

    /// Replace both sets wholesale (expand-all button)
    pub fn expand_all(&mut self, block_ids: &[u32], section_ids: &[u32]) {
        self.expanded_blocks = block_ids.iter().copied().collect();
        self.expanded_sections = section_ids.iter().copied().collect();
        self.persist();
    }

    pub fn collapse_all(&mut self) {
        self.expanded_blocks.clear();
        self.expanded_sections.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Some(key) = &self.storage_key {
            storage::save_id_set(&format!("{key}_blocks"), &self.expanded_blocks);
            storage::save_id_set(&format!("{key}_sections"), &self.expanded_sections);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_block_twice_restores_membership() {
        let mut state = ExpansionState::new(None);
        assert!(!state.is_block_expanded(7));
        state.toggle_block(7);
        assert!(state.is_block_expanded(7));
        state.toggle_block(7);
        assert!(!state.is_block_expanded(7));
    }

    #[test]
    fn test_expand_collapse_idempotent() {
        let mut state = ExpansionState::new(None);
        state.expand_section(3);
        state.expand_section(3);
        assert!(state.is_section_expanded(3));
        state.collapse_section(3);
        state.collapse_section(3);
        assert!(!state.is_section_expanded(3));
    }

    #[test]
    fn test_block_and_section_sets_are_independent() {
        let mut state = ExpansionState::new(None);
        state.expand_block(1);
        assert!(state.is_block_expanded(1));
        assert!(!state.is_section_expanded(1));
    }

    #[test]
    fn test_expand_all_replaces_both_sets() {
        let mut state = ExpansionState::new(None);
        state.expand_block(99);
        state.expand_all(&[1, 2], &[10]);
        assert!(!state.is_block_expanded(99));
        assert!(state.is_block_expanded(1));
        assert!(state.is_block_expanded(2));
        assert!(state.is_section_expanded(10));
    }

    #[test]
    fn test_collapse_all_clears_everything() {
        let mut state = ExpansionState::new(None);
        state.expand_all(&[1, 2], &[10, 11]);
        state.collapse_all();
        assert!(!state.is_block_expanded(1));
        assert!(!state.is_section_expanded(10));
    }
}
