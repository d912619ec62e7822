use feed_model::{Reaction, ReactionEntry};
use itertools::Itertools;
use std::collections::HashMap;

/// Who reacted with what, grouped for the reactions dialog.
#[derive(Clone, Debug, Default)]
pub struct ReactionTally {
    entries: Vec<ReactionEntry>,
}

impl ReactionTally {
    pub fn new(entries: Vec<ReactionEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ReactionEntry] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn counts(&self) -> HashMap<Reaction, usize> {
        self.entries.iter().map(|entry| entry.kind).counts()
    }

    pub fn of_kind(&self, kind: Reaction) -> Vec<&ReactionEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .collect()
    }
}
