use feed_model::Reaction;

/// Result of applying one reaction click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReactionOutcome {
    pub selected: Option<Reaction>,
    pub like_delta: i32,
}

/// Tracks the viewer's single selected reaction on one post and the like
/// count derived from it. At most one reaction is active at a time.
#[derive(Clone, Debug)]
pub struct ReactionEngine {
    base_likes: u32,
    selected: Option<Reaction>,
}

impl ReactionEngine {
    pub fn new(base_likes: u32) -> Self {
        Self {
            base_likes,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<Reaction> {
        self.selected
    }

    pub fn like_count(&self) -> u32 {
        match self.selected {
            Some(_) => self.base_likes + 1,
            None => self.base_likes,
        }
    }

    /// Clicking the active reaction deselects it; a first click selects;
    /// clicking a different reaction swaps without changing the count.
    pub fn select(&mut self, clicked: Reaction) -> ReactionOutcome {
        let outcome = match self.selected {
            Some(current) if current == clicked => ReactionOutcome {
                selected: None,
                like_delta: -1,
            },
            Some(_) => ReactionOutcome {
                selected: Some(clicked),
                like_delta: 0,
            },
            None => ReactionOutcome {
                selected: Some(clicked),
                like_delta: 1,
            },
        };
        self.selected = outcome.selected;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_selection_increments_once() {
        let mut engine = ReactionEngine::new(45);
        let outcome = engine.select(Reaction::Love);
        assert_eq!(outcome.selected, Some(Reaction::Love));
        assert_eq!(outcome.like_delta, 1);
        assert_eq!(engine.like_count(), 46);
    }

    #[test]
    fn selecting_twice_restores_the_original_count() {
        let mut engine = ReactionEngine::new(45);
        engine.select(Reaction::Like);
        let outcome = engine.select(Reaction::Like);
        assert_eq!(outcome.selected, None);
        assert_eq!(outcome.like_delta, -1);
        assert_eq!(engine.selected(), None);
        assert_eq!(engine.like_count(), 45);
    }

    #[test]
    fn swapping_reactions_keeps_the_count() {
        let mut engine = ReactionEngine::new(45);
        engine.select(Reaction::Like);
        let outcome = engine.select(Reaction::Great);
        assert_eq!(outcome.selected, Some(Reaction::Great));
        assert_eq!(outcome.like_delta, 0);
        assert_eq!(engine.like_count(), 46);
    }

    #[test]
    fn count_stays_within_one_of_base_for_any_sequence() {
        let mut engine = ReactionEngine::new(3);
        let clicks = [
            Reaction::Like,
            Reaction::Like,
            Reaction::Love,
            Reaction::Interesting,
            Reaction::Interesting,
            Reaction::Great,
            Reaction::Like,
            Reaction::Like,
        ];
        for clicked in clicks {
            engine.select(clicked);
            assert!(engine.like_count() >= 3);
            assert!(engine.like_count() <= 4);
        }
    }
}
