use feed_model::{Post, PostType};

/// The single active category constraining which posts render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterState {
    #[default]
    All,
    Proyecto,
    Equipo,
    Idea,
    Evento,
    Text,
}

impl FilterState {
    pub fn allows(&self, post_type: PostType) -> bool {
        match self {
            FilterState::All => true,
            FilterState::Proyecto => post_type == PostType::Proyecto,
            FilterState::Equipo => post_type == PostType::Equipo,
            FilterState::Idea => post_type == PostType::Idea,
            FilterState::Evento => post_type == PostType::Evento,
            FilterState::Text => post_type == PostType::Text,
        }
    }
}

impl From<PostType> for FilterState {
    fn from(post_type: PostType) -> Self {
        match post_type {
            PostType::Proyecto => FilterState::Proyecto,
            PostType::Equipo => FilterState::Equipo,
            PostType::Idea => FilterState::Idea,
            PostType::Evento => FilterState::Evento,
            PostType::Text => FilterState::Text,
        }
    }
}

/// Category filter over the feed. Selecting the active category toggles
/// back to `All`; selecting anything else moves straight there.
#[derive(Clone, Debug, Default)]
pub struct FeedFilter {
    active: FilterState,
}

impl FeedFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> FilterState {
        self.active
    }

    pub fn select(&mut self, filter: FilterState) -> FilterState {
        self.active = if self.active == filter {
            FilterState::All
        } else {
            filter
        };
        self.active
    }

    /// The "Ver todo" escape hatch.
    pub fn reset(&mut self) {
        self.active = FilterState::All;
    }

    /// Pure projection of the visible subset, recomputed on every call.
    pub fn visible<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts
            .iter()
            .filter(|post| self.active.allows(post.post_type))
            .collect()
    }
}
