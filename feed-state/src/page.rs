use crate::card::PostCard;
use crate::filter::{FeedFilter, FilterState};
use crate::provider::ContentProvider;
use log::debug;

/// The feed screen: the canonical post list (one card per post, in seed
/// order) plus the active category filter. Cards own their interaction
/// state; the page only derives the visible subset.
pub struct FeedPage {
    cards: Vec<PostCard>,
    filter: FeedFilter,
}

impl FeedPage {
    pub fn from_provider(provider: &dyn ContentProvider) -> Self {
        let cards = provider
            .posts()
            .into_iter()
            .map(|post| {
                let comments = provider.comments(&post.title);
                let reactions = provider.reactions(&post.title);
                PostCard::new(post, comments, reactions)
            })
            .collect();
        Self {
            cards,
            filter: FeedFilter::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    /// Index into the canonical (unfiltered) order.
    pub fn card_mut(&mut self, index: usize) -> Option<&mut PostCard> {
        self.cards.get_mut(index)
    }

    pub fn active_filter(&self) -> FilterState {
        self.filter.active()
    }

    pub fn select_filter(&mut self, filter: FilterState) -> FilterState {
        let active = self.filter.select(filter);
        debug!("feed filter now {:?}", active);
        active
    }

    pub fn clear_filter(&mut self) {
        self.filter.reset();
    }

    pub fn visible(&self) -> Vec<&PostCard> {
        self.cards
            .iter()
            .filter(|card| self.filter.active().allows(card.post().post_type))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    /// The "Mostrando N resultados" banner, only while a filter is active.
    pub fn result_banner(&self) -> Option<String> {
        if self.filter.active() == FilterState::All {
            return None;
        }
        let count = self.visible_count();
        let noun = if count == 1 { "resultado" } else { "resultados" };
        Some(format!("Mostrando {} {}", count, noun))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_model::{Author, Post, PostType};

    struct FixedPosts(Vec<Post>);

    impl ContentProvider for FixedPosts {
        fn posts(&self) -> Vec<Post> {
            self.0.clone()
        }
        fn comments(&self, _post_title: &str) -> Vec<feed_model::Comment> {
            Vec::new()
        }
        fn reactions(&self, _post_title: &str) -> Vec<feed_model::ReactionEntry> {
            Vec::new()
        }
        fn messages(&self) -> Vec<feed_model::Message> {
            Vec::new()
        }
        fn notifications(&self) -> Vec<feed_model::Notification> {
            Vec::new()
        }
        fn suggested_users(&self) -> Vec<feed_model::SuggestedUser> {
            Vec::new()
        }
    }

    fn post(title: &str, post_type: PostType) -> Post {
        Post {
            author: Author {
                name: "Juan Pérez".to_string(),
                role: "Estudiante".to_string(),
                avatar: String::new(),
                is_group: false,
            },
            title: title.to_string(),
            description: String::new(),
            category: String::new(),
            post_type,
            likes: 0,
            comments: 0,
            time_ago: String::new(),
            team_members: 0,
            participants: Vec::new(),
            image: None,
            group_name: None,
        }
    }

    fn page() -> FeedPage {
        FeedPage::from_provider(&FixedPosts(vec![
            post("a", PostType::Evento),
            post("b", PostType::Text),
            post("c", PostType::Idea),
            post("d", PostType::Proyecto),
        ]))
    }

    #[test]
    fn banner_only_appears_under_an_active_filter() {
        let mut page = page();
        assert_eq!(page.result_banner(), None);
        page.select_filter(FilterState::Proyecto);
        assert_eq!(
            page.result_banner().unwrap(),
            "Mostrando 1 resultado".to_string()
        );
        page.select_filter(FilterState::Proyecto);
        assert_eq!(page.result_banner(), None);
    }

    #[test]
    fn card_state_survives_filter_changes() {
        let mut page = page();
        page.card_mut(2)
            .unwrap()
            .react(feed_model::Reaction::Love, &crate::notify::NullNotify);
        page.select_filter(FilterState::Idea);
        assert_eq!(page.visible_count(), 1);
        assert_eq!(page.visible()[0].like_count(), 1);
        page.select_filter(FilterState::Idea);
        assert_eq!(page.cards()[2].like_count(), 1);
    }
}
