use feed_model::{Comment, Message, Notification, Post, ReactionEntry, SuggestedUser};

/// Source of the seed content every screen starts from. The mockup keys
/// per-post collections by title; a real backend would substitute stable
/// ids behind the same seam.
pub trait ContentProvider {
    fn posts(&self) -> Vec<Post>;
    fn comments(&self, post_title: &str) -> Vec<Comment>;
    fn reactions(&self, post_title: &str) -> Vec<ReactionEntry>;
    fn messages(&self) -> Vec<Message>;
    fn notifications(&self) -> Vec<Notification>;
    fn suggested_users(&self) -> Vec<SuggestedUser>;
}
