use feed_model::{Comment, CommentId, Profile};
use itertools::Itertools;
use log::debug;
use std::cmp::Reverse;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortMode {
    /// Most-liked first, stable on insertion order for ties.
    Relevant,
    /// Newest first.
    Recent,
    /// Oldest first.
    Chronological,
}

/// Ordered collection of comments for one post. Operations never raise:
/// unknown ids and empty submissions degrade to no-ops.
#[derive(Clone, Debug)]
pub struct CommentStore {
    comments: Vec<Comment>,
    next_id: u64,
}

impl Default for CommentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentStore {
    pub fn new() -> Self {
        Self {
            comments: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_comments(comments: Vec<Comment>) -> Self {
        let next_id = comments
            .iter()
            .map(|comment| comment.id.value())
            .max()
            .unwrap_or(0)
            + 1;
        Self { comments, next_id }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    /// Prepends a fresh comment and returns its id, or `None` when the
    /// trimmed content is empty. Ids come from a monotonic counter rather
    /// than the wall clock, so rapid submissions cannot collide.
    pub fn add(&mut self, author: Profile, content: &str) -> Option<CommentId> {
        if content.trim().is_empty() {
            return None;
        }

        let id = CommentId::from(self.next_id);
        self.next_id += 1;

        let comment = Comment {
            id,
            author,
            content: content.to_string(),
            likes: 0,
            has_liked: false,
            time_ago: "Ahora".to_string(),
            timestamp_ms: now_ms(),
            replies: Vec::new(),
        };
        self.comments.insert(0, comment);
        Some(id)
    }

    pub fn toggle_like(&mut self, id: CommentId) {
        if let Some(comment) = self.comments.iter_mut().find(|comment| comment.id == id) {
            if comment.has_liked {
                // seed data may carry has_liked with zero likes
                comment.likes = comment.likes.saturating_sub(1);
            } else {
                comment.likes += 1;
            }
            comment.has_liked = !comment.has_liked;
        } else {
            debug!("toggle_like on unknown comment {}", id);
        }
    }

    pub fn remove(&mut self, id: CommentId) -> bool {
        let before = self.comments.len();
        self.comments.retain(|comment| comment.id != id);
        self.comments.len() != before
    }

    /// Pure projection, storage order untouched.
    pub fn sorted_view(&self, mode: SortMode) -> Vec<&Comment> {
        match mode {
            SortMode::Relevant => self
                .comments
                .iter()
                .sorted_by_key(|comment| Reverse(comment.likes))
                .collect(),
            SortMode::Recent => self
                .comments
                .iter()
                .sorted_by_key(|comment| Reverse(comment.timestamp_ms))
                .collect(),
            SortMode::Chronological => self
                .comments
                .iter()
                .sorted_by_key(|comment| comment.timestamp_ms)
                .collect(),
        }
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as i64)
        .unwrap_or(0)
}
