use feed_model::{Comment, Message, Notification, Post, ReactionEntry, SuggestedUser};
use feed_state::ContentProvider;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error as ThisError;

static FIXTURE: &str = include_str!("fixture.json");

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Failed to parse seed fixture, cause: {0}")]
    Fixture(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SeedData {
    posts: Vec<Post>,
    #[serde(default)]
    comments: HashMap<String, Vec<Comment>>,
    #[serde(default)]
    reactions: HashMap<String, Vec<ReactionEntry>>,
    #[serde(default)]
    messages: Vec<Message>,
    #[serde(default)]
    notifications: Vec<Notification>,
    #[serde(default)]
    #[serde(alias = "suggestedUsers")]
    suggested_users: Vec<SuggestedUser>,
}

/// Content provider backed by the JSON fixture embedded in the crate. This
/// stands in for the backend; swapping in a real one only means another
/// `ContentProvider` implementation.
pub struct JsonContent {
    data: SeedData,
}

impl JsonContent {
    pub fn new() -> Result<Self, Error> {
        Self::from_json(FIXTURE)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let data: SeedData = serde_json::from_str(json)?;
        info!("loaded {} seed posts", data.posts.len());
        Ok(Self { data })
    }
}

impl ContentProvider for JsonContent {
    fn posts(&self) -> Vec<Post> {
        self.data.posts.clone()
    }

    fn comments(&self, post_title: &str) -> Vec<Comment> {
        self.data
            .comments
            .get(post_title)
            .cloned()
            .unwrap_or_default()
    }

    fn reactions(&self, post_title: &str) -> Vec<ReactionEntry> {
        self.data
            .reactions
            .get(post_title)
            .cloned()
            .unwrap_or_default()
    }

    fn messages(&self) -> Vec<Message> {
        self.data.messages.clone()
    }

    fn notifications(&self) -> Vec<Notification> {
        self.data.notifications.clone()
    }

    fn suggested_users(&self) -> Vec<SuggestedUser> {
        self.data.suggested_users.clone()
    }
}
