use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};
use std::fmt;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    #[serde(alias = "avatarRef")]
    pub avatar: String,
    #[serde(default)]
    #[serde(alias = "isGroup")]
    pub is_group: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Idea,
    Proyecto,
    Text,
    Evento,
    Equipo,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Idea => "idea",
            PostType::Proyecto => "proyecto",
            PostType::Text => "text",
            PostType::Evento => "evento",
            PostType::Equipo => "equipo",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Post {
    pub author: Author,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub likes: u32,
    pub comments: u32,
    #[serde(alias = "timeAgo")]
    pub time_ago: String,
    #[serde(default)]
    #[serde(alias = "teamMembers")]
    pub team_members: u32,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub image: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    #[serde(alias = "groupName")]
    pub group_name: Option<String>,
}

// The four mutually exclusive reactions a viewer may attach to a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Love,
    #[serde(alias = "idea")]
    Interesting,
    #[serde(alias = "fire")]
    Great,
}

impl Reaction {
    pub const ALL: [Reaction; 4] = [
        Reaction::Like,
        Reaction::Love,
        Reaction::Interesting,
        Reaction::Great,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Reaction::Like => "Me gusta",
            Reaction::Love => "Me encanta",
            Reaction::Interesting => "Interesante",
            Reaction::Great => "Genial",
        }
    }
}

// One user's reaction to a post, as listed in the reactions dialog.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReactionEntry {
    #[serde(alias = "userId")]
    pub user_id: String,
    #[serde(alias = "userName")]
    pub user_name: String,
    #[serde(alias = "userAvatar")]
    pub user_avatar: String,
    #[serde(rename = "type")]
    pub kind: Reaction,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct CommentId(u64);

impl CommentId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CommentId {
    fn from(value: u64) -> Self {
        CommentId(value)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: Profile,
    pub content: String,
    pub likes: u32,
    #[serde(default)]
    #[serde(alias = "hasLiked")]
    pub has_liked: bool,
    #[serde(alias = "timeAgo")]
    pub time_ago: String,
    #[serde(alias = "timestamp")]
    pub timestamp_ms: i64,
    // data shape carried for parity, no operation populates these
    #[serde(default)]
    pub replies: Vec<Comment>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Message {
    pub id: u64,
    pub user: String,
    pub avatar: String,
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    #[serde(alias = "isCurrentUser")]
    pub is_current_user: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Join,
    Mention,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub user: Profile,
    pub content: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    #[serde(alias = "postPreview")]
    pub post_preview: Option<String>,
    #[serde(alias = "timeAgo")]
    pub time_ago: String,
    #[serde(default)]
    #[serde(alias = "isRead")]
    pub is_read: bool,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SuggestedUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub followers: String,
    #[serde(default)]
    #[serde(alias = "postsPerDay")]
    pub posts_per_day: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    #[serde(alias = "coverImage")]
    pub cover_image: Option<String>,
    #[serde(default)]
    #[serde(alias = "mutualConnections")]
    pub mutual_connections: u32,
}

pub fn hashtag_regex() -> &'static Regex {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"#([\p{L}\p{N}_]+)").unwrap();
    }
    &*RE
}

pub fn extract_hashtags(text: &str) -> Vec<String> {
    hashtag_regex()
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect()
}
