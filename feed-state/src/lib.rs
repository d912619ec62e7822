pub mod board;
pub mod card;
pub mod comments;
pub mod composer;
pub mod filter;
pub mod inbox;
pub mod notify;
pub mod page;
pub mod people;
pub mod provider;
pub mod reaction;
pub mod roster;
pub mod tally;

pub use card::PostCard;
pub use comments::{CommentStore, SortMode};
pub use filter::{FeedFilter, FilterState};
pub use notify::{Clipboard, Notify};
pub use page::FeedPage;
pub use provider::ContentProvider;
pub use reaction::ReactionEngine;
pub use roster::ParticipantRoster;
