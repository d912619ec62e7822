use crate::comments::{CommentStore, SortMode};
use crate::notify::{Clipboard, Notify};
use crate::reaction::ReactionEngine;
use crate::roster::ParticipantRoster;
use crate::tally::ReactionTally;
use feed_model::{Comment, CommentId, Post, PostType, Profile, Reaction, ReactionEntry};
use log::debug;

/// Display name the mockup uses for the local viewer.
pub const VIEWER_NAME: &str = "Tú";

fn viewer_profile() -> Profile {
    Profile {
        name: VIEWER_NAME.to_string(),
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=You".to_string(),
    }
}

/// One post plus the viewer-local interaction state hanging off it. Card
/// state is isolated per post and never flows back into the feed's post
/// list.
pub struct PostCard {
    post: Post,
    reactions: ReactionEngine,
    comments: CommentStore,
    roster: ParticipantRoster,
    tally: ReactionTally,
}

impl PostCard {
    pub fn new(post: Post, comments: Vec<Comment>, reactions: Vec<ReactionEntry>) -> Self {
        let engine = ReactionEngine::new(post.likes);
        let roster = ParticipantRoster::new(post.participants.clone());
        Self {
            post,
            reactions: engine,
            comments: CommentStore::with_comments(comments),
            roster,
            tally: ReactionTally::new(reactions),
        }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn like_count(&self) -> u32 {
        self.reactions.like_count()
    }

    pub fn selected_reaction(&self) -> Option<Reaction> {
        self.reactions.selected()
    }

    pub fn comments(&self) -> &CommentStore {
        &self.comments
    }

    pub fn roster(&self) -> &ParticipantRoster {
        &self.roster
    }

    pub fn tally(&self) -> &ReactionTally {
        &self.tally
    }

    /// Applies one reaction click. Select and swap confirm through the
    /// sink; a pure deselect stays quiet.
    pub fn react(&mut self, clicked: Reaction, notify: &dyn Notify) {
        let outcome = self.reactions.select(clicked);
        if outcome.selected.is_some() {
            notify.notify(
                "Reacción añadida",
                &format!("Has reaccionado con: {}", clicked.label()),
            );
        }
    }

    /// Joining only applies to idea posts; the rest of the feed renders no
    /// join affordance.
    pub fn join(&mut self, notify: &dyn Notify) {
        if self.post.post_type != PostType::Idea {
            debug!("join ignored on {} post", self.post.post_type);
            return;
        }
        if self.roster.join(VIEWER_NAME) {
            notify.notify("¡Te has unido!", "Ahora eres parte de esta idea");
        }
    }

    pub fn add_comment(&mut self, content: &str, notify: &dyn Notify) -> Option<CommentId> {
        match self.comments.add(viewer_profile(), content) {
            Some(id) => {
                notify.notify("Comentario publicado", "Tu comentario ha sido añadido");
                Some(id)
            }
            None => {
                notify.notify("Comentario vacío", "Por favor escribe algo");
                None
            }
        }
    }

    pub fn toggle_comment_like(&mut self, id: CommentId) {
        self.comments.toggle_like(id);
    }

    pub fn remove_comment(&mut self, id: CommentId, notify: &dyn Notify) {
        if self.comments.remove(id) {
            notify.notify("Comentario eliminado", "El comentario ha sido eliminado");
        }
    }

    pub fn sorted_comments(&self, mode: SortMode) -> Vec<&Comment> {
        self.comments.sorted_view(mode)
    }

    /// Copies "{title}\n\n{description}" into the clipboard collaborator,
    /// reporting the outcome through the sink.
    pub fn copy_text(&self, clipboard: &dyn Clipboard, notify: &dyn Notify) {
        let text = format!("{}\n\n{}", self.post.title, self.post.description);
        if clipboard.write(&text) {
            notify.notify(
                "Texto copiado",
                "El contenido ha sido copiado al portapapeles",
            );
        } else {
            notify.notify("Error al copiar", "No se pudo acceder al portapapeles");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{MemoryClipboard, MemoryNotify, NullNotify};
    use feed_model::Author;

    fn idea_post() -> Post {
        Post {
            author: Author {
                name: "María González".to_string(),
                role: "Ingeniería en Sistemas".to_string(),
                avatar: String::new(),
                is_group: false,
            },
            title: "App de Mentoría Estudiantil".to_string(),
            description: "Busco desarrolladores y diseñadores.".to_string(),
            category: "Tecnología".to_string(),
            post_type: PostType::Idea,
            likes: 45,
            comments: 12,
            time_ago: "Hace 2 horas".to_string(),
            team_members: 0,
            participants: vec!["María González".to_string(), "Carlos Ruiz".to_string()],
            image: None,
            group_name: None,
        }
    }

    #[test]
    fn deselecting_emits_no_confirmation() {
        let mut card = PostCard::new(idea_post(), Vec::new(), Vec::new());
        let notify = MemoryNotify::new();
        card.react(Reaction::Love, &notify);
        card.react(Reaction::Love, &notify);
        assert_eq!(notify.len(), 1);
        assert_eq!(card.like_count(), 45);
        assert_eq!(card.selected_reaction(), None);
    }

    #[test]
    fn swapping_confirms_with_the_new_label() {
        let mut card = PostCard::new(idea_post(), Vec::new(), Vec::new());
        let notify = MemoryNotify::new();
        card.react(Reaction::Like, &notify);
        card.react(Reaction::Great, &notify);
        let toasts = notify.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[1].1, "Has reaccionado con: Genial");
        assert_eq!(card.like_count(), 46);
    }

    #[test]
    fn join_is_idempotent_and_only_confirms_once() {
        let mut card = PostCard::new(idea_post(), Vec::new(), Vec::new());
        let notify = MemoryNotify::new();
        card.join(&notify);
        card.join(&notify);
        assert_eq!(card.roster().len(), 3);
        assert_eq!(notify.len(), 1);
        assert_eq!(notify.titles()[0], "¡Te has unido!");
    }

    #[test]
    fn join_ignores_non_idea_posts() {
        let mut post = idea_post();
        post.post_type = PostType::Proyecto;
        post.participants = Vec::new();
        let mut card = PostCard::new(post, Vec::new(), Vec::new());
        let notify = MemoryNotify::new();
        card.join(&notify);
        assert!(card.roster().is_empty());
        assert!(notify.is_empty());
    }

    #[test]
    fn empty_comment_warns_and_changes_nothing() {
        let mut card = PostCard::new(idea_post(), Vec::new(), Vec::new());
        let notify = MemoryNotify::new();
        assert!(card.add_comment("   ", &notify).is_none());
        assert!(card.comments().is_empty());
        assert_eq!(notify.titles(), vec!["Comentario vacío".to_string()]);
    }

    #[test]
    fn copy_text_joins_title_and_description() {
        let card = PostCard::new(idea_post(), Vec::new(), Vec::new());
        let clipboard = MemoryClipboard::new();
        card.copy_text(&clipboard, &NullNotify);
        assert_eq!(
            clipboard.contents().unwrap(),
            "App de Mentoría Estudiantil\n\nBusco desarrolladores y diseñadores."
        );
    }
}
