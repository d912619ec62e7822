use crate::notify::Notify;
use feed_model::SuggestedUser;
use std::collections::HashSet;

/// The "suggested users" rail: follow is idempotent, dismiss removes the
/// suggestion outright. Unknown ids are no-ops.
#[derive(Clone, Debug, Default)]
pub struct SuggestedPeople {
    users: Vec<SuggestedUser>,
    followed: HashSet<String>,
}

impl SuggestedPeople {
    pub fn new(users: Vec<SuggestedUser>) -> Self {
        Self {
            users,
            followed: HashSet::new(),
        }
    }

    pub fn users(&self) -> &[SuggestedUser] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn is_followed(&self, id: &str) -> bool {
        self.followed.contains(id)
    }

    pub fn followed_count(&self) -> usize {
        self.followed.len()
    }

    pub fn follow(&mut self, id: &str, notify: &dyn Notify) -> bool {
        let name = match self.users.iter().find(|user| user.id == id) {
            Some(user) => user.name.clone(),
            None => return false,
        };
        if !self.followed.insert(id.to_string()) {
            return false;
        }
        notify.notify("Usuario seguido", &format!("Ahora sigues a {}", name));
        true
    }

    pub fn dismiss(&mut self, id: &str, notify: &dyn Notify) -> bool {
        let name = match self.users.iter().find(|user| user.id == id) {
            Some(user) => user.name.clone(),
            None => return false,
        };
        self.users.retain(|user| user.id != id);
        notify.notify(
            "Usuario suprimido",
            &format!("{} ya no aparecerá en tus sugerencias", name),
        );
        true
    }
}

/// The follow button on the profile screen: a plain viewer-local toggle
/// between "Seguir" and "Siguiendo".
#[derive(Clone, Debug, Default)]
pub struct ProfileFollow {
    is_following: bool,
}

impl ProfileFollow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_following(&self) -> bool {
        self.is_following
    }

    pub fn toggle(&mut self) -> bool {
        self.is_following = !self.is_following;
        self.is_following
    }

    pub fn label(&self) -> &'static str {
        if self.is_following {
            "Siguiendo"
        } else {
            "Seguir"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotify;

    fn user(id: &str, name: &str) -> SuggestedUser {
        SuggestedUser {
            id: id.to_string(),
            name: name.to_string(),
            avatar: String::new(),
            followers: "125 mil seguidores".to_string(),
            posts_per_day: "+5 publicaciones al día".to_string(),
            cover_image: None,
            mutual_connections: 20,
        }
    }

    #[test]
    fn follow_is_idempotent_and_notifies_once() {
        let mut people = SuggestedPeople::new(vec![user("1", "Ana Martínez")]);
        let notify = MemoryNotify::new();
        assert!(people.follow("1", &notify));
        assert!(!people.follow("1", &notify));
        assert_eq!(people.followed_count(), 1);
        assert_eq!(notify.len(), 1);
        assert_eq!(notify.toasts()[0].1, "Ahora sigues a Ana Martínez");
    }

    #[test]
    fn dismiss_shrinks_the_rail_by_one() {
        let mut people =
            SuggestedPeople::new(vec![user("1", "Ana Martínez"), user("2", "Pedro López")]);
        let notify = MemoryNotify::new();
        assert!(people.dismiss("2", &notify));
        assert_eq!(people.users().len(), 1);
        assert!(!people.dismiss("2", &notify));
        assert_eq!(notify.len(), 1);
    }

    #[test]
    fn profile_follow_toggles_between_the_two_labels() {
        let mut follow = ProfileFollow::new();
        assert_eq!(follow.label(), "Seguir");
        assert!(follow.toggle());
        assert_eq!(follow.label(), "Siguiendo");
        assert!(!follow.toggle());
        assert!(!follow.is_following());
        assert_eq!(follow.label(), "Seguir");
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut people = SuggestedPeople::new(vec![user("1", "Ana Martínez")]);
        let notify = MemoryNotify::new();
        assert!(!people.follow("99", &notify));
        assert!(!people.dismiss("99", &notify));
        assert!(notify.is_empty());
    }
}
