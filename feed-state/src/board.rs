use feed_model::Message;
use std::time::{SystemTime, UNIX_EPOCH};

/// The group chat on the messages screen: an append-only message list plus
/// the viewer's send box.
#[derive(Clone, Debug)]
pub struct MessageBoard {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageBoard {
    pub fn new(messages: Vec<Message>) -> Self {
        let next_id = messages
            .iter()
            .map(|message| message.id)
            .max()
            .unwrap_or(0)
            + 1;
        Self { messages, next_id }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a message from the viewer, or no-ops when the trimmed
    /// content is empty.
    pub fn send(&mut self, content: &str) -> Option<&Message> {
        if content.trim().is_empty() {
            return None;
        }

        let message = Message {
            id: self.next_id,
            user: "Tú".to_string(),
            avatar: "/placeholder.svg".to_string(),
            content: content.to_string(),
            timestamp: clock_label(),
            is_current_user: true,
        };
        self.next_id += 1;
        self.messages.push(message);
        self.messages.last()
    }
}

// Display label only, the mockup never compares timestamps.
fn clock_label() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0);
    format!("{:02}:{:02}", (secs / 3600) % 24, (secs / 60) % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<Message> {
        vec![
            Message {
                id: 1,
                user: "María García".to_string(),
                avatar: "/placeholder.svg".to_string(),
                content: "¿Alguien tiene apuntes de la clase de algoritmos?".to_string(),
                timestamp: "10:30".to_string(),
                is_current_user: false,
            },
            Message {
                id: 2,
                user: "Carlos Ruiz".to_string(),
                avatar: "/placeholder.svg".to_string(),
                content: "Sí, yo los tengo.".to_string(),
                timestamp: "10:32".to_string(),
                is_current_user: false,
            },
        ]
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let mut board = MessageBoard::new(seed());
        assert!(board.send("").is_none());
        assert!(board.send("   ").is_none());
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn send_appends_at_the_tail_with_a_fresh_id() {
        let mut board = MessageBoard::new(seed());
        let id = board.send("Gracias por recordarlo!").unwrap().id;
        assert_eq!(id, 3);
        assert_eq!(board.len(), 3);
        let last = board.messages().last().unwrap();
        assert_eq!(last.content, "Gracias por recordarlo!");
        assert!(last.is_current_user);
        assert_eq!(last.user, "Tú");
    }
}
