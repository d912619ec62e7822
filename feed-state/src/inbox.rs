use feed_model::{Notification, NotificationKind};

/// The notifications screen: a fixed list partitioned into unread and read.
#[derive(Clone, Debug, Default)]
pub struct NotificationInbox {
    notifications: Vec<Notification>,
}

impl NotificationInbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|notification| !notification.is_read)
            .count()
    }

    pub fn unread(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|notification| !notification.is_read)
            .collect()
    }

    pub fn read(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|notification| notification.is_read)
            .collect()
    }

    pub fn of_kind(&self, kind: NotificationKind) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|notification| notification.kind == kind)
            .collect()
    }
}
