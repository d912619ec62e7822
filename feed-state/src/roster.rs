/// Participants of an idea post. Joining is irreversible in this mockup:
/// there is no leave operation, and a second join is blocked by the
/// `has_joined` flag rather than by set semantics.
#[derive(Clone, Debug, Default)]
pub struct ParticipantRoster {
    participants: Vec<String>,
    has_joined: bool,
}

/// Compact display form: the first three names plus a "+N more" count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterPreview {
    pub shown: Vec<String>,
    pub extra: usize,
}

impl ParticipantRoster {
    pub fn new(participants: Vec<String>) -> Self {
        Self {
            participants,
            has_joined: false,
        }
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn has_joined(&self) -> bool {
        self.has_joined
    }

    /// Returns true when the viewer was actually added.
    pub fn join(&mut self, viewer: &str) -> bool {
        if self.has_joined {
            return false;
        }
        self.participants.push(viewer.to_string());
        self.has_joined = true;
        true
    }

    pub fn preview(&self) -> RosterPreview {
        RosterPreview {
            shown: self.participants.iter().take(3).cloned().collect(),
            extra: self.participants.len().saturating_sub(3),
        }
    }
}
