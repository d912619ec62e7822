//! Create-post form drafts. Submission either rejects with a single
//! user-facing warning and no state change, or confirms success through
//! the notification sink. The mockup publishes nothing.

use crate::notify::Notify;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One attachment slot. File reads complete via a callback that performs a
/// single assignment; a later selection simply overwrites an earlier one
/// (last-writer-wins, no sequencing, no cancellation).
#[derive(Clone, Debug, Default)]
pub struct MediaSlot {
    preview: Option<(MediaKind, String)>,
}

impl MediaSlot {
    pub fn attach(&mut self, kind: MediaKind, data: impl Into<String>) {
        self.preview = Some((kind, data.into()));
    }

    pub fn clear(&mut self) {
        self.preview = None;
    }

    pub fn preview(&self) -> Option<(MediaKind, &str)> {
        self.preview
            .as_ref()
            .map(|(kind, data)| (*kind, data.as_str()))
    }
}

#[derive(Clone, Debug, Default)]
pub struct TextPostDraft {
    pub content: String,
    pub media: MediaSlot,
}

impl TextPostDraft {
    pub fn submit(&self, notify: &dyn Notify) -> bool {
        if self.content.trim().is_empty() {
            notify.notify("Publicación vacía", "Por favor escribe algo");
            return false;
        }
        notify.notify(
            "¡Publicación creada exitosamente!",
            "Tu publicación ya está en el feed",
        );
        true
    }
}

#[derive(Clone, Debug, Default)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub event_type: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub mode: String,
    pub capacity: Option<u32>,
}

impl EventDraft {
    pub fn submit(&self, notify: &dyn Notify) -> bool {
        let required = [
            &self.name,
            &self.description,
            &self.event_type,
            &self.date,
            &self.time,
            &self.location,
            &self.mode,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            notify.notify("Faltan datos", "Completa los campos obligatorios del evento");
            return false;
        }
        notify.notify("Evento creado", "Tu evento ha sido publicado");
        true
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub stage: String,
    pub team_size: Option<u32>,
    pub url: Option<String>,
}

impl ProjectDraft {
    pub fn submit(&self, notify: &dyn Notify) -> bool {
        let required = [&self.title, &self.description, &self.category, &self.stage];
        if required.iter().any(|field| field.trim().is_empty()) || self.team_size.is_none() {
            notify.notify(
                "Faltan datos",
                "Completa los campos obligatorios del proyecto",
            );
            return false;
        }
        notify.notify("Proyecto creado", "Tu proyecto ha sido publicado");
        true
    }
}

#[derive(Clone, Debug, Default)]
pub struct TeamDraft {
    pub name: String,
    pub description: String,
    pub area: String,
    pub skills: String,
    pub size_limit: Option<u32>,
    pub image: MediaSlot,
}

impl TeamDraft {
    pub fn submit(&self, notify: &dyn Notify) -> bool {
        let required = [&self.name, &self.description, &self.area, &self.skills];
        if required.iter().any(|field| field.trim().is_empty()) {
            notify.notify("Faltan datos", "Completa los campos obligatorios del equipo");
            return false;
        }
        notify.notify("Equipo creado", "Tu equipo ha sido publicado");
        true
    }
}
