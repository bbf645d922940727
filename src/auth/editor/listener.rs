//! Change notification for the role editor

use super::RoleDraft;

/// Receives the draft after every change
pub trait RoleEditorListener {
    fn on_change(&self, draft: &RoleDraft);
}

impl<F> RoleEditorListener for F
where
    F: Fn(&RoleDraft),
{
    fn on_change(&self, draft: &RoleDraft) {
        self(draft)
    }
}

/// Handle returned by `RoleEditor::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) u64);

pub(super) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn RoleEditorListener>)>,
}

impl Listeners {
    pub(super) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(super) fn add(&mut self, listener: Box<dyn RoleEditorListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(super) fn notify(&self, draft: &RoleDraft) {
        for (_, listener) in &self.entries {
            listener.on_change(draft);
        }
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
