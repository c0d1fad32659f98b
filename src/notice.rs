//! Notifications
//!
//! Single-slot transient message area. Showing a message replaces whatever
//! is there; each message carries an id so its expiry timer cannot remove
//! a newer one.

/// Message texts shown in the notification area
pub mod text {
    pub const STATS_LOAD_FAILED: &str = "Error loading dashboard data";
    pub const PROBLEMS_LOAD_FAILED: &str = "Error loading problems";
    pub const PROBLEM_ADDED: &str = "Problem added successfully!";
    pub const PROBLEM_ADD_FAILED: &str = "Error adding problem";
    pub const PROBLEM_DELETED: &str = "Problem deleted successfully!";
    pub const PROBLEM_DELETE_FAILED: &str = "Error deleting problem";
    pub const GITHUB_FIELDS_MISSING: &str = "Please fill in all GitHub fields";
    pub const GITHUB_SAVED: &str = "GitHub configuration saved successfully!";
    pub const GITHUB_SAVE_FAILED: &str = "Error setting up GitHub";
    pub const GITHUB_SYNCING: &str = "Syncing to GitHub...";
    pub const GITHUB_SYNCED: &str = "Successfully synced to GitHub!";
    pub const GITHUB_SYNC_FAILED: &str = "Error syncing to GitHub";
    pub const EXPORTED: &str = "Data exported successfully!";
    pub const EXPORT_FAILED: &str = "Error exporting data";
    pub const IMPORT_NO_FILE: &str = "Please select a file to import";
    pub const IMPORT_FAILED: &str = "Error importing data";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "message success",
            NoticeKind::Error => "message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeSlot {
    /// Replace the visible message; returns the id to expire it with
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notice { id, kind, text: text.into() });
        id
    }

    /// Remove message `id` if it is still the one showing
    pub fn expire(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_replaces_old() {
        let mut slot = NoticeSlot::default();
        slot.show(NoticeKind::Success, "Problem added successfully!");
        slot.show(NoticeKind::Error, "Error loading problems");

        let current = slot.current().unwrap();
        assert_eq!(current.kind, NoticeKind::Error);
        assert_eq!(current.text, "Error loading problems");
    }

    #[test]
    fn test_expire_removes_own_message() {
        let mut slot = NoticeSlot::default();
        let id = slot.show(NoticeKind::Success, "Syncing to GitHub...");
        slot.expire(id);
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_stale_timer_keeps_newer_message() {
        let mut slot = NoticeSlot::default();
        let first = slot.show(NoticeKind::Success, "Syncing to GitHub...");
        let second = slot.show(NoticeKind::Success, "Successfully synced to GitHub!");

        slot.expire(first);
        assert_eq!(slot.current().map(|n| n.id), Some(second));

        slot.expire(second);
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut slot = NoticeSlot::default();
        let a = slot.show(NoticeKind::Error, "a");
        let b = slot.show(NoticeKind::Error, "a");
        assert_ne!(a, b);
    }
}
