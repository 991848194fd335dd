//! Notification list helpers: filtering, ordering, read state and pruning.

use crate::state::GameDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Diplomacy,
    War,
    Economy,
    Event,
    Achievement,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Normal,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub label: String,
    pub action_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub category: NotificationCategory,
    pub priority: Priority,
    pub title: String,
    pub message: String,
    pub date: GameDate,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub actions: Vec<NotificationAction>,
}

/// Display metadata for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub icon: &'static str,
}

pub fn category_info(category: NotificationCategory) -> CategoryInfo {
    let (label, icon) = match category {
        NotificationCategory::Diplomacy => ("Diplomacy", "handshake"),
        NotificationCategory::War => ("War", "swords"),
        NotificationCategory::Economy => ("Economy", "coins"),
        NotificationCategory::Event => ("Event", "scroll"),
        NotificationCategory::Achievement => ("Achievement", "trophy"),
        NotificationCategory::System => ("System", "gear"),
    };
    CategoryInfo { label, icon }
}

pub fn filter_by_category(
    notifications: &[Notification],
    category: NotificationCategory,
) -> Vec<&Notification> {
    notifications.iter().filter(|n| n.category == category).collect()
}

pub fn filter_unread(notifications: &[Notification]) -> Vec<&Notification> {
    notifications.iter().filter(|n| !n.read).collect()
}

pub fn count_unread(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Highest priority first, then newest date, then highest id.
pub fn sort_notifications(notifications: &mut [Notification]) {
    notifications.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.date.cmp(&a.date))
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Returns whether a notification with `id` was found.
pub fn mark_read(notifications: &mut [Notification], id: u64) -> bool {
    match notifications.iter_mut().find(|n| n.id == id) {
        Some(n) => {
            n.read = true;
            true
        }
        None => false,
    }
}

pub fn mark_all_read(notifications: &mut [Notification]) {
    for n in notifications.iter_mut() {
        n.read = true;
    }
}

/// Keep the newest `max` notifications (by date, then id), preserving the
/// relative order of the survivors. Never returns more than `max`.
pub fn prune_notifications(notifications: Vec<Notification>, max: usize) -> Vec<Notification> {
    if notifications.len() <= max {
        return notifications;
    }
    let mut order: Vec<usize> = (0..notifications.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&notifications[a], &notifications[b]);
        (b.date, b.id).cmp(&(a.date, a.id))
    });
    let mut keep = vec![false; notifications.len()];
    for &i in order.iter().take(max) {
        keep[i] = true;
    }

    log::debug!("pruning {} notifications", notifications.len() - max);
    notifications
        .into_iter()
        .zip(keep)
        .filter_map(|(n, keep)| keep.then_some(n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: u64, priority: Priority, day: u8, category: NotificationCategory) -> Notification {
        Notification {
            id,
            kind: NotificationKind::Info,
            category,
            priority,
            title: format!("Note {id}"),
            message: String::new(),
            date: GameDate::new(1444, 11, day),
            read: false,
            actions: Vec::new(),
        }
    }

    fn sample() -> Vec<Notification> {
        vec![
            note(1, Priority::Normal, 11, NotificationCategory::War),
            note(2, Priority::Critical, 12, NotificationCategory::Economy),
            note(3, Priority::Normal, 13, NotificationCategory::War),
            note(4, Priority::Low, 14, NotificationCategory::Diplomacy),
        ]
    }

    #[test]
    fn test_filters() {
        let notes = sample();
        assert_eq!(filter_by_category(&notes, NotificationCategory::War).len(), 2);
        assert_eq!(count_unread(&notes), 4);
        assert_eq!(filter_unread(&notes).len(), 4);
    }

    #[test]
    fn test_sort_priority_then_date() {
        let mut notes = sample();
        sort_notifications(&mut notes);
        let ids: Vec<u64> = notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_sort_ties_break_on_id() {
        let mut notes = vec![
            note(7, Priority::High, 11, NotificationCategory::Event),
            note(9, Priority::High, 11, NotificationCategory::Event),
        ];
        sort_notifications(&mut notes);
        assert_eq!(notes[0].id, 9);
    }

    #[test]
    fn test_mark_read() {
        let mut notes = sample();
        assert!(mark_read(&mut notes, 3));
        assert!(!mark_read(&mut notes, 42));
        assert_eq!(count_unread(&notes), 3);
        mark_all_read(&mut notes);
        assert_eq!(count_unread(&notes), 0);
    }

    #[test]
    fn test_prune_keeps_newest() {
        let pruned = prune_notifications(sample(), 2);
        let ids: Vec<u64> = pruned.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(prune_notifications(sample(), 10).len(), 4);
        assert!(prune_notifications(sample(), 0).is_empty());
    }

    #[test]
    fn test_prune_respects_max_with_duplicate_keys() {
        let notes = vec![
            note(7, Priority::Normal, 20, NotificationCategory::War),
            note(7, Priority::High, 20, NotificationCategory::Economy),
            note(7, Priority::Low, 20, NotificationCategory::Diplomacy),
            note(1, Priority::Normal, 1, NotificationCategory::War),
        ];
        let pruned = prune_notifications(notes, 2);
        assert_eq!(pruned.len(), 2);
        assert!(pruned.iter().all(|n| n.id == 7));
    }

    #[test]
    fn test_category_info() {
        assert_eq!(category_info(NotificationCategory::War).label, "War");
        assert_eq!(category_info(NotificationCategory::Achievement).icon, "trophy");
    }
}
