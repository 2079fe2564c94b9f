//! Plain-text rendering of tracker state.
//!
//! Every function returns the lines to print so the output can be tested
//! without capturing stdout.

use completionist_catalog::{Area, CompletionTrackable, Item};
use completionist_core::{ModeOverlay, Tracker};
use completionist_progress::PlayerProfile;
use completionist_store::StorageService;
use completionist_types::{CharacterMode, Notification};

/// Header, totals, and one line per section.
pub fn status<S: StorageService>(tracker: &Tracker<S>) -> Vec<String> {
    let overlay = tracker.overlay();
    let collection = tracker.collection();
    let profile = tracker.profile();
    let modes = &tracker.config().modes;
    let counted_total = collection
        .items()
        .filter(|item| !collection.reserved().is_reserved(item.id()))
        .count();

    let mut lines = vec![
        format!("{} [{}]", profile.display_name(), profile.id()),
        format!(
            "{} | {}: {}/{} | {:.1}% complete",
            collection.name(),
            modes.display_name(overlay.mode()),
            overlay.scoped_count(),
            counted_total,
            overlay.completion_percentage(),
        ),
        format!(
            "Star bits: {} | Play time: {} | Spoilers: {}",
            profile.star_bits(),
            profile.formatted_play_time(),
            if profile.spoilers_enabled() { "on" } else { "off" },
        ),
    ];
    if !tracker.is_mode_available(CharacterMode::Alternate) {
        lines.push(format!(
            "{} mode unlocks at {} items",
            modes.alternate_name, modes.alternate_unlock_threshold
        ));
    }
    lines.push(String::new());

    for section in collection.sections() {
        let store = Some(tracker.store());
        let done = section.completed_items_in(store, overlay.mode());
        let total = section.total_items();
        if overlay.is_section_unlocked(section) {
            lines.push(format!("  {:<24} {done:>3}/{total}", section.name()));
        } else {
            let hint = section
                .unlock_condition()
                .map(completionist_catalog::UnlockCondition::description)
                .unwrap_or_default();
            lines.push(format!("  {:<24} locked: {hint}", section.name()));
        }
        for area in section.areas() {
            lines.push(area_summary(&overlay, area));
        }
    }
    lines
}

fn area_summary(overlay: &ModeOverlay<'_>, area: &Area) -> String {
    let (done, total) = overlay.area_progress(area);
    let lock = if overlay.is_area_unlocked(area) { " " } else { "🔒" };
    format!("    {lock} {:<30} {done:>2}/{total}  [{}]", area.name(), area.id())
}

/// One area with its visible items.
pub fn area(overlay: &ModeOverlay<'_>, show_notes: bool, area: &Area) -> Vec<String> {
    let (done, total) = overlay.area_progress(area);
    let mut lines = vec![format!("{} [{}] {done}/{total}", area.name(), area.id())];
    if let Some(condition) = area
        .unlock_condition()
        .filter(|_| !overlay.is_area_unlocked(area))
    {
        lines.push(format!("  locked: {}", condition.description()));
    }

    let (rare_done, rare_total) = overlay.rare_progress(area);
    if rare_total > 0 {
        lines.push(format!("  rare: {rare_done}/{rare_total}"));
    }

    let mut hidden = 0_u32;
    for item in area.items() {
        if overlay.is_visible(item) {
            lines.push(item_line(overlay, show_notes, item));
        } else {
            hidden = hidden.saturating_add(1);
        }
    }
    if hidden > 0 {
        lines.push(format!("  (+{hidden} hidden)"));
    }
    lines
}

fn item_line(overlay: &ModeOverlay<'_>, show_notes: bool, item: &Item) -> String {
    let mark = if overlay.is_collected(item.id()) { "x" } else { " " };
    let mut line = format!("  [{mark}] {item}");
    let Some(record) = overlay.record(item.id()) else {
        return line;
    };
    if record.difficulty_rating().is_some() {
        line = format!("{line}  {}", record.difficulty_stars());
    }
    if let Some(note) = record.note().filter(|_| show_notes) {
        line = format!("{line}  \"{note}\"");
    }
    line
}

/// Every note in the active mode.
pub fn notes(overlay: &ModeOverlay<'_>) -> Vec<String> {
    let notes = overlay.notes();
    if notes.is_empty() {
        return vec!["No notes yet.".to_owned()];
    }
    notes
        .into_iter()
        .map(|(item, note)| format!("{item}: {note}"))
        .collect()
}

/// One line per stored profile.
pub fn profiles(profiles: &[PlayerProfile]) -> Vec<String> {
    if profiles.is_empty() {
        return vec!["No profiles yet.".to_owned()];
    }
    profiles
        .iter()
        .map(|p| {
            format!(
                "{}  {}  {} collected  last played {}",
                p.id(),
                p.display_name(),
                p.total_collected(),
                p.last_played().format("%Y-%m-%d %H:%M"),
            )
        })
        .collect()
}

/// Notifications queued by the last collection.
pub fn notifications(notifications: &[Notification]) -> Vec<String> {
    notifications.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use completionist_catalog::super_mario_galaxy;
    use completionist_core::TrackerConfig;
    use completionist_store::MemoryStorage;
    use completionist_types::{AreaId, ItemId};

    use super::*;

    fn tracker() -> Tracker<MemoryStorage> {
        Tracker::create(
            super_mario_galaxy().unwrap(),
            MemoryStorage::new(),
            "Render",
            TrackerConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn status_lists_every_section() {
        let mut t = tracker();
        t.mark_collected(&ItemId::new("gateway-grand-star")).unwrap();
        let lines = status(&t);
        assert!(lines.iter().any(|l| l.contains("Mario: 1/120")));
        assert!(lines.iter().any(|l| l.contains("Luigi mode unlocks at 120")));
        assert!(lines.iter().any(|l| l.contains("Fountain") && l.contains("locked")));
        assert!(lines.iter().any(|l| l.contains("Grand Finale Galaxy")));
    }

    #[test]
    fn area_hides_unrevealed_items() {
        let mut t = tracker();
        t.set_note(&ItemId::new("good-egg-snack"), Some("bomb".to_owned()))
            .unwrap();
        t.set_difficulty_rating(&ItemId::new("good-egg-snack"), Some(2))
            .unwrap();
        let good_egg = t.collection().find_area(&AreaId::new("good-egg")).unwrap();
        let lines = area(&t.overlay(), true, good_egg);

        assert!(lines.iter().any(|l| l.contains("Dino Piranha")));
        assert!(lines.iter().any(|l| l.contains("★★☆☆☆") && l.contains("\"bomb\"")));
        assert!(!lines.iter().any(|l| l.contains("Luigi on the Roof")));
        assert_eq!(lines.last().unwrap(), "  (+3 hidden)");
    }

    #[test]
    fn empty_notes_and_profiles() {
        let t = tracker();
        assert_eq!(notes(&t.overlay()), vec!["No notes yet."]);
        assert_eq!(profiles(&[]), vec!["No profiles yet."]);
    }
}
