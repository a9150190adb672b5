//! Scene pair selection for change detection.
//!
//! A change-detection run compares the newest acquisition over the area with
//! a baseline acquired roughly `days_back` days earlier.

use chrono::{Duration, NaiveDateTime};
use tracing::{info, warn};

use super::scene::Scene;

const SECONDS_PER_DAY: i64 = 86_400;

/// The recent scene and its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePair {
    pub most_recent: Scene,
    /// `None` when the most recent scene is also closest to the target date.
    pub baseline: Option<Scene>,
    pub target_date: NaiveDateTime,
    /// Whole days between the closest scene and the target date.
    pub days_from_target: i64,
}

impl ScenePair {
    /// Selected scenes, most recent first.
    #[must_use]
    pub fn scenes(&self) -> Vec<&Scene> {
        std::iter::once(&self.most_recent)
            .chain(self.baseline.as_ref())
            .collect()
    }

    #[must_use]
    pub fn granule_names(&self) -> Vec<String> {
        self.scenes()
            .into_iter()
            .map(|scene| scene.granule_name.clone())
            .collect()
    }

    /// Number of selected scenes (one or two).
    #[must_use]
    pub fn count(&self) -> usize {
        1 + usize::from(self.baseline.is_some())
    }
}

/// Whole-day distance, flooring negative spans toward earlier days.
fn day_distance(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    let delta = a - b;
    // num_seconds truncates toward zero; a negative sub-second remainder still
    // belongs to the previous second.
    let floor_seconds = delta.num_seconds() - i64::from(delta.subsec_nanos() < 0);
    floor_seconds.div_euclid(SECONDS_PER_DAY).abs()
}

/// Pick the newest scene and the scene closest to `now - days_back`.
///
/// Scenes with unparseable timestamps are skipped. Returns `None` when no
/// scene has a usable date.
#[must_use]
pub fn select_scene_pair(scenes: &[Scene], now: NaiveDateTime, days_back: u32) -> Option<ScenePair> {
    let mut dated: Vec<(&Scene, NaiveDateTime)> = scenes
        .iter()
        .filter_map(|scene| match scene.acquired_at() {
            Some(at) => Some((scene, at)),
            None => {
                warn!(
                    granule = %scene.granule_name,
                    date = %scene.acquisition_date,
                    "Could not parse acquisition date"
                );
                None
            }
        })
        .collect();

    if dated.is_empty() {
        return None;
    }

    dated.sort_by(|a, b| b.1.cmp(&a.1));
    let (most_recent, recent_at) = dated[0];
    info!(granule = %most_recent.granule_name, date = %recent_at.date(), "Most recent scene");

    let target_date = now - Duration::days(i64::from(days_back));
    let (closest, closest_at) = dated
        .iter()
        .copied()
        .min_by_key(|(_, at)| day_distance(*at, target_date))?;
    let days_from_target = day_distance(closest_at, target_date);
    info!(
        granule = %closest.granule_name,
        date = %closest_at.date(),
        days_from_target,
        "Closest scene to target date"
    );

    let baseline = if closest.granule_name == most_recent.granule_name {
        info!("Most recent scene is also the closest to target date");
        None
    } else {
        Some(closest.clone())
    };

    Some(ScenePair {
        most_recent: most_recent.clone(),
        baseline,
        target_date,
        days_from_target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn scene(name: &str, date: &str) -> Scene {
        Scene::new(name, date)
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(select_scene_pair(&[], now(), 7).is_none());
    }

    #[test]
    fn undated_scenes_are_skipped() {
        let scenes = vec![scene("a", "unknown_date"), scene("b", "2025-07-19")];
        assert!(select_scene_pair(&scenes, now(), 7).is_none());
    }

    #[test]
    fn picks_newest_and_closest_to_target() {
        let scenes = vec![
            scene("old", "2025-07-01T06:00:00Z"),
            scene("week", "2025-07-13T15:48:54Z"),
            scene("newest", "2025-07-19T15:48:54Z"),
        ];

        let pair = select_scene_pair(&scenes, now(), 7).unwrap();
        assert_eq!(pair.most_recent.granule_name, "newest");
        assert_eq!(pair.baseline.as_ref().unwrap().granule_name, "week");
        assert_eq!(pair.days_from_target, 0);
        assert_eq!(pair.granule_names(), vec!["newest", "week"]);
    }

    #[test]
    fn single_scene_is_not_duplicated() {
        let scenes = vec![scene("only", "2025-07-18T10:00:00Z")];
        let pair = select_scene_pair(&scenes, now(), 7).unwrap();
        assert!(pair.baseline.is_none());
        assert_eq!(pair.count(), 1);
    }

    #[test]
    fn negative_partial_day_counts_as_one_day() {
        // One hour before the target floors to -1 day.
        let target = now() - Duration::days(7);
        let before = target - Duration::hours(1);
        assert_eq!(day_distance(before, target), 1);
        assert_eq!(day_distance(target + Duration::hours(23), target), 0);
    }

    #[test]
    fn sub_second_negative_span_counts_as_one_day() {
        let target = now();
        let just_before = target - Duration::milliseconds(500);
        assert_eq!(day_distance(just_before, target), 1);
        assert_eq!(day_distance(target, just_before), 0);
        assert_eq!(day_distance(target, target), 0);
    }

    #[test]
    fn ties_resolve_to_newer_scene() {
        // Both scenes sit within the same zero-day bucket after the target.
        let scenes = vec![
            scene("recent", "2025-07-19T00:00:00Z"),
            scene("tie-older", "2025-07-13T13:00:00Z"),
            scene("tie-newer", "2025-07-13T20:00:00Z"),
        ];
        let pair = select_scene_pair(&scenes, now(), 7).unwrap();
        assert_eq!(pair.baseline.unwrap().granule_name, "tie-newer");
    }
}
