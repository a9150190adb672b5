use chrono::{NaiveDate, NaiveDateTime};
use sarwatch::domain::Scene;

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid test timestamp")
}

/// Scene acquired at noon UTC on the given day.
pub fn scene_on(name: &str, year: i32, month: u32, day: u32) -> Scene {
    Scene::new(name, format!("{year:04}-{month:02}-{day:02}T12:00:00Z"))
}

pub fn downloadable(name: &str, url: &str) -> Scene {
    let mut scene = Scene::new(name, "2025-07-14T15:48:54Z");
    scene.url = url.to_string();
    scene.size_mb = 4200.0;
    scene
}
