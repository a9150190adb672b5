use sarwatch::domain::{AreaOfInterest, Coordinate};

/// Harbor-sized ring used across integration tests.
pub const AREA_TOML: &str = r#"
[area_of_interest]
name = "harbor"
coordinates = [[-74.0, 40.7], [-74.0, 40.8], [-73.9, 40.8], [-73.9, 40.7], [-74.0, 40.7]]
"#;

pub fn no_env(_: &str) -> Option<String> {
    None
}

/// Minimal valid configuration rooted at `data_dir`.
pub fn config_toml(data_dir: &std::path::Path) -> String {
    format!(
        "data_directory = {:?}\n\n[asf]\ndownload_directory = {:?}\n{AREA_TOML}",
        data_dir.display().to_string(),
        data_dir.join("downloads").display().to_string(),
    )
}

pub fn harbor_area() -> AreaOfInterest {
    AreaOfInterest::try_new(
        "harbor",
        vec![
            Coordinate::new(-74.0, 40.7),
            Coordinate::new(-74.0, 40.8),
            Coordinate::new(-73.9, 40.8),
            Coordinate::new(-73.9, 40.7),
            Coordinate::new(-74.0, 40.7),
        ],
    )
    .expect("valid test area")
}
