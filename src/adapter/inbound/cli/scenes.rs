//! Stored scene listing.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ScenesArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::Scene;
use crate::error::Result;

#[derive(Tabled)]
struct SceneRow {
    #[tabled(rename = "Granule")]
    granule: String,
    #[tabled(rename = "Acquired")]
    acquired: String,
    #[tabled(rename = "Orbit")]
    orbit: String,
    #[tabled(rename = "Path/Frame")]
    path_frame: String,
    #[tabled(rename = "Pol")]
    polarization: String,
    #[tabled(rename = "Size (GB)")]
    size: String,
}

impl From<&Scene> for SceneRow {
    fn from(scene: &Scene) -> Self {
        Self {
            granule: scene.granule_name.clone(),
            acquired: scene.acquired_at().map_or_else(
                || scene.acquisition_date.clone(),
                |at| at.format("%Y-%m-%d %H:%M").to_string(),
            ),
            orbit: scene.orbit_direction.clone(),
            path_frame: format!("{}/{}", scene.path, scene.frame),
            polarization: scene.polarization.clone(),
            size: format!("{:.2}", scene.size_gb()),
        }
    }
}

/// List stored scene metadata.
pub fn execute(args: &ScenesArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(&args.config)?;
    let scenes = operator::operator()?.list_scenes(&config_toml, args.metadata_dir.clone())?;

    if output::is_json() {
        output::json_output(json!({
            "command": "scenes",
            "scenes": scenes,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Stored scenes");

    if scenes.is_empty() {
        output::note("(none)");
        output::hint(&format!(
            "run {} to search for scenes",
            output::highlight("sarwatch run")
        ));
        return Ok(());
    }

    let rows: Vec<SceneRow> = scenes.iter().map(SceneRow::from).collect();
    output::lines(&Table::new(rows).to_string());
    output::field("Total", scenes.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_formats_time_and_size() {
        let mut scene = Scene::new("S1A_TEST", "2025-07-14T15:48:54.000Z");
        scene.size_mb = 4096.0;
        scene.path = "87".into();
        scene.frame = "97".into();
        let row = SceneRow::from(&scene);
        assert_eq!(row.acquired, "2025-07-14 15:48");
        assert_eq!(row.size, "4.00");
        assert_eq!(row.path_frame, "87/97");
    }

    #[test]
    fn unparseable_time_is_shown_raw() {
        let scene = Scene::new("S1A_TEST", "unknown");
        assert_eq!(SceneRow::from(&scene).acquired, "unknown");
    }
}
