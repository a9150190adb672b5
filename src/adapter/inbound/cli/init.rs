//! Interactive setup wizard.
//!
//! Guides the user through choosing an area of interest, the search window
//! and data directories, then writes a configuration file based on the
//! documented template.

use std::fs;
use std::path::{Path, PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::adapter::inbound::cli::config::CONFIG_TEMPLATE;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::{AreaOfInterest, BoundingBox, Coordinate};
use crate::error::{ConfigError, Result};

/// Answers collected by the wizard.
#[derive(Debug, Clone)]
struct WizardAnswers {
    area_name: String,
    ring: Vec<Coordinate>,
    days_back: u32,
    data_directory: String,
    interval_hours: u64,
}

/// Run the interactive setup wizard.
pub fn execute(path: PathBuf, force: bool) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`sarwatch init` is interactive; use `sarwatch config init` for scripted setup"
                .to_string(),
        }
        .into());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::note("Welcome to sarwatch. Let's pick an area to monitor.");

    let theme = ColorfulTheme::default();

    output::section("Area of Interest");

    let area_name: String = Input::with_theme(&theme)
        .with_prompt("Area name")
        .default("target_monitoring_area".to_string())
        .interact_text()?;

    let shapes = &["Box around a center point", "Polygon from a list of vertices"];
    let shape = Select::with_theme(&theme)
        .with_prompt("How do you want to describe the area?")
        .items(shapes)
        .default(0)
        .interact()?;

    let ring = if shape == 0 {
        prompt_box(&theme)?
    } else {
        prompt_polygon(&theme)?
    };
    let area = AreaOfInterest::try_new(area_name.clone(), ring.clone()).map_err(|e| {
        ConfigError::InvalidValue {
            field: "area_of_interest.coordinates",
            reason: e.to_string(),
        }
    })?;
    let bounds = area.bounds();
    output::field("Vertices", area.vertex_count());
    output::field(
        "Extent",
        format!("{:.1} km × {:.1} km", bounds.width_km(), bounds.height_km()),
    );

    output::section("Search");

    let days_back: u32 = Input::with_theme(&theme)
        .with_prompt("Days back for the comparison scene")
        .default(7)
        .validate_with(|value: &u32| {
            if *value > 0 {
                Ok(())
            } else {
                Err("must be greater than 0")
            }
        })
        .interact_text()?;

    let interval_hours: u64 = Input::with_theme(&theme)
        .with_prompt("Hours between scheduled runs")
        .default(24)
        .validate_with(|value: &u64| {
            if *value > 0 {
                Ok(())
            } else {
                Err("must be greater than 0")
            }
        })
        .interact_text()?;

    output::section("Storage");

    let data_directory: String = Input::with_theme(&theme)
        .with_prompt("Data directory")
        .default("./sar_data".to_string())
        .interact_text()?;

    println!();
    let spinner = output::spinner("Writing configuration...");

    if path.exists() && !force {
        output::spinner_fail(&spinner, "Config already exists");
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            output::note("Setup aborted.");
            return Ok(());
        }
    }

    let answers = WizardAnswers {
        area_name,
        ring,
        days_back,
        data_directory,
        interval_hours,
    };
    let config = generate_config(&answers)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &config)?;
    let report = operator::operator()?.provision_workspace(&config, &path)?;

    output::spinner_success(&spinner, "Configuration saved");

    output::section("Ready");
    output::success(&format!("Config    {}", path.display()));
    output::success(&format!("Data      {}", answers.data_directory));
    if let Some(env) = &report.env_template {
        output::success(&format!("Env       {env}"));
    }

    output::section("Next Steps");
    output::note(&format!(
        "1. Add credentials to {}",
        output::highlight(env_display(&path))
    ));
    output::note(&format!(
        "2. Verify: {}",
        output::highlight("sarwatch check connection")
    ));
    output::note(&format!("3. Start:  {}", output::highlight("sarwatch run")));

    Ok(())
}

fn env_display(config_path: &Path) -> String {
    config_path
        .parent()
        .map_or_else(|| PathBuf::from(".env"), |parent| parent.join(".env"))
        .display()
        .to_string()
}

fn prompt_box(theme: &ColorfulTheme) -> Result<Vec<Coordinate>> {
    let lon: f64 = Input::with_theme(theme)
        .with_prompt("Center longitude")
        .validate_with(|value: &f64| {
            if (-180.0..=180.0).contains(value) {
                Ok(())
            } else {
                Err("longitude must be within -180..180")
            }
        })
        .interact_text()?;
    let lat: f64 = Input::with_theme(theme)
        .with_prompt("Center latitude")
        .validate_with(|value: &f64| {
            if (-90.0..=90.0).contains(value) {
                Ok(())
            } else {
                Err("latitude must be within -90..90")
            }
        })
        .interact_text()?;
    let half_size: f64 = Input::with_theme(theme)
        .with_prompt("Half-size in degrees (0.25 is about 50 km across)")
        .default(0.25)
        .interact_text()?;

    Ok(BoundingBox::around(lon, lat, half_size).to_ring())
}

fn prompt_polygon(theme: &ColorfulTheme) -> Result<Vec<Coordinate>> {
    output::hint("enter `lon,lat` pairs one at a time; leave empty to finish");
    let mut ring = Vec::new();
    loop {
        let raw: String = Input::with_theme(theme)
            .with_prompt(format!("Vertex {}", ring.len() + 1))
            .allow_empty(true)
            .interact_text()?;
        if raw.trim().is_empty() {
            break;
        }
        match parse_vertex(&raw) {
            Some(vertex) => ring.push(vertex),
            None => output::warning("expected `lon,lat`, for example `34.27,31.36`"),
        }
    }
    Ok(ring)
}

/// Parse `lon,lat` (whitespace tolerant).
fn parse_vertex(raw: &str) -> Option<Coordinate> {
    let (lon, lat) = raw.split_once(',')?;
    Some(Coordinate::new(
        lon.trim().parse().ok()?,
        lat.trim().parse().ok()?,
    ))
}

fn generate_config(answers: &WizardAnswers) -> Result<String> {
    let mut config: toml::Value = toml::from_str(CONFIG_TEMPLATE).map_err(ConfigError::Parse)?;
    let table = config.as_table_mut().ok_or_else(|| {
        ConfigError::Other("config template root must be a TOML table".to_string())
    })?;

    table.insert(
        "data_directory".to_string(),
        toml::Value::String(answers.data_directory.clone()),
    );

    if let Some(area) = table
        .get_mut("area_of_interest")
        .and_then(toml::Value::as_table_mut)
    {
        area.insert(
            "name".to_string(),
            toml::Value::String(answers.area_name.clone()),
        );
        area.insert(
            "coordinates".to_string(),
            toml::Value::Array(
                answers
                    .ring
                    .iter()
                    .map(|c| {
                        toml::Value::Array(vec![toml::Value::Float(c.lon), toml::Value::Float(c.lat)])
                    })
                    .collect(),
            ),
        );
    }

    if let Some(temporal) = table
        .get_mut("temporal_range")
        .and_then(toml::Value::as_table_mut)
    {
        temporal.insert(
            "days_back".to_string(),
            toml::Value::Integer(i64::from(answers.days_back)),
        );
    }

    if let Some(asf) = table.get_mut("asf").and_then(toml::Value::as_table_mut) {
        asf.insert(
            "download_directory".to_string(),
            toml::Value::String(answers.data_directory.clone()),
        );
    }

    if let Some(schedule) = table.get_mut("schedule").and_then(toml::Value::as_table_mut) {
        schedule.insert(
            "interval_hours".to_string(),
            toml::Value::Integer(i64::try_from(answers.interval_hours).unwrap_or(i64::MAX)),
        );
    }

    toml::to_string_pretty(&config).map_err(|e| ConfigError::Other(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vertex_accepts_spaces() {
        assert_eq!(parse_vertex(" 34.27 , 31.36 "), Some(Coordinate::new(34.27, 31.36)));
        assert_eq!(parse_vertex("34.27"), None);
        assert_eq!(parse_vertex("east,north"), None);
    }

    #[test]
    fn generated_config_applies_answers() {
        let answers = WizardAnswers {
            area_name: "delta".to_string(),
            ring: BoundingBox::around(30.0, 31.0, 0.1).to_ring(),
            days_back: 12,
            data_directory: "./delta_data".to_string(),
            interval_hours: 6,
        };
        let generated: toml::Value = toml::from_str(&generate_config(&answers).unwrap()).unwrap();

        assert_eq!(generated["area_of_interest"]["name"].as_str(), Some("delta"));
        let coordinates = generated["area_of_interest"]["coordinates"].as_array().unwrap();
        assert_eq!(coordinates.len(), 5);
        assert_eq!(coordinates[0], coordinates[4]);
        assert_eq!(generated["temporal_range"]["days_back"].as_integer(), Some(12));
        assert_eq!(generated["data_directory"].as_str(), Some("./delta_data"));
        assert_eq!(generated["asf"]["download_directory"].as_str(), Some("./delta_data"));
        assert_eq!(generated["schedule"]["interval_hours"].as_integer(), Some(6));
    }
}
