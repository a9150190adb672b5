//! SAFE zip extraction and layout verification.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::ZipArchive;

use crate::domain::product::{
    MeasurementFile, SafeProduct, MANIFEST_FILE, MEASUREMENT_EXTENSION, REQUIRED_DIRECTORIES,
};
use crate::domain::scene::is_plain_file_name;
use crate::domain::Polarization;
use crate::error::{ArchiveError, Result};
use crate::port::ProductArchive;

const SAFE_SUFFIX: &str = ".SAFE";

#[derive(Debug, Clone, Copy, Default)]
pub struct SafeArchive;

impl SafeArchive {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Name of the SAFE root inside the archive, without trailing slash.
///
/// Prefers an explicit `<name>.SAFE/` directory entry; archives written
/// without directory entries fall back to the first `*.SAFE` path component.
fn safe_root(names: &[String]) -> Option<String> {
    names
        .iter()
        .find(|name| name.ends_with(&format!("{SAFE_SUFFIX}/")))
        .map(|name| name.trim_end_matches('/').to_string())
        .or_else(|| {
            names.iter().find_map(|name| {
                name.split('/')
                    .next()
                    .filter(|first| first.ends_with(SAFE_SUFFIX) && name.len() > first.len())
                    .map(str::to_string)
            })
        })
}

fn count_entries(dir: &Path) -> Result<usize> {
    Ok(fs::read_dir(dir)?.count())
}

impl ProductArchive for SafeArchive {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<PathBuf> {
        let mut zip = ZipArchive::new(BufReader::new(File::open(archive)?))?;

        let mut names = Vec::with_capacity(zip.len());
        for index in 0..zip.len() {
            names.push(zip.by_index_raw(index)?.name().to_string());
        }
        let root = safe_root(&names).ok_or_else(|| ArchiveError::NoSafeDirectory {
            archive: archive.to_path_buf(),
        })?;
        if !is_plain_file_name(&root) {
            return Err(ArchiveError::UnsafeEntry { name: root }.into());
        }
        info!(archive = %archive.display(), safe = %root, "Extracting SAFE product");

        let target = destination.join(&root);
        if target.exists() {
            debug!(path = %target.display(), "Removing previous extraction");
            fs::remove_dir_all(&target)?;
        }
        fs::create_dir_all(&target)?;

        let prefix = format!("{root}/");
        let mut extracted = 0usize;
        for index in 0..zip.len() {
            let mut entry = zip.by_index(index)?;
            if !entry.name().starts_with(&prefix) {
                continue;
            }
            let relative = entry.enclosed_name().ok_or_else(|| ArchiveError::UnsafeEntry {
                name: entry.name().to_string(),
            })?;
            let out = destination.join(relative);

            if entry.is_dir() {
                fs::create_dir_all(&out)?;
                continue;
            }
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = File::create(&out)?;
            io::copy(&mut entry, &mut file)?;
            extracted += 1;
        }
        debug!(files = extracted, "Extraction finished");

        Ok(target)
    }

    fn inspect(&self, safe_dir: &Path) -> Result<SafeProduct> {
        let mut measurement_files = Vec::new();
        let mut annotation_entries = 0;
        let mut preview_entries = 0;

        for name in REQUIRED_DIRECTORIES {
            let dir = safe_dir.join(name);
            if !dir.is_dir() {
                return Err(ArchiveError::MissingDirectory { name }.into());
            }
            match name {
                "measurement" => {
                    for entry in fs::read_dir(&dir)? {
                        let path = entry?.path();
                        if path.is_file()
                            && path.extension().is_some_and(|ext| ext == MEASUREMENT_EXTENSION)
                        {
                            measurement_files.push(path);
                        }
                    }
                    if measurement_files.is_empty() {
                        return Err(ArchiveError::NoMeasurementRasters.into());
                    }
                }
                "annotation" => annotation_entries = count_entries(&dir)?,
                _ => preview_entries = count_entries(&dir)?,
            }
        }

        if !safe_dir.join(MANIFEST_FILE).is_file() {
            return Err(ArchiveError::MissingFile {
                name: MANIFEST_FILE,
            }
            .into());
        }

        measurement_files.sort();
        let mut measurements = BTreeMap::new();
        let mut total_measurement_bytes = 0;
        for path in &measurement_files {
            let bytes = fs::metadata(path)?.len();
            total_measurement_bytes += bytes;
            let polarization = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(Polarization::from_file_name);
            if let Some(polarization) = polarization {
                measurements.insert(
                    polarization,
                    MeasurementFile {
                        path: path.clone(),
                        bytes,
                    },
                );
            }
        }

        if measurements.is_empty() {
            return Err(ArchiveError::NoPolarizations.into());
        }

        Ok(SafeProduct {
            path: safe_dir.to_path_buf(),
            measurements,
            measurement_count: measurement_files.len(),
            annotation_entries,
            preview_entries,
            total_measurement_bytes,
        })
    }
}
