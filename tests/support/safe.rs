use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Measurement rasters written into fixture products.
pub const MEASUREMENTS: &[&str] = &[
    "s1a-iw1-slc-vv-20250714t154856-20250714t154921-060082-077700-001.tiff",
    "s1a-iw1-slc-vh-20250714t154856-20250714t154921-060082-077700-002.tiff",
];

fn entries(granule: &str) -> Vec<(String, Vec<u8>)> {
    let root = format!("{granule}.SAFE");
    let mut files = vec![
        (format!("{root}/manifest.safe"), b"<xfdu:XFDU/>".to_vec()),
        (format!("{root}/annotation/s1a-iw1-slc-vv.xml"), b"<product/>".to_vec()),
        (format!("{root}/preview/quick-look.png"), vec![0x89, 0x50, 0x4e, 0x47]),
    ];
    for name in MEASUREMENTS {
        files.push((format!("{root}/measurement/{name}"), vec![7u8; 2048]));
    }
    files
}

/// Write a zipped SAFE product for `granule` at `path`.
pub fn write_safe_zip(path: &Path, granule: &str) {
    let file = File::create(path).expect("create zip");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    let root = format!("{granule}.SAFE/");
    zip.add_directory(root.as_str(), options).expect("add root");
    for dir in ["annotation", "measurement", "preview"] {
        zip.add_directory(format!("{root}{dir}/"), options)
            .expect("add dir");
    }
    for (name, body) in entries(granule) {
        zip.start_file(name, options).expect("start file");
        zip.write_all(&body).expect("write entry");
    }
    zip.finish().expect("finish zip");
}

/// Bytes of a zipped SAFE product for `granule`.
pub fn safe_zip_bytes(granule: &str) -> Vec<u8> {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("product.zip");
    write_safe_zip(&path, granule);
    fs::read(path).expect("read zip")
}

/// Write an already-extracted SAFE directory under `parent`.
pub fn write_safe_dir(parent: &Path, granule: &str) -> PathBuf {
    for (name, body) in entries(granule) {
        let path = parent.join(name);
        fs::create_dir_all(path.parent().expect("entry parent")).expect("create dirs");
        fs::write(path, body).expect("write entry");
    }
    parent.join(format!("{granule}.SAFE"))
}
