//! Product archive port: unpack and verify SAFE products.

use std::path::{Path, PathBuf};

use crate::domain::SafeProduct;
use crate::error::Result;

pub trait ProductArchive: Send + Sync {
    /// Extract the SAFE directory contained in `archive` into `destination`
    /// and return the extracted directory. Any previous extraction of the
    /// same product is replaced.
    fn extract(&self, archive: &Path, destination: &Path) -> Result<PathBuf>;

    /// Verify the layout of an extracted SAFE directory.
    fn inspect(&self, safe_dir: &Path) -> Result<SafeProduct>;
}
