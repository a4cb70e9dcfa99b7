//! Extension discovery pipeline.
//!
//! Three steps, each a pure function of filesystem state:
//! 1. [`enumerate_roots`] lists the directories that may contain extensions.
//! 2. [`scan`] walks one root and maps extension names to directories.
//! 3. [`map_namespaces`] turns that map into PSR-4 autoload rules.
//!
//! [`discover`] runs the whole pipeline for a bootstrap that just wants the
//! namespace table.

pub mod namespaces;
pub mod roots;
pub mod scanner;

pub use namespaces::map_namespaces;
pub use roots::enumerate_roots;
pub use scanner::scan;

use crate::error::Result;
use crate::model::{Conventions, ExtensionDirectoryMap, NamespaceMap};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runs the full discovery pipeline against an application root.
///
/// Scan results merge in root order, so an extension found under a later
/// root (e.g. a site override) shadows a same-named one found earlier.
pub fn discover(root: &Path, conventions: &Conventions) -> Result<NamespaceMap> {
    let mut extensions = ExtensionDirectoryMap::new();
    for scan_root in enumerate_roots(root, conventions)? {
        extensions.extend(scan(&scan_root, conventions)?);
    }
    debug!(root = %root.display(), extensions = extensions.len(), "discovery complete");
    Ok(map_namespaces(&extensions, conventions))
}

/// Default application root: two levels above this crate's own directory,
/// for trees that vendor the crate at `<root>/<somewhere>/extmap`.
pub fn default_application_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}
