//! Scan-root enumeration.
//!
//! Produces the ordered list of directories the scanner should search for
//! extensions: the conventional core and top-level locations, plus whatever
//! each per-site override directory contributes.

use crate::error::{ExtmapError, Result};
use crate::model::Conventions;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conventional extension locations relative to the application root.
const CONVENTIONAL_ROOTS: [&str; 6] = [
    "core/modules",
    "core/profiles",
    "core/themes",
    "modules",
    "profiles",
    "themes",
];

/// Extension subdirectories probed under each site override directory.
const SITE_EXTENSION_DIRS: [&str; 3] = ["modules", "profiles", "themes"];

/// Returns the directories under which extensions may exist.
///
/// Conventional locations that are absent are dropped. The sites directory
/// itself must be listable; individual site entries that lack extension
/// subdirectories are skipped silently. Hidden site entries and the reserved
/// sandbox site are never probed.
pub fn enumerate_roots(root: &Path, conventions: &Conventions) -> Result<Vec<PathBuf>> {
    let mut roots: Vec<PathBuf> = CONVENTIONAL_ROOTS
        .iter()
        .map(|rel| root.join(rel))
        .filter(|candidate| candidate.is_dir())
        .collect();

    let sites_path = root.join(&conventions.sites_dir);
    let list_err = |source| ExtmapError::ListDir {
        path: sites_path.clone(),
        source,
    };

    let mut sites = fs::read_dir(&sites_path)
        .map_err(list_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(list_err)?;
    // Directory listing order is platform-dependent; sort so later roots
    // (and therefore collision winners) are stable.
    sites.sort_by_key(|entry| entry.file_name());

    for site in sites {
        let name = site.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.starts_with('.') || name == conventions.reserved_site {
            continue;
        }
        for sub in SITE_EXTENSION_DIRS {
            let probe = site.path().join(sub);
            if probe.is_dir() {
                // Site extension dirs are often symlinked into the tree.
                roots.push(fs::canonicalize(&probe).unwrap_or(probe));
            }
        }
    }

    debug!(root = %root.display(), count = roots.len(), "enumerated scan roots");
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_existing_conventional_roots_only() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("core/modules")).unwrap();
        fs::create_dir_all(root.join("modules")).unwrap();
        fs::create_dir_all(root.join("sites")).unwrap();

        let roots = enumerate_roots(root, &Conventions::default()).unwrap();
        assert_eq!(roots, vec![root.join("core/modules"), root.join("modules")]);
    }

    #[test]
    fn expands_site_override_directories() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("modules")).unwrap();
        fs::create_dir_all(root.join("sites/default/modules")).unwrap();
        fs::create_dir_all(root.join("sites/example.com/themes")).unwrap();

        let roots = enumerate_roots(root, &Conventions::default()).unwrap();
        assert_eq!(
            roots,
            vec![
                root.join("modules"),
                fs::canonicalize(root.join("sites/default/modules")).unwrap(),
                fs::canonicalize(root.join("sites/example.com/themes")).unwrap(),
            ]
        );
    }

    #[test]
    fn skips_hidden_and_reserved_sites() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("sites/.hidden/modules")).unwrap();
        fs::create_dir_all(root.join("sites/simpletest/modules")).unwrap();
        fs::create_dir_all(root.join("sites/default/profiles")).unwrap();

        let roots = enumerate_roots(root, &Conventions::default()).unwrap();
        assert_eq!(
            roots,
            vec![fs::canonicalize(root.join("sites/default/profiles")).unwrap()]
        );
    }

    #[test]
    fn fails_when_sites_directory_is_missing() {
        let temp = tempfile::tempdir().unwrap();
        let err = enumerate_roots(temp.path(), &Conventions::default()).unwrap_err();
        assert!(matches!(err, ExtmapError::ListDir { .. }));
    }
}
