//! Recursive extension manifest scanning.

use crate::error::{ExtmapError, Result};
use crate::model::{Conventions, ExtensionDirectoryMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Finds all extension directories recursively within `root`.
///
/// The walk follows symlinks and visits siblings in file-name order, so the
/// result is deterministic: when two manifests derive the same extension
/// name, the later-visited one wins. Symlink cycles are skipped; any other
/// walk failure, including a missing `root`, aborts the scan.
pub fn scan(root: &Path, conventions: &Conventions) -> Result<ExtensionDirectoryMap> {
    let mut extensions = ExtensionDirectoryMap::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.loop_ancestor().is_some() => {
                warn!(root = %root.display(), error = %err, "skipping symlink cycle");
                continue;
            }
            Err(err) => {
                return Err(ExtmapError::Scan {
                    root: root.to_path_buf(),
                    source: err,
                });
            }
        };

        let Some(name) = entry.file_name().to_str() else { continue };
        let Some(extension) = conventions.extension_name(name) else { continue };
        let Some(parent) = entry.path().parent() else { continue };
        // Resolve the containing directory so extensions reached through
        // directory aliases register under their real path.
        let dir = fs::canonicalize(parent).unwrap_or_else(|_| parent.to_path_buf());
        extensions.insert(extension.to_string(), dir);
    }

    debug!(root = %root.display(), count = extensions.len(), "scanned extensions");
    Ok(extensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn finds_manifests_at_any_depth() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("foo/foo.info.yml"));
        touch(&root.join("contrib/deep/bar/bar.info.yml"));
        touch(&root.join("foo/README.md"));

        let extensions = scan(root, &Conventions::default()).unwrap();
        assert_eq!(extensions.len(), 2);
        assert_eq!(
            extensions["foo"],
            fs::canonicalize(root.join("foo")).unwrap()
        );
        assert_eq!(
            extensions["bar"],
            fs::canonicalize(root.join("contrib/deep/bar")).unwrap()
        );
    }

    #[test]
    fn later_manifest_wins_on_name_collision() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("a/dup.info.yml"));
        touch(&root.join("b/dup.info.yml"));

        let extensions = scan(root, &Conventions::default()).unwrap();
        assert_eq!(extensions.len(), 1);
        // Siblings are visited in name order, so b is scanned after a.
        assert_eq!(extensions["dup"], fs::canonicalize(root.join("b")).unwrap());
    }

    #[test]
    fn fails_on_missing_root() {
        let temp = tempfile::tempdir().unwrap();
        let err = scan(&temp.path().join("nope"), &Conventions::default()).unwrap_err();
        assert!(matches!(err, ExtmapError::Scan { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks_and_survives_cycles() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("real/linked/linked.info.yml"));
        std::os::unix::fs::symlink(root.join("real"), root.join("alias")).unwrap();
        // A cycle back to the scan root must not hang or fail the scan.
        std::os::unix::fs::symlink(root, root.join("real/loop")).unwrap();

        let extensions = scan(root, &Conventions::default()).unwrap();
        assert_eq!(
            extensions["linked"],
            fs::canonicalize(root.join("real/linked")).unwrap()
        );
    }
}
