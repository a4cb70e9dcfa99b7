//! PSR-4 namespace derivation for discovered extensions.

use crate::model::{Conventions, ExtensionDirectoryMap, NamespaceMap};
use std::path::Path;

/// Derives the namespace prefixes to register for each extension directory.
///
/// An extension gets a runtime prefix when it ships a `src` directory, and
/// one test prefix per recognized suite directory under `tests/src`, plus a
/// prefix for cross-suite trait code. Missing directories are normal
/// non-matches. Directories append to existing prefixes so colliding
/// prefixes aggregate instead of clobbering each other.
pub fn map_namespaces(extensions: &ExtensionDirectoryMap, conventions: &Conventions) -> NamespaceMap {
    let mut namespaces = NamespaceMap::new();

    for (extension, dir) in extensions {
        let src = dir.join("src");
        if src.is_dir() {
            namespaces
                .entry(conventions.runtime_prefix(extension))
                .or_default()
                .push(src);
        }

        let test_root = dir.join("tests").join("src");
        if !test_root.is_dir() {
            continue;
        }
        for suite in &conventions.suite_names {
            register_suite(&mut namespaces, conventions, extension, &test_root, suite);
        }
        register_suite(
            &mut namespaces,
            conventions,
            extension,
            &test_root,
            &conventions.traits_dir,
        );
    }

    namespaces
}

fn register_suite(
    namespaces: &mut NamespaceMap,
    conventions: &Conventions,
    extension: &str,
    test_root: &Path,
    suite: &str,
) {
    let suite_dir = test_root.join(suite);
    if suite_dir.is_dir() {
        namespaces
            .entry(conventions.test_prefix(extension, suite))
            .or_default()
            .push(suite_dir);
    }
}
