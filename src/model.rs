use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extension name mapped to the canonical directory containing its manifest.
///
/// Keys are unique per scan; a later-visited manifest with the same derived
/// name silently replaces the earlier one.
pub type ExtensionDirectoryMap = IndexMap<String, PathBuf>;

/// Namespace prefix mapped to the source roots registered under it.
///
/// Every key ends with the namespace separator, marking it as a prefix
/// rather than a leaf class name. A prefix may accumulate directories from
/// more than one extension, so values append rather than overwrite.
pub type NamespaceMap = IndexMap<String, Vec<PathBuf>>;

/// PSR-4 namespace separator used in produced prefixes.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Sub-namespace token under which test-suite classes live.
const TESTS_NAMESPACE: &str = "Tests";

/// Filename suffix identifying an extension manifest.
pub const MANIFEST_SUFFIX: &str = ".info.yml";

/// Base namespace token for all produced prefixes.
pub const BASE_NAMESPACE: &str = "Drupal";

/// Recognized test-suite categories, in registration order.
pub const SUITE_NAMES: [&str; 5] = ["Unit", "Kernel", "Functional", "Build", "FunctionalJavascript"];

/// Directory of cross-suite trait code under `tests/src`.
pub const TRAITS_DIR: &str = "Traits";

/// Per-site override parent directory under the application root.
pub const SITES_DIR: &str = "sites";

/// Site entry reserved for sandboxed test sites, never scanned.
pub const RESERVED_SITE: &str = "simpletest";

/// Naming conventions driving discovery and namespace derivation.
///
/// `Default` carries the conventional constants; the struct exists so the
/// mapping policy is testable in isolation, not for runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conventions {
    pub manifest_suffix: String,
    pub base_namespace: String,
    pub suite_names: Vec<String>,
    pub traits_dir: String,
    pub sites_dir: String,
    pub reserved_site: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            manifest_suffix: MANIFEST_SUFFIX.to_string(),
            base_namespace: BASE_NAMESPACE.to_string(),
            suite_names: SUITE_NAMES.iter().map(|s| s.to_string()).collect(),
            traits_dir: TRAITS_DIR.to_string(),
            sites_dir: SITES_DIR.to_string(),
            reserved_site: RESERVED_SITE.to_string(),
        }
    }
}

impl Conventions {
    /// Derives an extension name from a manifest file name, or `None` if the
    /// name does not carry the manifest marker.
    ///
    /// The marker is matched by containment; the suffix length is cut off
    /// the tail of the name regardless of where the match sits.
    pub fn extension_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        if !file_name.contains(&self.manifest_suffix) {
            return None;
        }
        file_name.get(..file_name.len() - self.manifest_suffix.len())
    }

    /// Namespace prefix for an extension's runtime classes.
    pub fn runtime_prefix(&self, extension: &str) -> String {
        format!(
            "{base}{sep}{extension}{sep}",
            base = self.base_namespace,
            sep = NAMESPACE_SEPARATOR,
        )
    }

    /// Namespace prefix for one of an extension's test-suite directories.
    pub fn test_prefix(&self, extension: &str, suite: &str) -> String {
        format!(
            "{base}{sep}{tests}{sep}{extension}{sep}{suite}{sep}",
            base = self.base_namespace,
            sep = NAMESPACE_SEPARATOR,
            tests = TESTS_NAMESPACE,
        )
    }
}
