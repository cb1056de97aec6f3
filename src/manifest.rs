//! Manifest mutation: the `composer.json` pass of the installer.
//!
//! The manifest is read as a raw JSON object and mutated in memory, so
//! fields the installer knows nothing about survive untouched. The write
//! is a whole-document replace; there are no incremental update
//! semantics. A manifest that does not parse as a JSON object is fatal.

use crate::answers::{Answers, NAMESPACE_SEPARATOR};
use crate::error::{InstallerError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Manifest file name, resolved directly under the project root.
pub const MANIFEST_FILE: &str = "composer.json";

/// Autoload prefix of the installer itself, removed after installation.
pub const INSTALLER_AUTOLOAD_PREFIX: &str = "ApiClients\\Middleware\\Installer\\";
/// Autoload prefix of the unpersonalized skeleton sources.
pub const SKELETON_AUTOLOAD_PREFIX: &str = "ApiClients\\Middleware\\Skeleton\\";
/// Dev autoload prefix of the unpersonalized skeleton tests.
pub const SKELETON_TEST_AUTOLOAD_PREFIX: &str = "ApiClients\\Tests\\Middleware\\Skeleton\\";
/// Dependencies only needed to run the installer, removed afterwards.
pub const BOOTSTRAP_REQUIREMENTS: [&str; 4] = [
    "composer/composer",
    "nikic/php-parser",
    "ocramius/package-versions",
    "symfony/console",
];
/// The script hook that launches the installer on project creation.
pub const POST_CREATE_SCRIPT: &str = "post-create-project-cmd";

const AUTOLOAD_SECTION: &str = "autoload";
const AUTOLOAD_DEV_SECTION: &str = "autoload-dev";
const PSR4_SECTION: &str = "psr-4";
const REQUIRE_SECTION: &str = "require";
const SCRIPTS_SECTION: &str = "scripts";

/// One entry of the manifest's `authors` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    /// Author display name.
    pub name: String,
    /// Author email address.
    pub email: String,
}

/// Location of the manifest for a given project root.
#[must_use]
pub fn manifest_path(project_root: &Utf8Path) -> Utf8PathBuf {
    project_root.join(MANIFEST_FILE)
}

/// Read and parse the manifest into its top-level JSON object.
///
/// # Errors
///
/// Returns [`InstallerError::ManifestNotFound`] when the file is absent
/// and [`InstallerError::ManifestParse`] when it is not a JSON object.
pub fn load(path: &Utf8Path) -> Result<Map<String, Value>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(InstallerError::ManifestNotFound {
                path: path.to_owned(),
            });
        }
        Err(source) => return Err(source.into()),
    };

    let document: Value =
        serde_json::from_str(&content).map_err(|source| InstallerError::ManifestParse {
            path: path.to_owned(),
            reason: source.to_string(),
        })?;

    match document {
        Value::Object(map) => {
            log::debug!("parsed manifest with {} top-level fields", map.len());
            Ok(map)
        }
        _ => Err(InstallerError::ManifestParse {
            path: path.to_owned(),
            reason: "top-level value is not an object".to_owned(),
        }),
    }
}

/// Apply the answer set to the manifest document in memory.
///
/// Sets `name`, replaces `authors` wholesale with a singleton record,
/// inserts the two autoload mappings, and removes the bootstrap-only
/// entries. Removing an entry that is already absent is a no-op, which
/// makes the mutation idempotent on everything it touches.
pub fn apply(document: &mut Map<String, Value>, answers: &Answers) {
    set_package_name(document, answers);
    set_authors(document, answers);
    add_autoload_mappings(document, answers);
    remove_bootstrap_entries(document);
}

/// Serialize the document and replace the manifest on disk.
///
/// # Errors
///
/// Returns [`InstallerError::ManifestWrite`] when serialization or the
/// filesystem write fails.
pub fn store(path: &Utf8Path, document: &Map<String, Value>) -> Result<()> {
    let mut rendered =
        serde_json::to_string_pretty(document).map_err(|source| InstallerError::ManifestWrite {
            path: path.to_owned(),
            reason: source.to_string(),
        })?;
    rendered.push('\n');
    std::fs::write(path, rendered).map_err(|source| InstallerError::ManifestWrite {
        path: path.to_owned(),
        reason: source.to_string(),
    })
}

fn set_package_name(document: &mut Map<String, Value>, answers: &Answers) {
    document.insert(
        "name".to_owned(),
        Value::String(answers.package_name.clone()),
    );
}

fn set_authors(document: &mut Map<String, Value>, answers: &Answers) {
    let author = AuthorRecord {
        name: answers.author_name.clone(),
        email: answers.author_email.clone(),
    };
    document.insert("authors".to_owned(), json!([author]));
}

fn add_autoload_mappings(document: &mut Map<String, Value>, answers: &Answers) {
    let source_prefix = format!("{}{NAMESPACE_SEPARATOR}", answers.source_namespace());
    psr4_map(document, AUTOLOAD_SECTION).insert(source_prefix, json!("src/"));

    let test_prefix = format!("{}{NAMESPACE_SEPARATOR}", answers.test_namespace());
    psr4_map(document, AUTOLOAD_DEV_SECTION).insert(test_prefix, json!("tests/"));
}

fn remove_bootstrap_entries(document: &mut Map<String, Value>) {
    remove_nested(
        document,
        AUTOLOAD_SECTION,
        PSR4_SECTION,
        INSTALLER_AUTOLOAD_PREFIX,
    );
    remove_nested(
        document,
        AUTOLOAD_SECTION,
        PSR4_SECTION,
        SKELETON_AUTOLOAD_PREFIX,
    );
    remove_nested(
        document,
        AUTOLOAD_DEV_SECTION,
        PSR4_SECTION,
        SKELETON_TEST_AUTOLOAD_PREFIX,
    );
    for dependency in BOOTSTRAP_REQUIREMENTS {
        remove_flat(document, REQUIRE_SECTION, dependency);
    }
    remove_flat(document, SCRIPTS_SECTION, POST_CREATE_SCRIPT);
}

/// Borrow the `psr-4` map under the given autoload section, creating
/// both levels when absent. A non-object value at either level is
/// replaced; the installer owns these sections after personalization.
fn psr4_map<'a>(document: &'a mut Map<String, Value>, section: &str) -> &'a mut Map<String, Value> {
    object_entry(object_entry(document, section), PSR4_SECTION)
}

fn object_entry<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let value = map
        .entry(key.to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    if let Value::Object(inner) = value {
        inner
    } else {
        unreachable!("entry was just normalized to an object")
    }
}

/// Remove a key from a flat top-level section, tolerating absence.
fn remove_flat(document: &mut Map<String, Value>, section: &str, key: &str) {
    if let Some(Value::Object(map)) = document.get_mut(section) {
        map.remove(key);
    }
}

/// Remove a key from a nested section, tolerating absence at any level.
fn remove_nested(document: &mut Map<String, Value>, outer: &str, inner: &str, key: &str) {
    if let Some(Value::Object(outer_map)) = document.get_mut(outer) {
        if let Some(Value::Object(inner_map)) = outer_map.get_mut(inner) {
            inner_map.remove(key);
        }
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
