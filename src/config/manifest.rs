//! Manifest loading.
//!
//! A manifest is a YAML mapping from a directory (relative to the source
//! root) to either `null`, meaning every entry found in that directory, or a
//! list of entry names:
//!
//! ```yaml
//! configs:
//!   - a.txt
//!   - b.txt
//! fonts: ~
//! ```
use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_yaml::Value;

use crate::error::ManifestError;

/// Entries selected from one source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entries {
    /// Every direct child of the source directory, listed at resolve time.
    All,
    /// Exactly these names, in manifest order. May be empty.
    Listed(Vec<String>),
}

/// A parsed manifest: directory keys in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    directories: Vec<(String, Entries)>,
}

impl Manifest {
    /// Build a manifest from already-parsed directory entries.
    ///
    /// Later duplicates of a key replace earlier ones, keeping the position
    /// of the first occurrence. [`Manifest::from_yaml`] relies on this for
    /// keys repeated in the document.
    #[must_use]
    pub fn new(directories: impl IntoIterator<Item = (String, Entries)>) -> Self {
        let mut manifest = Self::default();
        for (key, entries) in directories {
            if let Some(slot) = manifest.directories.iter_mut().find(|(k, _)| *k == key) {
                slot.1 = entries;
            } else {
                manifest.directories.push((key, entries));
            }
        }
        manifest
    }

    /// Read and validate the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or is
    /// not a mapping of directory names to `null` or a list of names.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content, path)
    }

    /// Parse manifest text. `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid YAML or does not have the
    /// manifest shape.
    pub fn from_yaml(content: &str, origin: &Path) -> Result<Self, ManifestError> {
        let path = || origin.to_path_buf();

        if content.trim().is_empty() {
            return Err(ManifestError::Empty { path: path() });
        }

        let pairs = match serde_yaml::from_str::<DocumentPairs>(content) {
            Ok(DocumentPairs(pairs)) => pairs,
            Err(mapping_err) => {
                let document: Value = serde_yaml::from_str(content)
                    .map_err(|source| ManifestError::Parse { path: path(), source })?;
                return Err(match document {
                    Value::Null => ManifestError::Empty { path: path() },
                    Value::Mapping(_) => ManifestError::Parse {
                        path: path(),
                        source: mapping_err,
                    },
                    other => ManifestError::NotAMapping {
                        path: path(),
                        found: describe(&other),
                    },
                });
            }
        };

        let mut directories = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            let directory = match key {
                Value::String(directory) => directory,
                other => {
                    return Err(ManifestError::InvalidKey {
                        path: path(),
                        found: describe(&other),
                    });
                }
            };

            let entries = match value {
                Value::Null => Entries::All,
                Value::Sequence(items) => {
                    let mut names = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Value::String(name) => names.push(name),
                            other => {
                                return Err(ManifestError::InvalidEntryName {
                                    path: path(),
                                    directory,
                                    found: describe(&other),
                                });
                            }
                        }
                    }
                    Entries::Listed(names)
                }
                other => {
                    return Err(ManifestError::InvalidEntries {
                        path: path(),
                        directory,
                        found: describe(&other),
                    });
                }
            };
            directories.push((directory, entries));
        }

        Ok(Self::new(directories))
    }

    /// Iterate over `(directory, entries)` in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entries)> {
        self.directories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of directory keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.directories.len()
    }

    /// Whether the manifest has no directory keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}

/// Top-level key/value pairs in document order, repeated keys included.
///
/// `serde_yaml`'s own `Mapping` rejects a repeated key; collected as pairs,
/// a later value replaces the earlier one in [`Manifest::new`].
struct DocumentPairs(Vec<(Value, Value)>);

impl<'de> Deserialize<'de> for DocumentPairs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PairsVisitor)
    }
}

struct PairsVisitor;

impl<'de> Visitor<'de> for PairsVisitor {
    type Value = DocumentPairs;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of directories")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(pair) = map.next_entry::<Value, Value>()? {
            pairs.push(pair);
        }
        Ok(DocumentPairs(pairs))
    }
}

/// Short description of a YAML value's kind for error messages.
const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
