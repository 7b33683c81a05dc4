//! Alias registry persistence (`~/.ug/cmd.json`).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::UgError;

/// The name→command mapping stored on disk.
///
/// Serialized as a plain JSON object; deserialization rejects any top-level
/// shape other than an object and any value that is not a string.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry(BTreeMap<String, String>);

impl Registry {
    /// Look up the command registered under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Register (or overwrite) `name -> command`.
    pub fn insert(&mut self, name: String, command: String) {
        self.0.insert(name, command);
    }

    /// Remove `name` if present. Removing an absent name is not an error.
    pub fn remove(&mut self, name: &str) {
        self.0.remove(name);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries sorted by alias name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Get the user's home directory in a cross-platform way.
pub fn get_home_dir() -> Option<PathBuf> {
    // Try HOME first (Unix-like systems)
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home));
    }

    // Try USERPROFILE (Windows)
    if let Some(userprofile) = std::env::var_os("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }

    // Try HOMEDRIVE + HOMEPATH (older Windows)
    if let (Some(homedrive), Some(homepath)) =
        (std::env::var_os("HOMEDRIVE"), std::env::var_os("HOMEPATH"))
    {
        let mut path = PathBuf::from(homedrive);
        path.push(homepath);
        return Some(path);
    }

    None
}

/// Handle to the on-disk registry file.
///
/// Every mutating operation is a full read-modify-write of the file with no
/// locking: concurrent writers race and the last write wins.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store rooted at `<home>/.ug/cmd.json`.
    ///
    /// Fails with [`UgError::ConfigUnavailable`] when no home directory can
    /// be resolved.
    pub fn from_home() -> Result<Self, UgError> {
        let home = get_home_dir().ok_or(UgError::ConfigUnavailable)?;
        Ok(Self::at(home.join(".ug").join("cmd.json")))
    }

    /// Store backed by an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full registry from disk.
    ///
    /// A missing file or empty/whitespace-only content yields an empty
    /// registry; non-empty content that is not a string-to-string JSON
    /// object fails with [`UgError::MalformedConfig`].
    pub fn load(&self) -> Result<Registry, UgError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Registry::default());
            }
            Err(err) => return Err(err.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Registry::default());
        }

        serde_json::from_str(&contents).map_err(|source| UgError::MalformedConfig {
            path: self.path.clone(),
            source,
        })
    }

    /// Serialize the full registry and overwrite the file in place, creating
    /// the parent directory if absent.
    pub fn save(&self, registry: &Registry) -> Result<(), UgError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(registry).map_err(|source| {
            UgError::MalformedConfig {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Register (or overwrite) an alias and persist the result.
    pub fn set_entry(&self, name: &str, command: &str) -> Result<(), UgError> {
        let mut registry = self.load()?;
        registry.insert(name.to_string(), command.to_string());
        self.save(&registry)
    }

    /// Remove an alias (if present) and persist the result.
    pub fn unset_entry(&self, name: &str) -> Result<(), UgError> {
        let mut registry = self.load()?;
        registry.remove(name);
        self.save(&registry)
    }
}
