//! Response cache — content-addressed file store for model outputs.
//!
//! Keys are derived from prompt text only, so two calls with identical
//! prompts are the same request regardless of calling context. Entries are
//! tagged with their shape (`"str"` for plain text, otherwise a type name)
//! and never expire; eviction is an operational concern, not ours.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::warn;

/// Shape tag for plain-text entries in the on-disk format.
const TEXT_TYPE: &str = "str";

/// On-disk layout: one file per key at `<dir>/<key>.json`.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    data: Value,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Cache key for a (prompt, system prompt) pair.
    ///
    /// Known staleness risk: the key does not include a backend or model
    /// identifier, so switching backends with a warm cache returns results
    /// produced by the previous backend.
    pub fn key(prompt: &str, system_prompt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(prompt.as_bytes());
        hasher.update(b"|");
        hasher.update(system_prompt.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Returns the cached plain-text value for `key`, or `None` on a miss.
    /// A structured entry under the same key is a miss, not an error.
    pub fn get_text(&self, key: &str) -> Option<String> {
        let entry = self.read_entry(key)?;
        if entry.kind != TEXT_TYPE {
            return None;
        }
        entry.data.as_str().map(|s| s.to_string())
    }

    /// Returns the cached structured value for `key` if its stored type tag
    /// matches `type_name`. Mismatched or undeserializable entries are misses.
    pub fn get_typed<T: DeserializeOwned>(&self, key: &str, type_name: &str) -> Option<T> {
        let entry = self.read_entry(key)?;
        if entry.kind != type_name {
            return None;
        }
        match serde_json::from_value(entry.data) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("cache entry {key} does not deserialize as {type_name}: {e}");
                None
            }
        }
    }

    pub fn put_text(&self, key: &str, text: &str) {
        self.write_entry(
            key,
            &CacheEntry {
                data: Value::String(text.to_string()),
                kind: TEXT_TYPE.to_string(),
            },
        );
    }

    pub fn put_typed<T: Serialize>(&self, key: &str, value: &T, type_name: &str) {
        match serde_json::to_value(value) {
            Ok(data) => self.write_entry(
                key,
                &CacheEntry {
                    data,
                    kind: type_name.to_string(),
                },
            ),
            Err(e) => warn!("failed to serialize cache entry {key}: {e}"),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Corrupt or unreadable entries count as misses, never errors.
    fn read_entry(&self, key: &str) -> Option<CacheEntry> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        match read_json(&path) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("failed to load cache entry {key}: {e}");
                None
            }
        }
    }

    /// A failed write must not abort the calling request.
    fn write_entry(&self, key: &str, entry: &CacheEntry) {
        let path = self.path_for(key);
        let result = serde_json::to_string(entry)
            .map_err(anyhow::Error::from)
            .and_then(|body| fs::write(&path, body).map_err(anyhow::Error::from));
        if let Err(e) = result {
            warn!("failed to write cache entry {key}: {e}");
        }
    }
}

fn read_json(path: &Path) -> anyhow::Result<CacheEntry> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
