//! Name lookup used when rendering decoded packets.
//!
//! The decoder only asks a [`Controller`] for names; it never interprets zone,
//! reset-type or state codes itself. [`NameTable`] is a map-backed
//! implementation loaded from a JSON file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Resolves raw field values to display names.
pub trait Controller {
    /// Name for the 3-byte zone field, passed exactly as it sits in the packet.
    fn zone_name(&self, zone: [u8; 3]) -> String;
    fn reset_type_name(&self, reset_type: u8) -> String;
    fn state_name(&self, state: u8) -> String;
}

/// Errors returned while loading a name table.
#[derive(Debug, Error)]
pub enum NamesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid names JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {section} key '{key}': expected a decimal or 0x-prefixed value")]
    InvalidKey { section: &'static str, key: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NameTableFile {
    #[serde(default)]
    zones: BTreeMap<String, String>,
    #[serde(default)]
    reset_types: BTreeMap<String, String>,
    #[serde(default)]
    states: BTreeMap<String, String>,
}

/// Map-backed [`Controller`]; unmapped codes render as hex.
///
/// # Examples
/// ```
/// use alienfx_core::{Controller, NameTable};
///
/// let names = NameTable::from_json_str(r#"{"zones": {"0x000001": "Logo"}}"#)?;
/// assert_eq!(names.zone_name([0, 0, 1]), "Logo");
/// assert_eq!(names.zone_name([0, 0, 2]), "UNKNOWN ZONE 0x000002");
/// # Ok::<(), alienfx_core::NamesError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    zones: BTreeMap<u32, String>,
    reset_types: BTreeMap<u8, String>,
    states: BTreeMap<u8, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, NamesError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, NamesError> {
        let file: NameTableFile = serde_json::from_str(text)?;
        let mut table = Self::new();
        for (key, name) in file.zones {
            let zone = parse_key(&key)
                .filter(|zone| *zone <= 0x00ff_ffff)
                .ok_or(NamesError::InvalidKey {
                    section: "zones",
                    key: key.clone(),
                })?;
            table.zones.insert(zone as u32, name);
        }
        for (key, name) in file.reset_types {
            let reset_type = parse_byte_key("reset_types", &key)?;
            table.reset_types.insert(reset_type, name);
        }
        for (key, name) in file.states {
            let state = parse_byte_key("states", &key)?;
            table.states.insert(state, name);
        }
        tracing::debug!(
            zones = table.zones.len(),
            reset_types = table.reset_types.len(),
            states = table.states.len(),
            "loaded name table"
        );
        Ok(table)
    }

    pub fn with_zone(mut self, zone: u32, name: impl Into<String>) -> Self {
        self.zones.insert(zone & 0x00ff_ffff, name.into());
        self
    }

    pub fn with_reset_type(mut self, reset_type: u8, name: impl Into<String>) -> Self {
        self.reset_types.insert(reset_type, name.into());
        self
    }

    pub fn with_state(mut self, state: u8, name: impl Into<String>) -> Self {
        self.states.insert(state, name.into());
        self
    }
}

impl Controller for NameTable {
    fn zone_name(&self, zone: [u8; 3]) -> String {
        let code = u32::from_be_bytes([0, zone[0], zone[1], zone[2]]);
        self.zones
            .get(&code)
            .cloned()
            .unwrap_or_else(|| format!("UNKNOWN ZONE {:#08x}", code))
    }

    fn reset_type_name(&self, reset_type: u8) -> String {
        self.reset_types
            .get(&reset_type)
            .cloned()
            .unwrap_or_else(|| format!("UNKNOWN RESET {:#x}", reset_type))
    }

    fn state_name(&self, state: u8) -> String {
        self.states
            .get(&state)
            .cloned()
            .unwrap_or_else(|| format!("UNKNOWN STATE {:#x}", state))
    }
}

fn parse_key(key: &str) -> Option<u64> {
    let key = key.trim();
    match key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => key.parse().ok(),
    }
}

fn parse_byte_key(section: &'static str, key: &str) -> Result<u8, NamesError> {
    parse_key(key)
        .and_then(|value| u8::try_from(value).ok())
        .ok_or(NamesError::InvalidKey {
            section,
            key: key.to_string(),
        })
}
