use crate::error::{Result, T9Error};
use crate::keypad::{KeypadMap, STANDARD_LAYOUT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// One `key → letters` line of a layout. Both fields may be missing in a hand-edited
/// file; that is reported when the layout is applied, not when it is parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyAssignment {
    pub key: Option<i64>,
    pub letters: Option<String>,
}

impl KeyAssignment {
    pub fn new(key: i64, letters: impl Into<String>) -> Self {
        Self {
            key: Some(key),
            letters: Some(letters.into()),
        }
    }
}

/// Configuration for t9pad, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeypadConfig {
    /// Key assignments applied in order to build the keypad
    #[serde(default = "default_layout")]
    pub layout: Vec<KeyAssignment>,

    /// Lowercase words and letters before looking them up
    #[serde(default = "default_fold_case")]
    pub fold_case: bool,
}

fn default_layout() -> Vec<KeyAssignment> {
    STANDARD_LAYOUT
        .iter()
        .map(|(key, letters)| KeyAssignment::new(i64::from(*key), *letters))
        .collect()
}

fn default_fold_case() -> bool {
    true
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            fold_case: default_fold_case(),
        }
    }
}

impl KeypadConfig {
    pub fn path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = Self::path(config_dir);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(T9Error::Io)?;
        let config: KeypadConfig =
            serde_json::from_str(&content).map_err(T9Error::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(T9Error::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(T9Error::Serialization)?;
        fs::write(Self::path(config_dir), content).map_err(T9Error::Io)?;
        Ok(())
    }

    /// Builds the keypad by applying every assignment through the checked insert path,
    /// so a layout with a bad key or a repeated letter is rejected as a whole.
    pub fn build_keypad(&self) -> Result<KeypadMap> {
        let mut pad = KeypadMap::new();
        for entry in &self.layout {
            let letters = entry.letters.as_deref().map(|l| self.normalize(l));
            pad.add_optional_mapping(entry.key, letters.as_deref())?;
        }
        Ok(pad)
    }

    /// Applies `fold_case` to user input. Folding is per char and keeps a char whose
    /// lowercase form is more than one char (`'İ'`), so the char count never changes.
    pub fn normalize(&self, text: &str) -> String {
        if !self.fold_case {
            return text.to_string();
        }
        text.chars()
            .map(|c| {
                let mut lower = c.to_lowercase();
                match (lower.next(), lower.next()) {
                    (Some(folded), None) => folded,
                    _ => c,
                }
            })
            .collect()
    }
}
