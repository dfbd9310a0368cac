//! # API Facade
//!
//! [`T9Api`] is the single entry point a UI client talks to. It owns the loaded
//! [`KeypadConfig`] and the directory it came from, builds the [`KeypadMap`] the
//! commands run against, and applies the config's input normalization.
//!
//! The facade does no business logic and no terminal I/O: it returns `Result<CmdResult>`
//! and leaves presentation to the caller.

use crate::commands;
use crate::config::KeypadConfig;
use crate::error::{Result, T9Error};
use crate::keypad::KeypadMap;
use std::path::{Path, PathBuf};

pub struct T9Api {
    config: KeypadConfig,
    config_dir: PathBuf,
}

impl T9Api {
    pub fn new(config: KeypadConfig, config_dir: PathBuf) -> Self {
        Self { config, config_dir }
    }

    /// Loads the config stored in `config_dir`, falling back to defaults.
    pub fn load(config_dir: PathBuf) -> Result<Self> {
        let config = KeypadConfig::load(&config_dir)?;
        Ok(Self::new(config, config_dir))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn keypad(&self) -> Result<KeypadMap> {
        self.config.build_keypad()
    }

    pub fn show(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.keypad()?)
    }

    pub fn codes<W: AsRef<str>>(&self, words: &[W]) -> Result<commands::CmdResult> {
        let words = self.normalize_all(words);
        commands::code::run(&self.keypad()?, &words)
    }

    pub fn lookup<L: AsRef<str>>(&self, letters: &[L]) -> Result<commands::CmdResult> {
        let letters = letters
            .iter()
            .map(|l| parse_letter(&self.config.normalize(l.as_ref())))
            .collect::<Result<Vec<_>>>()?;
        commands::lookup::run(&self.keypad()?, &letters)
    }

    pub fn textonyms(&self, word1: &str, word2: &str) -> Result<commands::CmdResult> {
        commands::textonyms::run(
            &self.keypad()?,
            &self.config.normalize(word1),
            &self.config.normalize(word2),
        )
    }

    pub fn group<W: AsRef<str>>(&self, words: &[W]) -> Result<commands::CmdResult> {
        let words = self.normalize_all(words);
        commands::group::run(&self.keypad()?, &words)
    }

    /// Adds a mapping to the saved layout and reloads the in-memory config on success.
    pub fn map_key(&mut self, key: i64, letters: &str) -> Result<commands::CmdResult> {
        let result = commands::map::run(&self.config_dir, key, letters)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.config_dir)
    }

    pub fn config(&self) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir)
    }

    fn normalize_all<W: AsRef<str>>(&self, words: &[W]) -> Vec<String> {
        words
            .iter()
            .map(|w| self.config.normalize(w.as_ref()))
            .collect()
    }
}

fn parse_letter(input: &str) -> Result<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(T9Error::InvalidArgument(format!(
            "expected a single letter, got '{}'",
            input
        ))),
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, TextonymGroup, WordCode};
