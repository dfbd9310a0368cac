use crate::config::KeypadConfig;
use crate::keypad::{Code, Key, KeypadMap};
use std::path::PathBuf;

pub mod code;
pub mod config;
pub mod group;
pub mod init;
pub mod lookup;
pub mod map;
pub mod show;
pub mod textonyms;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A word together with the key sequence it types out to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCode {
    pub word: String,
    pub code: Code,
}

/// Words sharing one code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextonymGroup {
    pub code: Code,
    pub words: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub keypad: Option<KeypadMap>,
    pub codes: Vec<WordCode>,
    pub keys: Vec<(char, Key)>,
    pub groups: Vec<TextonymGroup>,
    pub textonyms: Option<bool>,
    pub config: Option<KeypadConfig>,
    pub config_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_keypad(mut self, keypad: KeypadMap) -> Self {
        self.keypad = Some(keypad);
        self
    }

    pub fn with_codes(mut self, codes: Vec<WordCode>) -> Self {
        self.codes = codes;
        self
    }

    pub fn with_keys(mut self, keys: Vec<(char, Key)>) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_groups(mut self, groups: Vec<TextonymGroup>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_config(mut self, config: KeypadConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }
}
