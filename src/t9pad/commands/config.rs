use crate::commands::{CmdMessage, CmdResult};
use crate::config::KeypadConfig;
use crate::error::Result;
use std::path::Path;

/// Reports the config location and settings. A layout that does not build is flagged
/// here instead of failing, so a broken file can still be inspected.
pub fn run(config_dir: &Path) -> Result<CmdResult> {
    let config = KeypadConfig::load(config_dir)?;
    let mut result = CmdResult::default();
    if let Err(e) = config.build_keypad() {
        result.add_message(CmdMessage::error(format!("Layout does not build: {}", e)));
    }
    Ok(result
        .with_config(config)
        .with_config_path(KeypadConfig::path(config_dir)))
}
