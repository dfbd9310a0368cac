use crate::commands::{CmdMessage, CmdResult};
use crate::config::KeypadConfig;
use crate::error::Result;
use std::path::Path;

pub fn run(config_dir: &Path) -> Result<CmdResult> {
    let path = KeypadConfig::path(config_dir);
    let mut result = CmdResult::default();

    if path.exists() {
        result.add_message(CmdMessage::info(format!(
            "Config already exists at {}",
            path.display()
        )));
        return Ok(result.with_config_path(path));
    }

    let config = KeypadConfig::default();
    config.save(config_dir)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized t9pad config at {}",
        path.display()
    )));
    Ok(result.with_config(config).with_config_path(path))
}
