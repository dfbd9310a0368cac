//! # CLI Layer
//!
//! One possible UI client for the t9pad library. This is the only place that reads
//! arguments, touches stdout/stderr or decides the exit code.
//!
//! - `run()`: parse arguments, build the [`T9Api`], dispatch
//! - `resolve_config_dir()`: `--config-dir`, then `$T9PAD_HOME`, then the platform dir
//! - `print_result()`: turn a `CmdResult` into terminal output

use super::print::{
    print_codes, print_config, print_groups, print_keypad, print_keys, print_messages,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use t9pad::api::{CmdResult, T9Api};
use t9pad::error::{Result, T9Error};

const HOME_ENV: &str = "T9PAD_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = resolve_config_dir(cli.config_dir.clone())?;
    let mut api = T9Api::load(config_dir)?;

    // A broken layout is reported by the query commands themselves.
    if cli.verbose {
        if let Ok(keypad) = api.keypad() {
            print_keypad(&keypad);
        }
    }

    let result = match cli.command {
        Some(Commands::Show) => api.show(),
        Some(Commands::Code { words }) => api.codes(&words),
        Some(Commands::Key { letters }) => api.lookup(&letters),
        Some(Commands::Textonyms { word1, word2 }) => api.textonyms(&word1, &word2),
        Some(Commands::Group { words }) => api.group(&words),
        Some(Commands::Map { key, letters }) => api.map_key(key, &letters),
        Some(Commands::Init) => api.init(),
        Some(Commands::Config) => api.config(),
        None => api.show(),
    }?;

    print_result(&result);
    Ok(())
}

fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "t9pad", "t9pad")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| T9Error::Config("Could not determine config dir".to_string()))
}

fn print_result(result: &CmdResult) {
    // `map` returns both; the config is only echoed by `init` and `config`.
    if let Some(keypad) = &result.keypad {
        print_keypad(keypad);
    } else if let Some(config) = &result.config {
        print_config(config, result.config_path.as_deref());
    } else if let Some(path) = &result.config_path {
        println!("{}", path.display());
    }
    print_codes(&result.codes);
    print_keys(&result.keys);
    print_groups(&result.groups);
    print_messages(&result.messages);
}
