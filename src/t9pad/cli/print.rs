use colored::Colorize;
use std::path::Path;
use t9pad::api::{CmdMessage, MessageLevel, TextonymGroup, WordCode};
use t9pad::config::KeypadConfig;
use t9pad::keypad::{Key, KeypadMap};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_keypad(keypad: &KeypadMap) {
    println!("{}", keypad);
}

pub(super) fn print_codes(codes: &[WordCode]) {
    let width = codes.iter().map(|wc| wc.word.chars().count()).max().unwrap_or(0);
    for wc in codes {
        println!(
            "{:<width$}  {}",
            wc.word,
            wc.code.to_string().yellow(),
            width = width
        );
    }
}

pub(super) fn print_keys(keys: &[(char, Key)]) {
    for (letter, key) in keys {
        println!("{}  {}", letter, key.to_string().yellow());
    }
}

pub(super) fn print_groups(groups: &[TextonymGroup]) {
    for group in groups {
        println!("{}  {}", group.code.to_string().yellow(), group.words.join(", "));
    }
}

pub(super) fn print_config(config: &KeypadConfig, path: Option<&Path>) {
    if let Some(path) = path {
        println!("{} {}", "path:".bold(), path.display());
    }
    println!("{} {}", "fold-case:".bold(), config.fold_case);
    println!("{}", "layout:".bold());
    for entry in &config.layout {
        let key = entry
            .key
            .map(|k| k.to_string())
            .unwrap_or_else(|| "?".to_string());
        let letters = entry.letters.as_deref().unwrap_or("?");
        println!("  {}:{}", key, letters);
    }
}
