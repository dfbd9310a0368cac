use crate::commands::{CmdMessage, CmdResult};
use crate::config::{KeyAssignment, KeypadConfig};
use crate::error::Result;
use std::path::Path;

/// Appends `key → letters` to the saved layout. The extended layout must build into a
/// valid keypad before anything is written.
pub fn run(config_dir: &Path, key: i64, letters: &str) -> Result<CmdResult> {
    let mut config = KeypadConfig::load(config_dir)?;
    config.layout.push(KeyAssignment::new(key, letters));
    let keypad = config.build_keypad()?;
    config.save(config_dir)?;

    let mut result = CmdResult::default()
        .with_keypad(keypad)
        .with_config(config.clone());
    result.add_message(CmdMessage::success(format!(
        "Mapped {} to key {}",
        config.normalize(letters),
        key
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::T9Error;
    use crate::keypad::Key;

    fn empty_layout(dir: &Path) {
        KeypadConfig {
            layout: Vec::new(),
            fold_case: true,
        }
        .save(dir)
        .unwrap();
    }

    #[test]
    fn mapping_is_saved() {
        let temp_dir = tempfile::tempdir().unwrap();
        empty_layout(temp_dir.path());

        let result = run(temp_dir.path(), 0, " ").unwrap();
        assert_eq!(
            result.keypad.unwrap().key_for(' ').unwrap(),
            Key::new(0).unwrap()
        );

        let saved = KeypadConfig::load(temp_dir.path()).unwrap();
        assert_eq!(saved.layout, vec![KeyAssignment::new(0, " ")]);
    }

    #[test]
    fn duplicate_letter_is_not_saved() {
        let temp_dir = tempfile::tempdir().unwrap();
        KeypadConfig::default().save(temp_dir.path()).unwrap();

        let err = run(temp_dir.path(), 3, "aef").unwrap_err();
        assert!(matches!(err, T9Error::DuplicateLetter { letter: 'a', key: 2 }));

        let saved = KeypadConfig::load(temp_dir.path()).unwrap();
        assert_eq!(saved, KeypadConfig::default());
    }

    #[test]
    fn out_of_range_key_is_not_saved() {
        let temp_dir = tempfile::tempdir().unwrap();
        empty_layout(temp_dir.path());

        assert!(matches!(
            run(temp_dir.path(), 10, "abc"),
            Err(T9Error::InvalidArgument(_))
        ));
        assert!(KeypadConfig::load(temp_dir.path()).unwrap().layout.is_empty());
    }
}
