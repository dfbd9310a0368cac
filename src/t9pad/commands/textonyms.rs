use crate::commands::{CmdMessage, CmdResult, WordCode};
use crate::error::Result;
use crate::keypad::KeypadMap;

pub fn run(keypad: &KeypadMap, word1: &str, word2: &str) -> Result<CmdResult> {
    let first = WordCode {
        word: word1.to_string(),
        code: keypad.word_to_code(word1)?,
    };
    let second = WordCode {
        word: word2.to_string(),
        code: keypad.word_to_code(word2)?,
    };
    let are_textonyms = first.code == second.code;

    let mut result = CmdResult::default();
    if are_textonyms {
        result.add_message(CmdMessage::success(format!(
            "{} and {} are textonyms ({})",
            word1, word2, first.code
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} and {} are not textonyms ({} vs {})",
            word1, word2, first.code, second.code
        )));
    }
    result.textonyms = Some(are_textonyms);
    Ok(result.with_codes(vec![first, second]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::T9Error;

    #[test]
    fn matching_codes_are_textonyms() {
        let pad = KeypadMap::standard();
        let result = run(&pad, "good", "home").unwrap();
        assert_eq!(result.textonyms, Some(true));
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("4663"));
    }

    #[test]
    fn different_codes_report_both() {
        let pad = KeypadMap::standard();
        let result = run(&pad, "good", "hogs").unwrap();
        assert_eq!(result.textonyms, Some(false));
        assert!(result.messages[0].content.contains("4663 vs 4647"));
    }

    #[test]
    fn unmapped_word_is_an_error_not_false() {
        let pad = KeypadMap::standard();
        assert!(matches!(
            run(&pad, "good", "go0d"),
            Err(T9Error::NotFound('0'))
        ));
    }
}
