use crate::commands::{CmdMessage, CmdResult, TextonymGroup};
use crate::error::Result;
use crate::keypad::KeypadMap;

/// Groups words by code. Only codes shared by two or more words count as groups;
/// the rest are reported as info messages.
pub fn run<W: AsRef<str>>(keypad: &KeypadMap, words: &[W]) -> Result<CmdResult> {
    let buckets = keypad.group_textonyms(words.iter().map(|w| w.as_ref()))?;

    let mut result = CmdResult::default();
    let mut groups = Vec::new();
    for (code, words) in buckets {
        if words.len() > 1 {
            groups.push(TextonymGroup { code, words });
        } else {
            result.add_message(CmdMessage::info(format!(
                "{} ({}) has no textonyms",
                words.join(", "),
                code
            )));
        }
    }

    if groups.is_empty() {
        result.add_message(CmdMessage::warning("No textonyms found."));
    }
    Ok(result.with_groups(groups))
}
