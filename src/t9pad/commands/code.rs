use crate::commands::{CmdResult, WordCode};
use crate::error::Result;
use crate::keypad::KeypadMap;

pub fn run<W: AsRef<str>>(keypad: &KeypadMap, words: &[W]) -> Result<CmdResult> {
    let codes = words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            keypad.word_to_code(word).map(|code| WordCode {
                word: word.to_string(),
                code,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_codes(codes))
}
