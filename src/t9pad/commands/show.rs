use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::keypad::KeypadMap;

pub fn run(keypad: &KeypadMap) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_keypad(keypad.clone());
    if keypad.is_empty() {
        result.add_message(CmdMessage::warning("No keys are mapped."));
    }
    Ok(result)
}
