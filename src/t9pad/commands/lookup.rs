use crate::commands::CmdResult;
use crate::error::Result;
use crate::keypad::KeypadMap;

pub fn run(keypad: &KeypadMap, letters: &[char]) -> Result<CmdResult> {
    let keys = letters
        .iter()
        .map(|&letter| keypad.key_for(letter).map(|key| (letter, key)))
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_keys(keys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::T9Error;
    use crate::keypad::Key;

    #[test]
    fn looks_up_each_letter() {
        let pad = KeypadMap::standard();
        let result = run(&pad, &['a', 'z']).unwrap();
        assert_eq!(
            result.keys,
            vec![('a', Key::new(2).unwrap()), ('z', Key::new(9).unwrap())]
        );
    }

    #[test]
    fn unknown_letter_is_not_found() {
        let mut pad = KeypadMap::new();
        pad.add_mapping(2, "abc").unwrap();
        assert!(matches!(run(&pad, &['z']), Err(T9Error::NotFound('z'))));
    }
}
