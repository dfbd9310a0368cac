//! # Keypad Map
//!
//! [`KeypadMap`] assigns letters to the ten numeric keys of a phone keypad and answers
//! the T9 questions built on top of that assignment: which key owns a letter, what digit
//! sequence a word types out to, and whether two words are textonyms.
//!
//! ## Invariants
//!
//! - A letter belongs to at most one key across the whole map.
//! - Keys are digits 0-9. [`Key`] can only be built through a checked conversion, so an
//!   out-of-range key never reaches the map.
//!
//! [`KeypadMap::add_mapping`] enforces the first invariant atomically: the whole batch of
//! letters is validated before anything is inserted, so a failed call leaves the map
//! exactly as it was.
//!
//! ## Seeding
//!
//! [`KeypadMap::from_seed`] trusts its input. Seed data is expected to satisfy the
//! uniqueness invariant already; when it does not, lookups resolve a shared letter to the
//! lowest key that holds it.
//!
//! ## Reverse Index
//!
//! Alongside the key → letters table the map keeps a letter → key index, updated on every
//! insertion. Duplicate detection and [`KeypadMap::key_for`] are both a single hash
//! lookup instead of a scan over every key.

use crate::error::{Result, T9Error};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

pub const MIN_KEY: u8 = 0;
pub const MAX_KEY: u8 = 9;

/// Letter groups of a standard telephone keypad.
pub const STANDARD_LAYOUT: [(u8, &str); 8] = [
    (2, "abc"),
    (3, "def"),
    (4, "ghi"),
    (5, "jkl"),
    (6, "mno"),
    (7, "pqrs"),
    (8, "tuv"),
    (9, "wxyz"),
];

static STANDARD_PAD: Lazy<KeypadMap> = Lazy::new(|| {
    KeypadMap::from_seed(
        STANDARD_LAYOUT
            .iter()
            .map(|(key, letters)| (Key(*key), *letters)),
    )
});

/// A single keypad button, always in the range 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u8);

impl Key {
    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(MIN_KEY)..=i64::from(MAX_KEY)).contains(&value) {
            Ok(Key(value as u8))
        } else {
            Err(T9Error::InvalidArgument(format!(
                "key {} is outside {}-{}",
                value, MIN_KEY, MAX_KEY
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Key {
    type Error = T9Error;

    fn try_from(value: i64) -> Result<Self> {
        Key::new(value)
    }
}

impl From<Key> for u8 {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The key sequence a word types out to. Displays as a digit string, e.g. `4663`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(Vec<Key>);

impl Code {
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Key> for Code {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Code(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.0 {
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeypadMap {
    pad: BTreeMap<Key, BTreeSet<char>>,
    owners: HashMap<char, Key>,
}

impl KeypadMap {
    /// Constructs an empty keypad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a keypad from existing key → letters pairs without re-validating
    /// letter uniqueness. Pairs for the same key are merged.
    pub fn from_seed<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = (Key, S)>,
        S: AsRef<str>,
    {
        let mut pad: BTreeMap<Key, BTreeSet<char>> = BTreeMap::new();
        for (key, letters) in seed {
            let letters = letters.as_ref();
            if letters.is_empty() {
                continue;
            }
            pad.entry(key).or_default().extend(letters.chars());
        }

        // Ascending key order, so the lowest key keeps a shared letter.
        let mut owners = HashMap::new();
        for (key, letters) in &pad {
            for letter in letters {
                owners.entry(*letter).or_insert(*key);
            }
        }

        Self { pad, owners }
    }

    /// The standard 2-9 telephone layout.
    pub fn standard() -> Self {
        STANDARD_PAD.clone()
    }

    /// Adds every character of `letters` to `key`, keeping letters already there.
    ///
    /// Fails with [`T9Error::InvalidArgument`] if `key` is outside 0-9 and with
    /// [`T9Error::DuplicateLetter`] if any letter is already on the pad. Letters repeated
    /// within `letters` are added once. Nothing is inserted unless the whole batch is valid.
    pub fn add_mapping(&mut self, key: i64, letters: &str) -> Result<()> {
        let key = Key::new(key)?;

        let mut batch = BTreeSet::new();
        for letter in letters.chars() {
            if let Some(owner) = self.owners.get(&letter) {
                return Err(T9Error::DuplicateLetter {
                    letter,
                    key: owner.value(),
                });
            }
            batch.insert(letter);
        }

        if batch.is_empty() {
            return Ok(());
        }

        for letter in &batch {
            self.owners.insert(*letter, key);
        }
        self.pad.entry(key).or_default().extend(batch);
        Ok(())
    }

    /// Same as [`KeypadMap::add_mapping`] for callers whose key or letters may be absent,
    /// such as entries read from a config file. Absence is an invalid argument.
    pub fn add_optional_mapping(&mut self, key: Option<i64>, letters: Option<&str>) -> Result<()> {
        match (key, letters) {
            (Some(key), Some(letters)) => self.add_mapping(key, letters),
            (None, _) => Err(T9Error::InvalidArgument("key is required".into())),
            (_, None) => Err(T9Error::InvalidArgument("letters are required".into())),
        }
    }

    /// Keys that have at least one letter assigned.
    pub fn key_set(&self) -> BTreeSet<Key> {
        self.pad.keys().copied().collect()
    }

    /// Every letter on the pad, grouped by ascending key.
    pub fn letters(&self) -> Vec<char> {
        self.pad.values().flatten().copied().collect()
    }

    pub fn letters_for(&self, key: Key) -> Vec<char> {
        self.pad
            .get(&key)
            .map(|letters| letters.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn key_for(&self, letter: char) -> Result<Key> {
        self.owners
            .get(&letter)
            .copied()
            .ok_or(T9Error::NotFound(letter))
    }

    /// Converts a word to its key sequence, failing on the first unmapped character.
    pub fn word_to_code(&self, word: &str) -> Result<Code> {
        word.chars().map(|letter| self.key_for(letter)).collect()
    }

    /// Two words are textonyms when they type out the same key sequence.
    pub fn are_textonyms(&self, word1: &str, word2: &str) -> Result<bool> {
        Ok(self.word_to_code(word1)? == self.word_to_code(word2)?)
    }

    /// Buckets words by their code. Words keep their input order inside a bucket.
    pub fn group_textonyms<I, S>(&self, words: I) -> Result<BTreeMap<Code, Vec<String>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: BTreeMap<Code, Vec<String>> = BTreeMap::new();
        for word in words {
            let word = word.as_ref();
            let code = self.word_to_code(word)?;
            groups.entry(code).or_default().push(word.to_string());
        }
        Ok(groups)
    }

    /// Number of keys with letters.
    pub fn len(&self) -> usize {
        self.pad.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pad.is_empty()
    }
}

impl fmt::Display for KeypadMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<T9Pad:")?;
        for (key, letters) in &self.pad {
            writeln!(f, "{}:{}", key, letters.iter().collect::<String>())?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: i64) -> Key {
        Key::new(value).unwrap()
    }

    #[test]
    fn key_accepts_bounds() {
        assert_eq!(key(0).value(), 0);
        assert_eq!(key(9).value(), 9);
    }

    #[test]
    fn key_rejects_out_of_range() {
        assert!(matches!(Key::new(10), Err(T9Error::InvalidArgument(_))));
        assert!(matches!(Key::new(-1), Err(T9Error::InvalidArgument(_))));
        assert!(matches!(Key::try_from(i64::MAX), Err(T9Error::InvalidArgument(_))));
    }

    #[test]
    fn add_mapping_merges_into_existing_key() {
        let mut pad = KeypadMap::new();
        pad.add_mapping(2, "ab").unwrap();
        pad.add_mapping(2, "c").unwrap();

        assert_eq!(pad.letters_for(key(2)), vec!['a', 'b', 'c']);
        assert_eq!(pad.len(), 1);
    }

    #[test]
    fn add_mapping_rejects_letter_on_same_key() {
        let mut pad = KeypadMap::new();
        pad.add_mapping(2, "abc").unwrap();

        let err = pad.add_mapping(2, "c").unwrap_err();
        assert!(matches!(err, T9Error::DuplicateLetter { letter: 'c', key: 2 }));
    }

    #[test]
    fn add_mapping_dedupes_repeat_within_batch() {
        let mut pad = KeypadMap::new();
        pad.add_mapping(4, "gig").unwrap();

        assert_eq!(pad.letters_for(key(4)), vec!['g', 'i']);
        assert_eq!(pad.to_string(), "<T9Pad:\n4:gi\n>");
        assert_eq!(pad.key_for('g').unwrap(), key(4));
    }

    #[test]
    fn repeat_within_batch_still_checks_pad() {
        let mut pad = KeypadMap::new();
        pad.add_mapping(2, "abc").unwrap();

        let err = pad.add_mapping(4, "gga").unwrap_err();
        assert!(matches!(err, T9Error::DuplicateLetter { letter: 'a', key: 2 }));
        assert!(pad.key_for('g').is_err());
    }

    #[test]
    fn failed_batch_inserts_nothing() {
        let mut pad = KeypadMap::new();
        pad.add_mapping(2, "abc").unwrap();
        let before = pad.clone();

        // 'x' and 'y' precede the duplicate and must not be applied.
        assert!(pad.add_mapping(9, "xyc").is_err());
        assert_eq!(pad, before);
        assert!(pad.key_for('x').is_err());
    }

    #[test]
    fn empty_letters_create_no_entry() {
        let mut pad = KeypadMap::new();
        pad.add_mapping(1, "").unwrap();

        assert!(pad.key_set().is_empty());
        assert_eq!(pad.to_string(), "<T9Pad:\n>");
    }

    #[test]
    fn empty_letters_still_check_key_range() {
        let mut pad = KeypadMap::new();
        assert!(matches!(
            pad.add_mapping(12, ""),
            Err(T9Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn optional_mapping_requires_both_arguments() {
        let mut pad = KeypadMap::new();
        assert!(matches!(
            pad.add_optional_mapping(None, Some("abc")),
            Err(T9Error::InvalidArgument(_))
        ));
        assert!(matches!(
            pad.add_optional_mapping(Some(2), None),
            Err(T9Error::InvalidArgument(_))
        ));
        pad.add_optional_mapping(Some(2), Some("abc")).unwrap();
        assert_eq!(pad.key_for('b').unwrap(), key(2));
    }

    #[test]
    fn seed_is_not_revalidated() {
        let pad = KeypadMap::from_seed(vec![(key(5), "ab"), (key(3), "bc")]);

        assert_eq!(pad.letters_for(key(5)), vec!['a', 'b']);
        assert_eq!(pad.letters_for(key(3)), vec!['b', 'c']);
        assert_eq!(pad.key_for('b').unwrap(), key(3));
    }

    #[test]
    fn standard_layout_covers_alphabet() {
        let pad = KeypadMap::standard();
        let mut letters = pad.letters();
        letters.sort();

        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
        assert_eq!(pad.key_for('s').unwrap(), key(7));
        assert!(!pad.key_set().contains(&key(0)));
        assert!(!pad.key_set().contains(&key(1)));
    }

    #[test]
    fn code_displays_as_digits() {
        let code: Code = [key(4), key(6), key(6), key(3)].into_iter().collect();
        assert_eq!(code.to_string(), "4663");
        assert_eq!(code.len(), 4);
    }

    #[test]
    fn empty_word_has_empty_code() {
        let pad = KeypadMap::standard();
        let code = pad.word_to_code("").unwrap();

        assert!(code.is_empty());
        assert!(pad.are_textonyms("", "").unwrap());
    }

    #[test]
    fn group_textonyms_buckets_by_code() {
        let pad = KeypadMap::standard();
        let groups = pad
            .group_textonyms(["good", "home", "hogs", "gone"])
            .unwrap();

        let good = pad.word_to_code("good").unwrap();
        assert_eq!(groups[&good], vec!["good", "home", "gone"]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn group_textonyms_fails_on_unmapped_word() {
        let pad = KeypadMap::standard();
        let err = pad.group_textonyms(["good", "g00d"]).unwrap_err();
        assert!(matches!(err, T9Error::NotFound('0')));
    }
}
