use std::{error, fmt::Display};

use log::debug;

#[derive(Debug)]
pub enum Error {
    TooManyWords(usize),
    WordTooShort(String),
    NonAlphabeticWord(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TooManyWords(n) => write!(
                f,
                "Given {} digit words, but only 9 digits can be spelled out.",
                n
            ),
            Error::WordTooShort(w) => write!(
                f,
                "Digit word({}) needs at least two letters to build its marker.",
                w
            ),
            Error::NonAlphabeticWord(w) => {
                write!(f, "Digit word({}) contains non-alphabetic character.", w)
            }
        }
    }
}

impl error::Error for Error {}

pub const ENGLISH_DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Substitution table turning spelled-out digits into markers.
///
/// The marker of a word keeps its first and last letter around the digit (`eight` -> `e8t`), so
/// words sharing a boundary letter (`eightwo`, `twone`) are all still found whichever one is
/// replaced first.
#[derive(Debug, Clone)]
pub struct DigitWords {
    subs: Vec<(String, String)>,
}

impl DigitWords {
    /// Word at index `i` stands for digit `i + 1`.
    pub fn new(words: &[&str]) -> Result<Self, Error> {
        if words.len() > 9 {
            return Err(Error::TooManyWords(words.len()));
        }

        let mut subs = Vec::with_capacity(words.len());
        for (ind, word) in words.iter().enumerate() {
            if !word.chars().all(|c| c.is_alphabetic()) {
                return Err(Error::NonAlphabeticWord(word.to_string()));
            }

            let mut chars = word.chars();
            let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
                return Err(Error::WordTooShort(word.to_string()));
            };

            subs.push((word.to_string(), format!("{}{}{}", first, ind + 1, last)));
        }

        Ok(Self { subs })
    }

    pub fn marker(&self, word: &str) -> Option<&str> {
        self.subs
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, m)| m.as_str())
    }

    pub fn normalize(&self, line: &str) -> String {
        self.subs
            .iter()
            .fold(line.to_string(), |s, (word, marker)| s.replace(word.as_str(), marker))
    }

    pub fn calibration_value(&self, line: &str) -> u32 {
        calibration_value(&self.normalize(line))
    }
}

/// Two-digit number made of the first and last digit in `line`, 0 if there is none.
pub fn calibration_value(line: &str) -> u32 {
    let mut digits = line.chars().filter_map(|c| c.to_digit(10));
    let Some(first) = digits.next() else {
        debug!("No digit found in line({}).", line);
        return 0;
    };
    let last = digits.next_back().unwrap_or(first);
    let value = first * 10 + last;
    debug!("Calibration value of line({}) is {}.", line, value);

    value
}
