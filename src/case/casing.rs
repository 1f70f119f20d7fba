//! Case mapping behind the hump and separator styles.
//!
//! Turkish and Azerbaijani dotted/dotless i are the only language tailorings.
//! Every other language uses the default Unicode mappings from `std`.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Word-level case mapping used by the [`Converter`](crate::Converter).
///
/// The converter decides *which* mapping a token gets; implementors decide
/// *how* letters are mapped.
pub trait TextCaser: Send + Sync {
    fn lowercase(&self, word: &str) -> String;

    fn uppercase(&self, word: &str) -> String;

    /// First letter in titlecase, the rest lower-cased.
    fn titlecase(&self, word: &str) -> String;
}

/// Languages whose casing rules differ from the Unicode defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Root,
    /// Turkish and Azerbaijani: dotted and dotless i are distinct letters.
    Turkish,
}

impl FromStr for Locale {
    type Err = Error;

    /// Parse a language tag such as `en`, `en-US` or `tr_TR`. Only the primary
    /// language subtag selects the rules; unknown languages fall back to root.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidLocale(s.to_string());

        let mut subtags = s.trim().split(['-', '_']);
        let language = subtags.next().unwrap_or_default();

        if !(2..=8).contains(&language.len())
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        for subtag in subtags {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(invalid());
            }
        }

        Ok(match language.to_ascii_lowercase().as_str() {
            "tr" | "az" => Locale::Turkish,
            _ => Locale::Root,
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Root => write!(f, "und"),
            Locale::Turkish => write!(f, "tr"),
        }
    }
}

/// [`TextCaser`] built on the standard Unicode case mappings plus the
/// language-specific rules of a [`Locale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleCaser {
    locale: Locale,
}

impl LocaleCaser {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl TextCaser for LocaleCaser {
    fn lowercase(&self, word: &str) -> String {
        match self.locale {
            Locale::Turkish => word
                .chars()
                .map(|c| match c {
                    'I' => 'ı',
                    'İ' => 'i',
                    other => other,
                })
                .collect::<String>()
                .to_lowercase(),
            _ => word.to_lowercase(),
        }
    }

    fn uppercase(&self, word: &str) -> String {
        match self.locale {
            Locale::Turkish => word
                .chars()
                .map(|c| if c == 'i' { 'İ' } else { c })
                .collect::<String>()
                .to_uppercase(),
            _ => word.to_uppercase(),
        }
    }

    fn titlecase(&self, word: &str) -> String {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        // Only the first letter changes class; a second capital would make
        // the tokenizer read the word as an acronym run.
        let mut res = match (self.locale, first) {
            (Locale::Turkish, 'i') => String::from("İ"),
            _ => titlecase_char(first),
        };
        res.push_str(&self.lowercase(chars.as_str()));
        res
    }
}

/// Titlecase mapping of a single character. Differs from upper-casing for
/// the Latin digraphs and a handful of ligatures.
fn titlecase_char(c: char) -> String {
    let mapped = match c {
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        'ß' => "Ss",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        _ => return c.to_uppercase().collect(),
    };
    mapped.to_string()
}
