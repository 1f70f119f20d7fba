pub mod acronyms;
pub mod casing;
pub mod tokenizer;

use crate::config::Config;
use crate::error::Result;
use acronyms::AcronymSet;
use casing::{Locale, LocaleCaser, TextCaser};
use std::fmt;
use std::str::FromStr;

/// Target naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Snake,
    Kebab,
    Camel,
    Pascal,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Snake, Style::Kebab, Style::Camel, Style::Pascal];

    /// Character placed between words, `None` for the hump styles.
    pub fn separator(self) -> Option<char> {
        match self {
            Style::Snake => Some('_'),
            Style::Kebab => Some('-'),
            Style::Camel | Style::Pascal => None,
        }
    }

    /// Word boundaries are carried by capitalization instead of a separator.
    pub fn is_hump(self) -> bool {
        self.separator().is_none()
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "snake" | "snake_case" => Ok(Style::Snake),
            "kebab" | "kebab-case" => Ok(Style::Kebab),
            "camel" | "camelcase" => Ok(Style::Camel),
            "pascal" | "pascalcase" => Ok(Style::Pascal),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Snake => write!(f, "snake"),
            Style::Kebab => write!(f, "kebab"),
            Style::Camel => write!(f, "camel"),
            Style::Pascal => write!(f, "pascal"),
        }
    }
}

/// Converts identifiers between [`Style`]s.
///
/// Holds the acronym table and the casing rules; both are read-only, so a
/// single converter can be shared between threads.
#[derive(Debug, Clone)]
pub struct Converter<C = LocaleCaser> {
    acronyms: AcronymSet,
    caser: C,
}

impl Converter {
    /// Default acronym table with the casing rules of `locale`.
    pub fn new(locale: Locale) -> Self {
        Self::with_acronyms(locale, AcronymSet::default())
    }

    /// Build a converter from a language tag such as `en` or `tr-TR`.
    pub fn for_language(tag: &str) -> Result<Self> {
        Ok(Self::new(tag.parse()?))
    }

    pub fn with_acronyms(locale: Locale, acronyms: AcronymSet) -> Self {
        Self::with_caser(LocaleCaser::new(locale), acronyms)
    }

    /// Locale and acronym table taken from `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::with_acronyms(config.locale()?, config.acronym_set()?))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Locale::Root)
    }
}

impl<C: TextCaser> Converter<C> {
    pub fn with_caser(caser: C, acronyms: AcronymSet) -> Self {
        Self { acronyms, caser }
    }

    pub fn acronyms(&self) -> &AcronymSet {
        &self.acronyms
    }

    pub fn caser(&self) -> &C {
        &self.caser
    }

    /// Words of `input` as slices with their original casing.
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<&'a str> {
        tokenizer::tokenize(input, &self.acronyms).collect()
    }

    pub fn convert(&self, style: Style, input: &str) -> String {
        let mut res = String::with_capacity(input.len());

        for (i, word) in tokenizer::tokenize(input, &self.acronyms).enumerate() {
            if i > 0 {
                if let Some(sep) = style.separator() {
                    res.push(sep);
                }
            }

            let cased = match style {
                Style::Snake | Style::Kebab => self.caser.lowercase(word),
                Style::Camel if i == 0 => self.caser.lowercase(word),
                Style::Camel | Style::Pascal => self.hump(word),
            };
            res.push_str(&cased);
        }

        res
    }

    pub fn to_snake(&self, input: &str) -> String {
        self.convert(Style::Snake, input)
    }

    pub fn to_kebab(&self, input: &str) -> String {
        self.convert(Style::Kebab, input)
    }

    pub fn to_camel(&self, input: &str) -> String {
        self.convert(Style::Camel, input)
    }

    pub fn to_pascal(&self, input: &str) -> String {
        self.convert(Style::Pascal, input)
    }

    /// Acronyms are shouted, everything else is capitalized.
    fn hump(&self, word: &str) -> String {
        let upper = self.caser.uppercase(word);
        if self.acronyms.contains(&upper) {
            upper
        } else {
            self.caser.titlecase(word)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parsing() {
        assert_eq!("snake".parse::<Style>().unwrap(), Style::Snake);
        assert_eq!("kebab-case".parse::<Style>().unwrap(), Style::Kebab);
        assert_eq!("camelCase".parse::<Style>().unwrap(), Style::Camel);
        assert_eq!("PASCAL".parse::<Style>().unwrap(), Style::Pascal);
        assert!("title".parse::<Style>().is_err());

        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn test_separators() {
        assert_eq!(Style::Snake.separator(), Some('_'));
        assert_eq!(Style::Kebab.separator(), Some('-'));
        assert!(Style::Camel.is_hump());
        assert!(Style::Pascal.is_hump());
    }

    #[test]
    fn test_convert_each_style() {
        let converter = Converter::default();
        let input = "parse HTTP-response_body";
        assert_eq!(converter.to_snake(input), "parse_http_response_body");
        assert_eq!(converter.to_kebab(input), "parse-http-response-body");
        assert_eq!(converter.to_camel(input), "parseHTTPResponseBody");
        assert_eq!(converter.to_pascal(input), "ParseHTTPResponseBody");
    }

    #[test]
    fn test_camel_lowercases_leading_acronym() {
        let converter = Converter::default();
        assert_eq!(converter.to_camel("JSONSerializer"), "jsonSerializer");
        assert_eq!(converter.to_camel("ID"), "id");
        assert_eq!(converter.to_pascal("id"), "ID");
    }

    #[test]
    fn test_non_acronyms_are_title_cased() {
        let converter = Converter::default();
        assert_eq!(converter.to_pascal("NASA_rocket"), "NasaRocket");
        assert_eq!(converter.to_camel("ABCDEFG"), "abcdefg");
        assert_eq!(converter.to_pascal("ABCDEFG"), "Abcdefg");
    }

    #[test]
    fn test_acronyms_with_digits() {
        // An uppercase run stops at the digit, so UTF8 is only recognized
        // as a whole word.
        let converter = Converter::default();
        assert_eq!(converter.to_pascal("utf8_decoder"), "UTF8Decoder");
        assert_eq!(converter.to_camel("decode-utf8"), "decodeUTF8");
        assert_eq!(converter.tokenize("UTF8"), vec!["UTF", "8"]);
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        let converter = Converter::default();
        for style in Style::ALL {
            assert_eq!(converter.convert(style, ""), "");
            assert_eq!(converter.convert(style, "__--  ..!"), "");
        }
    }

    #[test]
    fn test_locale_casing() {
        let root = Converter::default();
        let turkish = Converter::for_language("tr").unwrap();

        assert_eq!(root.to_pascal("idList"), "IDList");
        assert_eq!(turkish.to_pascal("idList"), "İdList");
        assert_eq!(turkish.to_snake("idList"), "id_list");
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            locale: "tr-TR".to_string(),
            acronyms: vec!["grpc".to_string()],
            ..Default::default()
        };
        let converter = Converter::from_config(&config).unwrap();
        assert_eq!(converter.caser().locale(), Locale::Turkish);
        assert_eq!(converter.to_pascal("grpc_stream"), "GRPCStream");
    }

    #[test]
    fn test_invalid_language_tag() {
        assert!(Converter::for_language("not a tag").is_err());
    }

    struct MarkingCaser;

    impl TextCaser for MarkingCaser {
        fn lowercase(&self, word: &str) -> String {
            format!("l({})", word)
        }

        fn uppercase(&self, word: &str) -> String {
            word.to_uppercase()
        }

        fn titlecase(&self, word: &str) -> String {
            format!("t({})", word)
        }
    }

    #[test]
    fn test_injected_caser() {
        let converter = Converter::with_caser(MarkingCaser, AcronymSet::default());
        assert_eq!(
            converter.to_camel("user_api_handler"),
            "l(user)APIt(handler)"
        );
        assert_eq!(converter.to_kebab("userAPI"), "l(user)-l(API)");
    }

    #[test]
    fn test_custom_acronym_table() {
        let acronyms = AcronymSet::extend_defaults(["GRPC"]).unwrap();
        let converter = Converter::with_acronyms(Locale::Root, acronyms);
        assert_eq!(converter.to_pascal("grpc_client"), "GRPCClient");
        assert_eq!(converter.to_snake("newGRPCClient"), "new_grpc_client");

        let converter = Converter::with_acronyms(Locale::Root, AcronymSet::empty());
        assert_eq!(converter.to_pascal("user_id"), "UserId");
    }
}
