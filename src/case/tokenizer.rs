use crate::case::acronyms::AcronymSet;

/// Acronyms only end a token when the token is within this many characters.
const ACRONYM_LEN: std::ops::RangeInclusive<usize> = 2..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// Lowercase letters, numbers, and letters without case.
    Lower,
    Upper,
    /// Everything else; only ever a word boundary.
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_numeric() || c.is_lowercase() {
            CharClass::Lower
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_alphabetic() {
            CharClass::Lower
        } else {
            CharClass::Other
        }
    }
}

/// Split `input` into words, recognizing the acronyms in `acronyms`.
pub fn tokenize<'a, 's>(input: &'a str, acronyms: &'s AcronymSet) -> Tokenizer<'a, 's> {
    Tokenizer::new(input, acronyms)
}

/// Iterator over the words of an identifier.
///
/// Words are slices of the input with their original casing. Separators
/// (anything that is not a letter or number) are skipped and never yield
/// empty words.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a, 's> {
    input: &'a str,
    acronyms: &'s AcronymSet,
    pos: usize,
}

impl<'a, 's> Tokenizer<'a, 's> {
    pub fn new(input: &'a str, acronyms: &'s AcronymSet) -> Self {
        Self {
            input,
            acronyms,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Lowercase letters and digits up to the next uppercase letter or
    /// separator.
    fn extract_lower(&mut self) -> &'a str {
        let start = self.pos;

        while let Some(c) = self.peek() {
            if CharClass::of(c) != CharClass::Lower {
                break;
            }
            self.bump(c);
        }

        &self.input[start..self.pos]
    }

    /// Either an acronym run (`HTTP`, `JSON`) or a capitalized word (`World`,
    /// `V2`). The first character is always uppercase.
    fn extract_upper(&mut self) -> &'a str {
        let start = self.pos;
        let mut len = 0;
        let mut acronym_run = false;

        while let Some(c) = self.peek() {
            match CharClass::of(c) {
                CharClass::Upper => {
                    if len == 1 {
                        acronym_run = true;
                    }
                    // A capitalized word ends at the next uppercase letter.
                    if len > 1 && !acronym_run {
                        break;
                    }
                }
                // An acronym run ends at the first lowercase letter or digit.
                CharClass::Lower if acronym_run => break,
                CharClass::Lower => {}
                CharClass::Other => break,
            }

            self.bump(c);
            len += 1;

            if ACRONYM_LEN.contains(&len) && self.acronyms.contains(&self.input[start..self.pos]) {
                break;
            }
        }

        &self.input[start..self.pos]
    }
}

impl<'a> Iterator for Tokenizer<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(c) = self.peek() {
            match CharClass::of(c) {
                CharClass::Lower => return Some(self.extract_lower()),
                CharClass::Upper => return Some(self.extract_upper()),
                CharClass::Other => self.bump(c),
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Tokenizer<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<&str> {
        tokenize(input, &AcronymSet::default()).collect()
    }

    #[test]
    fn test_lower_and_camel_humps() {
        assert_eq!(words("helloWorld"), vec!["hello", "World"]);
        assert_eq!(words("HelloWorld"), vec!["Hello", "World"]);
        assert_eq!(words("userId"), vec!["user", "Id"]);
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(words("hello world"), vec!["hello", "world"]);
        assert_eq!(words("__hello--  world__"), vec!["hello", "world"]);
        assert_eq!(words("snake_case-and.kebab"), vec!["snake", "case", "and", "kebab"]);
        assert!(words("").is_empty());
        assert!(words("-_ .!").is_empty());
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(words("apiJSONSerializer"), vec!["api", "JSON", "Serializer"]);
        assert_eq!(words("XMLHTTPRequest"), vec!["XML", "HTTP", "Request"]);
        assert_eq!(words("userAPI"), vec!["user", "API"]);
        assert_eq!(words("UserAPI"), vec!["User", "API"]);
    }

    #[test]
    fn test_digits() {
        assert_eq!(words("userAPIV2"), vec!["user", "API", "V2"]);
        assert_eq!(words("netHTTP2"), vec!["net", "HTTP", "2"]);
        assert_eq!(words("base64Encode"), vec!["base64", "Encode"]);
        assert_eq!(words("v2"), vec!["v2"]);
    }

    #[test]
    fn test_shortest_acronym_wins() {
        assert_eq!(words("HTTPS"), vec!["HTTP", "S"]);
        assert_eq!(words("IDENTITY"), vec!["ID", "ENTITY"]);
    }

    #[test]
    fn test_long_unknown_uppercase_run() {
        assert_eq!(words("ABCDEFG"), vec!["ABCDEFG"]);
        assert_eq!(words("ABCDEFGHelper"), vec!["ABCDEFGH", "elper"]);
        assert_eq!(words("NASA rocket"), vec!["NASA", "rocket"]);
    }

    #[test]
    fn test_single_uppercase_letters() {
        assert_eq!(words("pointX"), vec!["point", "X"]);
        assert_eq!(words("X"), vec!["X"]);
        assert_eq!(words("a-B-c"), vec!["a", "B", "c"]);
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(words("größeÄnderung"), vec!["größe", "Änderung"]);
        assert_eq!(words("名前Value"), vec!["名前", "Value"]);
        assert_eq!(words("ΟΔΟΣ οδος"), vec!["ΟΔΟΣ", "οδος"]);
    }

    #[test]
    fn test_custom_acronyms() {
        let acronyms = AcronymSet::new(["GRPC", "K8S"]).unwrap();
        let found: Vec<_> = tokenize("newGRPCClient", &acronyms).collect();
        assert_eq!(found, vec!["new", "GRPC", "Client"]);

        // Without an entry the run swallows the next word's capital.
        let found: Vec<_> = tokenize("newGRPCClient", &AcronymSet::empty()).collect();
        assert_eq!(found, vec!["new", "GRPCC", "lient"]);
    }

    #[test]
    fn test_words_outlive_acronym_set() {
        let input = String::from("parseHTTPHeader");
        let found: Vec<&str> = {
            let acronyms = AcronymSet::default();
            tokenize(&input, &acronyms).collect()
        };
        assert_eq!(found, vec!["parse", "HTTP", "Header"]);
    }
}
