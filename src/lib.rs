//! Acronym-aware conversion between `snake_case`, `kebab-case`, `camelCase`
//! and `PascalCase`.
//!
//! ```
//! assert_eq!(stringcases::to_pascal("user_id"), "UserID");
//! assert_eq!(stringcases::to_snake("apiJSONSerializer"), "api_json_serializer");
//! assert_eq!(stringcases::to_camel("user-api-v2"), "userAPIV2");
//! ```
//!
//! The free functions use English casing and the default acronym table. Build
//! a [`Converter`] for other locales or acronyms.

pub mod case;
pub mod config;
pub mod error;

pub use case::acronyms::{AcronymSet, DEFAULT_ACRONYMS};
pub use case::casing::{Locale, LocaleCaser, TextCaser};
pub use case::tokenizer::Tokenizer;
pub use case::{Converter, Style};
pub use config::Config;
pub use error::Error;

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT: Converter = Converter::default();
}

/// The converter behind the free functions.
pub fn default_converter() -> &'static Converter {
    &DEFAULT
}

pub fn to_snake(input: &str) -> String {
    DEFAULT.to_snake(input)
}

pub fn to_kebab(input: &str) -> String {
    DEFAULT.to_kebab(input)
}

pub fn to_camel(input: &str) -> String {
    DEFAULT.to_camel(input)
}

pub fn to_pascal(input: &str) -> String {
    DEFAULT.to_pascal(input)
}

pub fn convert(style: Style, input: &str) -> String {
    DEFAULT.convert(style, input)
}

/// Words of `input`, split with the default acronym table.
pub fn tokenize(input: &str) -> Vec<&str> {
    DEFAULT.tokenize(input)
}
