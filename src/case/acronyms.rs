use crate::error::{Error, Result};
use fst::{Set, Streamer};
use lazy_static::lazy_static;
use std::collections::BTreeSet;
use std::fmt;

/// Common initialisms that are kept upper-case in camelCase and PascalCase.
///
/// Only add entries that are highly unlikely to be ordinary words: "ID" is
/// fine, "AND" is not.
pub const DEFAULT_ACRONYMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

lazy_static! {
    static ref DEFAULT_SET: AcronymSet =
        AcronymSet::new(DEFAULT_ACRONYMS).expect("default acronym table is valid");
}

/// Immutable set of upper-case acronyms.
#[derive(Clone)]
pub struct AcronymSet {
    set: Set<Vec<u8>>,
}

impl AcronymSet {
    /// Build a set from caller-supplied entries.
    ///
    /// Entries are trimmed and upper-cased; duplicates collapse. An entry that
    /// is empty or holds anything besides letters and digits is rejected.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = entries
            .into_iter()
            .map(|entry| normalize(entry.as_ref()))
            .collect::<Result<BTreeSet<_>>>()?;

        let set = Set::from_iter(normalized.iter())?;
        tracing::debug!("Built acronym set with {} entries", set.len());

        Ok(Self { set })
    }

    /// The default table plus `extra` entries.
    pub fn extend_defaults<I, S>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = DEFAULT_ACRONYMS.iter().map(|s| s.to_string()).collect();
        for entry in extra {
            entries.push(entry.as_ref().to_string());
        }
        Self::new(entries)
    }

    /// An empty set; nothing is treated as an acronym.
    pub fn empty() -> Self {
        Self { set: Set::default() }
    }

    /// Check if `word` is a registered acronym. The lookup is exact, so
    /// callers upper-case first.
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// All entries in sorted order.
    pub fn entries(&self) -> Vec<String> {
        let mut entries = Vec::with_capacity(self.len());
        let mut stream = self.set.stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                entries.push(word);
            }
        }

        entries
    }
}

impl Default for AcronymSet {
    fn default() -> Self {
        DEFAULT_SET.clone()
    }
}

impl fmt::Debug for AcronymSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries()).finish()
    }
}

/// Parse a plain-text acronym list: one entry per line, `#` starts a comment
/// line, blank lines are skipped.
pub fn parse_list(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

fn normalize(entry: &str) -> Result<String> {
    let trimmed = entry.trim();

    if trimmed.is_empty() {
        return Err(Error::InvalidAcronym {
            entry: entry.to_string(),
            reason: "entry is empty",
        });
    }

    if !trimmed.chars().all(char::is_alphanumeric) {
        return Err(Error::InvalidAcronym {
            entry: entry.to_string(),
            reason: "only letters and digits are allowed",
        });
    }

    Ok(trimmed.to_uppercase())
}
