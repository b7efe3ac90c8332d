//! Permissive parser for raw field tags.
//!
//! A tag is a whitespace-separated sequence of `key:"value"` tokens, e.g.
//! `params:"name" json:"name,omitempty"`. The value may contain any
//! character except the closing quote. A token that does not fit the format
//! is dropped with a warning and scanning resumes at the next whitespace;
//! one bad token never fails the whole parse.

use std::collections::HashMap;

/// Parse a raw tag into a key/value map. Returns an empty map for an empty
/// tag. When a key appears more than once, the first occurrence wins.
pub fn parse_tag(raw: &str) -> HashMap<&str, &str> {
    let mut out = HashMap::new();
    for (key, value) in Tokens::new(raw) {
        out.entry(key).or_insert(value);
    }
    out
}

/// Look up a single key, scanning the raw tag without building a map.
/// Returns the first occurrence.
pub(crate) fn lookup<'a>(raw: &'a str, key: &str) -> Option<&'a str> {
    Tokens::new(raw).find(|(k, _)| *k == key).map(|(_, v)| v)
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(raw: &'a str) -> Self {
        Self { rest: raw }
    }

    /// Drop everything up to the next whitespace so a malformed token does
    /// not poison the tokens after it.
    fn resync(&mut self, token: &str) {
        log::warn!("dropping malformed tag token near `{token}`");
        match self.rest.find(char::is_whitespace) {
            Some(pos) => self.rest = &self.rest[pos..],
            None => self.rest = "",
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.rest = self.rest.trim_start();
            if self.rest.is_empty() {
                return None;
            }
            // Key runs up to the first colon and may not contain
            // whitespace or quotes.
            let Some(colon) = self.rest.find(':') else {
                self.resync(self.rest);
                continue;
            };
            let key = &self.rest[..colon];
            if key.is_empty() || key.contains(char::is_whitespace) || key.contains('"') {
                self.resync(key);
                continue;
            }
            let after_colon = &self.rest[colon + 1..];
            let Some(value) = after_colon.strip_prefix('"') else {
                self.resync(key);
                continue;
            };
            let Some(end) = value.find('"') else {
                self.resync(key);
                continue;
            };
            self.rest = &value[end + 1..];
            return Some((key, &value[..end]));
        }
    }
}
