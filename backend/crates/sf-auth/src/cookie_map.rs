//! `Cookie` request header parsing.

use std::collections::HashMap;

/// Name to value mapping parsed from a `Cookie` header.
///
/// The header is split on `;` and each segment is trimmed. The name is
/// everything before the first `=`, the value everything after it, so
/// values may themselves contain `=`. Segments without `=` are skipped.
/// When a name repeats, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieMap {
    cookies: HashMap<String, String>,
}

impl CookieMap {
    pub fn parse(header: &str) -> Self {
        let mut cookies = HashMap::new();

        for segment in header.split(';') {
            let segment = segment.trim();
            let Some((name, value)) = segment.split_once('=') else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            cookies
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }

        Self { cookies }
    }

    /// Parse an optional header; `None` yields an empty map.
    pub fn from_header(header: Option<&str>) -> Self {
        header.map(Self::parse).unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}
