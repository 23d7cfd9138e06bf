// ABOUTME: Column header normalization and tolerant lookup of canonical column identifiers
// ABOUTME: Maps messy CSV headers (whitespace, newlines, unit spacing) onto the fixed schema
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Header normalization.
//!
//! Source headers arrive as `"Total Fat\n(g)"`, `"Total_Fat(g)"`, `" Sodium (mg) "` and
//! so on. [`normalize_column_name`] produces the canonical spelling and
//! [`ColumnResolver`] finds a canonical column among raw headers regardless of
//! those variants.

use std::collections::HashMap;

/// Normalize a raw header: trim, drop embedded line breaks, and turn each run of
/// remaining whitespace into a single underscore.
#[must_use]
pub fn normalize_column_name(raw: &str) -> String {
    let without_breaks: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();

    let mut result = String::with_capacity(without_breaks.len());
    let mut in_whitespace = false;
    for c in without_breaks.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push('_');
                in_whitespace = true;
            }
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }
    result
}

/// Comparison key for header lookup: normalized, lower-cased, underscores removed.
///
/// `Total_Fat(g)`, `Total_Fat_(g)` and `total fat (g)` share one key.
#[must_use]
pub fn column_match_key(raw: &str) -> String {
    normalize_column_name(raw)
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolves canonical column identifiers against the raw headers of one source
#[derive(Debug, Clone)]
pub struct ColumnResolver {
    raw_headers: Vec<String>,
    by_key: HashMap<String, usize>,
}

impl ColumnResolver {
    /// Index the given raw headers. When two headers share a key the first wins.
    #[must_use]
    pub fn new<S: AsRef<str>>(raw_headers: &[S]) -> Self {
        let mut by_key = HashMap::with_capacity(raw_headers.len());
        for (index, header) in raw_headers.iter().enumerate() {
            by_key
                .entry(column_match_key(header.as_ref()))
                .or_insert(index);
        }
        Self {
            raw_headers: raw_headers
                .iter()
                .map(|header| header.as_ref().to_owned())
                .collect(),
            by_key,
        }
    }

    /// Raw header matching a canonical identifier, if present
    #[must_use]
    pub fn resolve(&self, canonical: &str) -> Option<&str> {
        self.by_key
            .get(&column_match_key(canonical))
            .and_then(|&index| self.raw_headers.get(index))
            .map(String::as_str)
    }

    /// Normalized spelling of every raw header, in source order
    #[must_use]
    pub fn normalized_headers(&self) -> Vec<String> {
        self.raw_headers
            .iter()
            .map(|header| normalize_column_name(header))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_joins_words() {
        assert_eq!(normalize_column_name("  Total Fat(g) "), "Total_Fat(g)");
        assert_eq!(normalize_column_name("Sodium \n(mg)"), "Sodium_(mg)");
        assert_eq!(normalize_column_name("Total\nFat\n(g)"), "TotalFat(g)");
        assert_eq!(normalize_column_name("Saturated   Fat\t(g)"), "Saturated_Fat_(g)");
    }

    #[test]
    fn test_header_variants_share_a_key() {
        let key = column_match_key("Total_Fat(g)");
        assert_eq!(column_match_key("Total Fat(g)"), key);
        assert_eq!(column_match_key("Total_Fat_(g)"), key);
        assert_eq!(column_match_key(" total fat (g)\n"), key);
    }

    #[test]
    fn test_resolver_finds_raw_header() {
        let headers = ["Company", " Item", "Calories", "Total Fat\n(g)", "Sodium (mg)"];
        let resolver = ColumnResolver::new(&headers);

        assert_eq!(resolver.resolve("Total_Fat(g)"), Some("Total Fat\n(g)"));
        assert_eq!(resolver.resolve("Sodium_(mg)"), Some("Sodium (mg)"));
        assert_eq!(resolver.resolve("Item"), Some(" Item"));
        assert_eq!(resolver.resolve("Fiber(g)"), None);
    }

    #[test]
    fn test_first_duplicate_header_wins() {
        let resolver = ColumnResolver::new(&["Calories", "calories"]);
        assert_eq!(resolver.resolve("Calories"), Some("Calories"));
    }
}
