//!
//! The heuristically parsed measurement supplement.
//!

use std::collections::BTreeMap;

use regex::Regex;

lazy_static::lazy_static! {
    ///
    /// Splits the supplement into candidate `key: value` segments.
    ///
    static ref SEGMENT_SEPARATOR: Regex = Regex::new(r"[,;\n]").expect("Always valid");

    ///
    /// Matches a whole `key: value [unit]` or `key = value [unit]` segment.
    ///
    /// The key is a label of at most three words.
    ///
    static ref STATISTIC: Regex = Regex::new(
        r"^(?P<key>[A-Za-z][A-Za-z0-9_-]*(?:[ \t]+[A-Za-z0-9_-]+){0,2})\s*[:=]\s*(?P<value>[-+]?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?)\s*(?P<unit>[A-Za-z%/]+)?$",
    )
    .expect("Always valid");
}

/// Query words that never appear in a statistic label.
const QUERY_KEYWORDS: [&str; 20] = [
    "and", "as", "by", "delete", "from", "group", "having", "in", "insert", "into", "join",
    "like", "limit", "not", "on", "or", "order", "select", "set", "where",
];

///
/// The heuristically parsed measurement supplement.
///
/// The supplement is free text. It is either a list of statistics, e.g.
/// `avg tps: 1021.5, max tps: 1200, count: 3000`, or prose such as the measured SQL query.
/// Every segment that is a numeric `key: value` pair with a short label becomes a statistic,
/// the rest is ignored. The text is prose when no segment matches.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Extra<'a> {
    /// The original text.
    pub text: &'a str,
    /// The extracted statistics, keyed by lowercase name.
    pub statistics: BTreeMap<String, f64>,
}

impl<'a> Extra<'a> {
    ///
    /// Parses the supplement. Never fails.
    ///
    /// The first occurrence of a repeated key wins.
    ///
    pub fn parse(text: &'a str) -> Self {
        let mut statistics = BTreeMap::new();
        for segment in SEGMENT_SEPARATOR
            .split(text)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
        {
            let Some(captures) = STATISTIC.captures(segment) else {
                continue;
            };
            let key = Self::normalize_key(&captures["key"]);
            if key
                .split(' ')
                .any(|word| QUERY_KEYWORDS.contains(&word))
            {
                continue;
            }
            let Ok(value) = captures["value"].parse::<f64>() else {
                continue;
            };
            statistics.entry(key).or_insert(value);
        }

        Self { text, statistics }
    }

    ///
    /// Returns a statistic by case-insensitive name.
    ///
    pub fn get(&self, key: &str) -> Option<f64> {
        self.statistics.get(Self::normalize_key(key).as_str()).copied()
    }

    ///
    /// Whether no statistics could be extracted.
    ///
    pub fn is_prose(&self) -> bool {
        self.statistics.is_empty()
    }

    ///
    /// Lowercases the key and collapses inner whitespace.
    ///
    fn normalize_key(key: &str) -> String {
        key.split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ")
            .to_lowercase()
    }
}
