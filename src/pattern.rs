/*!
 * Wildcard pattern compilation
 *
 * Wildcards are compiled into case-insensitive regular expressions. Every
 * character other than the wildcard tokens is escaped, so path separators,
 * dots and regex metacharacters in a pattern always match literally.
 */

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// How a wildcard is matched against its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Unanchored match over a full path; only `*` is special
    Path,
    /// Anchored match over a file name; `*` and `?` are special
    FileName,
}

/// A compiled wildcard pattern
#[derive(Debug, Clone)]
pub struct Wildcard {
    source: String,
    regex: Regex,
}

impl Wildcard {
    /// Compile an exclusion pattern that may match anywhere within a path
    pub fn exclusion(raw: &str) -> Result<Self> {
        Self::compile(raw, MatchMode::Path)
    }

    /// Compile a search pattern that must match a whole file name
    pub fn file_name(raw: &str) -> Result<Self> {
        Self::compile(raw, MatchMode::FileName)
    }

    fn compile(raw: &str, mode: MatchMode) -> Result<Self> {
        let source = raw.trim().to_string();
        let regex = RegexBuilder::new(&translate(&source, mode))
            .case_insensitive(true)
            .build()?;

        Ok(Self { source, regex })
    }

    /// Check whether the wildcard matches the given text
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The trimmed pattern text
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Translate a wildcard into regex syntax
fn translate(pattern: &str, mode: MatchMode) -> String {
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    if mode == MatchMode::FileName {
        out.push('^');
    }

    let mut buf = [0u8; 4];
    for ch in pattern.chars() {
        match ch {
            '*' => out.push_str(".*"),
            '?' if mode == MatchMode::FileName => out.push('.'),
            _ => out.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
        }
    }

    if mode == MatchMode::FileName {
        out.push('$');
    }
    // `.` must also cross newlines embedded in odd file names
    format!("(?s){}", out)
}

/// Ordered set of exclusion predicates
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    patterns: Vec<Wildcard>,
}

impl ExclusionSet {
    /// Compile one predicate per pattern, skipping entries that are blank after trimming
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .filter(|p| !p.as_ref().trim().is_empty())
            .map(|p| Wildcard::exclusion(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// The first pattern matching the path, if any
    pub fn first_match(&self, path: &str) -> Option<&Wildcard> {
        self.patterns.iter().find(|p| p.is_match(path))
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.first_match(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
