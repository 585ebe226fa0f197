//! Best-match selection over ordered pattern lists
//!
//! Every operation walks its patterns in priority order. A later pattern
//! replaces the current pick only when it is strictly better, so among equals
//! the earliest pattern wins.

use regex::{Captures, Regex};
use std::collections::HashMap;
use tracing::trace;

/// How candidate patterns are applied to a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Find the leftmost match of each pattern and keep the one starting last
    Locate,
    /// Split on every match of each pattern and keep the earliest delimiter
    Split,
    /// Remove the first match of the first pattern that changes the text
    Remove,
}

/// Result of [`select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selected {
    Located(MatchResult),
    Split(SplitFragments),
    Removed(String),
}

/// A pattern match with its positional and named captures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    start: usize,
    end: usize,
    text: String,
    captures: Vec<Option<String>>,
    named: HashMap<String, String>,
}

impl MatchResult {
    fn new(regex: &Regex, caps: &Captures<'_>) -> Option<Self> {
        let whole = caps.get(0)?;
        let captures = caps
            .iter()
            .skip(1)
            .map(|group| group.map(|g| g.as_str().to_string()))
            .collect();
        let named = regex
            .capture_names()
            .flatten()
            .filter_map(|name| caps.name(name).map(|g| (name.to_string(), g.as_str().to_string())))
            .collect();

        Some(Self {
            start: whole.start(),
            end: whole.end(),
            text: whole.as_str().to_string(),
            captures,
            named,
        })
    }

    /// Byte offset where the match starts
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The whole matched text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Capture group `index + 1`, if it took part in the match
    #[must_use]
    pub fn capture(&self, index: usize) -> Option<&str> {
        self.captures.get(index)?.as_deref()
    }

    /// Number of capture groups of the pattern
    #[must_use]
    pub fn captures_len(&self) -> usize {
        self.captures.len()
    }

    /// The last capture group, or the whole match for patterns without groups
    #[must_use]
    pub fn last_capture(&self) -> Option<&str> {
        match self.captures.last() {
            Some(group) => group.as_deref(),
            None => Some(&self.text),
        }
    }

    #[must_use]
    pub fn named(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }
}

/// A text cut at every occurrence of a pattern
///
/// Fragments follow the layout `[before, captures.., between, captures.., after]`;
/// groups that did not take part in an occurrence yield empty fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFragments {
    fragments: Vec<String>,
    delimiter: String,
    start: usize,
}

impl SplitFragments {
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fragments.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Text of the first occurrence the split was made on
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Byte offset of the first occurrence
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn into_fragments(self) -> Vec<String> {
        self.fragments
    }
}

/// Apply `operation` to `text` with every pattern and keep the best outcome
pub fn select<'r>(
    patterns: impl IntoIterator<Item = &'r Regex>,
    text: &str,
    operation: Operation,
) -> Option<Selected> {
    match operation {
        Operation::Locate => locate(patterns, text).map(Selected::Located),
        Operation::Split => split(patterns, text).map(Selected::Split),
        Operation::Remove => remove(patterns, text).map(Selected::Removed),
    }
}

/// Leftmost match of each pattern; the match starting last wins
pub fn locate<'r>(patterns: impl IntoIterator<Item = &'r Regex>, text: &str) -> Option<MatchResult> {
    let candidates = patterns.into_iter().filter_map(|regex| {
        let found = MatchResult::new(regex, &regex.captures(text)?)?;
        trace!(pattern = regex.as_str(), start = found.start, "Pattern located");
        Some(found)
    });

    best(candidates, starts_later)
}

/// Split on every match of each pattern; the split whose first delimiter
/// starts earliest wins
pub fn split<'r>(patterns: impl IntoIterator<Item = &'r Regex>, text: &str) -> Option<SplitFragments> {
    let candidates = patterns.into_iter().filter_map(|regex| {
        let split = split_on(regex, text)?;
        trace!(
            pattern = regex.as_str(),
            start = split.start,
            fragments = split.len(),
            "Pattern split text"
        );
        Some(split)
    });

    best(candidates, starts_earlier)
}

/// Remove the first match of the first pattern that shortens the text
pub fn remove<'r>(patterns: impl IntoIterator<Item = &'r Regex>, text: &str) -> Option<String> {
    patterns.into_iter().find_map(|regex| {
        let removed = regex.replacen(text, 1, "");
        (removed.len() < text.len()).then(|| {
            trace!(pattern = regex.as_str(), "Pattern removed");
            removed.into_owned()
        })
    })
}

/// Whether `candidate` should replace `kept` when locating
#[must_use]
pub const fn starts_later(kept: &MatchResult, candidate: &MatchResult) -> bool {
    candidate.start > kept.start
}

/// Whether `candidate` should replace `kept` when splitting
#[must_use]
pub const fn starts_earlier(kept: &SplitFragments, candidate: &SplitFragments) -> bool {
    candidate.start < kept.start
}

fn best<T>(candidates: impl Iterator<Item = T>, better: fn(&T, &T) -> bool) -> Option<T> {
    candidates.fold(None, |kept, candidate| match kept {
        Some(kept) if !better(&kept, &candidate) => Some(kept),
        _ => Some(candidate),
    })
}

fn split_on(regex: &Regex, text: &str) -> Option<SplitFragments> {
    let mut fragments = Vec::new();
    let mut first = None;
    let mut last = 0;

    for caps in regex.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        fragments.push(text[last..whole.start()].to_string());
        fragments.extend(
            caps.iter()
                .skip(1)
                .map(|group| group.map_or_else(String::new, |g| g.as_str().to_string())),
        );
        first.get_or_insert_with(|| (whole.start(), whole.as_str().to_string()));
        last = whole.end();
    }

    let (start, delimiter) = first?;
    fragments.push(text[last..].to_string());

    Some(SplitFragments {
        fragments,
        delimiter,
        start,
    })
}
