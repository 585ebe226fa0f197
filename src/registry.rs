//! Typed registry of compiled patterns, grouped by the role they play

use crate::error::{RegistryError, Result};
use crate::patterns;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Version of the pattern table format understood by [`Registry::from_table`]
pub const TABLE_VERSION: u32 = 1;

/// What a group of patterns recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Forward prefix of a subject line, such as `Fwd:`
    Subject,
    /// Banner line introducing the forwarded email
    Separator,
    /// Banner line that embeds the original date and sender
    SeparatorWithMetadata,
    SubjectLabel,
    SubjectLabelLax,
    FromLabel,
    FromLabelLax,
    ToLabel,
    ToLabelLax,
    ReplyToLabel,
    CcLabel,
    CcLabelLax,
    DateLabel,
    DateLabelLax,
    /// The ways a single mailbox may be written inside a header value
    MailboxShape,
    /// A syntactically valid email address
    MailboxAddress,
    /// Leading `>` quote markers
    QuoteMarker,
    /// Four-space indentation added by some clients
    FixedIndent,
}

impl Role {
    pub const ALL: [Self; 18] = [
        Self::Subject,
        Self::Separator,
        Self::SeparatorWithMetadata,
        Self::SubjectLabel,
        Self::SubjectLabelLax,
        Self::FromLabel,
        Self::FromLabelLax,
        Self::ToLabel,
        Self::ToLabelLax,
        Self::ReplyToLabel,
        Self::CcLabel,
        Self::CcLabelLax,
        Self::DateLabel,
        Self::DateLabelLax,
        Self::MailboxShape,
        Self::MailboxAddress,
        Self::QuoteMarker,
        Self::FixedIndent,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Separator => "separator",
            Self::SeparatorWithMetadata => "separator_with_metadata",
            Self::SubjectLabel => "subject_label",
            Self::SubjectLabelLax => "subject_label_lax",
            Self::FromLabel => "from_label",
            Self::FromLabelLax => "from_label_lax",
            Self::ToLabel => "to_label",
            Self::ToLabelLax => "to_label_lax",
            Self::ReplyToLabel => "reply_to_label",
            Self::CcLabel => "cc_label",
            Self::CcLabelLax => "cc_label_lax",
            Self::DateLabel => "date_label",
            Self::DateLabelLax => "date_label_lax",
            Self::MailboxShape => "mailbox_shape",
            Self::MailboxAddress => "mailbox_address",
            Self::QuoteMarker => "quote_marker",
            Self::FixedIndent => "fixed_indent",
        }
    }

    /// Roles whose patterns also get a variant capturing the whole matched line,
    /// so splitting on them keeps the line itself as a fragment.
    #[must_use]
    pub const fn has_line_variant(self) -> bool {
        matches!(
            self,
            Self::Separator
                | Self::SubjectLabel
                | Self::SubjectLabelLax
                | Self::ToLabel
                | Self::ReplyToLabel
                | Self::CcLabel
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One uncompiled entry of a [`PatternTable`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub role: Role,
    pub pattern: String,
    /// Named groups the pattern must define
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub captures: Vec<String>,
    /// Mail clients the pattern was written for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

/// Serializable pattern data from which a [`Registry`] is built
///
/// Entries of the same role keep their relative order; that order is the
/// priority used when several patterns match equally well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTable {
    pub version: u32,
    pub patterns: Vec<PatternEntry>,
}

impl PatternTable {
    /// The table shipped with the crate
    #[must_use]
    pub fn builtin() -> Self {
        patterns::table()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A compiled pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    line: Option<Regex>,
    captures: Vec<String>,
    client: Option<String>,
}

impl Pattern {
    fn compile(entry: &PatternEntry) -> Result<Self> {
        let invalid = |source| RegistryError::InvalidPattern {
            role: entry.role,
            pattern: entry.pattern.clone(),
            source,
        };

        let regex = Regex::new(&entry.pattern).map_err(invalid)?;

        if let Some(name) = entry
            .captures
            .iter()
            .find(|name| !regex.capture_names().flatten().any(|n| n == name.as_str()))
        {
            return Err(RegistryError::MissingCapture {
                role: entry.role,
                pattern: entry.pattern.clone(),
                name: name.clone(),
            });
        }

        let line = if entry.role.has_line_variant() {
            Some(Regex::new(&format!("({})", entry.pattern)).map_err(invalid)?)
        } else {
            None
        };

        Ok(Self {
            regex,
            line,
            captures: entry.captures.clone(),
            client: entry.client.clone(),
        })
    }

    /// The pattern source
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The variant wrapping the whole pattern in an extra capture group
    #[must_use]
    pub const fn line(&self) -> Option<&Regex> {
        self.line.as_ref()
    }

    #[must_use]
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    #[must_use]
    pub fn client(&self) -> Option<&str> {
        self.client.as_deref()
    }
}

/// Compiled patterns grouped by role, in table order
#[derive(Debug, Clone, Default)]
pub struct Registry {
    roles: HashMap<Role, Vec<Pattern>>,
}

impl Registry {
    /// Compile the built-in pattern table
    pub fn builtin() -> Result<Self> {
        Self::from_table(&PatternTable::builtin())
    }

    /// Compile a pattern table given as JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_table(&PatternTable::from_json(json)?)
    }

    /// Compile every entry of a pattern table
    ///
    /// Fails on the first pattern that does not compile or that lacks one of
    /// its declared named captures.
    pub fn from_table(table: &PatternTable) -> Result<Self> {
        if table.version != TABLE_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                found: table.version,
                expected: TABLE_VERSION,
            });
        }

        let mut roles: HashMap<Role, Vec<Pattern>> = HashMap::new();
        for entry in &table.patterns {
            roles
                .entry(entry.role)
                .or_default()
                .push(Pattern::compile(entry)?);
        }

        debug!(
            patterns = table.patterns.len(),
            roles = roles.len(),
            "Built pattern registry"
        );

        Ok(Self { roles })
    }

    /// Patterns of a role, in priority order
    #[must_use]
    pub fn patterns(&self, role: Role) -> &[Pattern] {
        self.roles.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn regexes(&self, role: Role) -> impl Iterator<Item = &Regex> {
        self.patterns(role).iter().map(Pattern::regex)
    }

    /// Line variants of a role; empty for roles without one
    pub fn lines(&self, role: Role) -> impl Iterator<Item = &Regex> {
        self.patterns(role).iter().filter_map(Pattern::line)
    }

    /// Total number of compiled patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.values().all(Vec::is_empty)
    }
}
