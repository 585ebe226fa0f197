//! Core types for forwarded emails

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mailbox as written in a header value
///
/// Either part may be missing. When both are present they differ: a name
/// identical to the address is dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mailbox {
    /// Email address (e.g., "john@example.com")
    pub address: Option<String>,

    /// Display name (e.g., "John Doe")
    pub name: Option<String>,
}

impl Mailbox {
    #[must_use]
    pub fn new(address: Option<&str>, name: Option<&str>) -> Self {
        Self {
            address: address.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    /// Neither an address nor a name
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.address.is_none() && self.name.is_none()
    }

    /// Part of the address before `@`
    #[must_use]
    pub fn local_part(&self) -> Option<&str> {
        Some(self.address.as_deref()?.split_once('@')?.0)
    }

    /// Part of the address after `@`
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        Some(self.address.as_deref()?.split_once('@')?.1)
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.address) {
            (Some(name), Some(address)) => write!(f, "{name} <{address}>"),
            (Some(name), None) => write!(f, "{name}"),
            (None, Some(address)) => write!(f, "{address}"),
            (None, None) => Ok(()),
        }
    }
}

/// Recipients of a header: a single mailbox, or a list when the header held
/// several mailboxes or a list was requested
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Recipients {
    One(Mailbox),
    Many(Vec<Mailbox>),
}

impl Recipients {
    #[must_use]
    pub fn as_slice(&self) -> &[Mailbox] {
        match self {
            Self::One(mailbox) => std::slice::from_ref(mailbox),
            Self::Many(mailboxes) => mailboxes,
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<&Mailbox> {
        self.as_slice().first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mailbox> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn into_first(self) -> Option<Mailbox> {
        match self {
            Self::One(mailbox) => Some(mailbox),
            Self::Many(mailboxes) => mailboxes.into_iter().next(),
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Mailbox> {
        match self {
            Self::One(mailbox) => vec![mailbox],
            Self::Many(mailboxes) => mailboxes,
        }
    }
}

impl<'a> IntoIterator for &'a Recipients {
    type Item = &'a Mailbox;
    type IntoIter = std::slice::Iter<'a, Mailbox>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The original email rebuilt from the text of a forward
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedEmail {
    pub body: Option<String>,
    pub from: Mailbox,
    pub to: Option<Recipients>,
    pub cc: Option<Recipients>,
    pub subject: Option<String>,

    /// Date as written by the forwarding client
    pub date: Option<String>,
}

impl ParsedEmail {
    /// The date, when it is written in RFC 2822 form
    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(self.date.as_deref()?).ok()
    }
}

/// Outcome of reading a possibly forwarded email
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForwardResult {
    pub forwarded: bool,

    /// Text the forwarder wrote above the forwarded email
    pub message: Option<String>,

    pub email: ParsedEmail,
}

/// Trimmed text, or `None` when nothing but whitespace remains
pub(crate) fn trimmed(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
