// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Forwarded Email Extractor
//!
//! Detects whether an email was forwarded and rebuilds the original email
//! embedded in its text: sender, recipients, subject, date and body.
//!
//! # Features
//!
//! - Banners of the common mail clients in many locales
//! - Run-together headers, quoted and indented forwards
//! - Nested forwards resolve to the outermost original email
//! - Pattern tables that can be replaced at runtime
//!
//! # Example
//!
//! ```rust
//! use forward_extract::read;
//!
//! let body = "Check this out\n\n\
//!     ---------- Forwarded message ---------\n\
//!     From: John Doe <john.doe@acme.com>\n\
//!     Date: Mon, 25 Oct 2021 at 11:17\n\
//!     Subject: Hello\n\
//!     To: Bessie Berry <bessie.berry@acme.com>\n\n\
//!     Body text.";
//!
//! let result = read(body, Some("Fwd: Hello"));
//!
//! assert!(result.forwarded);
//! assert_eq!(result.message.as_deref(), Some("Check this out"));
//! assert_eq!(result.email.from.address.as_deref(), Some("john.doe@acme.com"));
//! assert_eq!(result.email.body.as_deref(), Some("Body text."));
//! ```

mod error;
mod extract;
mod mailbox;
mod matcher;
mod parser;
mod patterns;
mod reconcile;
mod registry;
mod types;

pub use error::{RegistryError, Result};
pub use extract::Extractor;
pub use mailbox::MailboxParser;
pub use matcher::{
    MatchResult, Operation, Selected, SplitFragments, locate, remove, select, split,
    starts_earlier, starts_later,
};
pub use parser::{BodySplit, ForwardParser, read};
pub use patterns::METADATA_CAPTURES;
pub use reconcile::{LABEL_ARITY, SEPARATOR_ARITY, is_field_value, reconcile};
pub use registry::{Pattern, PatternEntry, PatternTable, Registry, Role, TABLE_VERSION};
pub use types::*;
