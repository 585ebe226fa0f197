//! Forward detection and splitting

use crate::extract::Extractor;
use crate::matcher::{locate, split};
use crate::reconcile::{LABEL_ARITY, SEPARATOR_ARITY, is_field_value, reconcile};
use crate::registry::{Registry, Role};
use crate::types::{ForwardResult, ParsedEmail, trimmed};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

const BYTE_ORDER_MARK: char = '\u{feff}';
const NO_BREAK_SPACE: char = '\u{a0}';

static TRAILING_NO_BREAK_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?m)\u{a0}$").unwrap());

static DEFAULT_PARSER: LazyLock<ForwardParser> = LazyLock::new(|| {
    ForwardParser::new(Registry::builtin().expect("built-in pattern table compiles"))
});

/// Read a possibly forwarded email with the built-in patterns
///
/// `subject` is optional. A subject that is present but carries no forward
/// prefix means the body is not inspected at all.
#[must_use]
pub fn read(body: &str, subject: Option<&str>) -> ForwardResult {
    DEFAULT_PARSER.read(body, subject)
}

/// A forward body cut into the forwarder's message and the embedded email
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodySplit {
    /// The normalized body the split was made on
    pub body: String,
    pub message: Option<String>,
    pub email: Option<String>,
}

/// Detects forwards and rebuilds the original email with a pattern registry
#[derive(Debug, Clone)]
pub struct ForwardParser {
    registry: Registry,
}

impl Default for ForwardParser {
    fn default() -> Self {
        DEFAULT_PARSER.clone()
    }
}

impl ForwardParser {
    #[must_use]
    pub const fn new(registry: Registry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn read(&self, body: &str, subject: Option<&str>) -> ForwardResult {
        let subject = subject.filter(|subject| !subject.is_empty());
        let forced_subject = subject.and_then(|subject| self.parse_subject(subject));
        let mut forwarded = forced_subject.is_some();

        let mut result = ForwardResult::default();

        if subject.is_none() || forwarded {
            let split = self.parse_body(body, forwarded);

            if let Some(email) = &split.email {
                forwarded = true;
                result.email = self.parse_original_email(email, &split.body);
            }
            result.message = split.message;
        }

        if let Some(subject) = forced_subject.filter(|subject| !subject.is_empty()) {
            result.email.subject = Some(subject);
        }
        result.forwarded = forwarded;

        debug!(
            "Read email: forwarded={} from={:?}",
            result.forwarded, result.email.from.address
        );

        result
    }

    /// The subject with its forward prefix removed, if it has one
    ///
    /// A prefix followed by nothing yields an empty subject.
    #[must_use]
    pub fn parse_subject(&self, subject: &str) -> Option<String> {
        locate(self.registry.regexes(Role::Subject), subject)
            .map(|found| found.capture(0).and_then(trimmed).unwrap_or_default())
            .inspect(|stripped| debug!(subject = stripped.as_str(), "Forward prefix found"))
    }

    /// Separate the forwarder's message from the forwarded email
    ///
    /// A banner line is looked for first. Without one, and only when the
    /// subject already marked the email as forwarded, the body is cut at the
    /// first `From` header.
    #[must_use]
    pub fn parse_body(&self, body: &str, forwarded: bool) -> BodySplit {
        let body = normalize(body);

        if let Some(split) = split(self.registry.lines(Role::Separator), &body)
            && split.len() > 2
        {
            debug!(banner = split.delimiter().trim(), "Forward banner found");
            let email = reconcile(split.fragments(), SEPARATOR_ARITY, &[2], None);

            return BodySplit {
                message: split.get(0).and_then(trimmed),
                email: trimmed(&email),
                body,
            };
        }

        if forwarded
            && let Some(split) = split(self.registry.regexes(Role::FromLabel), &body)
            && split.len() > 3
        {
            debug!("Forwarded email found at From header");
            let email = reconcile(split.fragments(), LABEL_ARITY, &[1, 3], Some(is_field_value));

            return BodySplit {
                message: split.get(0).and_then(trimmed),
                email: trimmed(&email),
                body,
            };
        }

        BodySplit {
            body,
            message: None,
            email: None,
        }
    }

    /// Extract the fields of a forwarded email
    #[must_use]
    pub fn parse_original_email(&self, email: &str, body: &str) -> ParsedEmail {
        Extractor::new(&self.registry).extract(email, body)
    }
}

/// Unify line endings and drop invisible characters clients add
fn normalize(body: &str) -> String {
    let body = body.replace("\r\n", "\n").replace(BYTE_ORDER_MARK, "");
    TRAILING_NO_BREAK_SPACE
        .replace_all(&body, "")
        .replace(NO_BREAK_SPACE, " ")
}
