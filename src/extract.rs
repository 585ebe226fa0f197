//! Field extraction from the text of a forwarded email

use crate::mailbox::MailboxParser;
use crate::matcher::{locate, remove, split};
use crate::reconcile::{LABEL_ARITY, is_field_value, reconcile};
use crate::registry::{Registry, Role};
use crate::types::{Mailbox, ParsedEmail, Recipients, trimmed};
use tracing::debug;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Headers after which the body starts once a blank line follows
const HEADER_BLOCK_ENDS: [Role; 4] = [
    Role::SubjectLabel,
    Role::CcLabel,
    Role::ToLabel,
    Role::ReplyToLabel,
];

/// Rebuilds the original email from the text that follows a forward banner
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'r> {
    registry: &'r Registry,
    mailboxes: MailboxParser<'r>,
}

impl<'r> Extractor<'r> {
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            mailboxes: MailboxParser::new(registry),
        }
    }

    /// Extract every field of the original email
    ///
    /// `body` is the whole normalized forward, used to read banners that carry
    /// the sender and date.
    #[must_use]
    pub fn extract(&self, email: &str, body: &str) -> ParsedEmail {
        let text = self.strip_quotes(email);

        ParsedEmail {
            body: self.extract_body(&text),
            from: self.extract_from(&text, body),
            to: self.extract_to(&text),
            cc: self.extract_cc(&text),
            subject: self.extract_subject(&text),
            date: self.extract_date(&text, body),
        }
    }

    /// Remove byte order marks, quote markers and fixed indentation
    #[must_use]
    pub fn strip_quotes(&self, text: &str) -> String {
        let quotes = self.registry.regexes(Role::QuoteMarker);
        let indents = self.registry.regexes(Role::FixedIndent);

        quotes
            .chain(indents)
            .fold(text.replace(BYTE_ORDER_MARK, ""), |text, regex| {
                regex.replace_all(&text, "").into_owned()
            })
    }

    #[must_use]
    pub fn extract_body(&self, text: &str) -> Option<String> {
        for role in HEADER_BLOCK_ENDS {
            if let Some(split) = split(self.registry.lines(role), text)
                && split.get(3).is_some_and(|after| after.starts_with("\n\n"))
            {
                debug!(%role, "Body found after header block");
                return trimmed(&reconcile(
                    split.fragments(),
                    LABEL_ARITY,
                    &[3],
                    Some(is_field_value),
                ));
            }
        }

        // Headers run together on one line: the body follows the subject
        let subjects = self
            .registry
            .lines(Role::SubjectLabel)
            .chain(self.registry.lines(Role::SubjectLabelLax));
        if let Some(split) = split(subjects, text)
            && split.len() > 3
        {
            debug!("Body found after subject");
            return trimmed(&reconcile(
                split.fragments(),
                LABEL_ARITY,
                &[3],
                Some(is_field_value),
            ));
        }

        Some(text.to_string())
    }

    #[must_use]
    pub fn extract_from(&self, text: &str, body: &str) -> Mailbox {
        if let Some(author) = self
            .mailboxes
            .parse(self.registry.regexes(Role::FromLabel), text, false)
            .and_then(Recipients::into_first)
            .filter(|mailbox| !mailbox.is_empty())
        {
            return author;
        }

        if let Some(banner) = locate(self.registry.regexes(Role::SeparatorWithMetadata), body) {
            debug!("Sender read from banner");
            return self
                .mailboxes
                .mailbox(banner.named("from_address"), banner.named("from_name"));
        }

        let clean = self.without_noise(
            text,
            &[Role::SubjectLabelLax, Role::DateLabelLax, Role::CcLabelLax],
        );
        if let Some(found) = locate(self.registry.regexes(Role::FromLabelLax), &clean) {
            return self.mailboxes.mailbox(found.capture(2), found.capture(1));
        }

        Mailbox::default()
    }

    /// Always a list, possibly empty
    #[must_use]
    pub fn extract_to(&self, text: &str) -> Option<Recipients> {
        let recipients = self
            .mailboxes
            .parse(self.registry.regexes(Role::ToLabel), text, true);
        if recipients.as_ref().is_some_and(|found| !found.is_empty()) {
            return recipients;
        }

        let clean = self.without_noise(
            text,
            &[Role::SubjectLabelLax, Role::DateLabelLax, Role::CcLabelLax],
        );
        self.mailboxes
            .parse(self.registry.regexes(Role::ToLabelLax), &clean, true)
    }

    /// Always a list, possibly empty
    #[must_use]
    pub fn extract_cc(&self, text: &str) -> Option<Recipients> {
        let recipients = self
            .mailboxes
            .parse(self.registry.regexes(Role::CcLabel), text, true);
        if recipients.as_ref().is_some_and(|found| !found.is_empty()) {
            return recipients;
        }

        let clean = self.without_noise(text, &[Role::SubjectLabelLax, Role::DateLabelLax]);
        self.mailboxes
            .parse(self.registry.regexes(Role::CcLabelLax), &clean, true)
    }

    #[must_use]
    pub fn extract_subject(&self, text: &str) -> Option<String> {
        locate(self.registry.regexes(Role::SubjectLabel), text)
            .or_else(|| locate(self.registry.regexes(Role::SubjectLabelLax), text))
            .and_then(|found| found.capture(0).and_then(trimmed))
    }

    #[must_use]
    pub fn extract_date(&self, text: &str, body: &str) -> Option<String> {
        if let Some(found) = locate(self.registry.regexes(Role::DateLabel), text) {
            return found.capture(0).and_then(trimmed);
        }

        if let Some(banner) = locate(self.registry.regexes(Role::SeparatorWithMetadata), body) {
            return banner.named("date").and_then(trimmed);
        }

        let clean = self.without_noise(text, &[Role::SubjectLabelLax]);
        locate(self.registry.regexes(Role::DateLabelLax), &clean)
            .and_then(|found| found.capture(0).and_then(trimmed))
    }

    /// Drop the first occurrence of each role's header, for labels that
    /// would otherwise swallow the value being looked for
    fn without_noise(&self, text: &str, roles: &[Role]) -> String {
        roles.iter().fold(text.to_string(), |text, &role| {
            remove(self.registry.regexes(role), &text).unwrap_or(text)
        })
    }
}
