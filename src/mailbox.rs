//! Mailbox list parsing

use crate::matcher::locate;
use crate::registry::{Registry, Role};
use crate::types::{Mailbox, Recipients, trimmed};
use regex::Regex;
use tracing::trace;

const LIST_SEPARATORS: [char; 2] = [',', ';'];

/// Reads mailboxes out of header values using the registry's mailbox shapes
#[derive(Debug, Clone, Copy)]
pub struct MailboxParser<'r> {
    registry: &'r Registry,
}

impl<'r> MailboxParser<'r> {
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Build a mailbox from raw parts
    ///
    /// An address that is not a valid address becomes the name, and a name
    /// equal to the address is dropped.
    #[must_use]
    pub fn mailbox(&self, address: Option<&str>, name: Option<&str>) -> Mailbox {
        let mut address = address.and_then(trimmed);
        let mut name = name.and_then(trimmed);

        if !address.as_deref().is_some_and(|address| self.is_address(address)) {
            name = address.take();
        }
        if name == address {
            name = None;
        }

        Mailbox { address, name }
    }

    #[must_use]
    pub fn is_address(&self, candidate: &str) -> bool {
        locate(self.registry.regexes(Role::MailboxAddress), candidate).is_some()
    }

    /// Consume a header value mailbox by mailbox
    ///
    /// Text that fits no mailbox shape ends the list as a single mailbox.
    #[must_use]
    pub fn parse_line(&self, line: &str) -> Vec<Mailbox> {
        let mut mailboxes = Vec::new();
        let mut rest = line.trim().to_string();

        while !rest.is_empty() {
            let Some(found) = locate(self.registry.regexes(Role::MailboxShape), &rest)
                .filter(|found| !found.as_str().is_empty())
            else {
                mailboxes.push(self.mailbox(Some(&rest), None));
                break;
            };

            let mailbox = if found.captures_len() >= 2 {
                self.mailbox(found.capture(1), found.capture(0))
            } else {
                self.mailbox(found.capture(0), None)
            };
            trace!(%mailbox, "Mailbox parsed");
            mailboxes.push(mailbox);

            let remaining = rest.replacen(found.as_str(), "", 1);
            let remaining = remaining.trim();
            rest = remaining
                .strip_prefix(&LIST_SEPARATORS[..])
                .unwrap_or(remaining)
                .trim()
                .to_string();
        }

        mailboxes
    }

    /// Locate a header with `labels` and parse its value
    ///
    /// Several mailboxes, or a single one with `force_list`, yield a list.
    /// When no label matches the result is an empty list with `force_list`,
    /// and `None` otherwise.
    pub fn parse<'p>(
        &self,
        labels: impl IntoIterator<Item = &'p Regex>,
        text: &str,
        force_list: bool,
    ) -> Option<Recipients> {
        let value = locate(labels, text).and_then(|found| found.last_capture().and_then(trimmed));

        let Some(value) = value else {
            return force_list.then(|| Recipients::Many(Vec::new()));
        };

        let mut mailboxes = self.parse_line(&value);
        if mailboxes.len() > 1 || force_list {
            Some(Recipients::Many(mailboxes))
        } else {
            mailboxes.pop().map(Recipients::One)
        }
    }
}
