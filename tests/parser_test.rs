use forward_extract::*;
use pretty_assertions::assert_eq;

fn mailbox(address: &str, name: &str) -> Mailbox {
    Mailbox::new(Some(address), Some(name))
}

const GMAIL_BODY: &str = "Intro text\n\n\
    ---------- Forwarded message ----------\n\
    From: John Doe <john.doe@acme.com>\n\
    Date: Mon, 1 Jan 2024\n\
    Subject: Hello\n\
    To: Bessie Berry <bessie.berry@acme.com>\n\n\
    Body text.";

// --- Banner detection ---

#[test]
fn test_read_gmail_forward() {
    let result = read(GMAIL_BODY, Some("Fwd: Hello"));

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Intro text"));
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
    assert_eq!(
        result.email.to,
        Some(Recipients::Many(vec![mailbox(
            "bessie.berry@acme.com",
            "Bessie Berry"
        )]))
    );
    assert_eq!(result.email.cc, Some(Recipients::Many(vec![])));
    assert_eq!(result.email.subject.as_deref(), Some("Hello"));
    assert_eq!(result.email.date.as_deref(), Some("Mon, 1 Jan 2024"));
    assert_eq!(result.email.body.as_deref(), Some("Body text."));
}

#[test]
fn test_read_without_subject_detects_from_body() {
    let result = read(GMAIL_BODY, None);

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Intro text"));
    assert_eq!(result.email.subject.as_deref(), Some("Hello"));
}

#[test]
fn test_read_crlf_body() {
    let body = GMAIL_BODY.replace('\n', "\r\n");
    let result = read(&body, Some("Fwd: Hello"));

    assert_eq!(result, read(GMAIL_BODY, Some("Fwd: Hello")));
}

#[test]
fn test_read_non_breaking_spaces() {
    let body = "Intro text\u{a0}\n\n\
        ---------- Forwarded message ----------\n\
        From:\u{a0}John Doe <john.doe@acme.com>\n\
        Subject: Hello\n\
        To: Bessie Berry <bessie.berry@acme.com>\n\n\
        Body text.";

    let result = read(body, None);

    assert_eq!(result.message.as_deref(), Some("Intro text"));
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
}

#[test]
fn test_read_apple_mail_quoted() {
    let body = "Have a look\n\n\
        Begin forwarded message:\n\n\
        > From: John Doe <john.doe@acme.com>\n\
        > Subject: Integer consequat non purus\n\
        > Date: 25 October 2021 at 11:17:21 EEST\n\
        > To: Bessie Berry <bessie.berry@acme.com>\n\
        >\n\
        > Aenean quis diam urna.\n\
        >\n\
        > Praesent ac ligula orci.";

    let result = read(body, None);

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Have a look"));
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
    assert_eq!(
        result.email.subject.as_deref(),
        Some("Integer consequat non purus")
    );
    assert_eq!(
        result.email.date.as_deref(),
        Some("25 October 2021 at 11:17:21 EEST")
    );
    assert_eq!(
        result.email.body.as_deref(),
        Some("Aenean quis diam urna.\n\nPraesent ac ligula orci.")
    );
}

#[test]
fn test_read_outlook_live() {
    let body = format!(
        "See below\n\n{}\n\
         From: John Doe <john.doe@acme.com>\n\
         Sent: Monday, October 25, 2021 11:17 AM\n\
         To: Bessie Berry <bessie.berry@acme.com>; Suzanne <suzanne@globex.corp>\n\
         Cc: Walter Sheltan <walter.sheltan@acme.com>\n\
         Subject: Integer consequat non purus\n\n\
         Aenean quis diam urna.",
        "_".repeat(32)
    );

    let result = read(&body, Some("Fw: Integer consequat non purus"));

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("See below"));
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
    assert_eq!(
        result.email.to,
        Some(Recipients::Many(vec![
            mailbox("bessie.berry@acme.com", "Bessie Berry"),
            mailbox("suzanne@globex.corp", "Suzanne"),
        ]))
    );
    assert_eq!(
        result.email.cc,
        Some(Recipients::Many(vec![mailbox(
            "walter.sheltan@acme.com",
            "Walter Sheltan"
        )]))
    );
    assert_eq!(
        result.email.date.as_deref(),
        Some("Monday, October 25, 2021 11:17 AM")
    );
    assert_eq!(result.email.body.as_deref(), Some("Aenean quis diam urna."));
}

#[test]
fn test_read_thunderbird() {
    let body = "\n\n-------- Forwarded Message --------\n\
        Subject: \tInteger consequat non purus\n\
        Date: \tMon, 25 Oct 2021 11:17:21 +0300\n\
        From: \tJohn Doe <john.doe@acme.com>\n\
        To: \tbessie.berry@acme.com\n\
        CC: \tWalter Sheltan <walter.sheltan@acme.com>, Nicholas <nicholas@globex.corp>\n\n\n\
        Aenean quis diam urna.";

    let result = read(body, Some("Fwd: Integer consequat non purus"));

    assert!(result.forwarded);
    assert_eq!(result.message, None);
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
    assert_eq!(
        result.email.to,
        Some(Recipients::Many(vec![Mailbox::new(
            Some("bessie.berry@acme.com"),
            None
        )]))
    );
    assert_eq!(
        result.email.cc,
        Some(Recipients::Many(vec![
            mailbox("walter.sheltan@acme.com", "Walter Sheltan"),
            mailbox("nicholas@globex.corp", "Nicholas"),
        ]))
    );
    assert_eq!(
        result.email.date.as_deref(),
        Some("Mon, 25 Oct 2021 11:17:21 +0300")
    );
    assert!(result.email.parsed_date().is_some());
    assert_eq!(result.email.body.as_deref(), Some("Aenean quis diam urna."));
}

#[test]
fn test_read_yahoo_run_together_headers() {
    let body = "\n\n----- Forwarded Message -----\n\
        From: John Doe <john.doe@acme.com>To: Bessie Berry <bessie.berry@acme.com>\
        Sent: Monday, October 25, 2021, 11:17:21 AM GMT+3\
        Subject: Integer consequat non purus\n\n\
        Aenean quis diam urna.";

    let result = read(body, Some("Fw: Integer consequat non purus"));

    assert!(result.forwarded);
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
    assert_eq!(
        result.email.to,
        Some(Recipients::Many(vec![mailbox(
            "bessie.berry@acme.com",
            "Bessie Berry"
        )]))
    );
    assert_eq!(
        result.email.date.as_deref(),
        Some("Monday, October 25, 2021, 11:17:21 AM GMT+3")
    );
    assert_eq!(
        result.email.subject.as_deref(),
        Some("Integer consequat non purus")
    );
    assert_eq!(result.email.body.as_deref(), Some("Aenean quis diam urna."));
}

// --- Banners carrying the sender ---

#[test]
fn test_read_outlook_2019_banner_metadata() {
    let body = "Please handle\n\n\
        On Monday, October 25, 2021 11:17 AM, \"John Doe\" <john.doe@acme.com> wrote:\n\n\
        Aenean quis diam urna.";

    let result = read(body, Some("FW: Integer consequat non purus"));

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Please handle"));
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
    assert_eq!(
        result.email.date.as_deref(),
        Some("Monday, October 25, 2021 11:17 AM")
    );
    assert_eq!(result.email.to, Some(Recipients::Many(vec![])));
    assert_eq!(
        result.email.subject.as_deref(),
        Some("Integer consequat non purus")
    );
    assert_eq!(result.email.body.as_deref(), Some("Aenean quis diam urna."));
}

// --- Forwards without a banner ---

#[test]
fn test_read_new_outlook_splits_on_from() {
    let body = "FYI\n\n\
        From: John Doe <john.doe@acme.com>\n\
        Sent: Monday, October 25, 2021 11:17 AM\n\
        To: Bessie Berry <bessie.berry@acme.com>\n\
        Subject: Integer consequat non purus\n\n\
        Aenean quis diam urna.";

    let result = read(body, Some("FW: Integer consequat non purus"));

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("FYI"));
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
    assert_eq!(
        result.email.date.as_deref(),
        Some("Monday, October 25, 2021 11:17 AM")
    );
    assert_eq!(result.email.body.as_deref(), Some("Aenean quis diam urna."));
}

#[test]
fn test_read_from_split_requires_forward_subject() {
    let body = "FYI\n\nFrom: John Doe <john.doe@acme.com>\nSubject: Hello\n\nText";

    let result = read(body, None);

    assert!(!result.forwarded);
    assert_eq!(result.message, None);
    assert_eq!(result.email.from.address, None);
}

#[test]
fn test_read_subject_only_forward() {
    let result = read("See below.", Some("Fwd: Quarterly report"));

    assert!(result.forwarded);
    assert_eq!(result.message, None);
    assert_eq!(result.email.subject.as_deref(), Some("Quarterly report"));
    assert!(result.email.from.is_empty());
    assert_eq!(result.email.body, None);
}

// --- Gating ---

#[test]
fn test_read_plain_subject_skips_body() {
    let result = read(GMAIL_BODY, Some("Meeting notes"));

    assert!(!result.forwarded);
    assert_eq!(result.message, None);
    assert_eq!(result.email, ParsedEmail::default());
}

#[test]
fn test_read_empty_subject_treated_as_absent() {
    let result = read(GMAIL_BODY, Some(""));

    assert!(result.forwarded);
    assert_eq!(result.email.subject.as_deref(), Some("Hello"));
}

#[test]
fn test_read_bare_prefix_keeps_extracted_subject() {
    let result = read(GMAIL_BODY, Some("Fwd: "));

    assert!(result.forwarded);
    assert_eq!(result.email.subject.as_deref(), Some("Hello"));
}

#[test]
fn test_read_not_forwarded() {
    let result = read("Just a regular note.\nThanks!", None);

    assert!(!result.forwarded);
    assert_eq!(result.message, None);
    assert_eq!(result.email.from.address, None);
}

#[test]
fn test_read_banner_without_email() {
    let result = read("Hello\n---------- Forwarded message ----------\n", None);

    assert!(!result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Hello"));
}

// --- Nested forwards ---

#[test]
fn test_read_nested_forward_keeps_outer_email() {
    let body = "Outer note\n\n\
        ---------- Forwarded message ---------\n\
        From: Bessie Berry <bessie.berry@acme.com>\n\
        Date: Tue, 26 Oct 2021\n\
        Subject: Fwd: Hello\n\
        To: Walter Sheltan <walter.sheltan@acme.com>\n\n\
        Inner note\n\n\
        ---------- Forwarded message ---------\n\
        From: Suzanne <suzanne@globex.corp>\n\
        Date: Mon, 25 Oct 2021\n\
        Subject: Hello\n\
        To: Bessie Berry <bessie.berry@acme.com>\n\n\
        Original body.";

    let result = read(body, None);

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Outer note"));
    assert_eq!(
        result.email.from,
        mailbox("bessie.berry@acme.com", "Bessie Berry")
    );
    assert_eq!(result.email.subject.as_deref(), Some("Fwd: Hello"));
    assert_eq!(result.email.date.as_deref(), Some("Tue, 26 Oct 2021"));

    let inner = result.email.body.unwrap_or_default();
    assert!(inner.starts_with("Inner note"));
    assert!(inner.contains("---------- Forwarded message ---------"));
    assert!(inner.contains("From: Suzanne <suzanne@globex.corp>"));
    assert!(inner.contains("To: Bessie Berry <bessie.berry@acme.com>"));
    assert!(inner.ends_with("Original body."));
}

#[test]
fn test_read_nested_forward_mixed_banners() {
    let body = "Outer note\n\n\
        Begin forwarded message:\n\n\
        From: Bessie Berry <bessie.berry@acme.com>\n\
        Subject: Fwd: Hello\n\
        Date: 26 October 2021 at 09:00:00 EEST\n\
        To: Walter Sheltan <walter.sheltan@acme.com>\n\n\
        Inner note\n\n\
        ---------- Forwarded message ---------\n\
        From: Suzanne <suzanne@globex.corp>\n\
        Date: Mon, 25 Oct 2021\n\
        Subject: Hello\n\
        To: Bessie Berry <bessie.berry@acme.com>\n\n\
        Original body.";

    let result = read(body, None);

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Outer note"));
    assert_eq!(
        result.email.from,
        mailbox("bessie.berry@acme.com", "Bessie Berry")
    );
    assert_eq!(result.email.subject.as_deref(), Some("Fwd: Hello"));
    assert_eq!(
        result.email.date.as_deref(),
        Some("26 October 2021 at 09:00:00 EEST")
    );

    let inner = result.email.body.unwrap_or_default();
    assert!(inner.starts_with("Inner note"));
    assert!(inner.contains("From: Suzanne <suzanne@globex.corp>"));
    assert!(inner.ends_with("Original body."));

    let split = ForwardParser::default().parse_body(body, false);
    assert!(
        split
            .email
            .is_some_and(|email| email.starts_with("From: Bessie Berry"))
    );
}

// --- Header fallbacks ---

#[test]
fn test_read_from_inside_header_line() {
    let body = "\n\n----- Forwarded Message -----\n\
        To: Bessie Berry <bessie.berry@acme.com> From: John Doe <john.doe@acme.com>\
        Sent: Monday, October 25, 2021, 11:17:21 AM GMT+3\
        Subject: Integer consequat non purus\n\n\
        Aenean quis diam urna.";

    let result = read(body, None);

    assert!(result.forwarded);
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
    assert_eq!(
        result.email.to.as_ref().and_then(Recipients::first),
        Some(&mailbox("bessie.berry@acme.com", "Bessie Berry"))
    );
    assert_eq!(
        result.email.date.as_deref(),
        Some("Monday, October 25, 2021, 11:17:21 AM GMT+3")
    );
    assert_eq!(
        result.email.subject.as_deref(),
        Some("Integer consequat non purus")
    );
    assert_eq!(result.email.body.as_deref(), Some("Aenean quis diam urna."));
}

#[test]
fn test_read_cc_inside_header_line() {
    let body = "\n\n----- Forwarded Message -----\n\
        From: John Doe <john.doe@acme.com>Cc: Walter Sheltan <walter.sheltan@acme.com>\
        Sent: Monday, October 25, 2021, 11:17:21 AM GMT+3\
        Subject: Integer consequat non purus\n\n\
        Aenean quis diam urna.";

    let result = read(body, Some("Fw: Integer consequat non purus"));

    assert!(result.forwarded);
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
    assert_eq!(
        result.email.cc,
        Some(Recipients::Many(vec![mailbox(
            "walter.sheltan@acme.com",
            "Walter Sheltan"
        )]))
    );
    assert_eq!(result.email.to, Some(Recipients::Many(vec![])));
    assert_eq!(result.email.body.as_deref(), Some("Aenean quis diam urna."));
}

#[test]
fn test_read_body_after_reply_to() {
    let body = "Begin forwarded message:\n\n\
        From: John Doe <john.doe@acme.com>\n\
        Subject: Integer consequat non purus\n\
        Date: 25 October 2021 at 11:17:21 EEST\n\
        To: Bessie Berry <bessie.berry@acme.com>\n\
        Reply-To: John Doe <john@acme.com>\n\n\
        Aenean quis diam urna.";

    let result = read(body, None);

    assert!(result.forwarded);
    assert_eq!(result.message, None);
    assert_eq!(result.email.from, mailbox("john.doe@acme.com", "John Doe"));
    assert_eq!(
        result.email.to,
        Some(Recipients::Many(vec![mailbox(
            "bessie.berry@acme.com",
            "Bessie Berry"
        )]))
    );
    assert_eq!(result.email.body.as_deref(), Some("Aenean quis diam urna."));
}

#[test]
fn test_read_body_right_after_subject() {
    let body = "---------- Forwarded message ---------\n\
        From: John Doe <john.doe@acme.com>\n\
        Subject: Integer consequat non purus\n\
        Aenean quis diam urna.";

    let result = read(body, None);

    assert!(result.forwarded);
    assert_eq!(
        result.email.subject.as_deref(),
        Some("Integer consequat non purus")
    );
    assert_eq!(result.email.body.as_deref(), Some("Aenean quis diam urna."));
}

// --- Parser pieces ---

#[test]
fn test_parse_subject() {
    let parser = ForwardParser::default();

    let cases = [
        ("Fwd: Hello", Some("Hello")),
        ("FW: Hello", Some("Hello")),
        ("WG: Hallo", Some("Hallo")),
        ("TR: Bonjour", Some("Bonjour")),
        ("Fwd: ", Some("")),
        ("Re: Hello", None),
        ("Hello", None),
    ];

    for (subject, expected) in cases {
        assert_eq!(
            parser.parse_subject(subject).as_deref(),
            expected,
            "Failed for subject: {subject}"
        );
    }
}

#[test]
fn test_parse_body_split() {
    let parser = ForwardParser::default();
    let split = parser.parse_body(GMAIL_BODY, false);

    assert_eq!(split.message.as_deref(), Some("Intro text"));
    assert!(
        split
            .email
            .as_deref()
            .is_some_and(|email| email.starts_with("From: John Doe"))
    );
    assert_eq!(split.body, GMAIL_BODY);
}

#[test]
fn test_parser_with_custom_registry() {
    let registry = Registry::from_json(
        r#"{
            "version": 1,
            "patterns": [
                { "role": "separator", "pattern": "(?m)^=== forwarded ===\\s*" },
                { "role": "from_label", "pattern": "(?m)^(\\s*Sender\\s?:(.+))$" },
                { "role": "mailbox_shape", "pattern": "^([^,;]+?)\\s*<(.+?)>" },
                { "role": "mailbox_address", "pattern": "^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$" }
            ]
        }"#,
    )
    .unwrap();
    let parser = ForwardParser::new(registry);

    let result = parser.read(
        "Hi\n=== forwarded ===\nSender: Ann <ann@acme.com>\n\nHello",
        None,
    );

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("Hi"));
    assert_eq!(result.email.from, mailbox("ann@acme.com", "Ann"));
    assert_eq!(
        result.email.body.as_deref(),
        Some("Sender: Ann <ann@acme.com>\n\nHello")
    );
}
