//! Built-in pattern table
//!
//! Each list is ordered: the position of an entry is its priority when the
//! selector has to break a tie. The second element of every entry names the
//! mail clients (and locales) whose rendering the pattern recognizes.

use crate::registry::{PatternEntry, PatternTable, Role, TABLE_VERSION};

type Entries = &'static [(&'static str, &'static str)];

/// Named slots carried by separators that embed the original sender and date
pub const METADATA_CAPTURES: [&str; 3] = ["date", "from_name", "from_address"];

const SUBJECT: Entries = &[
    (r"(?m)^Fw:(.*)", "Outlook Live / 365 (cs, en, hr, hu, sk), Yahoo Mail (all locales)"),
    (r"(?m)^VS:(.*)", "Outlook Live / 365 (da), New Outlook 2019 (da)"),
    (r"(?m)^WG:(.*)", "Outlook Live / 365 (de), New Outlook 2019 (de)"),
    (r"(?m)^RV:(.*)", "Outlook Live / 365 (es), New Outlook 2019 (es)"),
    (r"(?m)^TR:(.*)", "Outlook Live / 365 (fr), New Outlook 2019 (fr)"),
    (r"(?m)^I:(.*)", "Outlook Live / 365 (it), New Outlook 2019 (it)"),
    (r"(?m)^FW:(.*)", "Outlook Live / 365 (nl, pt), New Outlook 2019, Outlook 2019 (all locales)"),
    (r"(?m)^Vs:(.*)", "Outlook Live / 365 (no)"),
    (r"(?m)^PD:(.*)", "Outlook Live / 365 (pl), New Outlook 2019 (pl)"),
    (r"(?m)^ENC:(.*)", "Outlook Live / 365 (pt-br), New Outlook 2019 (pt-br)"),
    (r"(?m)^Redir.:(.*)", "Outlook Live / 365 (ro)"),
    (r"(?m)^VB:(.*)", "Outlook Live / 365 (sv), New Outlook 2019 (sv)"),
    (r"(?m)^VL:(.*)", "New Outlook 2019 (fi)"),
    (r"(?m)^Videresend:(.*)", "New Outlook 2019 (no)"),
    (r"(?m)^İLT:(.*)", "New Outlook 2019 (tr)"),
    (r"(?m)^Fwd:(.*)", "Gmail (all locales), Thunderbird (all locales), Missive (en)"),
];

const SEPARATOR: Entries = &[
    (r"(?m)^>?\s*Begin forwarded message\s?:", "Apple Mail (en)"),
    (r"(?m)^>?\s*Začátek přeposílané zprávy\s?:", "Apple Mail (cs)"),
    (r"(?m)^>?\s*Start på videresendt besked\s?:", "Apple Mail (da)"),
    (r"(?m)^>?\s*Anfang der weitergeleiteten Nachricht\s?:", "Apple Mail (de)"),
    (r"(?m)^>?\s*Inicio del mensaje reenviado\s?:", "Apple Mail (es)"),
    (r"(?m)^>?\s*Välitetty viesti alkaa\s?:", "Apple Mail (fi)"),
    (r"(?m)^>?\s*Début du message réexpédié\s?:", "Apple Mail (fr)"),
    (r"(?m)^>?\s*Début du message transféré\s?:", "Apple Mail iOS (fr)"),
    (r"(?m)^>?\s*Započni proslijeđenu poruku\s?:", "Apple Mail (hr)"),
    (r"(?m)^>?\s*Továbbított levél kezdete\s?:", "Apple Mail (hu)"),
    (r"(?m)^>?\s*Inizio messaggio inoltrato\s?:", "Apple Mail (it)"),
    (r"(?m)^>?\s*Begin doorgestuurd bericht\s?:", "Apple Mail (nl)"),
    (r"(?m)^>?\s*Videresendt melding\s?:", "Apple Mail (no)"),
    (r"(?m)^>?\s*Początek przekazywanej wiadomości\s?:", "Apple Mail (pl)"),
    (r"(?m)^>?\s*Início da mensagem reencaminhada\s?:", "Apple Mail (pt)"),
    (r"(?m)^>?\s*Início da mensagem encaminhada\s?:", "Apple Mail (pt-br)"),
    (r"(?m)^>?\s*Începe mesajul redirecționat\s?:", "Apple Mail (ro)"),
    (r"(?m)^>?\s*Начало переадресованного сообщения\s?:", "Apple Mail (ru)"),
    (r"(?m)^>?\s*Začiatok preposlanej správy\s?:", "Apple Mail (sk)"),
    (r"(?m)^>?\s*Vidarebefordrat mejl\s?:", "Apple Mail (sv)"),
    (r"(?m)^>?\s*İleti başlangıcı\s?:", "Apple Mail (tr)"),
    (r"(?m)^>?\s*Початок листа, що пересилається\s?:", "Apple Mail (uk)"),
    (
        r"(?m)^\s*-{8,10}\s*Forwarded message\s*-{8,10}\s*",
        "Gmail (all locales), Missive (en), HubSpot (en)",
    ),
    (r"(?m)^\s*_{32}\s*$", "Outlook Live / 365 (all locales)"),
    (
        r"(?m)^\s?Dne\s?.+,\s?.+\s*[\[|<].+[\]|>]\s?napsal\(a\)\s?:",
        "Outlook 2019 (cz)",
    ),
    (
        r#"(?m)^\s?D.\s?.+\s?skrev\s?".+"\s*[\[|<].+[\]|>]\s?:"#,
        "Outlook 2019 (da)",
    ),
    (
        r#"(?m)^\s?Am\s?.+\s?schrieb\s?".+"\s*[\[|<].+[\]|>]\s?:"#,
        "Outlook 2019 (de)",
    ),
    (
        r#"(?m)^\s?On\s?.+,\s?".+"\s*[\[|<].+[\]|>]\s?wrote\s?:"#,
        "Outlook 2019 (en)",
    ),
    (
        r#"(?m)^\s?El\s?.+,\s?".+"\s*[\[|<].+[\]|>]\s?escribió\s?:"#,
        "Outlook 2019 (es)",
    ),
    (
        r"(?m)^\s?Le\s?.+,\s?«.+»\s*[\[|<].+[\]|>]\s?a écrit\s?:",
        "Outlook 2019 (fr)",
    ),
    (
        r"(?m)^\s?.+\s*[\[|<].+[\]|>]\s?kirjoitti\s?.+\s?:",
        "Outlook 2019 (fi)",
    ),
    (
        r"(?m)^\s?.+\s?időpontban\s?.+\s*[\[|<(].+[\]|>)]\s?ezt írta\s?:",
        "Outlook 2019 (hu)",
    ),
    (
        r#"(?m)^\s?Il giorno\s?.+\s?".+"\s*[\[|<].+[\]|>]\s?ha scritto\s?:"#,
        "Outlook 2019 (it)",
    ),
    (
        r"(?m)^\s?Op\s?.+\s?heeft\s?.+\s*[\[|<].+[\]|>]\s?geschreven\s?:",
        "Outlook 2019 (nl)",
    ),
    (
        r"(?m)^\s?.+\s*[\[|<].+[\]|>]\s?skrev følgende den\s?.+\s?:",
        "Outlook 2019 (no)",
    ),
    (
        r"(?m)^\s?Dnia\s?.+\s?„.+”\s*[\[|<].+[\]|>]\s?napisał\s?:",
        "Outlook 2019 (pl)",
    ),
    (
        r#"(?m)^\s?Em\s?.+,\s?".+"\s*[\[|<].+[\]|>]\s?escreveu\s?:"#,
        "Outlook 2019 (pt)",
    ),
    (
        r#"(?m)^\s?.+\s?пользователь\s?".+"\s*[\[|<].+[\]|>]\s?написал\s?:"#,
        "Outlook 2019 (ru)",
    ),
    (
        r"(?m)^\s?.+\s?používateľ\s?.+\s*\([\[|<].+[\]|>]\)\s?napísal\s?:",
        "Outlook 2019 (sk)",
    ),
    (
        r#"(?m)^\s?Den\s?.+\s?skrev\s?".+"\s*[\[|<].+[\]|>]\s?följande\s?:"#,
        "Outlook 2019 (sv)",
    ),
    (
        r#"(?m)^\s?".+"\s*[\[|<].+[\]|>],\s?.+\s?tarihinde şunu yazdı\s?:"#,
        "Outlook 2019 (tr)",
    ),
    (r"(?m)^\s*-{5,8} Přeposlaná zpráva -{5,8}\s*", "Yahoo Mail (cs), Thunderbird (cs)"),
    (r"(?m)^\s*-{5,8} Videresendt meddelelse -{5,8}\s*", "Yahoo Mail (da), Thunderbird (da)"),
    (
        r"(?m)^\s*-{5,10} Weitergeleitete Nachricht -{5,10}\s*",
        "Yahoo Mail (de), Thunderbird (de), HubSpot (de)",
    ),
    (r"(?m)^\s*-{5,8} Forwarded Message -{5,8}\s*", "Yahoo Mail (en), Thunderbird (en)"),
    (
        r"(?m)^\s*-{5,10} Mensaje reenviado -{5,10}\s*",
        "Yahoo Mail (es), Thunderbird (es), HubSpot (es)",
    ),
    (
        r"(?m)^\s*-{5,10} Edelleenlähetetty viesti -{5,10}\s*",
        "Yahoo Mail (fi), HubSpot (fi)",
    ),
    (r"(?m)^\s*-{5} Message transmis -{5}\s*", "Yahoo Mail (fr)"),
    (r"(?m)^\s*-{5,8} Továbbított üzenet -{5,8}\s*", "Yahoo Mail (hu), Thunderbird (hu)"),
    (r"(?m)^\s*-{5,10} Messaggio inoltrato -{5,10}\s*", "Yahoo Mail (it), HubSpot (it)"),
    (
        r"(?m)^\s*-{5,10} Doorgestuurd bericht -{5,10}\s*",
        "Yahoo Mail (nl), Thunderbird (nl), HubSpot (nl)",
    ),
    (r"(?m)^\s*-{5,8} Videresendt melding -{5,8}\s*", "Yahoo Mail (no), Thunderbird (no)"),
    (r"(?m)^\s*-{5} Przekazana wiadomość -{5}\s*", "Yahoo Mail (pl)"),
    (
        r"(?m)^\s*-{5,8} Mensagem reencaminhada -{5,8}\s*",
        "Yahoo Mail (pt), Thunderbird (pt)",
    ),
    (
        r"(?m)^\s*-{5,10} Mensagem encaminhada -{5,10}\s*",
        "Yahoo Mail (pt-br), Thunderbird (pt-br), HubSpot (pt-br)",
    ),
    (r"(?m)^\s*-{5,8} Mesaj redirecționat -{5,8}\s*", "Yahoo Mail (ro)"),
    (r"(?m)^\s*-{5} Пересылаемое сообщение -{5}\s*", "Yahoo Mail (ru)"),
    (r"(?m)^\s*-{5} Preposlaná správa -{5}\s*", "Yahoo Mail (sk)"),
    (
        r"(?m)^\s*-{5,10} Vidarebefordrat meddelande -{5,10}\s*",
        "Yahoo Mail (sv), Thunderbird (sv), HubSpot (sv)",
    ),
    (r"(?m)^\s*-{5} İletilmiş Mesaj -{5}\s*", "Yahoo Mail (tr)"),
    (r"(?m)^\s*-{5} Перенаправлене повідомлення -{5}\s*", "Yahoo Mail (uk)"),
    (r"(?m)^\s*-{8} Välitetty viesti / Fwd.Msg -{8}\s*", "Thunderbird (fi)"),
    (
        r"(?m)^\s*-{8,10} Message transféré -{8,10}\s*",
        "Thunderbird (fr), HubSpot (fr)",
    ),
    (r"(?m)^\s*-{8} Proslijeđena poruka -{8}\s*", "Thunderbird (hr)"),
    (r"(?m)^\s*-{8} Messaggio Inoltrato -{8}\s*", "Thunderbird (it)"),
    (r"(?m)^\s*-{3} Treść przekazanej wiadomości -{3}\s*", "Thunderbird (pl)"),
    (r"(?m)^\s*-{8} Перенаправленное сообщение -{8}\s*", "Thunderbird (ru)"),
    (
        r"(?m)^\s*-{8} Preposlaná správa --- Forwarded Message -{8}\s*",
        "Thunderbird (sk)",
    ),
    (r"(?m)^\s*-{8} İletilen İleti -{8}\s*", "Thunderbird (tr)"),
    (r"(?m)^\s*-{8} Переслане повідомлення -{8}\s*", "Thunderbird (uk)"),
    (r"(?m)^\s*-{9,10} メッセージを転送 -{9,10}\s*", "HubSpot (ja)"),
    (r"(?m)^\s*-{9,10} Wiadomość przesłana dalej -{9,10}\s*", "HubSpot (pl)"),
    (r"(?m)^>?\s*-{10} Original Message -{10}\s*", "IONOS by 1 & 1 (en)"),
];

const SEPARATOR_WITH_METADATA: Entries = &[
    (
        r"(?m)^\s?Dne\s?(?P<date>.+),\s?(?P<from_name>.+)\s*[\[|<](?P<from_address>.+)[\]|>]\s?napsal\(a\)\s?:",
        "Outlook 2019 (cz)",
    ),
    (
        r#"(?m)^\s?D.\s?(?P<date>.+)\s?skrev\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?:"#,
        "Outlook 2019 (da)",
    ),
    (
        r#"(?m)^\s?Am\s?(?P<date>.+)\s?schrieb\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?:"#,
        "Outlook 2019 (de)",
    ),
    (
        r#"(?m)^\s?On\s?(?P<date>.+),\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?wrote\s?:"#,
        "Outlook 2019 (en)",
    ),
    (
        r#"(?m)^\s?El\s?(?P<date>.+),\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?escribió\s?:"#,
        "Outlook 2019 (es)",
    ),
    (
        r"(?m)^\s?Le\s?(?P<date>.+),\s?«(?P<from_name>.+)»\s*[\[|<](?P<from_address>.+)[\]|>]\s?a écrit\s?:",
        "Outlook 2019 (fr)",
    ),
    (
        r"(?m)^\s?(?P<from_name>.+)\s*[\[|<](?P<from_address>.+)[\]|>]\s?kirjoitti\s?(?P<date>.+)\s?:",
        "Outlook 2019 (fi)",
    ),
    (
        r"(?m)^\s?(?P<date>.+)\s?időpontban\s?(?P<from_name>.+)\s*[\[|<(](?P<from_address>.+)[\]|>)]\s?ezt írta\s?:",
        "Outlook 2019 (hu)",
    ),
    (
        r#"(?m)^\s?Il giorno\s?(?P<date>.+)\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?ha scritto\s?:"#,
        "Outlook 2019 (it)",
    ),
    (
        r"(?m)^\s?Op\s?(?P<date>.+)\s?heeft\s?(?P<from_name>.+)\s*[\[|<](?P<from_address>.+)[\]|>]\s?geschreven\s?:",
        "Outlook 2019 (nl)",
    ),
    (
        r"(?m)^\s?(?P<from_name>.+)\s*[\[|<](?P<from_address>.+)[\]|>]\s?skrev følgende den\s?(?P<date>.+)\s?:",
        "Outlook 2019 (no)",
    ),
    (
        r"(?m)^\s?Dnia\s?(?P<date>.+)\s?„(?P<from_name>.+)”\s*[\[|<](?P<from_address>.+)[\]|>]\s?napisał\s?:",
        "Outlook 2019 (pl)",
    ),
    (
        r#"(?m)^\s?Em\s?(?P<date>.+),\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?escreveu\s?:"#,
        "Outlook 2019 (pt)",
    ),
    (
        r#"(?m)^\s?(?P<date>.+)\s?пользователь\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?написал\s?:"#,
        "Outlook 2019 (ru)",
    ),
    (
        r"(?m)^\s?(?P<date>.+)\s?používateľ\s?(?P<from_name>.+)\s*\([\[|<](?P<from_address>.+)[\]|>]\)\s?napísal\s?:",
        "Outlook 2019 (sk)",
    ),
    (
        r#"(?m)^\s?Den\s?(?P<date>.+)\s?skrev\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>]\s?följande\s?:"#,
        "Outlook 2019 (sv)",
    ),
    (
        r#"(?m)^\s?"(?P<from_name>.+)"\s*[\[|<](?P<from_address>.+)[\]|>],\s?(?P<date>.+)\s?tarihinde şunu yazdı\s?:"#,
        "Outlook 2019 (tr)",
    ),
];

const SUBJECT_LABEL: Entries = &[
    (
        r"(?im)^\*?Subject\s?:\*?(.+)",
        "Apple Mail (en), Gmail, Outlook Live / 365, New Outlook 2019 (en), Thunderbird (da, en), Missive (en), HubSpot (en)",
    ),
    (r"(?im)^Předmět\s?:(.+)", "Apple Mail (cs), New Outlook 2019 (cs), Thunderbird (cs)"),
    (r"(?im)^Emne\s?:(.+)", "Apple Mail (da, no), New Outlook 2019 (da), Thunderbird (no)"),
    (r"(?im)^Betreff\s?:(.+)", "Apple Mail (de), New Outlook 2019 (de), Thunderbird (de), HubSpot (de)"),
    (r"(?im)^Asunto\s?:(.+)", "Apple Mail (es), New Outlook 2019 (es), Thunderbird (es), HubSpot (es)"),
    (r"(?im)^Aihe\s?:(.+)", "Apple Mail (fi), New Outlook 2019 (fi), Thunderbird (fi), HubSpot (fi)"),
    (r"(?im)^Objet\s?:(.+)", "Apple Mail (fr), New Outlook 2019 (fr), HubSpot (fr)"),
    (r"(?im)^Predmet\s?:(.+)", "Apple Mail (hr, sk), New Outlook 2019 (sk), Thunderbird (sk)"),
    (r"(?im)^Tárgy\s?:(.+)", "Apple Mail (hu), New Outlook 2019 (hu), Thunderbird (hu)"),
    (r"(?im)^Oggetto\s?:(.+)", "Apple Mail (it), New Outlook 2019 (it), Thunderbird (it), HubSpot (it)"),
    (r"(?im)^Onderwerp\s?:(.+)", "Apple Mail (nl), New Outlook 2019 (nl), Thunderbird (nl), HubSpot (nl)"),
    (r"(?im)^Temat\s?:(.+)", "Apple Mail (pl), New Outlook 2019 (pl), Thunderbird (pl), HubSpot (pl)"),
    (r"(?im)^Assunto\s?:(.+)", "Apple Mail (pt, pt-br), New Outlook 2019 (pt, pt-br), Thunderbird (pt, pt-br), HubSpot (pt-br)"),
    (r"(?im)^Subiectul\s?:(.+)", "Apple Mail (ro), Thunderbird (ro)"),
    (r"(?im)^Тема\s?:(.+)", "Apple Mail (ru, uk), New Outlook 2019 (ru), Thunderbird (ru, uk)"),
    (r"(?im)^Ämne\s?:(.+)", "Apple Mail (sv), New Outlook 2019 (sv), Thunderbird (sv), HubSpot (sv)"),
    (r"(?im)^Konu\s?:(.+)", "Apple Mail (tr), Thunderbird (tr)"),
    (r"(?im)^Sujet\s?:(.+)", "Thunderbird (fr)"),
    (r"(?im)^Naslov\s?:(.+)", "Thunderbird (hr)"),
    (r"(?im)^件名：(.+)", "HubSpot (ja)"),
];

const SUBJECT_LABEL_LAX: Entries = &[
    (r"(?i)Subject\s?:(.+)", "Yahoo Mail (en)"),
    (r"(?i)Emne\s?:(.+)", "Yahoo Mail (da, no)"),
    (r"(?i)Předmět\s?:(.+)", "Yahoo Mail (cs)"),
    (r"(?i)Betreff\s?:(.+)", "Yahoo Mail (de)"),
    (r"(?i)Asunto\s?:(.+)", "Yahoo Mail (es)"),
    (r"(?i)Aihe\s?:(.+)", "Yahoo Mail (fi)"),
    (r"(?i)Objet\s?:(.+)", "Yahoo Mail (fr)"),
    (r"(?i)Tárgy\s?:(.+)", "Yahoo Mail (hu)"),
    (r"(?i)Oggetto\s?:(.+)", "Yahoo Mail (it)"),
    (r"(?i)Onderwerp\s?:(.+)", "Yahoo Mail (nl)"),
    (r"(?i)Assunto\s?:?(.+)", "Yahoo Mail (pt, pt-br)"),
    (r"(?i)Temat\s?:(.+)", "Yahoo Mail (pl)"),
    (r"(?i)Subiect\s?:(.+)", "Yahoo Mail (ro)"),
    (r"(?i)Тема\s?:(.+)", "Yahoo Mail (ru, uk)"),
    (r"(?i)Predmet\s?:(.+)", "Yahoo Mail (sk)"),
    (r"(?i)Ämne\s?:(.+)", "Yahoo Mail (sv)"),
    (r"(?i)Konu\s?:(.+)", "Yahoo Mail (tr)"),
];

const FROM_LABEL: Entries = &[
    (
        r"(?m)^(\*?\s*From\s?:\*?(.+))$",
        "Apple Mail (en), Outlook Live / 365, New Outlook 2019 (en), Thunderbird (da, en), Missive (en), HubSpot (en)",
    ),
    (r"(?m)^(\s*Od\s?:(.+))$", "Apple Mail (cs, pl, sk), Gmail (cs, pl, sk), New Outlook 2019 (cs, pl, sk), Thunderbird (cs, sk), HubSpot (pl)"),
    (r"(?m)^(\s*Fra\s?:(.+))$", "Apple Mail (da, no), Gmail (da, no), New Outlook 2019 (da), Thunderbird (no)"),
    (r"(?m)^(\s*Von\s?:(.+))$", "Apple Mail (de), Gmail (de), New Outlook 2019 (de), Thunderbird (de), HubSpot (de)"),
    (r"(?m)^(\s*De\s?:(.+))$", "Apple Mail (es, fr, pt, pt-br), Gmail (es, fr, pt, pt-br), New Outlook 2019, Thunderbird (fr, pt, pt-br), HubSpot (es, fr, pt-br)"),
    (r"(?m)^(\s*Lähettäjä\s?:(.+))$", "Apple Mail (fi), Gmail (fi), New Outlook 2019 (fi), Thunderbird (fi), HubSpot (fi)"),
    (r"(?m)^(\s*Šalje\s?:(.+))$", "Apple Mail (hr), Gmail (hr), Thunderbird (hr)"),
    (r"(?m)^(\s*Feladó\s?:(.+))$", "Apple Mail (hu), Gmail (hu), New Outlook 2019, Thunderbird (hu)"),
    (r"(?m)^(\s*Da\s?:(.+))$", "Apple Mail (it), Gmail (it), New Outlook 2019 (it), HubSpot (it)"),
    (r"(?m)^(\s*Van\s?:(.+))$", "Apple Mail (nl), Gmail (nl), New Outlook 2019 (nl), Thunderbird (nl), HubSpot (nl)"),
    (r"(?m)^(\s*Expeditorul\s?:(.+))$", "Apple Mail (ro)"),
    (r"(?m)^(\s*Отправитель\s?:(.+))$", "Apple Mail (ru)"),
    (r"(?m)^(\s*Från\s?:(.+))$", "Apple Mail (sv), Gmail (sv), New Outlook 2019 (sv), Thunderbird (sv), HubSpot (sv)"),
    (r"(?m)^(\s*Kimden\s?:(.+))$", "Apple Mail (tr), Thunderbird (tr)"),
    (r"(?m)^(\s*Від кого\s?:(.+))$", "Apple Mail (uk)"),
    (r"(?m)^(\s*Saatja\s?:(.+))$", "Gmail (et)"),
    (r"(?m)^(\s*De la\s?:(.+))$", "Gmail (ro)"),
    (r"(?m)^(\s*Gönderen\s?:(.+))$", "Gmail (tr)"),
    (r"(?m)^(\s*От\s?:(.+))$", "Gmail (ru), New Outlook 2019 (ru), Thunderbird (ru)"),
    (r"(?m)^(\s*Від\s?:(.+))$", "Gmail (uk), Thunderbird (uk)"),
    (r"(?m)^(\s*Mittente\s?:(.+))$", "Thunderbird (it)"),
    (r"(?m)^(\s*Nadawca\s?:(.+))$", "Thunderbird (pl)"),
    (r"(?m)^(\s*de la\s?:(.+))$", "Thunderbird (ro)"),
    (r"(?m)^(\s*送信元：(.+))$", "HubSpot (ja)"),
];

const FROM_LABEL_LAX: Entries = &[
    (r"(\s*From\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (en)"),
    (r"(\s*Od\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (cs, pl, sk)"),
    (r"(\s*Fra\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (da, no)"),
    (r"(\s*Von\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (de)"),
    (r"(\s*De\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (es, fr, pt, pt-br)"),
    (r"(\s*Lähettäjä\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (fi)"),
    (r"(\s*Feladó\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (hu)"),
    (r"(\s*Da\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (it)"),
    (r"(\s*Van\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (nl)"),
    (r"(\s*De la\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (ro)"),
    (r"(\s*От\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (ru)"),
    (r"(\s*Från\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (sv)"),
    (r"(\s*Kimden\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (tr)"),
    (r"(\s*Від\s?:(.+?)\s?\n?\s*[\[|<](.+?)[\]|>])", "Yahoo Mail (uk)"),
];

const TO_LABEL: Entries = &[
    (
        r"(?m)^\*?\s*To\s?:\*?(.+)$",
        "Apple Mail (en), Gmail, Outlook Live / 365, Thunderbird (da, en), Missive (en), HubSpot (en)",
    ),
    (r"(?m)^\s*Komu\s?:(.+)$", "Apple Mail (cs), New Outlook 2019 (cs, sk), Thunderbird (cs)"),
    (r"(?m)^\s*Til\s?:(.+)$", "Apple Mail (da, no), New Outlook 2019 (da), Thunderbird (no)"),
    (r"(?m)^\s*An\s?:(.+)$", "Apple Mail (de), New Outlook 2019 (de), Thunderbird (de), HubSpot (de)"),
    (r"(?m)^\s*Para\s?:(.+)$", "Apple Mail (es, pt, pt-br), New Outlook 2019 (es, pt, pt-br), Thunderbird (es, pt, pt-br), HubSpot (pt-br)"),
    (r"(?m)^\s*Vastaanottaja\s?:(.+)$", "Apple Mail (fi), New Outlook 2019 (fi), Thunderbird (fi), HubSpot (fi)"),
    (r"(?m)^\s*À\s?:(.+)$", "Apple Mail (fr), New Outlook 2019 (fr), HubSpot (fr)"),
    (r"(?m)^\s*Prima\s?:(.+)$", "Apple Mail (hr), Thunderbird (hr)"),
    (r"(?m)^\s*Címzett\s?:(.+)$", "Apple Mail (hu), New Outlook 2019 (hu), Thunderbird (hu)"),
    (r"(?m)^\s*A\s?:(.+)$", "Apple Mail (it), New Outlook 2019 (it), Thunderbird (it), HubSpot (es, it)"),
    (r"(?m)^\s*Aan\s?:(.+)$", "Apple Mail (nl), New Outlook 2019 (nl), Thunderbird (nl), HubSpot (nl)"),
    (r"(?m)^\s*Do\s?:(.+)$", "Apple Mail (pl), New Outlook 2019 (pl), HubSpot (pl)"),
    (r"(?m)^\s*Destinatarul\s?:(.+)$", "Apple Mail (ro)"),
    (r"(?m)^\s*Кому\s?:(.+)$", "Apple Mail (ru, uk), New Outlook 2019 (ru), Thunderbird (ru, uk)"),
    (r"(?m)^\s*Pre\s?:(.+)$", "Apple Mail (sk), Thunderbird (sk)"),
    (r"(?m)^\s*Till\s?:(.+)$", "Apple Mail (sv), New Outlook 2019 (sv), Thunderbird (sv)"),
    (r"(?m)^\s*Kime\s?:(.+)$", "Apple Mail (tr), Thunderbird (tr)"),
    (r"(?m)^\s*Pour\s?:(.+)$", "Thunderbird (fr)"),
    (r"(?m)^\s*Adresat\s?:(.+)$", "Thunderbird (pl)"),
    (r"(?m)^\s*送信先：(.+)$", "HubSpot (ja)"),
];

const TO_LABEL_LAX: Entries = &[
    (r"(?m)\s*To\s?:(.+)$", "Yahoo Mail (en)"),
    (r"(?m)\s*Komu\s?:(.+)$", "Yahoo Mail (cs, sk)"),
    (r"(?m)\s*Til\s?:(.+)$", "Yahoo Mail (da, no, sv)"),
    (r"(?m)\s*An\s?:(.+)$", "Yahoo Mail (de)"),
    (r"(?m)\s*Para\s?:(.+)$", "Yahoo Mail (es, pt, pt-br)"),
    (r"(?m)\s*Vastaanottaja\s?:(.+)$", "Yahoo Mail (fi)"),
    (r"(?m)\s*À\s?:(.+)$", "Yahoo Mail (fr)"),
    (r"(?m)\s*Címzett\s?:(.+)$", "Yahoo Mail (hu)"),
    (r"(?m)\s*A\s?:(.+)$", "Yahoo Mail (it)"),
    (r"(?m)\s*Aan\s?:(.+)$", "Yahoo Mail (nl)"),
    (r"(?m)\s*Do\s?:(.+)$", "Yahoo Mail (pl)"),
    (r"(?m)\s*Către\s?:(.+)$", "Yahoo Mail (ro), Thunderbird (ro)"),
    (r"(?m)\s*Кому\s?:(.+)$", "Yahoo Mail (ru, uk)"),
    (r"(?m)\s*Till\s?:(.+)$", "Yahoo Mail (sv)"),
    (r"(?m)\s*Kime\s?:(.+)$", "Yahoo Mail (tr)"),
];

const REPLY_TO_LABEL: Entries = &[
    (r"(?m)^\s*Reply-To\s?:(.+)$", "Apple Mail (en)"),
    (r"(?m)^\s*Odgovori na\s?:(.+)$", "Apple Mail (hr)"),
    (r"(?m)^\s*Odpověď na\s?:(.+)$", "Apple Mail (cs)"),
    (r"(?m)^\s*Svar til\s?:(.+)$", "Apple Mail (da, no)"),
    (r"(?m)^\s*Antwoord aan\s?:(.+)$", "Apple Mail (nl)"),
    (r"(?m)^\s*Vastaus\s?:(.+)$", "Apple Mail (fi)"),
    (r"(?m)^\s*Répondre à\s?:(.+)$", "Apple Mail (fr)"),
    (r"(?m)^\s*Antwort an\s?:(.+)$", "Apple Mail (de)"),
    (r"(?m)^\s*Válaszcím\s?:(.+)$", "Apple Mail (hu)"),
    (r"(?m)^\s*Rispondi a\s?:(.+)$", "Apple Mail (it)"),
    (r"(?m)^\s*Odpowiedź-do\s?:(.+)$", "Apple Mail (pl)"),
    (r"(?m)^\s*Responder A\s?:(.+)$", "Apple Mail (pt)"),
    (r"(?m)^\s*Responder a\s?:(.+)$", "Apple Mail (pt-br, es)"),
    (r"(?m)^\s*Răspuns către\s?:(.+)$", "Apple Mail (ro)"),
    (r"(?m)^\s*Ответ-Кому\s?:(.+)$", "Apple Mail (ru)"),
    (r"(?m)^\s*Odpovedať-Pre\s?:(.+)$", "Apple Mail (sk)"),
    (r"(?m)^\s*Svara till\s?:(.+)$", "Apple Mail (sv)"),
    (r"(?m)^\s*Yanıt Adresi\s?:(.+)$", "Apple Mail (tr)"),
    (r"(?m)^\s*Кому відповісти\s?:(.+)$", "Apple Mail (uk)"),
];

const CC_LABEL: Entries = &[
    (
        r"(?m)^\*?\s*Cc\s?:\*?(.+)$",
        "Apple Mail, Gmail (all locales), Outlook Live / 365 (all locales), New Outlook 2019, Missive (en), HubSpot",
    ),
    (r"(?m)^\s*CC\s?:(.+)$", "New Outlook 2019 (es, nl, pt), Thunderbird"),
    (r"(?m)^\s*Kopie\s?:(.+)$", "Apple Mail (cs, de, nl), New Outlook 2019 (cs), Thunderbird (cs)"),
    (r"(?m)^\s*Kopio\s?:(.+)$", "Apple Mail (fi), New Outlook 2019 (fi), HubSpot (fi)"),
    (r"(?m)^\s*Másolat\s?:(.+)$", "Apple Mail (hu)"),
    (r"(?m)^\s*Kopi\s?:(.+)$", "Apple Mail (no)"),
    (r"(?m)^\s*Dw\s?:(.+)$", "Apple Mail (pl)"),
    (r"(?m)^\s*Копия\s?:(.+)$", "Apple Mail (ru), New Outlook 2019 (ru), Thunderbird (ru)"),
    (r"(?m)^\s*Kopia\s?:(.+)$", "Apple Mail (sv), New Outlook 2019 (sv), Thunderbird (pl, sv), HubSpot (sv)"),
    (r"(?m)^\s*Bilgi\s?:(.+)$", "Apple Mail (tr)"),
    (r"(?m)^\s*Копія\s?:(.+)$", "Apple Mail (uk)"),
    (r"(?m)^\s*Másolatot kap\s?:(.+)$", "New Outlook 2019 (hu)"),
    (r"(?m)^\s*Kópia\s?:(.+)$", "New Outlook 2019 (sk), Thunderbird (sk)"),
    (r"(?m)^\s*DW\s?:(.+)$", "New Outlook 2019 (pl), HubSpot (pl)"),
    (r"(?m)^\s*Kopie \(CC\)\s?:(.+)$", "Thunderbird (de)"),
    (r"(?m)^\s*Copie à\s?:(.+)$", "Thunderbird (fr)"),
    (r"(?m)^\s*CC：(.+)$", "HubSpot (ja)"),
];

const CC_LABEL_LAX: Entries = &[
    (r"(?m)\s*Cc\s?:(.+)$", "Yahoo Mail (da, en, it, nl, pt, pt-br, ro, tr)"),
    (r"(?m)\s*CC\s?:(.+)$", "Yahoo Mail (de, es)"),
    (r"(?m)\s*Kopie\s?:(.+)$", "Yahoo Mail (cs)"),
    (r"(?m)\s*Kopio\s?:(.+)$", "Yahoo Mail (fi)"),
    (r"(?m)\s*Másolat\s?:(.+)$", "Yahoo Mail (hu)"),
    (r"(?m)\s*Kopi\s?:(.+)$", "Yahoo Mail (no)"),
    (r"(?m)\s*Dw\s?(.+)$", "Yahoo Mail (pl)"),
    (r"(?m)\s*Копия\s?:(.+)$", "Yahoo Mail (ru)"),
    (r"(?m)\s*Kópia\s?:(.+)$", "Yahoo Mail (sk)"),
    (r"(?m)\s*Kopia\s?:(.+)$", "Yahoo Mail (sv)"),
    (r"(?m)\s*Копія\s?:(.+)$", "Yahoo Mail (uk)"),
];

const DATE_LABEL: Entries = &[
    (
        r"(?m)^\s*Date\s?:(.+)$",
        "Apple Mail (en, fr), Gmail (all locales), New Outlook 2019 (en, fr), Thunderbird (da, en, fr), Missive (en), HubSpot (en, fr)",
    ),
    (r"(?m)^\s*Datum\s?:(.+)$", "Apple Mail (cs, de, hr, nl, sv), New Outlook 2019 (cs, de, nl, sv), Thunderbird, HubSpot (de, nl, sv)"),
    (r"(?m)^\s*Dato\s?:(.+)$", "Apple Mail (da, no), New Outlook 2019 (da), Thunderbird (no)"),
    (r"(?m)^\s*Envoyé\s?:(.+)$", "New Outlook 2019 (fr)"),
    (r"(?m)^\s*Fecha\s?:(.+)$", "Apple Mail (es), New Outlook 2019 (es), Thunderbird (es), HubSpot (es)"),
    (r"(?m)^\s*Päivämäärä\s?:(.+)$", "Apple Mail (fi), New Outlook 2019 (fi), HubSpot (fi)"),
    (r"(?m)^\s*Dátum\s?:(.+)$", "Apple Mail (hu, sk), New Outlook 2019 (sk), Thunderbird (hu, sk)"),
    (r"(?m)^\s*Data\s?:(.+)$", "Apple Mail (it, pl, pt, pt-br), New Outlook 2019, Thunderbird, HubSpot (it, pl, pt-br)"),
    (r"(?m)^\s*Dată\s?:(.+)$", "Apple Mail (ro), Thunderbird (ro)"),
    (r"(?m)^\s*Дата\s?:(.+)$", "Apple Mail (ru, uk), New Outlook 2019 (ru), Thunderbird (ru, uk)"),
    (r"(?m)^\s*Tarih\s?:(.+)$", "Apple Mail (tr), Thunderbird (tr)"),
    (r"(?m)^\*?\s*Sent\s?:\*?(.+)$", "Outlook Live / 365 (all locales)"),
    (r"(?m)^\s*Päiväys\s?:(.+)$", "Thunderbird (fi)"),
    (r"(?m)^\s*日付：(.+)$", "HubSpot (ja)"),
];

const DATE_LABEL_LAX: Entries = &[
    (r"(?m)\s*Datum\s?:(.+)$", "Yahoo Mail (cs)"),
    (r"(?m)\s*Sendt\s?:(.+)$", "Yahoo Mail (da, no)"),
    (r"(?m)\s*Gesendet\s?:(.+)$", "Yahoo Mail (de)"),
    (r"(?m)\s*Sent\s?:(.+)$", "Yahoo Mail (en)"),
    (r"(?m)\s*Enviado\s?:(.+)$", "Yahoo Mail (es, pt, pt-br)"),
    (r"(?m)\s*Envoyé\s?:(.+)$", "Yahoo Mail (fr)"),
    (r"(?m)\s*Lähetetty\s?:(.+)$", "Yahoo Mail (fi)"),
    (r"(?m)\s*Elküldve\s?:(.+)$", "Yahoo Mail (hu)"),
    (r"(?m)\s*Inviato\s?:(.+)$", "Yahoo Mail (it)"),
    (r"(?m)\s*Verzonden\s?:(.+)$", "Yahoo Mail (nl)"),
    (r"(?m)\s*Wysłano\s?:(.+)$", "Yahoo Mail (pl)"),
    (r"(?m)\s*Trimis\s?:(.+)$", "Yahoo Mail (ro)"),
    (r"(?m)\s*Отправлено\s?:(.+)$", "Yahoo Mail (ru)"),
    (r"(?m)\s*Odoslané\s?:(.+)$", "Yahoo Mail (sk)"),
    (r"(?m)\s*Skickat\s?:(.+)$", "Yahoo Mail (sv)"),
    (r"(?m)\s*Gönderilen\s?:(.+)$", "Yahoo Mail (tr)"),
    (r"(?m)\s*Відправлено\s?:(.+)$", "Yahoo Mail (uk)"),
];

// Shapes are tried in order and all anchor at the start of the line, so the
// first shape that matches wins. Mailto forms must precede the plain bracket
// forms, and the comma-tolerant name shape must stay last.
const MAILBOX_SHAPE: Entries = &[
    (r"^\s?\n?\s*<.+?<mailto:(.+?)>>", "<a@b.c<mailto:a@b.c>>"),
    (r"^(.+?)\s?\n?\s*<.+?<mailto:(.+?)>>", "Name <a@b.c<mailto:a@b.c>>"),
    (r"^(.+?)\s?\n?\s*[\[|<]mailto:(.+?)[\]|>]", "Name <mailto:a@b.c> or Name [mailto:a@b.c]"),
    (r"^'(.+?)'\s?\n?\s*[\[|<](.+?)[\]|>]", "'Name' <a@b.c>"),
    (r#"^"'(.+?)'"\s?\n?\s*[\[|<](.+?)[\]|>]"#, "\"'Name'\" <a@b.c>"),
    (r#"^"(.+?)"\s?\n?\s*[\[|<](.+?)[\]|>]"#, "\"Name\" <a@b.c>"),
    (r"^([^,;]+?)\s?\n?\s*[\[|<](.+?)[\]|>]", "Name <a@b.c> or Name [a@b.c]"),
    (r"^(.?)\s?\n?\s*[\[|<](.+?)[\]|>]", "<a@b.c>"),
    (r"^([^\s@]+@[^\s@]+\.[^\s@,]+)", "a@b.c"),
    (r"^([^;].+?)\s?\n?\s*[\[|<](.+?)[\]|>]", "Last, First <a@b.c>"),
];

const MAILBOX_ADDRESS: Entries = &[(r"^(([^\s@]+)@([^\s@]+)\.([^\s@]+))$", "local@domain.tld")];

const QUOTE_MARKER: Entries = &[
    (r"(?m)^(>+)\s?$", "Apple Mail, Missive (empty quoted lines)"),
    (r"(?m)^(>+)\s?", "Apple Mail"),
];

const FIXED_INDENT: Entries = &[(r"(?m)^( {4})\s?", "Outlook 2019")];

/// The pattern table shipped with the crate
#[must_use]
pub fn table() -> PatternTable {
    let groups: [(Role, Entries, &[&str]); 18] = [
        (Role::Subject, SUBJECT, &[]),
        (Role::Separator, SEPARATOR, &[]),
        (Role::SeparatorWithMetadata, SEPARATOR_WITH_METADATA, &METADATA_CAPTURES),
        (Role::SubjectLabel, SUBJECT_LABEL, &[]),
        (Role::SubjectLabelLax, SUBJECT_LABEL_LAX, &[]),
        (Role::FromLabel, FROM_LABEL, &[]),
        (Role::FromLabelLax, FROM_LABEL_LAX, &[]),
        (Role::ToLabel, TO_LABEL, &[]),
        (Role::ToLabelLax, TO_LABEL_LAX, &[]),
        (Role::ReplyToLabel, REPLY_TO_LABEL, &[]),
        (Role::CcLabel, CC_LABEL, &[]),
        (Role::CcLabelLax, CC_LABEL_LAX, &[]),
        (Role::DateLabel, DATE_LABEL, &[]),
        (Role::DateLabelLax, DATE_LABEL_LAX, &[]),
        (Role::MailboxShape, MAILBOX_SHAPE, &[]),
        (Role::MailboxAddress, MAILBOX_ADDRESS, &[]),
        (Role::QuoteMarker, QUOTE_MARKER, &[]),
        (Role::FixedIndent, FIXED_INDENT, &[]),
    ];

    let patterns = groups
        .into_iter()
        .flat_map(|(role, entries, captures)| {
            entries.iter().map(move |(pattern, client)| PatternEntry {
                role,
                pattern: (*pattern).to_string(),
                captures: captures.iter().map(ToString::to_string).collect(),
                client: Some((*client).to_string()),
            })
        })
        .collect();

    PatternTable {
        version: TABLE_VERSION,
        patterns,
    }
}
