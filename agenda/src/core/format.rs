//! Line format for persisted contacts: `name;phone;email`.
//!
//! `email` is written as an empty field when absent. Older two-field lines
//! (`name;phone`) are accepted on decode.

use crate::contact::{Contact, FIELD_DELIMITER};
use crate::error::{AgendaError, Result};

/// Serialize one contact as a single line without the trailing newline.
pub fn encode_line(contact: &Contact) -> String {
    let email = contact.email.as_deref().unwrap_or_default();
    format!(
        "{name}{d}{phone}{d}{email}",
        name = contact.name,
        phone = contact.phone,
        d = FIELD_DELIMITER
    )
}

/// Parse one persisted line. `line_no` is 1-indexed and only used for errors.
pub fn decode_line(line_no: usize, line: &str) -> Result<Contact> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let contact = match fields.as_slice() {
        [name, phone] => Contact::new(*name, *phone),
        [name, phone, email] => {
            let mut contact = Contact::new(*name, *phone);
            if !email.is_empty() {
                contact.email = Some((*email).to_string());
            }
            contact
        }
        other => {
            return Err(AgendaError::CorruptData {
                line: line_no,
                reason: format!("expected 2 or 3 fields, found {}", other.len()),
            });
        }
    };
    contact.validate().map_err(|err| AgendaError::CorruptData {
        line: line_no,
        reason: err.to_string(),
    })?;
    Ok(contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_writes_empty_email_field() {
        assert_eq!(encode_line(&Contact::new("Ana", "111")), "Ana;111;");
        assert_eq!(
            encode_line(&Contact::new("Ana", "111").with_email("a@x.io")),
            "Ana;111;a@x.io"
        );
    }

    #[test]
    fn decode_accepts_two_and_three_fields() {
        assert_eq!(decode_line(1, "Ana;111").expect("two"), Contact::new("Ana", "111"));
        assert_eq!(decode_line(1, "Ana;111;").expect("empty email"), Contact::new("Ana", "111"));
        assert_eq!(
            decode_line(1, "Ana;111;a@x.io").expect("three"),
            Contact::new("Ana", "111").with_email("a@x.io")
        );
    }

    #[test]
    fn decode_reports_line_number_on_corruption() {
        let err = decode_line(7, "just-a-name").unwrap_err();
        assert!(matches!(err, AgendaError::CorruptData { line: 7, .. }));

        let err = decode_line(3, ";111;").unwrap_err();
        assert!(matches!(err, AgendaError::CorruptData { line: 3, reason } if reason.contains("name")));

        let err = decode_line(2, "Ana;111;a@x.io;extra").unwrap_err();
        assert!(matches!(err, AgendaError::CorruptData { line: 2, .. }));
    }

    #[test]
    fn decoded_line_matches_encoded_contact() {
        let contact = Contact::new("Ana Maria", "+55 11 5555").with_email("ana@x.io");
        let decoded = decode_line(1, &encode_line(&contact)).expect("decode");
        assert_eq!(decoded, contact);
    }
}
