//! Conversion between the stored contact shape and the transfer shapes.
//!
//! Every function here is pure: no validation, no I/O. Contacts built from
//! uploads carry no IDs or timestamps; the store assigns those on commit.

use crate::codec::CsvContactRow;
use crate::domain::UserId;
use crate::models::{
    Contact, ContactEmail, ContactPhone, ContactRequest, ContactResponse, EmailResponse,
    PhoneResponse,
};

/// Map a stored contact to the shape returned to callers.
pub fn to_response(contact: &Contact) -> ContactResponse {
    ContactResponse {
        id: contact.id,
        first_name: contact.first_name.clone(),
        last_name: contact.last_name.clone(),
        title: contact.title.clone(),
        emails: contact
            .emails
            .iter()
            .map(|e| EmailResponse {
                id: e.id,
                email: e.email.clone(),
                email_type: e.email_type,
            })
            .collect(),
        phones: contact
            .phones
            .iter()
            .map(|p| PhoneResponse {
                id: p.id,
                phone_number: p.phone_number.clone(),
                phone_type: p.phone_type,
            })
            .collect(),
        user_id: contact.owner,
        created_at: contact.created_at,
        updated_at: contact.updated_at,
    }
}

/// Build an unpersisted contact owned by `owner` from a creation payload.
pub fn from_request(owner: UserId, request: ContactRequest) -> Contact {
    let emails = request
        .emails
        .unwrap_or_default()
        .into_iter()
        .map(|e| ContactEmail::new(e.email, e.email_type))
        .collect();

    let phones = request
        .phones
        .unwrap_or_default()
        .into_iter()
        .map(|p| ContactPhone::new(p.phone_number, p.phone_type))
        .collect();

    Contact {
        title: request.title,
        emails,
        phones,
        ..Contact::new(owner, request.first_name, request.last_name)
    }
}

/// Build an unpersisted contact owned by `owner` from a decoded CSV row.
pub fn from_csv_row(owner: UserId, row: CsvContactRow) -> Contact {
    Contact {
        title: row.title,
        emails: row
            .emails
            .into_iter()
            .map(|(email, kind)| ContactEmail::new(email, kind))
            .collect(),
        phones: row
            .phones
            .into_iter()
            .map(|(phone, kind)| ContactPhone::new(phone, kind))
            .collect(),
        ..Contact::new(owner, row.first_name, row.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactId, EmailType, PhoneType};
    use crate::models::{EmailRequest, PhoneRequest};
    use chrono::Utc;

    fn owner() -> UserId {
        UserId::new(3).unwrap()
    }

    #[test]
    fn test_to_response_copies_everything() {
        let now = Utc::now();
        let mut contact = Contact::new(owner(), "Ada", "Lovelace")
            .with_email("ada@work.example", EmailType::Work)
            .with_phone("555-0100", PhoneType::Home);
        contact.id = Some(ContactId::new(9).unwrap());
        contact.emails[0].id = Some(21);
        contact.phones[0].id = Some(22);
        contact.created_at = Some(now);
        contact.updated_at = Some(now);

        let response = to_response(&contact);
        assert_eq!(response.id, contact.id);
        assert_eq!(response.user_id, owner());
        assert_eq!(response.emails[0].id, Some(21));
        assert_eq!(response.emails[0].email_type, EmailType::Work);
        assert_eq!(response.phones[0].phone_number, "555-0100");
        assert_eq!(response.created_at, Some(now));
    }

    #[test]
    fn test_from_request_preserves_order_and_leaves_ids_unset() {
        let request = ContactRequest {
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            title: Some("Mathematician".to_string()),
            emails: Some(vec![
                EmailRequest {
                    email: "first@example.com".to_string(),
                    email_type: EmailType::Work,
                },
                EmailRequest {
                    email: "second@example.com".to_string(),
                    email_type: EmailType::Other,
                },
            ]),
            phones: Some(vec![PhoneRequest {
                phone_number: "555-0101".to_string(),
                phone_type: PhoneType::Personal,
            }]),
        };

        let contact = from_request(owner(), request);
        assert!(contact.id.is_none());
        assert!(contact.created_at.is_none());
        assert_eq!(contact.owner, owner());
        assert_eq!(contact.emails[0].email, "first@example.com");
        assert_eq!(contact.emails[1].email, "second@example.com");
        assert!(contact.emails.iter().all(|e| e.id.is_none()));
        assert_eq!(contact.phones.len(), 1);
    }

    #[test]
    fn test_from_request_without_lists() {
        let request = ContactRequest {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            title: None,
            emails: None,
            phones: None,
        };
        let contact = from_request(owner(), request);
        assert!(contact.emails.is_empty());
        assert!(contact.phones.is_empty());
    }

    #[test]
    fn test_from_csv_row() {
        let row = CsvContactRow {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            title: None,
            emails: vec![("grace@navy.example".to_string(), EmailType::Work)],
            phones: Vec::new(),
        };
        let contact = from_csv_row(owner(), row);
        assert_eq!(contact.full_name(), "Grace Hopper");
        assert_eq!(contact.emails[0].email_type, EmailType::Work);
        assert!(contact.title.is_none());
    }
}
