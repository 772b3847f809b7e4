use circle_contacts::codec::csv_format;
use circle_contacts::domain::{EmailType, PhoneType, UserId};
use circle_contacts::error::TransferError;
use circle_contacts::models::{ContactResponse, User};
use circle_contacts::repositories::{
    ContactRepository, ContactStore, StoreContactRepository, StoreUserRepository, UserRepository,
};
use circle_contacts::services::{
    ContactExportService, ContactExportServiceImpl, ContactImportService,
    ContactImportServiceImpl, TransferFormat,
};
use circle_contacts::TransferMetrics;
use std::sync::Arc;

struct Harness {
    store: Arc<ContactStore>,
    export: ContactExportServiceImpl,
    import: ContactImportServiceImpl,
    metrics: TransferMetrics,
}

impl Harness {
    fn new(store: ContactStore) -> Self {
        let store = Arc::new(store);
        let contacts =
            Arc::new(StoreContactRepository::new(store.clone())) as Arc<dyn ContactRepository>;
        let users = Arc::new(StoreUserRepository::new(store.clone())) as Arc<dyn UserRepository>;
        let metrics = TransferMetrics::new();

        Self {
            export: ContactExportServiceImpl::new(contacts.clone(), metrics.clone()),
            import: ContactImportServiceImpl::new(contacts, users, metrics.clone()),
            store,
            metrics,
        }
    }

    fn with_users(ids: &[u64]) -> Self {
        let store = ContactStore::new();
        for &id in ids {
            store
                .save_user(User::new(UserId::new(id).unwrap(), format!("user{}", id)))
                .unwrap();
        }
        Self::new(store)
    }
}

fn uid(id: u64) -> UserId {
    UserId::new(id).unwrap()
}

/// Compare the parts of a contact that survive a transfer.
fn essentials(c: &ContactResponse) -> (String, String, Option<String>, Vec<String>, Vec<String>) {
    (
        c.first_name.clone(),
        c.last_name.clone(),
        c.title.clone(),
        c.emails
            .iter()
            .map(|e| format!("{} {}", e.email, e.email_type))
            .collect(),
        c.phones
            .iter()
            .map(|p| format!("{} {}", p.phone_number, p.phone_type))
            .collect(),
    )
}

const SEED: &str = r#"[
    {"firstName":"Ada","lastName":"Lovelace","title":"Analyst",
     "emails":[{"email":"ada@work.example","type":"WORK"},{"email":"ada@home.example","type":"PERSONAL"}],
     "phones":[{"phoneNumber":"+44 20 7946 0000","type":"HOME"}]},
    {"firstName":"Grace","lastName":"Hopper",
     "phones":[{"phoneNumber":"555-0100","type":"WORK"},{"phoneNumber":"555-0199","type":"OTHER"}]}
]"#;

#[tokio::test]
async fn test_csv_round_trip_between_users() {
    let h = Harness::with_users(&[1, 2]);
    let seeded = h.import.import_from_json(uid(1), SEED.as_bytes()).await.unwrap();

    let csv = h.export.export_as_csv(uid(1)).await.unwrap();
    let copied = h.import.import_from_csv(uid(2), &csv).await.unwrap();

    assert_eq!(copied.len(), 2);
    for (original, copy) in seeded.iter().zip(&copied) {
        assert_eq!(essentials(original), essentials(copy));
        assert_eq!(copy.user_id, uid(2));
        assert_ne!(copy.id, original.id);
    }
    assert!(copied[1].emails.is_empty());
    assert_eq!(h.store.contact_count().unwrap(), 4);
    assert_eq!(h.metrics.degraded_cells_total(), 0);
}

#[tokio::test]
async fn test_json_round_trip_between_users() {
    let h = Harness::with_users(&[1, 2]);
    h.import.import_from_json(uid(1), SEED.as_bytes()).await.unwrap();

    let json = h.export.export_as_json(uid(1)).await.unwrap();
    let copied = h.import.import_from_json(uid(2), &json).await.unwrap();

    let originals = h.export.export_as_json(uid(1)).await.unwrap();
    let originals: Vec<ContactResponse> = serde_json::from_slice(&originals).unwrap();

    assert_eq!(copied.len(), originals.len());
    for (original, copy) in originals.iter().zip(&copied) {
        assert_eq!(essentials(original), essentials(copy));
        assert_eq!(copy.user_id, uid(2));
    }
}

#[tokio::test]
async fn test_csv_headers_are_case_insensitive_and_extra_columns_ignored() {
    let h = Harness::with_users(&[1]);
    let csv = "first name,LAST NAME,Nickname,emails\n\
               Ada,Lovelace,Countess,ada@x.example (OTHER)\n";

    let imported = h.import.import_from_csv(uid(1), csv.as_bytes()).await.unwrap();

    assert_eq!(imported[0].first_name, "Ada");
    assert_eq!(imported[0].last_name, "Lovelace");
    assert!(imported[0].title.is_none());
    assert_eq!(imported[0].emails[0].email_type, EmailType::Other);
    assert!(imported[0].phones.is_empty());
}

#[tokio::test]
async fn test_csv_odd_cells_degrade_without_failing() {
    let h = Harness::with_users(&[1]);
    let csv = "First Name,Last Name,Title,Emails,Phones\n\
               Ada,Lovelace,,ada@x.example (FAX); bare@x.example; (WORK),555 (MOBILE); 556 (HOME)\n";

    let imported = h.import.import_from_csv(uid(1), csv.as_bytes()).await.unwrap();
    let ada = &imported[0];

    let emails: Vec<(&str, EmailType)> = ada
        .emails
        .iter()
        .map(|e| (e.email.as_str(), e.email_type))
        .collect();
    assert_eq!(emails, vec![("ada@x.example", EmailType::Personal)]);

    let phones: Vec<(&str, PhoneType)> = ada
        .phones
        .iter()
        .map(|p| (p.phone_number.as_str(), p.phone_type))
        .collect();
    assert_eq!(
        phones,
        vec![("555", PhoneType::Personal), ("556", PhoneType::Home)]
    );

    assert_eq!(h.metrics.degraded_cells_total(), 2);
    assert_eq!(h.metrics.dropped_segments_total(), 2);
}

#[tokio::test]
async fn test_import_for_unknown_user() {
    let h = Harness::with_users(&[1]);
    let err = h
        .import
        .import(uid(5), TransferFormat::Json, SEED.as_bytes())
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::NotFound(_)));
    assert!(err.is_client_error());
    assert_eq!(h.store.contact_count().unwrap(), 0);
}

#[tokio::test]
async fn test_empty_upload_is_rejected() {
    let h = Harness::with_users(&[1]);
    for format in [TransferFormat::Json, TransferFormat::Csv] {
        let err = h.import.import(uid(1), format, b"").await.unwrap_err();
        assert_eq!(err.to_string(), "Bad request: File is empty");
    }
}

#[tokio::test]
async fn test_header_only_csv_imports_nothing() {
    let h = Harness::with_users(&[1]);
    let header = csv_format::HEADERS.join(",");

    let imported = h
        .import
        .import(uid(1), TransferFormat::Csv, header.as_bytes())
        .await
        .unwrap();

    assert!(imported.is_empty());
}

#[tokio::test]
async fn test_export_of_empty_address_book() {
    let h = Harness::with_users(&[1]);

    let json = h.export.export(uid(1), TransferFormat::Json).await.unwrap();
    assert_eq!(json.bytes, b"[]");
    assert_eq!(json.content_type(), "application/json");

    let csv = h.export.export(uid(1), TransferFormat::Csv).await.unwrap();
    assert_eq!(csv.bytes, b"First Name,Last Name,Title,Emails,Phones\n");
}

#[tokio::test]
async fn test_committed_import_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let store = ContactStore::open(&path).unwrap();
        store.save_user(User::new(uid(1), "ada")).unwrap();
        let h = Harness::new(store);
        h.import.import_from_json(uid(1), SEED.as_bytes()).await.unwrap();
    }

    let h = Harness::new(ContactStore::open(&path).unwrap());
    let csv = h.export.export_as_csv(uid(1)).await.unwrap();
    let text = String::from_utf8(csv).unwrap();

    assert!(text.contains("Ada,Lovelace,Analyst,ada@work.example (WORK); ada@home.example (PERSONAL),+44 20 7946 0000 (HOME)"));
    assert!(text.contains("Grace,Hopper,,,555-0100 (WORK); 555-0199 (OTHER)"));
}
