use jiff::Timestamp;
use serde_json::json;
use tables::{
    Identity, Role, Session, UserId,
    changes::{NewsChanges, RoleUpsert},
    rows::{NewsItem, Product, UserRole},
};

#[test]
fn role_ranks_are_totally_ordered() {
    assert!(Role::User < Role::Editor);
    assert!(Role::Editor < Role::Admin);
    assert_eq!(Role::ALL.iter().max(), Some(&Role::Admin));
}

#[test]
fn meets_compares_against_the_required_rank() {
    assert!(Role::Admin.meets(Role::Editor));
    assert!(Role::Editor.meets(Role::Editor));
    assert!(!Role::User.meets(Role::Editor));
}

#[test]
fn role_labels_roundtrip() {
    for role in Role::ALL {
        assert_eq!(role.to_string().parse::<Role>().ok(), Some(role));
    }
}

#[test]
fn unknown_role_label_is_rejected() {
    assert!("owner".parse::<Role>().is_err());
    assert!("Admin".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}

#[test]
fn role_serializes_as_lowercase_label() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("admin"));
    let role: Role = serde_json::from_value(json!("editor")).unwrap();
    assert_eq!(role, Role::Editor);
}

#[test]
fn news_row_from_service_json() {
    let row: NewsItem = serde_json::from_value(json!({
        "id": "7b9f2f9e-8a43-4a1d-9a6e-02f4a1c3bb10",
        "title": "New crusher line announced",
        "summary": "A short teaser.",
        "body": "Full announcement text.",
        "published": true,
        "published_at": "2024-05-14T09:30:00Z",
        "created_at": "2024-05-01T08:00:00Z",
    }))
    .unwrap();

    assert_eq!(row.title, "New crusher line announced");
    assert!(row.published);
    assert_eq!(
        row.published_at,
        Some("2024-05-14T09:30:00Z".parse::<Timestamp>().unwrap())
    );
}

#[test]
fn draft_news_has_no_publication_timestamp() {
    let row: NewsItem = serde_json::from_value(json!({
        "id": "7b9f2f9e-8a43-4a1d-9a6e-02f4a1c3bb10",
        "title": "Draft",
        "summary": "",
        "body": "",
        "published": false,
        "published_at": null,
        "created_at": "2024-05-01T08:00:00Z",
    }))
    .unwrap();

    assert_eq!(row.published_at, None);
}

#[test]
fn unknown_columns_are_ignored() {
    // The service may grow columns we do not model yet.
    let row: Product = serde_json::from_value(json!({
        "id": "3f6b7a52-1f12-4c6f-8d25-6a4a9c0e77d4",
        "name": "CR-200",
        "category": "crushers",
        "summary": "Compact jaw crusher.",
        "description": "Long form copy.",
        "created_at": "2024-03-02T12:00:00Z",
        "legacy_sku": "discontinued",
    }))
    .unwrap();

    assert_eq!(row.name, "CR-200");
}

#[test]
fn identity_uses_service_field_names() {
    let identity: Identity = serde_json::from_value(json!({
        "id": "b3b8a7a0-5b3c-47f8-9a3e-2f1d7c9e4a11",
        "email": "ops@example.com",
    }))
    .unwrap();

    assert_eq!(identity.email, "ops@example.com");
}

#[test]
fn session_nests_identity_under_user() {
    let session: Session = serde_json::from_value(json!({
        "access_token": "jwt-goes-here",
        "user": {
            "id": "b3b8a7a0-5b3c-47f8-9a3e-2f1d7c9e4a11",
            "email": "ops@example.com",
        },
    }))
    .unwrap();

    assert_eq!(session.access_token, "jwt-goes-here");
    assert_eq!(session.identity.email, "ops@example.com");
}

#[test]
fn role_rows_roundtrip() {
    let user_id: UserId =
        "b3b8a7a0-5b3c-47f8-9a3e-2f1d7c9e4a11".parse().unwrap();
    let upsert = RoleUpsert {
        user_id,
        role: Role::Admin,
    };
    assert_eq!(
        serde_json::to_value(&upsert).unwrap(),
        json!({
            "user_id": "b3b8a7a0-5b3c-47f8-9a3e-2f1d7c9e4a11",
            "role": "admin",
        })
    );

    let row: UserRole = serde_json::from_value(json!({
        "user_id": "b3b8a7a0-5b3c-47f8-9a3e-2f1d7c9e4a11",
        "role": "editor",
        "updated_at": "2024-06-01T10:00:00Z",
    }))
    .unwrap();
    assert_eq!(row.role, Role::Editor);
}

#[test]
fn unpublishing_clears_the_timestamp_in_the_payload() {
    let changes = NewsChanges {
        title: "Draft".to_string(),
        summary: String::new(),
        body: String::new(),
        published: false,
        published_at: None,
    };
    let value = serde_json::to_value(&changes).unwrap();
    assert_eq!(value["published"], json!(false));
    assert_eq!(value["published_at"], json!(null));
}
