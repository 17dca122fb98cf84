use crate::ProfileUpdate;

use chrono::{TimeZone, Utc};

#[test]
fn given_name_only_update_when_encoded_then_only_name_and_updated_at() {
    let update = ProfileUpdate {
        name: Some("X".into()),
        ..Default::default()
    };
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let document = update.to_document(now).unwrap();

    let mut keys: Vec<&str> = document.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["name", "updatedAt"]);
}
