use crate::{ProjectForm, Role, UserProfile};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_unset_optional_fields_when_serialized_then_explicit_null() {
    let form = ProjectForm {
        title: "Portfolio Site".to_string(),
        description: "Personal site".to_string(),
        tech_stack: vec!["TS".to_string(), "React".to_string()],
        project_link: None,
        github_repo: None,
        start_date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        end_date: None,
    };

    let value = serde_json::to_value(&form).unwrap();

    // The document store rejects absent fields on the read path; unset
    // options must serialize as explicit nulls.
    assert_that!(value["projectLink"], eq(&serde_json::Value::Null));
    assert_that!(value["endDate"], eq(&serde_json::Value::Null));
    assert_that!(value.get("projectLink").is_some(), eq(true));
}

#[test]
fn given_date_fields_when_serialized_then_unix_seconds() {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let form = ProjectForm {
        title: "x".to_string(),
        description: "y".to_string(),
        tech_stack: vec![],
        project_link: None,
        github_repo: None,
        start_date: start,
        end_date: Some(start),
    };

    let value = serde_json::to_value(&form).unwrap();

    assert_that!(value["startDate"].as_i64().unwrap(), eq(start.timestamp()));
    assert_that!(value["endDate"].as_i64().unwrap(), eq(start.timestamp()));

    let back: ProjectForm = serde_json::from_value(value).unwrap();
    assert_that!(back.start_date, eq(start));
}

#[test]
fn given_user_profile_when_serialized_then_camel_case_wire_names() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let profile = UserProfile::new(
        Uuid::new_v4(),
        Some("EXT-1".to_string()),
        Some("asha@x.edu".to_string()),
        Some("Asha Rao".to_string()),
        now,
    );

    let value = serde_json::to_value(&profile).unwrap();

    assert_that!(value["externalSubjectId"].as_str().unwrap(), eq("EXT-1"));
    assert_that!(value["role"].as_str().unwrap(), eq("student"));
    assert_that!(value["createdAt"].as_i64().unwrap(), eq(now.timestamp()));
    assert_that!(value["lastLoginAt"].as_i64().unwrap(), eq(now.timestamp()));
}

#[test]
fn given_profile_document_without_role_when_deserialized_then_student() {
    let doc = serde_json::json!({
        "uid": Uuid::new_v4(),
        "externalSubjectId": null,
        "email": null,
        "name": null,
        "createdAt": 1_700_000_000,
        "lastLoginAt": 1_700_000_000,
    });

    let profile: UserProfile = serde_json::from_value(doc).unwrap();
    assert_that!(profile.role, eq(Role::Student));
}
