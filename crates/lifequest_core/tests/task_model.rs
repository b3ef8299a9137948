use chrono::{NaiveDate, TimeZone, Utc};
use lifequest_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults_and_trims_title() {
    let task = Task::new("  Study Rust  ", 50).unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "Study Rust");
    assert_eq!(task.xp, 50);
    assert!(task.completed_dates.is_empty());
    assert!(task.is_active());
}

#[test]
fn task_new_rejects_blank_title_and_zero_xp() {
    assert_eq!(Task::new("", 10).unwrap_err(), TaskValidationError::EmptyTitle);
    assert_eq!(
        Task::new(" \t ", 10).unwrap_err(),
        TaskValidationError::EmptyTitle
    );
    assert_eq!(
        Task::new("chores", 0).unwrap_err(),
        TaskValidationError::NonPositiveXp
    );
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "invalid", 10, Utc::now()).unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn mark_completed_records_each_date_once() {
    let mut task = Task::new("yoga", 40).unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();

    assert!(task.mark_completed(date));
    assert!(!task.mark_completed(date));
    assert_eq!(task.completed_dates.len(), 1);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let created = Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap();
    let mut task = Task::with_id(id, "Read a chapter", 30, created).unwrap();
    task.mark_completed(NaiveDate::from_ymd_opt(2026, 2, 13).unwrap());

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Read a chapter");
    assert_eq!(json["xp"], 30);
    assert_eq!(json["completed_dates"], serde_json::json!(["2026-02-13"]));
    assert_eq!(json["is_deleted"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_invalid_task() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "   ",
        "xp": 10,
        "created": "2026-02-13T10:00:00Z",
        "completed_dates": [],
        "is_deleted": false
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("task title cannot be empty"),
        "unexpected error: {err}"
    );
}
