use chrono::NaiveDate;
use lifequest_core::{
    InMemoryTaskRepository, RepoError, Task, TaskListQuery, TaskRepository, TaskValidationError,
};
use uuid::Uuid;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
}

#[test]
fn list_preserves_creation_order() {
    let mut repo = InMemoryTaskRepository::new();
    let first = Task::new("first", 10).unwrap();
    let second = Task::new("second", 20).unwrap();
    let third = Task::new("third", 30).unwrap();
    repo.create_task(first.clone()).unwrap();
    repo.create_task(second.clone()).unwrap();
    repo.create_task(third.clone()).unwrap();

    let ids: Vec<_> = repo
        .list_tasks(&TaskListQuery::default())
        .unwrap()
        .into_iter()
        .map(|task| task.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[test]
fn create_rejects_duplicate_id() {
    let mut repo = InMemoryTaskRepository::new();
    let task = Task::new("once", 10).unwrap();
    repo.create_task(task.clone()).unwrap();

    let err = repo.create_task(task.clone()).unwrap_err();
    assert_eq!(err, RepoError::DuplicateId(task.id));
}

#[test]
fn create_revalidates_records() {
    let mut repo = InMemoryTaskRepository::new();
    let mut task = Task::new("valid", 10).unwrap();
    task.xp = 0;

    let err = repo.create_task(task).unwrap_err();
    assert_eq!(err, RepoError::Validation(TaskValidationError::NonPositiveXp));
}

#[test]
fn complete_once_per_date() {
    let mut repo = InMemoryTaskRepository::new();
    let id = repo.create_task(Task::new("walk", 25).unwrap()).unwrap();

    let first = repo.complete_task(id, day(1)).unwrap();
    assert!(!first.already_completed_today);
    assert_eq!(first.xp_awarded, 25);

    let again = repo.complete_task(id, day(1)).unwrap();
    assert!(again.already_completed_today);
    assert_eq!(again.xp_awarded, 0);

    let next_day = repo.complete_task(id, day(2)).unwrap();
    assert!(!next_day.already_completed_today);

    let stored = repo.get_task(id, false).unwrap().unwrap();
    assert_eq!(stored.completed_dates.len(), 2);
    assert!(stored.is_completed_on(day(1)));
    assert!(stored.is_completed_on(day(2)));
}

#[test]
fn complete_unknown_returns_not_found() {
    let mut repo = InMemoryTaskRepository::new();
    let missing = Uuid::new_v4();
    let err = repo.complete_task(missing, day(1)).unwrap_err();
    assert_eq!(err, RepoError::NotFound(missing));
}

#[test]
fn deleted_tasks_are_hidden_and_not_completable() {
    let mut repo = InMemoryTaskRepository::new();
    let kept = repo.create_task(Task::new("kept", 10).unwrap()).unwrap();
    let dropped = repo.create_task(Task::new("dropped", 10).unwrap()).unwrap();
    repo.soft_delete_task(dropped).unwrap();

    let visible = repo.list_tasks(&TaskListQuery::default()).unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, kept);

    let all = repo
        .list_tasks(&TaskListQuery {
            include_deleted: true,
        })
        .unwrap();
    assert_eq!(all.len(), 2);

    assert!(repo.get_task(dropped, false).unwrap().is_none());
    assert!(repo.get_task(dropped, true).unwrap().unwrap().is_deleted);
    assert_eq!(
        repo.complete_task(dropped, day(1)).unwrap_err(),
        RepoError::NotFound(dropped)
    );
}

#[test]
fn soft_delete_is_idempotent_and_unknown_is_not_found() {
    let mut repo = InMemoryTaskRepository::new();
    let id = repo.create_task(Task::new("twice", 10).unwrap()).unwrap();
    repo.soft_delete_task(id).unwrap();
    repo.soft_delete_task(id).unwrap();

    let missing = Uuid::new_v4();
    assert_eq!(
        repo.soft_delete_task(missing).unwrap_err(),
        RepoError::NotFound(missing)
    );
}
