//! In-memory integration tests for the task repository contract.

use chrono::{DateTime, Local, Utc};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, TaskChanges, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn draft(title: &str, status: TaskStatus) -> NewTask {
    NewTask::new(
        TaskTitle::new(title).expect("valid title"),
        None,
        Some(status),
        &DefaultClock,
    )
}

/// Clock pinned to a single instant.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn draft_at(title: &str, created_at: &str) -> NewTask {
    let instant = created_at
        .parse::<DateTime<Utc>>()
        .expect("valid RFC 3339 timestamp");
    NewTask::new(
        TaskTitle::new(title).expect("valid title"),
        None,
        None,
        &FixedClock(instant),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_increase_and_are_never_reused(repository: InMemoryTaskRepository) {
    let first = repository
        .insert(&draft("first", TaskStatus::Pending))
        .await
        .expect("insert should succeed");
    repository
        .delete_by_id(first.id())
        .await
        .expect("delete should succeed");
    let second = repository
        .insert(&draft("second", TaskStatus::Pending))
        .await
        .expect("insert should succeed");

    assert_eq!(first.id(), TaskId::new(1));
    assert_eq!(second.id(), TaskId::new(2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_stored_task(repository: InMemoryTaskRepository) {
    let mut task = repository
        .insert(&draft("Buy milk", TaskStatus::Pending))
        .await
        .expect("insert should succeed");
    task.apply_changes(
        TaskChanges {
            title: Some(TaskTitle::new("Buy oat milk").expect("valid title")),
            ..TaskChanges::default()
        },
        &DefaultClock,
    );

    repository
        .update(&task)
        .await
        .expect("update should succeed");

    let stored = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(stored.title().as_str(), "Buy oat milk");
    assert_eq!(stored.updated_at(), task.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_of_unknown_ids_are_not_found(repository: InMemoryTaskRepository) {
    let orphan = draft("orphan", TaskStatus::Pending).into_task(TaskId::new(404));

    let update = repository.update(&orphan).await;
    let delete = repository.delete_by_id(TaskId::new(404)).await;

    assert!(matches!(update, Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(404)));
    assert!(matches!(delete, Err(TaskRepositoryError::NotFound(_))));
    assert!(
        !repository
            .exists_by_id(TaskId::new(404))
            .await
            .expect("exists check should succeed")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn queries_cover_status_title_and_counts(repository: InMemoryTaskRepository) {
    for (title, status) in [
        ("Buy MILK", TaskStatus::Pending),
        ("Walk dog", TaskStatus::Done),
        ("milkshake", TaskStatus::InProgress),
        ("Read book", TaskStatus::Done),
    ] {
        repository
            .insert(&draft(title, status))
            .await
            .expect("insert should succeed");
    }

    let done = repository
        .find_by_status(TaskStatus::Done)
        .await
        .expect("status query should succeed");
    let done_titles: Vec<&str> = done.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(done_titles, ["Walk dog", "Read book"]);

    let milk = repository
        .find_by_title_containing("mIlK")
        .await
        .expect("title query should succeed");
    assert_eq!(milk.len(), 2);

    let none = repository
        .find_by_title_containing("groceries")
        .await
        .expect("title query should succeed");
    assert!(none.is_empty());

    for (status, expected) in [
        (TaskStatus::Pending, 1),
        (TaskStatus::InProgress, 1),
        (TaskStatus::Done, 2),
    ] {
        let count = repository
            .count_by_status(status)
            .await
            .expect("count should succeed");
        assert_eq!(count, expected, "count for {status}");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_repository_lists_nothing(repository: InMemoryTaskRepository) {
    let all = repository
        .list_all_newest_first()
        .await
        .expect("listing should succeed");
    let count = repository
        .count_by_status(TaskStatus::Pending)
        .await
        .expect("count should succeed");

    assert!(all.is_empty());
    assert_eq!(count, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_follows_creation_time_not_insertion_order(repository: InMemoryTaskRepository) {
    for (title, created_at) in [
        ("middle", "2024-06-01T00:00:00Z"),
        ("newest", "2025-01-02T00:00:00Z"),
        ("oldest", "2023-03-04T00:00:00Z"),
    ] {
        repository
            .insert(&draft_at(title, created_at))
            .await
            .expect("insert should succeed");
    }

    let listed = repository
        .list_all_newest_first()
        .await
        .expect("listing should succeed");
    let titles: Vec<&str> = listed.iter().map(|task| task.title().as_str()).collect();

    assert_eq!(titles, ["newest", "middle", "oldest"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_breaks_creation_time_ties_by_descending_id(repository: InMemoryTaskRepository) {
    for (title, created_at) in [
        ("first", "2025-01-02T00:00:00Z"),
        ("second", "2024-01-01T00:00:00Z"),
        ("third", "2024-01-01T00:00:00Z"),
    ] {
        repository
            .insert(&draft_at(title, created_at))
            .await
            .expect("insert should succeed");
    }

    let listed = repository
        .list_all_newest_first()
        .await
        .expect("listing should succeed");
    let ids: Vec<TaskId> = listed.iter().map(|task| task.id()).collect();

    assert_eq!(ids, [TaskId::new(1), TaskId::new(3), TaskId::new(2)]);
}
