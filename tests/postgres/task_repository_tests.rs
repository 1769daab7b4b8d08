//! `PostgreSQL` integration tests for task persistence.

use chrono::{DateTime, Local, Utc};
use mockable::{Clock, DefaultClock};
use rstest::rstest;
use taskdesk::task::{
    adapters::postgres::apply_schema,
    domain::{NewTask, TaskChanges, TaskDescription, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, TaskService, UpdateTaskRequest},
};
use std::sync::Arc;

use crate::postgres::helpers::{BoxError, PreparedRepo, prepared_repo};

fn new_task(title: &str, status: TaskStatus) -> NewTask {
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
#[ignore = "starts an embedded PostgreSQL server"]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_ids_and_round_trips_fields(
    #[future] prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let ctx = prepared_repo.await?;
    let description = TaskDescription::new("two litres").expect("valid description");
    let draft = NewTask::new(
        TaskTitle::new("Buy milk").expect("valid title"),
        Some(description),
        None,
        &DefaultClock,
    );

    let first = ctx.repo.insert(&draft).await?;
    let second = ctx.repo.insert(&new_task("Walk dog", TaskStatus::Done)).await?;

    assert!(second.id() > first.id());
    assert_eq!(first.status(), TaskStatus::Pending);
    assert!(first.updated_at().is_none());

    let fetched = ctx
        .repo
        .find_by_id(first.id())
        .await?
        .expect("inserted task should be found");
    assert_eq!(fetched.title().as_str(), "Buy milk");
    assert_eq!(
        fetched.description().map(TaskDescription::as_str),
        Some("two litres")
    );
    assert_eq!(
        fetched.created_at().timestamp_micros(),
        draft.created_at().timestamp_micros()
    );
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_changes_and_reports_missing_rows(
    #[future] prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let ctx = prepared_repo.await?;
    let mut task = ctx
        .repo
        .insert(&new_task("Draft report", TaskStatus::Pending))
        .await?;

    task.apply_changes(
        TaskChanges {
            status: Some(TaskStatus::InProgress),
            ..TaskChanges::default()
        },
        &DefaultClock,
    );
    let updated = ctx.repo.update(&task).await?;
    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert!(updated.updated_at().is_some());

    ctx.repo.delete_by_id(task.id()).await?;
    let result = ctx.repo.update(&task).await;
    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
#[tokio::test(flavor = "multi_thread")]
async fn title_search_is_case_insensitive_and_literal(
    #[future] prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let ctx = prepared_repo.await?;
    for title in ["Buy MILK", "milkshake", "Walk dog", "100% done", "1000 done"] {
        ctx.repo.insert(&new_task(title, TaskStatus::Pending)).await?;
    }

    let milk = ctx.repo.find_by_title_containing("Milk").await?;
    let milk_titles: Vec<&str> = milk.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(milk_titles, ["Buy MILK", "milkshake"]);

    let percent = ctx.repo.find_by_title_containing("0%").await?;
    let percent_titles: Vec<&str> = percent.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(percent_titles, ["100% done"]);
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
#[tokio::test(flavor = "multi_thread")]
async fn listing_filtering_and_counting_agree(
    #[future] prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let ctx = prepared_repo.await?;
    let statuses = [
        TaskStatus::Pending,
        TaskStatus::Done,
        TaskStatus::InProgress,
        TaskStatus::Done,
    ];
    for (index, status) in statuses.into_iter().enumerate() {
        ctx.repo
            .insert(&new_task(&format!("task {index}"), status))
            .await?;
    }

    let titles: Vec<String> = ctx
        .repo
        .list_all_newest_first()
        .await?
        .into_iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    assert_eq!(titles, ["task 3", "task 2", "task 1", "task 0"]);

    let done = ctx.repo.find_by_status(TaskStatus::Done).await?;
    assert!(done.iter().all(|task| task.status() == TaskStatus::Done));
    assert_eq!(ctx.repo.count_by_status(TaskStatus::Done).await?, 2);
    assert_eq!(ctx.repo.count_by_status(TaskStatus::InProgress).await?, 1);
    assert_eq!(ctx.repo.count_by_status(TaskStatus::Pending).await?, 1);
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
#[tokio::test(flavor = "multi_thread")]
async fn delete_and_exists_track_rows(
    #[future] prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let ctx = prepared_repo.await?;
    let task = ctx
        .repo
        .insert(&new_task("Temporary", TaskStatus::Pending))
        .await?;

    assert!(ctx.repo.exists_by_id(task.id()).await?);
    ctx.repo.delete_by_id(task.id()).await?;
    assert!(!ctx.repo.exists_by_id(task.id()).await?);
    assert!(ctx.repo.find_by_id(task.id()).await?.is_none());

    let missing = ctx.repo.delete_by_id(TaskId::new(9_999)).await;
    assert!(matches!(missing, Err(TaskRepositoryError::NotFound(_))));
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
#[tokio::test(flavor = "multi_thread")]
async fn service_round_trip_over_postgres(
    #[future] prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let ctx = prepared_repo.await?;
    let service = TaskService::new(Arc::clone(&ctx.repo), Arc::new(DefaultClock));

    let created = service
        .create(CreateTaskRequest::new("Plan sprint").with_description("Q3 goals"))
        .await?;
    let updated = service
        .update(
            created.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::Done),
        )
        .await?;
    assert_eq!(updated.title().as_str(), "Plan sprint");
    assert_eq!(updated.status(), TaskStatus::Done);

    let stats = service.statistics().await?;
    assert_eq!((stats.pending, stats.in_progress, stats.done), (0, 0, 1));
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
#[tokio::test(flavor = "multi_thread")]
async fn schema_bootstrap_is_idempotent(
    #[future] prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let ctx = prepared_repo.await?;
    ctx.repo
        .insert(&new_task("Survives re-bootstrap", TaskStatus::Pending))
        .await?;

    apply_schema(&ctx.pool).await?;
    apply_schema(&ctx.pool).await?;

    let all = ctx.repo.list_all_newest_first().await?;
    assert_eq!(all.len(), 1);
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
#[tokio::test(flavor = "multi_thread")]
async fn listing_follows_creation_time_not_insertion_order(
    #[future] prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let ctx = prepared_repo.await?;
    for (title, created_at) in [
        ("middle", "2024-06-01T00:00:00Z"),
        ("newest", "2025-01-02T00:00:00Z"),
        ("oldest", "2023-03-04T00:00:00Z"),
    ] {
        ctx.repo.insert(&draft_at(title, created_at)).await?;
    }

    let listed = ctx.repo.list_all_newest_first().await?;
    let titles: Vec<&str> = listed.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, ["newest", "middle", "oldest"]);
    Ok(())
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
#[tokio::test(flavor = "multi_thread")]
async fn listing_breaks_creation_time_ties_by_descending_id(
    #[future] prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let ctx = prepared_repo.await?;
    let mut inserted = Vec::new();
    for (title, created_at) in [
        ("first", "2025-01-02T00:00:00Z"),
        ("second", "2024-01-01T00:00:00Z"),
        ("third", "2024-01-01T00:00:00Z"),
    ] {
        inserted.push(ctx.repo.insert(&draft_at(title, created_at)).await?.id());
    }

    let listed: Vec<TaskId> = ctx
        .repo
        .list_all_newest_first()
        .await?
        .iter()
        .map(|task| task.id())
        .collect();
    let expected: Vec<TaskId> = [0, 2, 1]
        .into_iter()
        .filter_map(|index| inserted.get(index).copied())
        .collect();
    assert_eq!(listed, expected);
    Ok(())
}
