//! Tests for the habit service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockHabitRepository;

fn make_service(repo: MockHabitRepository) -> HabitService<MockHabitRepository> {
    HabitService::new(Arc::new(repo))
}

#[fixture]
fn details() -> HabitDetails {
    HabitDetails {
        description: "Write some code".into(),
        colour_hex: "#bbbbbb".into(),
        icon_base64: "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAE=".into(),
        mode_type: "daily".into(),
    }
}

#[rstest]
#[tokio::test]
async fn list_returns_repository_rows(details: HabitDetails) {
    let first = Habit::new(HabitId::random(), details.clone());
    let second = Habit::new(HabitId::random(), details);
    let expected = vec![first.clone(), second.clone()];
    let mut repo = MockHabitRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(move || Ok(vec![first, second]));

    let habits = make_service(repo).list_habits().await.expect("list succeeds");
    assert_eq!(habits, expected);
}

#[tokio::test]
async fn list_of_empty_store_is_empty() {
    let mut repo = MockHabitRepository::new();
    repo.expect_find_all().times(1).return_once(|| Ok(Vec::new()));

    let habits = make_service(repo).list_habits().await.expect("list succeeds");
    assert!(habits.is_empty());
}

#[tokio::test]
async fn list_failure_hides_repository_cause() {
    let mut repo = MockHabitRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(|| Err(HabitRepositoryError::connection("password authentication failed")));

    let error = make_service(repo).list_habits().await.expect_err("list fails");
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), READ_FAILED_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn fetch_returns_matching_habit(details: HabitDetails) {
    let habit = Habit::new(HabitId::random(), details);
    let id = habit.id();
    let stored = habit.clone();
    let mut repo = MockHabitRepository::new();
    repo.expect_find_by_id()
        .withf(move |candidate| *candidate == id)
        .times(1)
        .return_once(move |_| Ok(Some(stored)));

    let fetched = make_service(repo).fetch_habit(&id).await.expect("fetch succeeds");
    assert_eq!(fetched, habit);
}

#[tokio::test]
async fn fetch_of_unknown_id_is_not_found() {
    let mut repo = MockHabitRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let error = make_service(repo)
        .fetch_habit(&HabitId::random())
        .await
        .expect_err("missing habit");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn fetch_failure_is_internal() {
    let mut repo = MockHabitRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(HabitRepositoryError::query("relation \"habits\" does not exist")));

    let error = make_service(repo)
        .fetch_habit(&HabitId::random())
        .await
        .expect_err("fetch fails");
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), READ_FAILED_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn create_assigns_fresh_id_and_persists_details(details: HabitDetails) {
    let expected_details = details.clone();
    let mut repo = MockHabitRepository::new();
    repo.expect_insert()
        .withf(move |habit: &Habit| *habit.details() == expected_details)
        .times(1)
        .returning(|habit| Ok(habit.clone()));

    let service = make_service(repo);
    let created = service
        .create_habit(details.clone())
        .await
        .expect("create succeeds");
    assert_eq!(created.details(), &details);
}

#[rstest]
#[tokio::test]
async fn create_twice_yields_distinct_ids(details: HabitDetails) {
    let mut repo = MockHabitRepository::new();
    repo.expect_insert()
        .times(2)
        .returning(|habit| Ok(habit.clone()));

    let service = make_service(repo);
    let first = service.create_habit(details.clone()).await.expect("first");
    let second = service.create_habit(details).await.expect("second");
    assert_ne!(first.id(), second.id());
}

#[rstest]
#[tokio::test]
async fn create_failure_uses_create_message(details: HabitDetails) {
    let mut repo = MockHabitRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(HabitRepositoryError::query("duplicate key")));

    let error = make_service(repo)
        .create_habit(details)
        .await
        .expect_err("create fails");
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), CREATE_FAILED_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn update_keeps_path_id(details: HabitDetails) {
    let id = HabitId::random();
    let mut repo = MockHabitRepository::new();
    repo.expect_update_by_id()
        .withf(move |habit: &Habit| habit.id() == id && habit.details().mode_type == "daily")
        .times(1)
        .return_once(|_| Ok(1));

    make_service(repo)
        .update_habit(id, details)
        .await
        .expect("update succeeds");
}

#[rstest]
#[case(Ok(0), ErrorCode::NotFound)]
#[case(Err(HabitRepositoryError::connection("pool timed out")), ErrorCode::InternalError)]
#[tokio::test]
async fn update_maps_repository_outcomes(
    details: HabitDetails,
    #[case] outcome: Result<u64, HabitRepositoryError>,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockHabitRepository::new();
    repo.expect_update_by_id().times(1).return_once(move |_| outcome);

    let error = make_service(repo)
        .update_habit(HabitId::random(), details)
        .await
        .expect_err("update fails");
    assert_eq!(error.code(), expected);
    if expected == ErrorCode::InternalError {
        assert_eq!(error.message(), UPDATE_FAILED_MESSAGE);
    }
}

#[tokio::test]
async fn delete_removes_existing_row() {
    let id = HabitId::random();
    let mut repo = MockHabitRepository::new();
    repo.expect_delete_by_id()
        .withf(move |candidate| *candidate == id)
        .times(1)
        .return_once(|_| Ok(1));

    make_service(repo)
        .delete_habit(&id)
        .await
        .expect("delete succeeds");
}

#[rstest]
#[case(Ok(0), ErrorCode::NotFound)]
#[case(Err(HabitRepositoryError::query("deadlock detected")), ErrorCode::InternalError)]
#[tokio::test]
async fn delete_maps_repository_outcomes(
    #[case] outcome: Result<u64, HabitRepositoryError>,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockHabitRepository::new();
    repo.expect_delete_by_id().times(1).return_once(move |_| outcome);

    let error = make_service(repo)
        .delete_habit(&HabitId::random())
        .await
        .expect_err("delete fails");
    assert_eq!(error.code(), expected);
    if expected == ErrorCode::InternalError {
        assert_eq!(error.message(), DELETE_FAILED_MESSAGE);
    }
}
