//! Behaviour every `UserRepository` adapter must share.
//!
//! Each check expects an empty repository and leaves it in an arbitrary
//! state, so callers hand every check a fresh (or cleared) adapter.

use pagination::PageRequest;
use users_api::domain::ports::{UserPersistenceError, UserRepository};
use users_api::domain::{NewUser, UserChanges, UserDraft, UserId, UserPatch};

pub fn draft(index: usize) -> UserDraft {
    UserDraft {
        id: None,
        email: format!("contract{index}@example.com"),
        first_name: format!("First{index}"),
        last_name: format!("Last{index}"),
        avatar: format!("https://example.com/{index}.png"),
    }
}

fn new_user(index: usize, id: Option<i64>) -> NewUser {
    UserDraft { id, ..draft(index) }
        .validate_new()
        .expect("valid contract user")
}

fn id(raw: i64) -> UserId {
    UserId::new(raw).expect("positive id")
}

async fn insert_many(repository: &dyn UserRepository, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for index in 0..count {
        let user = repository
            .insert(new_user(index, None))
            .await
            .expect("insert");
        ids.push(user.id().get());
    }
    ids
}

/// Generated ids are sequential from 1 and stored users read back intact.
pub async fn insert_assigns_sequential_ids(repository: &dyn UserRepository) {
    let ids = insert_many(repository, 3).await;
    assert_eq!(ids, vec![1, 2, 3]);

    let stored = repository
        .find_by_id(id(2))
        .await
        .expect("lookup")
        .expect("stored user");
    assert_eq!(stored.email().as_ref(), "contract1@example.com");
    assert_eq!(stored.first_name().as_ref(), "First1");
}

/// Client ids are honoured, rejected when taken, and skipped by generation.
pub async fn explicit_ids_are_honoured(repository: &dyn UserRepository) {
    let stored = repository
        .insert(new_user(0, Some(10)))
        .await
        .expect("insert with id");
    assert_eq!(stored.id().get(), 10);

    let duplicate = repository
        .insert(new_user(1, Some(10)))
        .await
        .expect_err("id taken");
    assert!(matches!(duplicate, UserPersistenceError::Duplicate { id: 10 }));

    let generated = repository
        .insert(new_user(2, None))
        .await
        .expect("generated insert");
    assert_eq!(generated.id().get(), 11);
}

/// Pages are windows over id order with consistent totals.
pub async fn list_pages_in_id_order(repository: &dyn UserRepository) {
    insert_many(repository, 5).await;

    let page = repository
        .list_page(PageRequest::new(2, 2).expect("valid request"))
        .await
        .expect("list");
    let ids: Vec<i64> = page.items().iter().map(|user| user.id().get()).collect();
    assert_eq!(ids, vec![3, 4]);
    assert_eq!(page.total(), 5);
    assert_eq!(page.pages(), 3);

    let beyond = repository
        .list_page(PageRequest::new(9, 2).expect("valid request"))
        .await
        .expect("list");
    assert!(beyond.items().is_empty());
    assert_eq!(beyond.total(), 5);
}

/// Updates touch only the supplied fields; unknown ids yield `None`.
pub async fn update_applies_partial_changes(repository: &dyn UserRepository) {
    insert_many(repository, 1).await;
    let changes: UserChanges = UserPatch {
        last_name: Some("Changed".to_owned()),
        ..UserPatch::default()
    }
    .validate()
    .expect("valid patch");

    let updated = repository
        .update(id(1), changes.clone())
        .await
        .expect("update")
        .expect("user exists");
    assert_eq!(updated.last_name().as_ref(), "Changed");
    assert_eq!(updated.first_name().as_ref(), "First0");

    let missing = repository.update(id(99), changes).await.expect("update");
    assert!(missing.is_none());
}

/// Deletion reports whether a row went away; clear empties and resets ids.
pub async fn delete_and_clear(repository: &dyn UserRepository) {
    insert_many(repository, 3).await;

    assert!(repository.delete(id(2)).await.expect("delete"));
    assert!(!repository.delete(id(2)).await.expect("second delete"));
    assert!(repository.find_by_id(id(2)).await.expect("lookup").is_none());

    assert_eq!(repository.clear().await.expect("clear"), 2);
    let after = repository
        .list_page(PageRequest::default())
        .await
        .expect("list");
    assert_eq!(after.total(), 0);

    let ids = insert_many(repository, 1).await;
    assert_eq!(ids, vec![1]);
    repository.ping().await.expect("ping");
}

/// Generation ends at `i64::MAX` with a query error rather than reusing an id.
pub async fn generation_stops_at_the_top_of_the_id_range(repository: &dyn UserRepository) {
    repository
        .insert(new_user(0, Some(i64::MAX - 1)))
        .await
        .expect("insert near the top");
    let last = repository
        .insert(new_user(1, None))
        .await
        .expect("last generated id");
    assert_eq!(last.id().get(), i64::MAX);

    let exhausted = repository
        .insert(new_user(2, None))
        .await
        .expect_err("no ids left");
    assert!(matches!(exhausted, UserPersistenceError::Query { .. }));

    let page = repository
        .list_page(PageRequest::default())
        .await
        .expect("list");
    let ids: Vec<i64> = page.items().iter().map(|user| user.id().get()).collect();
    assert_eq!(ids, vec![i64::MAX - 1, i64::MAX]);
}

/// A client may claim `i64::MAX` itself; generation is then closed.
pub async fn explicit_maximum_id_is_stored(repository: &dyn UserRepository) {
    let stored = repository
        .insert(new_user(0, Some(i64::MAX)))
        .await
        .expect("insert at the top");
    assert_eq!(stored.id().get(), i64::MAX);

    let exhausted = repository
        .insert(new_user(1, None))
        .await
        .expect_err("no ids left");
    assert!(matches!(exhausted, UserPersistenceError::Query { .. }));
    assert_eq!(
        repository
            .list_page(PageRequest::default())
            .await
            .expect("list")
            .total(),
        1
    );
}
