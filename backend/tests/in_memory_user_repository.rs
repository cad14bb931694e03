//! Repository contract checks against the in-memory adapter.

#[path = "support/repository_contract.rs"]
mod contract;

use std::sync::Arc;

use pagination::PageRequest;
use rstest::{fixture, rstest};
use users_api::domain::ports::UserRepository;
use users_api::outbound::memory::InMemoryUserRepository;

#[fixture]
fn repository() -> InMemoryUserRepository {
    InMemoryUserRepository::new()
}

#[rstest]
#[tokio::test]
async fn insert_assigns_sequential_ids(repository: InMemoryUserRepository) {
    contract::insert_assigns_sequential_ids(&repository).await;
}

#[rstest]
#[tokio::test]
async fn explicit_ids_are_honoured(repository: InMemoryUserRepository) {
    contract::explicit_ids_are_honoured(&repository).await;
}

#[rstest]
#[tokio::test]
async fn list_pages_in_id_order(repository: InMemoryUserRepository) {
    contract::list_pages_in_id_order(&repository).await;
}

#[rstest]
#[tokio::test]
async fn update_applies_partial_changes(repository: InMemoryUserRepository) {
    contract::update_applies_partial_changes(&repository).await;
}

#[rstest]
#[tokio::test]
async fn delete_and_clear(repository: InMemoryUserRepository) {
    contract::delete_and_clear(&repository).await;
}

#[rstest]
#[tokio::test]
async fn generation_stops_at_the_top_of_the_id_range(repository: InMemoryUserRepository) {
    contract::generation_stops_at_the_top_of_the_id_range(&repository).await;
}

#[rstest]
#[tokio::test]
async fn explicit_maximum_id_is_stored(repository: InMemoryUserRepository) {
    contract::explicit_maximum_id_is_stored(&repository).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_inserts_never_share_an_id() {
    let repository = Arc::new(InMemoryUserRepository::new());
    let tasks: Vec<_> = (0..32)
        .map(|index| {
            let repository = Arc::clone(&repository);
            tokio::spawn(async move {
                let user = contract::draft(index).validate_new().expect("valid user");
                repository.insert(user).await.expect("insert").id().get()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.expect("task joins"));
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 32);

    let page = repository
        .list_page(PageRequest::new(1, 100).expect("valid request"))
        .await
        .expect("list");
    assert_eq!(page.total(), 32);
}
