use std::sync::atomic::Ordering;

use crate::downloader::test_helpers::MockResultsClient;
use crate::error::Error;
use crate::types::{ExecutionId, ExecutionRef};

#[tokio::test]
async fn test_execution_resolves_without_probing_suite() {
    let (downloader, client) = MockResultsClient::new()
        .with_test_execution("run-1")
        .into_downloader();

    let resolved = downloader.resolve(&ExecutionId::new("run-1")).await.unwrap();

    assert!(matches!(resolved, ExecutionRef::Test(_)));
    assert_eq!(resolved.id(), ExecutionId::new("run-1"));
    assert_eq!(client.test_lookup_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        client.suite_lookup_calls.load(Ordering::SeqCst),
        0,
        "suite endpoint must not be probed after the test lookup succeeds"
    );
}

#[tokio::test]
async fn suite_execution_resolves_after_test_miss() {
    let (downloader, client) = MockResultsClient::new()
        .with_suite_execution("suite-1")
        .into_downloader();

    let resolved = downloader
        .resolve(&ExecutionId::new("suite-1"))
        .await
        .unwrap();

    assert!(matches!(resolved, ExecutionRef::Suite(_)));
    assert_eq!(resolved.kind(), "test suite");
    assert_eq!(client.test_lookup_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.suite_lookup_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_test_record_falls_through_to_suite() {
    // The service can answer 200 with an empty record; that counts as absent.
    let (downloader, _client) = MockResultsClient::new()
        .with_empty_test_execution("run-2")
        .with_suite_execution("run-2")
        .into_downloader();

    let resolved = downloader.resolve(&ExecutionId::new("run-2")).await.unwrap();

    assert!(matches!(resolved, ExecutionRef::Suite(_)));
}

#[tokio::test]
async fn unknown_id_fails_with_not_found_carrying_the_id() {
    let (downloader, client) = MockResultsClient::new().into_downloader();

    let err = downloader
        .resolve(&ExecutionId::new("missing"))
        .await
        .unwrap_err();

    match err {
        Error::NotFound { id } => assert_eq!(id, "missing"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(client.test_lookup_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.suite_lookup_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unresolved_id_makes_no_artifact_calls_downstream() {
    let (downloader, client) = MockResultsClient::new().into_downloader();

    let err = downloader.list(&ExecutionId::new("missing")).await.unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(client.test_list_calls.load(Ordering::SeqCst), 0);
    assert_eq!(client.suite_list_calls.load(Ordering::SeqCst), 0);
    assert_eq!(client.fetch_calls.load(Ordering::SeqCst), 0);
}
