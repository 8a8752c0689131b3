//! Unit tests for mock SMS dispatcher

use idv_core::domain::value_objects::MobilePhone;
use idv_core::services::verification::CodeDispatcher;

use crate::sms::{verification_message, MockCodeDispatcher};

fn phone() -> MobilePhone {
    MobilePhone::parse("098765432").unwrap()
}

#[tokio::test]
async fn test_mock_dispatch_success() {
    let dispatcher = MockCodeDispatcher::new();
    let result = dispatcher.dispatch(&phone()).await;

    let message_id = result.unwrap();
    assert!(message_id.starts_with("mock_"));
    assert_eq!(dispatcher.get_message_count(), 1);
}

#[tokio::test]
async fn test_mock_dispatch_unique_ids() {
    let dispatcher = MockCodeDispatcher::new();

    let first = dispatcher.dispatch(&phone()).await.unwrap();
    let second = dispatcher.dispatch(&phone()).await.unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_mock_dispatch_simulate_failure() {
    let mut dispatcher = MockCodeDispatcher::new();
    dispatcher.set_simulate_failure(true);

    let err = dispatcher.dispatch(&phone()).await.unwrap_err();
    assert_eq!(err.service, "sms");
    assert_eq!(dispatcher.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_dispatch_counter() {
    let dispatcher = MockCodeDispatcher::new();

    for i in 1..=3 {
        let _ = dispatcher.dispatch(&phone()).await;
        assert_eq!(dispatcher.get_message_count(), i);
    }

    dispatcher.reset_counter();
    assert_eq!(dispatcher.get_message_count(), 0);
}

#[test]
fn test_verification_message() {
    assert_eq!(
        verification_message("123456"),
        "Tu código de verificación es: 123456"
    );
}
