//! Integration tests for the verification flow over the mocked infrastructure

use std::sync::Arc;

use idv_core::domain::value_objects::{NotificationKind, VerificationMethod};
use idv_core::services::verification::{
    FlowEvent, FlowState, PhonePreview, VerificationFlow, VerificationFlowConfig,
};
use idv_infra::{
    FixedCodeVerifier, MockCodeDispatcher, MockDirectory, MockServices, TokioTicker,
};
use idv_shared::config::MockBackendConfig;
use tokio::sync::mpsc;

type MockFlow = VerificationFlow<MockDirectory, FixedCodeVerifier, MockCodeDispatcher>;

fn build_flow() -> (MockFlow, MockServices, mpsc::Receiver<FlowEvent>) {
    let services = MockServices::from_config(&MockBackendConfig::default(), false).unwrap();
    let (sender, receiver) = mpsc::channel(16);

    let flow = VerificationFlow::new(
        services.directory.clone(),
        services.verifier.clone(),
        services.dispatcher.clone(),
        Box::new(TokioTicker::new(sender)),
        VerificationFlowConfig::default(),
    );
    (flow, services, receiver)
}

async fn awaiting_code(flow: &mut MockFlow) {
    flow.dispatch(FlowEvent::SelectMethod(VerificationMethod::Id)).await;
    flow.dispatch(FlowEvent::UpdateIdInput("99999999".to_string())).await;
    let notification = flow.dispatch(FlowEvent::SendCode).await.unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(flow.state(), FlowState::AwaitingCode);
}

#[tokio::test]
async fn test_unregistered_id_stays_selecting() {
    let (mut flow, services, _rx) = build_flow();

    flow.dispatch(FlowEvent::SelectMethod(VerificationMethod::Id)).await;
    flow.dispatch(FlowEvent::UpdateIdInput("12345678".to_string())).await;
    assert_eq!(flow.snapshot().id_phone_preview, Some(PhonePreview::NotFound));
    let notification = flow.dispatch(FlowEvent::SendCode).await.unwrap();

    assert_eq!(notification.kind, NotificationKind::PhoneNotFound);
    assert_eq!(flow.state(), FlowState::SelectingMethod);
    assert_eq!(services.dispatcher.get_message_count(), 0);
    assert!(!flow.is_ticking());
}

#[tokio::test]
async fn test_registered_id_sends_code() {
    let (mut flow, services, _rx) = build_flow();

    awaiting_code(&mut flow).await;

    let snapshot = flow.snapshot();
    assert_eq!(snapshot.masked_resolved_phone.as_deref(), Some("098 *** 432"));
    assert_eq!(snapshot.remaining_seconds, Some(120));
    assert_eq!(snapshot.remaining_display.as_deref(), Some("2:00"));
    assert!(!snapshot.resend_available);
    assert_eq!(services.dispatcher.get_message_count(), 1);
    assert!(flow.is_ticking());
}

#[tokio::test]
async fn test_countdown_runs_out() {
    let (mut flow, _services, _rx) = build_flow();
    awaiting_code(&mut flow).await;

    let epoch = flow.tick_epoch();
    for _ in 0..120 {
        flow.dispatch(FlowEvent::Tick(epoch)).await;
    }

    let snapshot = flow.snapshot();
    assert!(snapshot.resend_available);
    assert_eq!(snapshot.remaining_seconds, Some(0));
    assert_eq!(snapshot.remaining_display.as_deref(), Some("0:00"));
    assert!(!flow.is_ticking());
}

#[tokio::test]
async fn test_submit_code() {
    let (mut flow, _services, _rx) = build_flow();
    awaiting_code(&mut flow).await;

    let mismatch = flow
        .dispatch(FlowEvent::SubmitCode("111111".to_string()))
        .await
        .unwrap();
    assert_eq!(mismatch.kind, NotificationKind::CodeMismatch);
    assert_eq!(flow.state(), FlowState::AwaitingCode);

    let accepted = flow
        .dispatch(FlowEvent::SubmitCode("123456".to_string()))
        .await
        .unwrap();
    assert_eq!(accepted.kind, NotificationKind::Success);
    assert_eq!(flow.state(), FlowState::Completed);
    assert!(!flow.is_ticking());

    let completed = flow.completed().unwrap();
    assert_eq!(completed.failed_attempts, 1);
    assert_eq!(completed.verified_phone.formatted(), "098 765 432");
}

#[tokio::test]
async fn test_resend_before_expiry_is_noop() {
    let (mut flow, services, _rx) = build_flow();
    awaiting_code(&mut flow).await;
    flow.dispatch(FlowEvent::Tick(flow.tick_epoch())).await;

    let before = flow.snapshot();
    let result = flow.dispatch(FlowEvent::ResendCode).await;

    assert!(result.is_none());
    assert_eq!(flow.snapshot(), before);
    assert_eq!(services.dispatcher.get_message_count(), 1);
}

#[tokio::test]
async fn test_resend_after_expiry_restarts_countdown() {
    let (mut flow, services, _rx) = build_flow();
    awaiting_code(&mut flow).await;
    let epoch = flow.tick_epoch();
    for _ in 0..120 {
        flow.dispatch(FlowEvent::Tick(epoch)).await;
    }

    let notification = flow.dispatch(FlowEvent::ResendCode).await.unwrap();

    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(flow.snapshot().remaining_seconds, Some(120));
    assert_eq!(flow.session().unwrap().resend_count, 1);
    assert_eq!(services.dispatcher.get_message_count(), 2);
    assert!(flow.is_ticking());
}

#[tokio::test]
async fn test_phone_method_and_back() {
    let (mut flow, _services, _rx) = build_flow();

    flow.dispatch(FlowEvent::SelectMethod(VerificationMethod::Phone)).await;
    flow.dispatch(FlowEvent::UpdatePhoneInput("1234567".to_string())).await;
    assert_eq!(flow.snapshot().formatted_id_or_phone, "091 234 567");

    flow.dispatch(FlowEvent::SendCode).await.unwrap();
    assert_eq!(
        flow.snapshot().masked_resolved_phone.as_deref(),
        Some("091 *** 567")
    );

    flow.dispatch(FlowEvent::Back).await;
    assert_eq!(flow.state(), FlowState::SelectingMethod);
    assert_eq!(flow.snapshot().formatted_id_or_phone, "091 234 567");
    assert!(!flow.is_ticking());
}

#[tokio::test]
async fn test_directory_outage_is_transport_error() {
    let mut directory = MockDirectory::from_config(&MockBackendConfig::default()).unwrap();
    directory.set_simulate_failure(true);
    let (sender, _rx) = mpsc::channel(16);

    let mut flow = VerificationFlow::new(
        Arc::new(directory),
        Arc::new(FixedCodeVerifier::default()),
        Arc::new(MockCodeDispatcher::new()),
        Box::new(TokioTicker::new(sender)),
        VerificationFlowConfig::default(),
    );

    flow.dispatch(FlowEvent::UpdateIdInput("87654321".to_string())).await;
    let notification = flow.dispatch(FlowEvent::SendCode).await.unwrap();

    assert_eq!(notification.kind, NotificationKind::TransportError);
    assert_eq!(flow.state(), FlowState::SelectingMethod);
}
