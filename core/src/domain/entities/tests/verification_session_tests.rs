//! Unit tests for verification session entity

use chrono::Duration;

use crate::domain::entities::verification_session::VerificationSession;
use crate::domain::value_objects::{MobilePhone, VerificationMethod};

fn phone() -> MobilePhone {
    MobilePhone::parse("098765432").unwrap()
}

#[test]
fn test_new_session() {
    let session = VerificationSession::new(VerificationMethod::Id, phone(), 120, "msg-1".to_string());

    assert_eq!(session.resolved_phone.masked(), "098 *** 432");
    assert_eq!(session.countdown.remaining_seconds(), 120);
    assert_eq!(session.expiry_deadline - session.code_sent_at, Duration::seconds(120));
    assert_eq!(session.resend_count, 0);
    assert!(!session.resend_available());
}

#[test]
fn test_resend_available_after_countdown() {
    let mut session = VerificationSession::new(VerificationMethod::Phone, phone(), 2, "msg-1".to_string());

    assert!(!session.tick());
    assert!(session.tick());
    assert!(session.resend_available());

    session.record_resend("msg-2".to_string());
    assert!(!session.resend_available());
    assert_eq!(session.countdown.remaining_seconds(), 2);
    assert_eq!(session.resend_count, 1);
    assert_eq!(session.last_message_id, "msg-2");
}

#[test]
fn test_complete_carries_session_data() {
    let mut session = VerificationSession::new(VerificationMethod::Id, phone(), 120, "msg-1".to_string());
    session.record_failed_attempt();
    let id = session.id;

    let completed = session.complete();
    assert_eq!(completed.session_id, id);
    assert_eq!(completed.verified_phone, phone());
    assert_eq!(completed.failed_attempts, 1);
}

#[test]
fn test_serialization() {
    let session = VerificationSession::new(VerificationMethod::Id, phone(), 120, "msg-1".to_string());

    let json = serde_json::to_string(&session).unwrap();
    let deserialized: VerificationSession = serde_json::from_str(&json).unwrap();

    assert_eq!(session, deserialized);
}
