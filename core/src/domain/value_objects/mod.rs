//! Value objects: identity inputs, credentials, countdown and notifications.

pub mod countdown;
pub mod credentials;
pub mod identity;
pub mod notification;

pub use countdown::Countdown;
pub use credentials::{Credentials, MAX_CREDENTIAL_LENGTH};
pub use identity::{MobilePhone, NationalId, PhoneResolution, VerificationMethod};
pub use notification::{Notification, NotificationKind};
