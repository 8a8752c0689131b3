//! Verification flow module
//!
//! Method selection, code dispatch and code confirmation:
//!
//! ```text
//! SelectingMethod --send_code--> AwaitingCode --submit_code--> Completed
//!        ^                            |  ^
//!        +------------back------------+  +--resend_code / tick
//! ```
//!
//! Backend steps go through the capability traits so a real directory,
//! verifier or SMS gateway can replace the mocks without touching the flow.

mod config;
mod flow;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use crate::domain::value_objects::Countdown;
pub use config::VerificationFlowConfig;
pub use flow::{CompletionHook, VerificationFlow};
pub use traits::{CodeDispatcher, CodeVerifier, DirectoryLookup, TickScheduler};
pub use types::{FlowEvent, FlowSnapshot, FlowState, PhonePreview};
