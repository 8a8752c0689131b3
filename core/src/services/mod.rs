//! Business services containing the login gate and the verification flow.

pub mod auth;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthService, LoginGate};
pub use verification::{
    CodeDispatcher, CodeVerifier, DirectoryLookup, FlowEvent, FlowSnapshot, FlowState,
    TickScheduler, VerificationFlow, VerificationFlowConfig,
};
