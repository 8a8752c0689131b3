//! Scheduler Module
//!
//! Periodic triggers for the resend countdown.

pub mod tokio_ticker;

pub use tokio_ticker::{TokioTicker, TICK_PERIOD};
