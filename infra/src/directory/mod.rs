//! Directory Module
//!
//! Phone number lookup by national ID.

pub mod mock_directory;

pub use mock_directory::{resolve_phone_for_id, MockDirectory};
