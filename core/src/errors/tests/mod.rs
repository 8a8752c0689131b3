//! Tests for error types
