//! Tests for the login gate
