//! Tests for the SMS module

#[cfg(test)]
mod mock_sms_tests;
