//! Common test utilities for REST API testing.
//!
//! - [`harness`] - REST API test harness
//! - [`fixtures`] - Restaurant payload fixtures
//! - [`failing_storage`] - A store whose every call fails
//! - [`slow_storage`] - A store that answers after a delay

#![allow(dead_code)]

pub mod failing_storage;
pub mod fixtures;
pub mod harness;
pub mod slow_storage;
