//! Shared fixtures for engine tests.

pub mod fixtures;
