//! Common test utilities for aop-owl integration tests
//!
//! Provides a builder that writes the three source tables into a temporary
//! directory and a configuration pointing at them.

pub mod fixture;

pub use fixture::{TableFixture, TermCells};
