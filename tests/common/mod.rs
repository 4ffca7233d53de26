//! Common test utilities for Cronbook CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with a temp crontab file and home
//! - Fixtures: Reusable crontab content constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
