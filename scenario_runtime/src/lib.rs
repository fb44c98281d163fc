#![forbid(unsafe_code)]

//! Scenario Runtime
//!
//! Wraps the v1 kernel with configuration, logging, output rendering,
//! run records and verification.
//!
//! No numeric logic lives here. All computation is delegated
//! to the kernel.

pub mod error;
pub mod config;
pub mod runner;
pub mod render;
pub mod record;
pub mod verify;
