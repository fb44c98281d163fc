//! Runtime error type: wraps kernel failures with I/O and config context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use scenario_kernel::error::KernelError;

use crate::verify::Mismatch;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("bad config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("bad run record {}: {source}", path.display())]
    Record {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("limit {limit} exceeds the cross-check maximum of {max}")]
    LimitTooLarge { limit: i64, max: i64 },

    #[error("cross-check failed: {0}")]
    CrossCheck(#[from] Mismatch),

    #[error("verification failed: {0}")]
    Verification(String),
}
