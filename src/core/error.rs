//=========================================================================
// Error Types
//=========================================================================
//
// Error taxonomy for subsystem construction, initialization and
// configuration loading.
//
//   ModuleError     - a single subsystem failed
//   BootstrapError  - bootstrap failed; names the subsystem involved
//   ConfigError     - configuration could not be loaded or is invalid
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::io;
use std::path::PathBuf;

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::module::SubsystemKind;

//=== ModuleError =========================================================

/// Failure reported by a single subsystem.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The allocator could not reserve the requested bytes.
    #[error("out of memory: could not reserve {requested} bytes")]
    OutOfMemory { requested: usize },

    /// The request would exceed the configured memory budget.
    #[error("memory budget exceeded: requested {requested} bytes, {available} of {budget} available")]
    BudgetExceeded {
        requested: usize,
        available: usize,
        budget: usize,
    },

    /// A block was returned to a manager that did not allocate it.
    #[error("foreign memory block of {size} bytes returned to this manager")]
    ForeignBlock { size: usize },

    /// The subsystem was handed a configuration it cannot work with.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No search path contains the requested asset.
    #[error("asset not found: {}", .0.display())]
    AssetNotFound(PathBuf),

    /// Reading an asset failed after it was located.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other subsystem-specific failure.
    #[error("{0}")]
    Failed(String),
}

//=== BootstrapError ======================================================

/// Bootstrap failure, naming the subsystem that caused it.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The factory could not construct the subsystem.
    #[error("failed to construct {kind}: {source}")]
    Construction {
        kind: SubsystemKind,
        #[source]
        source: ModuleError,
    },

    /// The subsystem was constructed but refused to initialize.
    #[error("failed to initialize {kind}: {source}")]
    Initialization {
        kind: SubsystemKind,
        #[source]
        source: ModuleError,
    },

    /// Engine configuration was rejected before any subsystem was built.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BootstrapError {
    /// The subsystem involved in the failure, if any.
    pub fn subsystem(&self) -> Option<SubsystemKind> {
        match self {
            Self::Construction { kind, .. } | Self::Initialization { kind, .. } => Some(*kind),
            Self::Config(_) => None,
        }
    }
}

//=== ConfigError =========================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

//=========================================================================
// Unit Tests
//=========================================================================
