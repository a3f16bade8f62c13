//! Graph-contract violations.
//!
//! These are defensive guards: the upstream map parser validates the same
//! contract, but [`GraphBuilder::build`](crate::GraphBuilder::build) refuses
//! to hand out a graph that breaks it.

use thiserror::Error;

use df_core::CoreError;

/// Errors produced by graph construction.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Name(#[from] CoreError),

    #[error("duplicate hub {0:?}")]
    DuplicateHub(String),

    #[error("hub {hub:?} has occupancy ceiling {got}; the minimum is 1")]
    HubCapacity { hub: String, got: u32 },

    #[error("connection endpoint {0:?} is not a declared hub")]
    UnknownEndpoint(String),

    #[error("connection from {0:?} to itself")]
    SelfLoop(String),

    #[error("duplicate connection between {a:?} and {b:?}")]
    DuplicateConnection { a: String, b: String },

    #[error("connection {name:?} has link capacity {got}; the minimum is 1")]
    LinkCapacity { name: String, got: u32 },

    #[error("start hub {0:?} is not a declared hub")]
    UnknownStart(String),

    #[error("end hub {0:?} is not a declared hub")]
    UnknownEnd(String),

    #[error("fleet size {0} is below the minimum of 1")]
    FleetSize(u32),
}

/// Shorthand result type for graph construction.
pub type GraphResult<T> = Result<T, GraphError>;
