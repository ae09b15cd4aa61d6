//! What each screen does when the user acts on it, independent of how the screen is rendered.
//! Every operation issues at most one request at a time and awaits it.

use thiserror::Error;

use crate::api;

pub mod login;
pub mod products;
pub mod register;

/// Why a single user action did not go through
#[derive(Debug, Error)]
pub enum FlowError {
    /// The form was rejected locally and nothing was sent
    #[error("{0}")]
    Validation(&'static str),
    #[error(transparent)]
    Api(#[from] api::Error),
}

pub type FlowResult<T> = Result<T, FlowError>;
