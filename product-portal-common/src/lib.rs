#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::equatable_if_let)]
#![warn(clippy::expect_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::manual_string_new)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::panic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::string_slice)]
#![warn(clippy::uninlined_format_args)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::use_self)]

//! Types shared by the product portal: the bodies exchanged with the remote API, the forms the
//! screens collect and the local checks those forms go through before anything is sent.

use serde::{Deserialize, Serialize};

pub mod display;
pub mod sample;
pub mod validate;

/// Body of the login request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of the registration request. The confirmation field never leaves the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login response. Any other fields the service returns are ignored.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Session {
    pub token: String,
}

/// Product record as owned by the remote service
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Identifier assigned by the service
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Identifier of the user that created the product
    #[serde(rename = "createdBy", default)]
    pub created_by: String,
}

impl Product {
    /// Last 8 characters of the creator identifier, the part shown on a product card
    pub fn creator_suffix(&self) -> &str {
        let start = self
            .created_by
            .char_indices()
            .rev()
            .nth(7)
            .map_or(0, |(index, _)| index);
        self.created_by.get(start..).unwrap_or_default()
    }
}

/// Body of the product creation request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// Shape of an error payload returned with a non-2xx status. The `message` is optional since the
/// service does not always provide one.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract the `message` field from a raw response body, if the body is JSON and has one
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty())
    }
}
