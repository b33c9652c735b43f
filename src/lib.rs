// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

//! One-time setup of a Meta application over the
//! [Graph API](https://developers.facebook.com/docs/graph-api/): exchanges a short-lived token
//! for a long-lived one, finds the Instagram Business account linked to the user's pages
//! and appends the credentials to an env file.

pub mod auth;
pub mod env_file;
pub mod error;
pub mod graph;
pub mod page;
pub mod setup;
pub mod user;

pub use error::Error;

use std::{result, str::FromStr};

pub const BASE_URL: &str = "https://graph.facebook.com";
pub const API_VERSION: &str = "v18.0";

pub type Result<T> = result::Result<T, Error>;

/// Parses an optional string field, keeping `None` as is.
fn parse_opt<T: FromStr>(field: Option<String>) -> result::Result<Option<T>, T::Err> {
    field.map(|value| value.parse()).transpose()
}
