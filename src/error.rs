// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use std::{fmt, io};
use reqwest::StatusCode;

/// Everything that can stop a setup run.
#[derive(Debug)]
pub enum Error {
    /// Request couldn't be sent or the response couldn't be read.
    Network(reqwest::Error),
    MalformedResponse(String),
    /// Non-successful status without an API error object in the body.
    Status(StatusCode),
    /// The Graph API rejected a request.
    Api { message: String, code: Option<i64> },
    NoPages,
    NoLinkedAccount,
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(e) => write!(f, "network error: {}", e),
            Error::MalformedResponse(msg) => write!(f, "malformed response: {}", msg),
            Error::Status(status) => write!(f, "unexpected HTTP status: {}", status),
            Error::Api { message, code: Some(code) } => write!(f, "{} (code {})", message, code),
            Error::Api { message, code: None } => f.write_str(message),
            Error::NoPages => f.write_str("no Facebook pages found"),
            Error::NoLinkedAccount => {
                f.write_str("no Instagram Business account is linked to your pages")
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::MalformedResponse(format!("invalid URL: {}", err))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
