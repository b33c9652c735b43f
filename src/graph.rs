// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

//! Transport for the Graph API.

use crate::{Error, Result};

use log::debug;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use url::Url;

/// Issues GET requests against the Graph API and returns the decoded JSON body.
///
/// `path` is relative to the versioned API root, e.g. `me/accounts`.
pub trait Graph {
    fn fetch(&self, path: &str, query: &[(&str, &str)]) -> Result<Value>;
}

/// Blocking [Graph] implementation backed by `reqwest`.
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: Url,
    api_version: String,
}

impl Client {
    pub fn new(base_url: Url, api_version: &str) -> Client {
        Client {
            http: reqwest::blocking::Client::new(),
            base_url,
            api_version: api_version.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.api_version,
            path.trim_start_matches('/'),
        ))?)
    }
}

impl Default for Client {
    fn default() -> Self {
        let base_url = Url::parse(crate::BASE_URL).expect("default Graph API URL is valid");
        Client::new(base_url, crate::API_VERSION)
    }
}

impl Graph for Client {
    fn fetch(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = self.endpoint(path)?;
        // Query values carry secrets, so only the path is logged.
        debug!("GET {}", url.path());

        let response = self.http.get(url).query(query).send()?;
        let status = response.status();
        let body = response.text()?;
        debug!("{} responded with {}", path, status);

        match serde_json::from_str::<Value>(&body) {
            Ok(json) if status.is_success() || json.get("error").is_some() => Ok(json),
            Ok(_) => Err(Error::Status(status)),
            Err(_) if !status.is_success() => Err(Error::Status(status)),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
    code: Option<i64>,
}

/// Fetches `path` and deserializes the body into `T`.
///
/// A body carrying an `error` object is turned into [Error::Api].
pub fn get<G, T>(graph: &G, path: &str, query: &[(&str, &str)]) -> Result<T>
where
    G: Graph + ?Sized,
    T: DeserializeOwned,
{
    let mut json = graph.fetch(path, query)?;
    if let Some(error) = json.get_mut("error") {
        let error: ApiError = serde_json::from_value(error.take())?;
        return Err(Error::Api { message: error.message, code: error.code });
    }
    Ok(serde_json::from_value(json)?)
}

#[cfg(test)]
pub(crate) mod fake {
    use crate::{Error, Result};

    use std::{cell::RefCell, collections::HashMap};
    use reqwest::StatusCode;
    use serde_json::Value;

    /// Answers with canned bodies keyed by path and records every request.
    #[derive(Default)]
    pub struct FakeGraph {
        responses: HashMap<String, Value>,
        requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl FakeGraph {
        pub fn new() -> FakeGraph {
            FakeGraph::default()
        }

        pub fn respond(mut self, path: &str, body: Value) -> FakeGraph {
            self.responses.insert(path.to_string(), body);
            self
        }

        pub fn paths(&self) -> Vec<String> {
            self.requests.borrow().iter().map(|(path, _)| path.clone()).collect()
        }

        pub fn query(&self, index: usize) -> Vec<(String, String)> {
            self.requests.borrow()[index].1.clone()
        }
    }

    impl super::Graph for FakeGraph {
        fn fetch(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
            self.requests.borrow_mut().push((
                path.to_string(),
                query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            ));
            self.responses.get(path).cloned().ok_or(Error::Status(StatusCode::NOT_FOUND))
        }
    }
}
