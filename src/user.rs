// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use crate::{auth::Token, graph::{self, Graph}, Result};

use url::Url;

/// Instagram Business account profile.
pub struct Profile {
    id: String,
    username: String,
    name: Option<String>,
    profile_picture_url: Option<Url>,
}

mod response {
    #[derive(serde::Deserialize)]
    pub(super) struct Profile {
        pub(super) username: String,
        pub(super) name: Option<String>,
        pub(super) profile_picture_url: Option<String>,
    }
}

impl Profile {
    pub fn fetch<G: Graph + ?Sized, T: Token>(graph: &G, id: &str, token: &T) -> Result<Profile> {
        let profile: response::Profile = graph::get(graph, id, &[
            ("fields", "username,name,profile_picture_url"),
            ("access_token", token.get()),
        ])?;

        Ok(Profile {
            id: id.to_string(),
            username: profile.username,
            name: profile.name,
            profile_picture_url: crate::parse_opt(profile.profile_picture_url)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn profile_picture_url(&self) -> Option<&Url> {
        self.profile_picture_url.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::Profile;
    use crate::{auth::ShortLivedToken, graph::fake::FakeGraph, Error};

    use serde_json::json;

    #[test]
    fn fetch() {
        let graph = FakeGraph::new().respond("17841400000000000", json!({
            "username": "artestudio",
            "name": "Arte Studio",
            "profile_picture_url": "https://scontent.cdninstagram.com/v/t51.2885-19/1.jpg",
            "id": "17841400000000000"
        }));
        let token = ShortLivedToken::new("T123".into()).unwrap();
        let profile = Profile::fetch(&graph, "17841400000000000", &token).unwrap();

        assert_eq!(profile.id(), "17841400000000000");
        assert_eq!(profile.username(), "artestudio");
        assert_eq!(profile.name(), Some("Arte Studio"));
        assert_eq!(profile.profile_picture_url().unwrap().host_str(), Some("scontent.cdninstagram.com"));
        assert!(graph.query(0).contains(&(
            "fields".to_string(),
            "username,name,profile_picture_url".to_string()
        )));
    }

    #[test]
    fn optional_fields() {
        let graph = FakeGraph::new().respond("1", json!({ "username": "artestudio", "id": "1" }));
        let token = ShortLivedToken::new("T123".into()).unwrap();
        let profile = Profile::fetch(&graph, "1", &token).unwrap();
        assert!(profile.name().is_none());
        assert!(profile.profile_picture_url().is_none());
    }

    #[test]
    fn invalid_picture_url() {
        let graph = FakeGraph::new().respond("1", json!({
            "username": "artestudio",
            "profile_picture_url": "not a url"
        }));
        let token = ShortLivedToken::new("T123".into()).unwrap();
        assert!(matches!(Profile::fetch(&graph, "1", &token), Err(Error::MalformedResponse(_))));
    }
}
