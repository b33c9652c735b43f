// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

//! Facebook pages administered by the token owner.

use crate::{auth::Token, graph::{self, Graph}, Error, Result};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
}

mod response {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub(super) struct Accounts {
        #[serde(default)]
        pub(super) data: Vec<super::Page>,
    }

    #[derive(Deserialize)]
    pub(super) struct InstagramLink {
        // Missing and `null` are both deserialized to `None`.
        #[serde(default)]
        pub(super) instagram_business_account: Option<Node>,
    }

    #[derive(Deserialize)]
    pub(super) struct Node {
        pub(super) id: String,
    }
}

/// Lists pages in the order returned by the API.
pub fn list<G: Graph + ?Sized, T: Token>(graph: &G, token: &T) -> Result<Vec<Page>> {
    let accounts: response::Accounts =
        graph::get(graph, "me/accounts", &[("access_token", token.get())])?;
    if accounts.data.is_empty() {
        return Err(Error::NoPages);
    }
    Ok(accounts.data)
}

/// Returns ID of the Instagram Business account linked to `page`, if any.
pub fn instagram_account<G: Graph + ?Sized, T: Token>(
    graph: &G,
    page: &Page,
    token: &T,
) -> Result<Option<String>> {
    let link: response::InstagramLink = graph::get(graph, &page.id, &[
        ("fields", "instagram_business_account"),
        ("access_token", token.get()),
    ])?;
    let id = link.instagram_business_account.map(|node| node.id);
    debug!("Page {} linked account: {:?}", page.id, id);
    Ok(id)
}
