// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

//! The whole setup: token exchange, page discovery, Instagram lookup and persistence.

use crate::{
    auth::{LongLivedToken, Secrets, ShortLivedToken, Token},
    env_file,
    graph::Graph,
    page::{self, Page},
    user::Profile,
    Error, Result,
};

use std::path::PathBuf;
use chrono::Utc;
use log::info;

pub const TOKEN_KEY: &str = "FACEBOOK_LONG_LIVED_TOKEN";
pub const ACCOUNT_ID_KEY: &str = "INSTAGRAM_BUSINESS_ACCOUNT_ID";
pub const USERNAME_KEY: &str = "INSTAGRAM_USERNAME";

pub struct Config {
    pub secrets: Secrets,
    pub short_lived_token: ShortLivedToken,
    /// File the credentials are appended to.
    pub env_file: PathBuf,
}

/// What gets persisted after a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub long_lived_token: String,
    pub instagram_account_id: String,
    pub instagram_username: String,
}

impl Credentials {
    fn entries(&self) -> [(&str, &str); 3] {
        [
            (TOKEN_KEY, self.long_lived_token.as_str()),
            (ACCOUNT_ID_KEY, self.instagram_account_id.as_str()),
            (USERNAME_KEY, self.instagram_username.as_str()),
        ]
    }
}

/// Runs every step in order and stops at the first failure.
///
/// Nothing is written to [Config::env_file] unless all lookups succeed.
pub fn run<G: Graph + ?Sized>(graph: &G, config: &Config) -> Result<Credentials> {
    println!("Exchanging the short-lived token for a long-lived one...");
    let token = LongLivedToken::exchange(graph, &config.secrets, &config.short_lived_token)?;
    match token.days_left() {
        Some(days) => println!("Long-lived token received (expires in {} days)", days),
        None => println!("Long-lived token received"),
    }

    println!("\nLooking for Facebook pages you administer...");
    let pages = page::list(graph, &token)?;
    println!(
        "Found {} page(s), looking for a linked Instagram Business account...",
        pages.len()
    );

    let (page, account_id) =
        find_instagram_account(graph, &pages, &token)?.ok_or(Error::NoLinkedAccount)?;
    info!("Using Instagram account {} linked to page {}", account_id, page.id);

    let profile = Profile::fetch(graph, &account_id, &token)?;
    println!("Instagram Business account found: {}", profile.id());
    println!("Username: @{}", profile.username());
    if let Some(name) = profile.name() {
        println!("Name: {}", name);
    }
    if let Some(url) = profile.profile_picture_url() {
        println!("Profile picture: {}", url);
    }

    let credentials = Credentials {
        long_lived_token: token.get().to_string(),
        instagram_account_id: profile.id().to_string(),
        instagram_username: profile.username().to_string(),
    };

    println!("\nSaving credentials to {}...", config.env_file.display());
    let header = format!("Meta credentials generated on {}", Utc::now().format("%F %T UTC"));
    env_file::append(&config.env_file, &header, &credentials.entries())?;
    Ok(credentials)
}

/// Checks pages in order and returns the first one with a linked Instagram Business account.
/// Pages after the match aren't queried.
fn find_instagram_account<'a, G: Graph + ?Sized, T: Token>(
    graph: &G,
    pages: &'a [Page],
    token: &T,
) -> Result<Option<(&'a Page, String)>> {
    pages
        .iter()
        .find_map(|page| {
            println!("Checking page: {} ({})", page.name, page.id);
            page::instagram_account(graph, page, token)
                .map(|id| id.map(|id| (page, id)))
                .transpose()
        })
        .transpose()
}
