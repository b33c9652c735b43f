// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use crate::{graph::{self, Graph}, Error, Result};

use chrono::{DateTime, Duration, Utc};
use log::info;

pub struct Secrets {
    pub app_id: String,
    pub app_secret: String,
}

pub trait Token {
    fn get(&self) -> &str;
    /// `None` if the API didn't report when the token expires.
    fn expiration_date(&self) -> Option<&DateTime<Utc>>;

    fn is_expired(&self) -> bool {
        match self.expiration_date() {
            Some(date) => Utc::now() > *date,
            None => false,
        }
    }
}

/// User access token as issued by the Graph API Explorer or the login dialog.
pub struct ShortLivedToken {
    access_token: String,
}

impl ShortLivedToken {
    /// Returns `None` if `access_token` is blank.
    pub fn new(access_token: String) -> Option<ShortLivedToken> {
        if access_token.trim().is_empty() {
            return None;
        }
        Some(ShortLivedToken { access_token })
    }
}

impl Token for ShortLivedToken {
    fn get(&self) -> &str {
        &self.access_token
    }

    fn expiration_date(&self) -> Option<&DateTime<Utc>> {
        None
    }
}

pub struct LongLivedToken {
    access_token: String,
    expiration_date: Option<DateTime<Utc>>,
}

#[derive(serde::Deserialize)]
struct LongLivedTokenResponse {
    #[serde(default)]
    access_token: String,
    expires_in: Option<i64>,
}

impl LongLivedToken {
    /// Exchanges `short_lived_token` for a token that lives about 60 days.
    pub fn exchange<G: Graph + ?Sized>(
        graph: &G,
        secrets: &Secrets,
        short_lived_token: &ShortLivedToken,
    ) -> Result<LongLivedToken> {
        let token: LongLivedTokenResponse = graph::get(graph, "oauth/access_token", &[
            ("grant_type", "fb_exchange_token"),
            ("client_id", secrets.app_id.as_str()),
            ("client_secret", secrets.app_secret.as_str()),
            ("fb_exchange_token", short_lived_token.get()),
        ])?;

        if token.access_token.trim().is_empty() {
            return Err(Error::MalformedResponse("exchange returned an empty access token".into()));
        }
        info!("Received a long-lived token (expires_in: {:?})", token.expires_in);

        let expiration_date = match token.expires_in {
            Some(secs) => Some(
                Duration::try_seconds(secs)
                    .and_then(|delta| Utc::now().checked_add_signed(delta))
                    .ok_or_else(|| {
                        Error::MalformedResponse(format!("invalid expires_in: {}", secs))
                    })?,
            ),
            None => None,
        };

        let token = LongLivedToken { access_token: token.access_token, expiration_date };
        if token.is_expired() {
            return Err(Error::MalformedResponse("exchange returned an expired token".into()));
        }
        Ok(token)
    }

    /// Whole days left until expiration, if known.
    pub fn days_left(&self) -> Option<i64> {
        self.expiration_date.map(|date| (date - Utc::now()).num_days())
    }
}

impl Token for LongLivedToken {
    fn get(&self) -> &str {
        &self.access_token
    }

    fn expiration_date(&self) -> Option<&DateTime<Utc>> {
        self.expiration_date.as_ref()
    }
}
