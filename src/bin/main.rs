// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use meta_setup::{
    auth::{Secrets, ShortLivedToken},
    graph::Client,
    setup::{self, Config},
    Error,
};

use std::{path::PathBuf, process};
use clap::Parser;
use url::Url;

#[derive(Parser)]
#[clap(about, author, version)]
#[clap(name = env!("CARGO_BIN_NAME"))]
struct Cli {
    /// Meta application ID
    #[clap(long, env = "FACEBOOK_APP_ID", value_name = "ID", forbid_empty_values = true)]
    app_id: String,

    /// Meta application secret
    #[clap(long, env = "FACEBOOK_APP_SECRET", hide_env_values = true, value_name = "SECRET")]
    app_secret: String,

    /// Short-lived user access token, e.g. from the Graph API Explorer
    #[clap(long, env = "FACEBOOK_SHORT_LIVED_TOKEN", hide_env_values = true)]
    token: String,

    /// File to append the credentials to
    #[clap(long, env = "META_SETUP_ENV_FILE", value_name = "FILE", default_value = ".env")]
    env_file: PathBuf,

    /// Graph API root
    #[clap(long, env = "META_GRAPH_URL", value_name = "URL", default_value = meta_setup::BASE_URL)]
    graph_url: Url,

    /// Graph API version
    #[clap(long, env = "META_GRAPH_API_VERSION", value_name = "VERSION")]
    #[clap(default_value = meta_setup::API_VERSION)]
    api_version: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    println!("--- Meta setup ---");
    run_or_exit(|| {
        let config = Config {
            secrets: Secrets { app_id: cli.app_id.clone(), app_secret: cli.app_secret.clone() },
            short_lived_token: ShortLivedToken::new(cli.token.clone())
                .ok_or_else(|| "Short-lived token must not be empty".to_string())?,
            env_file: cli.env_file.clone(),
        };
        let graph = Client::new(cli.graph_url.clone(), &cli.api_version);

        setup::run(&graph, &config).map_err(describe)?;
        println!("\nAll set! The app is now connected to Instagram.");
        Ok(())
    });
}

/// Turns a setup failure into a message for the user.
fn describe(error: Error) -> String {
    match error {
        Error::Api { .. } => format!("Couldn't complete the request: {}", error),
        Error::NoPages => "No Facebook pages found. Make sure you are an admin of a page.".into(),
        Error::NoLinkedAccount => "Warning: no Instagram Business account is linked to your pages.\n\
            Make sure your Instagram account is a professional one \
            and is linked to a Facebook page."
            .into(),
        Error::Io(e) => format!("Couldn't save the credentials: {}", e),
        error => format!("Setup failed: {}", error),
    }
}

/// If `func` returns `Err`, prints an error message and terminates the current process.
fn run_or_exit<F: FnOnce() -> Result<(), String>>(func: F) {
    if let Err(message) = func() {
        eprintln!("{}", message);
        process::exit(1);
    }
}
