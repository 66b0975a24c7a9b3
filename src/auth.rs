use crate::config::Config;
use crate::console;
use crate::error::{Error, Result};
use serde::Deserialize;
use urlencoding::encode;

const ACCOUNTS_BASE: &str = "https://accounts.spotify.com";

/// Permissions the run needs: create/modify private playlists and read the
/// user's own (including collaborative) playlists and saved library
const SCOPES: &str =
    "playlist-modify-private user-library-read playlist-read-private playlist-read-collaborative";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Run the authorization-code flow and return a bearer token.
/// The browser step is manual: the user opens the printed URL, approves the
/// scopes, and pastes the URL Spotify redirected them to.
pub fn authorize(config: &Config) -> Result<String> {
    let authorize_url = format!(
        "{ACCOUNTS_BASE}/authorize?client_id={}&response_type=code&redirect_uri={}&scope={}",
        encode(&config.client_id),
        encode(&config.redirect_uri),
        encode(SCOPES)
    );

    println!("Open this URL in your browser and authorize the application:");
    println!("{authorize_url}");

    let redirected = console::prompt_line("Paste the URL you were redirected to: ")?;
    let code = extract_code(&redirected)?;

    exchange_code(config, &code)
}

/// Pull the `code` query parameter out of the pasted redirect URL
fn extract_code(redirected_url: &str) -> Result<String> {
    redirected_url
        .split_once('?')
        .map(|(_, query)| query)
        .and_then(|query| {
            query
                .split('&')
                .find_map(|pair| pair.strip_prefix("code="))
        })
        .filter(|code| !code.is_empty())
        .map(|code| code.to_string())
        .ok_or_else(|| {
            Error::Auth("the pasted URL does not contain a 'code' parameter".to_string())
        })
}

/// Exchange the authorization code for an access token
fn exchange_code(config: &Config, code: &str) -> Result<String> {
    let agent = ureq::Agent::new();

    let response = agent
        .post(&format!("{ACCOUNTS_BASE}/api/token"))
        .send_form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
        ])
        .map_err(|e| Error::Auth(format!("token exchange failed: {e}")))?;

    let token: TokenResponse = response.into_json()?;
    Ok(token.access_token)
}
