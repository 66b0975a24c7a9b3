use crate::error::{Error, Result};
use crate::models::{
    Artist, ApiErrorBody, CreatedPlaylist, CurrentUser, PlaylistsPage, RawTrackPage,
    RecommendedTrack, Recommendations, TrackPage,
};
use serde::de::DeserializeOwned;
use ureq::Agent;
use urlencoding::encode;

#[cfg(test)]
use mockall::automock;

const API_BASE: &str = "https://api.spotify.com/v1";

/// Spotify caps playlist-track pages at 100 items
const TRACK_PAGE_LIMIT: u32 = 100;
/// Spotify caps the playlist listing at 50 per page
const PLAYLIST_LIST_LIMIT: u32 = 50;

/// The narrow slice of the Spotify Web API this program consumes.
/// Everything downstream of authentication goes through this trait so tests
/// can substitute a scripted fake for the live service.
#[cfg_attr(test, automock)]
pub trait SpotifyApi {
    /// List the current user's playlists (first page)
    fn current_user_playlists(&self) -> Result<PlaylistsPage>;
    /// Fetch one page of a playlist's tracks starting at `offset`
    fn playlist_tracks(&self, playlist_id: &str, offset: u32) -> Result<TrackPage>;
    /// Fetch an artist's metadata, including its genre list
    fn artist(&self, artist_id: &str) -> Result<Artist>;
    /// Request up to `limit` recommended tracks for one genre/artist seed pair
    fn recommendations(
        &self,
        seed_genre: &str,
        seed_artist: &str,
        limit: u32,
    ) -> Result<Vec<RecommendedTrack>>;
    /// Fetch the current user's identifier
    fn current_user_id(&self) -> Result<String>;
    /// Create a private playlist owned by `user_id`
    fn create_playlist(&self, user_id: &str, name: &str) -> Result<CreatedPlaylist>;
    /// Append tracks to a playlist by URI
    fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()>;
}

/// A simple blocking Spotify Web API client using bearer-token authentication
pub struct SpotifyClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl SpotifyClient {
    /// Create a new client from an access token obtained by the auth flow
    pub fn new(token: String) -> Self {
        let agent = Agent::new();

        SpotifyClient {
            agent,
            base_url: API_BASE.to_string(),
            token,
        }
    }

    fn get<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path_and_query);

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .call()
            .map_err(into_api_error)?;

        Ok(response.into_json()?)
    }

    fn post<T: DeserializeOwned>(&self, path: &str, body: serde_json::Value) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .send_json(body)
            .map_err(into_api_error)?;

        Ok(response.into_json()?)
    }
}

impl SpotifyApi for SpotifyClient {
    fn current_user_playlists(&self) -> Result<PlaylistsPage> {
        self.get(&format!("/me/playlists?limit={PLAYLIST_LIST_LIMIT}"))
    }

    fn playlist_tracks(&self, playlist_id: &str, offset: u32) -> Result<TrackPage> {
        let page: RawTrackPage = self.get(&format!(
            "/playlists/{}/tracks?offset={}&limit={}",
            encode(playlist_id),
            offset,
            TRACK_PAGE_LIMIT
        ))?;

        // Translate the service's next-page URL into the offset of that page
        let next_offset = page.next.as_ref().map(|_| offset + page.items.len() as u32);

        Ok(TrackPage {
            items: page.items,
            next_offset,
        })
    }

    fn artist(&self, artist_id: &str) -> Result<Artist> {
        self.get(&format!("/artists/{}", encode(artist_id)))
    }

    fn recommendations(
        &self,
        seed_genre: &str,
        seed_artist: &str,
        limit: u32,
    ) -> Result<Vec<RecommendedTrack>> {
        let response: Recommendations = self.get(&format!(
            "/recommendations?seed_genres={}&seed_artists={}&limit={}",
            encode(seed_genre),
            encode(seed_artist),
            limit
        ))?;

        Ok(response.tracks)
    }

    fn current_user_id(&self) -> Result<String> {
        let user: CurrentUser = self.get("/me")?;
        Ok(user.id)
    }

    fn create_playlist(&self, user_id: &str, name: &str) -> Result<CreatedPlaylist> {
        self.post(
            &format!("/users/{}/playlists", encode(user_id)),
            serde_json::json!({ "name": name, "public": false }),
        )
    }

    fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        let _: serde_json::Value = self.post(
            &format!("/playlists/{}/tracks", encode(playlist_id)),
            serde_json::json!({ "uris": uris }),
        )?;
        Ok(())
    }
}

/// Turn a ureq error into our taxonomy, pulling the message out of Spotify's
/// JSON error body when one is present
fn into_api_error(e: ureq::Error) -> Error {
    match e {
        ureq::Error::Status(status, response) => {
            let body = response.into_string().unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            Error::Api { status, message }
        }
        other => Error::Http(Box::new(other)),
    }
}
