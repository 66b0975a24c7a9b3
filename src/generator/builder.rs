use crate::client::SpotifyApi;
use crate::error::Result;

/// Create a new private playlist for the authenticated user and return its
/// id together with a shareable web URL
pub fn create_playlist(api: &impl SpotifyApi, name: &str) -> Result<(String, String)> {
    let user_id = api.current_user_id()?;
    let playlist = api.create_playlist(&user_id, name)?;
    let url = format!("https://open.spotify.com/playlist/{}", playlist.id);
    Ok((playlist.id, url))
}

/// Append tracks to a playlist. An empty URI list is a no-op that still
/// succeeds, leaving the playlist as created. The output of a recommendation
/// round is capped at 50 URIs, within the service's per-call limit, so no
/// chunking is needed.
pub fn add_songs(api: &impl SpotifyApi, playlist_id: &str, track_uris: &[String]) -> Result<()> {
    if track_uris.is_empty() {
        return Ok(());
    }
    api.add_tracks(playlist_id, track_uris)
}
