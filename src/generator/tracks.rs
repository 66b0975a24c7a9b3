use crate::client::SpotifyApi;
use crate::error::Result;
use crate::models::PlaylistItem;

/// Fetch the complete track listing of a playlist, following pagination until
/// the service reports no further page. An empty playlist yields an empty
/// vector; any request failure propagates to the caller unretried.
pub fn fetch_playlist_tracks(api: &impl SpotifyApi, playlist_id: &str) -> Result<Vec<PlaylistItem>> {
    let mut items = Vec::new();
    let mut offset = Some(0);

    while let Some(current) = offset {
        let page = api.playlist_tracks(playlist_id, current)?;
        if page.items.is_empty() {
            // A page with no items cannot advance the offset; stop rather
            // than loop on a malformed cursor
            break;
        }
        items.extend(page.items);
        offset = page.next_offset;
    }

    Ok(items)
}
