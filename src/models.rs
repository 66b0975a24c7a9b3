use serde::Deserialize;

/// First page of the current user's playlists from /me/playlists
#[derive(Debug, Deserialize)]
pub struct PlaylistsPage {
    pub items: Vec<PlaylistSummary>,
}

/// One playlist as listed for selection
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub tracks: TrackTotals,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackTotals {
    pub total: u32,
}

/// Raw page shape from /playlists/{id}/tracks
#[derive(Debug, Deserialize)]
pub struct RawTrackPage {
    pub items: Vec<PlaylistItem>,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
}

/// Offset-based page handed to the fetch loop
#[derive(Debug)]
pub struct TrackPage {
    pub items: Vec<PlaylistItem>,
    pub next_offset: Option<u32>,
}

/// One entry of a playlist; `track` is null for service-side placeholders
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrack {
    pub name: String,
    /// Ordered; the first entry is the primary artist
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

/// Artist reference embedded in a track; locally uploaded files carry no id
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
}

/// Artist metadata, reduced to the genre labels the aggregator consumes
#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Response structure for the /recommendations API call
#[derive(Debug, Deserialize)]
pub struct Recommendations {
    pub tracks: Vec<RecommendedTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendedTrack {
    pub uri: String,
}

/// Response structure for the /me API call
#[derive(Debug, Deserialize)]
pub struct CurrentUser {
    pub id: String,
}

/// Response structure for the create-playlist API call
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPlaylist {
    pub id: String,
}

/// Error body Spotify attaches to failed calls
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}
