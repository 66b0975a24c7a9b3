use crate::client::SpotifyApi;
use crate::error::Result;
use crate::models::PlaylistItem;
use std::collections::HashMap;

/// Occurrence counts gathered from one pass over a playlist's tracks
#[derive(Debug, Default)]
pub struct SeedCounts {
    /// genre label -> number of tracks whose primary artist carries it
    pub genres: HashMap<String, u32>,
    /// artist id -> number of tracks it is the primary artist of
    pub artists: HashMap<String, u32>,
}

/// Count genre and primary-artist occurrences across the given tracks.
///
/// Attribution rule: only the first listed artist of each track is counted,
/// a deliberate simplification that keeps one track from spreading weight
/// over every featured guest. Each occurrence of an artist re-counts its full
/// genre list, so genres are weighted by plays, not by distinct artists.
///
/// Entries without track data or without a first artist carrying an id
/// (locally uploaded files) are skipped entirely. Each distinct artist is
/// looked up at most once per pass; repeats hit the in-memory cache.
pub fn common_seeds(api: &impl SpotifyApi, items: &[PlaylistItem]) -> Result<SeedCounts> {
    let mut counts = SeedCounts::default();
    let mut genre_cache: HashMap<String, Vec<String>> = HashMap::new();

    for item in items {
        let Some(track) = &item.track else {
            continue;
        };
        let Some(artist_id) = track.artists.first().and_then(|a| a.id.as_deref()) else {
            continue;
        };

        *counts.artists.entry(artist_id.to_string()).or_insert(0) += 1;

        if !genre_cache.contains_key(artist_id) {
            let artist = api.artist(artist_id)?;
            genre_cache.insert(artist_id.to_string(), artist.genres);
        }

        // Artists with zero genres contribute to the artist count only
        for genre in &genre_cache[artist_id] {
            *counts.genres.entry(genre.clone()).or_insert(0) += 1;
        }
    }

    Ok(counts)
}
