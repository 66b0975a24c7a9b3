use crate::client::SpotifyApi;
use crate::error::Result;
use std::collections::HashSet;

/// How many tracks each seed pair asks for
pub const TRACKS_PER_SEED: u32 = 10;

/// Request recommendations for each positional (genre, artist) seed pair and
/// collect the returned track URIs, deduplicated across pairs. A pair that
/// matches nothing contributes no URIs and is not an error. With
/// [`crate::generator::SEED_COUNT`] pairs at [`TRACKS_PER_SEED`] tracks each,
/// the result never exceeds 50 unique URIs.
pub fn recommend_songs(
    api: &impl SpotifyApi,
    seed_genres: &[String],
    seed_artists: &[String],
) -> Result<Vec<String>> {
    let mut track_uris = HashSet::new();

    for (genre, artist) in seed_genres.iter().zip(seed_artists) {
        let tracks = api.recommendations(genre, artist, TRACKS_PER_SEED)?;
        track_uris.extend(tracks.into_iter().map(|track| track.uri));
    }

    Ok(track_uris.into_iter().collect())
}
