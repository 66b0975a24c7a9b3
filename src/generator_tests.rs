// Tests for the seed aggregation, sampling, recommendation, and playlist
// building steps, run against a scripted mock of the Spotify API.

#[cfg(test)]
mod tests {
    use crate::client::MockSpotifyApi;
    use crate::error::Error;
    use crate::generator::{
        SEED_COUNT, TRACKS_PER_SEED, add_songs, common_seeds, create_playlist,
        fetch_playlist_tracks, recommend_songs, weighted_pick,
    };
    use crate::models::{
        Artist, ArtistRef, CreatedPlaylist, PlaylistItem, PlaylistTrack, RecommendedTrack,
        TrackPage,
    };
    use mockall::predicate::eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn item_with_artist(artist_id: &str) -> PlaylistItem {
        PlaylistItem {
            track: Some(PlaylistTrack {
                name: format!("Song by {artist_id}"),
                artists: vec![ArtistRef {
                    id: Some(artist_id.to_string()),
                    name: artist_id.to_string(),
                }],
            }),
        }
    }

    fn genres(labels: &[&str]) -> Artist {
        Artist {
            genres: labels.iter().map(|label| label.to_string()).collect(),
        }
    }

    fn counts_of(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs
            .iter()
            .map(|(key, count)| (key.to_string(), *count))
            .collect()
    }

    #[test]
    fn aggregation_counts_first_artist_per_occurrence() {
        // Tracks [A, B, A] with A=["pop"], B=["pop", "rock"]
        let items = vec![
            item_with_artist("A"),
            item_with_artist("B"),
            item_with_artist("A"),
        ];

        let mut api = MockSpotifyApi::new();
        // Each distinct artist is resolved exactly once; repeats hit the cache
        api.expect_artist()
            .with(eq("A"))
            .times(1)
            .returning(|_| Ok(genres(&["pop"])));
        api.expect_artist()
            .with(eq("B"))
            .times(1)
            .returning(|_| Ok(genres(&["pop", "rock"])));

        let counts = common_seeds(&api, &items).unwrap();

        assert_eq!(counts.artists, counts_of(&[("A", 2), ("B", 1)]));
        // A's genre list is re-counted per occurrence: 2x["pop"] + 1x["pop","rock"]
        assert_eq!(counts.genres, counts_of(&[("pop", 3), ("rock", 1)]));
    }

    #[test]
    fn aggregation_skips_entries_without_track_or_artist_id() {
        let items = vec![
            // Placeholder entry with no track payload
            PlaylistItem { track: None },
            // Track with no artists at all
            PlaylistItem {
                track: Some(PlaylistTrack {
                    name: "Orphan".to_string(),
                    artists: vec![],
                }),
            },
            // Locally uploaded file: artist present but without an id
            PlaylistItem {
                track: Some(PlaylistTrack {
                    name: "Local File".to_string(),
                    artists: vec![ArtistRef {
                        id: None,
                        name: "Unknown".to_string(),
                    }],
                }),
            },
        ];

        let mut api = MockSpotifyApi::new();
        api.expect_artist().times(0);

        let counts = common_seeds(&api, &items).unwrap();
        assert!(counts.artists.is_empty());
        assert!(counts.genres.is_empty());
    }

    #[test]
    fn aggregation_with_genreless_artist_counts_artist_only() {
        let items = vec![item_with_artist("A"), item_with_artist("A")];

        let mut api = MockSpotifyApi::new();
        api.expect_artist()
            .with(eq("A"))
            .times(1)
            .returning(|_| Ok(genres(&[])));

        let counts = common_seeds(&api, &items).unwrap();
        assert_eq!(counts.artists, counts_of(&[("A", 2)]));
        assert!(counts.genres.is_empty());
    }

    #[test]
    fn empty_playlist_aggregates_to_empty_counts_and_sampling_fails() {
        let api = MockSpotifyApi::new();
        let counts = common_seeds(&api, &[]).unwrap();
        assert!(counts.genres.is_empty());
        assert!(counts.artists.is_empty());

        let mut rng = StdRng::seed_from_u64(7);
        let result = weighted_pick(&counts.genres, "genre", &mut rng);
        assert!(matches!(result, Err(Error::InsufficientSeeds("genre"))));
    }

    #[test]
    fn weighted_pick_returns_exactly_five_from_mapping() {
        let counts = counts_of(&[("pop", 3), ("rock", 1), ("jazz", 2)]);
        let mut rng = StdRng::seed_from_u64(42);

        let picks = weighted_pick(&counts, "genre", &mut rng).unwrap();
        assert_eq!(picks.len(), SEED_COUNT);
        for pick in &picks {
            assert!(counts.contains_key(pick));
        }
    }

    #[test]
    fn weighted_pick_single_entry_returns_it_five_times() {
        let counts = counts_of(&[("pop", 1)]);
        let mut rng = StdRng::seed_from_u64(42);

        let picks = weighted_pick(&counts, "genre", &mut rng).unwrap();
        assert_eq!(picks, vec!["pop"; SEED_COUNT]);
    }

    #[test]
    fn weighted_pick_fails_on_all_zero_weights() {
        let counts = counts_of(&[("pop", 0), ("rock", 0)]);
        let mut rng = StdRng::seed_from_u64(42);

        let result = weighted_pick(&counts, "artist", &mut rng);
        assert!(matches!(result, Err(Error::InsufficientSeeds("artist"))));
    }

    #[test]
    fn recommendations_are_paired_positionally_and_deduplicated() {
        let seed_genres: Vec<String> = (0..5).map(|i| format!("genre{i}")).collect();
        let seed_artists: Vec<String> = (0..5).map(|i| format!("artist{i}")).collect();

        let mut api = MockSpotifyApi::new();
        for i in 0..5 {
            api.expect_recommendations()
                .withf(move |genre, artist, limit| {
                    genre == format!("genre{i}")
                        && artist == format!("artist{i}")
                        && *limit == TRACKS_PER_SEED
                })
                .times(1)
                .returning(|_, _, _| {
                    // Every pair returns the same two tracks; deduplication
                    // must collapse them to two URIs total
                    Ok(vec![
                        RecommendedTrack {
                            uri: "spotify:track:one".to_string(),
                        },
                        RecommendedTrack {
                            uri: "spotify:track:two".to_string(),
                        },
                    ])
                });
        }

        let uris = recommend_songs(&api, &seed_genres, &seed_artists).unwrap();
        assert_eq!(uris.len(), 2);

        let unique: HashSet<&String> = uris.iter().collect();
        assert_eq!(unique.len(), uris.len());
    }

    #[test]
    fn recommendation_output_never_exceeds_fifty_unique_uris() {
        let seed_genres: Vec<String> = (0..5).map(|i| format!("genre{i}")).collect();
        let seed_artists: Vec<String> = (0..5).map(|i| format!("artist{i}")).collect();

        let mut api = MockSpotifyApi::new();
        api.expect_recommendations()
            .times(5)
            .returning(|genre, _, limit| {
                Ok((0..limit)
                    .map(|n| RecommendedTrack {
                        uri: format!("spotify:track:{genre}-{n}"),
                    })
                    .collect())
            });

        let uris = recommend_songs(&api, &seed_genres, &seed_artists).unwrap();
        assert_eq!(uris.len(), 50);

        let unique: HashSet<&String> = uris.iter().collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn pair_with_no_matches_contributes_nothing_without_failing() {
        let seed_genres = vec!["ambient".to_string()];
        let seed_artists = vec!["A".to_string()];

        let mut api = MockSpotifyApi::new();
        api.expect_recommendations()
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let uris = recommend_songs(&api, &seed_genres, &seed_artists).unwrap();
        assert!(uris.is_empty());
    }

    #[test]
    fn fetch_follows_pagination_until_exhausted() {
        let mut api = MockSpotifyApi::new();
        api.expect_playlist_tracks()
            .with(eq("pl1"), eq(0))
            .times(1)
            .returning(|_, _| {
                Ok(TrackPage {
                    items: vec![item_with_artist("A"), item_with_artist("B")],
                    next_offset: Some(2),
                })
            });
        api.expect_playlist_tracks()
            .with(eq("pl1"), eq(2))
            .times(1)
            .returning(|_, _| {
                Ok(TrackPage {
                    items: vec![item_with_artist("C")],
                    next_offset: None,
                })
            });

        let items = fetch_playlist_tracks(&api, "pl1").unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn fetch_tolerates_an_empty_playlist() {
        let mut api = MockSpotifyApi::new();
        api.expect_playlist_tracks()
            .with(eq("pl1"), eq(0))
            .times(1)
            .returning(|_, _| {
                Ok(TrackPage {
                    items: vec![],
                    next_offset: None,
                })
            });

        let items = fetch_playlist_tracks(&api, "pl1").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn create_playlist_returns_id_and_shareable_url() {
        let mut api = MockSpotifyApi::new();
        api.expect_current_user_id()
            .times(1)
            .returning(|| Ok("user1".to_string()));
        api.expect_create_playlist()
            .with(eq("user1"), eq("My Mix"))
            .times(1)
            .returning(|_, _| {
                Ok(CreatedPlaylist {
                    id: "abc123".to_string(),
                })
            });

        let (id, url) = create_playlist(&api, "My Mix").unwrap();
        assert_eq!(id, "abc123");
        assert_eq!(url, "https://open.spotify.com/playlist/abc123");
    }

    #[test]
    fn adding_an_empty_uri_list_is_a_successful_noop() {
        let mut api = MockSpotifyApi::new();
        api.expect_add_tracks().times(0);

        add_songs(&api, "abc123", &[]).unwrap();
    }

    #[test]
    fn adding_uris_delegates_to_the_service() {
        let uris = vec![
            "spotify:track:one".to_string(),
            "spotify:track:two".to_string(),
        ];

        let mut api = MockSpotifyApi::new();
        api.expect_add_tracks()
            .withf(|playlist_id, uris| playlist_id == "abc123" && uris.len() == 2)
            .times(1)
            .returning(|_, _| Ok(()));

        add_songs(&api, "abc123", &uris).unwrap();
    }
}
