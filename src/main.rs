use anyhow::Result;
use clap::Parser;

mod auth;
mod client;
mod config;
mod console;
mod error;
mod generator;
mod models;

#[cfg(test)]
mod generator_tests;

use crate::client::{SpotifyApi, SpotifyClient};
use crate::config::load_config;
use crate::generator::{
    add_songs, common_seeds, create_playlist, fetch_playlist_tracks, recommend_songs,
    weighted_pick,
};

#[derive(Parser)]
#[command(name = "similar-playlist")]
#[command(about = "Builds a new private Spotify playlist from tracks similar to one of yours")]
#[command(version)]
struct Args {
    /// 1-based index of the source playlist (skips the interactive prompt)
    #[arg(short = 'p', long = "playlist")]
    playlist: Option<usize>,

    /// Name for the generated playlist (skips the interactive prompt)
    #[arg(short = 'n', long = "name")]
    name: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from .env
    let config = load_config()?;

    // Obtain a bearer token and initialize the API client
    let token = auth::authorize(&config)?;
    let client = SpotifyClient::new(token);

    // List the user's playlists and take a selection
    let playlists = client.current_user_playlists()?.items;
    if playlists.is_empty() {
        return Err(anyhow::anyhow!("no playlists found for the current user"));
    }

    for (i, playlist) in playlists.iter().enumerate() {
        println!("{}: {} - ({} songs)", i + 1, playlist.name, playlist.tracks.total);
    }

    let choice = match args.playlist {
        Some(index) => console::check_selection(index, playlists.len())?,
        None => console::prompt_selection(
            "Choose the number of the playlist you want to use: ",
            playlists.len(),
        )?,
    };
    let chosen = &playlists[choice - 1];
    println!("You chose playlist {}", chosen.name);

    // Fetch every track of the chosen playlist
    println!("\nFetching tracks...");
    let items = fetch_playlist_tracks(&client, &chosen.id)?;
    println!("Fetched {} tracks total.", items.len());

    // Show a small sample of what we are working from
    for item in items.iter().take(3) {
        if let Some(track) = &item.track {
            let artists: Vec<&str> = track.artists.iter().map(|a| a.name.as_str()).collect();
            println!("- {} by {}", track.name, artists.join(", "));
        }
    }

    // Count genre and primary-artist occurrences across the playlist
    println!("\nAggregating seed data...");
    let counts = common_seeds(&client, &items)?;
    println!(
        "Found {} distinct artists and {} distinct genres.",
        counts.artists.len(),
        counts.genres.len()
    );

    // Draw the weighted seed samples
    let mut rng = rand::thread_rng();
    let rand_genres = weighted_pick(&counts.genres, "genre", &mut rng)?;
    let rand_artists = weighted_pick(&counts.artists, "artist", &mut rng)?;
    println!("Seed genres: {}", rand_genres.join(", "));

    // Collect recommended tracks for each seed pair
    println!("\nRequesting recommendations...");
    let track_uris = recommend_songs(&client, &rand_genres, &rand_artists)?;
    println!("Collected {} unique recommended tracks.", track_uris.len());

    // Create the playlist and fill it
    let playlist_name = match args.name {
        Some(name) => name,
        None => console::prompt_line("Enter the name of your playlist: ")?,
    };
    let (playlist_id, playlist_url) = create_playlist(&client, &playlist_name)?;
    add_songs(&client, &playlist_id, &track_uris)?;

    println!("\nYour playlist: {playlist_name} has been created!");
    println!("To access your playlist, check your Spotify library or open this link.");
    println!("{playlist_url}");

    Ok(())
}
