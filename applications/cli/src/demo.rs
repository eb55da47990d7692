//! Offline demo catalog

use playlister_core::{ActingUser, InMemoryPlaylistService, PlaylistId, Song, SongId};
use std::sync::Arc;

const CATALOG: &[(&str, &str, i32, &str)] = &[
    ("Fast Car", "Tracy Chapman", 1988, "AIhRXrHQ0Hk"),
    ("Running Up That Hill", "Kate Bush", 1985, "wp43OdtAAkM"),
    ("Dreams", "Fleetwood Mac", 1977, "mrZRURcb1cM"),
    ("Heroes", "David Bowie", 1977, "lXgkuM2NhYI"),
    ("Hey Ya!", "OutKast", 2003, "PWgvGjAhvIw"),
];

/// Fill an in-memory store with a small catalog and two playlists
///
/// Returns the store and the playlist to edit. The user also owns a playlist
/// named "Workout", so renaming to that name is rejected.
pub fn seed(user: &ActingUser) -> (Arc<InMemoryPlaylistService>, PlaylistId) {
    let store = Arc::new(InMemoryPlaylistService::new());
    let curator = ActingUser::new("curator", "curator@playlister.local");

    let ids: Vec<SongId> = CATALOG
        .iter()
        .map(|(title, artist, year, video)| {
            store.insert_song(
                Song::new(*title, *artist, *year)
                    .with_youtube_id(*video)
                    .owned_by(&curator),
            )
        })
        .collect();

    let playlist = store.create_playlist("Road Trip", &user.email, &ids);
    store.create_playlist("Workout", &user.email, &ids[3..]);

    (store, playlist)
}
