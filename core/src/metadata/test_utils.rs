use crate::metadata::models::song::NewSong;
use crate::metadata::pool::DbPool;

/// Creates a fresh in-memory database with the schema applied.
pub fn setup_test_database() -> DbPool {
    // Every in-memory connection is its own database, so the pool holds one.
    let db_pool = crate::metadata::pool::establish_connection(":memory:".to_string(), 1)
        .expect("Failed to create test DB pool");

    crate::metadata::utils::init_db(&db_pool).expect("Failed to run test migrations");

    db_pool
}

fn new_song(
    title: &str,
    artist: &str,
    writer: &str,
    album: &str,
    year: i32,
    plays: [i32; 3],
) -> NewSong {
    NewSong {
        title: title.to_string(),
        artist: artist.to_string(),
        writer: writer.to_string(),
        album: album.to_string(),
        year,
        plays_june: plays[0],
        plays_july: plays[1],
        plays_august: plays[2],
    }
}

/// The six songs every store and handler test works against, ids 1..=6 in order.
pub fn sample_songs() -> Vec<NewSong> {
    vec![
        new_song(
            "Anti-Hero",
            "Taylor Swift",
            "Taylor Swift, Jack Antonoff",
            "Midnights",
            2022,
            [300, 250, 200],
        ),
        new_song(
            "Flowers",
            "Miley Cyrus",
            "Miley Cyrus, Gregory Hein, Michael Pollack",
            "Endless Summer Vacation",
            2023,
            [500, 100, 50],
        ),
        new_song(
            "Kill Bill",
            "SZA",
            "Solana Rowe, Rob Bisel, Carter Lang",
            "SOS",
            2022,
            [100, 400, 100],
        ),
        new_song(
            "Vampire",
            "Olivia Rodrigo",
            "Olivia Rodrigo, Dan Nigro",
            "Guts",
            2023,
            [50, 150, 600],
        ),
        new_song(
            "As It Was",
            "Harry Styles",
            "Harry Styles, Tyler Johnson, Kid Harpoon",
            "Harry's House",
            2022,
            [200, 200, 200],
        ),
        new_song(
            "Cruel Summer",
            "Taylor Swift",
            "Taylor Swift, Jack Antonoff, Annie Clark",
            "Lover",
            2019,
            [400, 300, 20],
        ),
    ]
}

/// Seeds the test database with [`sample_songs`].
pub fn seed_test_database(db_pool: &DbPool) {
    use crate::metadata::services::song::{SongService, SongServiceImpl};

    let song_service = SongServiceImpl::new(db_pool.clone());
    song_service
        .insert_many(sample_songs())
        .expect("Failed to seed test songs");
}
