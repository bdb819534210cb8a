use ::tracing::info;
use serde::Deserialize;
use songbook_core::metadata::error::DatabaseError;
use songbook_core::metadata::models::song::NewSong;
use songbook_core::metadata::pool::DbPool;
use songbook_core::metadata::services::song::{SongFilter, SongService, SongServiceImpl};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid record for {title:?}: {reason}")]
    InvalidRecord { title: String, reason: String },

    #[error(transparent)]
    DatabaseError(#[from] DatabaseError),
}

/// One row of the catalog export.
#[derive(Debug, Deserialize)]
struct SongRecord {
    #[serde(rename = "Song")]
    title: String,
    #[serde(rename = "Artist")]
    artist: String,
    #[serde(rename = "Writer")]
    writer: String,
    #[serde(rename = "Album")]
    album: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Plays - June")]
    plays_june: u32,
    #[serde(rename = "Plays - July")]
    plays_july: u32,
    #[serde(rename = "Plays - August")]
    plays_august: u32,
}

impl TryFrom<SongRecord> for NewSong {
    type Error = SeedError;

    fn try_from(record: SongRecord) -> Result<Self, Self::Error> {
        let plays = |value: u32| {
            i32::try_from(value).map_err(|_| SeedError::InvalidRecord {
                title: record.title.clone(),
                reason: format!("play count {value} is out of range"),
            })
        };

        Ok(NewSong {
            plays_june: plays(record.plays_june)?,
            plays_july: plays(record.plays_july)?,
            plays_august: plays(record.plays_august)?,
            title: record.title.clone(),
            artist: record.artist,
            writer: record.writer,
            album: record.album,
            year: record.year,
        })
    }
}

/// Parses a comma-separated export with a header row. Fields are trimmed.
pub fn read_songs<R: Read>(reader: R) -> Result<Vec<NewSong>, SeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<SongRecord>()
        .map(|record| NewSong::try_from(record?))
        .collect()
}

/// Loads `csv_path` into the catalog. An already populated catalog is left
/// alone unless `force` is set. Returns the number of songs inserted.
pub fn seed_database(db_pool: &DbPool, csv_path: &Path, force: bool) -> Result<usize, SeedError> {
    let song_service = SongServiceImpl::new(db_pool.clone());

    let song_count = song_service.count(&SongFilter::All)?;
    if song_count > 0 && !force {
        info!(
            "Found {} existing songs in database. Skipping seed from {}",
            song_count,
            csv_path.display()
        );
        return Ok(0);
    }

    info!("Seeding songs from {}", csv_path.display());
    let songs = read_songs(File::open(csv_path)?)?;
    let inserted = song_service.insert_many(songs)?;
    info!("Inserted {} songs", inserted);

    Ok(inserted)
}
