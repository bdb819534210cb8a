use crate::metadata::error::DatabaseError;
use crate::metadata::models::song::{NewSong, PopularSong, Song};
use crate::metadata::pool::DbPool;
use crate::metadata::schema::songs;
use crate::metadata::DB;
use crate::types::songs::{SortDirection, SortField};
use diesel::define_sql_function;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};

define_sql_function!(fn instr(haystack: Text, needle: Text) -> Integer);

const INSERT_CHUNK_SIZE: usize = 100;

type BoxedSongs<'a> = songs::BoxedQuery<'a, DB>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongFilter {
    All,
    Year(i32),
    /// Case-sensitive substring of title, artist, writer or album.
    Text(String),
}

impl SongFilter {
    fn apply<'a>(&'a self, query: BoxedSongs<'a>) -> BoxedSongs<'a> {
        match self {
            SongFilter::All => query,
            SongFilter::Year(year) => query.filter(songs::year.eq(*year)),
            SongFilter::Text(needle) => {
                let needle = needle.as_str();
                query.filter(
                    instr(songs::title, needle)
                        .gt(0)
                        .or(instr(songs::artist, needle).gt(0))
                        .or(instr(songs::writer, needle).gt(0))
                        .or(instr(songs::album, needle).gt(0)),
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SongOrder {
    #[default]
    Natural,
    By(SortField, SortDirection),
}

macro_rules! order_by {
    ($query:expr, $column:expr, $direction:expr) => {
        match $direction {
            SortDirection::Asc => $query.order($column.asc()),
            SortDirection::Desc => $query.order($column.desc()),
        }
    };
}

impl SongOrder {
    fn apply(self, query: BoxedSongs<'_>) -> BoxedSongs<'_> {
        let (field, direction) = match self {
            SongOrder::Natural => return query.order(songs::id.asc()),
            SongOrder::By(field, direction) => (field, direction),
        };

        let ordered = match field {
            SortField::Id => order_by!(query, songs::id, direction),
            SortField::Title => order_by!(query, songs::title, direction),
            SortField::Artist => order_by!(query, songs::artist, direction),
            SortField::Writer => order_by!(query, songs::writer, direction),
            SortField::Album => order_by!(query, songs::album, direction),
            SortField::Year => order_by!(query, songs::year, direction),
            SortField::PlaysJune => order_by!(query, songs::plays_june, direction),
            SortField::PlaysJuly => order_by!(query, songs::plays_july, direction),
            SortField::PlaysAugust => order_by!(query, songs::plays_august, direction),
        };

        ordered.then_order_by(songs::id.asc())
    }
}

#[derive(Debug, Clone)]
pub struct ListSongsQuery {
    pub filter: SongFilter,
    pub order: SongOrder,
    pub limit: i64,
    pub offset: i64,
}

pub trait SongService: Send + Sync {
    fn count(&self, filter: &SongFilter) -> Result<i64, DatabaseError>;
    fn find(&self, query: &ListSongsQuery) -> Result<Vec<Song>, DatabaseError>;
    fn most_played_overall(&self, limit: i64, offset: i64)
        -> Result<Vec<PopularSong>, DatabaseError>;
    fn insert_many(&self, songs: Vec<NewSong>) -> Result<usize, DatabaseError>;
}

pub struct SongServiceImpl {
    db_pool: DbPool,
}

impl SongServiceImpl {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }
}

impl SongService for SongServiceImpl {
    fn count(&self, filter: &SongFilter) -> Result<i64, DatabaseError> {
        let mut conn = self.db_pool.get()?;

        let total = filter
            .apply(songs::table.into_boxed())
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total)
    }

    fn find(&self, query: &ListSongsQuery) -> Result<Vec<Song>, DatabaseError> {
        let mut conn = self.db_pool.get()?;

        let db_query = query.filter.apply(songs::table.into_boxed());
        let results = query
            .order
            .apply(db_query)
            .limit(query.limit)
            .offset(query.offset)
            .load::<Song>(&mut conn)
            .map_err(DatabaseError::QueryError)?;

        Ok(results)
    }

    fn most_played_overall(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PopularSong>, DatabaseError> {
        let mut conn = self.db_pool.get()?;

        let sql = r#"
            SELECT
              id,
              title,
              artist,
              writer,
              album,
              year,
              plays_june,
              plays_july,
              plays_august,
              CAST(plays_june + plays_july + plays_august AS BIGINT) AS total_plays
            FROM songs
            ORDER BY total_plays DESC, id ASC
            LIMIT ? OFFSET ?
            "#;

        let results = diesel::sql_query(sql)
            .bind::<BigInt, _>(limit)
            .bind::<BigInt, _>(offset)
            .load::<PopularSong>(&mut conn)
            .map_err(DatabaseError::QueryError)?;

        Ok(results)
    }

    fn insert_many(&self, new_songs: Vec<NewSong>) -> Result<usize, DatabaseError> {
        let mut conn = self.db_pool.get()?;

        conn.transaction::<_, DatabaseError, _>(|conn| {
            let mut inserted = 0;
            for chunk in new_songs.chunks(INSERT_CHUNK_SIZE) {
                inserted += diesel::insert_into(songs::table)
                    .values(chunk)
                    .execute(conn)?;
            }
            Ok(inserted)
        })
    }
}
