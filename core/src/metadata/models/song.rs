use crate::metadata::schema::songs;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use serde::{Deserialize, Serialize};

/// A catalog entry as stored in the `songs` table.
///
/// Rows are written once by the seeder and never updated afterwards.
#[derive(
    Queryable,
    QueryableByName,
    Selectable,
    PartialEq,
    Eq,
    Debug,
    Clone,
    Serialize,
    Deserialize,
)]
#[serde(crate = "serde", rename_all = "camelCase")]
#[diesel(table_name = songs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Song {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub writer: String,
    pub album: String,
    pub year: i32,
    pub plays_june: i32,
    pub plays_july: i32,
    pub plays_august: i32,
}

/// A song together with its plays summed over every tracked month.
#[derive(QueryableByName, PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[serde(crate = "serde", rename_all = "camelCase")]
pub struct PopularSong {
    #[diesel(embed)]
    #[serde(flatten)]
    pub song: Song,

    #[diesel(sql_type = BigInt)]
    pub total_plays: i64,
}

#[derive(Insertable, PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[serde(crate = "serde")]
#[diesel(table_name = songs)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub writer: String,
    pub album: String,
    pub year: i32,
    pub plays_june: i32,
    pub plays_july: i32,
    pub plays_august: i32,
}
