use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SongParamError {
    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),
}

/// Columns a listing may be ordered by.
///
/// Parsed from the caller's `sortBy` value; names outside this set never
/// reach the query layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Artist,
    Writer,
    Album,
    Year,
    PlaysJune,
    PlaysJuly,
    PlaysAugust,
}

impl FromStr for SortField {
    type Err = SongParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "artist" => Ok(SortField::Artist),
            "writer" => Ok(SortField::Writer),
            "album" => Ok(SortField::Album),
            "year" => Ok(SortField::Year),
            "playsJune" | "plays_june" => Ok(SortField::PlaysJune),
            "playsJuly" | "plays_july" => Ok(SortField::PlaysJuly),
            "playsAugust" | "plays_august" => Ok(SortField::PlaysAugust),
            other => Err(SongParamError::InvalidSortField(other.to_string())),
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Artist => "artist",
            SortField::Writer => "writer",
            SortField::Album => "album",
            SortField::Year => "year",
            SortField::PlaysJune => "playsJune",
            SortField::PlaysJuly => "playsJuly",
            SortField::PlaysAugust => "playsAugust",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Anything other than `desc` sorts ascending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Which play counts drive a popularity ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    June,
    July,
    August,
    All,
}

impl Period {
    /// The month column to rank by, `None` for the summed ranking.
    pub fn plays_field(&self) -> Option<SortField> {
        match self {
            Period::June => Some(SortField::PlaysJune),
            Period::July => Some(SortField::PlaysJuly),
            Period::August => Some(SortField::PlaysAugust),
            Period::All => None,
        }
    }
}

impl FromStr for Period {
    type Err = SongParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "june" => Ok(Period::June),
            "july" => Ok(Period::July),
            "august" => Ok(Period::August),
            "all" => Ok(Period::All),
            _ => Err(SongParamError::InvalidPeriod(s.to_string())),
        }
    }
}

pub fn parse_year(value: &str) -> Result<i32, SongParamError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| SongParamError::InvalidYear(value.to_string()))
}
