use crate::error::ApiError;
use crate::metadata::models::song::Song;
use crate::metadata::services::song::{ListSongsQuery, SongFilter, SongOrder, SongService};
use crate::ok_json;
use crate::pagination::{PageRequest, PaginationEnvelope};
use crate::types::songs::{parse_year, Period, SortDirection, SortField};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

// Query values stay strings so that a malformed limit or offset falls back to
// its default instead of failing extraction.

#[derive(Deserialize, Debug, Default)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationParams {
    pub fn page(&self) -> PageRequest {
        PageRequest::from_params(self.limit.as_deref(), self.offset.as_deref())
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(flatten)]
    pub page: PaginationParams,
}

#[derive(Deserialize, Debug, Default)]
pub struct SortParams {
    #[serde(rename = "sortBy", alias = "sort_by")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder", alias = "sort_order")]
    pub sort_order: Option<String>,
    #[serde(flatten)]
    pub page: PaginationParams,
}

type SongServiceData = web::Data<Box<dyn SongService>>;

fn fetch_page(
    song_service: &dyn SongService,
    filter: SongFilter,
    order: SongOrder,
    page: PageRequest,
) -> Result<PaginationEnvelope<Song>, ApiError> {
    let total = song_service.count(&filter)?;
    let songs = song_service.find(&ListSongsQuery {
        filter,
        order,
        limit: page.limit,
        offset: page.offset,
    })?;

    Ok(page.envelope(total, songs))
}

/// GET /songs - every song in catalog order
pub async fn list_songs(
    query: web::Query<PaginationParams>,
    song_service: SongServiceData,
) -> Result<HttpResponse, ApiError> {
    ok_json!(fetch_page(
        song_service.get_ref().as_ref(),
        SongFilter::All,
        SongOrder::Natural,
        query.page(),
    ))
}

/// GET /songs/{year} - songs released in `year`
pub async fn songs_by_year(
    path: web::Path<String>,
    query: web::Query<PaginationParams>,
    song_service: SongServiceData,
) -> Result<HttpResponse, ApiError> {
    let year = parse_year(&path)?;

    ok_json!(fetch_page(
        song_service.get_ref().as_ref(),
        SongFilter::Year(year),
        SongOrder::Natural,
        query.page(),
    ))
}

/// GET /songs/popular/{period} - most played songs for a month, or summed
/// over all months when `period` is `all`
///
/// The page count is always derived from the whole catalog.
pub async fn popular_songs(
    path: web::Path<String>,
    query: web::Query<PaginationParams>,
    song_service: SongServiceData,
) -> Result<HttpResponse, ApiError> {
    let period: Period = path.parse()?;
    let page = query.page();

    match period.plays_field() {
        Some(field) => ok_json!(fetch_page(
            song_service.get_ref().as_ref(),
            SongFilter::All,
            SongOrder::By(field, SortDirection::Desc),
            page,
        )),
        None => {
            let total = song_service.count(&SongFilter::All)?;
            let songs = song_service.most_played_overall(page.limit, page.offset)?;
            Ok(HttpResponse::Ok().json(page.envelope(total, songs)))
        }
    }
}

/// GET /songs/search?q= - case-sensitive match on title, artist, writer or album
pub async fn search_songs(
    query: web::Query<SearchParams>,
    song_service: SongServiceData,
) -> Result<HttpResponse, ApiError> {
    let page = query.page.page();
    let needle = query.q.clone().unwrap_or_default();
    tracing::debug!("Searching songs for {:?}", needle);

    ok_json!(fetch_page(
        song_service.get_ref().as_ref(),
        SongFilter::Text(needle),
        SongOrder::Natural,
        page,
    ))
}

/// GET /songs/sort?sortBy=&sortOrder= - whole catalog ordered by one column
///
/// `sortBy` defaults to `id`; `sortOrder` is ascending unless it is `desc`.
pub async fn sort_songs(
    query: web::Query<SortParams>,
    song_service: SongServiceData,
) -> Result<HttpResponse, ApiError> {
    let page = query.page.page();
    let field = match query.sort_by.as_deref() {
        Some(name) => name.parse::<SortField>()?,
        None => SortField::Id,
    };
    let direction = SortDirection::from_param(query.sort_order.as_deref());

    ok_json!(fetch_page(
        song_service.get_ref().as_ref(),
        SongFilter::All,
        SongOrder::By(field, direction),
        page,
    ))
}
