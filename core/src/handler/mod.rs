pub mod songs;

use actix_web::{web, HttpResponse, Scope};

/// Macro to convert a Result<T, E> into Result<HttpResponse>
///
/// Takes an expression that returns a Result, maps the Ok value to an HttpResponse::Ok().json(),
/// and wraps the entire result in Ok().
///
/// # Example
/// ```ignore
/// ok_json!(fetch_page(&service, filter, order, page))
/// // expands to:
/// // Ok(fetch_page(&service, filter, order, page).map(|data| HttpResponse::Ok().json(data))?)
/// ```
#[macro_export]
macro_rules! ok_json {
    ($expr:expr) => {
        Ok($expr.map(|result| actix_web::HttpResponse::Ok().json(result))?)
    };
}

/// Binds the catalog endpoints onto `scope`, which is expected to be mounted
/// at `/songs`.
///
/// Literal segments are registered before `/{year}` so they are not taken
/// for a year.
pub fn attach_song_routes(scope: Scope) -> Scope {
    scope
        .route("", web::get().to(songs::list_songs))
        .route("/search", web::get().to(songs::search_songs))
        .route("/sort", web::get().to(songs::sort_songs))
        .route("/popular/{period}", web::get().to(songs::popular_songs))
        .route("/{year}", web::get().to(songs::songs_by_year))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
