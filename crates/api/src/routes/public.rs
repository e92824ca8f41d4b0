//! Public site content.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contact, layouts, pages, publications, works};
use crate::state::AppState;

/// ```text
/// GET  /works              -> list_works (?search=&category=&page=)
/// GET  /works/{id}         -> get_work
/// GET  /publications       -> list_publications
/// GET  /pages/{id}         -> get_page
/// GET  /layouts            -> list_layouts (?media=image|video)
/// POST /contact            -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/works", get(works::list_works))
        .route("/works/{id}", get(works::get_work))
        .route("/publications", get(publications::list_publications))
        .route("/pages/{id}", get(pages::get_page))
        .route("/layouts", get(layouts::list_layouts))
        .route("/contact", post(contact::submit))
}
