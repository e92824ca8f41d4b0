//! Admin content management. Every handler requires a session.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::uploads::UPLOAD_BODY_LIMIT;
use crate::handlers::{editor, pages, publications, uploads, works};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /works                          -> admin_list_works (?search=&category=)
/// DELETE /works/{id}                     -> delete_work (?confirm=true)
///
/// GET    /editor                         -> get_session
/// POST   /editor/new                     -> new_work
/// POST   /editor/open/{id}               -> open_work
/// POST   /editor/close                   -> close
/// POST   /editor/commands                -> apply_command
/// POST   /editor/save                    -> save
/// POST   /editor/blocks/{block_id}/media -> upload_block_media (multipart)
///
/// POST   /uploads                        -> upload (multipart)
///
/// GET    /publications                   -> admin_list_publications
/// POST   /publications                   -> create_publication
/// PUT    /publications/{id}              -> update_publication
/// DELETE /publications/{id}              -> delete_publication
///
/// PUT    /pages/{id}                     -> upsert_page
/// ```
pub fn router() -> Router<AppState> {
    let upload_routes = Router::new()
        .route("/uploads", post(uploads::upload))
        .route(
            "/editor/blocks/{block_id}/media",
            post(editor::upload_block_media),
        )
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    Router::new()
        .route("/works", get(works::admin_list_works))
        .route("/works/{id}", delete(works::delete_work))
        .route("/editor", get(editor::get_session))
        .route("/editor/new", post(editor::new_work))
        .route("/editor/open/{id}", post(editor::open_work))
        .route("/editor/close", post(editor::close))
        .route("/editor/commands", post(editor::apply_command))
        .route("/editor/save", post(editor::save))
        .route(
            "/publications",
            get(publications::admin_list_publications).post(publications::create_publication),
        )
        .route(
            "/publications/{id}",
            put(publications::update_publication).delete(publications::delete_publication),
        )
        .route("/pages/{id}", put(pages::upsert_page))
        .merge(upload_routes)
}
