use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_discipline, delete_discipline, get_discipline, list_disciplines, update_discipline,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_discipline))
        .route("/:id", put(update_discipline))
        .route("/:id", delete(delete_discipline))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_disciplines))
        .route("/:id", get(get_discipline))
        .merge(protected)
}
