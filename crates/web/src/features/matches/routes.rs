use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    assign_player, create_match, delete_match, get_match, get_match_detailed, list_matches,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_match))
        .route("/:id", delete(delete_match))
        .route("/:id/slots/:slot_id", put(assign_player))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_matches))
        .route("/:id", get(get_match))
        .route("/:id/detailed", get(get_match_detailed))
        .merge(protected)
}
