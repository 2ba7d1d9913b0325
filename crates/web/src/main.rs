use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::matches::handlers::list_matches,
        features::matches::handlers::get_match,
        features::matches::handlers::get_match_detailed,
        features::matches::handlers::create_match,
        features::matches::handlers::assign_player,
        features::matches::handlers::delete_match,
        features::users::handlers::list_users,
        features::users::handlers::get_user,
        features::users::handlers::create_user,
        features::users::handlers::update_user,
        features::users::handlers::delete_user,
        features::disciplines::handlers::list_disciplines,
        features::disciplines::handlers::get_discipline,
        features::disciplines::handlers::create_discipline,
        features::disciplines::handlers::update_discipline,
        features::disciplines::handlers::delete_discipline,
    ),
    components(
        schemas(
            storage::dto::matches::CreateMatchRequest,
            storage::dto::matches::AssignPlayerRequest,
            storage::dto::matches::MatchResponse,
            storage::dto::matches::MatchDetailResponse,
            storage::dto::matches::MatchListResponse,
            storage::dto::matches::PlayerSlotResponse,
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UpdateUserRequest,
            storage::dto::user::UserResponse,
            storage::dto::discipline::CreateDisciplineRequest,
            storage::dto::discipline::UpdateDisciplineRequest,
            storage::dto::discipline::DisciplineResponse,
            storage::dto::common::PaginationMeta,
            storage::models::User,
            storage::models::Discipline,
            storage::models::Match,
            storage::models::PlayerSlot,
        )
    ),
    tags(
        (name = "matches", description = "Match scheduling and player slots"),
        (name = "users", description = "User registration and profiles"),
        (name = "disciplines", description = "Per-sport skill profiles"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting match organizer API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/matches", features::matches::routes::routes(api_keys.clone()))
        .nest("/api/users", features::users::routes::routes(api_keys.clone()))
        .nest(
            "/api/disciplines",
            features::disciplines::routes::routes(api_keys),
        )
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Server listening on http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
