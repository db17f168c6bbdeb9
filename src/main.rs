use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use jobboard_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route("/api/public/jobs", get(routes::job::list_public_jobs))
        .route("/api/public/jobs/:id", get(routes::job::get_public_job))
        .route(
            "/api/candidates",
            post(routes::candidate_routes::register_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidate_routes::get_candidate)
                .patch(routes::candidate_routes::update_candidate),
        )
        .route(
            "/api/candidates/:id/resume/parse",
            post(routes::candidate_routes::parse_resume),
        )
        .route(
            "/api/candidates/:id/recommended-jobs",
            get(routes::recommendation::recommended_jobs),
        )
        .route(
            "/api/candidates/:id/match/:job_id",
            get(routes::recommendation::match_for_pair),
        )
        .route(
            "/api/candidates/:id/applications",
            get(routes::candidate_routes::get_candidate_applications)
                .post(routes::candidate_routes::apply_for_job),
        )
        .route(
            "/api/candidates/:id/saved-jobs",
            get(routes::candidate_routes::get_saved_jobs),
        )
        .route(
            "/api/candidates/:id/saved-jobs/:job_id",
            post(routes::candidate_routes::save_job)
                .delete(routes::candidate_routes::unsave_job),
        )
        .route(
            "/api/candidates/:id/jobs/:job_id/messages",
            get(routes::chat::get_chat_history).post(routes::chat::send_candidate_message),
        )
        .layer(axum::middleware::from_fn_with_state(
            jobboard_backend::middleware::rate_limit::new_rps_state(config.public_rps),
            jobboard_backend::middleware::rate_limit::rps_middleware,
        ));

    let integration_api = Router::new()
        .route(
            "/api/integration/jobs",
            get(routes::job::list_jobs).post(routes::job::create_job),
        )
        .route(
            "/api/integration/jobs/:id",
            get(routes::job::get_job)
                .patch(routes::job::update_job)
                .delete(routes::job::delete_job),
        )
        .route(
            "/api/integration/jobs/:id/applicants",
            get(routes::job::list_applicants),
        )
        .route(
            "/api/integration/applications/:id/status",
            post(routes::candidate_routes::update_application_status),
        )
        .route(
            "/api/integration/messages",
            post(routes::chat::send_recruiter_message),
        )
        .route(
            "/api/integration/messages/unread",
            get(routes::chat::get_unread_count),
        )
        .layer(axum::middleware::from_fn_with_state(
            jobboard_backend::middleware::rate_limit::new_rps_state(config.integration_rps),
            jobboard_backend::middleware::rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(public_api)
        .merge(integration_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
