mod app_state;
mod handlers;
mod status;

pub use self::app_state::AppState;
use crate::{agents::HttpAgentClient, api::Api, config::Config, database::Database};
use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
pub async fn run(config: Config) -> Result<(), anyhow::Error> {
    let db = Database::open(&config.db).await?;
    let agent_client = HttpAgentClient::create(&config.agents)?;
    let api = Api::new(config.clone(), db, agent_client);

    let http_server_url = format!("0.0.0.0:{}", config.http_port);
    let state = web::Data::new(AppState::new(config, api));
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/status", web::get().to(handlers::status_get))
                    .service(
                        web::scope("/agents")
                            .route("", web::get().to(handlers::agents_list))
                            .route("", web::post().to(handlers::agents_create)),
                    )
                    .service(
                        web::scope("/jobs")
                            .route("", web::get().to(handlers::jobs_list))
                            .route("", web::post().to(handlers::jobs_create))
                            .route("/{job_id}", web::get().to(handlers::jobs_get))
                            .route("/{job_id}", web::put().to(handlers::jobs_update))
                            .route("/{job_id}", web::delete().to(handlers::jobs_delete))
                            .route("/{job_id}/start", web::post().to(handlers::jobs_start))
                            .route("/{job_id}/restart", web::post().to(handlers::jobs_restart))
                            .route("/{job_id}/pause", web::post().to(handlers::jobs_pause)),
                    ),
            )
    });

    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {}.", &http_server_url))?;

    info!("Cronward API server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .with_context(|| "Failed to run Cronward API server.")
}
