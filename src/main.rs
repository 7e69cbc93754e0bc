use std::env;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use modules::access::application::domain::admin_access_key::AdminAccessKey;
use modules::access::adapter::incoming::web::routes::verify_access::verify_access_handler;
use modules::media::adapter::incoming::web::routes::get_upload_progress::get_upload_progress_handler;
use modules::media::adapter::incoming::web::routes::upload_images::upload_images_handler;
use modules::media::adapter::outgoing::object_storage_gcs::GcsObjectStorage;
use modules::media::application::domain::policies::upload_policy::UploadPolicy;
use modules::media::application::media_use_cases::MediaUseCases;
use modules::media::application::service::ingest_images_service::IngestImagesService;
use modules::media::application::service::upload_progress_tracker::UploadProgressTracker;
use modules::project::adapter::incoming::web::routes::create_project::create_project_handler;
use modules::project::adapter::incoming::web::routes::delete_project::delete_project_handler;
use modules::project::adapter::incoming::web::routes::get_public_projects::get_public_projects_handler;
use modules::project::adapter::incoming::web::routes::get_public_single_project::get_public_single_project_handler;
use modules::project::adapter::incoming::web::routes::update_project::update_project_handler;
use modules::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use modules::project::application::project_use_cases::ProjectUseCases;
use modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetSingleProjectService, ListProjectsService,
    UpdateProjectService,
};
use shared::api::custom_json_config;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub media: MediaUseCases,
    pub admin_access_key: AdminAccessKey,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,actix_web=info".into()))
        .with(fmt::layer())
        .init();

    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
    tracing::info!("Running in {} mode", environment);

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let host = env::var("HOST").expect("HOST must be set");
    let port = env::var("PORT").expect("PORT must be set");
    let server_url = format!("{}:{}", host, port);

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db: DatabaseConnection = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db = Arc::new(db);

    let admin_access_key = AdminAccessKey::from_env().expect("ADMIN_ACCESS_KEY must be set");

    let project_repository = ProjectRepositoryPostgres::new(db.clone());
    let project = ProjectUseCases {
        list: Arc::new(ListProjectsService::new(project_repository.clone())),
        get_single: Arc::new(GetSingleProjectService::new(project_repository.clone())),
        create: Arc::new(CreateProjectService::new(project_repository.clone())),
        update: Arc::new(UpdateProjectService::new(project_repository.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repository)),
    };

    let upload_policy = UploadPolicy::from_env();
    tracing::info!(bucket = %upload_policy.bucket_name, "Upload bucket configured");
    let object_storage = GcsObjectStorage::new(upload_policy.bucket_name.clone());
    let progress_tracker = UploadProgressTracker::new();
    let media = MediaUseCases {
        ingest: Arc::new(IngestImagesService::new(
            object_storage,
            upload_policy,
            progress_tracker.clone(),
        )),
        progress: progress_tracker,
    };

    let app_state = AppState {
        project,
        media,
        admin_access_key,
    };

    tracing::info!("Starting server at http://{}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(db.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(&server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(health::readiness)
        .service(get_public_projects_handler)
        .service(get_public_single_project_handler)
        .service(create_project_handler)
        .service(update_project_handler)
        .service(delete_project_handler)
        .service(verify_access_handler)
        .service(upload_images_handler)
        .service(get_upload_progress_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Server failed to start: {}", e);
    }
}
