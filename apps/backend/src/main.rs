use actix_web::{web, App, HttpServer};
use touchline::config::auth::AuthConfig;
use touchline::config::db::{DbProfile, PoolSettings};
use touchline::infra::state::build_state;
use touchline::middleware::{
    cors_middleware, RequestTrace, StructuredLogger, TraceSpan,
};
use touchline::routes;
use touchline::AppError;

mod telemetry;

fn exit_with(e: AppError) -> ! {
    eprintln!("❌ {e}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment comes from the runtime (docker env_file or a sourced .env).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| exit_with(AppError::config("BACKEND_PORT must be a valid port number")));

    let pool = PoolSettings::from_env().unwrap_or_else(|e| exit_with(e));
    let auth = AuthConfig::from_env().unwrap_or_else(|e| exit_with(e));

    println!("🚀 Starting Touchline backend on http://{host}:{port}");

    let app_state = build_state()
        .with_db(DbProfile::Prod)
        .with_pool(pool)
        .with_auth(auth)
        .build()
        .await
        .unwrap_or_else(|e| exit_with(e));

    println!("✅ Database connected and migrated");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        // Last wrap runs first: RequestTrace assigns the trace id the others read.
        App::new()
            .wrap(TraceSpan)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
