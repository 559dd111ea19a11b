use actix_web::web;

pub mod auth;
pub mod crud;
pub mod health;
pub mod leagues;
pub mod matches;
pub mod players;
pub mod referees;
pub mod reports;
pub mod teams;

/// Register every route. Shared by `main.rs` and the HTTP tests so both
/// see the same paths; middleware is layered on by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // /health/health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    cfg.service(
        web::scope("/api")
            .configure(auth::configure_routes)
            .service(web::scope("/leagues").configure(leagues::configure_routes))
            .service(web::scope("/teams").configure(teams::configure_routes))
            .service(web::scope("/players").configure(players::configure_routes))
            .service(web::scope("/referees").configure(referees::configure_routes))
            .service(web::scope("/matches").configure(matches::configure_routes))
            .service(web::scope("/reports").configure(reports::configure_routes)),
    );
}
