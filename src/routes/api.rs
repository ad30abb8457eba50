use crate::handlers;
use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(handlers::health_check))
        // Prefix match: the browser client also calls /api/search/local.json.
        .route(
            "/api/search/local{tail:.*}",
            web::get().to(handlers::local_search),
        )
        .route("/search", web::post().to(handlers::search))
        .route("/api/geocode", web::post().to(handlers::naver_geocode))
        .route(
            "/api/geocode/google",
            web::post().to(handlers::google_geocode),
        );
}
