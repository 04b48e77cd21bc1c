use crate::{
    api::{leave_request, profile},
    config::Config,
    identity::handlers,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let login_limiter = build_limiter(config.rate_login_per_min);
    let protected_limiter = build_limiter(config.rate_protected_per_min);

    // Identity provider routes (no identity headers required)
    cfg.service(
        web::scope("/identity")
            .service(
                web::resource("/login")
                    .wrap(login_limiter)
                    .route(web::post().to(handlers::login)),
            )
            .service(web::resource("/users").route(web::get().to(handlers::list_users))),
    );

    // Routes acting on a resolved identity
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(protected_limiter) // rate limiting
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave_request::leave_history))
                            .route(web::post().to(leave_request::create_leave)),
                    )
                    // literal paths must land before /{id}
                    .service(
                        web::resource("/pending")
                            .route(web::get().to(leave_request::pending_leaves)),
                    )
                    .service(
                        web::resource("/approved")
                            .route(web::get().to(leave_request::approved_leaves)),
                    )
                    .service(
                        web::resource("/rejected")
                            .route(web::get().to(leave_request::rejected_leaves)),
                    )
                    .service(
                        web::resource("/summary").route(web::get().to(leave_request::leave_summary)),
                    )
                    // /leave/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(leave_request::get_leave))
                            .route(web::put().to(leave_request::amend_leave)),
                    )
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::put().to(leave_request::approve_leave)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject")
                            .route(web::put().to(leave_request::reject_leave)),
                    ),
            )
            .service(
                web::resource("/departments")
                    .route(web::get().to(leave_request::list_departments)),
            )
            .service(
                web::scope("/profile")
                    // /profile
                    .service(
                        web::resource("")
                            .route(web::get().to(profile::get_profile))
                            .route(web::put().to(profile::update_basic_info)),
                    )
                    .service(
                        web::scope("/skills")
                            .service(web::resource("").route(web::post().to(profile::add_skill)))
                            .service(
                                web::resource("/{id}")
                                    .route(web::put().to(profile::update_skill))
                                    .route(web::delete().to(profile::delete_skill)),
                            ),
                    )
                    .service(
                        web::scope("/experience")
                            .service(
                                web::resource("").route(web::post().to(profile::add_experience)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::put().to(profile::update_experience))
                                    .route(web::delete().to(profile::delete_experience)),
                            ),
                    )
                    .service(
                        web::scope("/education")
                            .service(
                                web::resource("").route(web::post().to(profile::add_education)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::put().to(profile::update_education))
                                    .route(web::delete().to(profile::delete_education)),
                            ),
                    )
                    .service(
                        web::scope("/achievements")
                            .service(
                                web::resource("").route(web::post().to(profile::add_achievement)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::put().to(profile::update_achievement))
                                    .route(web::delete().to(profile::delete_achievement)),
                            ),
                    ),
            ),
    );
}
