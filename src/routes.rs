/// Route registration for the four resource collections
///
/// Every resource exposes the same operation set: POST/GET on the
/// collection, GET/PUT/PATCH/DELETE on a single record.
use actix_web::web;

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profiles")
            .service(
                web::resource("")
                    .route(web::post().to(handlers::create_profile))
                    .route(web::get().to(handlers::list_profiles)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(handlers::get_profile))
                    .route(web::put().to(handlers::update_profile))
                    .route(web::patch().to(handlers::update_profile))
                    .route(web::delete().to(handlers::delete_profile)),
            ),
    )
    .service(
        web::scope("/posts")
            .service(
                web::resource("")
                    .route(web::post().to(handlers::create_post))
                    .route(web::get().to(handlers::list_posts)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(handlers::get_post))
                    .route(web::put().to(handlers::update_post))
                    .route(web::patch().to(handlers::update_post))
                    .route(web::delete().to(handlers::delete_post)),
            ),
    )
    .service(
        web::scope("/comments")
            .service(
                web::resource("")
                    .route(web::post().to(handlers::create_comment))
                    .route(web::get().to(handlers::list_comments)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(handlers::get_comment))
                    .route(web::put().to(handlers::update_comment))
                    .route(web::patch().to(handlers::update_comment))
                    .route(web::delete().to(handlers::delete_comment)),
            ),
    )
    .service(
        web::scope("/images")
            .service(
                web::resource("")
                    .route(web::post().to(handlers::create_image))
                    .route(web::get().to(handlers::list_images)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(handlers::get_image))
                    .route(web::put().to(handlers::update_image))
                    .route(web::patch().to(handlers::update_image))
                    .route(web::delete().to(handlers::delete_image)),
            ),
    );
}
