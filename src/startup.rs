use crate::configuration::Settings;
use crate::db::{ProductStore, UserStore};
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, middleware, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// Upper bound for URL-encoded bodies. `FormConfig` holds an `Rc`, so each
/// worker builds its own.
pub const FORM_LIMIT: usize = 100 * 1024;

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(FORM_LIMIT)
        .error_handler(|err, _req| {
            let msg = format!("Invalid form data: {}", err);
            error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
        })
}

pub fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    // one instance per file, shared by every worker
    let user_store = web::Data::new(UserStore::new(settings.storage.users_file.clone()));
    let product_store = web::Data::new(ProductStore::new(settings.storage.products_file.clone()));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add((http::header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")),
            )
            .app_data(form_config())
            .app_data(user_store.clone())
            .app_data(product_store.clone())
            // fixed paths first, everything else with one segment is a product id
            .service(routes::user::list_handler)
            .service(routes::user::register_handler)
            .service(routes::product::list_handler)
            .service(routes::product::comments_handler)
            .service(routes::product::comment_add_handler)
            .service(routes::product::rating_edit_handler)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
