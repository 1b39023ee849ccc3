//! Marketing and blog site for the Everey research platform.
//!
//! The `data` feature builds the content, domain and form layer on its own;
//! `server` adds the Actix-web application on top of it.

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::StaticRepository;

#[cfg(feature = "data")]
pub mod content;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Registers every page, form and API handler on `cfg`.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    use crate::routes::api::api_v1_articles;
    use crate::routes::blog::show_blog;
    use crate::routes::contact::{show_contact, submit_contact};
    use crate::routes::main::{show_about, show_faqs, show_index, show_signup};
    use crate::routes::research::{show_fund_research, submit_application};
    use crate::routes::subscribe::subscribe;

    cfg.service(
        web::scope("/api")
            .wrap(Cors::permissive())
            .service(api_v1_articles),
    )
    .service(show_index)
    .service(show_about)
    .service(show_blog)
    .service(show_contact)
    .service(submit_contact)
    .service(show_faqs)
    .service(show_fund_research)
    .service(submit_application)
    .service(show_signup)
    .service(subscribe);
}

/// Builds the flash message middleware keyed by `secret`.
#[cfg(feature = "server")]
pub fn flash_messages(secret: &str) -> std::io::Result<FlashMessagesFramework> {
    let secret_key = Key::try_from(secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret key: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    Ok(FlashMessagesFramework::builder(message_store).build())
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = StaticRepository::default();

    let message_framework = flash_messages(&server_config.secret)?;

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Starting server on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &server_config.assets_dir))
            .configure(configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo))
    })
    .bind(bind_address)?
    .run()
    .await
}
