//! Shared helpers for integration tests.

/// Signing key for the flash message cookie in tests.
pub const TEST_SECRET: &str =
    "integration-test-secret-0123456789abcdef0123456789abcdef0123456789abcdef";

/// Builds the full site (real routes, real templates, static content) as an
/// initialized test service.
macro_rules! init_site {
    () => {{
        let tera = tera::Tera::new("templates/**/*").expect("templates should parse");
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    everey_site::flash_messages(crate::common::TEST_SECRET)
                        .expect("secret should be long enough"),
                )
                .configure(everey_site::configure)
                .app_data(actix_web::web::Data::new(tera))
                .app_data(actix_web::web::Data::new(
                    everey_site::repository::StaticRepository::default(),
                )),
        )
        .await
    }};
}

/// Reads a response body as UTF-8 text.
pub async fn body_text<B>(resp: actix_web::dev::ServiceResponse<B>) -> String
where
    B: actix_web::body::MessageBody,
{
    let bytes = actix_web::test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
