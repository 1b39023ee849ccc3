use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::repository::StaticRepository;
use crate::routes::{base_context, render_template};
use crate::services::blog::{self as blog_service, BlogQuery};

#[derive(Deserialize)]
struct BlogQueryParams {
    q: Option<String>,
    page: Option<usize>,
}

#[get("/blog")]
pub async fn show_blog(
    params: web::Query<BlogQueryParams>,
    repo: web::Data<StaticRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let query = BlogQuery {
        search: params.q,
        page: params.page,
    };

    match blog_service::load_blog_page(repo.get_ref(), query) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "blog", "/blog");
            context.insert("articles", &data.articles);
            context.insert("total", &data.total);
            if let Some(search_query) = &data.search_query {
                context.insert("search_query", search_query);
            }

            render_template(&tera, "blog/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render blog page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
