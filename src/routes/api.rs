use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::repository::StaticRepository;
use crate::services::api::{self as api_service, ArticlesQuery};

#[derive(Deserialize)]
struct ApiV1ArticlesQueryParams {
    search: Option<String>,
    page: Option<usize>,
}

#[get("/v1/articles")]
pub async fn api_v1_articles(
    params: web::Query<ApiV1ArticlesQueryParams>,
    repo: web::Data<StaticRepository>,
) -> impl Responder {
    let params = params.into_inner();
    let query = ArticlesQuery {
        search: params.search,
        page: params.page,
    };

    match api_service::list_articles(repo.get_ref(), query) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list articles: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
