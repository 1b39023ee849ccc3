use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::StaticRepository;
use crate::routes::{base_context, render_template};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
    repo: web::Data<StaticRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_home_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index", "/");
            context.insert("hero", &data.hero);
            context.insert("specialization", &data.specialization);
            context.insert("career_fields", &data.career_fields);
            context.insert("articles", &data.articles);
            context.insert("fund_research", &data.fund_research);
            context.insert("choose_us", &data.choose_us);
            context.insert("reasons", &data.reasons);
            context.insert("leaderboard", &data.leaderboard);
            context.insert("universities", &data.universities);

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render home page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/about")]
pub async fn show_about(
    repo: web::Data<StaticRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_about_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "about", "/about");
            context.insert("header", &data.header);
            context.insert("set_us_apart", &data.set_us_apart);
            context.insert("statements", &data.statements);
            context.insert("articles", &data.articles);
            context.insert("success_numbers", &data.success_numbers);

            render_template(&tera, "main/about.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render about page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/faqs")]
pub async fn show_faqs(
    repo: web::Data<StaticRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_faq_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "faqs", "/faqs");
            context.insert("sections", &data.sections);

            render_template(&tera, "main/faqs.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render FAQ page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/signup")]
pub async fn show_signup(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = main_service::load_signup_page();
    let mut context = base_context(&flash_messages, "signup", "/signup");
    context.insert("signup", &data.signup);

    render_template(&tera, "main/signup.html", &context)
}
