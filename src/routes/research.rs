use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::research::{ApplicationErrors, ResearchApplicationForm};
use crate::repository::StaticRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::research as research_service;

fn render_fund_research_page(
    repo: &StaticRepository,
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    form: ResearchApplicationForm,
    errors: ApplicationErrors,
) -> HttpResponse {
    match research_service::load_fund_research_page(repo, form, errors) {
        Ok(data) => {
            let mut context = base_context(flash_messages, "fund_research", "/fund-research");
            context.insert("header", &data.header);
            context.insert("plans", &data.plans);
            context.insert("articles", &data.articles);
            context.insert("fields", &data.fields);
            context.insert("form", &data.form);
            context.insert("errors", &data.errors);

            render_template(tera, "main/fund_research.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render fund-research page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/fund-research")]
pub async fn show_fund_research(
    repo: web::Data<StaticRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_fund_research_page(
        repo.get_ref(),
        &tera,
        &flash_messages,
        ResearchApplicationForm::default(),
        ApplicationErrors::new(),
    )
}

#[post("/fund-research")]
pub async fn submit_application(
    repo: web::Data<StaticRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ResearchApplicationForm>,
) -> impl Responder {
    match research_service::submit_application(repo.get_ref(), &form) {
        Ok(_) => {
            FlashMessage::success("Application submitted successfully!").send();
            redirect("/fund-research")
        }
        Err(ServiceError::ApplicationValidation(errors)) => {
            render_fund_research_page(repo.get_ref(), &tera, &flash_messages, form, errors)
        }
        Err(err) => {
            log::error!("Failed to submit research application: {err}");
            FlashMessage::error("Could not send your application. Please try again later.")
                .send();
            redirect("/fund-research")
        }
    }
}
