use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::contact::{ContactForm, ContactFormState};
use crate::repository::StaticRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::contact as contact_service;

fn render_contact_page(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    state: ContactFormState,
) -> HttpResponse {
    let data = contact_service::load_contact_page(state);

    let mut context = base_context(flash_messages, "contact", "/contact");
    context.insert("header", &data.header);
    context.insert("info", &data.info);
    context.insert("socials", &data.socials);
    context.insert("subjects", &data.subjects);
    context.insert("form", &data.state.form);
    context.insert("errors", &data.state.errors);

    render_template(tera, "contact/index.html", &context)
}

#[get("/contact")]
pub async fn show_contact(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_contact_page(&tera, &flash_messages, ContactFormState::default())
}

#[post("/contact")]
pub async fn submit_contact(
    repo: web::Data<StaticRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ContactForm>,
) -> impl Responder {
    let mut state = ContactFormState::new(form);

    match contact_service::submit_contact(repo.get_ref(), &mut state) {
        Ok(_) => {
            FlashMessage::success("Form submitted successfully!").send();
            redirect("/contact")
        }
        Err(ServiceError::ContactValidation(errors)) => {
            log::info!("Contact form rejected with {} error(s)", errors.len());
            render_contact_page(&tera, &flash_messages, state)
        }
        Err(err) => {
            log::error!("Failed to submit contact form: {err}");
            FlashMessage::error("Could not send your message. Please try again later.").send();
            redirect("/contact")
        }
    }
}
