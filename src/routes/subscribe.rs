use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::forms::subscribe::SubscribeForm;
use crate::repository::StaticRepository;
use crate::routes::redirect;
use crate::services::ServiceError;
use crate::services::subscribe as subscribe_service;

#[post("/subscribe")]
pub async fn subscribe(
    repo: web::Data<StaticRepository>,
    web::Form(form): web::Form<SubscribeForm>,
) -> impl Responder {
    match subscribe_service::subscribe(repo.get_ref(), &form) {
        Ok(_) => {
            FlashMessage::success("Thanks for subscribing!").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to subscribe: {err}");
            FlashMessage::error("Could not subscribe. Please try again later.").send();
        }
    }
    redirect(form.redirect_target())
}
