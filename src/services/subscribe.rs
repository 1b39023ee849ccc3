use crate::domain::contact::Subscription;
use crate::forms::subscribe::SubscribeForm;
use crate::forms::FormError;
use crate::repository::SubmissionWriter;
use crate::services::{ServiceError, ServiceResult};

/// Validates the footer newsletter form and records the subscription.
///
/// Validation failures come back as [`ServiceError::Form`] carrying the
/// message to flash.
pub fn subscribe<R>(repo: &R, form: &SubscribeForm) -> ServiceResult<Subscription>
where
    R: SubmissionWriter + ?Sized,
{
    let subscription = Subscription::try_from(form).map_err(|err| {
        log::warn!("Rejected newsletter subscription: {err}");
        ServiceError::Form(rejection_message(&err))
    })?;

    repo.record_subscription(&subscription).map_err(|err| {
        log::error!("Failed to record subscription: {err}");
        ServiceError::from(err)
    })?;

    Ok(subscription)
}

fn rejection_message(err: &FormError) -> String {
    match err {
        FormError::Validation(_) => "Invalid form submission".to_string(),
        FormError::MissingEmail | FormError::InvalidEmail => err.to_string(),
    }
}
