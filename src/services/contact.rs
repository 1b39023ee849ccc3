use crate::content;
use crate::domain::contact::{ContactSubject, ContactSubmission};
use crate::dto::contact::ContactPageData;
use crate::forms::contact::ContactFormState;
use crate::repository::SubmissionWriter;
use crate::services::{ServiceError, ServiceResult};

/// Contact page around `state`: a fresh form on `GET`, the rejected one
/// with its messages after a failed submit.
pub fn load_contact_page(state: ContactFormState) -> ContactPageData {
    ContactPageData {
        header: content::CONTACT_HEADER,
        info: content::CONTACT_INFO,
        socials: content::CONTACT_SOCIALS,
        subjects: &ContactSubject::ALL,
        state,
    }
}

/// Validates the contact form held in `state` and records the submission.
///
/// On validation failure `state.errors` holds the messages to show and the
/// same map is returned in [`ServiceError::ContactValidation`].
pub fn submit_contact<R>(repo: &R, state: &mut ContactFormState) -> ServiceResult<ContactSubmission>
where
    R: SubmissionWriter + ?Sized,
{
    let submission = state.submit().map_err(ServiceError::ContactValidation)?;

    repo.record_contact_submission(&submission).map_err(|err| {
        log::error!("Failed to record contact submission: {err}");
        ServiceError::from(err)
    })?;

    Ok(submission)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::forms::contact::{ContactField, ContactForm};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "+44 20 0000 0000".to_string(),
            subject: ContactSubject::Support,
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn valid_form_is_recorded() {
        let mut repo = MockRepository::new();
        repo.expect_record_contact_submission()
            .withf(|submission| {
                submission.email.as_str() == "ada@example.com"
                    && submission.subject == ContactSubject::Support
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut state = ContactFormState::new(filled());

        let submission = submit_contact(&repo, &mut state).expect("should submit");

        assert_eq!(submission.message.as_str(), "Hello there");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn invalid_form_is_not_recorded() {
        let mut repo = MockRepository::new();
        repo.expect_record_contact_submission().times(0);
        let mut state = ContactFormState::new(ContactForm {
            email: "not-an-email".to_string(),
            ..filled()
        });

        let result = submit_contact(&repo, &mut state);

        match result {
            Err(ServiceError::ContactValidation(errors)) => {
                assert_eq!(errors.get(ContactField::Email), Some("Invalid email address"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(
            state.errors.get(ContactField::Email),
            Some("Invalid email address")
        );
    }

    #[test]
    fn untouched_form_reports_every_required_field() {
        let mut repo = MockRepository::new();
        repo.expect_record_contact_submission().times(0);
        let mut state = ContactFormState::default();

        let result = submit_contact(&repo, &mut state);

        assert!(matches!(result, Err(ServiceError::ContactValidation(ref e)) if e.len() == 5));
    }

    #[test]
    fn sink_failure_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_record_contact_submission()
            .returning(|_| Err(RepositoryError::DeliveryError("offline".to_string())));
        let mut state = ContactFormState::new(filled());

        let result = submit_contact(&repo, &mut state);

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }

    #[test]
    fn page_offers_both_subjects() {
        let data = load_contact_page(ContactFormState::default());
        assert_eq!(data.subjects, &ContactSubject::ALL);
        assert!(data.state.errors.is_empty());
    }
}
