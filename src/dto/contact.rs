use crate::domain::contact::ContactSubject;
use crate::domain::page::{ContactInfoItem, SectionHeader, SocialLink};
use crate::forms::contact::ContactFormState;

/// Data required to render the contact template.
pub struct ContactPageData {
    pub header: SectionHeader,
    pub info: &'static [ContactInfoItem],
    pub socials: &'static [SocialLink],
    /// Choices for the subject radio group.
    pub subjects: &'static [ContactSubject],
    /// Current values and the errors of the latest submit attempt.
    pub state: ContactFormState,
}
