//! Typed configuration for the presentational sections of each page.
//!
//! Every section that the templates render is described here with its
//! recognised fields spelled out. Instances live in [`crate::content`].

use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Title with an optional lead paragraph, used on top of most sections.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct SectionHeader {
    pub title: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub description: &'static str,
    pub cta: Link,
    pub metrics: &'static [Metric],
    pub image: Image,
    pub caption: &'static str,
    pub badges: &'static [&'static str],
}

/// Icon, title and blurb. Used by "why choose us" and "what sets us apart".
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: Image,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub image: Image,
    pub name: &'static str,
    pub affiliation: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct University {
    pub image: Image,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct CallToAction {
    pub title: &'static str,
    pub description: &'static str,
    pub cta: Link,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ResearchPlan {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Statement {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Image,
    /// Render image and text in swapped columns.
    pub reverse: bool,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct FaqItem {
    pub title: &'static str,
    pub content: &'static str,
}

/// One accordion card on the FAQ page.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct FaqSection {
    pub image: Image,
    pub title: &'static str,
    pub items: &'static [FaqItem],
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ContactInfoItem {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Signup {
    pub title: &'static str,
    pub description: &'static str,
    pub student: Link,
    pub researcher: Link,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Navigation {
    pub logo: Image,
    pub links: &'static [Link],
    pub signup: Link,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Footer {
    pub subscribe_header: &'static str,
    pub subscribe_text: &'static str,
    pub description: &'static str,
    pub routes: &'static [Link],
    pub socials: &'static [SocialLink],
}
