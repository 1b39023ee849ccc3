//! Static site content: the articles, FAQ cards and section copy rendered by
//! the pages. This is the content store backing
//! [`crate::repository::StaticRepository`].

use crate::domain::article::Article;
use crate::domain::page::{
    CallToAction, ContactInfoItem, FaqItem, FaqSection, FeatureCard, Footer, Hero, Image,
    LeaderboardEntry, Link, Metric, Navigation, ResearchPlan, SectionHeader, Signup, SocialLink,
    Statement, University,
};

/// Articles rendered per blog page.
pub const ARTICLES_PER_PAGE: usize = 9;

/// Articles shown in the "Read an Article" strip of the landing pages.
pub const FEATURED_ARTICLES: usize = 6;

/// Initial value of the contact message box. Submitting it unchanged counts
/// as an empty message.
pub const MESSAGE_PLACEHOLDER: &str = "Write your message.....";

const THUMBNAIL: &str = "/assets/images/thumbnail.png";
const AUTHOR_IMG: &str = "/assets/images/articleAuthor.jpg";

const LOREM: &str = "Lorem ipsum dolor sit amet consectetur adipisicing elit. Illum \
    necessitatibus rem nulla est itaque sint totam voluptatem illo voluptas sunt saepe odit, \
    dolorum libero, quod aperiam quibusdam nostrum minima laborum?";

const AI_PREVIEW: &str = "Discover how AI is transforming industries and what the future \
    holds for this groundbreaking technology.";

const CLASSROOM: Article = Article {
    thumbnail: THUMBNAIL,
    label: "Education",
    author_img: AUTHOR_IMG,
    author_name: "Micheal Angelo",
    date: "Jan 20, 2023 • 11 min read",
    title: "Unleashing Creativity in the Classroom",
    preview: LOREM,
    read_more_link: "#",
};

const FUTURE_OF_AI: Article = Article {
    thumbnail: THUMBNAIL,
    label: "Technology",
    author_img: AUTHOR_IMG,
    author_name: "Jane Doe",
    date: "Feb 15, 2023 • 8 min read",
    title: "The Future of Artificial Intelligence",
    preview: AI_PREVIEW,
    read_more_link: "#",
};

pub const ARTICLES: &[Article] = &[
    CLASSROOM,
    FUTURE_OF_AI,
    Article {
        author_name: "Juliette Romeo",
        title: "Artificial Intelligence",
        preview: LOREM,
        ..FUTURE_OF_AI
    },
    Article {
        label: "Health",
        author_name: "Amara Okafor",
        date: "Mar 02, 2023 • 6 min read",
        title: "Community Health Research in West Africa",
        ..CLASSROOM
    },
    Article {
        label: "Environment",
        author_name: "Kwame Mensah",
        date: "Mar 18, 2023 • 9 min read",
        title: "Measuring Climate Resilience in Smallholder Farms",
        ..CLASSROOM
    },
    Article {
        date: "Apr 04, 2023 • 7 min read",
        title: "Open Data for African Universities",
        ..FUTURE_OF_AI
    },
    Article {
        label: "Funding",
        author_name: "Zainab Bello",
        date: "Apr 21, 2023 • 5 min read",
        title: "Writing a Winning Grant Proposal",
        ..CLASSROOM
    },
    CLASSROOM,
    Article {
        label: "Publishing",
        author_name: "Juliette Romeo",
        date: "May 09, 2023 • 10 min read",
        title: "Navigating Peer Review as an Early Career Researcher",
        ..CLASSROOM
    },
    Article {
        date: "May 30, 2023 • 4 min read",
        title: "Mentorship Beyond the Lecture Hall",
        ..CLASSROOM
    },
    Article {
        label: "Technology",
        author_name: "Kwame Mensah",
        date: "Jun 12, 2023 • 8 min read",
        title: "Machine Learning on a Shoestring Budget",
        preview: AI_PREVIEW,
        ..CLASSROOM
    },
    Article {
        label: "Education",
        author_name: "Amara Okafor",
        date: "Jul 01, 2023 • 6 min read",
        title: "Designing Research Methods Courses",
        ..CLASSROOM
    },
];

pub const NAVIGATION: Navigation = Navigation {
    logo: Image {
        src: "/assets/images/logo-mobile.png",
        alt: "Logo",
    },
    links: &[
        Link {
            label: "Blog",
            href: "/blog",
        },
        Link {
            label: "About Us",
            href: "/about",
        },
        Link {
            label: "Fund a Research",
            href: "/fund-research",
        },
        Link {
            label: "Contact Us",
            href: "/contact",
        },
    ],
    signup: Link {
        label: "Sign Up",
        href: "/signup",
    },
};

pub const FOOTER: Footer = Footer {
    subscribe_header: "Join Africa's Largest Research Community",
    subscribe_text: "Stay Ahead in Research!",
    description: "We are dedicated to promoting indigenous research, leveraging local \
        expertise for impactful global publishing.",
    routes: &[
        Link {
            label: "About Us",
            href: "/about",
        },
        Link {
            label: "Career",
            href: "/career",
        },
        Link {
            label: "Privacy",
            href: "/privacy",
        },
        Link {
            label: "News",
            href: "/news",
        },
        Link {
            label: "Help Center",
            href: "/help-center",
        },
        Link {
            label: "Copyright",
            href: "/copyright",
        },
        Link {
            label: "Publication",
            href: "/publication",
        },
        Link {
            label: "Terms",
            href: "/terms",
        },
        Link {
            label: "Research",
            href: "/research",
        },
        Link {
            label: "FAQs",
            href: "/faqs",
        },
    ],
    socials: &[
        SocialLink {
            label: "LinkedIn",
            href: "https://linkedin.com",
            icon: "/assets/images/linkedin.svg",
        },
        SocialLink {
            label: "Twitter",
            href: "https://twitter.com",
            icon: "/assets/images/x.svg",
        },
        SocialLink {
            label: "Instagram",
            href: "https://instagram.com",
            icon: "/assets/images/instagram.svg",
        },
    ],
};

pub const HERO: Hero = Hero {
    title: "Advance Your Research with Everey",
    description: "Everey is Africa's leading platform for academic collaboration, data-driven \
        insights, and sustainable research funding. We connect researchers, institutions, and \
        organizations to accelerate innovation.",
    cta: Link {
        label: "Sign Up",
        href: "/signup",
    },
    metrics: &[
        Metric {
            value: "2.5M+",
            label: "Active Users",
        },
        Metric {
            value: "8.4M+",
            label: "Articles",
        },
    ],
    image: Image {
        src: "/assets/images/hero.png",
        alt: "Black School Teenage Boy",
    },
    caption: "Trusted by over 10 Thousand Institutions",
    badges: &["Research Works", "Publications"],
};

pub const SPECIALIZATION_HEADER: SectionHeader = SectionHeader {
    title: "See what's new in your fields!",
    description: Some("Discover new things in your area of specialization"),
};

pub const CAREER_FIELDS: &[&str] = &[
    "Art & Humanities",
    "Biomedical",
    "Computer Science",
    "Education",
    "Environmental Science",
    "Engineering",
    "Social Sciences",
    "History",
    "Law",
    "Medicine",
    "Physics",
    "Psychology",
];

pub const FUND_RESEARCH_CTA: CallToAction = CallToAction {
    title: "Find The Perfect Research Team For Your Project.",
    description: "With the power of a data-driven community, we have the right team for \
        whatever it is that you need.",
    cta: Link {
        label: "Fund a research",
        href: "/fund-research",
    },
};

pub const CHOOSE_US: CallToAction = CallToAction {
    title: "Reasons why you should choose us!",
    description: "",
    cta: Link {
        label: "Start Your Research",
        href: "/fund-research",
    },
};

pub const REASONS: &[FeatureCard] = &[
    FeatureCard {
        icon: Image {
            src: "/assets/images/profile-management.png",
            alt: "Profile Management",
        },
        title: "Profile Management",
        description: "Allow users to create and edit their profiles, including contact \
            information, affiliation, research interests.",
    },
    FeatureCard {
        icon: Image {
            src: "/assets/images/academics.png",
            alt: "Academics",
        },
        title: "Academics",
        description: "Access a vast database of projects, get expert writing support, \
            collaborate across institutions, and secure funding for your research.",
    },
    FeatureCard {
        icon: Image {
            src: "/assets/images/institution.png",
            alt: "Institution",
        },
        title: "Institution",
        description: "Enhance your institution's reputation, boost research output, and gain \
            valuable insights to inform academic programs.",
    },
    FeatureCard {
        icon: Image {
            src: "/assets/images/organisation.png",
            alt: "Organisation",
        },
        title: "Organisation",
        description: "Tap into a pool of research talent, outsource R&D cost-effectively, and \
            make data-driven business decisions.",
    },
];

pub const LEADERBOARD: &[LeaderboardEntry] = &[
    LeaderboardEntry {
        image: Image {
            src: "/assets/images/prof-1.jpg",
            alt: "First professor",
        },
        name: "Prof. Alan Chomsky",
        affiliation: "Michigan University - Dept. of Natural Science & Climate Change",
    },
    LeaderboardEntry {
        image: Image {
            src: "/assets/images/prof-2.jpg",
            alt: "Second professor",
        },
        name: "Prof. John Smith",
        affiliation: "Stanford University - Dept. of Computer Science",
    },
    LeaderboardEntry {
        image: Image {
            src: "/assets/images/prof-3.jpg",
            alt: "Third professor",
        },
        name: "Prof. Jane Doe",
        affiliation: "Harvard University - Dept. of Medicine",
    },
];

pub const UNIVERSITIES: &[University] = &[
    University {
        image: Image {
            src: "/assets/images/university-1.png",
            alt: "Lead City University",
        },
        name: "Lead City University",
    },
    University {
        image: Image {
            src: "/assets/images/university-2.png",
            alt: "Afe Babalola University",
        },
        name: "Afe Babalola University",
    },
    University {
        image: Image {
            src: "/assets/images/university-3.png",
            alt: "Covenant University",
        },
        name: "Covenant University",
    },
];

pub const ABOUT_HEADER: SectionHeader = SectionHeader {
    title: "About Us",
    description: Some(
        "Everey AAP empowers African researchers by streamlining research publication and \
         fostering a data-driven, collaborative community. We connect lecturers, students, and \
         researchers to amplify their contributions and drive innovation.",
    ),
};

pub const SET_US_APART: &[FeatureCard] = &[
    FeatureCard {
        icon: Image {
            src: "/assets/images/profile-management.png",
            alt: "Community",
        },
        title: "Community",
        description: "Join a thriving research community. Collaborate with over 300 \
            institutions to advance African research.",
    },
    FeatureCard {
        icon: Image {
            src: "/assets/images/academics.png",
            alt: "Data Driven",
        },
        title: "Data Driven",
        description: "Make data-driven decisions. Uncover research trends and measure your \
            impact.",
    },
    FeatureCard {
        icon: Image {
            src: "/assets/images/institution.png",
            alt: "Support",
        },
        title: "Support",
        description: "Fuel your research with the funding you need. Turn your ideas into \
            reality.",
    },
];

pub const STATEMENTS: &[Statement] = &[
    Statement {
        title: "Our Vision",
        description: "To become the leading platform that transforms academic research in \
            Africa through collaboration, data-driven insights, and sustainable funding.",
        image: Image {
            src: "/assets/images/vision.jpg",
            alt: "Vision Photo",
        },
        reverse: false,
    },
    Statement {
        title: "Our Mission",
        description: "To unite African academic institutions, foster cross-institution \
            collaboration, and empower researchers by providing essential tools, resources, and \
            funding to drive impactful research and innovation.",
        image: Image {
            src: "/assets/images/mission.jpg",
            alt: "Mission Photo",
        },
        reverse: true,
    },
];

pub const SUCCESS_NUMBERS: &[Metric] = &[
    Metric {
        value: "6500+",
        label: "Number of published articles",
    },
    Metric {
        value: "1000+",
        label: "Number of published articles",
    },
    Metric {
        value: "2000+",
        label: "Number of published articles",
    },
];

pub const CONTACT_HEADER: SectionHeader = SectionHeader {
    title: "Contact Us",
    description: Some("Any question or remarks? Just write us a message!"),
};

pub const CONTACT_INFO: &[ContactInfoItem] = &[
    ContactInfoItem {
        icon: "phone",
        text: "+1012 3456 789",
    },
    ContactInfoItem {
        icon: "envelope",
        text: "support@useeverey.com",
    },
    ContactInfoItem {
        icon: "map-marker",
        text: "Lagos, Nigeria",
    },
];

pub const CONTACT_SOCIALS: &[SocialLink] = &[
    SocialLink {
        label: "Twitter",
        href: "#",
        icon: "twitter",
    },
    SocialLink {
        label: "Instagram",
        href: "#",
        icon: "instagram",
    },
    SocialLink {
        label: "Discord",
        href: "#",
        icon: "discord",
    },
];

pub const FUND_RESEARCH_HEADER: SectionHeader = SectionHeader {
    title: "Find the best Researchers in Africa",
    description: Some(
        "Finding the right team for the right project is difficult, let alone finding the \
         right team for an unknown project. What if I told you with the power of a data-driven \
         community we have the right team for whatever it is that you need.",
    ),
};

pub const RESEARCH_PLANS: &[ResearchPlan] = &[
    ResearchPlan {
        id: "basic",
        title: "Basic Research (1-3 Months)",
        description: "Rapid Insights, Focused Approach",
        link: "#",
    },
    ResearchPlan {
        id: "standard",
        title: "Standard Research (6 Months)",
        description: "Deeper Dive, Tailored Expertise",
        link: "#",
    },
    ResearchPlan {
        id: "extensive",
        title: "Extensive Research (12 Months)",
        description: "Comprehensive Analysis, Strategic Impact",
        link: "#",
    },
    ResearchPlan {
        id: "study",
        title: "Study (< 12 Months)",
        description: "Long-Term Vision, Lasting Impact",
        link: "#",
    },
];

pub const SIGNUP: Signup = Signup {
    title: "Welcome to Everey!",
    description: "Embark on your research journey with us. Join our community to unlock \
        exclusive opportunities and resources tailored for your academic endeavors.",
    student: Link {
        label: "Signup as Student",
        href: "#",
    },
    researcher: Link {
        label: "Signup as Researcher",
        href: "#",
    },
};

const GENERAL_FAQ: &[FaqItem] = &[
    FaqItem {
        title: "How can students use Everey AAP?",
        content: "Launch your research career with our student-focused resources.",
    },
    FaqItem {
        title: "What resources are available for faculty?",
        content: "Access tools and support to excel in your research role.",
    },
    FaqItem {
        title: "How can researchers access tools and databases?",
        content: "Find the resources you need to advance your research.",
    },
    FaqItem {
        title: "How does the manuscript submission process work?",
        content: "Submit your manuscript with ease and confidence.",
    },
    FaqItem {
        title: "How does the peer review process work?",
        content: "Benefit from expert feedback to strengthen your research.",
    },
];

pub const FAQ_SECTIONS: &[FaqSection] = &[
    FaqSection {
        image: Image {
            src: "/assets/images/people.png",
            alt: "People",
        },
        title: "About Everey App",
        items: &[
            FaqItem {
                title: "What is Everey App?",
                content: "Everey AAP is a comprehensive platform designed to empower African \
                    researchers to achieve their full potential.",
            },
            FaqItem {
                title: "What do we do?",
                content: "We offer a range of services and tools to support your research \
                    journey from start to finish.",
            },
            FaqItem {
                title: "Who can use it?",
                content: "African researchers, educators, and institutions can benefit from \
                    our platform and resources.",
            },
            FaqItem {
                title: "What problems do we solve?",
                content: "We address the challenges of limited access to resources, funding, \
                    publishing opportunities, and collaboration opportunities for African \
                    researchers.",
            },
            FaqItem {
                title: "Why use Everey App?",
                content: "Accelerate your research, expand your network, and increase your \
                    research's impact.",
            },
        ],
    },
    FaqSection {
        image: Image {
            src: "/assets/images/cash.png",
            alt: "Cash",
        },
        title: "For Institutions",
        items: &[
            FaqItem {
                title: "Why use Everey AAP?",
                content: "Enhance your institution's research reputation and capabilities.",
            },
            FaqItem {
                title: "How do I get started?",
                content: "Partner with us to implement Everey AAP within your institution.",
            },
            FaqItem {
                title: "Can you help us improve?",
                content: "We offer tailored support to elevate your institution's research \
                    performance.",
            },
            FaqItem {
                title: "Can we partner with you?",
                content: "Build a strategic partnership to drive innovation and impact.",
            },
            FaqItem {
                title: "How can we increase research collaboration?",
                content: "Foster a collaborative research culture within your institution.",
            },
        ],
    },
    FaqSection {
        image: Image {
            src: "/assets/images/features.png",
            alt: "Features and Services",
        },
        title: "Features and Services",
        items: &[
            FaqItem {
                title: "What can Everey AAP do?",
                content: "Collaborate effectively, publish with confidence, and gain valuable \
                    insights into your research.",
            },
            FaqItem {
                title: "How does collaboration work?",
                content: "Connect with like-minded researchers and co-create groundbreaking \
                    projects.",
            },
            FaqItem {
                title: "How does Everey AAP support publishing?",
                content: "Get expert guidance and support throughout the publication process.",
            },
            FaqItem {
                title: "What kind of data insights can I get?",
                content: "Access in-depth analytics to inform your research strategy.",
            },
            FaqItem {
                title: "How does Everey AAP help with global visibility?",
                content: "Increase your research's reach and influence on a global scale.",
            },
        ],
    },
    FaqSection {
        image: Image {
            src: "/assets/images/cash.png",
            alt: "Cash",
        },
        title: "Support and Publishing",
        items: GENERAL_FAQ,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_has_more_than_one_page_of_articles() {
        assert_eq!(ARTICLES.len(), 12);
        assert!(ARTICLES.len() > ARTICLES_PER_PAGE);
    }

    #[test]
    fn every_faq_section_has_items() {
        assert_eq!(FAQ_SECTIONS.len(), 4);
        assert!(FAQ_SECTIONS.iter().all(|section| !section.items.is_empty()));
    }
}
