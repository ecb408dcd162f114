use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::Route;

const TESTIMONIALS_JSON: &str = include_str!("../content/testimonials.json");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub image: String,
    pub quote: String,
    pub rating: u8,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("testimonials file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("testimonials file has no entries")]
    Empty,
    #[error("testimonial {id} has rating {rating}, expected 1 to 5")]
    Rating { id: u32, rating: u8 },
    #[error("testimonial id {0} appears more than once")]
    DuplicateId(u32),
}

pub fn load_testimonials() -> Result<Vec<Testimonial>, ContentError> {
    parse_testimonials(TESTIMONIALS_JSON)
}

pub fn parse_testimonials(json: &str) -> Result<Vec<Testimonial>, ContentError> {
    let testimonials: Vec<Testimonial> = serde_json::from_str(json)?;
    if testimonials.is_empty() {
        return Err(ContentError::Empty);
    }

    let mut ids = HashSet::new();
    for t in &testimonials {
        if !(1..=5).contains(&t.rating) {
            return Err(ContentError::Rating {
                id: t.id,
                rating: t.rating,
            });
        }
        if !ids.insert(t.id) {
            return Err(ContentError::DuplicateId(t.id));
        }
    }

    Ok(testimonials)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceId {
    Audit,
    Tax,
    Accounting,
    Consulting,
}

impl ServiceId {
    pub fn slug(self) -> &'static str {
        match self {
            ServiceId::Audit => "audit",
            ServiceId::Tax => "tax",
            ServiceId::Accounting => "accounting",
            ServiceId::Consulting => "consulting",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

pub static SERVICES: [Service; 4] = [
    Service {
        id: ServiceId::Audit,
        glyph: "🛡",
        title: "Audit & Assurance",
        description: "Comprehensive audit services to ensure compliance and build stakeholder confidence.",
        features: ["Statutory Audits", "Internal Audits", "Risk Assessment"],
    },
    Service {
        id: ServiceId::Tax,
        glyph: "📄",
        title: "Tax Services",
        description: "Expert tax planning and compliance services to optimize your tax position.",
        features: ["Tax Compliance", "Tax Planning", "VAT Advisory"],
    },
    Service {
        id: ServiceId::Accounting,
        glyph: "🧮",
        title: "Accounting",
        description: "Professional accounting services to keep your financial records accurate and up-to-date.",
        features: ["Bookkeeping", "Financial Statements", "Payroll Management"],
    },
    Service {
        id: ServiceId::Consulting,
        glyph: "📈",
        title: "Consulting",
        description: "Strategic business advisory services to drive growth and improve performance.",
        features: ["Business Advisory", "Financial Management", "Start-up Services"],
    },
];

/// Card content shared by the why-choose-us features and the core values.
#[derive(Debug, PartialEq)]
pub struct Highlight {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static WHY_CHOOSE_US: [Highlight; 4] = [
    Highlight {
        glyph: "👥",
        title: "Expert Team",
        description: "Certified professionals with deep industry knowledge and years of experience serving diverse businesses.",
    },
    Highlight {
        glyph: "♥",
        title: "Client Focus",
        description: "Tailored solutions designed around your unique business needs and growth objectives.",
    },
    Highlight {
        glyph: "🛡",
        title: "Integrity",
        description: "Ethical practices and transparent communication in every engagement we undertake.",
    },
    Highlight {
        glyph: "📈",
        title: "Results Driven",
        description: "Measurable outcomes that drive business growth and ensure long-term success.",
    },
];

pub static CORE_VALUES: [Highlight; 5] = [
    Highlight {
        glyph: "🛡",
        title: "Integrity",
        description: "We uphold the highest ethical standards in all our engagements, ensuring transparency and honesty.",
    },
    Highlight {
        glyph: "🏅",
        title: "Professionalism",
        description: "Our team maintains the utmost professionalism, delivering services with competence and diligence.",
    },
    Highlight {
        glyph: "👥",
        title: "Confidentiality",
        description: "We protect our clients' information with strict confidentiality protocols and security measures.",
    },
    Highlight {
        glyph: "✔",
        title: "Excellence",
        description: "We strive for excellence in every task, continuously improving our skills and processes.",
    },
    Highlight {
        glyph: "♥",
        title: "Client-Centered",
        description: "Our clients' success is our priority. We tailor solutions to meet their unique needs.",
    },
];

#[derive(Debug, PartialEq)]
pub struct ContactInfo {
    pub glyph: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub link: Option<&'static str>,
}

pub static CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo {
        glyph: "📍",
        title: "Visit Us",
        content: "Rattansi Educational Trust Building, Koinange Street, Nairobi, Kenya",
        link: Some(crate::config::MAPS_URL),
    },
    ContactInfo {
        glyph: "📞",
        title: "Call Us",
        content: crate::config::PHONE_DISPLAY,
        link: Some(crate::config::PHONE_HREF),
    },
    ContactInfo {
        glyph: "✉",
        title: "Email Us",
        content: crate::config::EMAIL,
        link: Some(crate::config::EMAIL_HREF),
    },
    ContactInfo {
        glyph: "🕗",
        title: "Business Hours",
        content: crate::config::BUSINESS_HOURS,
        link: None,
    },
];

#[derive(Debug, PartialEq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink { route: Route::Home, label: "Home" },
    NavLink { route: Route::About, label: "About Us" },
    NavLink { route: Route::Services, label: "Services" },
    NavLink { route: Route::Contact, label: "Contact" },
];

#[derive(Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Facebook", glyph: "f", href: "#" },
    SocialLink { label: "Twitter", glyph: "𝕏", href: "#" },
    SocialLink { label: "LinkedIn", glyph: "in", href: "#" },
    SocialLink { label: "Instagram", glyph: "◎", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_testimonials_load() {
        let testimonials = load_testimonials().expect("bundled file is valid");
        assert_eq!(testimonials.len(), 3);
        assert_eq!(testimonials[0].name, "James Mwangi");
        assert!(testimonials.iter().all(|t| t.rating == 5));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(parse_testimonials("[]"), Err(ContentError::Empty)));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let json = r#"[{"id":4,"name":"A","role":"B","image":"/a.jpg","quote":"Q","rating":6}]"#;
        assert!(matches!(
            parse_testimonials(json),
            Err(ContentError::Rating { id: 4, rating: 6 })
        ));
    }

    #[test]
    fn zero_rating_is_rejected() {
        let json = r#"[{"id":1,"name":"A","role":"B","image":"/a.jpg","quote":"Q","rating":0}]"#;
        assert!(matches!(parse_testimonials(json), Err(ContentError::Rating { .. })));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id":1,"name":"A","role":"B","image":"/a.jpg","quote":"Q","rating":4},
            {"id":1,"name":"C","role":"D","image":"/c.jpg","quote":"R","rating":3}
        ]"#;
        assert!(matches!(parse_testimonials(json), Err(ContentError::DuplicateId(1))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_testimonials("{"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn service_slugs_are_unique() {
        let slugs: HashSet<_> = SERVICES.iter().map(|s| s.id.slug()).collect();
        assert_eq!(slugs.len(), SERVICES.len());
    }
}
