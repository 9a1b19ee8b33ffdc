//! Static job-advertisement catalog.
//!
//! Ads are seeded in-process; the opaque string id is what candidates submit
//! with their CV. The frontend ad uses tiered keywords; the marketing ad
//! still carries the legacy flat list, so both decode paths stay exercised
//! end-to-end.

pub mod handlers;

use std::sync::OnceLock;

use serde::Serialize;

use crate::scan::keywords::JobKeywords;

#[derive(Debug, Clone, Serialize)]
pub struct JobAd {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub keywords: JobKeywords,
}

static CATALOG: OnceLock<Vec<JobAd>> = OnceLock::new();

pub fn job_ads() -> &'static [JobAd] {
    CATALOG.get_or_init(seed_catalog)
}

pub fn get_job_ad(job_id: &str) -> Option<&'static JobAd> {
    job_ads().iter().find(|ad| ad.id == job_id)
}

fn kw(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn seed_catalog() -> Vec<JobAd> {
    vec![
        JobAd {
            id: "frontend".to_string(),
            title: "Junior Frontend Developer".to_string(),
            company: "TechStart Inc.".to_string(),
            description: "We are looking for a Junior Frontend Developer to join our growing team. \
                          You will work closely with designers and backend engineers to build responsive \
                          web applications.\n\n\
                          Requirements:\n\
                          - Proficiency in HTML, CSS, and JavaScript\n\
                          - Experience with React or similar frontend frameworks\n\
                          - Familiarity with Git and version control workflows\n\
                          - Understanding of responsive design and mobile-first development\n\
                          - Knowledge of RESTful APIs and asynchronous programming\n\
                          - Experience with TypeScript is a plus\n\
                          - Familiarity with testing frameworks (Jest, Cypress)\n\
                          - Good understanding of web accessibility (WCAG)\n\n\
                          Nice to have:\n\
                          - Experience with CSS preprocessors (Sass, LESS)\n\
                          - Knowledge of CI/CD pipelines\n\
                          - Portfolio of personal or open-source projects\n\
                          - Understanding of UX/UI design principles"
                .to_string(),
            keywords: JobKeywords::Tiered {
                must_have: kw(&[
                    "html",
                    "css",
                    "javascript",
                    "react",
                    "git",
                    "responsive design",
                    "rest api",
                    "typescript",
                    "testing",
                    "accessibility",
                ]),
                nice_to_have: kw(&[
                    "jest",
                    "cypress",
                    "sass",
                    "frontend",
                    "web development",
                    "version control",
                    "mobile first",
                    "ui",
                    "ux",
                    "agile",
                    "node",
                    "npm",
                    "webpack",
                    "figma",
                ]),
            },
        },
        JobAd {
            id: "marketing".to_string(),
            title: "Marketing Coordinator".to_string(),
            company: "BrandFlow Agency".to_string(),
            description: "BrandFlow Agency is seeking a Marketing Coordinator to support our \
                          digital marketing campaigns and brand strategy efforts.\n\n\
                          Requirements:\n\
                          - Experience with social media management and content creation\n\
                          - Knowledge of SEO and SEM best practices\n\
                          - Familiarity with analytics tools (Google Analytics, social media insights)\n\
                          - Strong copywriting and content strategy skills\n\
                          - Experience with email marketing platforms (Mailchimp, HubSpot)\n\
                          - Understanding of campaign management and A/B testing\n\
                          - Basic graphic design skills (Canva, Adobe Creative Suite)\n\n\
                          Nice to have:\n\
                          - Experience with CRM systems\n\
                          - Knowledge of marketing automation\n\
                          - Video editing skills\n\
                          - Experience with influencer marketing\n\
                          - Understanding of brand positioning and market research"
                .to_string(),
            keywords: JobKeywords::Flat(kw(&[
                "social media",
                "content creation",
                "seo",
                "sem",
                "google analytics",
                "analytics",
                "copywriting",
                "content strategy",
                "email marketing",
                "mailchimp",
                "hubspot",
                "campaign management",
                "a/b testing",
                "graphic design",
                "canva",
                "adobe",
                "crm",
                "marketing automation",
                "brand",
                "market research",
                "digital marketing",
                "kpi",
                "roi",
                "engagement",
            ])),
        },
    ]
}
