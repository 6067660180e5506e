//! Owner profile used by the hero, about, contact and footer sections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialKind {
    Instagram,
    Email,
    Linkedin,
}

impl SocialKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Email => "email",
            Self::Linkedin => "linkedin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub avatar_url: String,
    pub about: Vec<String>,
    pub skills: Vec<String>,
    pub quote: String,
    pub contact_email: String,
    pub social_links: Vec<SocialLink>,
}

impl SiteProfile {
    /// Target of the "Email Me" action.
    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    pub fn footer_notice(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.name)
    }

    pub fn social_link(&self, kind: SocialKind) -> Option<&SocialLink> {
        self.social_links.iter().find(|link| link.kind == kind)
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        let contact_email = "gattasiva12@gmail.com".to_string();
        Self {
            name: "Gatta Venkata Siva".to_string(),
            role: "Data Analyst".to_string(),
            tagline: "I transform raw data into actionable insights that drive business \
                      decisions."
                .to_string(),
            avatar_url: "https://i.postimg.cc/qJkW1xgK/profile-pic.jpg".to_string(),
            about: vec![
                "I'm Gatta Venkata Siva, a passionate data analyst with a keen eye for detail \
                 and a love for transforming raw data into meaningful insights. With expertise \
                 in data visualization, statistical analysis, and business intelligence, I help \
                 organizations make data-driven decisions."
                    .to_string(),
                "My approach combines analytical thinking with creative visualization to \
                 deliver insights that not only reveal patterns but also effectively \
                 communicate findings to stakeholders and drive business growth."
                    .to_string(),
            ],
            skills: ["Python", "SQL", "Power BI", "Excel", "Machine Learning", "Statistics"]
                .iter()
                .map(|skill| skill.to_string())
                .collect(),
            quote: "Data tells a story - I help you understand it.".to_string(),
            social_links: vec![
                SocialLink {
                    kind: SocialKind::Instagram,
                    url: "https://www.instagram.com/liosiva_1006?igsh=MTRmNXI1bjU2anB4ZQ=="
                        .to_string(),
                },
                SocialLink {
                    kind: SocialKind::Email,
                    url: format!("mailto:{contact_email}"),
                },
                SocialLink {
                    kind: SocialKind::Linkedin,
                    url: "https://www.linkedin.com/in/venkata-siva-gatta-a22503180/".to_string(),
                },
            ],
            contact_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SiteProfile, SocialKind};

    #[test]
    fn mailto_matches_email_social_link() {
        let profile = SiteProfile::default();
        let email = profile
            .social_link(SocialKind::Email)
            .expect("email link should exist");
        assert_eq!(email.url, profile.mailto_url());
    }

    #[test]
    fn footer_notice_names_owner_and_year() {
        let notice = SiteProfile::default().footer_notice(2026);
        assert!(notice.starts_with("© 2026 Gatta Venkata Siva"));
    }
}
