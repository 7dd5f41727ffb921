//! Author profile shown on the about page

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorProfile {
    pub name: String,
    pub avatar: String,
    pub occupation: String,
    pub company: String,
    pub email: String,
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
    /// Pre-rendered HTML, inserted as-is
    pub bio: String,
}

impl AuthorProfile {
    /// Profile built from the site metadata when no author file exists
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            name: config.author.clone(),
            avatar: config.site_logo.clone(),
            email: config.email.clone(),
            twitter: config.twitter.clone(),
            linkedin: config.linkedin.clone(),
            github: config.github.clone(),
            ..Default::default()
        }
    }

    /// Fill blank fields from the site metadata
    pub fn with_fallbacks(mut self, config: &SiteConfig) -> Self {
        let fallback = Self::from_config(config);
        for (field, value) in [
            (&mut self.name, fallback.name),
            (&mut self.avatar, fallback.avatar),
            (&mut self.email, fallback.email),
            (&mut self.twitter, fallback.twitter),
            (&mut self.linkedin, fallback.linkedin),
            (&mut self.github, fallback.github),
        ] {
            if field.is_empty() {
                *field = value;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_keep_explicit_fields() {
        let mut config = SiteConfig::default();
        config.author = "Site Author".to_string();
        config.github = "https://github.com/site".to_string();
        config.email = "site@example.com".to_string();

        let profile = AuthorProfile {
            name: "Profile Name".to_string(),
            email: "me@example.com".to_string(),
            ..Default::default()
        }
        .with_fallbacks(&config);

        assert_eq!(profile.name, "Profile Name");
        assert_eq!(profile.email, "me@example.com");
        assert_eq!(profile.github, "https://github.com/site");
        assert_eq!(profile.occupation, "");
    }
}
