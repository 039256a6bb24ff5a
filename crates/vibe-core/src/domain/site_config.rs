// ============================================================================
// Vibe Core - Site Configuration Entity
// File: crates/vibe-core/src/domain/site_config.rs
// Description: Site-wide CMS settings, stored as a single row
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identity of the one and only configuration row.
pub const SITE_CONFIG_KEY: i32 = 1;

const YOUTUBE_WATCH_MARKER: &str = "youtube.com/watch?v=";
const YOUTUBE_SHORT_MARKER: &str = "youtu.be/";

/// Site configuration entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SiteConfiguration {
    #[serde(skip)]
    pub id: i32,

    #[validate(length(min = 1, max = 200, message = "Site name must be between 1 and 200 characters"))]
    pub site_name: String,

    #[validate(length(max = 500, message = "Hero title too long"))]
    pub hero_title: String,

    pub hero_subtitle: String,

    #[validate(length(max = 500, message = "Hero video URL too long"))]
    pub hero_video_url: String,

    pub updated_at: DateTime<Utc>,
}

impl Default for SiteConfiguration {
    fn default() -> Self {
        Self {
            id: SITE_CONFIG_KEY,
            site_name: "Capital of Fusion".to_string(),
            hero_title: "L'EXPÉRIENCE BACHATA ULTIME".to_string(),
            hero_subtitle: "Plongez dans l'univers de la Bachata Fusion. Apprenez, progressez et connectez-vous avec la meilleure communauté de France.".to_string(),
            hero_video_url: "https://www.youtube.com/watch?v=XOfvM3i9S4A".to_string(),
            updated_at: Utc::now(),
        }
    }
}

impl SiteConfiguration {
    pub fn video_id(&self) -> Option<&str> {
        extract_video_id(&self.hero_video_url)
    }
}

/// Pulls the video identifier out of a `…youtube.com/watch?v=ID` or a
/// `…youtu.be/ID` URL. Any other shape, or an empty id, yields `None`.
pub fn extract_video_id(url: &str) -> Option<&str> {
    let id = if let Some((_, rest)) = url.split_once(YOUTUBE_WATCH_MARKER) {
        rest.split(['&', '#']).next()
    } else if let Some((_, rest)) = url.split_once(YOUTUBE_SHORT_MARKER) {
        rest.split(['?', '#', '/']).next()
    } else {
        None
    }?;

    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=XOfvM3i9S4A"),
            Some("XOfvM3i9S4A")
        );
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=XOfvM3i9S4A&t=42s"),
            Some("XOfvM3i9S4A")
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(extract_video_id("https://youtu.be/abc123?t=5"), Some("abc123"));
        assert_eq!(extract_video_id("https://youtu.be/abc123"), Some("abc123"));
    }

    #[test]
    fn test_unrecognized_url() {
        assert_eq!(extract_video_id("https://example.com/video"), None);
        assert_eq!(extract_video_id("https://youtu.be/"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfiguration::default();
        assert_eq!(config.id, SITE_CONFIG_KEY);
        assert_eq!(config.site_name, "Capital of Fusion");
        assert_eq!(config.video_id(), Some("XOfvM3i9S4A"));
        assert!(config.validate().is_ok());
    }
}
