use crate::capture::ImageKind;
use crate::locale::Locale;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub prediction_base_url: String,
    pub accepted_kinds: Vec<ImageKind>,
    pub loading_step_interval: Duration,
    pub default_locale: Locale,
    pub speech_enabled: bool,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prediction_base_url: "http://localhost:2020".to_string(),
            accepted_kinds: vec![ImageKind::Jpeg, ImageKind::Png],
            loading_step_interval: Duration::from_secs(1),
            default_locale: Locale::En,
            speech_enabled: true,
            logger_timezone: india_standard_time(),
        }
    }
}

impl Config {
    /// The endpoint host is the only environment knob.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("PREDICTION_API_URL") {
            let url = url.trim();
            if !url.is_empty() {
                config.prediction_base_url = url.trim_end_matches('/').to_string();
            }
        }
        config
    }
}

fn india_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_accepts_jpeg_and_png_only() {
        let config = Config::default();
        assert_eq!(
            config.accepted_kinds,
            vec![ImageKind::Jpeg, ImageKind::Png]
        );
    }

    #[test]
    fn default_points_at_local_endpoint() {
        assert_eq!(
            Config::default().prediction_base_url,
            "http://localhost:2020"
        );
    }
}
