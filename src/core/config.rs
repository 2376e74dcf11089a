//! Choreography timings and server configuration.
//!
//! `ChoreographyConfig` holds every timing constant of the landing page and is
//! shared by the browser and native tests. The server-side `Config` is loaded
//! from environment variables after calling `dotenvy::dotenv()`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::intro::SHAPE_COUNT;
use super::lead::DEFAULT_LEAD_ENDPOINT;

/// Timing and threshold values for the whole page choreography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoreographyConfig {
    /// Length of the intro animation
    pub intro_duration_ms: f64,
    /// Raw progress at which the mask starts fading out
    pub mask_fade_start: f64,
    /// Raw progress at which the shapes start converging
    pub convergence_start: f64,
    /// Convergence progress after which logo elements are shown
    pub logo_reveal_after: f64,
    /// Shape fade-out, also the delay before the hand-off sequence
    pub shape_fade_out_ms: u32,
    /// Base scale multiplier of each shape
    pub shape_scales: [f64; SHAPE_COUNT],
    /// Resting opacity of each shape
    pub shape_opacities: [f64; SHAPE_COUNT],
    /// Delay before the first heading character
    pub typing_start_delay_ms: u32,
    /// Interval between heading characters
    pub typing_speed_ms: u32,
    /// Fade of the typing cursor after the heading is complete
    pub cursor_fade_ms: u32,
    /// Pause between heading completion and the subtitle
    pub first_type_pause_ms: u32,
    /// Delay before the call-to-action and again before the auxiliary links
    pub reveal_delay_ms: u32,
    /// Visible fraction that counts as "in view" for scroll reveals
    pub reveal_threshold: f64,
    /// Where lead submissions are posted
    pub lead_endpoint: String,
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self {
            intro_duration_ms: 7000.0,
            mask_fade_start: 0.5,
            convergence_start: 0.6,
            logo_reveal_after: 0.5,
            shape_fade_out_ms: 500,
            shape_scales: [0.3, 0.6, 1.0],
            shape_opacities: [0.3, 0.6, 1.0],
            typing_start_delay_ms: 1000,
            typing_speed_ms: 30,
            cursor_fade_ms: 300,
            first_type_pause_ms: 500,
            reveal_delay_ms: 2000,
            reveal_threshold: 0.1,
            lead_endpoint: DEFAULT_LEAD_ENDPOINT.to_string(),
        }
    }
}

impl ChoreographyConfig {
    /// Use a different lead endpoint, keeping every timing value.
    pub fn with_lead_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.lead_endpoint = endpoint.into();
        self
    }

    /// Check that thresholds are fractions and the intro has a length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.intro_duration_ms > 0.0) {
            return Err(ConfigError::NonPositiveDuration(self.intro_duration_ms));
        }

        let fractions = [
            ("mask_fade_start", self.mask_fade_start),
            ("convergence_start", self.convergence_start),
            ("logo_reveal_after", self.logo_reveal_after),
        ];
        for (name, value) in fractions {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::OutOfRange {
                name: "reveal_threshold",
                value: self.reveal_threshold,
            });
        }

        if self.lead_endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }

        Ok(())
    }
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Override for the lead submission endpoint
    /// Example: https://staging.example.com/api/v1/alpha-access/
    pub lead_endpoint: Option<String>,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            lead_endpoint: std::env::var("LEAD_ENDPOINT")
                .ok()
                .filter(|value| !value.trim().is_empty()),
        }
    }

    /// Check if the lead endpoint is overridden
    pub fn has_lead_endpoint_override(&self) -> bool {
        self.lead_endpoint.is_some()
    }

    /// Endpoint published to the browser
    pub fn lead_endpoint(&self) -> &str {
        self.lead_endpoint.as_deref().unwrap_or(DEFAULT_LEAD_ENDPOINT)
    }

    /// Choreography settings with this server's endpoint applied
    pub fn choreography(&self) -> ChoreographyConfig {
        ChoreographyConfig::default().with_lead_endpoint(self.lead_endpoint())
    }
}
