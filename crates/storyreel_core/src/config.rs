//! Configuration loading.
//!
//! Configuration is layered, later sources overriding earlier ones:
//! - Bundled defaults (include_str! from storyreel.toml)
//! - `~/.config/storyreel/storyreel.toml`
//! - `./storyreel.toml`

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use storyreel_error::{ConfigError, StoryreelError, StoryreelResult};
use tracing::{debug, instrument};

/// Story extension settings.
///
/// # Example
///
/// ```toml
/// [story]
/// nb_shots = 4
/// shot_duration_ms = 3000
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct StoryConfig {
    /// Shots written per extension request
    nb_shots: u32,
    /// Length given to each new shot
    shot_duration_ms: u64,
    /// Maximum prompt length in characters
    max_prompt_length: usize,
    /// Music prompt of last resort
    fallback_music_prompt: String,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            nb_shots: 4,
            shot_duration_ms: 3000,
            max_prompt_length: 1024,
            fallback_music_prompt: "lofi hiphop loop".to_string(),
        }
    }
}

impl StoryConfig {
    /// Creates a new story config builder.
    pub fn builder() -> StoryConfigBuilder {
        StoryConfigBuilder::default()
    }
}

/// Storyboard prompt settings.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct StoryboardConfig {
    /// Terms appended to prompts derived from a shot's segments
    extra_terms: Vec<String>,
    /// Terms appended to every prompt sent to the renderer
    positive_terms: Vec<String>,
}

impl Default for StoryboardConfig {
    fn default() -> Self {
        Self {
            extra_terms: ["high quality", "crisp", "detailed"]
                .map(String::from)
                .to_vec(),
            positive_terms: [
                "beautiful",
                "intricate details",
                "award winning",
                "high resolution",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl StoryboardConfig {
    /// Creates a new storyboard config builder.
    pub fn builder() -> StoryboardConfigBuilder {
        StoryboardConfigBuilder::default()
    }
}

/// Generation service endpoints and transport policy.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct ServicesConfig {
    /// Base URL of the story writing service
    story_url: String,
    /// Base URL of the storyboard rendering service
    storyboard_url: String,
    /// Environment variable holding the bearer token, if any
    api_key_env: Option<String>,
    /// Retry attempts for transient failures, overriding the per-error default
    max_retries: Option<usize>,
    /// First retry delay, overriding the per-error default
    initial_backoff_ms: Option<u64>,
    /// Upper bound on a single retry delay, overriding the per-error default
    max_delay_secs: Option<u64>,
    /// Client-side request rate limit
    requests_per_minute: u32,
    /// Per-request timeout
    timeout_secs: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            story_url: "http://localhost:8080".to_string(),
            storyboard_url: "http://localhost:8080".to_string(),
            api_key_env: Some("STORYREEL_API_KEY".to_string()),
            max_retries: None,
            initial_backoff_ms: None,
            max_delay_secs: None,
            requests_per_minute: 30,
            timeout_secs: 120,
        }
    }
}

impl ServicesConfig {
    /// Creates a new services config builder.
    pub fn builder() -> ServicesConfigBuilder {
        ServicesConfigBuilder::default()
    }
}

/// Top-level Storyreel configuration.
///
/// # Example
///
/// ```no_run
/// use storyreel_core::StoryreelConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryreelConfig::load()?;
/// println!("shots per extension: {}", config.story.nb_shots());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryreelConfig {
    /// Story extension settings
    pub story: StoryConfig,
    /// Storyboard prompt settings
    pub storyboard: StoryboardConfig,
    /// Generation services
    pub services: ServicesConfig,
}

impl StoryreelConfig {
    /// Load configuration from a specific file path, on top of the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryreelResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StoryreelError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryreelError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> StoryreelResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyreel/storyreel.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyreel").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                StoryreelError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryreelError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make orchestration meaningless.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid field.
    pub fn validate(&self) -> StoryreelResult<()> {
        if self.story.nb_shots == 0 {
            return Err(ConfigError::new("story.nb_shots must be at least 1").into());
        }
        if self.story.shot_duration_ms == 0 {
            return Err(ConfigError::new("story.shot_duration_ms must be positive").into());
        }
        if self.story.max_prompt_length == 0 {
            return Err(ConfigError::new("story.max_prompt_length must be positive").into());
        }
        if self.services.requests_per_minute == 0 {
            return Err(
                ConfigError::new("services.requests_per_minute must be at least 1").into(),
            );
        }
        Ok(())
    }
}

const DEFAULT_CONFIG: &str = include_str!("../../../storyreel.toml");
