use crate::error::{Result, ScrapeError};
use crate::parsers::ParserKind;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Environment variable overriding the download output root
pub const OUTPUT_DIR_ENV: &str = "STATIC_SCRAPE_OUTPUT_DIR";

/// Environment variable overriding the HTTP user agent
pub const USER_AGENT_ENV: &str = "STATIC_SCRAPE_USER_AGENT";

/// Configuration for a page session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// URL of the page to scrape
    pub url: String,

    /// Parser used to build the document tree
    #[serde(default)]
    pub parser: ParserKind,

    /// Root under which the images directory is created
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Name of the images directory inside `output_dir`
    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    /// User agent sent with every request
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds (none by default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Default value for output_dir
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Default value for images_dir
fn default_images_dir() -> String {
    "images".to_string()
}

impl ScraperConfig {
    /// Create a new configuration with default values
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            parser: ParserKind::default(),
            output_dir: default_output_dir(),
            images_dir: default_images_dir(),
            user_agent: None,
            timeout_secs: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|e| ScrapeError::Config(format!("cannot open {}: {}", path.display(), e)))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ScrapeError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScrapeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from the environment when the variables are set and non-empty
    pub fn apply_env(mut self) -> Self {
        if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
            if !dir.is_empty() {
                self.output_dir = PathBuf::from(dir);
            }
        }
        if let Ok(agent) = std::env::var(USER_AGENT_ENV) {
            if !agent.is_empty() {
                self.user_agent = Some(agent);
            }
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(ScrapeError::Config("url must not be empty".to_string()));
        }
        if self.images_dir.trim().is_empty() {
            return Err(ScrapeError::Config("images_dir must not be empty".to_string()));
        }
        Ok(())
    }
}
