//! Configuration types for the hostel site

use std::path::{Path, PathBuf};
use std::time::Duration;

use hostel_content::facilities::KEY_FACILITY_LIMIT;
use hostel_content::CategoryMatching;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentStoreConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Config {
    /// Pull secrets referenced by environment variable name into the config
    pub fn resolve_secrets(&mut self) -> crate::Result<()> {
        if let ContentStoreConfig::Http {
            api_key,
            api_key_env: Some(var),
            ..
        } = &mut self.content
        {
            if api_key.is_none() {
                let value = std::env::var(var.as_str()).map_err(|e| {
                    crate::SiteError::Config(format!(
                        "CMS API key variable {} is not usable: {}",
                        var, e
                    ))
                })?;
                *api_key = Some(value);
            }
        }
        Ok(())
    }
}

/// Content store configuration with tagged enum for extensibility
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentStoreConfig {
    #[serde(rename = "http")]
    Http {
        base_url: String,
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default)]
        api_key_env: Option<String>,
        #[serde(default = "default_timeout", with = "humantime_serde")]
        timeout: Duration,
    },
    #[serde(rename = "directory")]
    Directory {
        #[serde(default = "default_content_dir")]
        path: PathBuf,
    },
}

impl Default for ContentStoreConfig {
    fn default() -> Self {
        ContentStoreConfig::Directory {
            path: default_content_dir(),
        }
    }
}

impl ContentStoreConfig {
    pub fn type_name(&self) -> &str {
        match self {
            ContentStoreConfig::Http { .. } => "http",
            ContentStoreConfig::Directory { .. } => "directory",
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// Business details shown in the shell and on the contact page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
    #[serde(default = "default_office_hours")]
    pub office_hours: String,
    #[serde(default = "default_map_embed_url")]
    pub map_embed_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            address: default_address(),
            phone: default_phone(),
            email: default_email(),
            whatsapp_number: default_whatsapp_number(),
            office_hours: default_office_hours(),
            map_embed_url: default_map_embed_url(),
        }
    }
}

/// How content collections are derived into pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_key_facility_limit")]
    pub key_facility_limit: usize,
    #[serde(default)]
    pub category_matching: CategoryMatching,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            key_facility_limit: default_key_facility_limit(),
            category_matching: CategoryMatching::default(),
        }
    }
}

/// Contact form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Artificial delay of the simulated submission
    #[serde(default = "default_submit_delay", with = "humantime_serde")]
    pub submit_delay: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay: default_submit_delay(),
        }
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

/// The sample collections shipped with this crate, independent of the working directory
fn default_content_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content")
}

fn default_port() -> u16 {
    8080
}

fn default_brand() -> String {
    "CITY HOSTEL".to_string()
}

fn default_address() -> String {
    "Bhawarkua, Indore, Madhya Pradesh, India".to_string()
}

fn default_phone() -> String {
    "+91 96916 30277".to_string()
}

fn default_email() -> String {
    "info@cityhostel.com".to_string()
}

fn default_whatsapp_number() -> String {
    "919302777888".to_string()
}

fn default_office_hours() -> String {
    "Monday - Sunday: 9:00 AM - 8:00 PM".to_string()
}

fn default_map_embed_url() -> String {
    "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3681.0234567890123!2d75.8577!3d22.7196!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMjLCsDQzJzEwLjYiTiA3NcKwNTEnMjcuNyJF!5e0!3m2!1sen!2sin!4v1234567890123".to_string()
}

fn default_key_facility_limit() -> usize {
    KEY_FACILITY_LIMIT
}

fn default_submit_delay() -> Duration {
    Duration::from_secs(1)
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::SiteError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
