use serde::Deserialize;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use dotenv::dotenv;

pub const DEFAULT_AVAILABILITY_PATH: &str = "/search-availability-json";
pub const DEFAULT_BOOKING_PATH: &str = "/book-room";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Booking API the server forwards availability checks to
    pub upstream_url: String,
    /// Path of the availability endpoint, both on this server and upstream
    #[serde(default = "default_availability_path")]
    pub availability_path: String,
    /// Where the "Book now!" link continues the booking
    #[serde(default = "default_booking_path")]
    pub booking_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upstream_url: "http://localhost:8080".to_string(),
            availability_path: default_availability_path(),
            booking_path: default_booking_path(),
        }
    }
}

fn default_availability_path() -> String {
    DEFAULT_AVAILABILITY_PATH.to_string()
}

fn default_booking_path() -> String {
    DEFAULT_BOOKING_PATH.to_string()
}

/// The part of the settings the browser widget needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetPaths {
    pub availability_path: String,
    pub booking_path: String,
}

impl Default for WidgetPaths {
    fn default() -> Self {
        Self {
            availability_path: default_availability_path(),
            booking_path: default_booking_path(),
        }
    }
}

impl From<&Settings> for WidgetPaths {
    fn from(settings: &Settings) -> Self {
        Self {
            availability_path: settings.availability_path.clone(),
            booking_path: settings.booking_path.clone(),
        }
    }
}

impl Settings {
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        dotenv().ok();

        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings: Settings = serde_yaml::from_str(contents)?;

        settings.upstream_url = parse_env_var(&settings.upstream_url)?;

        Ok(settings)
    }
}

fn parse_env_var(value: &str) -> Result<String, Box<dyn std::error::Error>> {
    if value.starts_with("${") && value.ends_with("}") {
        let env_name = &value[2..value.len() - 1];
        match env::var(env_name) {
            Ok(val) => Ok(val),
            Err(_) => Err(format!("Environment variable '{}' not found", env_name).into()),
        }
    } else {
        Ok(value.to_string())
    }
}
