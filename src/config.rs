use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{Message, UserProfile};

// Default configuration
pub const DEFAULT_DELETE_URL: &str = "https://e-college-data.onrender.com/v1/chat/delete-message";
pub const PROFILE_FILE: &str = "user_info.json";

/// Persisted client settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Endpoint for the soft-delete call
    pub delete_url: String,
    /// Where the message feed is loaded from, if not given on the command line
    #[serde(default)]
    pub messages_path: Option<PathBuf>,
    /// Where the current user's profile is stored
    #[serde(default)]
    pub profile_path: Option<PathBuf>,
    /// Downloads go here instead of the platform download dir
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Longest edge of inline image previews, in pixels
    #[serde(default = "default_preview_size")]
    pub preview_max_px: u32,
    #[serde(default)]
    pub theme: String,
}

fn default_preview_size() -> u32 {
    192
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delete_url: DEFAULT_DELETE_URL.to_string(),
            messages_path: None,
            profile_path: None,
            download_dir: None,
            preview_max_px: default_preview_size(),
            theme: "light".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "scroll-chat", "scroll-chat")
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = project_dirs() {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

/// Default location of the stored user profile.
pub fn default_profile_path() -> Option<PathBuf> {
    project_dirs().map(|proj| proj.data_dir().join(PROFILE_FILE))
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    load_settings_from(&path).ok()
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    if let Some(path) = settings_path() {
        save_settings_to(settings, &path)?;
    }
    Ok(())
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    let mut file = fs::File::create(path)?;
    let data = serde_json::to_string_pretty(settings)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}

/// Read the stored profile once at startup.
///
/// A missing file means nobody is signed in, which is not an error.
pub fn load_profile(path: &Path) -> Result<Option<UserProfile>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Load a message feed exported as a JSON array.
pub fn load_messages(path: &Path) -> Result<Vec<Message>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
