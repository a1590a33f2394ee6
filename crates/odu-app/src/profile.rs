use std::fs;
use std::path::PathBuf;

use odu_config::Config;
use serde::{Deserialize, Serialize};

fn profiles_dir() -> PathBuf {
    odu_config::data_dir().join("profiles")
}

fn profile_path(name: &str) -> PathBuf {
    profiles_dir().join(format!("{name}.json"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Write a profile built from the environment defaults unless one exists.
///
/// Returns the profile path and whether it was newly written.
pub fn init_profile(name: &str, force: bool) -> anyhow::Result<(PathBuf, bool)> {
    fs::create_dir_all(profiles_dir())?;

    let path = profile_path(name);
    if path.exists() && !force {
        tracing::info!("Profile {name} already exists");
        return Ok((path, false));
    }

    let profile = Profile {
        name: name.into(),
        value: Config::new(),
    };
    fs::write(&path, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created profile: {name}");
    Ok((path, true))
}

/// Load a user profile by name, falling back to main, then to defaults
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let profile_file = profile_path(name);

    if profile_file.exists() {
        let data = fs::read_to_string(profile_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        return Ok(profile.value);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
    let main_file = profile_path("main");
    if main_file.exists() {
        let data = fs::read_to_string(main_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    } else {
        Ok(Config::new())
    }
}
