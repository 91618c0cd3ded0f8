use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::{Deserialize, Serialize};

use crate::utils;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub data_path: Option<PathBuf>,
    pub agency_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub socials: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let socials = ["twitch", "facebook", "twitter", "youtube"]
            .iter()
            .map(|name| SocialLink {
                name: name.to_string(),
                href: format!("#{name}"),
            })
            .collect();
        Self {
            data_path: None,
            agency_name: "724 events".to_string(),
            address: "45 avenue de la République, 75000 Paris".to_string(),
            phone: "01 23 45 67 89".to_string(),
            email: "contact@724events.com".to_string(),
            socials,
        }
    }
}

pub struct ConfigStore {
    path: PathBuf,
    data: Mutex<SiteConfig>,
}

impl ConfigStore {
    pub fn load() -> Self {
        Self::load_from(utils::config_path())
    }

    pub fn load_from(path: PathBuf) -> Self {
        let data = read_config(&path).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable config {}: {err}", path.display());
            SiteConfig::default()
        });
        Self {
            path,
            data: Mutex::new(data),
        }
    }

    pub fn read(&self) -> SiteConfig {
        match self.data.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn update<F>(&self, transform: F) -> Result<SiteConfig, String>
    where
        F: FnOnce(&mut SiteConfig),
    {
        let mut guard = self
            .data
            .lock()
            .map_err(|_| "config mutex poisoned".to_string())?;
        transform(&mut guard);
        write_config(&self.path, &guard)?;
        Ok(guard.clone())
    }
}

fn read_config(path: &Path) -> Result<SiteConfig, String> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(|err| err.to_string())?;
    serde_json::from_str(&contents).map_err(|err| err.to_string())
}

fn write_config(path: &Path, config: &SiteConfig) -> Result<(), String> {
    utils::ensure_parent(path).map_err(|err| err.to_string())?;
    let contents = serde_json::to_string_pretty(config).map_err(|err| err.to_string())?;
    fs::write(path, contents).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_agency_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ConfigStore::load_from(dir.path().join("config.json"));
        let config = store.read();
        assert_eq!(config.email, "contact@724events.com");
        assert_eq!(config.socials.len(), 4);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn update_persists_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.json");
        let store = ConfigStore::load_from(path.clone());
        let updated = store
            .update(|config| config.data_path = Some(PathBuf::from("/srv/site/data.json")))
            .expect("update config");
        assert_eq!(
            updated.data_path.as_deref(),
            Some(Path::new("/srv/site/data.json"))
        );

        let reloaded = ConfigStore::load_from(path);
        assert_eq!(reloaded.read().data_path, updated.data_path);
        assert_eq!(reloaded.read().phone, "01 23 45 67 89");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "phone": "02 00 00 00 00" }"#).expect("write config");
        let config = ConfigStore::load_from(path).read();
        assert_eq!(config.phone, "02 00 00 00 00");
        assert_eq!(config.agency_name, "724 events");
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("write config");
        assert_eq!(ConfigStore::load_from(path).read().email, "contact@724events.com");
    }
}
