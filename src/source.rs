use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::models::DataSnapshot;

/// Anything that can hand over the current snapshot of the site's data.
pub trait EventSource {
    fn name(&self) -> &str;
    fn snapshot(&self) -> Result<DataSnapshot>;
}

pub struct JsonFileSource {
    path: PathBuf,
    label: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }
}

impl EventSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn snapshot(&self) -> Result<DataSnapshot> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("unable to read data file {}", self.label))?;
        let snapshot: DataSnapshot = serde_json::from_str(&contents)
            .with_context(|| format!("invalid data file {}", self.label))?;
        log::debug!(
            "loaded {} events from {}",
            snapshot.events().map_or(0, <[_]>::len),
            self.label
        );
        Ok(snapshot)
    }
}
