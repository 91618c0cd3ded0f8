use dirs::data_dir;
use once_cell::sync::Lazy;
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

pub const DATA_PATH_ENV: &str = "EVENT_SHOWCASE_DATA";

static DATA_ROOT: Lazy<PathBuf> = Lazy::new(|| {
    let base = data_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    base.join("event-showcase")
});

pub fn data_root() -> PathBuf {
    DATA_ROOT.clone()
}

pub fn config_path() -> PathBuf {
    data_root().join("config.json")
}

pub fn default_data_path() -> PathBuf {
    data_root().join("data.json")
}

/// `--data` wins, then the env override, then the configured path, then the default.
pub fn resolve_data_path(explicit: Option<PathBuf>, configured: Option<&Path>) -> PathBuf {
    choose_data_path(explicit, std::env::var_os(DATA_PATH_ENV), configured)
}

fn choose_data_path(
    explicit: Option<PathBuf>,
    from_env: Option<OsString>,
    configured: Option<&Path>,
) -> PathBuf {
    explicit
        .or_else(|| from_env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| configured.map(Path::to_path_buf))
        .unwrap_or_else(default_data_path)
}

pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_and_data_live_under_the_root() {
        assert!(config_path().starts_with(data_root()));
        assert!(default_data_path().starts_with(data_root()));
    }

    #[test]
    fn data_path_precedence() {
        let cli = Some(PathBuf::from("/cli/data.json"));
        let env = Some(OsString::from("/env/data.json"));
        let configured = Some(Path::new("/config/data.json"));

        assert_eq!(
            choose_data_path(cli.clone(), env.clone(), configured),
            PathBuf::from("/cli/data.json")
        );
        assert_eq!(
            choose_data_path(None, env, configured),
            PathBuf::from("/env/data.json")
        );
        assert_eq!(
            choose_data_path(None, Some(OsString::new()), configured),
            PathBuf::from("/config/data.json")
        );
        assert_eq!(
            choose_data_path(None, None, configured),
            PathBuf::from("/config/data.json")
        );
        assert_eq!(choose_data_path(None, None, None), default_data_path());
    }

    #[test]
    fn env_override_is_read() {
        std::env::set_var(DATA_PATH_ENV, "/from/env/data.json");
        let resolved = resolve_data_path(None, Some(Path::new("/config/data.json")));
        std::env::remove_var(DATA_PATH_ENV);
        assert_eq!(resolved, PathBuf::from("/from/env/data.json"));
    }

    #[test]
    fn ensure_parent_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b").join("data.json");
        ensure_parent(&nested).expect("create parents");
        assert!(nested.parent().expect("parent").is_dir());
        ensure_parent(Path::new("data.json")).expect("bare file name");
    }
}
