//! Directory path resolution
//!
//! An environment override wins; otherwise the platform directories from
//! [`ProjectDirs`] are used (`~/.config` and `~/.local/share` on Linux, both
//! honouring the XDG variables).

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "kubectl-tekton-imagebuild";

fn app_dir(override_var: &str, pick: fn(&ProjectDirs) -> &Path, fallback: &str) -> PathBuf {
    if let Ok(dir) = std::env::var(override_var) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| pick(&dirs).to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(fallback).join(APP_NAME))
}

/// Directory holding the root `config.yaml` (`TEKTON_IMAGEBUILD_CONFIG_DIR` overrides)
pub fn config_dir() -> PathBuf {
    app_dir("TEKTON_IMAGEBUILD_CONFIG_DIR", ProjectDirs::config_dir, ".config")
}

/// Directory holding per-context settings (`TEKTON_IMAGEBUILD_DATA_DIR` overrides)
pub fn data_dir() -> PathBuf {
    app_dir("TEKTON_IMAGEBUILD_DATA_DIR", ProjectDirs::data_dir, ".local/share")
}

pub fn root_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Get the directory holding settings for one kubeconfig context
pub fn context_config_dir(context: &str) -> PathBuf {
    data_dir().join("contexts").join(context)
}

pub fn context_config_path(context: &str) -> PathBuf {
    context_config_dir(context).join("config.yaml")
}

/// Create `path` and its parents if missing
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
