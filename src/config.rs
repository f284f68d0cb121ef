use crate::error::{AssessError, Result};
use crate::types::config::ProcessConfig;
use crate::types::snapshot::AssessmentSnapshot;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/assess/config.toml";
pub const LOCAL_OVERRIDE_SUFFIX: &str = "local.toml";

/// Loads the process configuration at `path`, layered over the user-global
/// file and under an optional `<stem>.local.toml` sibling.
pub fn load_config(path: &Path) -> Result<ProcessConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(path, global.as_deref())
}

pub(crate) fn load_config_with_global(
    path: &Path,
    global_path: Option<&Path>,
) -> Result<ProcessConfig> {
    if !path.exists() {
        return Err(AssessError::PathNotFound(path.display().to_string()));
    }

    let mut merged = Value::Table(Map::new());
    if let Some(global) = global_path {
        merge_file_if_exists(&mut merged, global)?;
    }
    merge_file_if_exists(&mut merged, path)?;
    merge_file_if_exists(&mut merged, &local_override_path(path))?;

    let cfg: ProcessConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AssessError::ConfigParse(e.to_string()))?;
    tracing::debug!(
        path = %path.display(),
        trait_groups = cfg.trait_groups.len(),
        "process config loaded"
    );
    Ok(cfg)
}

pub fn local_override_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}.{LOCAL_OVERRIDE_SUFFIX}"))
}

pub fn load_snapshot(path: &Path) -> Result<AssessmentSnapshot> {
    if !path.exists() {
        return Err(AssessError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let snapshot: AssessmentSnapshot = serde_json::from_str(&content)?;
    tracing::debug!(
        path = %path.display(),
        candidate = %snapshot.candidate_id,
        responses = snapshot.responses.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AssessError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; any other value, arrays included, is replaced.
fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
