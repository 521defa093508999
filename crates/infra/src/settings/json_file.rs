use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use fs2::FileExt;
use post_stats_domain::config::{SettingKey, SettingValue};
use post_stats_ports::settings::SettingsStore;
use post_stats_shared_kernel::{InfrastructureError, Result};
use serde::{Deserialize, Serialize};

use crate::persistence::{FileReader, FileWriter};

const SETTINGS_VERSION: u32 = 1;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Local>>,
    #[serde(default)]
    settings: BTreeMap<String, SettingValue>,
}

/// Settings persisted as a pretty-printed JSON document.
///
/// The file is re-read on every access so separate processes see each
/// other's saves; writes hold an exclusive lock and replace the file atomically.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time of the last save, if the file records one.
    pub fn saved_at(&self) -> Result<Option<DateTime<Local>>> {
        Ok(self.load()?.saved_at)
    }

    fn load(&self) -> Result<SettingsFile> {
        let contents = FileReader::read_optional(&self.path)
            .map_err(|source| InfrastructureError::SettingsRead { path: self.path.clone(), source })?;
        let Some(contents) = contents.filter(|c| !c.trim().is_empty()) else {
            return Ok(SettingsFile { version: SETTINGS_VERSION, ..SettingsFile::default() });
        };

        let file: SettingsFile = serde_json::from_str(&contents).map_err(|err| {
            InfrastructureError::SerializationError {
                format: "JSON".to_string(),
                details: format!("{}: {err}", self.path.display()),
            }
        })?;
        if file.version > SETTINGS_VERSION {
            return Err(InfrastructureError::SerializationError {
                format: "JSON".to_string(),
                details: format!(
                    "{}: settings version {} is newer than supported version {SETTINGS_VERSION}",
                    self.path.display(),
                    file.version
                ),
            }
            .into());
        }
        for name in file.settings.keys().filter(|name| name.parse::<SettingKey>().is_err()) {
            log::warn!("{}: ignoring unknown setting '{name}'", self.path.display());
        }
        Ok(file)
    }

    fn write(&self, mut file: SettingsFile) -> Result<()> {
        file.version = SETTINGS_VERSION;
        file.saved_at = Some(Local::now());
        let data = serde_json::to_vec_pretty(&file)?;
        FileWriter::atomic_write(&self.path, &data)
            .map_err(|source| InfrastructureError::SettingsWrite { path: self.path.clone(), source })?;
        log::debug!("wrote {} setting(s) to {}", file.settings.len(), self.path.display());
        Ok(())
    }

    /// Runs `f` while holding an exclusive lock next to the settings file.
    ///
    /// The lock file is never removed: every writer must lock the same inode.
    fn with_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock_path = self.path.with_extension("lock");
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| InfrastructureError::SettingsWrite { path: parent.to_path_buf(), source })?;
        }
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|source| InfrastructureError::SettingsWrite { path: lock_path.clone(), source })?;
        lock_file
            .lock_exclusive()
            .map_err(|source| InfrastructureError::SettingsWrite { path: lock_path.clone(), source })?;

        let result = f();

        if let Err(err) = lock_file.unlock() {
            log::debug!("unlocking {} failed: {err}", lock_path.display());
        }
        result
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn get(&self, key: SettingKey) -> Result<Option<SettingValue>> {
        Ok(self.load()?.settings.remove(key.as_str()))
    }

    fn set(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        self.set_many(vec![(key, value)])
    }

    fn set_many(&self, values: Vec<(SettingKey, SettingValue)>) -> Result<()> {
        self.with_lock(|| {
            let mut file = self.load()?;
            for (key, value) in values {
                file.settings.insert(key.as_str().to_string(), value);
            }
            self.write(file)
        })
    }
}
