//! Context configuration file I/O

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::context as context_config;
use crate::error::{PlatError, Result};

use super::models::ContextConfig;

fn io_error(action: &str, path: &Path, err: std::io::Error) -> PlatError {
    PlatError::Io(format!("failed to {} {}: {}", action, path.display(), err))
}

/// The JSON file holding every named context
#[derive(Debug, Clone)]
pub struct ContextStore {
    config_path: PathBuf,
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStore {
    /// Store at ~/.platctl/config.json
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(
            home.join(context_config::DIR_NAME)
                .join(context_config::FILE_NAME),
        )
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Read the file. A file that does not exist yet holds no contexts.
    pub fn load(&self) -> Result<ContextConfig> {
        let content = match fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ContextConfig::default()),
            Err(e) => return Err(io_error("read", &self.config_path, e)),
        };

        serde_json::from_str(&content)
            .map_err(|e| PlatError::Json(format!("{}: {}", self.config_path.display(), e)))
    }

    /// Load, apply `edit`, and write the result back.
    ///
    /// Nothing is written when `edit` fails.
    pub fn update<T, F>(&self, edit: F) -> Result<T>
    where
        F: FnOnce(&mut ContextConfig) -> Result<T>,
    {
        let mut config = self.load()?;
        let out = edit(&mut config)?;
        self.save(&config)?;
        Ok(out)
    }

    /// Replace the file with `config`.
    ///
    /// The new content goes to a sibling `.tmp` file (owner-only on Unix,
    /// since tokens live here) which is then renamed over the old one.
    pub fn save(&self, config: &ContextConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;

        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir).map_err(|e| io_error("create", dir, e))?;
        }

        let tmp_path = self.config_path.with_extension("json.tmp");
        // A leftover from an interrupted save would keep its old mode
        match fs::remove_file(&tmp_path) {
            Err(e) if e.kind() != ErrorKind::NotFound => {
                return Err(io_error("remove", &tmp_path, e));
            }
            _ => {}
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options
            .open(&tmp_path)
            .map_err(|e| io_error("create", &tmp_path, e))?;
        file.write_all(json.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| io_error("write", &tmp_path, e))?;

        fs::rename(&tmp_path, &self.config_path)
            .map_err(|e| io_error("replace", &self.config_path, e))
    }
}
