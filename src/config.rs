// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Minimum accepted password length at registration
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,

    /// Length of generated entity ids (vehicles, items, posts)
    #[serde(default = "default_id_len")]
    pub id_len: usize,

    /// Number of sample users seeded by `rolapet demo`
    #[serde(default = "default_demo_people")]
    pub demo_people: usize,
}

fn default_min_password_len() -> usize {
    4
}
fn default_id_len() -> usize {
    8
}
fn default_demo_people() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_password_len: default_min_password_len(),
            id_len: default_id_len(),
            demo_people: default_demo_people(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.rolapet.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".rolapet.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (ROLAPET_ID_LEN, ROLAPET_MIN_PASSWORD_LEN, ...)
        figment = figment.merge(Env::prefixed("ROLAPET_"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        // CLI overrides (highest priority)
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "rolapet").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(len) = cli.id_len {
            self.id_len = len;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=64).contains(&self.min_password_len) {
            return Err(Error::Config(format!(
                "min_password_len must be 1-64, got {}",
                self.min_password_len
            )));
        }

        if !(4..=32).contains(&self.id_len) {
            return Err(Error::Config(format!(
                "id_len must be 4-32, got {}",
                self.id_len
            )));
        }

        if !(1..=50).contains(&self.demo_people) {
            return Err(Error::Config(format!(
                "demo_people must be 1-50, got {}",
                self.demo_people
            )));
        }

        Ok(())
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# RolaPet Configuration

# Minimum accepted password length at registration
min_password_len = 4

# Length of generated entity ids (vehicles, items, posts)
id_len = 8

# Number of sample users seeded by `rolapet demo`
demo_people = 3
"#;

        fs::write(&path, content)?;

        // Set secure permissions (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
