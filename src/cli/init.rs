//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use lookout_client::config::Config;

/// Default configuration content for lookout init
pub const DEFAULT_CONFIG: &str = r#"# Lookout client configuration

# ============================================================================
# SERVER - Where the job listing API lives
# ============================================================================
#
# Available options:
#   url                - Base URL of the Lookout API
#   backend            - Optional backend identifier sent as ?backend= (e.g. "jsonb")
#   token              - Optional bearer token sent as the Authorization header
#   connect_timeout_ms - TCP connect timeout (default: 5000)
#   read_timeout_ms    - Response read timeout (default: 30000)

[server]
url = "http://localhost:10000"
# backend = "jsonb"
# token = ""
connect_timeout_ms = 5000
read_timeout_ms = 30000

# ============================================================================
# QUERY - Defaults for `lookout jobs`, overridable by flags
# ============================================================================

[query]
take = 100
active_job_sets = false

[query.order]
field = "jobId"
direction = "DESC"
"#;

pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_builtin_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine")?;

        assert!(init_command(Some(path.clone()), false).is_err());
        assert_eq!(std::fs::read_to_string(&path)?, "# mine");

        init_command(Some(path.clone()), true)?;
        assert_eq!(std::fs::read_to_string(&path)?, DEFAULT_CONFIG);
        Ok(())
    }

    #[test]
    fn init_creates_parent_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("a").join("b").join("config.toml");

        init_command(Some(path.clone()), false)?;
        assert!(Config::from_file(&path).is_ok());
        Ok(())
    }
}
