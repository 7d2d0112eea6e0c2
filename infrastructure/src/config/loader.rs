//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `SURVEYFORGE_PROVIDER__*`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./surveyforge.toml` or `./.surveyforge.toml`
    /// 4. Global: `~/.config/surveyforge/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["surveyforge.toml", ".surveyforge.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("SURVEYFORGE_").split("__"));

        let config: FileConfig = figment.extract().map_err(Box::new)?;
        Ok(FileConfig {
            provider: config.provider.resolve_api_key(),
        })
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig {
            provider: FileConfig::default().provider.resolve_api_key(),
        }
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("surveyforge").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["surveyforge.toml", ".surveyforge.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./surveyforge.toml or ./.surveyforge.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_defaults_has_deepseek_model() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.provider.model, "deepseek-chat");
    }

    #[test]
    fn global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("surveyforge"));
    }

    #[test]
    fn explicit_path_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
            [provider]
            model = "deepseek-reasoner"
            timeout_secs = 5
            "#,
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.provider.model, "deepseek-reasoner");
        assert_eq!(config.provider.timeout_secs, 5);
        // Untouched fields keep their defaults
        assert_eq!(config.provider.base_url, "https://api.deepseek.com");
    }

    #[test]
    fn env_overrides_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "surveyforge.toml",
                r#"
                [provider]
                model = "deepseek-chat"
                timeout_secs = 5
                "#,
            )?;
            jail.set_env("SURVEYFORGE_PROVIDER__MODEL", "deepseek-reasoner");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            // The environment layer merges last, so it beats the file
            assert_eq!(config.provider.model, "deepseek-reasoner");
            // Fields without an env override still come from the file
            assert_eq!(config.provider.timeout_secs, 5);
            Ok(())
        });
    }
}
