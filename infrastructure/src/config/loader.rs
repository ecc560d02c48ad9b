//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "friendtype";
const PROJECT_FILES: [&str; 2] = ["friendtype.toml", ".friendtype.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./friendtype.toml` or `./.friendtype.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/friendtype/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        Self::load_from(global.as_deref(), project.as_deref(), config_path.map(PathBuf::as_path))
    }

    /// Merge the given files over the defaults, later sources winning
    ///
    /// Missing global or project files are skipped; a missing explicit file
    /// is an error.
    pub fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = explicit
            && !path.is_file()
        {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }

        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            debug!("Merging config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/friendtype/config.toml` or the platform
    /// equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./friendtype.toml or ./.friendtype.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use friendtype_domain::{OutputFormat, TieBreak};
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.quiz.bank.is_none());
        assert_eq!(config.scoring.tie_break, TieBreak::Second);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("friendtype"));
    }

    #[test]
    fn test_later_sources_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(
            &global,
            "[scoring]\ntie_break = \"first\"\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        fs::write(&explicit, "[output]\nformat = \"code\"\n").unwrap();

        let config = ConfigLoader::load_from(Some(&global), None, Some(&explicit)).unwrap();
        assert_eq!(config.scoring.tie_break, TieBreak::First);
        assert_eq!(config.output.format, Some(OutputFormat::Code));
        assert!(config.output.color);
    }

    #[test]
    fn test_invalid_value_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("bad.toml");
        fs::write(&explicit, "[output]\nformat = \"poster\"\n").unwrap();
        assert!(ConfigLoader::load_from(None, None, Some(&explicit)).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("typo.toml");
        let err = ConfigLoader::load_from(None, None, Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("typo.toml"));
    }

    #[test]
    fn test_missing_global_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        let config = ConfigLoader::load_from(Some(&missing), None, None).unwrap();
        assert_eq!(config.scoring.tie_break, TieBreak::Second);
    }
}
