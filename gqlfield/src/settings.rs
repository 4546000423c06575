//! Settings file loading and option resolution.
//!
//! A settings file is optional YAML:
//!
//! ```yaml
//! database: "root:secret@tcp(127.0.0.1:3306)/shop"
//! table: user_accounts
//! escape_descriptions: false
//! ```
//!
//! Values given on the command line (or through `DATABASE_URL`) win over the
//! file.

use crate::cli::Cli;
use gqlfield_core::{EmitOptions, GqlFieldError, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// File name looked up in the home directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = ".config.yml";

/// Contents of a settings file. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Database connection string
    pub database: Option<String>,
    /// Table name
    pub table: Option<String>,
    /// Escape column comments in descriptions
    pub escape_descriptions: bool,
}

impl Settings {
    /// Reads settings from a YAML file.
    ///
    /// An empty file yields the default settings.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be opened and a settings
    /// error if it is not valid YAML for this structure.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| GqlFieldError::Io {
            context: format!("Failed to open settings file {}", path.display()),
            source: e,
        })?;

        if file.metadata().map(|m| m.len()).unwrap_or_default() == 0 {
            return Ok(Self::default());
        }

        serde_yaml::from_reader::<_, Option<Self>>(file)
            .map(Option::unwrap_or_default)
            .map_err(|e| GqlFieldError::settings(path.display().to_string(), e))
    }
}

/// Returns `$HOME/.config.yml`, or `None` if `HOME` is unset.
pub fn default_settings_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_SETTINGS_FILE))
}

/// Loads the settings file named on the command line, or the default one.
///
/// A missing default file is not an error; a missing explicit file is.
///
/// # Errors
/// Propagates errors from [`Settings::from_file`].
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        tracing::debug!("Loading settings from {}", path.display());
        return Settings::from_file(path);
    }

    match default_settings_path() {
        Some(path) if path.is_file() => {
            tracing::debug!("Loading settings from {}", path.display());
            Settings::from_file(&path)
        }
        _ => {
            tracing::debug!("No settings file found, using command-line values only");
            Ok(Settings::default())
        }
    }
}

/// Fully resolved options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Database connection string
    pub database: String,
    /// Table name
    pub table: String,
    /// Emitter options
    pub emit: EmitOptions,
}

/// Merges command-line values over settings file values.
///
/// # Errors
/// Returns a configuration error if no database or no table is given by
/// either source.
pub fn resolve(cli: &Cli, settings: Settings) -> Result<ResolvedOptions> {
    let database = cli
        .database
        .clone()
        .or(settings.database)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| {
            GqlFieldError::configuration(
                "no database given; use --database, DATABASE_URL or the settings file",
            )
        })?;

    let table = cli
        .table
        .clone()
        .or(settings.table)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            GqlFieldError::configuration("no table given; use --table or the settings file")
        })?;

    let emit = EmitOptions::default()
        .with_escape_descriptions(cli.escape_descriptions || settings.escape_descriptions);

    Ok(ResolvedOptions {
        database,
        table,
        emit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn parse(args: &[&str]) -> Cli {
        temp_env::with_var_unset("DATABASE_URL", || {
            Cli::try_parse_from(std::iter::once("gqlfield").chain(args.iter().copied()))
                .unwrap()
        })
    }

    #[test]
    fn test_settings_from_file() {
        let file = write_settings(
            "database: \"root@tcp(db:3306)/shop\"\ntable: orders\nescape_descriptions: true\n",
        );
        let settings = Settings::from_file(file.path()).unwrap();

        assert_eq!(settings.database.as_deref(), Some("root@tcp(db:3306)/shop"));
        assert_eq!(settings.table.as_deref(), Some("orders"));
        assert!(settings.escape_descriptions);
    }

    #[test]
    fn test_settings_ignores_unknown_keys() {
        let file = write_settings("table: orders\nlog_format: json\n");
        let settings = Settings::from_file(file.path()).unwrap();

        assert_eq!(settings.table.as_deref(), Some("orders"));
        assert_eq!(settings.database, None);
    }

    #[test]
    fn test_settings_empty_file_is_default() {
        let file = write_settings("");
        assert_eq!(Settings::from_file(file.path()).unwrap(), Settings::default());

        let file = write_settings("# nothing here\n");
        assert_eq!(Settings::from_file(file.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_settings_invalid_yaml() {
        let file = write_settings("table: [unterminated\n");
        assert!(matches!(
            Settings::from_file(file.path()),
            Err(GqlFieldError::Settings { .. })
        ));
    }

    #[test]
    fn test_settings_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yml");

        assert!(matches!(
            load_settings(Some(&missing)),
            Err(GqlFieldError::Io { .. })
        ));
    }

    #[test]
    fn test_settings_default_file_in_home() {
        let home = tempfile::tempdir().unwrap();
        std::fs::write(home.path().join(DEFAULT_SETTINGS_FILE), "table: from_home\n").unwrap();

        let settings =
            temp_env::with_var("HOME", Some(home.path()), || load_settings(None).unwrap());
        assert_eq!(settings.table.as_deref(), Some("from_home"));
    }

    #[test]
    fn test_settings_missing_default_file_is_fine() {
        let home = tempfile::tempdir().unwrap();

        let settings =
            temp_env::with_var("HOME", Some(home.path()), || load_settings(None).unwrap());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_resolve_cli_overrides_settings() {
        let cli = parse(&["-d", "app.db", "-t", "users"]);
        let settings = Settings {
            database: Some("other.db".to_string()),
            table: Some("orders".to_string()),
            escape_descriptions: false,
        };

        let options = resolve(&cli, settings).unwrap();
        assert_eq!(options.database, "app.db");
        assert_eq!(options.table, "users");
        assert!(!options.emit.escape_descriptions);
    }

    #[test]
    fn test_resolve_falls_back_to_settings() {
        let cli = parse(&["--escape-descriptions"]);
        let settings = Settings {
            database: Some("other.db".to_string()),
            table: Some("orders".to_string()),
            escape_descriptions: false,
        };

        let options = resolve(&cli, settings).unwrap();
        assert_eq!(options.database, "other.db");
        assert_eq!(options.table, "orders");
        assert!(options.emit.escape_descriptions);
    }

    #[test]
    fn test_resolve_requires_database_and_table() {
        let cli = parse(&["-t", "users"]);
        assert!(matches!(
            resolve(&cli, Settings::default()),
            Err(GqlFieldError::Configuration { .. })
        ));

        let cli = parse(&["-d", "app.db"]);
        assert!(matches!(
            resolve(&cli, Settings::default()),
            Err(GqlFieldError::Configuration { .. })
        ));

        let cli = parse(&["-d", "", "-t", "users"]);
        assert!(resolve(&cli, Settings::default()).is_err());
    }
}
