//! Layout configuration loaded from TOML
//!
//! ```toml
//! [grid]
//! columns = 3
//! gap = "1rem"
//!
//! [loader]
//! height = 240
//! overlay = true
//! ```
//!
//! Every table and field is optional; anything missing keeps the defaults
//! of [`GridOptions`] and [`LoaderOptions`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::{GridOptions, LoaderOptions};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub grid: GridOptions,
    pub loader: LoaderOptions,
}

impl LayoutConfig {
    /// Parses config text. `path` is only used for error reporting.
    pub fn parse(text: &str, path: &Path) -> ConfigResult<Self> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses a config file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        tracing::info!("Loaded layout config from {:?}", path);
        Ok(config)
    }

    /// Loads `path` when given and present, otherwise returns defaults.
    ///
    /// A missing file is not an error. A file that exists but cannot be read
    /// or parsed is.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                tracing::info!("No layout config at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => {
                tracing::debug!("No layout config given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::Dimension;

    fn path() -> &'static Path {
        Path::new("layout.toml")
    }

    #[test]
    fn empty_text_is_default() {
        let config = LayoutConfig::parse("", path()).unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let config = LayoutConfig::parse("[grid]\ncolumns = 3\n", path()).unwrap();
        assert_eq!(config.grid.columns, Some(3));
        assert_eq!(config.grid.min_card_width, None);
        assert_eq!(config.grid.gap, Some(Dimension::Integer(16)));
        assert_eq!(config.loader, LoaderOptions::default());
    }

    #[test]
    fn numeric_and_string_dimensions() {
        let text = r#"
            [grid]
            min_card_width = "240px"
            gap = "1rem"

            [loader]
            height = 240
            overlay = true
        "#;
        let config = LayoutConfig::parse(text, path()).unwrap();
        assert_eq!(config.grid.gap, Some(Dimension::Raw("1rem".to_string())));
        assert_eq!(config.loader.height, Some(Dimension::Integer(240)));
        assert!(config.loader.overlay);
        assert_eq!(config.loader.style().to_string(), "height: 240px;");
    }

    #[test]
    fn fractional_dimension_keeps_fraction() {
        let config = LayoutConfig::parse("[loader]\nheight = 12.5\n", path()).unwrap();
        assert_eq!(config.loader.height, Some(Dimension::Pixels(12.5)));
        assert_eq!(config.loader.style().to_string(), "height: 12.5px;");
    }

    #[test]
    fn malformed_text_is_parse_error() {
        let err = LayoutConfig::parse("[grid\ncolumns = ", path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("layout.toml"));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = LayoutConfig::parse("[grid]\ncolumns = \"three\"\n", path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[grid]\nmin_card_width = \"12rem\"").unwrap();

        let config = LayoutConfig::load(file.path()).unwrap();
        assert_eq!(config.grid.min_card_width.as_deref(), Some("12rem"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let config = LayoutConfig::load_or_default(Some(missing.as_path())).unwrap();
        assert_eq!(config, LayoutConfig::default());
        assert_eq!(
            LayoutConfig::load_or_default(None).unwrap(),
            LayoutConfig::default()
        );
    }

    #[test]
    fn unreadable_path_is_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let err = LayoutConfig::load_or_default(Some(dir.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
