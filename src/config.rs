//! Viewer configuration.
//!
//! Defaults match the built-in fit-to-width layout. With the `config` feature the values can
//! also come from a TOML file, either given explicitly or found at
//! `<config_dir>/pdfglance/config.toml`.

use crate::error::{Result, ViewerError};
use crate::render::layout::{
    FitWidth, DEFAULT_CONTAINER_WIDTH, DEFAULT_MARGIN, DEFAULT_MAX_WIDTH,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct ViewerConfig {
    /// Width of the area pages are fitted into, in pixels
    pub container_width: u32,
    /// Horizontal space left around the page
    pub margin: u32,
    /// Upper bound on the rendered page width
    pub max_width: u32,
    /// Write the canvas to this PNG after every completed render
    pub snapshot: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            container_width: DEFAULT_CONTAINER_WIDTH,
            margin: DEFAULT_MARGIN,
            max_width: DEFAULT_MAX_WIDTH,
            snapshot: None,
        }
    }
}

impl ViewerConfig {
    /// Layout derived from the configured widths
    pub fn fit(&self) -> FitWidth {
        FitWidth {
            container_width: self.container_width,
            margin: self.margin,
            max_width: self.max_width,
        }
    }

    /// Reject values that would make every page collapse
    pub fn validate(&self) -> Result<()> {
        if self.container_width == 0 {
            return Err(ViewerError::config("container_width must be positive"));
        }
        if self.max_width == 0 {
            return Err(ViewerError::config("max_width must be positive"));
        }
        if self.margin >= self.container_width {
            return Err(ViewerError::config(format!(
                "margin ({}) must be smaller than container_width ({})",
                self.margin, self.container_width
            )));
        }
        Ok(())
    }

    /// Apply command line overrides on top of file values
    pub fn with_overrides(mut self, width: Option<u32>, snapshot: Option<PathBuf>) -> Self {
        if let Some(width) = width {
            self.container_width = width;
        }
        if snapshot.is_some() {
            self.snapshot = snapshot;
        }
        self
    }
}

#[cfg(feature = "config")]
impl ViewerConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ViewerError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            ViewerError::file_error(format!("Cannot read config {}", path.display()), e)
        })?;
        Self::from_toml_str(&source)
    }

    /// Location of the per-user config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pdfglance").join("config.toml"))
    }

    /// Load `explicit` if given, else the per-user file if it exists, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::debug!("using config {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(not(feature = "config"))]
impl ViewerConfig {
    /// Without the `config` feature only the defaults are available
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Err(ViewerError::config(format!(
                "config files are not supported in this build: {}",
                path.display()
            ))),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_layout_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.fit(), FitWidth::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_widths() {
        let zero = ViewerConfig {
            container_width: 0,
            ..ViewerConfig::default()
        };
        assert!(matches!(zero.validate(), Err(ViewerError::ConfigError { .. })));

        let margin = ViewerConfig {
            container_width: 20,
            margin: 20,
            ..ViewerConfig::default()
        };
        assert!(margin.validate().is_err());
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let config = ViewerConfig::default()
            .with_overrides(Some(640), None)
            .with_overrides(None, Some(PathBuf::from("page.png")));

        assert_eq!(config.container_width, 640);
        assert_eq!(config.snapshot, Some(PathBuf::from("page.png")));
        assert_eq!(config.max_width, DEFAULT_MAX_WIDTH);
    }

    #[cfg(feature = "config")]
    #[test]
    fn parses_partial_toml() {
        let config = ViewerConfig::from_toml_str("container_width = 800\nsnapshot = \"out.png\"\n")
            .unwrap();

        assert_eq!(config.container_width, 800);
        assert_eq!(config.margin, DEFAULT_MARGIN);
        assert_eq!(config.snapshot, Some(PathBuf::from("out.png")));
    }

    #[cfg(feature = "config")]
    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(ViewerConfig::from_toml_str("zoom = 2\n").is_err());
        assert!(ViewerConfig::from_toml_str("max_width = 0\n").is_err());
    }

    #[cfg(feature = "config")]
    #[test]
    fn loads_explicit_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_width = 900").unwrap();

        let config = ViewerConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.max_width, 900);

        let missing = ViewerConfig::resolve(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(missing, Err(ViewerError::FileError { .. })));
    }
}
