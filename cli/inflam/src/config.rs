use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Presentation settings, read from a TOML file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub plot: PlotConfig,
    pub text: TextConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub sparkline_width: usize,
    pub svg_width: u32,
    pub svg_height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_dir: Option<PathBuf>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            sparkline_width: 40,
            svg_width: 600,
            svg_height: 160,
            svg_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    pub precision: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { precision: 3 }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sparkline width {}, svg {}x{}, precision {}",
            self.plot.sparkline_width, self.plot.svg_width, self.plot.svg_height, self.text.precision
        )?;
        if let Some(dir) = &self.plot.svg_dir {
            write!(f, ", svg dir {}", dir.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.plot.sparkline_width, 40);
        assert_eq!(config.text.precision, 3);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [plot]
            svg_dir = "plots"
            svg_height = 90

            [text]
            precision = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.plot.svg_dir, Some(PathBuf::from("plots")));
        assert_eq!(config.plot.svg_height, 90);
        assert_eq!(config.plot.svg_width, 600);
        assert_eq!(config.text.precision, 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("[plot]\ncolour = \"red\"\n").is_err());
    }

    #[test]
    fn toml_round_trips() {
        let mut config = Config::default();
        config.plot.svg_dir = Some(PathBuf::from("out"));
        let text = config.to_toml().unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }

    #[test]
    fn load_reports_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Config::load(tmp.path().join("inflam.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("inflam.toml"));
    }
}
