//! Settings shared by all scenarios.
//!
//! Every setting is resolved from the first source that provides it: command
//! line flag, environment variable, TOML config file, built-in default. Flags
//! and environment variables are handled by `clap`, the rest happens here.

use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use flowlab::algo::max_flow::Algo;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_REPEATS: usize = 3;
pub const DEFAULT_SEED: u64 = 42;

/// Algorithms run when none are given, in this order.
pub const DEFAULT_ALGOS: [AlgoArg; 3] = [
    AlgoArg::Dinitz,
    AlgoArg::EdmondsKarp,
    AlgoArg::ShortestAugmentingPath,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgoArg {
    EdmondsKarp,
    ShortestAugmentingPath,
    Dinitz,
    PreflowPush,
}

impl From<AlgoArg> for Algo {
    fn from(algo: AlgoArg) -> Self {
        match algo {
            AlgoArg::EdmondsKarp => Algo::EdmondsKarp,
            AlgoArg::ShortestAugmentingPath => Algo::ShortestAugmentingPath,
            AlgoArg::Dinitz => Algo::Dinitz,
            AlgoArg::PreflowPush => Algo::PreflowPush,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// One `<algorithm>: <seconds>` line per measurement.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("number of repeats must be positive")]
    ZeroRepeats,

    #[error("algorithm list must not be empty")]
    NoAlgorithms,
}

/// Contents of the config file. Everything is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub repeats: Option<usize>,
    pub seed: Option<u64>,
    pub format: Option<Format>,
    pub algos: Option<Vec<AlgoArg>>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

/// Values given on the command line or in the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub repeats: Option<usize>,
    pub seed: Option<u64>,
    pub format: Option<Format>,
    pub algos: Vec<AlgoArg>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub repeats: NonZeroUsize,
    pub seed: u64,
    pub format: Format,
    pub algos: Vec<Algo>,
}

impl Settings {
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self, ConfigError> {
        let repeats = overrides
            .repeats
            .or(file.repeats)
            .unwrap_or(DEFAULT_REPEATS);

        let algos = if !overrides.algos.is_empty() {
            overrides.algos
        } else {
            file.algos.unwrap_or_else(|| DEFAULT_ALGOS.to_vec())
        };

        if algos.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }

        Ok(Self {
            repeats: NonZeroUsize::new(repeats).ok_or(ConfigError::ZeroRepeats)?,
            seed: overrides.seed.or(file.seed).unwrap_or(DEFAULT_SEED),
            format: overrides.format.or(file.format).unwrap_or_default(),
            algos: algos.into_iter().map(Algo::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::resolve(Overrides::default(), FileConfig::default()).unwrap();

        assert_eq!(settings.repeats.get(), 3);
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.format, Format::Text);
        assert_eq!(
            settings.algos,
            vec![Algo::Dinitz, Algo::EdmondsKarp, Algo::ShortestAugmentingPath]
        );
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "repeats = 5\nformat = \"json\"\nalgos = [\"preflow-push\", \"dinitz\"]"
        )
        .unwrap();

        let config = FileConfig::load(file.path()).unwrap();
        let settings = Settings::resolve(Overrides::default(), config).unwrap();

        assert_eq!(settings.repeats.get(), 5);
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.format, Format::Json);
        assert_eq!(settings.algos, vec![Algo::PreflowPush, Algo::Dinitz]);
    }

    #[test]
    fn command_line_overrides_file() {
        let file = FileConfig {
            repeats: Some(5),
            seed: Some(7),
            format: Some(Format::Json),
            algos: Some(vec![AlgoArg::Dinitz]),
        };
        let overrides = Overrides {
            repeats: Some(1),
            seed: None,
            format: Some(Format::Text),
            algos: vec![AlgoArg::EdmondsKarp],
        };

        let settings = Settings::resolve(overrides, file).unwrap();

        assert_eq!(settings.repeats.get(), 1);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.format, Format::Text);
        assert_eq!(settings.algos, vec![Algo::EdmondsKarp]);
    }

    #[test]
    fn invalid_settings() {
        let overrides = Overrides {
            repeats: Some(0),
            ..Overrides::default()
        };
        assert_matches!(
            Settings::resolve(overrides, FileConfig::default()),
            Err(ConfigError::ZeroRepeats)
        );

        let file = FileConfig {
            algos: Some(Vec::new()),
            ..FileConfig::default()
        };
        assert_matches!(
            Settings::resolve(Overrides::default(), file),
            Err(ConfigError::NoAlgorithms)
        );
    }

    #[test]
    fn invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "repeat = 5").unwrap();

        assert_matches!(
            FileConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        );
        assert_matches!(
            FileConfig::load(Path::new("/nonexistent/flowlab.toml")),
            Err(ConfigError::Read { .. })
        );
    }
}
