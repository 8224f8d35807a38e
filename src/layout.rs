use crate::error::{Result, ScoreError};
use log::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Benchmark scene configuration a reached-pose document was recorded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    #[serde(rename = "Benchmark_Layout_0")]
    BenchmarkLayout0,
    #[serde(rename = "Benchmark_Layout_1")]
    BenchmarkLayout1,
    #[serde(rename = "Benchmark_Layout_2")]
    BenchmarkLayout2,
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::BenchmarkLayout0 => "Benchmark_Layout_0",
            Layout::BenchmarkLayout1 => "Benchmark_Layout_1",
            Layout::BenchmarkLayout2 => "Benchmark_Layout_2",
        }
    }

    /// File name of the scene holding the desired poses.
    /// Layouts 1 and 2 share a reference scene.
    pub fn reference_scene(&self) -> &'static str {
        match self {
            Layout::BenchmarkLayout0 => "reachability_scene_1.xml",
            Layout::BenchmarkLayout1 | Layout::BenchmarkLayout2 => "reachability_scene_2.xml",
        }
    }
}

impl FromStr for Layout {
    type Err = ScoreError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "Benchmark_Layout_0" => Ok(Layout::BenchmarkLayout0),
            "Benchmark_Layout_1" => Ok(Layout::BenchmarkLayout1),
            "Benchmark_Layout_2" => Ok(Layout::BenchmarkLayout2),
            _ => Err(ScoreError::Configuration {
                layout: name.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/scenes/reachability")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Directory holding the reference reachability scenes.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl ScorerConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|source| ScoreError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = serde_json::from_slice::<ScorerConfig>(&data).map_err(|source| {
            ScoreError::Config {
                path: path.to_owned(),
                source,
            }
        })?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn reference_scene_path(&self, layout: Layout) -> PathBuf {
        self.data_dir.join(layout.reference_scene())
    }
}
