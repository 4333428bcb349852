use anyhow::{Context, Result};
use mathler::{Engine, MathlerError, PuzzleSet, ResourceLimits, DEFAULT_EQUATION_LENGTH};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Contents of a `puzzles.toml` file
///
/// ```toml
/// puzzles = ["10:12-2*1+0:1", "42:6*7+00-0:2"]
///
/// [equation]
/// length = 8
///
/// [limits]
/// max_expression_bytes = 256
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Definitions in `<targetValue>:<solution>:<difficulty>` form
    #[serde(default)]
    pub puzzles: Vec<String>,
    #[serde(default)]
    pub equation: EquationConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EquationConfig {
    #[serde(default = "default_equation_length")]
    pub length: usize,
}

impl Default for EquationConfig {
    fn default() -> Self {
        Self {
            length: default_equation_length(),
        }
    }
}

fn default_equation_length() -> usize {
    DEFAULT_EQUATION_LENGTH
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    #[serde(default = "default_max_expression_bytes")]
    pub max_expression_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_expression_bytes: default_max_expression_bytes(),
        }
    }
}

fn default_max_expression_bytes() -> usize {
    ResourceLimits::default().max_expression_bytes
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| MathlerError::Config(e.to_string()))
            .context("Invalid puzzle configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Build the engine. Skipped definitions are logged; an empty puzzle set is fatal.
    pub fn into_engine(self) -> Result<Engine> {
        let (puzzles, skipped) = PuzzleSet::load(&self.puzzles, self.equation.length)
            .context("Cannot start without puzzles")?;

        for error in &skipped {
            warn!(
                definition = %error.definition,
                reason = %error.reason,
                "Skipping puzzle definition"
            );
        }

        info!(
            puzzles = puzzles.len(),
            skipped = skipped.len(),
            equation_length = puzzles.equation_length(),
            "Loaded puzzles"
        );

        let limits = ResourceLimits {
            max_expression_bytes: self.limits.max_expression_bytes,
        };
        Ok(Engine::with_limits(puzzles, limits))
    }
}

/// Read a configuration file and build the engine from it
pub fn load_engine(path: &Path) -> Result<Engine> {
    Config::load(path)?.into_engine()
}
