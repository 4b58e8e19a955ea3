use std::fs;
use std::path::Path;

use hamgen_core::{ErrorInfo, HamgenError};
use serde::{Deserialize, Serialize};

use crate::repr::Representation;

/// Parameters of one codebook generation, loadable from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Width of every codeword in bits.
    #[serde(default = "default_bit_width")]
    pub bit_width: u32,
    /// Number of codewords requested.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Requested minimum pairwise Hamming distance.
    #[serde(default = "default_hamming_distance")]
    pub hamming_distance: u32,
    /// Text representation of the produced codewords.
    #[serde(default)]
    pub representation: Representation,
    /// Sampling turns per threshold when no timeout is set.
    #[serde(default = "default_iteration_budget")]
    pub iteration_budget: u64,
    /// Lower the threshold by one whenever the budget expires instead of stopping.
    #[serde(default)]
    pub allow_reduction: bool,
    /// Keep accepting past `size` until the budget ends the search.
    #[serde(default)]
    pub auto_generate: bool,
    /// Wall-clock budget per threshold in milliseconds; zero selects the iteration budget.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Seed for reproducible runs. Unseeded runs draw from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_bit_width() -> u32 {
    16
}

fn default_size() -> usize {
    4
}

fn default_hamming_distance() -> u32 {
    3
}

fn default_iteration_budget() -> u64 {
    3000
}

fn default_timeout_ms() -> u64 {
    300
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            bit_width: default_bit_width(),
            size: default_size(),
            hamming_distance: default_hamming_distance(),
            representation: Representation::default(),
            iteration_budget: default_iteration_budget(),
            allow_reduction: false,
            auto_generate: false,
            timeout_ms: default_timeout_ms(),
            seed: None,
        }
    }
}

/// Which budget governs relaxation and termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BudgetMode {
    /// Fixed number of sampling turns per threshold.
    Iterations {
        /// Turns allowed before the budget expires.
        turns: u64,
    },
    /// Wall-clock window per threshold.
    Timeout {
        /// Window length in milliseconds.
        millis: u64,
    },
}

impl GenerationParams {
    /// Parameters with the three primary values set and everything else defaulted.
    pub fn new(bit_width: u32, size: usize, hamming_distance: u32) -> Self {
        Self {
            bit_width,
            size,
            hamming_distance,
            ..Self::default()
        }
    }

    /// Budget mode selected by `timeout_ms`.
    pub fn budget_mode(&self) -> BudgetMode {
        if self.timeout_ms > 0 {
            BudgetMode::Timeout {
                millis: self.timeout_ms,
            }
        } else {
            BudgetMode::Iterations {
                turns: self.iteration_budget,
            }
        }
    }

    /// True when the requested distance can exist inside the bit width at all.
    pub fn is_feasible(&self) -> bool {
        self.hamming_distance < self.bit_width
    }

    /// Rejects structurally invalid parameters.
    ///
    /// Infeasible distances are not an error here; the generator reports them as an
    /// empty result.
    pub fn validate(&self) -> Result<(), HamgenError> {
        if self.bit_width == 0 {
            return Err(HamgenError::Params(
                ErrorInfo::new("zero-bit-width", "bit width must be positive")
                    .with_context("bit_width", "0"),
            ));
        }
        if self.timeout_ms == 0 && self.iteration_budget == 0 {
            return Err(HamgenError::Params(
                ErrorInfo::new("empty-budget", "either timeout_ms or iteration_budget must be set")
                    .with_hint("set iteration_budget to a positive value"),
            ));
        }
        Ok(())
    }

    /// Parses and validates parameters from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, HamgenError> {
        let params: Self = serde_yaml::from_str(text).map_err(|err| {
            HamgenError::Config(ErrorInfo::new("yaml-deserialize", err.to_string()))
        })?;
        params.validate()?;
        Ok(params)
    }

    /// Loads and validates parameters from a YAML file.
    pub fn load(path: &Path) -> Result<Self, HamgenError> {
        let text = fs::read_to_string(path).map_err(|err| {
            HamgenError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text).map_err(|err| match err {
            HamgenError::Config(info) => HamgenError::Config(
                info.with_context("path", path.display().to_string()),
            ),
            other => other,
        })
    }

    /// Serializes the parameters to YAML.
    pub fn to_yaml_string(&self) -> Result<String, HamgenError> {
        serde_yaml::to_string(self)
            .map_err(|err| HamgenError::Serde(ErrorInfo::new("yaml-serialize", err.to_string())))
    }
}
