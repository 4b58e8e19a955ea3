use std::collections::BTreeMap;

use hamgen_core::{HamgenError, RunProvenance, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::config::GenerationParams;
use crate::hash::{canonical_codebook_hash, stable_hash_string};
use crate::search::GenerationResult;
use crate::serde::{from_json_str, to_pretty_json};

/// Self-describing record of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Hashes and seed tying the report to its inputs.
    pub provenance: RunProvenance,
    /// Parameters the run was started with.
    pub params: GenerationParams,
    /// Produced codebook and diagnostics.
    pub result: GenerationResult,
}

impl GenerationReport {
    /// Builds a report, hashing parameters and codebook.
    pub fn new(params: &GenerationParams, result: GenerationResult) -> Result<Self, HamgenError> {
        let codebook_hash = if result.codebook.is_empty() {
            String::new()
        } else {
            canonical_codebook_hash(&result.codebook)
        };
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        Ok(Self {
            schema_version: SchemaVersion::default(),
            provenance: RunProvenance {
                params_hash: stable_hash_string(params)?,
                codebook_hash,
                seed: params.seed,
                tool_versions,
            },
            params: params.clone(),
            result,
        })
    }

    /// Serializes the report as pretty JSON with sorted keys.
    pub fn to_json(&self) -> Result<String, HamgenError> {
        to_pretty_json(self)
    }

    /// Restores a report from JSON.
    pub fn from_json(data: &str) -> Result<Self, HamgenError> {
        from_json_str(data)
    }
}
