#![deny(missing_docs)]
#![doc = "Core error, randomness and provenance types shared by the hamgen crates."]

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, HamgenError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
