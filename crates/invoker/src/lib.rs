/// Job Runner for the LTX-Video command-line inference program
///
/// Resolves a model identifier to its pipeline configuration, builds the
/// command line for one of the known `inference.py` flag contracts, runs the
/// program as a child process with both stdio streams captured, and locates
/// the produced video artifact.
pub mod artifacts;
pub mod config;
pub mod contract;
pub mod error;
pub mod job;
pub mod registry;
pub mod request;
pub mod runner;

pub use config::RunnerConfig;
pub use contract::{ContractVersion, InferenceInvoker, OutputLocation};
pub use error::InvokeError;
pub use job::JobId;
pub use registry::ModelRegistry;
pub use request::GenerationRequest;
pub use runner::{JobOutcome, JobRunner};
