//! Job search engine: credential access, HTTP transport and response
//! normalization.
mod credential;
mod engine;
mod fetch;
mod normalize;
mod types;

pub use credential::{CredentialAccessor, SessionToken, StaticToken};
pub use engine::EngineHandle;
pub use fetch::{fetch_jobs, FetchSettings, Fetcher, ReqwestFetcher};
pub use normalize::{normalize_jobs, NormalizeError};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError};
