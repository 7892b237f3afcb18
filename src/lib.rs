pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{EndpointConfig, DEFAULT_ENDPOINT};
pub use self::core::{invoker::RequestInvoker, runner::ScriptRunner};
pub use domain::model::{InvocationResponse, ScriptPayload, DEFAULT_SCRIPT};
pub use utils::error::{InvokerError, Result};
