pub mod invoker;
pub mod runner;

pub use crate::domain::model::{InvocationResponse, ScriptPayload};
pub use crate::domain::ports::{ConfigProvider, Invoker};
pub use crate::utils::error::Result;
