use crate::domain::model::{InvocationResponse, ScriptPayload};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
}

#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, payload: &ScriptPayload) -> Result<InvocationResponse>;
}
