use crate::core::{InvocationResponse, Invoker, Result, ScriptPayload};
use std::io::Write;

pub struct ScriptRunner<I: Invoker> {
    invoker: I,
    payload: ScriptPayload,
}

impl<I: Invoker> ScriptRunner<I> {
    pub fn new(invoker: I) -> Self {
        Self::with_payload(invoker, ScriptPayload::default())
    }

    pub fn with_payload(invoker: I, payload: ScriptPayload) -> Self {
        Self { invoker, payload }
    }

    pub fn payload(&self) -> &ScriptPayload {
        &self.payload
    }

    /// Sends the payload once, then writes the status line and the body line to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<InvocationResponse> {
        tracing::info!("Sending script ({} chars)", self.payload.script.chars().count());

        let response = self.invoker.invoke(&self.payload).await?;
        tracing::info!("Worker responded with status {}", response.status);

        writeln!(out, "{}", response.status)?;
        writeln!(out, "{}", response.body)?;
        out.flush()?;

        Ok(response)
    }
}
