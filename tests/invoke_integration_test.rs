use anyhow::Result;
use httpmock::prelude::*;
use script_invoker::{
    EndpointConfig, InvokerError, RequestInvoker, ScriptPayload, ScriptRunner, DEFAULT_SCRIPT,
};

fn runner_for(endpoint: String) -> ScriptRunner<RequestInvoker<EndpointConfig>> {
    ScriptRunner::new(RequestInvoker::new(EndpointConfig::new(endpoint)))
}

#[tokio::test]
async fn test_end_to_end_success_prints_status_and_body() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/process")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({ "script": DEFAULT_SCRIPT }));
        then.status(200).body("OK");
    });

    let mut out = Vec::new();
    runner_for(server.url("/process")).run(&mut out).await?;

    api_mock.assert();
    assert_eq!(String::from_utf8(out)?, "200\nOK\n");
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_server_error_is_printed_not_raised() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/process");
        then.status(500).body("error");
    });

    let mut out = Vec::new();
    let response = runner_for(server.url("/process")).run(&mut out).await?;

    api_mock.assert();
    assert_eq!(response.status, 500);
    assert_eq!(String::from_utf8(out)?, "500\nerror\n");
    Ok(())
}

/// 請求只送一次，不重試
#[tokio::test]
async fn test_end_to_end_sends_exactly_one_request() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/process");
        then.status(503).body("busy");
    });

    runner_for(server.url("/process")).run(&mut Vec::new()).await?;

    api_mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_custom_payload() -> Result<()> {
    let server = MockServer::start();
    let payload = ScriptPayload::new("EXT. ROOFTOP - NIGHT\n\n\"Quotes\" and \\ slashes.");

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/process")
            .json_body(serde_json::json!({
                "script": "EXT. ROOFTOP - NIGHT\n\n\"Quotes\" and \\ slashes."
            }));
        then.status(200).body("{\"ok\":true}");
    });

    let runner = ScriptRunner::with_payload(
        RequestInvoker::new(EndpointConfig::new(server.url("/process"))),
        payload,
    );
    let mut out = Vec::new();
    runner.run(&mut out).await?;

    api_mock.assert();
    assert_eq!(String::from_utf8(out)?, "200\n{\"ok\":true}\n");
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_network_failure_propagates() {
    let mut out = Vec::new();
    let result = runner_for("http://127.0.0.1:1/process".to_string())
        .run(&mut out)
        .await;

    assert!(matches!(result, Err(InvokerError::ApiError(_))));
    assert!(out.is_empty());
}
