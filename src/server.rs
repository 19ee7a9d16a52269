//! MCP stdio transport.
//!
//! A synchronous, line-delimited JSON-RPC 2.0 loop over stdin/stdout
//! exposing the single `codiff` tool. Each call is an independent,
//! stateless computation; no per-call error is fatal to the process. The
//! serve loop owns the fatal path: only transport IO failure escapes it.

use crate::compare::{compare_request, CompareRequest};
use crate::config::OperatingMode;
use crate::diff::CostModel;
use crate::error::CodiffError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::{BufRead, Write};

/// Name of the single tool this server exposes.
pub const TOOL_NAME: &str = "codiff";

/// MCP protocol revision advertised during initialization.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Incoming JSON-RPC message. Requests carry an `id`; notifications do not.
#[derive(Debug, Deserialize)]
struct JsonRpcMessage {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

/// Run the serve loop until stdin closes.
pub fn serve(mode: OperatingMode, model: &CostModel) -> crate::error::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(response) = handle_message(&line, mode, model) {
            serde_json::to_writer(&mut stdout, &response)?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

/// Dispatch one raw message. Returns `None` for notifications, which take
/// no response even on error.
#[must_use]
pub fn handle_message(raw: &str, mode: OperatingMode, model: &CostModel) -> Option<Value> {
    let message: JsonRpcMessage = match serde_json::from_str(raw) {
        Ok(message) => message,
        Err(err) => {
            tracing::warn!(%err, "discarding malformed message");
            return Some(rpc_error(Value::Null, -32700, "Parse error"));
        }
    };

    let id = message.id?;

    let result = match message.method.as_str() {
        "initialize" => json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": mode.server_name(),
                "version": mode.server_version(),
            },
        }),
        "ping" => json!({}),
        "tools/list" => json!({
            "tools": [{
                "name": TOOL_NAME,
                "description": mode.tool_description(),
                "inputSchema": input_schema(),
            }],
        }),
        "tools/call" => return Some(handle_tool_call(id, &message.params, mode, model)),
        other => {
            return Some(rpc_error(
                id,
                -32601,
                &format!("Method not found: {other}"),
            ))
        }
    };

    Some(rpc_result(id, result))
}

/// Handle a `tools/call` request.
///
/// Per-call failures surface as error-flagged tool results, not JSON-RPC
/// errors: a non-string input and an internal failure both come back as
/// `isError` content the caller can read.
fn handle_tool_call(id: Value, params: &Value, mode: OperatingMode, model: &CostModel) -> Value {
    let name = params.get("name").and_then(Value::as_str).unwrap_or("");
    if name != TOOL_NAME {
        return rpc_error(id, -32602, &format!("Unknown tool: {name}"));
    }

    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
    let request: CompareRequest = match serde_json::from_value(arguments) {
        Ok(request) => request,
        Err(_) => {
            return rpc_result(
                id,
                tool_error(format!(
                    "Invalid input format: {}",
                    CodiffError::InvalidInputFormat
                )),
            );
        }
    };

    match compare_request(&request, mode, model).and_then(|result| result.render()) {
        Ok(rendered) => rpc_result(id, tool_text(rendered)),
        Err(err) => {
            tracing::error!(%err, "comparison failed");
            rpc_result(id, tool_error(format!("Error processing diff: {err}")))
        }
    }
}

/// JSON Schema for the tool's input, derived from [`CompareRequest`].
fn input_schema() -> Value {
    let schema = schemars::schema_for!(CompareRequest);
    serde_json::to_value(schema).unwrap_or_else(|_| json!({ "type": "object" }))
}

fn tool_text(text: String) -> Value {
    json!({ "content": [{ "type": "text", "text": text }] })
}

fn tool_error(text: String) -> Value {
    json!({ "content": [{ "type": "text", "text": text }], "isError": true })
}

fn rpc_result(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn rpc_error(id: Value, code: i64, message: &str) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
}
