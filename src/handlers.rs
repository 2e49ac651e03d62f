//! Rollup request handlers.
//!
//! `advance_state` inputs may notarise; `inspect_state` queries are read-only.
//! Operation failures are soft: they produce an empty `result` and the input
//! is still accepted. Only a malformed envelope or payload is rejected.

use crate::application::{
    to_wire, AuthorizationOracle, DenyAll, Ed25519Witness, ErrorResponse, FixedHeight,
    NotaryContract, OperationPayload, OperationResponse, Request, GETDETAILS, NOTARISE,
};
use crate::infrastructure::{
    cartesi::{send_notice, send_report},
    database::{RecordStore, SqliteRecordStore, StoreError},
};
use hyper::client::HttpConnector;
use hyper::Client;
use json::JsonValue;
use std::error::Error;
use tracing::{debug, error, info, warn};

/// Open the persistent record store. There is no in-memory fallback.
pub fn open_store(db_path: &str) -> Result<Box<dyn RecordStore>, StoreError> {
    let store = SqliteRecordStore::new(db_path).map_err(|e| {
        error!(path = db_path, error = %e, "cannot open record store");
        e
    })?;
    Ok(Box::new(store))
}

/// Who may authorise a NOTARISE carried by a request
enum Authority<'a> {
    /// Advance inputs: the payload's Ed25519 witness
    Witness(&'a [u8]),
    /// Inspect queries never write
    ReadOnly,
}

fn decode_payload(request: &JsonValue) -> Result<String, Box<dyn Error>> {
    let payload_hex = request["data"]["payload"]
        .as_str()
        .ok_or("Missing payload")?;

    let payload_bytes = hex::decode(payload_hex.trim_start_matches("0x"))?;
    Ok(String::from_utf8(payload_bytes)?)
}

fn run_operation(
    contract: &NotaryContract,
    payload: &OperationPayload,
    args: &[Vec<u8>],
    height: Option<FixedHeight>,
    authority: Authority<'_>,
) -> OperationResponse {
    let result = match Request::parse(&payload.operation, args, contract.policy()) {
        Ok(request) => match height {
            Some(height) => {
                debug!(
                    operation = request.operation(),
                    read_only = request.is_read_only(),
                    "dispatching request"
                );
                let oracle: Box<dyn AuthorizationOracle> = match (&request, authority) {
                    (Request::Notarise { document_hash, .. }, Authority::Witness(signature)) => {
                        Box::new(Ed25519Witness::for_document(document_hash, signature))
                    }
                    _ => Box::new(DenyAll),
                };
                to_wire(contract.dispatch(&request, &height, &*oracle))
            }
            None if request.is_read_only() => {
                to_wire(contract.dispatch(&request, &FixedHeight(0), &DenyAll))
            }
            None => {
                warn!(operation = request.operation(), "no usable 32-bit block height");
                Vec::new()
            }
        },
        Err(e) => to_wire(Err(e.into())),
    };

    let response = OperationResponse::new(&payload.operation, &result);
    if payload.operation == GETDETAILS {
        response.with_details(&result)
    } else {
        response
    }
}

async fn reject_with(
    client: &Client<HttpConnector>,
    server_addr: &str,
    message: String,
) -> Result<(), Box<dyn Error>> {
    warn!(%message, "rejecting input");
    let report = serde_json::to_string(&ErrorResponse::new(message))?;
    send_report(client, server_addr, &report).await
}

pub async fn handle_advance(
    client: &Client<HttpConnector>,
    server_addr: &str,
    contract: &NotaryContract,
    request: JsonValue,
) -> Result<&'static str, Box<dyn Error>> {
    let payload_str = decode_payload(&request)?;
    debug!(payload = %payload_str, "received advance request");

    let payload: OperationPayload = match serde_json::from_str(&payload_str) {
        Ok(payload) => payload,
        Err(e) => {
            reject_with(client, server_addr, format!("Invalid input format: {}", e)).await?;
            return Ok("reject");
        }
    };

    let args = match payload.decode_args() {
        Ok(args) => args,
        Err(e) => {
            reject_with(client, server_addr, format!("Invalid base64 argument: {}", e)).await?;
            return Ok("reject");
        }
    };

    let block_number = request["data"]["metadata"]["block_number"].as_u64();
    let height = block_number
        .and_then(|n| u32::try_from(n).ok())
        .map(FixedHeight);

    let witness = payload.decode_witness();
    let response = run_operation(contract, &payload, &args, height, Authority::Witness(&witness));
    let output = serde_json::to_string(&response)?;

    if response.operation == NOTARISE && !response.is_empty() {
        info!(id = %response.result, ?block_number, "notarisation committed");
        send_notice(client, server_addr, &output).await?;
    } else {
        info!(operation = %response.operation, empty = response.is_empty(), "advance processed");
        send_report(client, server_addr, &output).await?;
    }

    Ok("accept")
}

pub async fn handle_inspect(
    client: &Client<HttpConnector>,
    server_addr: &str,
    contract: &NotaryContract,
    request: JsonValue,
) -> Result<&'static str, Box<dyn Error>> {
    let payload_str = decode_payload(&request)?;
    debug!(payload = %payload_str, "received inspect request");

    let payload: OperationPayload = match serde_json::from_str(&payload_str) {
        Ok(payload) => payload,
        Err(e) => {
            reject_with(client, server_addr, format!("Invalid request format: {}", e)).await?;
            return Ok("accept"); // Inspect always accepts, errors go in reports
        }
    };

    let args = match payload.decode_args() {
        Ok(args) => args,
        Err(e) => {
            reject_with(client, server_addr, format!("Invalid base64 argument: {}", e)).await?;
            return Ok("accept");
        }
    };

    let response = run_operation(
        contract,
        &payload,
        &args,
        Some(FixedHeight(0)),
        Authority::ReadOnly,
    );
    info!(operation = %response.operation, found = !response.is_empty(), "inspect processed");

    let report = serde_json::to_string(&response)?;
    send_report(client, server_addr, &report).await?;

    Ok("accept")
}

/// Route a rollup request by its `request_type`
pub async fn handle_request(
    client: &Client<HttpConnector>,
    server_addr: &str,
    contract: &NotaryContract,
    request: JsonValue,
) -> Result<&'static str, Box<dyn Error>> {
    let request_type = request["request_type"]
        .as_str()
        .ok_or("request_type is not a string")?
        .to_string();

    match request_type.as_str() {
        "advance_state" => handle_advance(client, server_addr, contract, request).await,
        "inspect_state" => handle_inspect(client, server_addr, contract, request).await,
        other => {
            warn!(request_type = other, "unknown request type");
            Ok("reject")
        }
    }
}
