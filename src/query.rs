use log::debug;
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Result, TimelineError};

pub mod http;

pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Everything needed to issue the one GET request against the endpoint.
#[derive(Debug, Clone)]
pub struct SparqlRequest {
    pub endpoint: String,
    pub query: String,
    pub accept: &'static str,
    pub user_agent: String,
    pub timeout: Duration,
}

impl SparqlRequest {
    pub fn from_config(config: &Config) -> SparqlRequest {
        SparqlRequest {
            endpoint: config.endpoint.clone(),
            query: config.query.clone(),
            accept: SPARQL_RESULTS_JSON,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }

    pub fn url(&self) -> String {
        format!("{}?query={}", self.endpoint, urlencoding::encode(&self.query))
    }
}

pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a `SparqlRequest` and hands back the status and body untouched.
///
/// Connection failures and timeouts are reported as
/// `TimelineError::Transport`; status handling is left to `fetch_bindings`.
pub trait Transport {
    fn send(&self, request: &SparqlRequest) -> Result<RawResponse>;
}

pub fn fetch_bindings<T: Transport + ?Sized>(
    transport: &T,
    request: &SparqlRequest,
) -> Result<Vec<Value>> {
    let res = transport.send(request)?;

    if !(200..300).contains(&res.status) {
        return Err(TimelineError::Transport(format!(
            "{} responded with HTTP status {}",
            request.endpoint, res.status
        )));
    }

    debug!("Got {} bytes from {}", res.body.len(), request.endpoint);

    extract_bindings(&res.body)
}

/// Pulls `results.bindings` out of a SPARQL JSON envelope. A missing
/// `results` or `bindings` key yields no bindings rather than an error.
pub fn extract_bindings(body: &str) -> Result<Vec<Value>> {
    let json: Value = serde_json::from_str(body).map_err(|err| {
        TimelineError::MalformedResponse(format!("body is not valid JSON: {}", err))
    })?;

    let results = match json {
        Value::Object(mut root) => root.remove("results"),
        _ => {
            return Err(TimelineError::MalformedResponse(
                "top-level value is not an object".to_string(),
            ))
        }
    };

    let bindings = match results {
        None => return Ok(Vec::new()),
        Some(Value::Object(mut results)) => results.remove("bindings"),
        Some(_) => {
            return Err(TimelineError::MalformedResponse(
                "`results` is not an object".to_string(),
            ))
        }
    };

    match bindings {
        None => Ok(Vec::new()),
        Some(Value::Array(bindings)) => Ok(bindings),
        Some(_) => Err(TimelineError::MalformedResponse(
            "`results.bindings` is not an array".to_string(),
        )),
    }
}
