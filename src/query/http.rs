use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};

use crate::error::{Result, TimelineError};
use crate::query::{RawResponse, SparqlRequest, Transport};

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<HttpTransport> {
        let client = Client::builder().build().map_err(|err| {
            TimelineError::Transport(format!("couldn't build HTTP client: {}", err))
        })?;

        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &SparqlRequest) -> Result<RawResponse> {
        let url = request.url();
        debug!("GET {}", url);

        let res = self
            .client
            .get(&url)
            .header(ACCEPT, request.accept)
            .header(USER_AGENT, request.user_agent.as_str())
            .timeout(request.timeout)
            .send()
            .map_err(|err| {
                if err.is_timeout() {
                    TimelineError::Transport(format!(
                        "no response from {} within {:?}",
                        request.endpoint, request.timeout
                    ))
                } else {
                    TimelineError::Transport(format!(
                        "couldn't reach {}: {}",
                        request.endpoint, err
                    ))
                }
            })?;

        let status = res.status().as_u16();
        let body = res.text().map_err(|err| {
            TimelineError::Transport(format!(
                "couldn't read response from {}: {}",
                request.endpoint, err
            ))
        })?;

        Ok(RawResponse { status, body })
    }
}
