use ureq::Error::{Status, Transport};

use super::{Fetcher, Response};

pub struct UReqFetcher {
    agent: ureq::Agent,
}

impl Fetcher for UReqFetcher {
    fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Response {
        let request = headers
            .iter()
            .fold(self.agent.get(url), |request, (key, value)| {
                request.set(key, value)
            });

        tracing::debug!(url, "sending GET request");

        match request.call() {
            Ok(response) => Response::ok(Box::new(response.into_reader())),

            Err(Status(code, response)) => Response::status(code, Box::new(response.into_reader())),

            Err(Transport(transport)) => Response::network_error(transport.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        UReqFetcher {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
