use std::cell::RefCell;

use super::{Fetcher, Response};

pub struct MockFetcher {
    responses: RefCell<Vec<Response>>,
    requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Response {
        self.requests.borrow_mut().push((
            url.to_string(),
            headers
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        ));

        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            Response::network_error("no scripted response left")
        } else {
            responses.remove(0)
        }
    }
}

impl MockFetcher {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            responses: RefCell::new(responses),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn headers_of(&self, index: usize) -> Vec<(String, String)> {
        self.requests.borrow()[index].1.clone()
    }
}
