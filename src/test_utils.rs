use crate::http::{HTTPError, HTTPResult};
use crate::reddit::Service;
use reqwest::StatusCode;
use std::fs;
use std::sync::Mutex;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load_data(file: &str) -> HTTPResult<String> {
    fs::read_to_string(format!("tests/data/{file}.json"))
        .map_err(|_| HTTPError::Http(StatusCode::NOT_FOUND))
}

/// Serves fixtures from `tests/data` instead of contacting Reddit.
///
/// Searches return `tests/data/<search>.json`. A post is looked up by the
/// ID that follows `comments/` in its URL, so
/// `https://www.reddit.com/r/cats/comments/abc123/title/` is served from
/// `tests/data/post_abc123.json`. Missing fixtures are reported as HTTP 404.
#[derive(Debug)]
pub struct TestService {
    search: String,
    requests: Mutex<Vec<String>>,
}

impl TestService {
    pub fn new(search: &str) -> Self {
        Self {
            search: search.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request made so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }
}

impl Service for TestService {
    async fn search(&self, query: &str, limit: u32) -> HTTPResult<String> {
        self.record(format!("search:{query}:{limit}"));
        load_data(&self.search)
    }

    async fn post(&self, url: &str) -> HTTPResult<String> {
        self.record(format!("post:{url}"));
        let id = url
            .split('/')
            .skip_while(|segment| *segment != "comments")
            .nth(1)
            .unwrap_or_default();
        load_data(&format!("post_{id}"))
    }
}
