use anyhow::anyhow;
use task_local_extensions::Extensions;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Request, Response, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, Next, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "https://api.github.test/";

pub enum Canned {
    Page(u16, String),
    Fail(&'static str),
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub url: Url,
    pub user_agent: Option<String>,
}

impl RecordedRequest {
    pub fn query(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

/// Answers requests from a queue of canned responses without touching the
/// network, recording every request it sees.
pub struct CannedPages {
    responses: Mutex<VecDeque<Canned>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[async_trait::async_trait]
impl Middleware for CannedPages {
    async fn handle(
        &self,
        request: Request,
        _extensions: &mut Extensions,
        _next: Next<'_>,
    ) -> Result<Response> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: request.url().clone(),
            user_agent: request
                .headers()
                .get(USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .map(String::from),
        });

        match self.responses.lock().unwrap().pop_front() {
            Some(Canned::Page(status, body)) => {
                let response = http::Response::builder()
                    .status(status)
                    .body(body)
                    .map_err(|e| reqwest_middleware::Error::Middleware(anyhow!(e)))?;
                Ok(Response::from(response))
            }
            Some(Canned::Fail(message)) => Err(reqwest_middleware::Error::Middleware(anyhow!(message))),
            None => Err(reqwest_middleware::Error::Middleware(anyhow!("no canned response left"))),
        }
    }
}

pub fn canned_client(responses: Vec<Canned>) -> (ClientWithMiddleware, Arc<Mutex<Vec<RecordedRequest>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let client = ClientBuilder::new(Client::new())
        .with(CannedPages {
            responses: Mutex::new(responses.into()),
            requests: requests.clone(),
        })
        .build();
    (client, requests)
}

/// A JSON page of `count` repositories numbered from `first`.
pub fn page_of(first: usize, count: usize) -> Canned {
    let items = (first..first + count)
        .map(|i| {
            let language = if i % 2 == 0 { "Rust" } else { "Go" };
            serde_json::json!({
                "id": i,
                "html_url": format!("https://github.com/octocat/repo-{}", i),
                "description": format!("repository number {}", i),
                "language": language,
                "stargazers_count": i % 7,
            })
        })
        .collect::<Vec<_>>();
    Canned::Page(200, serde_json::Value::Array(items).to_string())
}
