use crate::error::ReposError;
use crate::fetch_request::FetchRequest;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::Repository;
use crate::page_cursor::PageCursor;
use crate::result::ReposResult;
use anyhow::anyhow;
use log::{debug, info, Level};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, IntoUrl, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Github-Repos-App";

#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub user_agent: String,
    pub timeout: Duration,
    pub log_level: Level,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_agent: String::from(DEFAULT_USER_AGENT),
            timeout: Duration::from_secs(30),
            log_level: Level::Debug,
        }
    }
}

pub struct ReposClient {
    url: Url,
    user_agent: String,
    client: ClientWithMiddleware,
}

impl ReposClient {
    pub fn new<U>(url: U, options: &ClientOptions) -> ReposResult<Self>
    where
        U: IntoUrl,
    {
        let client = Client::builder().timeout(options.timeout).build()?;
        let client = ClientBuilder::new(client)
            .with(LoggingMiddleware::new(options.log_level))
            .build();
        Self::with_client(url, &options.user_agent, client)
    }

    /// Uses a caller-assembled middleware stack instead of the default one.
    pub fn with_client<U>(url: U, user_agent: &str, client: ClientWithMiddleware) -> ReposResult<Self>
    where
        U: IntoUrl,
    {
        if user_agent.trim().is_empty() {
            return Err(ReposError::Other(anyhow!("user agent must not be empty")));
        }

        let mut url = url
            .into_url()
            .map_err(|e| ReposError::Other(anyhow!(e)))?;
        // join() drops the last segment unless the base is a directory
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            url,
            user_agent: String::from(user_agent),
            client,
        })
    }

    pub async fn list_repos(&self, request: &FetchRequest) -> ReposResult<Vec<Repository>> {
        request.validate()?;
        self.fetch(&request.resource_path()).await
    }

    /// Fetches every page of `resource_path` in order. Any failed page fails
    /// the whole fetch and nothing accumulated so far is returned.
    pub async fn fetch(&self, resource_path: &str) -> ReposResult<Vec<Repository>> {
        let url = self
            .url
            .join(resource_path)
            .map_err(|e| ReposError::Other(anyhow!(e)))?;

        let mut cursor = PageCursor::first();
        let mut accumulated = Vec::new();
        loop {
            let items = self.get_page(&url, &cursor).await?;
            let count = items.len();
            debug!("page {} of {} returned {} repo(s)", cursor.page(), url, count);
            accumulated.extend(items);

            if cursor.is_last_page(count) {
                break;
            }
            cursor.advance();
        }

        info!(
            "fetched {} repo(s) from {} in {} page(s)",
            accumulated.len(),
            url,
            cursor.page()
        );
        Ok(accumulated)
    }

    async fn get_page(&self, url: &Url, cursor: &PageCursor) -> ReposResult<Vec<Repository>> {
        let response = self
            .client
            .get(url.clone())
            .query(&cursor.query())
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        parse_page(status, body)
    }
}

fn parse_page(status: u16, body: String) -> ReposResult<Vec<Repository>> {
    let value = match serde_json::from_str::<Value>(&body) {
        Ok(value) => value,
        Err(e) => {
            return Err(ReposError::Parse {
                message: e.to_string(),
                body,
            })
        }
    };

    if !value.is_array() {
        return Err(ReposError::UnexpectedPayload { status, body });
    }

    serde_json::from_value::<Vec<Repository>>(value).map_err(|e| ReposError::Parse {
        message: e.to_string(),
        body,
    })
}
