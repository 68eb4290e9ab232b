use task_local_extensions::Extensions;
use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use std::time::Instant;

/// Logs each request and its outcome at a fixed level.
pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let url = request.url().clone();
        log!(self.level, "begin request {} {}", request.method(), url);

        let started = Instant::now();
        let result = next.run(request, extensions).await;
        let elapsed_ms = started.elapsed().as_millis();

        match &result {
            Ok(response) => log!(
                self.level,
                "{} from {} in {} ms",
                response.status(),
                url,
                elapsed_ms
            ),
            Err(e) => log!(self.level, "{} failed after {} ms: {}", url, elapsed_ms, e),
        }
        result
    }
}
