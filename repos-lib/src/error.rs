use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReposError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    #[error("Problem parsing JSON: {message}\nResponse body: {body}")]
    Parse { message: String, body: String },

    #[error("expected an array of repositories (HTTP {status})\nResponse body: {body}")]
    UnexpectedPayload { status: u16, body: String },

    #[error("invalid login \"{0}\"")]
    InvalidLogin(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for ReposError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(reqwest_middleware::Error::Reqwest(e))
    }
}
