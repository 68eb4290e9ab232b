use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Repository {
    #[serde(rename = "html_url")]
    pub html_url: String,

    #[serde(rename = "description", default)]
    pub description: Option<String>,

    #[serde(rename = "language", default)]
    pub language: Option<String>,

    #[serde(rename = "stargazers_count")]
    pub stargazers_count: u64,
}
