use clap::Parser;
use repos_lib::{FetchRequest, RepoFilter, DEFAULT_USER_AGENT};
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(name = "github-repos", about = "List public GitHub repositories of a user or organization")]
pub struct Args {
    #[clap(
        help = "GitHub user name (prints only the number of repositories)",
        conflicts_with_all = ["user", "org"]
    )]
    pub username: Option<String>,

    #[clap(short = 'u', long = "user", help = "GitHub user", conflicts_with = "org")]
    pub user: Option<String>,

    #[clap(short = 'o', long = "org", help = "GitHub organization")]
    pub org: Option<String>,

    #[clap(short = 'l', long = "language", help = "Only show repositories in this language")]
    pub language: Option<String>,

    #[clap(
        short = 's',
        long = "sort-stars",
        help = "Sort by star count, ascending",
        default_value = "false"
    )]
    pub sort_stars: bool,

    #[clap(
        short = 'c',
        long = "count",
        help = "Print only the number of repositories",
        default_value = "false"
    )]
    pub count: bool,

    #[clap(long = "no-color", help = "Disable colored output", default_value = "false")]
    pub no_color: bool,

    #[clap(
        long = "api-url",
        help = "GitHub REST API root",
        env = "GITHUB_REPOS_API_URL",
        default_value = "https://api.github.com/"
    )]
    pub api_url: String,

    #[clap(
        long = "timeout-secs",
        help = "Per-request timeout in seconds",
        env = "GITHUB_REPOS_TIMEOUT_SECS",
        default_value = "30",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    #[clap(long = "user-agent", help = "User-Agent header", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Args {
    pub fn fetch_request(&self) -> Option<FetchRequest> {
        if let Some(login) = self.username.as_deref().or(self.user.as_deref()) {
            return Some(FetchRequest::user(login));
        }
        self.org.as_deref().map(FetchRequest::organization)
    }

    pub fn filter(&self) -> RepoFilter {
        RepoFilter {
            language: self.language.clone(),
            sort_by_stars: self.sort_stars,
        }
    }

    /// The positional form keeps the original count-only output.
    pub fn count_only(&self) -> bool {
        self.count || self.username.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
