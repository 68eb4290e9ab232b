use colored::Colorize;
use repos_lib::Repository;
use std::io::{Result, Write};

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn write_fetching<W: Write>(&self, out: &mut W, login: &str) -> Result<()> {
        writeln!(out, "Fetching public repositories for \"{}\"...", login)
    }

    pub fn write_count<W: Write>(&self, out: &mut W, count: usize) -> Result<()> {
        writeln!(out, "{} repo(s) are found!", count)
    }

    pub fn write_repo<W: Write>(&self, out: &mut W, repo: &Repository) -> Result<()> {
        let stars = format!("★ {}", repo.stargazers_count);
        writeln!(out)?;
        if self.color {
            writeln!(out, "{}", repo.html_url.cyan())?;
            writeln!(out, "{}", stars.yellow())?;
        } else {
            writeln!(out, "{}", repo.html_url)?;
            writeln!(out, "{}", stars)?;
        }
        writeln!(out, "{}", repo.description.as_deref().unwrap_or_default())
    }
}
