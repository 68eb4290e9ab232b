use crate::render::Renderer;
use anyhow::Result;
use log::error;
use repos_lib::{RepoFilter, ReposResult, Repository};
use std::io::Write;

/// Reports a finished fetch. Returns whether the fetch succeeded.
pub fn handle_result<W: Write>(
    out: &mut W,
    result: ReposResult<Vec<Repository>>,
    filter: &RepoFilter,
    renderer: &Renderer,
    count_only: bool,
) -> Result<bool> {
    let repos = match result {
        Ok(repos) => repos,
        Err(e) => {
            error!("fetch failed: {:?}", e);
            writeln!(out, "Got error: {}", e)?;
            return Ok(false);
        }
    };

    let repos = filter.apply(repos);
    if !count_only {
        for repo in &repos {
            renderer.write_repo(out, repo)?;
        }
        writeln!(out)?;
    }
    renderer.write_count(out, repos.len())?;
    Ok(true)
}
