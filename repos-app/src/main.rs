mod args;
mod handler;
mod render;

use crate::args::Args;
use crate::handler::handle_result;
use crate::render::Renderer;
use anyhow::Result;
use clap::{CommandFactory, Parser};
use repos_lib::{ClientOptions, ReposClient};
use std::io::{stdout, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();

    let Some(request) = args.fetch_request() else {
        Args::command().print_help()?;
        return Ok(ExitCode::FAILURE)
    };

    let options = ClientOptions {
        user_agent: args.user_agent.clone(),
        timeout: args.timeout(),
        ..Default::default()
    };
    let github = ReposClient::new(args.api_url.as_str(), &options)?;
    let renderer = Renderer::new(!args.no_color);

    let mut out = stdout().lock();
    renderer.write_fetching(&mut out, &request.login)?;
    out.flush()?;

    let result = github.list_repos(&request).await;
    let succeeded = handle_result(&mut out, result, &args.filter(), &renderer, args.count_only())?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
