use std::io::BufRead;

use anyhow::{Context, Result};
use astrokit_core::template::PathTemplate;
use clap::Args;

use crate::summary::print_matches;

#[derive(Args)]
pub struct MatchArgs {
    /// Path template, e.g. "/data/${token}.${extension}"
    pub template: String,

    /// Candidate paths; read one per line from stdin when omitted
    pub paths: Vec<String>,
}

pub fn run(args: &MatchArgs) -> Result<()> {
    let template = PathTemplate::parse(&args.template)?;

    let paths = if args.paths.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .context("Failed to read candidate paths from stdin")?
    } else {
        args.paths.clone()
    };

    let matches = template.matches(&paths);
    tracing::debug!(candidates = paths.len(), matched = matches.len(), "Matched paths");
    print_matches(&template, &matches);

    Ok(())
}
