use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use astrokit_core::channels::{parse_row_spec, suggest_rows};
use astrokit_core::config::ScanConfig;
use astrokit_core::discover::files_matching_template_with_progress;
use astrokit_core::template::PathTemplate;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use crate::summary::print_rows;

#[derive(Args)]
pub struct ScanArgs {
    /// Path template; overrides the template from --config
    pub template: Option<String>,

    /// Scan config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum directory depth below the template root
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,

    /// Extension that does not need recording per channel
    #[arg(long)]
    pub default_extension: Option<String>,

    /// Rows that already exist, as token or token:extension (repeatable)
    #[arg(long = "existing", value_name = "TOKEN[:EXT]")]
    pub existing: Vec<String>,
}

fn build_config(args: &ScanArgs) -> Result<ScanConfig> {
    let mut config = match args.config {
        Some(ref path) => super::config::load(path)?,
        None => ScanConfig::default(),
    };

    if let Some(ref template) = args.template {
        config.template = template.clone();
    }
    if let Some(depth) = args.max_depth {
        config.max_depth = Some(depth);
    }
    if args.follow_links {
        config.follow_links = true;
    }
    if let Some(ref ext) = args.default_extension {
        config.default_extension = ext.clone();
    }

    Ok(config)
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let config = build_config(args)?;
    let template = PathTemplate::parse(&config.template)
        .with_context(|| format!("Invalid template in scan config: {}", config.template))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let matches = files_matching_template_with_progress(
        &template,
        &config.discover_options(),
        |visited| {
            if visited % 256 == 0 {
                pb.set_message(format!("Scanned {visited} entries"));
            }
        },
    )?;
    pb.finish_and_clear();

    let existing: Vec<(String, Option<String>)> = args
        .existing
        .iter()
        .map(|spec| parse_row_spec(spec, &config.default_extension))
        .collect();
    let rows = suggest_rows(&template, &matches, &config.default_extension, &existing);
    print_rows(&template, &config, &rows);

    Ok(())
}
