use anyhow::Result;
use astrokit_core::template::PathTemplate;
use clap::Args;

#[derive(Args)]
pub struct SplitArgs {
    /// Path template, e.g. "/data/${token}.${extension}"
    pub template: String,
}

pub fn run(args: &SplitArgs) -> Result<()> {
    let template = PathTemplate::parse(&args.template)?;
    let split = template.split();

    println!("Root:        {}", split.root);
    println!("Remainder:   {}", split.remainder);
    let names: Vec<&str> = template.placeholders().collect();
    if !names.is_empty() {
        println!("Placeholders: {}", names.join(", "));
    }

    Ok(())
}
