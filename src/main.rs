use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use mdsite::Config;
use mdsite::site;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from Markdown pages")]
struct Cli {
    /// Prefix for root-relative links (overrides `site.base_path`)
    base_path: Option<String>,

    /// Site configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Output directory (overrides `paths.output_dir`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every converted block
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(&cli.config)?;
    if let Some(base_path) = cli.base_path {
        config.site.base_path = base_path;
    }
    if let Some(output) = cli.output {
        config.paths.output_dir = output;
    }

    let report = site::build_site(&config).with_context(|| {
        format!(
            "building site from {}",
            config.paths.content_dir.display()
        )
    })?;

    log::info!(
        "Copied {} static files and generated {} pages into {}",
        report.static_files,
        report.pages,
        config.paths.output_dir.display()
    );
    Ok(())
}
