//! CLI wiring: argument handling and the scan-and-render pipeline.

pub mod args;
pub mod output;

pub use args::{Cli, Format};
pub use output::Output;

use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::wiki::Wiki;
use std::io;

/// Run the full pipeline for the parsed arguments.
pub fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref(), &cli.dir)?;
    apply_cli(&mut config, cli);

    let output = Output::new(cli.quiet);

    let mut wiki = Wiki::new(&cli.dir, config.remap_table(), config.ignore.as_deref())?;
    wiki.walk(&config.skip_dirs())?;

    match cli.format {
        Format::Dot => {
            let dot = export::render(wiki.graph(), config.level, config.cluster);
            let stdout = io::stdout();
            dot.write_to(&mut stdout.lock())?;
        }
        Format::Json => output.print_json(wiki.graph())?,
    }

    Ok(())
}

/// Command-line flags override file configuration.
fn apply_cli(config: &mut Config, cli: &Cli) {
    if cli.keep_diary {
        config.collapse_diary = false;
    }
    if cli.cluster {
        config.cluster = true;
    }
    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(ignore) = &cli.ignore {
        config.ignore = Some(ignore.clone());
    }
    config.skip.extend(cli.skip.iter().cloned());
}
