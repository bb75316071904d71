use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;

use pathswap::cli::CliArgs;
use pathswap::config::SwapConfig;
use pathswap::{host, swap};

fn main() -> Result<()> {
    pathswap::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => SwapConfig::load_from(path).map_err(anyhow::Error::msg)?,
        None => SwapConfig::load(),
    };
    let table = config
        .mapping_table()
        .context("invalid custom mapping configuration")?;

    let line = read_line(&args)?;

    let outcomes = swap::swap_at_cursors(&line, &args.cursors, &table, |span| {
        args.raw || host::detect_raw_marker(&line, span)
    })
    .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if args.json {
        for outcome in &outcomes {
            println!("{}", serde_json::to_string(outcome)?);
        }
    } else {
        println!("{}", host::apply_all(&line, &outcomes));
    }

    Ok(())
}

/// Read the line to rewrite from the argument or stdin
fn read_line(args: &CliArgs) -> Result<String> {
    if args.reads_stdin() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read line from stdin")?;
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    } else {
        Ok(args.line.clone().unwrap_or_default())
    }
}
