use anyhow::{Context, Result};
use checkerpath::{logger, render_text, Cli, Report};
use checkerpath_core::find_best_paths;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;
    if cli.color { colored::control::set_override(true); }

    let cfg = cli.load_config()?;
    let paths = cli.limits().check(cfg.width, cfg.height)?;
    log::info!("{}x{} grid has {} paths", cfg.width, cfg.height, paths);

    let grid = cfg.build().context("building grid")?;
    log::debug!("grid values:\n{}", grid);
    let result = find_best_paths(&grid).context("searching paths")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&Report::new(&grid, &result))?);
    } else {
        print!("{}", render_text(&grid, &result, cli.color));
    }
    Ok(())
}
