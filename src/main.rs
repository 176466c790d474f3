use log::{debug, error, info};
use clap::Parser;

mod cli;
mod logger;

use aotrace::output::save_image;
use aotrace::render::render;
use cli::Args;
use logger::init_logger;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("aotrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new().num_threads(threads).build_global()?;
        debug!("Using a pool of {} worker threads", threads);
    }

    let config = args.to_config()?;
    info!("Image resolution: {}x{}, oversampling: {}", config.width, config.height, config.oversampling);

    let image = render(&config)?;
    save_image(&image, &args.output)?;
    Ok(())
}
