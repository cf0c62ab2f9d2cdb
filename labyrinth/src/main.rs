use clap::Parser;
use log::LevelFilter;

use labyrinth_lib::{Args, execute};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    println!("{}", execute(&args)?);
    Ok(())
}
