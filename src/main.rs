use std::io::{self, prelude::*};
use structopt::StructOpt;

mod demo;
mod stack;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lifo",
    about = "Pushes 0 through 9 onto a stack and pops them back off."
)]
struct Opt {
    /// Enables trace log level
    #[structopt(short, long)]
    trace: bool,

    /// Enables info log level
    #[structopt(short, long)]
    info: bool,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let log_level = if opt.trace {
        log::Level::Trace
    } else if opt.info {
        log::Level::Info
    } else {
        log::Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    demo::run(&mut out)?;
    out.flush()?;

    Ok(())
}
