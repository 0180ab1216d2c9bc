use anyhow::Result;
use clap::Parser;
use route_cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    route_cli::init_tracing(args.log_json)?;

    let output = route_cli::run(&args)?;
    println!("{output}");
    Ok(())
}
