//! Embed a Boolean function into a reversible one.
//!
//! Without an input file the demo embeds `f(00)=1, f(01)=0, f(10)=1, f(11)=0`.
//!
//! Run with: `cargo run --example reversible -- [map.txt]`

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use revsynth_rs::config::SynthConfig;
use revsynth_rs::embed::{FunctionMap, ReversibleMapping};
use revsynth_rs::io::load_function_map;

#[derive(Parser, Debug)]
#[command(name = "reversible")]
#[command(about = "Reversible embedding of a Boolean function")]
struct Args {
    /// File with one `input output` bit-string pair per line
    input: Option<PathBuf>,

    /// Print the embedding as per-output-bit lists
    #[arg(short, long)]
    columns: bool,

    /// Maximum bit width of the embedded mapping
    #[arg(long, default_value_t = 20)]
    max_width: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let f = match &args.input {
        Some(path) => load_function_map(path)?.ok_or_else(|| eyre!("{} has no entries", path.display()))?,
        None => FunctionMap::from_entries(2, 1, [(0b00, 0b1), (0b01, 0b0), (0b10, 0b1), (0b11, 0b0)])?,
    };

    let r = ReversibleMapping::from_function(
        &f,
        &SynthConfig {
            max_width: Some(args.max_width),
            ..SynthConfig::default()
        },
    )?;
    log::info!(
        "n = {}, m = {}, garbage inputs = {}, garbage outputs = {}",
        r.num_inputs(),
        r.num_outputs(),
        r.garbage_inputs(),
        r.garbage_outputs()
    );

    println!("Reversible Function:");
    print!("{}", r);

    if args.columns {
        println!();
        println!("Output Lists:");
        for (i, column) in r.output_columns().iter().enumerate() {
            println!("List {}: {:?}", i + 1, column);
        }
    }

    Ok(())
}
