//! Synthesize a Toffoli circuit from a file of truth tables.
//!
//! Each non-blank line of the input file is one truth table of `0`/`1` tokens;
//! every table becomes one output qubit.
//!
//! Run with: `cargo run --example quantum_cad -- input.txt`

use std::path::PathBuf;

use clap::Parser;
use revsynth_rs::circuit::Circuit;
use revsynth_rs::config::SynthConfig;
use revsynth_rs::expr::AnfSystem;
use revsynth_rs::io::load_truth_tables;

#[derive(Parser, Debug)]
#[command(name = "quantum_cad")]
#[command(about = "Reed-Muller based Toffoli synthesis from truth tables")]
struct Args {
    /// File with one truth table per line
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Maximum number of input variables
    #[arg(long, default_value_t = 16)]
    max_arity: usize,

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

    let config = SynthConfig {
        max_arity: Some(args.max_arity),
        ..SynthConfig::default()
    };

    let tables = load_truth_tables(&args.input)?;
    log::info!("Loaded {} truth tables from {}", tables.len(), args.input.display());

    let system = AnfSystem::from_truth_tables(&tables, &config)?;
    println!("Inputs: {:?}", system.inputs());
    println!("Outputs: {:?}", system.outputs());
    println!("Equations:");
    for (name, eq) in system.outputs().iter().zip(system.equations()) {
        println!("  {} = {}", name, eq);
    }

    let circuit = Circuit::synthesize(&system, &config);
    println!();
    println!("Toffoli gates description (sequential):");
    print!("{}", circuit);
    println!();
    println!(
        "where {}i(x1,x2,...,xn) targets the i-th qubit and x1*x2*...*xn is the control",
        config.gate_prefix
    );

    if circuit.verify(&tables) {
        log::info!("Circuit reproduces all {} truth tables", tables.len());
    } else {
        color_eyre::eyre::bail!("synthesized circuit does not reproduce the truth tables");
    }

    Ok(())
}
