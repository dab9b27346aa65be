//! MIPS pipeline simulator CLI.
//!
//! This binary is the single entry point for the simulator. It performs:
//! 1. **Run:** Load a program (and optional data image), then run it cycle by cycle with a text view.
//! 2. **Step:** The same run, pausing after every cycle until Enter is pressed.
//! 3. **Disassemble:** Print an address/word/mnemonic listing of the program and exit.

mod view;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mipsim_core::isa::disasm::disassemble_program;
use mipsim_core::sim::loader::load_binary;
use mipsim_core::stats::STATS_SECTIONS;
use mipsim_core::{Config, RunOutcome, SimError, Simulator};

use crate::view::{Exit, TextView};

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Cycle-accurate 5-stage pipelined MIPS subset simulator",
    long_about = "Run a raw big-endian MIPS binary through an IF/ID/EX/MEM/WB pipeline with no forwarding.\n\nSupported instructions: add, sub, and, or, slt, lw, sw, beq, j. The word 0x00000000 is a no-op.\n\nExamples:\n  mipsim program.bin\n  mipsim -s -m 4096 -d data.bin program.bin\n  mipsim --disassemble program.bin"
)]
struct Cli {
    /// Program image: big-endian 32-bit instruction words.
    input: PathBuf,

    /// Data memory size in bytes [default: 1024].
    #[arg(short, long, visible_alias = "mem")]
    memory: Option<usize>,

    /// Raw image copied to the start of data memory.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Pause after every cycle: Enter steps, `q` quits.
    #[arg(short, long)]
    step: bool,

    /// JSON configuration file. Flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Discard writes to $0 and never stall on it.
    #[arg(long)]
    hardwire_zero: bool,

    /// Halt as soon as fetch passes the end of the program.
    #[arg(long)]
    no_drain: bool,

    /// Abort after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Print a listing of the program and exit.
    #[arg(long)]
    disassemble: bool,

    /// Do not render the pipeline after each cycle.
    #[arg(short, long)]
    quiet: bool,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Statistics sections to print after the run (comma separated). Empty prints all.
    #[arg(long, value_delimiter = ',', value_parser = clap::builder::PossibleValuesParser::new(STATS_SECTIONS.iter().copied()))]
    stats: Vec<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("step session interrupted")]
    Interrupted,

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr `fmt` subscriber. `RUST_LOG` takes precedence over `-v`.
fn setup_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Builds the run configuration: defaults, then the config file, then flags.
fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
                path: path.clone(),
                source,
            })?;
            Config::from_json(&json)?
        }
        None => Config::default(),
    };
    apply_overrides(cli, &mut config);
    Ok(config)
}

fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(size) = cli.memory {
        config.memory.data_mem_size = size;
    }
    if cli.hardwire_zero {
        config.pipeline.hardwire_zero = true;
    }
    if cli.no_drain {
        config.pipeline.drain = false;
    }
    if cli.max_cycles.is_some() {
        config.general.max_cycles = cli.max_cycles;
    }
    if cli.verbose >= 2 {
        config.general.trace = true;
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.disassemble {
        let program = load_binary(&cli.input)?;
        let mut out = io::stdout().lock();
        for line in disassemble_program(&program) {
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    let config = load_config(cli)?;
    let mut sim = Simulator::from_files(&cli.input, cli.data.as_deref(), &config)?;
    info!(
        input = %cli.input.display(),
        data_mem = config.memory.data_mem_size,
        step = cli.step,
        "starting simulation"
    );

    let mut view = TextView::new(io::stdin().lock(), io::stdout().lock(), cli.step, cli.quiet);
    let result = sim.run_with(&mut view);
    if let Some(e) = view.take_error() {
        return Err(e.into());
    }

    match result {
        Ok(RunOutcome::Completed) => {
            sim.cpu.stats.print_sections(&cli.stats);
            Ok(())
        }
        Ok(RunOutcome::Stopped) => {
            sim.cpu.stats.print_sections(&cli.stats);
            match view.exit() {
                Some(Exit::Interrupted) => Err(CliError::Interrupted),
                Some(Exit::Quit) | None => Ok(()),
            }
        }
        Err(e) => {
            let mut err = io::stderr().lock();
            writeln!(err, "pc = {:#010x}", sim.cpu.pc)?;
            for line in sim.cpu.regs.dump() {
                writeln!(err, "{line}")?;
            }
            drop(err);
            sim.cpu.stats.print_sections(&cli.stats);
            Err(e.into())
        }
    }
}
