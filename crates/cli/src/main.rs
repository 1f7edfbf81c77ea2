//! LS-8 virtual CPU command-line runner.
//!
//! This binary loads one program file and either:
//! 1. **Runs it** (default): executes until `HLT`, printing each `PRN` value on stdout.
//! 2. **Dumps it** (`--dump`): prints every parsed byte as `binary: decimal`.
//! 3. **Disassembles it** (`--disasm`): prints the program annotated with mnemonics.
//!
//! Exit codes: 0 success, 1 usage error, 2 program file not found, 3 malformed
//! program, 4 execution error, 5 invalid configuration file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ls8_core::config::{Config, UnknownOpcodePolicy};
use ls8_core::core::Cpu;
use ls8_core::sim::loader;
use ls8_core::CpuError;

const EXIT_USAGE: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;
const EXIT_BAD_PROGRAM: u8 = 3;
const EXIT_EXECUTION: u8 = 4;
const EXIT_CONFIG: u8 = 5;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 virtual CPU",
    long_about = "Load a program written as one binary byte per line \
                  ('#' starts a comment) and run it.\n\n\
                  Examples:\n  \
                  ls8 programs/print8.ls8\n  \
                  ls8 --trace --max-steps 1000 programs/loop.ls8\n  \
                  ls8 --disasm programs/mult.ls8"
)]
struct Cli {
    /// Program file to load.
    program: PathBuf,

    /// Log PC, the next three bytes, and all registers before every step.
    #[arg(long)]
    trace: bool,

    /// Fail with an error after this many steps without halting.
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Step over unknown opcodes with a warning instead of failing.
    #[arg(long)]
    skip_unknown: bool,

    /// Print run statistics to stderr after execution.
    #[arg(long)]
    stats: bool,

    /// JSON configuration file; command-line flags override it.
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Print each program byte as `binary: decimal` instead of running it.
    #[arg(long, conflicts_with = "disasm")]
    dump: bool,

    /// Print the annotated disassembly instead of running the program.
    #[arg(long)]
    disasm: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("ls8: {msg}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    init_logging(&config);
    debug!(general = ?config.general, system = ?config.system, "configuration resolved");

    let program = match loader::load_program(&cli.program) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("ls8: {e}");
            return ExitCode::from(load_exit_code(&e));
        }
    };

    if cli.dump {
        for byte in &program {
            println!("{byte:08b}: {byte}");
        }
        return ExitCode::SUCCESS;
    }
    if cli.disasm {
        print!("{}", loader::annotate_program(&program));
        return ExitCode::SUCCESS;
    }

    run_program(&config, &program, cli.stats)
}

/// Installs the stderr `tracing` subscriber for the resolved configuration.
fn init_logging(config: &Config) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directives = log_directives(config, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Filter directives: `RUST_LOG` (default `warn`), with `ls8_core` raised to
/// `trace` when trace mode is on from either the flag or the config file.
fn log_directives(config: &Config, rust_log: Option<&str>) -> String {
    let base = rust_log.filter(|s| !s.trim().is_empty()).unwrap_or("warn");
    if config.general.trace {
        format!("{base},ls8_core=trace")
    } else {
        base.to_string()
    }
}

/// Reads the optional JSON configuration and applies command-line overrides.
fn build_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };
    config.general.trace |= cli.trace;
    if cli.max_steps.is_some() {
        config.general.max_steps = cli.max_steps;
    }
    if cli.skip_unknown {
        config.general.unknown_opcode = UnknownOpcodePolicy::Skip;
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
    Config::from_json(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
}

/// Loads the image into a fresh CPU and runs it to completion.
fn run_program(config: &Config, program: &[u8], show_stats: bool) -> ExitCode {
    let mut cpu = Cpu::new(config);
    if let Err(e) = cpu.load(program) {
        eprintln!("ls8: program does not fit in memory: {e}");
        return ExitCode::from(EXIT_BAD_PROGRAM);
    }

    let result = cpu.run();
    if show_stats {
        cpu.stats.print();
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ls8: {e}");
            eprintln!("  PC={:#04x} FL={:#05b}", cpu.pc(), cpu.flags().bits());
            eprintln!("  {}", cpu.registers().dump());
            ExitCode::from(EXIT_EXECUTION)
        }
    }
}

const fn load_exit_code(e: &CpuError) -> u8 {
    match e {
        CpuError::SourceNotFound { .. } => EXIT_NOT_FOUND,
        _ => EXIT_BAD_PROGRAM,
    }
}
