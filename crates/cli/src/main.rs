//! LS-8 emulator CLI.
//!
//! This binary loads an LS-8 program file and executes it. It performs:
//! 1. **Run:** Load a program, execute until `HLT`, and report faults.
//! 2. **Disasm:** Print a listing of a program without running it.
//!
//! Exit codes: `0` success, `1` bad arguments, malformed literal, or run-time
//! fault, `2` file not found, `3` empty program.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::isa::disasm;
use ls8_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit CPU emulator",
    long_about = "Run or disassemble an LS-8 program.\n\nA program file holds one 8-bit binary literal per line; `#` starts a comment.\n\nExamples:\n  ls8 run programs/print8.ls8\n  ls8 programs/call.ls8 --trace\n  ls8 disasm programs/stack.ls8",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and execute a program.
    Run(RunArgs),

    /// Print a disassembly listing of a program.
    Disasm {
        /// Program file to disassemble.
        program: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Program file to execute.
    program: Option<PathBuf>,

    /// Print an LS-8 trace line to stderr before every instruction.
    #[arg(short, long)]
    trace: bool,

    /// Print execution statistics to stderr after the run.
    #[arg(short, long)]
    stats: bool,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = i32::from(e.use_stderr());
            let _ = e.print();
            process::exit(code);
        }
    };

    let code = match cli.command {
        Some(Commands::Run(args)) => cmd_run(&args),
        Some(Commands::Disasm { program }) => {
            init_logging(false);
            cmd_disasm(&program)
        }
        None => cmd_run(&cli.run),
    };
    process::exit(code);
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the JSON config file, if one was given.
fn read_config(path: Option<&Path>) -> Result<Config, String> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read config {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
}

/// Loads and runs a program. Returns the process exit code.
fn cmd_run(args: &RunArgs) -> i32 {
    init_logging(args.verbose);

    let Some(program) = args.program.as_deref() else {
        eprintln!("Error: no program file given");
        eprintln!("  ls8 run <program>");
        eprintln!("  ls8 --help  for full options");
        return 1;
    };

    let mut config = match read_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return 1;
        }
    };
    if args.trace {
        config.general.trace_instructions = true;
    }

    let mut cpu = Cpu::new(&config);
    let bytes = match loader::load(&mut cpu, program) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: {e}");
            return e.exit_code();
        }
    };
    info!(program = %program.display(), bytes, "program loaded");

    let result = cpu.run();
    if args.stats {
        cpu.stats.print();
    }
    match result {
        Ok(()) => 0,
        Err(fault) => {
            eprintln!("\n[!] FATAL: {fault}");
            cpu.dump_state();
            1
        }
    }
}

/// Prints a disassembly listing. Returns the process exit code.
fn cmd_disasm(program: &Path) -> i32 {
    let image = match loader::load_program(program) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: {e}");
            return e.exit_code();
        }
    };
    for (addr, text) in disasm::disassemble_program(&image) {
        println!("{addr:02X}: {text}");
    }
    0
}
