use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use recursive_toolkit::interactive::{
    answered_yes, long_input_warning, needs_confirmation, read_trimmed,
};
use recursive_toolkit::prelude::*;

#[derive(Parser)]
#[command(name = "recursive_toolkit")]
#[command(about = "Recursive file finder and unique permutation generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Find every file with an exact name under a directory
    Find {
        /// Directory to search recursively
        directory: PathBuf,

        /// Exact, case-sensitive file name to look for
        file_name: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate all unique permutations of a string
    Permute {
        /// String whose characters are permuted
        input: String,

        /// Generation strategy: standard (prefix extension) or swap (backtracking)
        #[arg(short, long, default_value = "standard")]
        strategy: Strategy,

        /// List every permutation instead of the first 10
        #[arg(short, long)]
        all: bool,

        /// Skip the confirmation prompt for long inputs
        #[arg(short, long)]
        yes: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Time both strategies on the same string
    Compare {
        /// String whose characters are permuted
        input: String,

        /// Skip the confirmation prompt for long inputs
        #[arg(short, long)]
        yes: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Menu-driven session on stdin/stdout
    Interactive,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Run in batch mode (no interactive prompts, no spinner)
    #[arg(long)]
    batch: bool,
}

impl OutputArgs {
    fn quiet(&self) -> bool {
        self.batch || self.json
    }

    fn writer(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create report file {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Find { directory, file_name, output } => run_find(&directory, &file_name, &output),
        Command::Permute { input, strategy, all, yes, output } => {
            run_permute(&input, strategy, all, yes, &output)
        }
        Command::Compare { input, yes, output } => run_compare(&input, yes, &output),
        Command::Interactive => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            let mut writer = io::stdout().lock();
            run_session(&mut reader, &mut writer)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_find(directory: &Path, file_name: &str, output: &OutputArgs) -> Result<ExitCode> {
    let spinner = spinner(output.quiet());

    let result = find_with_progress(directory, file_name, |dir| {
        spinner.set_message(dir.display().to_string());
    });
    spinner.finish_and_clear();

    let matches = match result {
        Ok(matches) => matches,
        Err(e) => return Ok(invalid_argument(&e)),
    };

    let report = SearchReport::new(directory, file_name, matches);
    let mut out = output.writer()?;
    if output.json {
        write_json(&mut out, &report)?;
    } else {
        write_search_report(&mut out, &report)?;
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn run_permute(
    input: &str,
    strategy: Strategy,
    show_all: bool,
    yes: bool,
    output: &OutputArgs,
) -> Result<ExitCode> {
    if !confirm_long_input(input, yes, output.batch)? {
        return Ok(ExitCode::FAILURE);
    }

    let spinner = spinner(output.quiet());
    spinner.set_message(format!("Generating permutations ({})", strategy));

    let start = Instant::now();
    let result = strategy.run(Some(input));
    let elapsed = start.elapsed();
    spinner.finish_and_clear();

    let set = match result {
        Ok(set) => set,
        Err(e) => return Ok(invalid_argument(&e)),
    };

    let report = PermutationReport::new(input, strategy, set, elapsed);
    let mut out = output.writer()?;
    if output.json {
        write_json(&mut out, &report)?;
    } else {
        write_permutation_report(&mut out, &report, show_all)?;
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn run_compare(input: &str, yes: bool, output: &OutputArgs) -> Result<ExitCode> {
    if !confirm_long_input(input, yes, output.batch)? {
        return Ok(ExitCode::FAILURE);
    }

    let spinner = spinner(output.quiet());
    spinner.set_message("Timing both strategies");
    let result = analyze_performance(Some(input));
    spinner.finish_and_clear();

    let result = match result {
        Ok(result) => result,
        Err(e) => return Ok(invalid_argument(&e)),
    };

    let report = ComparisonReport::new(input, &result);
    let mut out = output.writer()?;
    if output.json {
        write_json(&mut out, &report)?;
    } else {
        write_comparison_report(&mut out, &report)?;
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

/// Ask before a factorial blow-up. Batch mode never prompts and refuses
/// unless `--yes` was given.
fn confirm_long_input(input: &str, yes: bool, batch: bool) -> Result<bool> {
    if yes || !needs_confirmation(input) {
        return Ok(true);
    }

    if batch {
        eprintln!("{}", long_input_warning(input));
        eprintln!("Refusing in batch mode; pass --yes to proceed.");
        return Ok(false);
    }

    eprint!("{} Continue? (y/n): ", long_input_warning(input));
    io::stderr().flush()?;
    let answer = read_trimmed(&mut io::stdin().lock())?;
    Ok(answered_yes(answer))
}

fn invalid_argument(e: &InvalidArgument) -> ExitCode {
    eprintln!("Error: {}", e);
    ExitCode::FAILURE
}

fn spinner(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
