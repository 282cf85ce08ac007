// Use jemalloc for better memory allocation performance on Unix-like systems
#[cfg(all(not(target_env = "msvc"), not(target_arch = "wasm32")))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

// Use mimalloc on Windows for better performance
#[cfg(all(target_env = "msvc", not(target_arch = "wasm32")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod cli_types;
pub use cli_types::{CheckArgs, FixMode};

mod cli_utils;
mod commands;
mod file_processor;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::shells::Shell;
use core::error::Error;

use copylint_lib::exit_codes::exit;

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Control colored output
    #[arg(long, global = true, default_value_t, value_enum)]
    color: Color,

    /// Path to configuration file
    #[arg(
        long,
        global = true,
        help = "Path to configuration file",
        conflicts_with = "no_config"
    )]
    config: Option<String>,

    /// Ignore all configuration files and use built-in defaults
    #[arg(
        long,
        global = true,
        help = "Ignore all configuration files and use built-in defaults"
    )]
    no_config: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check Chinese text files for typography issues
    Check(CheckArgs),
    /// Fix files in place (alias for check --fix that exits 0 on findings)
    Fmt(CheckArgs),
    /// Show information about a rule or list all rules
    Rule {
        /// Rule ID (optional, omit to list all rules)
        rule: Option<String>,
    },
    /// Initialize a new configuration file
    Init {
        /// Output file path (default: .copylint.toml)
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        shell: Option<Shell>,
        /// List available shells
        #[arg(long, short = 'l')]
        list: bool,
    },
}

#[derive(Clone, Default, ValueEnum)]
enum Color {
    #[default]
    Auto,
    Always,
    Never,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Reset SIGPIPE to default behavior on Unix so piping to `head` etc. works correctly.
    // Without this, Rust ignores SIGPIPE and `println!` panics on broken pipe.
    #[cfg(unix)]
    {
        // SAFETY: restoring the default SIGPIPE disposition before any output is written
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    let cli = Cli::parse();

    // RUST_LOG=debug copylint check ... shows config discovery and per-rule counts
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.format_timestamp(None).format_target(false).init();

    // Set color override globally based on --color flag
    match cli.color {
        Color::Always => colored::control::set_override(true),
        Color::Never => colored::control::set_override(false),
        Color::Auto => colored::control::unset_override(),
    }

    let config_path = if cli.no_config { None } else { cli.config.as_deref() };

    // Catch panics and print a message, exit 2
    let no_config = cli.no_config;
    let result = std::panic::catch_unwind(|| match cli.command {
        Commands::Check(mut args) => {
            args.fix_mode = if args.fix { FixMode::CheckFix } else { FixMode::Check };
            commands::check::run_check(&args, config_path, no_config);
        }
        Commands::Fmt(mut args) => {
            args.fix_mode = FixMode::Format;
            commands::check::run_check(&args, config_path, no_config);
        }
        Commands::Rule { rule } => {
            commands::rule::handle_rule(rule);
        }
        Commands::Init { output } => {
            commands::init::handle_init(output);
        }
        Commands::Completions { shell, list } => {
            commands::completions::handle_completions(shell, list);
        }
    });

    if let Err(e) = result {
        eprintln!("[copylint panic handler] Uncaught panic: {e:?}");
        exit::tool_error();
    }

    Ok(())
}
