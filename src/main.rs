//! sdgen - Stream Deck profile generator.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};
use std::time::Duration;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use sdgen::archive::{read_archive_file, write_to_disk};
use sdgen::cli::{self, Cli, Commands};
use sdgen::config::load_config;
use sdgen::error::{GenError, Result};
use sdgen::generators::{GeneratorInfo, GeneratorInput, find_generator, generators};
use sdgen::ids::folder_name_str;
use sdgen::logging::init_logging;
use sdgen::output::{FolderNameEntry, Output, OutputMode, VersionInfo};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> &'static str {
        option_env!("VERGEN_GIT_DIRTY").unwrap_or("false")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    init_logging(cli.robot, cli.verbose, cli.quiet);

    let out = OutputMode::from_cli(&cli).into_output();

    if let Err(e) = run(&cli, out.as_ref()).await {
        out.error(&e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, out: &dyn Output) -> Result<()> {
    match &cli.command {
        None => {
            print_quick_start(cli);
            Ok(())
        }
        Some(Commands::Run(args)) => cmd_run(cli, out, args).await,
        Some(Commands::Generators) => {
            let infos: Vec<GeneratorInfo> = generators().iter().map(|g| (*g).into()).collect();
            out.generator_list(&infos);
            Ok(())
        }
        Some(Commands::Inspect(args)) => {
            let contents = read_archive_file(&args.archive)?;
            out.archive_summary(&contents.summary()?);
            Ok(())
        }
        Some(Commands::FolderName(args)) => cmd_folder_name(out, args),
        Some(Commands::Version) => {
            out.version_info(&VersionInfo {
                version: build_info::VERSION,
                git_sha: build_info::git_sha(),
                git_dirty: build_info::git_dirty() == "true",
                build_timestamp: build_info::build_timestamp(),
                rustc_version: build_info::rustc_semver(),
                target: build_info::target(),
            });
            Ok(())
        }
        Some(Commands::Completions(args)) => {
            use clap::CommandFactory;
            clap_complete::generate(args.shell, &mut Cli::command(), "sdgen", &mut io::stdout());
            Ok(())
        }
    }
}

async fn cmd_run(cli: &Cli, out: &dyn Output, args: &cli::RunArgs) -> Result<()> {
    let generator = find_generator(&args.generator)?;
    info!(generator = generator.name(), "Loading generator");

    let config = match &args.config {
        Some(path) => {
            let loaded = load_config(path)?;
            info!(
                path = %path.display(),
                config_dir = %loaded.config_dir().display(),
                "Using config"
            );
            Some(loaded)
        }
        None => None,
    };
    if config.is_some() && !generator.requires_config() {
        out.warning(&format!(
            "Generator '{}' does not read a config; ignoring --config",
            generator.name()
        ));
    }

    let set = generator.generate(&GeneratorInput { config })?;
    debug!(profiles = set.len(), "Profile set generated");

    let unresolved = set.unresolved_links();
    if !unresolved.is_empty() {
        out.warning(&format!(
            "{} folder key(s) link to profiles missing from the archive",
            unresolved.len()
        ));
    }

    if !args.output_dir.is_dir() {
        return Err(GenError::ConfigInvalid(format!(
            "Output directory does not exist: {}",
            args.output_dir.display()
        )));
    }

    let interactive = !OutputMode::from_cli(cli).is_robot() && !cli.quiet;
    let spinner = (interactive && io::stderr().is_terminal())
        .then(|| write_spinner(set.main.name()));
    let result = write_to_disk(set, args.output_dir.clone()).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    out.archive_written(&result?);
    Ok(())
}

fn write_spinner(name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Writing {name}"));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn cmd_folder_name(out: &dyn Output, args: &cli::FolderNameArgs) -> Result<()> {
    let entries = args
        .ids
        .iter()
        .map(|id| {
            Ok(FolderNameEntry {
                id: id.clone(),
                folder: folder_name_str(id)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    out.folder_names(&entries);
    Ok(())
}

// === Quick Start (Robot Mode Optimized) ===

fn print_quick_start(cli: &Cli) {
    if cli.use_json() {
        print_robot_quick_start();
    } else {
        print_human_quick_start();
    }
}

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    commands: RobotCommands,
    generators: Vec<&'static str>,
    output_modes: OutputModes,
}

#[derive(Serialize)]
struct RobotCommands {
    run: &'static str,
    list_generators: &'static str,
    inspect: &'static str,
    folder_name: &'static str,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

fn print_robot_quick_start() {
    let help = RobotQuickStart {
        tool: "sdgen",
        version: build_info::VERSION,
        description: "Generates linked Stream Deck profiles as .streamDeckProfile archives",
        commands: RobotCommands {
            run: "sdgen run <GENERATOR> --config <FILE> [--output-dir <DIR>]",
            list_generators: "sdgen generators --robot",
            inspect: "sdgen inspect <ARCHIVE> --robot",
            folder_name: "sdgen folder-name <UUID>...",
        },
        generators: sdgen::generators::generator_names(),
        output_modes: OutputModes {
            human: "--format=text (default)",
            robot: "--robot or --format=json",
            compact: "--format=json-compact",
        },
    };

    match serde_json::to_string_pretty(&help) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{e}"),
    }
}

fn print_human_quick_start() {
    println!(
        "{} {} - Stream Deck profile generator\n",
        style("sdgen").bold().cyan(),
        build_info::VERSION
    );

    println!("{}", style("QUICK START").bold().underlined());
    println!();
    println!(
        "  {}  Try it without a config",
        style("sdgen run simple-example").green()
    );
    println!(
        "  {}  Event layout, 15 keys",
        style("sdgen run lp --config event.json").green()
    );
    println!(
        "  {}  Event layout, 32 keys",
        style("sdgen run lpxl --config event.json").green()
    );
    println!("  {}  List generators", style("sdgen generators").green());
    println!(
        "  {}  Summarize an archive",
        style("sdgen inspect <ARCHIVE>").green()
    );
    println!();

    println!("Run {} for full help", style("sdgen --help").yellow());
}
