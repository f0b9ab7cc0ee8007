//! swagen CLI - Rust types and operation stubs from Swagger 2.0 documents

mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use swagen_core::{Config, Document, Generated, generate, generate_schema};

#[derive(Parser)]
#[command(name = "swagen")]
#[command(about = "Generate Rust types and operation stubs from Swagger 2.0 documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "terminal")]
    output: OutputFormat,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust modules from a Swagger document
    Generate {
        #[command(flatten)]
        source: Source,

        /// Output directory (overrides config)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Name of the operations trait (overrides config)
        #[arg(long)]
        trait_name: Option<String>,

        /// Skip the operations trait
        #[arg(long)]
        no_stubs: bool,

        /// Show what would be written without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Summarize a document: version, operations, definitions
    Inspect {
        #[command(flatten)]
        source: Source,
    },

    /// Print the synthesized declaration stream as JSON
    Declarations {
        #[command(flatten)]
        source: Source,
    },

    /// Initialize config file
    Init,

    /// Export JSON Schema for the declaration interchange format
    Schema,
}

#[derive(clap::Args)]
struct Source {
    /// Swagger document, JSON or YAML (overrides config)
    #[arg(short, long)]
    spec: Option<PathBuf>,

    /// Config file (default: .swagen.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Source {
    fn config(&self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_default()?,
        };
        if let Some(spec) = &self.spec {
            cfg.spec.clone_from(spec);
        }
        Ok(cfg)
    }
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    Terminal,
    Json,
    Silent,
}

const CONFIG_FILE: &str = ".swagen.toml";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(3)
        }
    }
}

/// `RUST_LOG` wins unless `--verbose` asks for debug; the default is `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn load(spec: &Path) -> Result<Document> {
    Document::load(spec).with_context(|| format!("failed to load {}", spec.display()))
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Generate {
            source,
            out,
            trait_name,
            no_stubs,
            dry_run,
        } => {
            let mut cfg = source.config()?;
            if let Some(out) = out {
                cfg.output_dir = out;
            }
            if let Some(name) = trait_name {
                cfg.trait_name = name;
            }
            if no_stubs {
                cfg.stubs = false;
            }

            let doc = load(&cfg.spec)?;
            let generated = generate(&doc, &cfg);
            if generated.is_empty() {
                if cli.output != OutputFormat::Silent {
                    eprintln!(
                        "Nothing to generate: {} has no definitions or operations",
                        cfg.spec.display()
                    );
                }
                return Ok(1);
            }

            let layout = output::Layout::new(&cfg.output_dir, &cfg.spec);

            if dry_run {
                match cli.output {
                    OutputFormat::Terminal => print_plan(&layout, &generated),
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&generated.interchange)?);
                    }
                    OutputFormat::Silent => {}
                }
                return Ok(0);
            }

            let written = output::write_all(&layout, &generated)
                .with_context(|| format!("failed to write to {}", cfg.output_dir.display()))?;

            match cli.output {
                OutputFormat::Terminal => {
                    println!(
                        "Generated {} definitions, {} operations from {}",
                        generated.interchange.definitions.len(),
                        generated.interchange.operations.len(),
                        cfg.spec.display()
                    );
                    for path in &written {
                        println!("  {}", path.display());
                    }
                }
                OutputFormat::Json => {
                    let json_output = serde_json::json!({
                        "spec": cfg.spec.display().to_string(),
                        "definitions": generated.interchange.definitions.len(),
                        "operations": generated.interchange.operations.len(),
                        "files": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
                    });
                    println!("{}", serde_json::to_string_pretty(&json_output)?);
                }
                OutputFormat::Silent => {}
            }
            Ok(0)
        }

        Commands::Inspect { source } => {
            let cfg = Config {
                stubs: true,
                ..source.config()?
            };
            let doc = load(&cfg.spec)?;
            let generated = generate(&doc, &cfg);
            let interchange = &generated.interchange;

            match cli.output {
                OutputFormat::Terminal => {
                    let info = doc.info();
                    println!("{} {} (swagger {})", info.title(), info.version(), doc.version());
                    if !doc.host().is_empty() || !doc.base_path().is_empty() {
                        println!("  base: {}{}", doc.host(), doc.base_path());
                    }
                    println!("\nOperations ({}):", interchange.operations.len());
                    for op in &interchange.operations {
                        let flag = if op.deprecated { " (deprecated)" } else { "" };
                        println!(
                            "  {:<7} {}  {}{flag}",
                            op.method.as_str().to_ascii_uppercase(),
                            op.path,
                            op.name
                        );
                    }
                    println!("\nDefinitions ({}):", interchange.definitions.len());
                    for def in &interchange.definitions {
                        println!("  {} ({})", def.name, def.shape);
                    }
                }
                OutputFormat::Json => {
                    let json_output = serde_json::json!({
                        "title": doc.info().title(),
                        "version": interchange.version,
                        "host": doc.host(),
                        "base_path": doc.base_path(),
                        "operations": interchange.operations.iter().map(|op| serde_json::json!({
                            "name": op.name,
                            "method": op.method,
                            "path": op.path,
                            "deprecated": op.deprecated,
                        })).collect::<Vec<_>>(),
                        "definitions": interchange.definitions,
                    });
                    println!("{}", serde_json::to_string_pretty(&json_output)?);
                }
                OutputFormat::Silent => {}
            }
            Ok(0)
        }

        Commands::Declarations { source } => {
            let cfg = source.config()?;
            let doc = load(&cfg.spec)?;
            let generated = generate(&doc, &cfg);
            if cli.output != OutputFormat::Silent {
                println!("{}", serde_json::to_string_pretty(&generated.interchange)?);
            }
            Ok(if generated.is_empty() { 1 } else { 0 })
        }

        Commands::Init => {
            if Path::new(CONFIG_FILE).exists() {
                eprintln!("{CONFIG_FILE} already exists");
                return Ok(1);
            }

            std::fs::write(CONFIG_FILE, Config::example())?;
            if cli.output != OutputFormat::Silent {
                println!("Created {CONFIG_FILE}");
                println!("\nEdit the file to configure:");
                println!("  - spec: path to your Swagger document");
                println!("  - output_dir: where generated modules go");
                println!("  - trait_name: name of the operations trait");
            }
            Ok(0)
        }

        Commands::Schema => {
            let schema = generate_schema()?;
            println!("{schema}");
            Ok(0)
        }
    }
}

fn print_plan(layout: &output::Layout, generated: &Generated) {
    println!("Dry run, nothing written.\n");
    println!(
        "{} ({} declarations)",
        layout.defs.display(),
        generated.interchange.declarations.len()
    );
    if generated.api.is_some() {
        println!(
            "{} ({} operations)",
            layout.api.display(),
            generated.interchange.operations.len()
        );
    }
    println!("{}", layout.declarations.display());
    println!();
    print!("{}", generated.types);
    if let Some(api) = &generated.api {
        println!();
        print!("{api}");
    }
}
