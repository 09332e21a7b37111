use clap::{Args, Parser, Subcommand};
use fontchain::{
    AvailableFontSet, FontAssetPolicy, FontAvailabilityProbe, FontChain, FontchainError,
    ResolverConfig, SizeBudget, audit_path, system_probe, system_resolver,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "fontchain",
    about = "Resolve document body fonts from a fallback chain",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the family a document would use for body text
    Resolve {
        #[command(flatten)]
        chain: ChainArgs,

        /// Additional font directory to scan (repeatable)
        #[arg(long = "font-dir")]
        font_dirs: Vec<PathBuf>,

        /// Treat these families as installed instead of probing the host
        #[arg(short, long, value_delimiter = ',')]
        available: Option<Vec<String>>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the font families visible on this host
    ListFonts {
        #[command(flatten)]
        host: HostArgs,
    },

    /// Print the Typst rule requesting the chain
    Typst {
        #[command(flatten)]
        chain: ChainArgs,
    },

    /// Check that a built artifact bundles no fonts
    CheckPackage {
        /// Unpacked artifact directory or .tar.gz file
        artifact: PathBuf,

        /// Size in bytes of a reference build that bundled fonts
        #[arg(long)]
        reference_size: Option<u64>,

        /// Required saving in bytes relative to the reference build
        #[arg(long, default_value_t = 0)]
        min_reduction: u64,

        /// Regex for font asset paths (defaults to the standard policy)
        #[arg(long)]
        pattern: Option<String>,
    },
}

#[derive(Args)]
struct ChainArgs {
    /// Comma-separated font families, most preferred first
    #[arg(short, long)]
    chain: Option<FontChain>,

    /// JSON resolver configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ChainArgs {
    /// Loads the config file, then applies the `--chain` override.
    fn into_config(self) -> Result<ResolverConfig, FontchainError> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(chain) = self.chain {
            config.font_chain = chain;
        }
        log::debug!("Using font chain [{}]", config.font_chain);
        Ok(config)
    }
}

#[derive(Args)]
struct HostArgs {
    /// JSON resolver configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Additional font directory to scan (repeatable)
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
}

impl HostArgs {
    fn into_config(self) -> Result<ResolverConfig, FontchainError> {
        let mut config = load_config(self.config.as_deref())?;
        config.font_dirs.extend(self.font_dirs);
        Ok(config)
    }
}

fn load_config(path: Option<&Path>) -> Result<ResolverConfig, FontchainError> {
    Ok(match path {
        Some(path) => ResolverConfig::from_file(path)?,
        None => ResolverConfig::default(),
    })
}

#[derive(Serialize)]
struct ResolutionOutput<'a> {
    font: &'a str,
    index: usize,
    fallback: bool,
    chain: &'a [String],
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode, FontchainError> {
    match command {
        Commands::Resolve {
            chain,
            font_dirs,
            available,
            json,
        } => {
            let mut config = chain.into_config()?;
            config.font_dirs.extend(font_dirs);
            let resolver = system_resolver(&config);
            let font = match available {
                Some(names) => resolver.resolve_against(&names.into_iter().collect()),
                None => resolver.resolve_body_font(),
            };

            if json {
                let output = ResolutionOutput {
                    font: font.name(),
                    index: font.index(),
                    fallback: font.is_fallback(),
                    chain: config.font_chain.families(),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if font.is_fallback() {
                println!("{} (index {}, last-resort fallback)", font, font.index());
            } else {
                println!("{} (index {})", font, font.index());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::ListFonts { host } => {
            let config = host.into_config()?;
            let available: AvailableFontSet = system_probe(&config).available_fonts()?;
            for name in available.sorted_names() {
                println!("{}", name);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Typst { chain } => {
            let config = chain.into_config()?;
            println!("{}", config.font_chain.to_typst_set_rule());
            Ok(ExitCode::SUCCESS)
        }

        Commands::CheckPackage {
            artifact,
            reference_size,
            min_reduction,
            pattern,
        } => {
            let policy = match pattern {
                Some(pattern) => FontAssetPolicy::new(&pattern)?,
                None => FontAssetPolicy::standard()?,
            };
            let budget = reference_size.map(|size| SizeBudget::new(size, min_reduction));
            let report = audit_path(&artifact, &policy, budget)?;

            println!(
                "{}: {} entries, {} bytes",
                artifact.display(),
                report.entry_count,
                report.artifact_size
            );
            if let Some(size) = report.size {
                println!(
                    "reference {} bytes, saved {} bytes (required {})",
                    size.reference, size.reduction, size.required
                );
            }

            match report.into_result() {
                Ok(_) => {
                    println!("ok: no bundled font assets");
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{}", e);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
