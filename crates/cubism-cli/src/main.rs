mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use cubism_bindgen::targets::{Csharp, Javascript};
use cubism_bindgen::{ContextAssembler, JsonDump, Target};
use cubism_model::{Options, YamlLoader, OPTIONS_FILE};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "cubism-bindgen")]
#[command(about = "Generates Cubism Core binding contexts for C# and JavaScript", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Options file (defaults to ./bindgen.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Directory holding the descriptor files
    #[arg(long, value_name = "DIR", global = true)]
    datadir: Option<PathBuf>,

    /// Write the context without pretty-printing
    #[arg(long, global = true)]
    compact: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Build the C# (P/Invoke) context
    Cs {
        /// Output directory
        #[arg(value_name = "OUTDIR")]
        outdir: Option<PathBuf>,
    },

    /// Build the JavaScript (Emscripten) context
    Js {
        /// Output directory
        #[arg(value_name = "OUTDIR")]
        outdir: Option<PathBuf>,
    },
}

fn resolve_options(config: Option<&Path>, datadir: Option<PathBuf>, outdir: Option<PathBuf>) -> Result<Options, CliError> {
    let mut options = match config {
        Some(path) => Options::load(path)?,
        None if Path::new(OPTIONS_FILE).is_file() => Options::load(Path::new(OPTIONS_FILE))?,
        None => Options::default(),
    };
    if let Some(datadir) = datadir {
        options.datadir = datadir;
    }
    if let Some(outdir) = outdir {
        options.outdir = outdir;
    }
    log::debug!("Resolved options: {:?}", options);
    Ok(options)
}

fn generate<T: Target>(target: T, mut options: Options, pretty: bool) -> Result<(), CliError> {
    let assembler = ContextAssembler::new(target, options.conventions.clone());
    assembler.run(&mut options, &YamlLoader, &mut JsonDump::new(pretty))?;
    Ok(())
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let pretty = !args.compact;
    match args.command {
        Command::Cs { outdir } => {
            let options = resolve_options(args.config.as_deref(), args.datadir, outdir)?;
            generate(Csharp, options, pretty)?;
        }
        Command::Js { outdir } => {
            let options = resolve_options(args.config.as_deref(), args.datadir, outdir)?;
            generate(Javascript, options, pretty)?;
        }
    }
    Ok(())
}
