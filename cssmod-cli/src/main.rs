use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cssmod_transform::{DEFAULT_ATTR_NAME, TransformOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cssmod",
    version,
    about = "Fold shorthand class attributes into :class"
)]
struct Cli {
    /// Log what gets rewritten (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TransformArgs {
    /// Path to a .vue file, or a bare template
    input: PathBuf,
    /// Shorthand attribute to fold into :class
    #[arg(long, default_value = DEFAULT_ATTR_NAME)]
    attr_name: String,
    /// Style module identifier (default: from <style module>, else $style)
    #[arg(long)]
    module_name: Option<String>,
}

impl TransformArgs {
    fn options(&self) -> TransformOptions {
        TransformOptions {
            attr_name: self.attr_name.clone(),
            module_name: self.module_name.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a file and write the result to a directory.
    Build {
        #[command(flatten)]
        args: TransformArgs,
        /// Output directory (default: target/cssmod-gen)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Transform a file and print the result to stdout.
    Print {
        #[command(flatten)]
        args: TransformArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cssmod_cli::init_logging(cli.verbose);
    match cli.command {
        Commands::Build { args, out_dir } => {
            let out_path = cssmod_cli::build_cmd(&args.input, out_dir.as_deref(), &args.options())?;
            println!("Generated: {}", out_path.display());
        }
        Commands::Print { args } => {
            let out = cssmod_cli::transform_file(&args.input, &args.options())?;
            print!("{}", out.code);
        }
    }
    Ok(())
}
