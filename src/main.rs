use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tag_gen::cmds;

#[derive(Parser)]
#[command(name = "tag-gen")]
#[command(about = "Typed HTML wrapper declaration generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /* Generate wrapper declarations from attribute schema files */
    Codegen {
        /* Input YAML files containing the attribute/tag schema */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Output directory for generated declarations */
        #[arg(
            short = 'o',
            long = "output",
            value_name = "DIR",
            default_value = "generated"
        )]
        output_dir: PathBuf,

        /* Wrap forwarded event handlers in an unchecked cast */
        #[arg(long = "unsafe-cast")]
        unsafe_cast: bool,

        /* Enable verbose output */
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },

    /* Load and validate schema files without generating code */
    Check {
        /* Input YAML files containing the attribute/tag schema */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Enable verbose output */
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Codegen {
            files,
            output_dir,
            unsafe_cast,
            verbose,
        } => {
            cmds::codegen::run(files, output_dir, unsafe_cast, verbose)?;
        }

        Commands::Check { files, verbose } => {
            cmds::check::run(files, verbose)?;
        }
    }

    Ok(())
}
