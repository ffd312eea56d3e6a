use clap::{Parser, Subcommand};
use miette::{miette, Result};
use std::path::PathBuf;

use javadoc_ast::cli;

#[derive(Parser)]
#[command(name = "javadoc-ast")]
#[command(about = "Build and render JavaDoc comments for generated Java sources")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON comment request as a JavaDoc block
    Render {
        /// Input JSON request
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spaces written before every line
        #[arg(long, default_value_t = 0)]
        indent: usize,

        /// Do not escape `*/` inside comment text
        #[arg(long)]
        no_escape: bool,

        /// Print the comment body without JavaDoc delimiters
        #[arg(long)]
        raw: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            indent,
            no_escape,
            raw,
        } => {
            let args = cli::render::RenderArgs {
                input_path: input,
                output_path: output,
                indent,
                no_escape,
                raw,
            };
            cli::render::render(&args).map_err(|e| miette!("{}", e))
        }
    }
}
