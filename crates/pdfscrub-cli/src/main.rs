mod cli;
mod page_range;
mod redact_cmd;
mod shared;
mod text_cmd;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Text {
            ref file,
            ref pages,
            ref format,
        } => text_cmd::run(file, pages.as_deref(), format),
        cli::Commands::Redact {
            ref file,
            ref terms,
            ref output,
            keep_images,
            no_vector_marks,
        } => redact_cmd::run(file, terms, output, keep_images, no_vector_marks),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
