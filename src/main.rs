use boxoffice::service::{Orchestrator, mock::generator};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "boxoffice", version, about = "A cinema box office CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the purchase requests CSV file to process
    #[arg(value_name = "FILE")]
    file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate dummy purchase requests to a file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "requests.csv", value_name = "FILE")]
        output: String,

        /// Number of purchases to generate
        #[arg(short, long, default_value = "10", value_name = "COUNT")]
        count: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Cli::parse();

    match args.command {
        Some(Commands::Generate { output, count }) => {
            generator(&output, count)?;
        }
        None => {
            let file = args
                .file
                .ok_or("Please provide a CSV file path or use 'generate' command")?;

            let orchestrator = Orchestrator::new();
            let summaries = orchestrator.process_csv(&file)?;
            Orchestrator::output_csv(&summaries)?;
        }
    }

    Ok(())
}
