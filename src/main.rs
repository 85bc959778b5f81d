use anyhow::Context;
use aquaculture_catalog::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let result = commands::run(command).context("Catalog command failed");

    match result {
        Ok(_summary) => {
            // Results and load warnings have already been written by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Aquaculture Catalog - production center loader and query tool");
    println!("=============================================================");
    println!();
    println!("Loads aquaculture centers from semicolon-delimited .txt or .csv files");
    println!("and lists, searches, filters and sorts them.");
    println!();
    println!("USAGE:");
    println!("    aquaculture-catalog <COMMAND> <FILE> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    list              List every center in file order");
    println!("    region            Find centers located in a commune");
    println!("    min-production    Find centers producing at least a threshold");
    println!("    sorted            List centers ordered by name");
    println!("    report            Run every query and show the composition table");
    println!("    help              Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Full report with the default queries (commune Calbuco, production >= 1500):");
    println!("    aquaculture-catalog report datosCentros.csv");
    println!();
    println!("    # Centers in a commune, as JSON:");
    println!("    aquaculture-catalog region datosCentros.txt Quellon --format json");
    println!();
    println!("    # Export the sorted catalog as a reloadable CSV file:");
    println!("    aquaculture-catalog sorted datosCentros.txt --format csv -o ordenados.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    aquaculture-catalog <COMMAND> --help");
}
