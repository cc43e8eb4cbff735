use clap::Parser;
use flagella_loader::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_summary) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Flagella Loader - Lab Worksheet to SQLite Converter");
    println!("===================================================");
    println!();
    println!("Reads flagella-length measurement worksheets exported as CSV and loads");
    println!("them into a SQLite database ready for analysis.");
    println!();
    println!("USAGE:");
    println!("    flagella-loader <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    load     Load a worksheet into a SQLite database (main command)");
    println!("    check    Parse a worksheet and report what a load would store");
    println!("    help     Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Load the default worksheet (flagella_data.csv):");
    println!("    flagella-loader load");
    println!();
    println!("    # Load a specific export into a specific database:");
    println!("    flagella-loader load --input week12.csv --database week12.sqlite");
    println!();
    println!("    # Verify an export without writing anything:");
    println!("    flagella-loader check --input week12.csv --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    flagella-loader <COMMAND> --help");
}
