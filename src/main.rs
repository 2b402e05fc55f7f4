use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use data::AccountPair;

mod convert;
mod data;
mod read;
mod write;

const LICENSE: &str = "csv2fribok  Copyright (C) 2022  Andreas Skyman

This program comes with ABSOLUTELY NO WARRANTY!
This is free software, and you are welcome to redistribute it
under certain conditions.

See http://www.gnu.org/licenses/gpl-3.0.html for details!
";

const WARNING: &str = "** WARNING! **";

/// Convert Nordea CSV account exports into FriBok import CSV.
#[derive(Parser, Debug)]
#[command(name = "csv2fribok")]
struct Args {
    /// File to process
    #[arg(value_name = "FILE")]
    inputfile: PathBuf,

    /// Specify output file (default: <input>_fribok.csv)
    #[arg(short, long = "out", value_name = "PATH")]
    out: Option<PathBuf>,

    /// Specify separator, used for input and output alike
    #[arg(
        short,
        long = "sep",
        default_value = ";",
        value_parser = NonEmptyStringValueParser::new()
    )]
    sep: String,

    /// Specify accounts: primary first, then contra
    #[arg(
        short,
        long,
        num_args = 2,
        value_name = "ACCOUNT",
        default_values_t = ["3000".to_string(), "1200".to_string()]
    )]
    accounts: Vec<String>,

    /// Write to output even if it exists
    #[arg(short, long)]
    force: bool,

    /// Print output to standard out (use -o to save to file too)
    #[arg(short, long)]
    print: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// Where the converted table should be written, if anywhere. An
    /// explicit `--out` always wins; `--print` alone suppresses the derived
    /// default so nothing is written to disk.
    fn outfile(&self) -> Option<PathBuf> {
        match (&self.out, self.print) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => None,
            (None, false) => Some(default_outfile(&self.inputfile)),
        }
    }

    fn account_pair(&self) -> AccountPair {
        // clap enforces exactly two values for --accounts
        AccountPair {
            primary: self.accounts[0].clone(),
            contra: self.accounts[1].clone(),
        }
    }
}

/// Default output path: the input path with its extension swapped for
/// `_fribok.csv`.
fn default_outfile(input: &Path) -> PathBuf {
    let mut name = input.with_extension("").into_os_string();
    name.push("_fribok.csv");
    PathBuf::from(name)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let parsed = read::parse_csv(&args.inputfile, &args.sep)?;
    if args.verbose {
        println!(
            "Read {} lines from '{}'",
            parsed.len(),
            args.inputfile.display()
        );
    }

    let fribok = convert::parsed_to_fribok(&parsed, &args.account_pair())?;

    if args.print {
        write::print_csv(&fribok, &args.sep).context("could not write to standard output")?;
    }

    if let Some(outfile) = args.outfile() {
        write::save_csv(&outfile, &fribok, &args.sep, args.force)?;
        if args.verbose {
            println!("Wrote {} lines to '{}'", fribok.len(), outfile.display());
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        println!("{LICENSE}");
        if args.print {
            println!("{WARNING} Using 'verbose' with 'print' may cause trouble with e.g. piping!\n");
        }
    }

    if let Err(err) = run(&args) {
        if args.debug {
            eprintln!("{err:?}");
        }
        println!("{err}");
        std::process::exit(1);
    }
}
