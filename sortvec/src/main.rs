use clap::Parser;
use embedded_io_adapters::std::FromStd;
use sortvec::{sort_numbers, Order, SortError};
use std::fs::File;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "sortvec")]
#[command(about = "Sort whitespace-separated integers and print them as { n1 n2 ... }", long_about = None)]
struct Args {
    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<String>,

    /// Sort from largest to smallest
    #[arg(short, long, default_value_t = false)]
    descending: bool,
}

fn open_input(path: Option<&str>) -> io::Result<Box<dyn io::Read>> {
    match path {
        Some(path) => Ok(Box::new(io::BufReader::new(File::open(path)?))),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&str>) -> io::Result<Box<dyn io::Write>> {
    match path {
        Some(path) => Ok(Box::new(io::BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::BufWriter::new(io::stdout().lock()))),
    }
}

fn main() {
    let args = Args::parse();

    let input = match open_input(args.input.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Failed to open input file: {e}");
            std::process::exit(1);
        }
    };
    let output = match open_output(args.output.as_deref()) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Failed to create output file: {e}");
            std::process::exit(1);
        }
    };

    let order = if args.descending {
        Order::Descending
    } else {
        Order::Ascending
    };

    let mut writer = FromStd::new(output);
    if let Err(e) = sort_numbers(FromStd::new(input), &mut writer, order) {
        eprintln!("sortvec: {e}");
        match &e {
            SortError::Read(text) => eprintln!("  Details: {text:?}"),
            SortError::Write(text) => eprintln!("  Details: {text:?}"),
        }
        std::process::exit(1);
    }
}
