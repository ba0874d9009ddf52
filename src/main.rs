use clap::Parser;
use powheap::{error::HeapError, heap::PowHeap};

#[derive(Parser)]
#[command(name = "powheap", about = "Drain a power-of-two max-heap in order", version)]
struct Cli {
    /// Branching exponent, each node has up to 2^POWER children
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    power: i32,

    /// Values to insert before draining
    #[arg(default_values_t = [10, 4, 15, 20, 3, 8, 17], allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), HeapError> {
    let cli = Cli::parse();
    let mut heap = PowHeap::with_capacity(cli.power, cli.values.len())?;
    heap.extend(cli.values);
    while !heap.is_empty() {
        println!("{}", heap.extract_max()?);
    }
    Ok(())
}
