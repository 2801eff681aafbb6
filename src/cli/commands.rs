use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ledger-chain")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "demo",
        about = "Build an in-memory ledger, append records, print and validate the chain"
    )]
    Demo {
        #[arg(long, default_value_t = 3, help = "Number of records to append")]
        blocks: usize,
        #[arg(long, default_value_t = 1.0, help = "Amount carried by each record")]
        amount: f64,
        #[arg(
            long = "signatory",
            default_value = "demo",
            help = "Signatory tag stamped on each record (repeatable)"
        )]
        signatories: Vec<String>,
    },
    #[command(name = "seed", about = "Print the genesis seed hash")]
    Seed,
}
