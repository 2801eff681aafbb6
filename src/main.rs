// Demo binary for the ledger core. Everything goes through the public API;
// the chain lives only for the duration of the process.
use clap::Parser;
use ledger_chain::{current_timestamp, Block, Chain, Command, Opt, TransactionRecord};
use log::LevelFilter;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();
    run_command(opt.command);
}

fn run_command(command: Command) {
    match command {
        Command::Demo {
            blocks,
            amount,
            signatories,
        } => {
            let mut chain = Chain::new();
            for _ in 0..blocks {
                chain.add_block(TransactionRecord::new(
                    amount,
                    signatories.clone(),
                    current_timestamp(),
                ));
            }

            for index in 0..chain.get_chain_size() {
                // Indexes stay in range, so the lookup cannot fail here.
                if let Ok(block) = chain.get_block(index) {
                    print_block(&block);
                }
            }

            println!(
                "Chain of {} blocks, valid: {}",
                chain.get_chain_size(),
                chain.is_chain_valid()
            );
        }
        Command::Seed => {
            println!("{}", Block::genesis_seed_hash());
        }
    }
}

fn print_block(block: &Block) {
    let record = block.get_data();
    println!("Block {}", block.get_index());
    println!("  hash:          {}", block.get_hash());
    println!("  previous hash: {}", block.get_previous_hash());
    println!("  amount:        {}", record.get_amount());
    println!("  signatories:   {}", record.get_signatories().join(", "));
    println!("  timestamp:     {}", record.get_timestamp());
}
