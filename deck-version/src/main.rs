//! Print the Deck version and description.
//!
//! ```bash
//! cargo run -p deck-version
//! ```

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
/// Report which Deck build this is.
struct Cli {}

fn main() {
    Cli::parse();
    let (major, minor, patch) = deck_info::version_info();
    println!("Deck version: {}", deck_info::VERSION);
    println!("Version info: ({major}, {minor}, {patch})");
    println!("Description: {}", deck_info::description());
}
