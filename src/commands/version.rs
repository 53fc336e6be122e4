//! Version command implementation

use crate::error::Result;
use crate::hint::HintTagRegistry;

/// Run version command
pub fn run() -> Result<()> {
    println!("ascompose {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Compose hint tags: {}", HintTagRegistry::with_defaults().len());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
