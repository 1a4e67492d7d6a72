//! `--list`: print the snakes this binary can serve.

use anyhow::Result;
use snake_runtime::{SnakeRegistry, DEFAULT_SNAKE};

/// Execute the list command
pub fn execute_list_command() -> Result<()> {
    let registry = SnakeRegistry::builtin();

    println!("Registered snakes:");
    for name in registry.names() {
        if name == DEFAULT_SNAKE {
            println!("   {} (default)", name);
        } else {
            println!("   {}", name);
        }
    }
    Ok(())
}
