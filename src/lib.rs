// Design Patterns Gallery
// Classic object-oriented patterns expressed with traits, enums and OnceLock.

//! # Design Patterns Gallery
//!
//! ## Creational
//! - Singleton ([`singleton`]): lazy process-wide instance behind `OnceLock`
//! - Factory ([`factory`]): string tag -> `VehicleKind` -> trait object or enum
//!
//! ## Structural
//! - Adapter ([`adapter`]): payment services behind one `PaymentProcessor`
//! - Decorator ([`decorator`]): coffee add-ons, boxed and generic
//!
//! ## Behavioral
//! - Observer ([`observer`]): stock price broadcast to subscribers
//! - Command ([`command`]): remote control with rebinding and undo
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_singleton
//! cargo run --bin p2_factory
//! cargo run --bin p3_adapter
//! cargo run --bin p4_decorator
//! cargo run --bin p5_observer
//! cargo run --bin p6_command
//! cargo run --bin showcase -- showcase.toml
//! ```

pub mod adapter;
pub mod command;
pub mod config;
pub mod decorator;
pub mod dispatch;
pub mod error;
pub mod factory;
pub mod observer;
pub mod singleton;
pub mod telemetry;

use colored::Colorize;
use config::PatternKind;

pub use error::{Error, Result};

pub fn print_banner(pattern: PatternKind) {
    let title = format!("=== {pattern} ===");
    println!("{}", title.bold().cyan());
}

/// Runs the console demo for one pattern.
pub fn run_pattern(pattern: PatternKind) -> Result<()> {
    print_banner(pattern);
    match pattern {
        PatternKind::Singleton => singleton::demo(),
        PatternKind::Factory => factory::demo()?,
        PatternKind::Adapter => adapter::demo(),
        PatternKind::Decorator => decorator::demo(),
        PatternKind::Observer => observer::demo(),
        PatternKind::Command => command::demo(),
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_demo_runs() {
        colored::control::set_override(false);
        for pattern in PatternKind::ALL {
            run_pattern(pattern).unwrap();
        }
    }
}
