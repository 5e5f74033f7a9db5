//! fermiq Demo Suite
//!
//! Command-line demonstrations of fermionic circuit synthesis:
//!
//! - **demo-bogoliubov**: synthesize the circuit of a Fourier, random
//!   unitary or random Bogoliubov transformation and verify it by
//!   simulation
//! - **demo-ansatz**: build a Givens-layer ansatz and bind parameters

pub mod matrices;
pub mod report;

use console::style;
use tracing_subscriber::EnvFilter;

/// Install the log subscriber: `warn` by default, `debug` when verbose.
pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print a failure message.
pub fn print_failure(message: &str) {
    println!("{} {}", style("✗").red().bold(), message);
}
