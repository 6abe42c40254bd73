// ============================================================================
// Basic Usage Example
// ============================================================================

use calcutil::prelude::*;

fn main() {
    // Trace-level output shows the rejection events emitted by fallible ops
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Calcutil Example ===\n");

    println!("Basic operations:");
    println!("  5 + 3          = {}", add(5.0, 3.0));
    println!("  5 - 3          = {}", subtract(5.0, 3.0));
    println!("  3 * 5          = {}", multiply(3.0, 5.0));
    println!("  2^10           = {}", power(2.0, 10.0));

    match divide(10.0, -5.0) {
        Ok(quotient) => println!("  10 / -5        = {}", quotient),
        Err(e) => println!("  10 / -5 failed: {}", e),
    }

    match sqrt(144.0) {
        Ok(root) => println!("  sqrt(144)      = {}", root),
        Err(e) => println!("  sqrt(144) failed: {}", e),
    }

    println!("\nPercentages:");
    println!("  10% of 200     = {}", percent_of(200.0, 10.0));
    println!("  1000 + 25%     = {}", add_percent(1000.0, 25.0));
    println!("  1000 - 25%     = {}", subtract_percent(1000.0, 25.0));

    match what_percent(50.0, 200.0) {
        Ok(pct) => println!("  50 of 200      = {}%", pct),
        Err(e) => println!("  50 of 200 failed: {}", e),
    }

    println!("\nError conditions:");
    if let Err(e) = divide(1.0, 0.0) {
        println!("  1 / 0          -> {}", e);
    }
    if let Err(e) = sqrt(-9.0) {
        println!("  sqrt(-9)       -> {}", e);
    }
    if let Err(e) = what_percent(50.0, 0.0) {
        println!("  50 of 0        -> {}", e);
    }
}
