//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rosterbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("rosterbook_core ping={}", rosterbook_core::ping());
    println!("rosterbook_core version={}", rosterbook_core::core_version());
}
