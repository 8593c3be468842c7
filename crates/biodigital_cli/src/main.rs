//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `biodigital_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("biodigital_core ping={}", biodigital_core::ping());
    println!("biodigital_core version={}", biodigital_core::core_version());
}
