//! Binary that runs the lock fixture worlds and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: key=value lines (see `lock_tests::fixtures::fixture_lines`).

fn main() {
    for line in lock_tests::fixtures::fixture_lines() {
        println!("{line}");
    }
}
