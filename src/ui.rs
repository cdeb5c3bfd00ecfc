//! Terminal output.
//!
//! The composed version is printed plain so it can be captured by build
//! scripts; everything else goes to stderr.

use crate::compose::ComposedVersion;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Print the composed version as a single line on stdout.
pub fn display_version(version: &ComposedVersion) {
    println!("{}", version);
}
