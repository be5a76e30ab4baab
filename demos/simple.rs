//! Basic rendering with the built-in defaults.
//!
//! Run with: cargo run --example simple

use chatmark::render;

fn main() {
    let message = "**hello** __world__, visit <https://example.com|the docs>";

    // Default decorators reproduce the markup, HTML-escaped.
    let output = render(message);
    println!("input:  {}", message);
    println!("output: {}", output);

    // Untrusted input comes out safe without a separate sanitizer.
    let hostile = "<script>alert(1)</script>";
    println!("hostile: {}", render(hostile));
}
