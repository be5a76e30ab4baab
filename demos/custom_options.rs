//! Customizing rendering behavior with FormatOptions.
//!
//! Run with: cargo run --example custom_options

use chatmark::{render_with_options, FormatOptions};

fn main() {
    // Greentext-style quoting: every quote line is its own block.
    let greentext = FormatOptions::new()
        .with_quote(|text| format!("<span class=\"green\">&gt;{text}</span>"))
        .with_quote_continuous(false)
        .with_newline("<br>");

    let input = ">be me\n>write a formatter";
    println!("greentext: {}", render_with_options(input, &greentext));

    // Mentions that stop at anything but an alphanumeric username.
    let mentions = FormatOptions::new()
        .with_mention(|name| format!("<a href=\"/u/{name}\">@{name}</a>"))
        .with_mention_end(|ch, _| !ch.is_alphanumeric());

    println!("mention: {}", render_with_options("ping @alice, thanks!", &mentions));

    // Ordered lists only render when the numbering is right.
    let lists = FormatOptions::new().with_ordered(|items| {
        let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
        format!("<ol>{items}</ol>")
    });

    println!("counted:   {}", render_with_options("1. one\n2. two", &lists));
    println!("miscounted: {}", render_with_options("1. one\n3. three", &lists));
}
