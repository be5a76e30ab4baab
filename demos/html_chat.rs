//! A full HTML decorator set, the way a chat application would wire it up.
//!
//! Run with: cargo run --example html_chat

use chatmark::{FormatOptions, Formatter};

fn chat_formatter() -> Formatter {
    // The spoiler class pairs with css like:
    // .spoiler { background: #000; color: #000; } .spoiler:hover { color: #fff; }
    let options = FormatOptions::new()
        .with_bold(|t| format!("<b>{t}</b>"))
        .with_italic(|t| format!("<i>{t}</i>"))
        .with_strike(|t| format!("<s>{t}</s>"))
        .with_spoiler(|t| format!("<span class=\"spoiler\">{t}</span>"))
        .with_link(|href, text| {
            if href.starts_with("http") {
                format!("<a href=\"{href}\" rel=\"nofollow noreferrer noopener\">{text}</a>")
            } else {
                // Not a link after all; reproduce the angle brackets.
                format!("&lt;{href}&gt;")
            }
        })
        .with_mention(|name| format!("<a href=\"/u/{name}\">@{name}</a>"))
        .with_quote(|text| format!("<blockquote>{text}</blockquote>"))
        .with_unordered(|items| {
            let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
            format!("<ul>{items}</ul>")
        })
        .with_ordered(|items| {
            let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
            format!("<ol>{items}</ol>")
        })
        .with_newline("<br>\n");
    Formatter::new(options)
}

fn main() {
    let formatter = chat_formatter();

    let messages = [
        "hey @alice, did you see **this**?",
        "> it renders quotes\n> across lines",
        "todo:\n- ship it\n- ||secretly|| celebrate",
        "1. first\n2. second\n3. third",
        "<https://example.com|click here> or <script>alert(1)</script>",
    ];

    for message in messages {
        println!("{}\n", formatter.render(message));
    }
}
