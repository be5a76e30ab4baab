//! Property-based tests for the rendering engine's hard invariants:
//! totality, purity, and output safety across arbitrary inputs.

use chatmark::{render, render_with_options, FormatOptions};
use proptest::prelude::*;

fn html_options() -> FormatOptions {
    FormatOptions::new()
        .with_bold(|t| format!("<b>{t}</b>"))
        .with_italic(|t| format!("<i>{t}</i>"))
        .with_strike(|t| format!("<s>{t}</s>"))
        .with_spoiler(|t| format!("<x>{t}</x>"))
        .with_link(|href, text| format!("<a href=\"{href}\">{text}</a>"))
        .with_mention(|t| format!("<m>{t}</m>"))
        .with_quote(|t| format!("<q>{t}</q>"))
        .with_newline("<br>")
}

/// With default options no decorator emits a raw HTML-significant
/// character, so none may appear in the output at all.
fn assert_output_safe(input: &str) -> Result<(), TestCaseError> {
    let out = render(input);
    prop_assert!(!out.contains('<'), "raw < rendering {input:?}: {out:?}");
    prop_assert!(!out.contains('>'), "raw > rendering {input:?}: {out:?}");
    prop_assert!(!out.contains('"'), "raw \" rendering {input:?}: {out:?}");
    prop_assert!(!out.contains('\''), "raw ' rendering {input:?}: {out:?}");
    Ok(())
}

proptest! {
    // Arbitrary unicode: must not panic, must stay escaped, must be pure.
    #[test]
    fn prop_output_safety(input in ".*") {
        assert_output_safe(&input)?;
    }

    #[test]
    fn prop_purity(input in ".*") {
        prop_assert_eq!(render(&input), render(&input));
    }

    // Dense markup soup hits the modifier machinery much harder than
    // uniform unicode does.
    #[test]
    fn prop_markup_soup_is_safe(input in "[-*_~|@<>\\\\\n\"'&0-9a-c. ]{0,80}") {
        assert_output_safe(&input)?;
    }

    #[test]
    fn prop_markup_soup_is_pure(input in "[-*_~|@<>\\\\\n0-9a-c. ]{0,80}") {
        let options = html_options();
        prop_assert_eq!(
            render_with_options(&input, &options),
            render_with_options(&input, &options)
        );
    }

    // Text with no markup-significant characters passes through untouched.
    #[test]
    fn prop_plain_text_is_identity(input in "[a-zA-Z ]*") {
        prop_assert_eq!(render(&input), input);
    }

    // The decorated output with HTML decorators never leaks an unescaped
    // angle bracket outside the tags the decorators themselves produce:
    // strip every decorator-produced tag and nothing <>-ish may remain.
    #[test]
    fn prop_html_decorators_contain_all_tags(input in "[-*_~|@\\\\\n0-9a-c ]{0,60}") {
        let out = render_with_options(&input, &html_options());
        let stripped = out
            .replace("<b>", "").replace("</b>", "")
            .replace("<i>", "").replace("</i>", "")
            .replace("<s>", "").replace("</s>", "")
            .replace("<x>", "").replace("</x>", "")
            .replace("<m>", "").replace("</m>", "")
            .replace("<q>", "").replace("</q>", "")
            .replace("<br>", "");
        // Link decorators are exercised separately: the generator above
        // produces no '<', so no link can open.
        prop_assert!(!stripped.contains('<'), "leaked < in {out:?}");
        prop_assert!(!stripped.contains('>'), "leaked > in {out:?}");
    }
}
