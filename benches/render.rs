use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chatmark::{render_with_options, FormatOptions, Formatter};

fn html_options() -> FormatOptions {
    FormatOptions::new()
        .with_bold(|t| format!("<b>{t}</b>"))
        .with_italic(|t| format!("<i>{t}</i>"))
        .with_strike(|t| format!("<s>{t}</s>"))
        .with_spoiler(|t| format!("<span class=\"spoiler\">{t}</span>"))
        .with_link(|href, text| format!("<a href=\"{href}\">{text}</a>"))
        .with_mention(|t| format!("<a href=\"/u/{t}\">@{t}</a>"))
        .with_quote(|t| format!("<blockquote>{t}</blockquote>"))
        .with_unordered(|items| {
            let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
            format!("<ul>{items}</ul>")
        })
        .with_ordered(|items| {
            let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
            format!("<ol>{items}</ol>")
        })
        .with_newline("<br>\n")
}

const MESSAGE: &str = "**Lorem** __ipsum__ ~~dolor~~ @sit ||amet||, \
<https://example.com|consectetur adipiscing elit>. <https://example.com>";

const DOCUMENT: &str = "**Lorem** __ipsum__ ~~dolor~~ @sit ||amet||\n\n\
- Donec vestibulum tristique augue,\n\
- sodales convallis lectus mattis sed.\n\n\
1. Morbi hendrerit diam lorem,\n\
2. a sagittis nunc viverra vel.\n\n\
> Phasellus tristique\n\
> ut mauris quis vulputate.\n\n\
\\**ex nec pellentesque.\\**";

fn benchmark_chat_message(c: &mut Criterion) {
    let formatter = Formatter::new(html_options());

    c.bench_function("render_chat_message", |b| {
        b.iter(|| formatter.render(black_box(MESSAGE)))
    });
}

fn benchmark_mixed_document(c: &mut Criterion) {
    let formatter = Formatter::new(html_options());

    c.bench_function("render_mixed_document", |b| {
        b.iter(|| formatter.render(black_box(DOCUMENT)))
    });
}

fn benchmark_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain_text");

    for size in [64, 1024, 16384].iter() {
        let text = "lorem ipsum dolor sit amet ".repeat(size / 27 + 1);
        let options = html_options();

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| render_with_options(black_box(text), &options))
        });
    }
    group.finish();
}

fn benchmark_markup_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup_heavy");

    for size in [10, 100, 500].iter() {
        let text = "**b** __i__ ~~s~~ ||x|| @m <a|b> ".repeat(*size);
        let options = html_options();

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| render_with_options(black_box(text), &options))
        });
    }
    group.finish();
}

fn benchmark_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("lists");

    for size in [10, 100].iter() {
        let unordered: String = (0..*size)
            .map(|i| format!("- item number {i}\n"))
            .collect();
        let ordered: String = (1..=*size)
            .map(|i| format!("{i}. item number {i}\n"))
            .collect();
        let options = html_options();

        group.bench_with_input(
            BenchmarkId::new("unordered", size),
            &unordered,
            |b, text| b.iter(|| render_with_options(black_box(text), &options)),
        );
        group.bench_with_input(BenchmarkId::new("ordered", size), &ordered, |b, text| {
            b.iter(|| render_with_options(black_box(text), &options))
        });
    }
    group.finish();
}

fn benchmark_escaping(c: &mut Criterion) {
    let adversarial = "<script>alert(1)</script> & \"quotes\" 'single' ".repeat(50);
    let options = html_options();

    c.bench_function("render_escaping_heavy", |b| {
        b.iter(|| render_with_options(black_box(&adversarial), &options))
    });
}

criterion_group!(
    benches,
    benchmark_chat_message,
    benchmark_mixed_document,
    benchmark_plain_text,
    benchmark_markup_heavy,
    benchmark_lists,
    benchmark_escaping
);
criterion_main!(benches);
