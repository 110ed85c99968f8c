use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use widgets::number::{DisplayMode, format, parse, parse_entry};
use widgets::{Key, Page, UiEvent};

const ENTRY_COUNT: usize = 4_096;

fn make_entries(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 4 {
            0 => format!("{}", i * 37),
            1 => format!("{}.{:03},{:02}", i % 1000, (i * 7) % 1000, i % 100),
            2 => format!("({i}+{})*2/3", i % 17),
            _ => format!("{} %", i % 250),
        })
        .collect()
}

fn bench_parse_currency(c: &mut Criterion) {
    let entries = make_entries(ENTRY_COUNT);
    let mode = DisplayMode::Currency(2);
    c.bench_function("bench_parse_currency", |b| {
        b.iter(|| {
            let mut parsed = 0usize;
            for entry in &entries {
                parsed += usize::from(parse(black_box(entry), mode).is_some());
            }
            black_box(parsed);
        });
    });
}

fn bench_parse_entry_percentage(c: &mut Criterion) {
    let entries = make_entries(ENTRY_COUNT);
    c.bench_function("bench_parse_entry_percentage", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for entry in &entries {
                sum += parse_entry(black_box(entry), DisplayMode::Percentage).unwrap_or(0.0);
            }
            black_box(sum);
        });
    });
}

fn bench_parse_nested_expression(c: &mut Criterion) {
    let depth = 48;
    let input = format!("{}1{}", "(".repeat(depth), "+1)".repeat(depth));
    c.bench_function("bench_parse_nested_expression", |b| {
        b.iter(|| black_box(parse(black_box(&input), DisplayMode::Plain)));
    });
}

fn bench_format_modes(c: &mut Criterion) {
    let values: Vec<f64> = (0..ENTRY_COUNT).map(|i| i as f64 * 1.37 - 500.0).collect();
    let modes = [
        DisplayMode::Plain,
        DisplayMode::Decimal(3),
        DisplayMode::Currency(2),
        DisplayMode::Percentage,
    ];
    c.bench_function("bench_format_modes", |b| {
        b.iter(|| {
            let mut bytes = 0usize;
            for (i, value) in values.iter().enumerate() {
                bytes += format(Some(black_box(*value)), modes[i % modes.len()]).len();
            }
            black_box(bytes);
        });
    });
}

fn bench_widget_typing(c: &mut Criterion) {
    c.bench_function("bench_widget_typing", |b| {
        b.iter_batched(
            || {
                let mut page = Page::new();
                let host = page.create_element("mn-number").expect("create mn-number");
                page.set_attribute(host, "currency", "").expect("currency");
                page.append_child(page.body(), host).expect("mount");
                let input = page.document().children(host)[0];
                (page, input)
            },
            |(mut page, input)| {
                for ch in "1.234,56".chars() {
                    page.dispatch(input, UiEvent::key_down(Key::Char(ch)))
                        .expect("dispatch");
                }
                page.dispatch(input, UiEvent::Blur).expect("blur");
                black_box(page);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_parse_currency,
    bench_parse_entry_percentage,
    bench_parse_nested_expression,
    bench_format_modes,
    bench_widget_typing
);
criterion_main!(benches);
