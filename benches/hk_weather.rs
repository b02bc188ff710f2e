use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hk_weather::{parse_table, resolve_date, resolve_number, WeatherCategory};

fn temperature_table() -> String {
    let mut text = String::from("Daily temperature\nStation: HKO\nDate,Daily Max,Daily Mean,Daily Min\n");
    for day in 1..=31 {
        text.push_str(&format!("2024-08-{:02},32.{},29.{},26.{}\n", day, day % 10, day % 10, day % 10));
    }
    text
}

fn bench_tables(c: &mut Criterion) {
    let text = temperature_table();
    let records = parse_table(&text);

    c.bench_function("parse_table", |b| b.iter(|| parse_table(black_box(&text))));
    c.bench_function("resolve_row", |b| {
        b.iter(|| {
            for record in black_box(&records) {
                let _ = resolve_date(record);
                let _ = resolve_number(record, &["daily mean", "mean(°c)", "mean", "avg"]);
            }
        })
    });
    c.bench_function("classify", |b| {
        b.iter(|| WeatherCategory::from_precipitation(black_box(0.42)))
    });
}

criterion_group!(benches, bench_tables);
criterion_main!(benches);
