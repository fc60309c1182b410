//! Benchmarks for message composition.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mattersend::message::{Attachment, Message};
use mattersend::tabular::{TabularDialect, format_table};

fn sample_csv(rows: usize) -> String {
    let mut csv = String::from("host,status,latency_ms\n");
    for i in 0..rows {
        csv.push_str(&format!("web-{i},ok,{}\n", i * 3 % 97));
    }
    csv
}

fn bench_table_sniffed(c: &mut Criterion) {
    let csv = sample_csv(200);
    c.bench_function("table_sniffed", |b| {
        b.iter(|| format_table(black_box(&csv), TabularDialect::Sniff).unwrap())
    });
}

fn bench_table_excel(c: &mut Criterion) {
    let csv = sample_csv(200);
    c.bench_function("table_excel", |b| {
        b.iter(|| format_table(black_box(&csv), TabularDialect::Excel).unwrap())
    });
}

fn bench_payload(c: &mut Criterion) {
    let mut message = Message {
        url: Some("https://chat.example.com/hooks/abc".to_string()),
        channel: Some("town-square".to_string()),
        icon: Some(":rocket:".to_string()),
        ..Message::default()
    };
    message.append("deploy finished", None);
    message.attachments.push(Attachment::new("x".repeat(5000)));
    c.bench_function("payload", |b| b.iter(|| black_box(&message).get_payload().unwrap()));
}

criterion_group!(benches, bench_table_sniffed, bench_table_excel, bench_payload);
criterion_main!(benches);
