use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixedcsv::{ReaderOptions, RowReader, ScanMode};
use std::cell::RefCell;
use std::io::Cursor;

fn make_input(rows: usize) -> String {
    let mut content = String::from("ID,Name,Value,Flag\n");
    for i in 0..rows {
        content.push_str(&format!("{},Name_{},{},{}\n", i, i, i * 100, i % 2 == 0));
    }
    content
}

fn benchmark_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    for size in [1000, 10000, 100000].iter() {
        let input = make_input(*size);

        for mode in [ScanMode::Fast, ScanMode::Checked] {
            let id = BenchmarkId::new(format!("{:?}", mode), size);
            group.bench_with_input(id, &input, |b, input| {
                b.iter(|| {
                    let stream = RefCell::new(Cursor::new(input.as_str()));
                    let options = ReaderOptions::new().mode(mode);
                    let mut reader = RowReader::<_, 4>::with_options(&stream, options).unwrap();
                    while let Some(row) = reader.row() {
                        black_box(row);
                        reader.advance().unwrap();
                    }
                });
            });
        }
    }

    group.finish();
}

fn benchmark_owned_rows(c: &mut Criterion) {
    let input = make_input(10000);
    c.bench_function("owned_rows_10000", |b| {
        b.iter(|| {
            let stream = RefCell::new(Cursor::new(input.as_str()));
            let reader = RowReader::<_, 4>::new(&stream).unwrap();
            for row in reader {
                black_box(row.unwrap());
            }
        });
    });
}

criterion_group!(benches, benchmark_read, benchmark_owned_rows);
criterion_main!(benches);
