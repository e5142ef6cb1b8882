//! Integration tests for fixedcsv

use fixedcsv::{CsvError, ReaderOptions, RowReader, ScanMode};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Write};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(content.as_bytes()).unwrap();
    temp.flush().unwrap();
    temp
}

#[test]
fn test_read_file_roundtrip() {
    let mut content = String::from("ID,Name,Value\n");
    for i in 0..100 {
        content.push_str(&format!("{},Name_{},{}\n", i, i, i * 2));
    }
    let temp = write_temp(&content);

    let stream = RefCell::new(BufReader::new(File::open(temp.path()).unwrap()));
    let mut reader = RowReader::<_, 3>::new(&stream).unwrap();

    let mut lines = content.lines();
    let mut rows = 0;
    while let Some(row) = reader.row() {
        assert_eq!(row.join(b','), lines.next().unwrap());
        rows += 1;
        reader.advance().unwrap();
    }

    assert_eq!(rows, 101); // header + 100 data rows
    assert!(lines.next().is_none());
}

#[test]
fn test_header_is_just_the_first_row() {
    let temp = write_temp("ID,Name\n1,Alice\n2,Bob\n");
    let stream = RefCell::new(BufReader::new(File::open(temp.path()).unwrap()));

    let mut rows = RowReader::<_, 2>::new(&stream).unwrap().into_owned_rows();
    let header = rows.next().unwrap().unwrap();
    assert_eq!(header, ["ID", "Name"].map(String::from));

    let data: Vec<_> = rows.collect::<Result<_, _>>().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0], ["1", "Alice"].map(String::from));
}

#[test]
fn test_checked_file_with_bad_line() {
    let temp = write_temp("a;b;c\n1;2;3\n4;5\n6;7;8\n");
    let stream = RefCell::new(BufReader::new(File::open(temp.path()).unwrap()));
    let options = ReaderOptions::new().delimiter(b';').mode(ScanMode::Checked);

    let mut reader = RowReader::<_, 3>::with_options(&stream, options).unwrap();
    reader.advance().unwrap();
    assert_eq!(reader.row().unwrap(), ["1", "2", "3"]);

    match reader.advance() {
        Err(CsvError::FieldCount {
            line,
            expected,
            found,
        }) => {
            assert_eq!((line, expected, found), (3, 3, 2));
        }
        other => panic!("expected field count error, got {:?}", other),
    }
    assert_eq!(reader.row().unwrap(), ["1", "2", "3"]);

    reader.advance().unwrap();
    assert_eq!(reader.row().unwrap(), ["6", "7", "8"]);
    reader.advance().unwrap();
    assert!(reader.is_end());
}

#[test]
fn test_readers_over_same_stream_compare_equal() {
    let stream = RefCell::new(Cursor::new("a,b\nc,d\ne,f\n"));
    let first = RowReader::<_, 2>::new(&stream).unwrap();
    let second = RowReader::<_, 2>::new(&stream).unwrap();

    // Both share the stream, each got its own line
    assert_eq!(first, second);
    assert_eq!(first.row().unwrap(), ["a", "b"]);
    assert_eq!(second.row().unwrap(), ["c", "d"]);
}

#[test]
fn test_copy_then_advance_copy_only() {
    let stream = RefCell::new(Cursor::new("not|much|to|say\n1|2|3|4\n4|3|2|1\n"));
    let original = RowReader::<_, 4>::with_delimiter(&stream, b'|').unwrap();
    let mut copy = original.clone();

    copy.advance().unwrap();
    copy.advance().unwrap();
    assert_eq!(copy.row().unwrap(), ["4", "3", "2", "1"]);
    assert_eq!(original.row().unwrap(), ["not", "much", "to", "say"]);

    copy.advance().unwrap();
    assert!(copy.is_end());
    assert_ne!(copy, original);
}

#[test]
fn test_large_dataset_streaming() {
    let num_rows = 10_000;
    let mut content = String::new();
    for i in 0..num_rows {
        content.push_str(&format!("{}\t{}\t\t{}\n", i, i * 3, i % 7));
    }
    let temp = write_temp(&content);
    let stream = RefCell::new(BufReader::new(File::open(temp.path()).unwrap()));

    let mut reader = RowReader::<_, 4>::with_delimiter(&stream, b'\t').unwrap();
    let mut count = 0u64;
    let mut sum = 0u64;
    while let Some(row) = reader.row() {
        assert_eq!(&row[2], "");
        sum += row[1].parse::<u64>().unwrap();
        count += 1;
        reader.advance().unwrap();
    }

    assert_eq!(count, num_rows);
    assert_eq!(sum, (0..num_rows).map(|i| i * 3).sum::<u64>());
    assert_eq!(reader.line_number(), num_rows);
}
