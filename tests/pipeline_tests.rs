//! End-to-end pipeline tests
//!
//! These exercise the full capture-to-sink path: registry dispatch, handler
//! gating, formatting, and both writer variants, including ordering, flush
//! and overflow behavior of the async queue.

use logpipe::{
    AsyncFileWriter, CategoryRegistry, Destination, FileHandlerFactory, Formatter, Level,
    LogHandler, LogRecord, LogWriter, Options, TextFormatter,
};
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn file_options(path: &std::path::Path) -> Options {
    let mut options = Options::new();
    options.insert("path".to_string(), path.to_str().unwrap().to_string());
    options
}

#[test]
fn test_end_to_end_single_record() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("e2e.log");

    let handler = FileHandlerFactory::new()
        .create_handler(&file_options(&path))
        .expect("Failed to create handler");

    let registry = CategoryRegistry::new();
    registry.install_handler("app", handler.clone());

    let record = LogRecord::new(Level::Info, "app", "one message");
    registry.dispatch(&record);
    handler.flush().expect("Failed to flush");

    let content = fs::read(&path).expect("Failed to read log file");
    assert_eq!(content, TextFormatter::new().format(&record));
}

#[test]
fn test_async_ordering_single_producer() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("order.log");

    let writer = AsyncFileWriter::new(Destination::open_path(&path).unwrap());
    for i in 0..100 {
        writer.write(format!("message {}\n", i).as_bytes()).unwrap();
    }
    writer.flush().expect("Failed to flush");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 100, "no loss and no duplication");
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("message {}", i));
    }
}

#[test]
fn test_async_multi_producer_no_loss() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("multi.log");

    let writer = Arc::new(AsyncFileWriter::new(Destination::open_path(&path).unwrap()));

    let producers: Vec<_> = (0..4)
        .map(|t| {
            let writer = Arc::clone(&writer);
            thread::spawn(move || {
                for i in 0..50 {
                    writer
                        .write(format!("producer {} message {}\n", t, i).as_bytes())
                        .unwrap();
                }
            })
        })
        .collect();
    for producer in producers {
        producer.join().unwrap();
    }

    writer.shutdown();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 200);
    assert_eq!(writer.discarded_count(), 0);

    // Per-producer order is preserved even when producers interleave.
    for t in 0..4 {
        let prefix = format!("producer {} ", t);
        let mine: Vec<&str> = content
            .lines()
            .filter(|line| line.starts_with(&prefix))
            .collect();
        for (i, line) in mine.iter().enumerate() {
            assert_eq!(*line, format!("producer {} message {}", t, i));
        }
    }
}

#[test]
fn test_overflow_discards_and_preserves_accepted() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("overflow.log");

    // Capacity smaller than any of the large messages: they can never be
    // accepted regardless of consumer timing.
    let writer = AsyncFileWriter::with_capacity(Destination::open_path(&path).unwrap(), 32);
    writer.write(b"small 0\n").unwrap();
    for _ in 0..5 {
        writer.write(&[b'x'; 64]).unwrap();
    }
    writer.write(b"small 1\n").unwrap();
    writer.flush().unwrap();

    assert_eq!(writer.discarded_count(), 5);

    let content = fs::read_to_string(&path).unwrap();
    let small: Vec<&str> = content
        .lines()
        .filter(|line| line.starts_with("small"))
        .collect();
    assert_eq!(small, ["small 0", "small 1"], "accepted messages in order");
    assert!(!content.contains('x'), "discarded bytes never reach the sink");
}

#[test]
fn test_flush_twice_without_writes() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("flush.log");

    let handler = FileHandlerFactory::new()
        .create_handler(&file_options(&path))
        .expect("Failed to create handler");

    handler.handle_message(&LogRecord::new(Level::Info, "app", "only one"), "app");
    handler.flush().expect("first flush");
    handler.flush().expect("second flush");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1, "no re-emission on second flush");
}

#[test]
fn test_handler_gate_end_to_end() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("gate.log");

    let handler = FileHandlerFactory::new()
        .create_handler(&file_options(&path))
        .expect("Failed to create handler");
    handler.set_level(Level::Warn);

    let registry = CategoryRegistry::new();
    registry.install_handler("app", handler.clone());

    registry.dispatch(&LogRecord::new(Level::Debug, "app", "debug dropped"));
    registry.dispatch(&LogRecord::new(Level::Info, "app", "info dropped"));
    registry.dispatch(&LogRecord::new(Level::Warn, "app", "warn kept"));
    registry.dispatch(&LogRecord::new(Level::Error, "app", "error kept"));
    registry.flush_all().expect("Failed to flush");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("warn kept"));
    assert!(content.contains("error kept"));
    assert!(!content.contains("dropped"));
}

#[test]
fn test_reconfiguration_by_replacement() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let first_path = dir.path().join("first.log");
    let second_path = dir.path().join("second.log");

    let factory = FileHandlerFactory::new();
    let registry = CategoryRegistry::new();

    let first = factory
        .create_handler(&file_options(&first_path))
        .expect("Failed to create handler");
    registry.install_handler("app", first.clone());
    registry.dispatch(&LogRecord::new(Level::Info, "app", "to first"));

    // Reconfigure by building a new handler and swapping, never by mutating.
    let second = factory
        .create_handler(&file_options(&second_path))
        .expect("Failed to create handler");
    registry.replace_handlers("app", vec![second.clone()]);
    registry.dispatch(&LogRecord::new(Level::Info, "app", "to second"));

    first.flush().unwrap();
    second.flush().unwrap();

    assert!(fs::read_to_string(&first_path).unwrap().contains("to first"));
    let second_content = fs::read_to_string(&second_path).unwrap();
    assert!(second_content.contains("to second"));
    assert!(!second_content.contains("to first"));
}

#[test]
fn test_emission_macros() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("macros.log");

    let handler = FileHandlerFactory::new()
        .create_handler(&file_options(&path))
        .expect("Failed to create handler");
    let registry = CategoryRegistry::new();
    registry.install_handler("server", handler.clone());

    logpipe::info!(registry, "server", "listening on port {}", 8080);
    logpipe::error!(registry, "server", "accept failed");
    handler.flush().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("listening on port 8080"));
    assert!(content.contains("accept failed"));
    // Macros stamp the call site.
    assert!(content.contains("pipeline_tests.rs"));
}

#[test]
fn test_writer_variant_names() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("names.log");

    let factory = FileHandlerFactory::new();
    let async_handler = factory
        .create_handler(&file_options(&path))
        .expect("Failed to create handler");
    assert_eq!(async_handler.writer().name(), "async_file");

    let mut options = file_options(&path);
    options.insert("async".to_string(), "false".to_string());
    let immediate_handler = factory
        .create_handler(&options)
        .expect("Failed to create handler");
    assert_eq!(immediate_handler.writer().name(), "immediate");
}
