use makefont::{convert, ArrayDecl, ConvertOptions};
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::fmt::MakeWriter;

/// Shared in-memory sink for formatted log events.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn logged<F: FnOnce()>(f: F) -> String {
    let buf = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn options(len: usize) -> ConvertOptions {
    ConvertOptions {
        decl: ArrayDecl::new("hankaku", len),
        ..ConvertOptions::default()
    }
}

#[test]
fn test_length_mismatch_warns() {
    let log = logged(|| {
        convert(&["h", "h", "*", "**"], &options(4096)).unwrap();
    });
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("value count does not match declared length of hankaku"));
    assert!(log.contains("values=2"));
    assert!(log.contains("declared=4096"));
}

#[test]
fn test_matching_length_is_quiet() {
    let log = logged(|| {
        convert(&["h", "h", "*", "**"], &options(2)).unwrap();
    });
    assert!(!log.contains("value count does not match"), "{log}");
}

#[test]
fn test_each_marker_logs_a_group() {
    let log = logged(|| {
        convert(&["h", "h", "char a", "*", "char b", "*"], &options(2)).unwrap();
    });
    assert_eq!(log.matches("glyph group").count(), 2, "{log}");
    assert!(log.contains("char a"));
    assert!(log.contains("char b"));
    assert!(log.contains("line=5"));
}
