//! Structural dump of the document to a console stream.

use std::io::{self, Write};

use crate::error::{HarDumpError, Result};
use crate::har::Har;

use super::HarSink;

/// Pretty `Debug` dump for reading, not valid HAR JSON.
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
}

impl ConsoleSink {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }
}

impl HarSink for ConsoleSink {
    fn write(&mut self, har: &Har) -> Result<()> {
        writeln!(self.out, "{:#?}", har).map_err(HarDumpError::Console)?;
        self.out.flush().map_err(HarDumpError::Console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::Creator;
    use std::sync::{Arc, Mutex};

    /// Shared buffer so the test can read what the sink wrote.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn dumps_structure() {
        let buf = SharedBuf::default();
        let mut sink = ConsoleSink::new(Box::new(buf.clone()));
        let har = Har::new(Creator {
            name: "p har_dump".into(),
            version: "0.1".into(),
            comment: "p version 1".into(),
        });
        sink.write(&har).unwrap();
        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(text.starts_with("Har {"));
        assert!(text.contains("version: \"1.2\""));
        assert!(text.contains("entries: []"));
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_err());
    }
}
