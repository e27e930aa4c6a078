//! [`PaymentJournal`]: thread-safe journal for accepted payment notifications.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Prefix of every journal line.
const LINE_PREFIX: &str = "Received payment: ";

/// Where journal lines are written.
#[derive(Debug)]
enum Sink {
    /// Standard output; the production sink.
    Stdout(io::Stdout),
    /// In-memory buffer, readable back via [`PaymentJournal::captured`].
    Buffer(Vec<u8>),
}

/// Thread-safe journal that records one line per accepted notification.
///
/// Wraps an `Arc<Mutex<Sink>>` so that:
/// - Handlers on every connection share a single sink without copying it.
/// - Each notification is written with a single locked `write_all`, so two
///   concurrent requests can never interleave their lines.
#[derive(Clone, Debug)]
pub struct PaymentJournal {
    sink: Arc<Mutex<Sink>>,
}

impl PaymentJournal {
    /// Journal writing to standard output.
    pub fn stdout() -> Self {
        Self::with_sink(Sink::Stdout(io::stdout()))
    }

    /// Journal writing to an in-memory buffer, readable via
    /// [`PaymentJournal::captured`].
    pub fn in_memory() -> Self {
        Self::with_sink(Sink::Buffer(Vec::new()))
    }

    fn with_sink(sink: Sink) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// Write one journal line containing `body` verbatim.
    ///
    /// The line is assembled in full before the sink lock is taken and lands
    /// in the sink as a single write, followed by a flush. The body bytes are
    /// not inspected or transformed in any way.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the sink rejects the write.
    pub fn record(&self, body: &[u8]) -> io::Result<()> {
        let mut line = Vec::with_capacity(LINE_PREFIX.len() + body.len() + 1);
        line.extend_from_slice(LINE_PREFIX.as_bytes());
        line.extend_from_slice(body);
        line.push(b'\n');

        // A poisoned lock still holds a usable sink.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *sink {
            Sink::Stdout(out) => {
                out.write_all(&line)?;
                out.flush()
            }
            Sink::Buffer(buf) => {
                buf.extend_from_slice(&line);
                Ok(())
            }
        }
    }

    /// Copy of everything recorded so far.
    ///
    /// Only meaningful for [`PaymentJournal::in_memory`] journals; the stdout
    /// sink cannot be read back and yields an empty copy.
    pub fn captured(&self) -> Vec<u8> {
        let sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match &*sink {
            Sink::Stdout(_) => Vec::new(),
            Sink::Buffer(buf) => buf.clone(),
        }
    }
}
