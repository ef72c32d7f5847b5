//! Log destination selection.
//!
//! In debug mode events go to stderr through the usual fmt subscriber. A
//! daemonized process has no stderr left, so events are handed to syslog(3)
//! instead. The destination is fixed once, here, at construction.

use std::ffi::CString;
use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Installs the global subscriber for the lifetime of the process.
pub fn init(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_target(false)
            .with_level(true)
            .with_writer(io::stderr)
            .init();
    } else {
        unsafe {
            libc::openlog(
                c"staticd".as_ptr(),
                libc::LOG_PID | libc::LOG_NDELAY,
                libc::LOG_DAEMON,
            );
        }
        tracing_subscriber::fmt()
            .with_target(false)
            .with_level(true)
            .with_ansi(false)
            .without_time()
            .with_writer(SyslogMakeWriter)
            .init();
    }
}

struct SyslogMakeWriter;

impl<'a> MakeWriter<'a> for SyslogMakeWriter {
    type Writer = SyslogLine;

    fn make_writer(&'a self) -> Self::Writer {
        SyslogLine {
            priority: libc::LOG_INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        let priority = match *meta.level() {
            Level::ERROR => libc::LOG_ERR,
            Level::WARN => libc::LOG_WARNING,
            Level::INFO => libc::LOG_INFO,
            _ => libc::LOG_DEBUG,
        };
        SyslogLine {
            priority,
            buf: Vec::new(),
        }
    }
}

/// One formatted event, buffered until the writer drops.
struct SyslogLine {
    priority: libc::c_int,
    buf: Vec<u8>,
}

impl io::Write for SyslogLine {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for SyslogLine {
    fn drop(&mut self) {
        while self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.is_empty() {
            return;
        }
        // An interior NUL would truncate the message.
        self.buf.retain(|&b| b != 0);
        if let Ok(message) = CString::new(std::mem::take(&mut self.buf)) {
            unsafe { libc::syslog(self.priority, c"%s".as_ptr(), message.as_ptr()) };
        }
    }
}
