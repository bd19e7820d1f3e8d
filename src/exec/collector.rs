// src/exec/collector.rs

//! Accumulates the lines of one child stream into a single string.
//!
//! A collector is created per stream at the start of an invocation. The drain
//! task owns a [`LineCallback`] obtained from [`OutputCollector::receiver`];
//! lines pushed through it are queued and folded into the buffer when
//! [`OutputCollector::finalize`] is called.

use std::io;

use tokio::sync::mpsc;

use super::runner::{LineCallback, LineFuture};

/// Line terminator appended after every received line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

#[derive(Debug)]
pub struct OutputCollector {
    buffer: String,
    tx: mpsc::UnboundedSender<String>,
    rx: mpsc::UnboundedReceiver<String>,
}

impl OutputCollector {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            buffer: String::new(),
            tx,
            rx,
        }
    }

    /// Append `line` followed by the platform line terminator.
    pub fn receive(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push_str(LINE_ENDING);
    }

    /// Callback for a drain task. Each line it is handed ends up in this
    /// collector once `finalize` runs.
    pub fn receiver(&self) -> LineCallback {
        let tx = self.tx.clone();
        Box::new(move |line: String| -> LineFuture {
            let sent = tx.send(line).map_err(|_| {
                io::Error::new(io::ErrorKind::BrokenPipe, "output collector was dropped")
            });
            Box::pin(std::future::ready(sent))
        })
    }

    /// Flush queued lines and return everything collected so far.
    ///
    /// Calling this again without new input returns the same text.
    pub fn finalize(&mut self) -> String {
        while let Ok(line) = self.rx.try_recv() {
            self.receive(&line);
        }
        self.buffer.clone()
    }
}

impl Default for OutputCollector {
    fn default() -> Self {
        Self::new()
    }
}
