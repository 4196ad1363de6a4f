//! Host side of the message contract.
//!
//! The generated program posts messages; whoever runs it captures them
//! (one JSON object per line) and hands them to an `OutputSink` here.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::model::{Message, MessageKind};

/// Where decoded messages end up.
pub trait OutputSink {
    fn deliver(&mut self, msg: Message) -> Result<()>;
}

/// Writes each stdout message as one text line.
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn deliver(&mut self, msg: Message) -> Result<()> {
        match msg.kind {
            MessageKind::Stdout => writeln!(self.out, "{}", msg.text)?,
        }
        Ok(())
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub messages: Vec<Message>,
}

impl OutputSink for CollectSink {
    fn deliver(&mut self, msg: Message) -> Result<()> {
        self.messages.push(msg);
        Ok(())
    }
}

pub fn decode_message(json: &str) -> Result<Message> {
    let msg = serde_json::from_str(json)?;
    Ok(msg)
}

/// Decode a JSON-lines message log and feed it to `sink` in order.
///
/// Blank lines are skipped. Returns the number of delivered messages.
pub fn deliver_all<R: BufRead>(reader: R, sink: &mut dyn OutputSink) -> Result<usize> {
    let mut count = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Reading message line {}", i + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let msg = decode_message(&line)
            .with_context(|| format!("Decoding message on line {}", i + 1))?;
        sink.deliver(msg)?;
        count += 1;
    }
    Ok(count)
}
