pub mod cli;
pub mod error;
pub mod host;
pub mod model;
pub mod processor;
pub mod writer;

pub use error::{BlockError, TranslateError, TranslateResult};
pub use processor::{translate, translate_strict};

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use cli::{Cli, Command};
use host::WriterSink;

pub fn run() -> anyhow::Result<()> {
    let args = Cli::parse();
    let quiet = args.quiet;

    match args.command {
        Command::Translate {
            input,
            output,
            strict,
            summary,
        } => run_translate(&input, output.as_deref(), strict, summary, quiet),
        Command::Render { messages } => run_render(messages, quiet),
    }
}

fn run_translate(
    input: &Path,
    output: Option<&Path>,
    strict: bool,
    summary: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    // 1. ── Read ───────────────────────────────────────────────────────
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Reading {}", input.display()))?;
    if !quiet {
        eprintln!("File loaded, size: {} bytes", source.len());
    }

    // 2. ── Translate ──────────────────────────────────────────────────
    let program = processor::line_parser::parse_program(&source);
    if strict {
        processor::blocks::check_balance(&program)
            .map_err(TranslateError::from)
            .with_context(|| format!("Checking loop structure of {}", input.display()))?;
    }
    let code = writer::js::emit(&program);

    if summary {
        let s = processor::summarize(&program);
        eprintln!(
            "{} statements: {} var, {} print, {} for, {} endfor, {} pass-through",
            s.statements(),
            s.declarations,
            s.prints,
            s.loops_opened,
            s.loops_closed,
            s.pass_through
        );
    }

    // 3. ── Write output ───────────────────────────────────────────────
    match output {
        Some(path) => {
            std::fs::write(path, &code).with_context(|| format!("Writing {}", path.display()))?;
            if !quiet {
                eprintln!("Generated: {} ({} bytes)", path.display(), code.len());
            }
        }
        None => write_code(&mut io::stdout().lock(), &code)
            .with_context(|| "Writing generated code to stdout")?,
    }

    Ok(())
}

fn write_code<W: Write>(out: &mut W, code: &str) -> io::Result<()> {
    writeln!(out, "{code}")?;
    out.flush()
}

fn run_render(messages: PathBuf, quiet: bool) -> anyhow::Result<()> {
    let file =
        File::open(&messages).with_context(|| format!("Opening {}", messages.display()))?;
    let mut sink = WriterSink::new(io::stdout().lock());
    let count = host::deliver_all(BufReader::new(file), &mut sink)
        .with_context(|| format!("Rendering {}", messages.display()))?;
    if !quiet {
        eprintln!("Rendered {count} messages");
    }
    Ok(())
}
