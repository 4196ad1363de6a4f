//! The functional core: pseudocode in, JavaScript out.
//!
//! Every function here is pure. No I/O, no logging, no state kept between
//! calls, so they are safe to call from any number of threads at once.
pub mod ast;
pub mod blocks;
pub mod lexer;
pub mod line_parser;

pub use ast::{Line, Program, Stmt};

use crate::error::TranslateResult;
use crate::writer::js;

/// Translate pseudocode into a JavaScript fragment.
///
/// Total: lines that match no known shape are passed through verbatim, and
/// loop balance is *not* checked.
pub fn translate(src: &str) -> String {
    js::emit(&line_parser::parse_program(src))
}

/// Like [`translate`], but rejects unbalanced `for` / `endfor` structure.
pub fn translate_strict(src: &str) -> TranslateResult<String> {
    let program = line_parser::parse_program(src);
    blocks::check_balance(&program)?;
    Ok(js::emit(&program))
}

/// How many lines of each shape a program holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub declarations: usize,
    pub prints: usize,
    pub loops_opened: usize,
    pub loops_closed: usize,
    pub pass_through: usize,
}

impl Summary {
    pub fn statements(&self) -> usize {
        self.declarations + self.prints + self.loops_opened + self.loops_closed + self.pass_through
    }
}

pub fn summarize(program: &Program) -> Summary {
    let mut s = Summary::default();
    for stmt in &program.body {
        match stmt.kind {
            Line::VarDecl { .. } => s.declarations += 1,
            Line::Print { .. } => s.prints += 1,
            Line::ForOpen { .. } => s.loops_opened += 1,
            Line::EndFor => s.loops_closed += 1,
            Line::PassThrough(_) => s.pass_through += 1,
        }
    }
    s
}
