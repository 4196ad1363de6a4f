//! Opt-in structural check: every `for` needs a matching `endfor`.
//!
//! `translate` never runs this; pass-through is permissive. Callers that
//! want the latent defect surfaced early use `translate_strict`.

use super::ast::Program;
use crate::error::BlockError;

pub fn check_balance(program: &Program) -> Result<(), BlockError> {
    // line numbers of currently open loops
    let mut open = Vec::<usize>::new();

    for stmt in &program.body {
        if stmt.kind.opens_block() {
            open.push(stmt.line);
        } else if stmt.kind.closes_block() && open.pop().is_none() {
            return Err(BlockError::UnexpectedEndFor { line: stmt.line });
        }
    }

    match open.first() {
        Some(&line) => Err(BlockError::UnclosedFor {
            line,
            open: open.len(),
        }),
        None => Ok(()),
    }
}
