//! Recognises the shape of each logical line and builds a `Program`.
//!
//! Recognition order is fixed: declaration, print, loop-open, loop-close,
//! fallback. The first shape that matches wins, so a line never lands in
//! two categories. Nothing here can fail; unknown lines are pass-through.

use super::ast::{Line, Program, Stmt};
use super::lexer::{Cursor, logical_lines};

/// Parse a whole source document.
pub fn parse_program(src: &str) -> Program {
    let body = logical_lines(src)
        .into_iter()
        .map(|l| Stmt {
            line: l.number,
            kind: parse_line(&l.text),
        })
        .collect();
    Program { body }
}

/// Classify a single, already trimmed logical line.
pub fn parse_line(text: &str) -> Line {
    let recognisers: [fn(&str) -> Option<Line>; 4] =
        [parse_var, parse_print, parse_for, parse_endfor];

    recognisers
        .iter()
        .find_map(|rec| rec(text))
        .unwrap_or_else(|| Line::PassThrough(text.to_string()))
}

/// `var <ident> [= <expr>]`
fn parse_var(text: &str) -> Option<Line> {
    let mut c = Cursor::new(text);
    if !c.keyword("var") || !c.skip_ws() {
        return None;
    }
    let name = c.ident()?.to_string();
    c.skip_ws();
    if c.at_end() {
        return Some(Line::VarDecl { name, init: None });
    }
    if !c.symbol('=') {
        return None;
    }
    let init = strip_terminator(c.rest_trimmed());
    if init.is_empty() {
        return None;
    }
    Some(Line::VarDecl {
        name,
        init: Some(init.to_string()),
    })
}

/// `print <expr>` – needs at least one character after the keyword.
fn parse_print(text: &str) -> Option<Line> {
    let mut c = Cursor::new(text);
    if !c.keyword("print") || !c.skip_ws() {
        return None;
    }
    let expr = strip_terminator(c.rest_trimmed());
    if expr.is_empty() {
        return None;
    }
    Some(Line::Print {
        expr: expr.to_string(),
    })
}

/// `for <ident> = <integer> to <ident>`
fn parse_for(text: &str) -> Option<Line> {
    let mut c = Cursor::new(text);
    if !c.keyword("for") || !c.skip_ws() {
        return None;
    }
    let var = c.ident()?.to_string();
    c.skip_ws();
    if !c.symbol('=') {
        return None;
    }
    c.skip_ws();
    let start = normalise_integer(c.integer()?);
    if !c.skip_ws() || !c.keyword("to") || !c.skip_ws() {
        return None;
    }
    let bound = c.ident()?.to_string();
    c.skip_ws();
    if !c.at_end() {
        return None;
    }
    Some(Line::ForOpen { var, start, bound })
}

/// Drop one trailing `;` so the emitted statement isn't doubly terminated.
fn strip_terminator(expr: &str) -> &str {
    expr.strip_suffix(';').map_or(expr, str::trim_end)
}

/// Leading zeros would turn into a legacy octal literal in JavaScript.
fn normalise_integer(digits: &str) -> String {
    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        rest => rest.to_string(),
    }
}

/// `endfor`, and nothing else on the line.
fn parse_endfor(text: &str) -> Option<Line> {
    text.eq_ignore_ascii_case("endfor").then_some(Line::EndFor)
}
