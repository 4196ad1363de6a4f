//! Lower a parsed `Program` to a JavaScript fragment.
//!
//! The generated code never touches a console. Its only output path is the
//! `print` primitive declared by the preamble, which forwards a
//! `{ kind: "stdout", text }` message through `postMessage` to whoever
//! hosts the runtime.

use crate::processor::ast::{Line, Program};

/// Name of the output primitive declared by [`PREAMBLE`].
pub const OUTPUT_FN: &str = "print";

/// First line of every translation.
pub const PREAMBLE: &str =
    r#"const print = (...args) => postMessage({ kind: "stdout", text: args.map(String).join(" ") });"#;

/// Emit one statement for one line shape.
pub fn emit_line(line: &Line) -> String {
    match line {
        Line::VarDecl { name, init } => {
            format!("let {} = {};", name, init.as_deref().unwrap_or("undefined"))
        }
        Line::Print { expr } => format!("{OUTPUT_FN}({expr});"),
        Line::ForOpen { var, start, bound } => {
            format!("for (let {var} = {start}; {var} <= {bound}; {var}++) {{")
        }
        Line::EndFor => "}".to_string(),
        Line::PassThrough(text) => {
            if text.ends_with(';') {
                text.clone()
            } else {
                format!("{text};")
            }
        }
    }
}

/// Preamble followed by every statement, joined with `\n`.
pub fn emit(program: &Program) -> String {
    let mut out = String::from(PREAMBLE);
    for stmt in &program.body {
        out.push('\n');
        out.push_str(&emit_line(&stmt.kind));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_line() {
        let test_cases = vec![
            (
                Line::VarDecl {
                    name: "x".into(),
                    init: Some("5".into()),
                },
                "let x = 5;",
            ),
            (
                Line::VarDecl {
                    name: "y".into(),
                    init: None,
                },
                "let y = undefined;",
            ),
            (Line::Print { expr: "x".into() }, "print(x);"),
            (
                Line::ForOpen {
                    var: "i".into(),
                    start: "1".into(),
                    bound: "n".into(),
                },
                "for (let i = 1; i <= n; i++) {",
            ),
            (Line::EndFor, "}"),
            (Line::PassThrough("x = x + 1".into()), "x = x + 1;"),
            (Line::PassThrough("x = x + 1;".into()), "x = x + 1;"),
        ];

        for (line, expected) in test_cases {
            assert_eq!(emit_line(&line), expected);
        }
    }

    #[test]
    fn test_empty_program_is_preamble() {
        assert_eq!(emit(&Program::default()), PREAMBLE);
    }

    #[test]
    fn test_preamble_shape() {
        assert!(PREAMBLE.starts_with(&format!("const {OUTPUT_FN} = (...args)")));
        assert!(PREAMBLE.contains(r#"kind: "stdout""#));
        assert!(PREAMBLE.contains("postMessage("));
        assert!(!PREAMBLE.contains("console"));
    }
}
