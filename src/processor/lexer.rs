//! Very small hand-written scanner for the pseudocode dialect.
//!
//! Two jobs live here:
//!   • turning raw source text into `LogicalLine`s (trimmed, no blanks,
//!     no `#` comments), and
//!   • a `Cursor` that walks one logical line word by word so the line
//!     parser can recognise its shape.
//
//  Lexical items (informal):
//
//      Ident    ::= [A-Za-z_][A-Za-z0-9_]*
//      Integer  ::= [0-9]+
//      Keyword  ::= Ident compared case-insensitively
//      Whitespace between items is skipped; comments are whole lines.

/// One trimmed, non-blank, non-comment source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based line number in the source document.
    pub number: usize,
    pub text: String,
}

/// Split `src` into logical lines, keeping source order.
///
/// `\n`, `\r\n` and a lone `\r` each end a line.
pub fn logical_lines(src: &str) -> Vec<LogicalLine> {
    src.replace("\r\n", "\n")
        .split(['\n', '\r'])
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                return None;
            }
            Some(LogicalLine {
                number: i + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte cursor over a single logical line.
#[derive(Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Skip whitespace; returns `true` if at least one char was skipped.
    pub fn skip_ws(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.pos > start
    }

    fn take_while<F: Fn(char) -> bool>(&mut self, pred: F) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    /// Read an identifier, or `None` (cursor untouched) if there isn't one.
    pub fn ident(&mut self) -> Option<&'a str> {
        match self.peek_char() {
            Some(c) if is_ident_start(c) => Some(self.take_while(is_ident_char)),
            _ => None,
        }
    }

    /// Read a run of ASCII digits.
    pub fn integer(&mut self) -> Option<&'a str> {
        match self.peek_char() {
            Some(c) if c.is_ascii_digit() => Some(self.take_while(|c| c.is_ascii_digit())),
            _ => None,
        }
    }

    /// Consume `kw` if the next word equals it, ignoring ASCII case.
    ///
    /// The whole word must match: `printx` is not the keyword `print`.
    pub fn keyword(&mut self, kw: &str) -> bool {
        let save = self.pos;
        match self.ident() {
            Some(word) if word.eq_ignore_ascii_case(kw) => true,
            _ => {
                self.pos = save;
                false
            }
        }
    }

    /// Consume a single symbol character.
    pub fn symbol(&mut self, sym: char) -> bool {
        if self.peek_char() == Some(sym) {
            self.pos += sym.len_utf8();
            true
        } else {
            false
        }
    }

    /// Everything left on the line, trimmed. Consumes it.
    pub fn rest_trimmed(&mut self) -> &'a str {
        let rest = self.rest().trim();
        self.pos = self.src.len();
        rest
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_lines() {
        let test_cases = vec![
            (
                "var x = 5\n\n# note\nprint x\n",
                vec![
                    LogicalLine {
                        number: 1,
                        text: "var x = 5".into(),
                    },
                    LogicalLine {
                        number: 4,
                        text: "print x".into(),
                    },
                ],
            ),
            (
                "  var a  \r\n\t# indented comment\r\n\r\nendfor\r\n",
                vec![
                    LogicalLine {
                        number: 1,
                        text: "var a".into(),
                    },
                    LogicalLine {
                        number: 4,
                        text: "endfor".into(),
                    },
                ],
            ),
            (
                "var a = 1\rprint a\r\rendfor",
                vec![
                    LogicalLine {
                        number: 1,
                        text: "var a = 1".into(),
                    },
                    LogicalLine {
                        number: 2,
                        text: "print a".into(),
                    },
                    LogicalLine {
                        number: 4,
                        text: "endfor".into(),
                    },
                ],
            ),
            ("\n   \n# only\n#comments\n", vec![]),
        ];

        for (src, expected) in test_cases {
            assert_eq!(logical_lines(src), expected);
        }
    }

    #[test]
    fn test_cursor_words() {
        let mut c = Cursor::new("FOR i_1 = 10 To n");
        assert!(c.keyword("for"));
        assert!(c.skip_ws());
        assert_eq!(c.ident(), Some("i_1"));
        c.skip_ws();
        assert!(c.symbol('='));
        c.skip_ws();
        assert_eq!(c.integer(), Some("10"));
        c.skip_ws();
        assert!(c.keyword("to"));
        c.skip_ws();
        assert_eq!(c.ident(), Some("n"));
        assert!(c.at_end());
    }

    #[test]
    fn test_keyword_needs_whole_word() {
        let mut c = Cursor::new("printx");
        assert!(!c.keyword("print"));
        assert_eq!(c.ident(), Some("printx"));
    }

    #[test]
    fn test_ident_rejects_digit_start() {
        let mut c = Cursor::new("9lives");
        assert_eq!(c.ident(), None);
        assert_eq!(c.integer(), Some("9"));
        assert_eq!(c.rest_trimmed(), "lives");
    }
}
