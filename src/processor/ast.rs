//! Shape of one logical line *before* it is lowered to JavaScript.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `var x [= expr]` – mutable binding, `undefined` when bare.
    VarDecl { name: String, init: Option<String> },

    /// `print expr` – hand the value to the output primitive.
    Print { expr: String },

    /// `for i = 1 to n` – inclusive counting loop, opens a block.
    ForOpen {
        var: String,
        start: String,
        bound: String,
    },

    /// `endfor` – closes the most recently opened loop.
    EndFor,

    /// Anything else, copied through verbatim.
    PassThrough(String),
}

impl Line {
    pub fn opens_block(&self) -> bool {
        matches!(self, Line::ForOpen { .. })
    }

    pub fn closes_block(&self) -> bool {
        matches!(self, Line::EndFor)
    }
}

/// A parsed line together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    /// 1-based source line number.
    pub line: usize,
    pub kind: Line,
}

/// One complete pseudocode document, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Stmt>,
}
