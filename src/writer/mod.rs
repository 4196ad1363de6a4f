//! Output back-ends. Only JavaScript for now.
pub mod js;
