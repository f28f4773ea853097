// Utilities shared between the user-facing macros
//
// - bool_expr: concept expression parsing and probe generation

mod bool_expr;

pub use bool_expr::*;
