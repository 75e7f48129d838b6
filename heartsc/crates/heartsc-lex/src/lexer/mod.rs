//! Lexer module.
//!
//! The lexer is split by lexical class, each file adding methods to [`Lexer`]:
//! - `core` - Lexer struct, dispatch, and the batch/pull interfaces
//! - `identifier` - Identifiers, keywords, and boolean literals
//! - `number` - Binary, hex, decimal, and float literals
//! - `string` - String and character literals with escapes
//! - `operator` - Operators and delimiters
//! - `comment` - Whitespace and comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
