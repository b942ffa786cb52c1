#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod ast;
#[cfg(feature = "translate")]
pub mod emission;
#[cfg(feature = "lexer")]
pub mod lexer;
#[cfg(feature = "parser")]
pub mod parser;
#[cfg(feature = "translate")]
pub mod relabel;
#[cfg(feature = "translate")]
pub mod translate;

#[cfg(feature = "translate")]
pub use translate::Program;

/// Output of a full compilation: the normalised program plus every
/// recoverable scanning error met on the way.
#[cfg(feature = "translate")]
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub program: Program,
    pub lex_errors: Vec<lexer::LexError>,
}

/// Runs the whole pipeline on `source`: scan, parse, translate, relabel.
///
/// Lex errors do not stop compilation and are handed back alongside the
/// program. A syntax error aborts it.
///
/// # Errors
///
/// Returns the first [`parser::ParseError`] in `source`.
#[cfg(feature = "translate")]
pub fn parse_and_translate(source: &str) -> Result<Translation, parser::ParseError> {
    let lexer::Lexed { tokens, errors } = lexer::lex(source);
    let ast = parser::parse(&tokens)?;
    let program = translate::translate(ast).relabel();

    Ok(Translation {
        program,
        lex_errors: errors,
    })
}
