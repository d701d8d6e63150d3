//! Parser and validator errors.

use thiserror::Error;

use crate::map::DirectionKind;

/// What went wrong at a given source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("unexpected newline, city must contain at least one direction")]
    NewlineWithoutDirection,

    #[error("unexpected EOF, city must contain at least one direction")]
    EofWithoutDirection,

    /// Input ended in the middle of a `direction=target` clause.
    #[error("Unexpected EOF")]
    UnterminatedDirection,

    #[error("got city duplication for {city} previously declared on line {line}")]
    DuplicateCity { city: String, line: usize },

    #[error("expected a valid city name, got {0}")]
    InvalidCityName(String),

    #[error("got unexpected mapDirection type {0}, expected one of south,north,west,east")]
    UnknownDirectionType(String),

    #[error("got mapDirection type duplication {direction} for city {city}")]
    DuplicateDirectionType {
        direction: DirectionKind,
        city: String,
    },

    #[error("unexpected token {0}, expected =")]
    ExpectedEqualSign(String),

    #[error("expected a valid city name as a mapDirection value, got {0}")]
    InvalidDirectionValue(String),

    #[error("got mapDirection value duplication {target} for city {city}")]
    DuplicateDirectionValue { target: String, city: String },
}

/// Errors produced while turning a map file into a [`PlanetMap`](crate::map::PlanetMap).
#[derive(Debug, Error)]
pub enum ParseError {
    /// Grammar, lexical and uniqueness errors, tagged with their position.
    #[error("{source_name}:{line}:{column}: {kind}")]
    Syntax {
        source_name: String,
        line: usize,
        column: usize,
        kind: SyntaxErrorKind,
    },

    /// A road leads to a city that is never declared.
    #[error("city {city} on line {line} has direction {direction} which points to non existent city {target}")]
    NonExistentCity {
        city: String,
        line: usize,
        direction: DirectionKind,
        target: String,
    },

    #[error("already parsed")]
    AlreadyParsed,

    #[error("cannot check direction value for unparsed file")]
    ValidateBeforeParse,

    #[error("cannot build simulation for unparsed file")]
    BuildBeforeParse,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// The syntax error kind, if this is a syntax error.
    pub fn syntax_kind(&self) -> Option<&SyntaxErrorKind> {
        match self {
            ParseError::Syntax { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
