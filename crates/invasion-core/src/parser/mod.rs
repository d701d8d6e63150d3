//! Map file parser.
//!
//! A map file declares one city per line:
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! ```
//!
//! The parser is a four-state machine driven by the [`Tokenizer`]. It stops
//! at the first violation and reports it as `source:line:column: message`.
//! Roads may point to cities declared further down; those references are
//! resolved by [`Parser::check_direction_values`] once parsing succeeded.
//!
//! ```
//! use invasion_core::parser::parse_map;
//!
//! let map = parse_map("London east=Bolton\nBolton west=London", "example").unwrap();
//! assert_eq!(map.len(), 2);
//! ```

pub mod error;
pub mod tokenizer;
pub mod validation;

pub use error::{ParseError, SyntaxErrorKind};
pub use tokenizer::{Position, Token, TokenKind, Tokenizer};
pub use validation::is_valid_city_name;

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::map::{City, Direction, DirectionKind, PlanetMap};

/// What the parser expects next. States past `City` carry the index of the
/// city being declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expectation {
    City,
    DirectionType(usize),
    EqualSign(usize, DirectionKind),
    DirectionValue(usize, DirectionKind),
}

/// A city as declared in the source, with the line it was declared on.
#[derive(Debug)]
struct ParsedCity {
    line: usize,
    city: City,
}

/// Single-use parser over one map source.
#[derive(Debug)]
pub struct Parser<'src> {
    tokenizer: Tokenizer<'src>,
    source_name: String,
    expectation: Expectation,
    cities: Vec<ParsedCity>,
    index: HashMap<String, usize>,
    started: bool,
    parsed: bool,
}

impl<'src> Parser<'src> {
    /// Creates a parser. `source_name` prefixes every reported position,
    /// usually the map's file name.
    pub fn new(source: &'src str, source_name: impl Into<String>) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
            source_name: source_name.into(),
            expectation: Expectation::City,
            cities: Vec::new(),
            index: HashMap::new(),
            started: false,
            parsed: false,
        }
    }

    /// Parses the whole source. Can only be called once.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        if self.started {
            return Err(ParseError::AlreadyParsed);
        }
        self.started = true;

        loop {
            let token = self.tokenizer.next_token();
            match token.kind {
                TokenKind::Eof => {
                    self.handle_eof(token)?;
                    break;
                }
                TokenKind::Newline => self.handle_newline(token)?,
                _ => self.handle_token(token)?,
            }
        }

        self.parsed = true;
        debug!(source = %self.source_name, cities = self.cities.len(), "map parsed");
        Ok(())
    }

    /// Builds the map out of a successful parse. Cities keep their
    /// declaration order.
    pub fn build_map(&self) -> Result<PlanetMap, ParseError> {
        if !self.parsed {
            return Err(ParseError::BuildBeforeParse);
        }
        Ok(self.cities.iter().map(|p| p.city.clone()).collect())
    }

    fn handle_token(&mut self, token: Token<'src>) -> Result<(), ParseError> {
        match self.expectation {
            Expectation::City => self.handle_city(token),
            Expectation::DirectionType(city) => self.handle_direction_type(city, token),
            Expectation::EqualSign(city, kind) => self.handle_equal_sign(city, kind, token),
            Expectation::DirectionValue(city, kind) => {
                self.handle_direction_value(city, kind, token)
            }
        }
    }

    /// A newline closes the current declaration, even one that stopped in
    /// the middle of a clause, as long as the city got a road.
    fn handle_newline(&mut self, token: Token<'src>) -> Result<(), ParseError> {
        if !self.current_city_has_direction() {
            return Err(self.error(token.end, SyntaxErrorKind::NewlineWithoutDirection));
        }
        self.expectation = Expectation::City;
        Ok(())
    }

    fn handle_eof(&mut self, token: Token<'src>) -> Result<(), ParseError> {
        match self.expectation {
            Expectation::EqualSign(..) | Expectation::DirectionValue(..) => {
                Err(self.error(token.end, SyntaxErrorKind::UnterminatedDirection))
            }
            Expectation::City | Expectation::DirectionType(_) => {
                if !self.current_city_has_direction() {
                    return Err(self.error(token.end, SyntaxErrorKind::EofWithoutDirection));
                }
                Ok(())
            }
        }
    }

    fn handle_city(&mut self, token: Token<'src>) -> Result<(), ParseError> {
        let name = token.text;
        if let Some(&i) = self.index.get(name) {
            let line = self.cities[i].line;
            return Err(self.error(
                token.end,
                SyntaxErrorKind::DuplicateCity {
                    city: name.to_string(),
                    line,
                },
            ));
        }
        if !is_valid_city_name(name) {
            return Err(self.error(token.end, SyntaxErrorKind::InvalidCityName(name.to_string())));
        }

        let i = self.cities.len();
        self.cities.push(ParsedCity {
            line: token.end.line,
            city: City::new(name),
        });
        self.index.insert(name.to_string(), i);
        self.expectation = Expectation::DirectionType(i);
        Ok(())
    }

    fn handle_direction_type(&mut self, i: usize, token: Token<'src>) -> Result<(), ParseError> {
        let Some(kind) = DirectionKind::from_keyword(token.text) else {
            return Err(self.error(
                token.end,
                SyntaxErrorKind::UnknownDirectionType(token.text.to_string()),
            ));
        };
        let city = &self.cities[i].city;
        if city.direction(kind).is_some() {
            let city = city.name().to_string();
            return Err(self.error(
                token.end,
                SyntaxErrorKind::DuplicateDirectionType { direction: kind, city },
            ));
        }

        self.expectation = Expectation::EqualSign(i, kind);
        Ok(())
    }

    fn handle_equal_sign(
        &mut self,
        i: usize,
        kind: DirectionKind,
        token: Token<'src>,
    ) -> Result<(), ParseError> {
        if token.text != "=" {
            return Err(self.error(
                token.end,
                SyntaxErrorKind::ExpectedEqualSign(token.text.to_string()),
            ));
        }
        self.expectation = Expectation::DirectionValue(i, kind);
        Ok(())
    }

    fn handle_direction_value(
        &mut self,
        i: usize,
        kind: DirectionKind,
        token: Token<'src>,
    ) -> Result<(), ParseError> {
        let target = token.text;
        // declared names passed the lexical check already
        if !self.index.contains_key(target) && !is_valid_city_name(target) {
            return Err(self.error(
                token.end,
                SyntaxErrorKind::InvalidDirectionValue(target.to_string()),
            ));
        }
        let city = &self.cities[i].city;
        if city.points_to(target) {
            let city = city.name().to_string();
            return Err(self.error(
                token.end,
                SyntaxErrorKind::DuplicateDirectionValue {
                    target: target.to_string(),
                    city,
                },
            ));
        }

        self.cities[i].city.add_direction(Direction::new(kind, target));
        self.expectation = Expectation::DirectionType(i);
        Ok(())
    }

    /// Whether the most recently declared city has at least one road. False
    /// when no city has been declared yet.
    fn current_city_has_direction(&self) -> bool {
        self.cities
            .last()
            .is_some_and(|p| !p.city.directions().is_empty())
    }

    fn error(&self, position: Position, kind: SyntaxErrorKind) -> ParseError {
        ParseError::Syntax {
            source_name: self.source_name.clone(),
            line: position.line,
            column: position.column,
            kind,
        }
    }
}

/// Parses and validates a map held in memory.
pub fn parse_map(source: &str, source_name: &str) -> Result<PlanetMap, ParseError> {
    let mut parser = Parser::new(source, source_name);
    parser.parse()?;
    parser.check_direction_values()?;
    parser.build_map()
}

/// Reads, parses and validates a map file. Errors are reported against the
/// file's base name.
pub fn load_map(path: impl AsRef<Path>) -> Result<PlanetMap, ParseError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_map(&source, &source_name)
}
