mod cursor;
mod parse_error;
#[cfg(test)]
mod parser_tests;

use crate::ast::*;
use crate::lexer::{LinedToken, Token};
use cursor::Cursor;
pub use parse_error::{InnerParseError, ParseError, Result};

/// Binding power of the operators that have a declared precedence.
/// All of them are left-associative except the relational ones, which do not associate.
fn get_prec(token: &Token) -> Option<u64> {
    match token {
        Token::Asterisk | Token::FSlash => Some(30),
        Token::Plus | Token::Hyphen => Some(20),
        t if t.is_relational() => Some(10),
        _ => None,
    }
}

impl TryFrom<&Token> for BinaryOp {
    type Error = InnerParseError;
    fn try_from(value: &Token) -> std::result::Result<Self, InnerParseError> {
        match value {
            Token::Plus => Ok(Self::Add),
            Token::Hyphen => Ok(Self::Substract),
            Token::Asterisk => Ok(Self::Multiply),
            Token::FSlash => Ok(Self::Div),
            Token::IsLessThan => Ok(Self::LessThan),
            Token::IsGreaterThan => Ok(Self::GreaterThan),
            Token::IsLessThanOrEqual | Token::EqualOrLess => Ok(Self::LessOrEqual),
            Token::IsGreaterThanOrEqual | Token::EqualOrGreater => Ok(Self::GreaterOrEqual),
            Token::IsEqual => Ok(Self::IsEqual),
            Token::LogicalAnd => Ok(Self::LogicalAnd),
            Token::LogicalOr => Ok(Self::LogicalOr),
            _ => Err(InnerParseError::UnexpectedToken(value.clone())),
        }
    }
}

fn parse_identifier(cursor: &mut Cursor) -> Result<Identifier> {
    let (ln, pos) = cursor.get_location();
    let next = cursor.next_or_error()?;
    if let Token::Identifier(name) = next {
        Ok(name.to_owned())
    } else {
        Err(InnerParseError::ExpectedIdentifierButGot(next.clone()).set_location(ln, pos))
    }
}

fn parse_dimension(cursor: &mut Cursor) -> Result<u64> {
    let (ln, pos) = cursor.get_location();
    let next = cursor.next_or_error()?;
    let Token::Constant(spelling) = next else {
        return Err(InnerParseError::ExpectedConstantButGot(next.clone()).set_location(ln, pos));
    };
    spelling.parse().map_err(|_| {
        let err = InnerParseError::DimensionTooLarge(spelling.clone());
        err.set_location(ln, pos)
    })
}

fn parse_type(cursor: &mut Cursor) -> Result<Type> {
    let (ln, pos) = cursor.get_location();
    let next = cursor.next_or_error()?;
    match next {
        Token::Int => Ok(Type::Int),
        Token::Double => Ok(Type::Double),
        _ => Err(InnerParseError::UnexpectedToken(next.clone()).set_location(ln, pos)),
    }
}

fn parse_dimensions(cursor: &mut Cursor) -> Result<Vec<u64>> {
    let mut dimensions = Vec::new();
    while cursor.bump_if(&Token::OpenSquare) {
        let size = parse_dimension(cursor)?;
        cursor.expect(&Token::CloseSquare)?;
        dimensions.push(size);
    }
    Ok(dimensions)
}

fn parse_declaration(cursor: &mut Cursor) -> Result<Vec<Declaration>> {
    let var_type = parse_type(cursor)?;
    let mut declarations = Vec::new();

    loop {
        let name = parse_identifier(cursor)?;
        let dimensions = parse_dimensions(cursor)?;
        declarations.push(Declaration {
            var_type,
            name,
            dimensions,
        });
        if !cursor.bump_if(&Token::Comma) {
            break;
        }
    }

    cursor.expect(&Token::Semicolon)?;
    Ok(declarations)
}

fn parse_index(cursor: &mut Cursor) -> Result<Index> {
    let peek = cursor.peek_or_error()?;
    match peek {
        Token::Constant(c) => {
            cursor.bump();
            Ok(Index::Constant(c.clone()))
        }
        Token::Identifier(_) => parse_var(cursor).map(Index::Var),
        _ => Err(cursor.error_here(InnerParseError::UnexpectedToken(peek.clone()))),
    }
}

fn parse_var(cursor: &mut Cursor) -> Result<Var> {
    let name = parse_identifier(cursor)?;
    let mut indices = Vec::new();
    while cursor.bump_if(&Token::OpenSquare) {
        let index = parse_index(cursor)?;
        cursor.expect(&Token::CloseSquare)?;
        indices.push(index);
    }
    Ok(Var { name, indices })
}

fn parse_factor_subexp(cursor: &mut Cursor) -> Result<Exp> {
    cursor.expect(&Token::OpenParanth)?;
    let exp = parse_exp(cursor, 0)?;
    cursor.expect(&Token::CloseParanth)?;
    Ok(exp)
}

// Unary minus binds tighter than any binary operator: only the next factor is negated.
fn parse_negation(cursor: &mut Cursor) -> Result<Exp> {
    cursor.expect(&Token::Hyphen)?;
    let inner = parse_factor(cursor)?;
    Ok(Exp::unary(UnaryOp::Negate, inner))
}

// `!` has no precedence of its own, so it covers the rest of the expression.
fn parse_logical_not(cursor: &mut Cursor) -> Result<Exp> {
    cursor.expect(&Token::LogicalNot)?;
    let inner = parse_exp(cursor, 0)?;
    Ok(Exp::unary(UnaryOp::LogicalNot, inner))
}

/// `&`, `|` and `==` never give way to a pending operator: they take the
/// operand right before them and everything after them.
fn parse_greedy_binary(cursor: &mut Cursor, left: Exp) -> Result<Exp> {
    let Some(next) = cursor.peek().filter(|t| t.is_greedy_binaryop()) else {
        return Ok(left);
    };
    let op = BinaryOp::try_from(next).map_err(|err| cursor.error_here(err))?;
    cursor.bump();
    let right = parse_exp(cursor, 0)?;
    Ok(Exp::binary(op, left, right))
}

fn parse_factor(cursor: &mut Cursor) -> Result<Exp> {
    let peek = cursor.peek_or_error()?;
    let operand = match peek {
        Token::Identifier(_) => parse_var(cursor).map(Exp::Var)?,
        Token::OpenParanth => parse_factor_subexp(cursor)?,
        Token::Constant(c) => {
            cursor.bump();
            Exp::Constant(Const::Int(c.clone()))
        }
        Token::FPDouble { value, spelling } => {
            cursor.bump();
            Exp::Constant(Const::Double {
                value: *value,
                spelling: spelling.clone(),
            })
        }
        Token::Hyphen => return parse_negation(cursor),
        Token::LogicalNot => return parse_logical_not(cursor),
        _ => return Err(cursor.error_here(InnerParseError::UnexpectedToken(peek.clone()))),
    };

    parse_greedy_binary(cursor, operand)
}

fn parse_exp(cursor: &mut Cursor, min_prec: u64) -> Result<Exp> {
    let mut left = parse_factor(cursor)?;
    let mut after_relational = false;

    while let Some(next_token) = cursor.peek() {
        let Some(prec) = get_prec(next_token).filter(|&prec| prec >= min_prec) else {
            break;
        };
        let op = BinaryOp::try_from(next_token).map_err(|err| cursor.error_here(err))?;
        if after_relational && op.is_relational() {
            let err = InnerParseError::UnexpectedToken(next_token.clone());
            return Err(cursor.error_here(err));
        }
        cursor.bump();

        let right = parse_exp(cursor, prec + 1)?;
        left = Exp::binary(op, left, right);
        after_relational = op.is_relational();
    }

    Ok(left)
}

fn parse_condition(cursor: &mut Cursor) -> Result<Exp> {
    cursor.expect(&Token::OpenParanth)?;
    let condition = parse_exp(cursor, 0)?;
    cursor.expect(&Token::CloseParanth)?;
    Ok(condition)
}

fn parse_if(cursor: &mut Cursor) -> Result<Statement> {
    cursor.expect(&Token::If)?;
    let condition = parse_condition(cursor)?;
    let then = parse_statement(cursor).map(Box::new)?;
    let else_present = cursor.bump_if(&Token::Else);
    let els = else_present
        .then(|| parse_statement(cursor))
        .transpose()?
        .map(Box::new);

    Ok(Statement::If {
        condition,
        then,
        els,
    })
}

fn parse_while(cursor: &mut Cursor) -> Result<Statement> {
    cursor.expect(&Token::While)?;
    let condition = parse_condition(cursor)?;
    let body = parse_statement(cursor).map(Box::new)?;

    Ok(Statement::While { condition, body })
}

fn parse_print(cursor: &mut Cursor) -> Result<Statement> {
    cursor.expect(&Token::Print)?;
    let exp = parse_exp(cursor, 0)?;
    cursor.expect(&Token::Semicolon)?;
    Ok(Statement::Print(exp))
}

fn parse_assignment(cursor: &mut Cursor) -> Result<Statement> {
    let target = parse_var(cursor)?;
    cursor.expect(&Token::Assign)?;
    let exp = parse_exp(cursor, 0)?;
    cursor.expect(&Token::Semicolon)?;
    Ok(Statement::Assign(target, exp))
}

fn parse_block(cursor: &mut Cursor) -> Result<Vec<Statement>> {
    cursor.expect(&Token::OpenCurly)?;
    let mut statements = vec![parse_statement(cursor)?];

    while !cursor.bump_if(&Token::CloseCurly) {
        let statement = parse_statement(cursor)?;
        statements.push(statement);
    }

    Ok(statements)
}

fn parse_statement(cursor: &mut Cursor) -> Result<Statement> {
    let peek = cursor.peek_or_error()?;
    match peek {
        Token::If => parse_if(cursor),
        Token::While => parse_while(cursor),
        Token::Print => parse_print(cursor),
        Token::Identifier(_) => parse_assignment(cursor),
        Token::OpenCurly => parse_block(cursor).map(Statement::Compound),
        _ => Err(cursor.error_here(InnerParseError::UnexpectedToken(peek.clone()))),
    }
}

/// Parses declarations followed by at least one statement.
///
/// Fails on the first token that does not fit the grammar; there is no recovery.
pub fn parse(tokens: &[LinedToken]) -> Result<Ast> {
    let mut cursor = Cursor::new(tokens);
    let mut declarations = Vec::new();

    while cursor.peek().is_some_and(Token::is_type) {
        let mut declared = parse_declaration(&mut cursor)?;
        declarations.append(&mut declared);
    }

    let mut statements = vec![parse_statement(&mut cursor)?];
    while !cursor.at_end() {
        let statement = parse_statement(&mut cursor)?;
        statements.push(statement);
    }

    Ok(Ast {
        declarations,
        statements,
    })
}
