//! Pseudo-assembly emission using [Display]
//!
//! Implements [Display] for expressions, instructions and [Program], so a translated
//! program can be rendered with [to_string] or used in any formatting context.
//!
//! Expressions render in the operand order the downstream stack evaluator expects:
//! right operand, left operand, operator. Equality is the exception and keeps
//! left-to-right order.
//!
//! [Display]: https://doc.rust-lang.org/std/fmt/trait.Display.html
//! [to_string]: https://doc.rust-lang.org/std/string/trait.ToString.html#tymethod.to_string


use crate::ast::*;
use crate::translate::{Instruction, Label, Program};

use std::fmt;

/// Suffix of the last line of every program.
pub const END_MARKER: &str = " END";

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int => write!(f, "INT"),
            Self::Double => write!(f, "DOUBLE"),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.var_type, self.name)?;
        for dimension in &self.dimensions {
            write!(f, "[{dimension}]")?;
        }
        Ok(())
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Constant(c) => write!(f, "{c}"),
            Self::Var(var) => write!(f, "{var}"),
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for index in &self.indices {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

impl fmt::Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int(c) => write!(f, "{c}"),
            Self::Double { spelling, .. } => write!(f, "{spelling}"),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Substract => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::LessThan => write!(f, "<"),
            Self::LessOrEqual => write!(f, "<="),
            Self::GreaterThan => write!(f, ">"),
            Self::GreaterOrEqual => write!(f, ">="),
            Self::IsEqual => write!(f, "=="),
            Self::LogicalAnd => write!(f, "&"),
            Self::LogicalOr => write!(f, "|"),
        }
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Constant(c) => write!(f, "{c}"),
            Self::Var(var) => write!(f, "{var}"),
            Self::Unary(UnaryOp::Negate, inner) => write!(f, "0 {inner} -"),
            Self::Unary(UnaryOp::LogicalNot, inner) => write!(f, "{inner} NOT"),
            Self::Binary(op @ BinaryOp::IsEqual, left, right) => write!(f, "{left} {right} {op}"),
            Self::Binary(op, left, right) => write!(f, "{right} {left} {op}"),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Internal(n) => write!(f, "LABEL{n}"),
            Self::Normalized(n) => write!(f, "L{n}"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Declare(declaration) => write!(f, "{declaration}"),
            Self::Eval(exp) => write!(f, "EVAL {exp}"),
            Self::Assign(target) => write!(f, "ASS {target}"),
            Self::Print(exp) => write!(f, "PRINT {exp}"),
            Self::Jump(label) => write!(f, "GOTO {label}"),
            Self::JumpIfFalse(label) => write!(f, "GOTOF {label}"),
            Self::Label(label) => write!(f, "{label}:"),
            Self::Labeled(label, inner) => write!(f, "{label}: {inner}"),
        }
    }
}

impl Program {
    /// Rendered instructions, one per line, the last one terminated by [END_MARKER].
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.instructions.iter().map(ToString::to_string).collect();
        if let Some(last) = lines.last_mut() {
            last.push_str(END_MARKER);
        }
        lines
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
