pub type Identifier = String;

/// Whole program: every declared variable, then the statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    pub declarations: Vec<Declaration>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Type {
    Int,
    Double,
}

/// One declared variable. `int a, b[3];` yields two of these.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Declaration {
    pub var_type: Type,
    pub name: Identifier,
    pub dimensions: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    If {
        condition: Exp,
        then: Box<Statement>,
        els: Option<Box<Statement>>,
    },
    While {
        condition: Exp,
        body: Box<Statement>,
    },
    Compound(Vec<Statement>),
    Print(Exp),
    Assign(Var, Exp),
}

/// Variable reference, optionally indexed: `a`, `m[i][2]`, `v[w[0]]`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Var {
    pub name: Identifier,
    pub indices: Vec<Index>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Index {
    Constant(String),
    Var(Var),
}

/// Literal operand. Both kinds keep their source spelling.
#[derive(Debug, Clone, PartialEq)]
pub enum Const {
    Int(String),
    Double { value: f64, spelling: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Exp {
    Constant(Const),
    Var(Var),
    Unary(UnaryOp, Box<Exp>),
    Binary(BinaryOp, Box<Exp>, Box<Exp>),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UnaryOp {
    Negate,
    LogicalNot,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BinaryOp {
    Add,
    Substract,
    Multiply,
    Div,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    IsEqual,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOp {
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Self::LessThan | Self::LessOrEqual | Self::GreaterThan | Self::GreaterOrEqual
        )
    }
}

impl Var {
    pub fn new(name: impl Into<Identifier>) -> Self {
        Self {
            name: name.into(),
            indices: Vec::new(),
        }
    }

    #[must_use]
    pub fn index(mut self, index: Index) -> Self {
        self.indices.push(index);
        self
    }
}

impl Exp {
    pub fn binary(op: BinaryOp, left: Exp, right: Exp) -> Self {
        Self::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn unary(op: UnaryOp, inner: Exp) -> Self {
        Self::Unary(op, Box::new(inner))
    }

    pub fn var(name: impl Into<Identifier>) -> Self {
        Self::Var(Var::new(name))
    }

    pub fn int(c: impl ToString) -> Self {
        Self::Constant(Const::Int(c.to_string()))
    }
}
