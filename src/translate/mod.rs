//! Syntax-directed translation of the [Ast] into label-addressed pseudo-assembly.
//!
//! Every statement translates to an owned list of instructions that the caller
//! concatenates. Labels come from a [LabelAllocator] owned by a single
//! [translate] call, and are handed out after the nested statements of a
//! construct are translated, so inner constructs always get lower numbers.


use crate::ast::*;

pub type Instructions = Vec<Instruction>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Label {
    /// Raw counter value, printed as `LABELn`.
    Internal(u64),
    /// Sequential name given by [relabel](crate::relabel::relabel), printed as `Ln`.
    Normalized(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Declare(Declaration),
    Eval(Exp),
    Assign(Var),
    Print(Exp),
    Jump(Label),
    JumpIfFalse(Label),
    Label(Label),
    Labeled(Label, Box<Instruction>),
}

/// Translated program: declarations first, then statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub instructions: Instructions,
}

/// Monotonic label counter. Slots are never reused, and some are never referenced.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    count: u64,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target of the false branch of an `if` without `else`. Uses two slots.
    pub fn if_label(&mut self) -> Label {
        let end = Label::Internal(self.count + 1);
        self.count += 2;
        end
    }

    /// Else-target and end of an `if`/`else`. Uses three slots.
    pub fn if_else_labels(&mut self) -> (Label, Label) {
        let els = Label::Internal(self.count + 1);
        let end = Label::Internal(self.count + 2);
        self.count += 3;
        (els, end)
    }

    /// Loop top and loop exit of a `while`.
    pub fn while_labels(&mut self) -> (Label, Label) {
        let start = Label::Internal(self.count);
        let end = Label::Internal(self.count + 1);
        self.count += 2;
        (start, end)
    }
}

impl Instruction {
    /// Every label the instruction mentions, in textual order.
    pub fn labels(&self) -> Vec<Label> {
        match self {
            Self::Jump(label) | Self::JumpIfFalse(label) | Self::Label(label) => vec![*label],
            Self::Labeled(label, inner) => {
                let mut labels = vec![*label];
                labels.extend(inner.labels());
                labels
            }
            Self::Declare(_) | Self::Eval(_) | Self::Assign(_) | Self::Print(_) => Vec::new(),
        }
    }
}

fn translate_if(
    condition: Exp,
    then: Statement,
    els: Option<Statement>,
    labels: &mut LabelAllocator,
) -> Instructions {
    let then = translate_statement(then, labels);
    let mut instructions = vec![Instruction::Eval(condition)];

    match els {
        Some(els) => {
            let els = translate_statement(els, labels);
            let (else_label, end) = labels.if_else_labels();
            instructions.push(Instruction::JumpIfFalse(else_label));
            instructions.extend(then);
            instructions.push(Instruction::Label(else_label));
            instructions.extend(els);
            instructions.push(Instruction::Label(end));
        }
        None => {
            let end = labels.if_label();
            instructions.push(Instruction::JumpIfFalse(end));
            instructions.extend(then);
            instructions.push(Instruction::Label(end));
        }
    }

    instructions
}

fn translate_while(condition: Exp, body: Statement, labels: &mut LabelAllocator) -> Instructions {
    let body = translate_statement(body, labels);
    let (start, end) = labels.while_labels();

    let eval = Instruction::Eval(condition);
    let mut instructions = vec![
        Instruction::Labeled(start, Box::new(eval)),
        Instruction::JumpIfFalse(end),
    ];
    instructions.extend(body);
    instructions.push(Instruction::Jump(start));
    instructions.push(Instruction::Label(end));

    instructions
}

pub fn translate_statement(statement: Statement, labels: &mut LabelAllocator) -> Instructions {
    match statement {
        Statement::Assign(target, exp) => {
            vec![Instruction::Eval(exp), Instruction::Assign(target)]
        }
        Statement::Print(exp) => vec![Instruction::Print(exp)],
        Statement::Compound(statements) => translate_block(statements, labels),
        Statement::If {
            condition,
            then,
            els,
        } => translate_if(condition, *then, els.map(|els| *els), labels),
        Statement::While { condition, body } => translate_while(condition, *body, labels),
    }
}

fn translate_block(statements: Vec<Statement>, labels: &mut LabelAllocator) -> Instructions {
    statements
        .into_iter()
        .flat_map(|statement| translate_statement(statement, labels))
        .collect()
}

/// Translates a parsed program. Labels keep their raw `LABELn` numbering.
pub fn translate(ast: Ast) -> Program {
    let Ast {
        declarations,
        statements,
    } = ast;
    let mut labels = LabelAllocator::new();

    let mut instructions: Instructions = declarations
        .into_iter()
        .map(Instruction::Declare)
        .collect();
    instructions.append(&mut translate_block(statements, &mut labels));

    Program { instructions }
}
