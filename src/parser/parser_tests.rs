use super::*;
use crate::lexer;

fn parse_expression(input: &str) -> Result<Exp> {
    let tokens = lexer::lex(input).tokens;
    let mut cursor = Cursor::new(&tokens);
    parse_exp(&mut cursor, 0)
}

fn parse_source(input: &str) -> Result<Ast> {
    let tokens = lexer::lex(input).tokens;
    parse(&tokens)
}

fn var(name: &str) -> Exp {
    Exp::var(name)
}

#[test]
fn test_expression_precedense_1() {
    let parsed = parse_expression("1 * 2 - 3 * (4 + 5)");
    let expected = Exp::binary(
        BinaryOp::Substract,
        Exp::binary(BinaryOp::Multiply, Exp::int(1), Exp::int(2)),
        Exp::binary(
            BinaryOp::Multiply,
            Exp::int(3),
            Exp::binary(BinaryOp::Add, Exp::int(4), Exp::int(5)),
        ),
    );
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_additive_is_left_associative() {
    let parsed = parse_expression("a - b - c / d / e");
    let expected = Exp::binary(
        BinaryOp::Substract,
        Exp::binary(BinaryOp::Substract, var("a"), var("b")),
        Exp::binary(
            BinaryOp::Div,
            Exp::binary(BinaryOp::Div, var("c"), var("d")),
            var("e"),
        ),
    );
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_relational_is_lowest() {
    let parsed = parse_expression("a + 1 >= b * 2");
    let expected = Exp::binary(
        BinaryOp::GreaterOrEqual,
        Exp::binary(BinaryOp::Add, var("a"), Exp::int(1)),
        Exp::binary(BinaryOp::Multiply, var("b"), Exp::int(2)),
    );
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_reversed_spellings_of_relational_ops() {
    let le = parse_expression("a =< b");
    let ge = parse_expression("a => b");
    assert_eq!(Ok(Exp::binary(BinaryOp::LessOrEqual, var("a"), var("b"))), le);
    assert_eq!(Ok(Exp::binary(BinaryOp::GreaterOrEqual, var("a"), var("b"))), ge);
}

#[test]
fn test_unary_minus_binds_tightest() {
    let parsed = parse_expression("-a * b");
    let expected = Exp::binary(
        BinaryOp::Multiply,
        Exp::unary(UnaryOp::Negate, var("a")),
        var("b"),
    );
    assert_eq!(Ok(expected), parsed);

    let parsed = parse_expression("- - a");
    let expected = Exp::unary(UnaryOp::Negate, Exp::unary(UnaryOp::Negate, var("a")));
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_greedy_operators_take_the_rest() {
    let parsed = parse_expression("a + b & c + d");
    let expected = Exp::binary(
        BinaryOp::Add,
        var("a"),
        Exp::binary(
            BinaryOp::LogicalAnd,
            var("b"),
            Exp::binary(BinaryOp::Add, var("c"), var("d")),
        ),
    );
    assert_eq!(Ok(expected), parsed);

    let parsed = parse_expression("a == b | c");
    let expected = Exp::binary(
        BinaryOp::IsEqual,
        var("a"),
        Exp::binary(BinaryOp::LogicalOr, var("b"), var("c")),
    );
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_greedy_operator_after_negation() {
    let parsed = parse_expression("-a & b");
    let expected = Exp::unary(
        UnaryOp::Negate,
        Exp::binary(BinaryOp::LogicalAnd, var("a"), var("b")),
    );
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_logical_not_covers_rest() {
    let parsed = parse_expression("!a < b");
    let expected = Exp::unary(
        UnaryOp::LogicalNot,
        Exp::binary(BinaryOp::LessThan, var("a"), var("b")),
    );
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_parenthesized_group_stops_greed() {
    let parsed = parse_expression("(a & b) * c");
    let expected = Exp::binary(
        BinaryOp::Multiply,
        Exp::binary(BinaryOp::LogicalAnd, var("a"), var("b")),
        var("c"),
    );
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_relational_does_not_associate() {
    let err = parse_expression("a < b + 1 < c").unwrap_err();
    assert_eq!(InnerParseError::UnexpectedToken(Token::IsLessThan), err.inner);
    assert_eq!(10, err.get_pos());

    let parsed = parse_expression("(a < b) < c");
    assert!(parsed.is_ok());
}

#[test]
fn test_indexed_variables() {
    let parsed = parse_expression("m[i][2] + v[w[0]]");
    let m = Var::new("m")
        .index(Index::Var(Var::new("i")))
        .index(Index::Constant("2".into()));
    let w = Var::new("w").index(Index::Constant("0".into()));
    let v = Var::new("v").index(Index::Var(w));
    let expected = Exp::binary(BinaryOp::Add, Exp::Var(m), Exp::Var(v));
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_index_must_be_constant_or_variable() {
    let err = parse_expression("a[1 + 2]").unwrap_err();
    let expected = InnerParseError::ExpectedButGot(Token::CloseSquare, Token::Plus);
    assert_eq!(expected, err.inner);
}

#[test]
fn test_declarations() {
    let ast = parse_source("int a, b[2][3];\ndouble c;\nprint a;").unwrap();
    let expected = vec![
        Declaration {
            var_type: Type::Int,
            name: "a".into(),
            dimensions: vec![],
        },
        Declaration {
            var_type: Type::Int,
            name: "b".into(),
            dimensions: vec![2, 3],
        },
        Declaration {
            var_type: Type::Double,
            name: "c".into(),
            dimensions: vec![],
        },
    ];
    assert_eq!(expected, ast.declarations);
    assert_eq!(vec![Statement::Print(var("a"))], ast.statements);
}

#[test]
fn test_declaration_dimension_must_fit() {
    let err = parse_source("int a[99999999999999999999]; print a;").unwrap_err();
    let expected = InnerParseError::DimensionTooLarge("99999999999999999999".into());
    assert_eq!(expected, err.inner);
    assert_eq!((1, 6), (err.get_ln(), err.get_pos()));
    assert_eq!(None, err.unexpected_token());
}

#[test]
fn test_integer_operands_keep_spelling() {
    let parsed = parse_expression("007 * 100000000000000000000000");
    let expected = Exp::binary(
        BinaryOp::Multiply,
        Exp::int("007"),
        Exp::int("100000000000000000000000"),
    );
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_declaration_dimension_must_be_constant() {
    let err = parse_source("int a[n]; print a;").unwrap_err();
    let expected = InnerParseError::ExpectedConstantButGot(Token::Identifier("n".into()));
    assert_eq!(expected, err.inner);
}

#[test]
fn test_declaration_after_statement() {
    let err = parse_source("print 1; int a;").unwrap_err();
    assert_eq!(InnerParseError::UnexpectedToken(Token::Int), err.inner);
    assert_eq!((1, 9), (err.get_ln(), err.get_pos()));
}

#[test]
fn test_dangling_else_binds_to_inner_if() {
    let ast = parse_source("if (a) if (b) print 1; else print 2;").unwrap();
    let inner = Statement::If {
        condition: var("b"),
        then: Box::new(Statement::Print(Exp::int(1))),
        els: Some(Box::new(Statement::Print(Exp::int(2)))),
    };
    let expected = Statement::If {
        condition: var("a"),
        then: Box::new(inner),
        els: None,
    };
    assert_eq!(vec![expected], ast.statements);
}

#[test]
fn test_while_with_block() {
    let ast = parse_source("while (i < 3) { print i; i = i + 1; }").unwrap();
    let body = Statement::Compound(vec![
        Statement::Print(var("i")),
        Statement::Assign(
            Var::new("i"),
            Exp::binary(BinaryOp::Add, var("i"), Exp::int(1)),
        ),
    ]);
    let expected = Statement::While {
        condition: Exp::binary(BinaryOp::LessThan, var("i"), Exp::int(3)),
        body: Box::new(body),
    };
    assert_eq!(vec![expected], ast.statements);
}

#[test]
fn test_missing_close_paranth() {
    let err = parse_source("int x;\nif (x < 1 print x;").unwrap_err();
    let expected = InnerParseError::ExpectedButGot(Token::CloseParanth, Token::Print);
    assert_eq!(expected, err.inner);
    assert_eq!(2, err.get_ln());
    assert_eq!(17, err.get_pos());
    assert_eq!(Some(&Token::Print), err.unexpected_token());
}

#[test]
fn test_empty_block() {
    let err = parse_source("{ }").unwrap_err();
    assert_eq!(InnerParseError::UnexpectedToken(Token::CloseCurly), err.inner);
}

#[test]
fn test_program_needs_a_statement() {
    let err = parse_source("int a;").unwrap_err();
    assert_eq!(InnerParseError::UnexpectedEof, err.inner);
    assert_eq!(None, err.unexpected_token());

    let err = parse_source("").unwrap_err();
    assert_eq!((1, 0), (err.get_ln(), err.get_pos()));
}

#[test]
fn test_unterminated_block() {
    let err = parse_source("{ print 1;").unwrap_err();
    assert_eq!(InnerParseError::UnexpectedEof, err.inner);
}
