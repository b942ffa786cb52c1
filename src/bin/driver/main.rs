mod args;
mod driver_error;

use args::Args;
use clap::Parser;
use driver_error::DriverError;
use ministack::*;

use std::fs;

type DriverResult<T> = Result<T, DriverError>;

fn read_source(args: &Args) -> DriverResult<String> {
    let file_exists = fs::exists(&args.input)?;
    if !file_exists {
        let filename = args.input.to_string_lossy().to_string();
        return Err(DriverError::InputFileDoesNotExist(filename));
    }
    Ok(fs::read_to_string(&args.input)?)
}

fn report(errors: &[lexer::LexError]) {
    for err in errors {
        eprintln!("warning: {err}");
    }
}

fn tokenize(source: &str, args: &Args) -> lexer::Tokens {
    let lexer::Lexed { tokens, errors } = lexer::lex(source);
    report(&errors);

    if args.lex {
        for token in &tokens {
            println!(
                "Token Type: {}, Value: {}, Line: {}",
                token.kind_name(),
                token.get_inner(),
                token.get_line()
            );
        }
    }
    tokens
}

fn parse(tokens: &[lexer::LinedToken], args: &Args) -> DriverResult<ast::Ast> {
    let ast = parser::parse(tokens)?;
    if args.parse {
        println!("{ast:#?}");
    }
    Ok(ast)
}

fn gen_program(source: &str, args: &Args) -> DriverResult<Program> {
    if args.raw_labels {
        let tokens = tokenize(source, args);
        let ast = parse(&tokens, args)?;
        return Ok(translate::translate(ast));
    }

    let Translation {
        program,
        lex_errors,
    } = parse_and_translate(source)?;
    report(&lex_errors);
    Ok(program)
}

fn emit(program: &Program, args: &Args) -> DriverResult<()> {
    match &args.output {
        Some(path) => fs::write(path, format!("{program}\n"))?,
        None => println!("{program}"),
    }
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let source = read_source(&args)?;

    if args.lex || args.parse {
        let tokens = tokenize(&source, &args);
        if !args.lex {
            parse(&tokens, &args)?;
        }
        return Ok(());
    }

    let program = gen_program(&source, &args)?;
    emit(&program, &args)?;

    Ok(())
}
