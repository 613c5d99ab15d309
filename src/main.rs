use std::{env, fs::read_to_string};

use halex::{
    analyzer::analyzer::analyze,
    dfa::{config::parse_spec, dfa::Dfa},
    errors::errors::Diagnostics,
    lexer::lexer::tokenize,
    symbols::symbols::SymbolTable,
};
use tracing::warn;

fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        panic!("Incorrect arguments provided! Usage: halex <dfa-spec> <source-file>");
    }

    let spec_text = read_to_string(&args[1]).expect("Failed to read DFA specification!");
    let source = read_to_string(&args[2]).expect("Failed to read source file!");

    let spec = parse_spec(&spec_text);
    let (dfa, spec_errors) = Dfa::build(&spec);
    for error in &spec_errors {
        warn!("DFA specification: {}", error);
    }

    let tokens = tokenize(&source, &dfa);
    for token in &tokens {
        token.debug();
    }

    let mut table = SymbolTable::new();
    let mut diagnostics = Diagnostics::new();
    analyze(&tokens, &mut table, &mut diagnostics);

    println!("\nFinal Symbol Table:");
    table.print_table();

    println!("\nError Report:");
    diagnostics.print_report();
}
