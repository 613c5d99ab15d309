//! Integration tests for the whole front end.
//!
//! These tests verify that the complete pipeline works correctly from a
//! DFA specification and raw source text through tokenization, the
//! semantic pass, the symbol table, and the error report.

use halex::{
    analyzer::analyzer::analyze,
    dfa::{config::parse_spec, dfa::Dfa},
    errors::errors::Diagnostics,
    lexer::lexer::tokenize,
    lexer::tokens::TokenKind,
    symbols::symbols::SymbolTable,
};

const DFA_SPEC: &str = include_str!("fixtures/dfa.cfg");
const SAMPLE: &str = include_str!("fixtures/sample.ha");

fn build() -> Dfa {
    let (dfa, errors) = Dfa::build(&parse_spec(DFA_SPEC));
    assert!(errors.is_empty(), "fixture specification should be clean");
    dfa
}

#[test]
fn test_pipeline_clean_source() {
    let dfa = build();
    let tokens = tokenize(SAMPLE, &dfa);

    let mut table = SymbolTable::new();
    let mut diagnostics = Diagnostics::new();
    analyze(&tokens, &mut table, &mut diagnostics);

    assert!(!diagnostics.has_errors(), "{}", diagnostics.render_report());

    let max = table.lookup("max").unwrap();
    assert_eq!(max.ty, "NUMBER");
    assert_eq!(max.value, "100");
    assert!(max.constant);

    // the outer `count` keeps its value, the shadowing frame was popped
    assert_eq!(table.lookup("count").unwrap().value, "0");
    assert!(table.lookup("done").is_none());
}

#[test]
fn test_pipeline_token_stream() {
    let dfa = build();
    let tokens = tokenize(SAMPLE, &dfa);

    assert_eq!(tokens.len(), 22);

    // line comment and block comment produce nothing
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].lexeme, "assign");
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "max");
    assert_eq!(tokens[2].kind, TokenKind::Operator);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Separator);

    let open_brace = tokens.iter().find(|t| t.lexeme == "{").unwrap();
    assert_eq!(open_brace.kind, TokenKind::Separator);
    assert_eq!(open_brace.line, 6);

    let last = tokens.last().unwrap();
    assert_eq!(last.lexeme, ";");
    assert_eq!(last.line, 10);
}

#[test]
fn test_pipeline_reports_semantic_errors() {
    let dfa = build();
    let source = "print ghost;\ncount = 1;\ncount = 2;";
    let tokens = tokenize(source, &dfa);

    let mut table = SymbolTable::new();
    let mut diagnostics = Diagnostics::new();
    analyze(&tokens, &mut table, &mut diagnostics);

    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.errors().len(), 2);
    assert_eq!(diagnostics.errors()[0].get_error_name(), "VariableNotDeclared");
    assert_eq!(diagnostics.errors()[0].get_line(), 1);
    assert_eq!(diagnostics.errors()[1].get_error_name(), "DuplicateDeclaration");
    assert_eq!(diagnostics.errors()[1].get_line(), 3);

    let report = diagnostics.render_report();
    assert!(report.contains("Error on line 1: undeclared variable \"ghost\" used"));
    assert!(report.contains("Error on line 3: duplicate declaration of \"count\""));
}

#[test]
fn test_pipeline_surfaces_lexical_errors_as_tokens() {
    let dfa = build();
    let tokens = tokenize("value = \"unclosed", &dfa);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].kind, TokenKind::Unknown);
    assert_eq!(tokens[2].lexeme, "\"unclosed");

    let mut table = SymbolTable::new();
    let mut diagnostics = Diagnostics::new();
    analyze(&tokens, &mut table, &mut diagnostics);

    assert_eq!(diagnostics.errors()[0].get_error_name(), "InvalidAssignmentValue");
}

#[test]
fn test_degraded_specification_still_scans() {
    let spec_text = "\
START_STATE: start
STATES: start, ident, op
start -> ident:abcxyz
ident -> ident:abcxyz
start -> op:=
ident -> IDENTIFIER
op -> SOMETHING_ELSE
";
    let (dfa, errors) = Dfa::build(&parse_spec(spec_text));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "InvalidTokenLabel");

    // the degraded state classifies as IDENTIFIER instead of aborting
    let tokens = tokenize("abc = xyz", &dfa);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "=");
}

#[test]
fn test_pipeline_is_deterministic() {
    let first_dfa = build();
    let second_dfa = build();

    let first = tokenize(SAMPLE, &first_dfa);
    let second = tokenize(SAMPLE, &second_dfa);
    assert_eq!(first, second);
}
