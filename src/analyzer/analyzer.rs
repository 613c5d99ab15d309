use crate::errors::errors::{Diagnostics, Error, ErrorImpl};
use crate::lexer::tokens::{Token, TokenKind};
use crate::symbols::symbols::SymbolTable;

/// Runs the semantic pass over a token stream: declarations on `name = value`
/// forms (constant when preceded by the `assign` keyword), undeclared-use and
/// redeclaration checks, and `{`/`}` scope tracking. Violations go to the
/// diagnostics; nothing aborts the pass.
pub fn analyze(tokens: &[Token], table: &mut SymbolTable, diagnostics: &mut Diagnostics) {
    for line in group_by_line(tokens) {
        analyze_line(line, table, diagnostics);
    }
}

fn group_by_line(tokens: &[Token]) -> Vec<&[Token]> {
    let mut groups = vec![];
    let mut start = 0;
    for i in 1..=tokens.len() {
        if i == tokens.len() || tokens[i].line != tokens[start].line {
            groups.push(&tokens[start..i]);
            start = i;
        }
    }
    groups
}

fn analyze_line(tokens: &[Token], table: &mut SymbolTable, diagnostics: &mut Diagnostics) {
    for i in 0..tokens.len() {
        let token = &tokens[i];

        match token.kind {
            TokenKind::Unknown | TokenKind::Invalid => {
                diagnostics.report(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: token.lexeme.clone(),
                    },
                    token.line,
                ));
                continue;
            }
            TokenKind::Separator => {
                if token.lexeme == "{" {
                    table.enter_scope();
                } else if token.lexeme == "}" && !table.exit_scope() {
                    diagnostics.report(Error::new(ErrorImpl::ScopeUnderflow, token.line));
                }
                continue;
            }
            _ => {}
        }

        if token.kind != TokenKind::Identifier {
            continue;
        }

        // declaration form: identifier "=" value
        if is_assignment_operator(tokens.get(i + 1)) {
            match tokens.get(i + 2) {
                None => {
                    diagnostics.report(Error::new(
                        ErrorImpl::MissingAssignmentValue {
                            variable: token.lexeme.clone(),
                        },
                        token.line,
                    ));
                }
                Some(value) if matches!(value.kind, TokenKind::Unknown | TokenKind::Invalid) => {
                    diagnostics.report(Error::new(
                        ErrorImpl::InvalidAssignmentValue {
                            value: value.lexeme.clone(),
                            variable: token.lexeme.clone(),
                        },
                        token.line,
                    ));
                    continue;
                }
                Some(value) => {
                    let constant = i > 0 && tokens[i - 1].lexeme == "assign";
                    if !table.add(&token.lexeme, value.kind.label(), &value.lexeme, constant) {
                        diagnostics.report(Error::new(
                            ErrorImpl::DuplicateDeclaration {
                                variable: token.lexeme.clone(),
                            },
                            token.line,
                        ));
                    }
                }
            }
        }

        // Use check. A fresh declaration was inserted above at the same
        // index, so it does not report itself; identifiers sitting directly
        // after "=" are value positions and are skipped.
        let value_position = i > 0 && tokens[i - 1].lexeme == "=";
        if !value_position && table.lookup(&token.lexeme).is_none() {
            diagnostics.report(Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: token.lexeme.clone(),
                },
                token.line,
            ));
        }
    }
}

fn is_assignment_operator(token: Option<&Token>) -> bool {
    token.map_or(false, |t| t.lexeme == "=")
}
