use tracing::debug;

use crate::dfa::dfa::Dfa;
use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind};

const SEPARATORS: &str = ";(){}";

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Lexer {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            tokens: vec![],
        }
    }

    fn at(&self) -> char {
        self.chars[self.pos]
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.chars.len() && self.chars[self.pos] == '\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

/// Scans the whole source in one forward pass, longest-match per branch.
/// Whitespace and comments produce nothing; every other branch consumes at
/// least one character and emits exactly one token. Lexical failures become
/// UNKNOWN tokens, never errors, so the token stream is always complete.
pub fn tokenize(source: &str, dfa: &Dfa) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let current = lex.at();

        if current.is_whitespace() {
            lex.advance();
            continue;
        }

        if current == '-' && lex.peek() == Some('-') {
            skip_line_comment(&mut lex);
            continue;
        }

        if current == '=' && lex.peek() == Some('=') {
            skip_block_comment(&mut lex);
            continue;
        }

        if current == '"' {
            scan_string(&mut lex);
            continue;
        }

        if current.is_ascii_digit() {
            scan_number(&mut lex, dfa);
            continue;
        }

        if current.is_alphabetic() || current == '_' {
            scan_identifier(&mut lex, dfa);
            continue;
        }

        if SEPARATORS.contains(current) {
            let line = lex.line;
            lex.push(MK_TOKEN!(TokenKind::Separator, current.to_string(), line));
            lex.advance();
            continue;
        }

        // anything else is classified through the automaton one character
        // at a time
        let line = lex.line;
        let kind = dfa.classify(&current.to_string());
        lex.push(MK_TOKEN!(kind, current.to_string(), line));
        lex.advance();
    }

    debug!("produced {} tokens", lex.tokens.len());
    lex.tokens
}

fn skip_line_comment(lex: &mut Lexer) {
    while !lex.at_eof() && lex.at() != '\n' {
        lex.advance();
    }
}

/// Skips `== ... ==`. A missing close marker consumes the rest of the
/// input, and the final advance still steps past the end either way.
fn skip_block_comment(lex: &mut Lexer) {
    lex.advance();
    lex.advance();
    while lex.pos + 1 < lex.chars.len() && !(lex.at() == '=' && lex.peek() == Some('=')) {
        lex.advance();
    }
    lex.advance();
    lex.advance();
}

/// A terminated string keeps both quotes in its lexeme. An unterminated one
/// becomes a single UNKNOWN token holding the opening quote and everything
/// captured up to end of input.
fn scan_string(lex: &mut Lexer) {
    let line = lex.line;
    let mut literal = String::new();
    literal.push(lex.at());
    lex.advance();

    while !lex.at_eof() && lex.at() != '"' {
        literal.push(lex.at());
        lex.advance();
    }

    if !lex.at_eof() {
        literal.push('"');
        lex.advance();
        lex.push(MK_TOKEN!(TokenKind::String, literal, line));
    } else {
        lex.push(MK_TOKEN!(TokenKind::Unknown, literal, line));
    }
}

fn scan_number(lex: &mut Lexer, dfa: &Dfa) {
    let line = lex.line;
    let mut number = String::new();
    while !lex.at_eof() && lex.at().is_ascii_digit() {
        number.push(lex.at());
        lex.advance();
    }

    // a dot only extends the literal when at least one digit follows it
    if !lex.at_eof() && lex.at() == '.' && lex.peek().map_or(false, |c| c.is_ascii_digit()) {
        number.push('.');
        lex.advance();
        while !lex.at_eof() && lex.at().is_ascii_digit() {
            number.push(lex.at());
            lex.advance();
        }
    }

    let kind = dfa.classify(&number);
    lex.push(MK_TOKEN!(kind, number, line));
}

fn scan_identifier(lex: &mut Lexer, dfa: &Dfa) {
    let line = lex.line;
    let mut identifier = String::new();
    while !lex.at_eof() && (lex.at().is_alphanumeric() || lex.at() == '_') {
        identifier.push(lex.at());
        lex.advance();
    }

    let kind = dfa.classify(&identifier);
    lex.push(MK_TOKEN!(kind, identifier, line));
}
