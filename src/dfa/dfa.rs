use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::errors::errors::{Error, ErrorImpl};
use crate::lexer::tokens::TokenKind;

use super::config::DfaSpec;

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^\\d+$").unwrap();
    static ref DECIMAL_PATTERN: Regex = Regex::new("^\\d+\\.\\d+$").unwrap();
}

#[derive(Debug)]
struct State {
    name: String,
    accepting: Option<TokenKind>,
    transitions: HashMap<char, usize>,
}

/// A deterministic finite automaton over named states, built once from a
/// [`DfaSpec`] and immutable afterwards. States are index-based; the
/// transition tables are the only way to reach them.
#[derive(Debug)]
pub struct Dfa {
    states: Vec<State>,
    start: Option<usize>,
    keywords: HashSet<String>,
    boolean_literals: HashSet<String>,
}

impl Dfa {
    /// Builds the automaton in three phases: create every named state, wire
    /// the transitions, then resolve accepting-state labels.
    ///
    /// Construction never fails. Transition or accepting rules naming an
    /// undeclared state are dropped. A label that is not a token kind is
    /// returned as an error and leaves its state non-accepting, so lexemes
    /// halting there classify as IDENTIFIER.
    pub fn build(spec: &DfaSpec) -> (Dfa, Vec<Error>) {
        let mut errors = vec![];

        let mut states: Vec<State> = vec![];
        let mut index: HashMap<String, usize> = HashMap::new();
        for name in &spec.states {
            if index.contains_key(name) {
                continue;
            }
            index.insert(name.clone(), states.len());
            states.push(State {
                name: name.clone(),
                accepting: None,
                transitions: HashMap::new(),
            });
        }

        for rule in &spec.transitions {
            let from = match index.get(&rule.from) {
                Some(from) => *from,
                None => continue,
            };
            let to = match index.get(&rule.to) {
                Some(to) => *to,
                None => continue,
            };
            // A later rule for the same (state, character) pair replaces
            // the earlier target.
            for c in rule.characters.chars() {
                states[from].transitions.insert(c, to);
            }
        }

        for rule in &spec.accepting {
            let state = match index.get(&rule.state) {
                Some(state) => *state,
                None => continue,
            };
            match TokenKind::from_label(&rule.label) {
                Some(kind) => states[state].accepting = Some(kind),
                None => errors.push(Error::new(
                    ErrorImpl::InvalidTokenLabel {
                        label: rule.label.clone(),
                    },
                    rule.line,
                )),
            }
        }

        // An undeclared start state leaves the automaton rejecting every
        // lexeme; the literal fast paths in classify still apply.
        let start = index.get(&spec.start_state).copied();

        debug!(
            "built automaton: {} states, {} transition rules, start {:?}",
            states.len(),
            spec.transitions.len(),
            start.map(|s| states[s].name.as_str())
        );

        let dfa = Dfa {
            states,
            start,
            keywords: spec.keywords.iter().cloned().collect(),
            boolean_literals: spec.boolean_literals.iter().cloned().collect(),
        };
        (dfa, errors)
    }

    /// Classifies a single lexeme. The literal rules run in fixed priority
    /// order before the automaton; a word in both the keyword and boolean
    /// sets resolves as KEYWORD.
    pub fn classify(&self, lexeme: &str) -> TokenKind {
        if self.keywords.contains(lexeme) {
            return TokenKind::Keyword;
        }
        if self.boolean_literals.contains(lexeme) {
            return TokenKind::Boolean;
        }
        if NUMBER_PATTERN.is_match(lexeme) {
            return TokenKind::Number;
        }
        if DECIMAL_PATTERN.is_match(lexeme) {
            return TokenKind::Decimal;
        }
        if lexeme.starts_with("--") {
            return TokenKind::Comment;
        }

        let mut state = match self.start {
            Some(start) => start,
            None => return TokenKind::Unknown,
        };
        for c in lexeme.chars() {
            match self.states[state].transitions.get(&c) {
                Some(next) => state = *next,
                None => return TokenKind::Unknown,
            }
        }
        self.states[state].accepting.unwrap_or(TokenKind::Identifier)
    }
}
