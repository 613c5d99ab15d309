use std::fmt::Display;

/// The closed set of lexical categories a lexeme can be classified into.
///
/// Accepting states in a DFA specification name one of these (matched
/// case-insensitively); every other label is rejected by `from_label`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Boolean,
    Number,
    Decimal,
    String,
    Identifier,
    Separator,
    Comment,
    Operator,
    Unknown,
    Invalid,
}

impl TokenKind {
    pub fn from_label(label: &str) -> Option<TokenKind> {
        match label.to_ascii_uppercase().as_str() {
            "KEYWORD" => Some(TokenKind::Keyword),
            "BOOLEAN" => Some(TokenKind::Boolean),
            "NUMBER" => Some(TokenKind::Number),
            "DECIMAL" => Some(TokenKind::Decimal),
            "STRING" => Some(TokenKind::String),
            "IDENTIFIER" => Some(TokenKind::Identifier),
            "SEPARATOR" => Some(TokenKind::Separator),
            "COMMENT" => Some(TokenKind::Comment),
            "OPERATOR" => Some(TokenKind::Operator),
            "UNKNOWN" => Some(TokenKind::Unknown),
            "INVALID" => Some(TokenKind::Invalid),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Number => "NUMBER",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Comment => "COMMENT",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Invalid => "INVALID",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.lexeme)
    }
}

impl Token {
    pub fn debug(&self) {
        println!("{} -> {}", self.lexeme, self.kind);
    }
}
