use logos::Logos;

/// An atomic lexical unit. The two parentheses are always standalone
/// tokens no matter what they touch; everything else is a maximal run of
/// non-whitespace, non-paren characters. There are no strings, comments
/// or escapes, so a literal paren can never appear inside an atom.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[^ \t\r\n\f()]+", |lexer| lexer.slice().to_owned())]
    Atom(String),
}

/// Split source text into a token stream. Any text tokenizes; empty text
/// yields an empty stream.
pub fn tokenize(source: &str) -> Tokens {
    Tokens {
        lexer: Token::lexer(source),
    }
}

pub struct Tokens<'a> {
    lexer: logos::Lexer<'a, Token>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        // The atom pattern covers every character the skip pattern does
        // not, so the lexer cannot actually produce an error.
        loop {
            match self.lexer.next()? {
                Ok(token) => return Some(token),
                Err(()) => continue,
            }
        }
    }
}
