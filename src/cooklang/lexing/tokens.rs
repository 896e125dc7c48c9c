//! Token definitions for content lines
//!
//! Tokens are produced by the logos derive macro. They carry no data: the
//! scanner slices the source with each token's span. Every character of the
//! input belongs to exactly one token, so concatenating all spans gives back
//! the line.
use logos::Logos;
use std::ops::Range;

/// All tokens of a content line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // Component markers
    #[token("@")]
    IngredientMarker,
    #[token("#")]
    CookwareMarker,
    #[token("~")]
    TimerMarker,

    // Braces delimiting names and quantity blocks
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Letters, digits, underscore and combining marks (Unicode aware)
    #[regex(r"[\p{L}\p{M}\p{N}_]+")]
    Word,

    #[regex(r"\s+")]
    Whitespace,

    // Anything else: punctuation, `%`, symbols
    #[regex(r"[^@#~{}\p{L}\p{M}\p{N}_\s]+")]
    Symbol,
}

impl Token {
    /// Check if this token starts a component
    pub fn is_marker(&self) -> bool {
        matches!(
            self,
            Token::IngredientMarker | Token::CookwareMarker | Token::TimerMarker
        )
    }

    pub fn is_brace(&self) -> bool {
        matches!(self, Token::OpenBrace | Token::CloseBrace)
    }
}

/// Tokenize a line, keeping each token's byte span.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // Unmatched input stays text rather than being dropped
        let token = result.unwrap_or(Token::Symbol);
        tokens.push((token, lexer.span()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_markers_and_braces() {
        assert_eq!(
            kinds("@#~{}"),
            vec![
                Token::IngredientMarker,
                Token::CookwareMarker,
                Token::TimerMarker,
                Token::OpenBrace,
                Token::CloseBrace,
            ]
        );
    }

    #[test]
    fn test_ingredient_with_quantity() {
        assert_eq!(
            kinds("@sugar{42%grams}"),
            vec![
                Token::IngredientMarker,
                Token::Word,
                Token::OpenBrace,
                Token::Word,
                Token::Symbol,
                Token::Word,
                Token::CloseBrace,
            ]
        );
    }

    #[test]
    fn test_accented_words_are_single_tokens() {
        let tokens = tokenize("sauté");
        assert_eq!(tokens, vec![(Token::Word, 0..6)]);
    }

    #[test]
    fn test_spans_cover_the_source() {
        let source = "Put @green olives{5%units} in the #big bowl{}, ~{10 min}!";
        let rebuilt: String = tokenize(source)
            .into_iter()
            .map(|(_, span)| &source[span])
            .collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::IngredientMarker.is_marker());
        assert!(Token::TimerMarker.is_marker());
        assert!(!Token::Word.is_marker());
        assert!(Token::OpenBrace.is_brace());
        assert!(!Token::Symbol.is_brace());
    }
}
