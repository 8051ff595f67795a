use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    SourceLexer::lex(s)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '"'
}

struct SourceLexer<'a> {
    line: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> SourceLexer<'a> {
    fn lex(line: &'a str) -> Vec<Token> {
        let mut lexer = SourceLexer {
            line,
            chars: line.char_indices().peekable(),
        };
        let mut tokens = vec![];
        while let Some(&(start, ch)) = lexer.chars.peek() {
            if ch.is_whitespace() {
                lexer.chars.next();
                continue;
            }
            if ch == '"' {
                tokens.push(lexer.text(start));
                continue;
            }
            let word = lexer.word(start);
            if word.starts_with("//") {
                let comment = &line[start + 2..];
                tokens.push(Token::Comment(comment.trim_end().to_string()));
                break;
            }
            tokens.push(Token::from_string(word));
        }
        tokens
    }

    fn word(&mut self, start: usize) -> &'a str {
        let mut end = start;
        while let Some(&(i, ch)) = self.chars.peek() {
            if is_separator(ch) {
                break;
            }
            end = i + ch.len_utf8();
            self.chars.next();
        }
        &self.line[start..end]
    }

    /// Quoted text runs to the last quote on the line so a format
    /// may itself contain quotes.
    fn text(&mut self, start: usize) -> Token {
        let last = match self.line.rfind('"') {
            Some(last) if last > start => last,
            _ => {
                while self.chars.next().is_some() {}
                return Token::Unknown(self.line[start..].trim_end().to_string());
            }
        };
        while let Some(&(i, _)) = self.chars.peek() {
            if i > last {
                break;
            }
            self.chars.next();
        }
        Token::Text(self.line[start + 1..last].to_string())
    }
}
