use super::{lex, token::*, Error, LineNumber};
use crate::error;
use crate::mach::{Address, Format, Instruction, Program, Register};

type Result<T> = std::result::Result<T, Error>;

/// Parses a whole source file. The first statement must be `org`;
/// loading stops at `end` or at the end of the text.
pub fn parse(source: &str) -> Result<Program> {
    let mut program: Option<Program> = None;
    for (index, line) in source.lines().enumerate() {
        let line_number: LineNumber = index + 1;
        let tokens = lex(line);
        if program.is_none() {
            match tokens.first() {
                None | Some(Token::Comment(_)) | Some(Token::Word(Word::Org)) => {}
                Some(_) => return Err(error!(MissingOrigin, line_number)),
            }
        }
        let statement = match Parser::parse(&tokens) {
            Ok(Some(statement)) => statement,
            Ok(None) => continue,
            Err(e) => return Err(e.in_line_number(line_number)),
        };
        match statement {
            Statement::Org(origin) if program.is_none() => program = Some(Program::new(origin)),
            Statement::Org(_) => return Err(error!(UnknownToken, line_number; "org")),
            Statement::End => break,
            Statement::Instruction(inst) => {
                if let Some(program) = program.as_mut() {
                    program.push(inst);
                }
            }
        }
    }
    program.ok_or_else(|| error!(MissingOrigin))
}

#[derive(Debug, PartialEq)]
enum Statement {
    Org(Address),
    End,
    Instruction(Instruction),
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Option<Statement>> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
        };
        let word = match parse.next() {
            None => return Ok(None),
            Some(Token::Word(word)) => *word,
            Some(t) => return Err(error!(UnknownToken; t.to_string())),
        };
        // Anything after the operands is commentary.
        parse.statement(word).map(Some)
    }

    fn next(&mut self) -> Option<&'a Token> {
        match self.token_stream.next() {
            Some(t) if t.is_comment() => None,
            t => t,
        }
    }

    fn statement(&mut self, word: Word) -> Result<Statement> {
        use Instruction::*;
        let inst = match word {
            Word::Org => return Ok(Statement::Org(self.address()?)),
            Word::End => return Ok(Statement::End),
            Word::Data => Data(self.number()?),
            Word::Load => Load(self.number()?, self.register()?),
            Word::Put => Put(self.register()?, self.address()?),
            Word::Get => Get(self.address()?, self.register()?),
            Word::Add => Add(self.register()?, self.register()?, self.register()?),
            Word::Subtract => Subtract(self.register()?, self.register()?, self.register()?),
            Word::Multiply => Multiply(self.register()?, self.register()?, self.register()?),
            Word::Divide => Divide(self.register()?, self.register()?, self.register()?),
            Word::Goto => Goto(self.address()?),
            Word::NZGoto => NZGoto(self.register()?, self.address()?),
            Word::ZGoto => ZGoto(self.register()?, self.address()?),
            Word::Print => Print(self.register()?, self.format()?),
        };
        Ok(Statement::Instruction(inst))
    }

    fn operand(&mut self) -> Result<&'a str> {
        match self.next() {
            None => Err(error!(MissingOperand)),
            Some(Token::Number(s)) => Ok(s.as_str()),
            Some(t) => Err(error!(InvalidOperand; t.to_string())),
        }
    }

    fn number(&mut self) -> Result<f64> {
        let s = self.operand()?;
        s.parse().map_err(|_| error!(InvalidOperand; s))
    }

    fn index(&mut self) -> Result<usize> {
        let s = self.operand()?;
        s.parse().map_err(|_| error!(InvalidOperand; s))
    }

    fn address(&mut self) -> Result<Address> {
        self.index()
    }

    fn register(&mut self) -> Result<Register> {
        self.index()
    }

    fn format(&mut self) -> Result<Format> {
        match self.next() {
            Some(Token::Text(s)) => Ok(Format::new(s)),
            _ => Err(error!(MissingFormat)),
        }
    }
}
