#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Word(Word),
    Number(String),
    Text(String),
    Comment(String),
}

impl Token {
    pub fn from_string(s: &str) -> Token {
        if let Some(word) = Word::from_string(s) {
            return Token::Word(word);
        }
        match s.chars().next() {
            Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                Token::Number(s.to_string())
            }
            _ => Token::Unknown(s.to_string()),
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Token::Comment(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Number(s) => write!(f, "{}", s),
            Text(s) => write!(f, "\"{}\"", s),
            Comment(s) => write!(f, "//{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Org,
    End,
    Data,
    Load,
    Put,
    Get,
    Add,
    Subtract,
    Multiply,
    Divide,
    Goto,
    NZGoto,
    ZGoto,
    Print,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        match s {
            "org" => Some(Org),
            "end" => Some(End),
            "data" => Some(Data),
            "load" => Some(Load),
            "put" => Some(Put),
            "get" => Some(Get),
            "add" => Some(Add),
            "subtract" => Some(Subtract),
            "multiply" => Some(Multiply),
            "divide" => Some(Divide),
            "goto" => Some(Goto),
            "nzgoto" => Some(NZGoto),
            "zgoto" => Some(ZGoto),
            "print" => Some(Print),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Org => write!(f, "org"),
            End => write!(f, "end"),
            Data => write!(f, "data"),
            Load => write!(f, "load"),
            Put => write!(f, "put"),
            Get => write!(f, "get"),
            Add => write!(f, "add"),
            Subtract => write!(f, "subtract"),
            Multiply => write!(f, "multiply"),
            Divide => write!(f, "divide"),
            Goto => write!(f, "goto"),
            NZGoto => write!(f, "nzgoto"),
            ZGoto => write!(f, "zgoto"),
            Print => write!(f, "print"),
        }
    }
}
