use super::LineNumber;
use crate::mach::Address;

/// ## Interpreter error
///
/// Every failure the loader, the memory or an instruction can raise.
/// Position context is attached after the fact with the builder methods,
/// usually through the `error!` macro.

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    address: Option<Address>,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, @$addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident, @$addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn at_address(self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Addressing,
    Execution,
    Load,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    AddressOutOfBounds,
    OutOfSpace,
    CantAccessAddress,
    RegisterOutOfBounds,
    NestingTooDeep,
    MissingOrigin,
    UnknownToken,
    MissingOperand,
    InvalidOperand,
    MissingFormat,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            AddressOutOfBounds | OutOfSpace => ErrorKind::Addressing,
            CantAccessAddress | RegisterOutOfBounds | NestingTooDeep => ErrorKind::Execution,
            MissingOrigin | UnknownToken | MissingOperand | InvalidOperand | MissingFormat => {
                ErrorKind::Load
            }
        }
    }

    fn description(self) -> &'static str {
        use ErrorCode::*;
        match self {
            AddressOutOfBounds => "Address is out of bounds",
            OutOfSpace => "Out of space",
            CantAccessAddress => "Can't access address",
            RegisterOutOfBounds => "Register is out of bounds",
            NestingTooDeep => "Get nested too deep",
            MissingOrigin => "I need an org first",
            UnknownToken => "Unknown token",
            MissingOperand => "Missing operand",
            InvalidOperand => "Invalid operand",
            MissingFormat => "Missing format string",
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let description = self.code.description();
        match self.kind() {
            ErrorKind::Addressing => match self.address {
                Some(address) => write!(f, "Memory error: {}: {}", description, address)?,
                None => write!(f, "Memory error: {}", description)?,
            },
            ErrorKind::Execution => match self.address {
                Some(address) => write!(f, "Instruction {}: {}", address, description)?,
                None => write!(f, "Instruction: {}", description)?,
            },
            ErrorKind::Load => match self.line_number {
                Some(line) => write!(f, "Line {}: {}", line, description)?,
                None => write!(f, "Load error: {}", description)?,
            },
        }
        if !self.message.is_empty() {
            write!(f, " ({})", self.message)?;
        }
        Ok(())
    }
}
