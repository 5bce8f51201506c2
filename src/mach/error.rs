use super::Address;

#[derive(Clone)]
pub struct Error {
    code: ErrorCode,
    pc: Option<Address>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err)
    };
    ($err:ident, $pc:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err).at($pc)
    };
    ($err:ident; $msg:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err).message($msg)
    };
    ($err:ident, $pc:expr; $msg:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err)
            .at($pc)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            pc: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn pc(&self) -> Option<Address> {
        self.pc
    }

    /// Attach the program counter of the faulting instruction.
    /// An address already recorded is kept.
    pub fn at(self, pc: Address) -> Error {
        Error {
            pc: self.pc.or(Some(pc)),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidOpcode = 1,
    InvalidOperand = 2,
    StackUnderflow = 3,
    DivisionByZero = 4,
    AddressOutOfRange = 5,
    InputExhausted = 6,
    MalformedImage = 7,
    IoError = 8,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            InvalidOpcode => "INVALID OPCODE",
            InvalidOperand => "INVALID OPERAND",
            StackUnderflow => "STACK UNDERFLOW",
            DivisionByZero => "DIVISION BY ZERO",
            AddressOutOfRange => "ADDRESS OUT OF RANGE",
            InputExhausted => "INPUT EXHAUSTED",
            MalformedImage => "MALFORMED IMAGE",
            IoError => "I/O ERROR",
        };
        let mut suffix = String::new();
        if let Some(pc) = self.pc {
            suffix.push_str(&format!(" AT {}", pc));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", code_str, suffix)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        error!(IoError; &error.to_string())
    }
}
