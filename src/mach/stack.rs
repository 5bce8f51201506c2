use crate::mach::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced vector
///
/// Grows without bound. Popping an empty stack is an error,
/// never a default value.

pub struct Stack<T> {
    underflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(underflow_message: &'static str) -> Stack<T> {
        Stack {
            underflow_message,
            vec: vec![],
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow; self.underflow_message)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
}
