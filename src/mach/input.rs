use std::collections::VecDeque;
use std::io::BufRead;

/// A supplier of whole lines of text. `Ok(None)` is end of stream.
pub trait LineSource {
    fn read_line(&mut self) -> std::io::Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// ## Line buffered character queue
///
/// Characters are handed out one at a time. When the queue runs dry
/// a whole line is taken from the host and queued with a trailing
/// `'\n'`.

#[derive(Debug, Default)]
pub struct InputQueue {
    chars: VecDeque<char>,
}

impl InputQueue {
    pub fn new() -> InputQueue {
        InputQueue::default()
    }
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
    pub fn len(&self) -> usize {
        self.chars.len()
    }
    /// Queue one line. Any line terminator already present is dropped
    /// so exactly one `'\n'` follows the line.
    pub fn enter(&mut self, line: &str) {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.chars.extend(line.chars());
        self.chars.push_back('\n');
    }
    pub fn next_char(&mut self) -> Option<char> {
        self.chars.pop_front()
    }
}

/// Lines from any buffered reader.
pub struct BufReadSource<R> {
    reader: R,
}

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> BufReadSource<R> {
        BufReadSource { reader }
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Replays a fixed list of lines, then defers to another source.
pub struct ScriptSource<S> {
    script: VecDeque<String>,
    then: S,
}

impl<S: LineSource> ScriptSource<S> {
    pub fn new<I: IntoIterator<Item = String>>(script: I, then: S) -> ScriptSource<S> {
        ScriptSource {
            script: script.into_iter().collect(),
            then,
        }
    }
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<S: LineSource> LineSource for ScriptSource<S> {
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        match self.script.pop_front() {
            Some(line) => Ok(Some(line)),
            None => self.then.read_line(),
        }
    }
}

/// Never produces a line.
pub struct NoInput;

impl LineSource for NoInput {
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        Ok(None)
    }
}
