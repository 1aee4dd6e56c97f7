use std::io::{self, BufRead, Write};

/// Source of interactive answers.
pub trait Prompter {
    /// Ask `message`, returning `default` when the answer is blank.
    fn input(&mut self, message: &str, default: &str) -> io::Result<String>;
}

/// Line-oriented prompter: writes the question, reads one line.
///
/// End of input counts as a blank answer.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, message: &str, default: &str) -> io::Result<String> {
        write!(self.writer, "{message} (default: {default}): ")?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }
}
