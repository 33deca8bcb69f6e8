use std::io::{self, BufRead, Write};

/// Thin I/O wrapper: writes the prompt and reads one raw line.
pub struct ShellPrompt {
    prompt: String,
}

impl ShellPrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        ShellPrompt { prompt: prompt.into() }
    }

    pub fn show_prompt(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.prompt.as_bytes())?;
        out.flush()
    }

    /// `Ok(None)` on end-of-input. Invalid UTF-8 is replaced, not rejected.
    pub fn read_line(&self, input: &mut dyn BufRead) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let bytes_read = input.read_until(b'\n', &mut buf)?;
        if bytes_read == 0 {
            // EOF (e.g., Ctrl-D)
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
