/// In-memory log of issued commands, oldest first.
///
/// Each entry keeps only the command name and its first argument. Nothing is
/// ever removed, deduplicated, or written to disk.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    // Record one line's arguments. Blank lines still produce an (empty) entry.
    pub fn record(&mut self, args: &[String]) {
        let entry = match args {
            [] => String::new(),
            [cmd] => cmd.clone(),
            [cmd, first, ..] => format!("{} {}", cmd, first),
        };
        self.entries.push(entry);
    }

    /// Display lines as `" <seq> <entry>"`, numbered from 1.
    pub fn render(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!(" {} {}", i + 1, cmd))
            .collect()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
