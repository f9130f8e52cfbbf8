/// A raw hit reported by a check: a line range and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub begin_line: u32,
    pub end_line: u32,
    pub message: String,
}

impl Hit {
    fn at(line: u32, message: impl Into<String>) -> Self {
        Self {
            begin_line: line,
            end_line: line,
            message: message.into(),
        }
    }
}

/// One line-oriented style check. Checks never touch the filesystem; they
/// scan source text handed to them and report hits with 1-based lines.
pub trait Check {
    fn name(&self) -> &'static str;
    fn scan(&self, source: &str) -> Vec<Hit>;
}

/// Reports an empty line that directly follows another empty line.
/// Whitespace-only lines count as empty.
pub struct EmptyLinesCheck;

impl Check for EmptyLinesCheck {
    fn name(&self) -> &'static str {
        "EmptyLinesCheck"
    }

    fn scan(&self, source: &str) -> Vec<Hit> {
        let mut hits = Vec::new();
        let mut previous_empty = false;
        for (index, line) in source.lines().enumerate() {
            let empty = line.trim().is_empty();
            if empty && previous_empty {
                hits.push(Hit::at(index as u32 + 1, "Empty line"));
            }
            previous_empty = empty;
        }
        hits
    }
}

/// Reports lines ending in spaces or tabs.
pub struct TrailingWhitespaceCheck;

impl Check for TrailingWhitespaceCheck {
    fn name(&self) -> &'static str {
        "TrailingWhitespaceCheck"
    }

    fn scan(&self, source: &str) -> Vec<Hit> {
        source
            .lines()
            .enumerate()
            .filter(|(_, line)| line.len() != line.trim_end().len())
            .map(|(index, _)| Hit::at(index as u32 + 1, "Trailing whitespace"))
            .collect()
    }
}

/// Reports lines containing a tab character.
pub struct TabCharacterCheck;

impl Check for TabCharacterCheck {
    fn name(&self) -> &'static str {
        "TabCharacterCheck"
    }

    fn scan(&self, source: &str) -> Vec<Hit> {
        source
            .lines()
            .enumerate()
            .filter(|(_, line)| line.contains('\t'))
            .map(|(index, _)| Hit::at(index as u32 + 1, "Tab character"))
            .collect()
    }
}

/// Reports lines longer than a configurable maximum, counted in characters.
pub struct LineLengthCheck {
    max: usize,
}

pub const DEFAULT_MAX_LINE_LENGTH: usize = 100;

impl LineLengthCheck {
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Default for LineLengthCheck {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

impl Check for LineLengthCheck {
    fn name(&self) -> &'static str {
        "LineLengthCheck"
    }

    fn scan(&self, source: &str) -> Vec<Hit> {
        source
            .lines()
            .enumerate()
            .filter(|(_, line)| line.chars().count() > self.max)
            .map(|(index, _)| {
                Hit::at(
                    index as u32 + 1,
                    format!("Line is longer than {} characters", self.max),
                )
            })
            .collect()
    }
}

/// Reports a file that does not end with a newline, at its last line.
pub struct FinalNewlineCheck;

impl Check for FinalNewlineCheck {
    fn name(&self) -> &'static str {
        "FinalNewlineCheck"
    }

    fn scan(&self, source: &str) -> Vec<Hit> {
        if source.is_empty() || source.ends_with('\n') {
            return Vec::new();
        }
        let last_line = source.lines().count() as u32;
        vec![Hit::at(last_line, "No newline at end of file")]
    }
}
