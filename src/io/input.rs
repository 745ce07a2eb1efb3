use crate::error::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Which reports the header line asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mode {
    pub parse: bool,
    pub sat: bool,
}

impl Mode {
    pub fn detect(header: &str) -> Self {
        let parse = header.contains("PARSE");
        let sat = header.contains("SAT");
        Self { parse, sat }
    }

    pub fn force(self, parse: bool, sat: bool) -> Self {
        let parse = self.parse || parse;
        let sat = self.sat || sat;
        Self { parse, sat }
    }
}

pub fn read_input(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(text)
}

/// Split input into its header mode and the formula lines that follow.
pub fn split_input(text: &str) -> (Mode, impl Iterator<Item = &str>) {
    let mut lines = text.lines();
    let mode = lines.next().map(Mode::detect).unwrap_or_default();
    (mode, lines)
}
