//! Flag tokenizer: raw args → flag tokens.

use std::fmt;

/// Standalone argument separating bindings from the template.
pub const DELIMITER: &str = "--";

/// How a flag's value was attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `--name=value`
    Equals,
    /// `--name value` (value taken from the next argument).
    Space,
    /// No value.
    None,
}

/// One parsed element of an argument list.
///
/// A token with an empty header and no separator is a positional word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagToken {
    /// Leading dashes: `"--"`, `"-"` or `""`.
    pub header: String,
    pub name: String,
    pub separator: Separator,
    /// Always empty when `separator` is [`Separator::None`].
    pub value: String,
}

impl FlagToken {
    /// A bare positional word.
    pub fn positional(word: impl Into<String>) -> Self {
        Self {
            header: String::new(),
            name: word.into(),
            separator: Separator::None,
            value: String::new(),
        }
    }

    /// Whether this token carries a dash header.
    pub fn is_flag(&self) -> bool {
        !self.header.is_empty()
    }
}

impl fmt::Display for FlagToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.header, self.name)?;
        match self.separator {
            Separator::Equals => write!(f, "={}", self.value),
            Separator::Space => write!(f, " {}", self.value),
            Separator::None => Ok(()),
        }
    }
}

/// Single forward pass over raw args, yielding [`FlagToken`]s.
///
/// Stops at the first standalone `--`, which is not yielded; the args after
/// it are available from [`FlagTokens::remainder`].
#[derive(Debug, Clone)]
pub struct FlagTokens<'a> {
    args: &'a [String],
    pos: usize,
    delimiter: Option<usize>,
}

impl<'a> FlagTokens<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self {
            args,
            pos: 0,
            delimiter: None,
        }
    }

    /// Args following the delimiter, or `None` if no delimiter was reached.
    pub fn remainder(&self) -> Option<&'a [String]> {
        self.delimiter.map(|at| &self.args[at + 1..])
    }

    /// Consume the next arg as a space-separated value if it looks like one.
    fn take_value(&mut self) -> Option<&'a str> {
        match self.args.get(self.pos) {
            Some(next) if !next.is_empty() && !next.starts_with('-') => {
                self.pos += 1;
                Some(next.as_str())
            }
            _ => None,
        }
    }
}

impl Iterator for FlagTokens<'_> {
    type Item = FlagToken;

    fn next(&mut self) -> Option<FlagToken> {
        let arg = self.args.get(self.pos)?;
        if arg == DELIMITER {
            self.delimiter = Some(self.pos);
            self.pos = self.args.len();
            return None;
        }
        self.pos += 1;

        let header_len = arg.bytes().take(2).take_while(|&b| b == b'-').count();
        let (header, rest) = arg.split_at(header_len);

        if let Some((name, value)) = rest.split_once('=') {
            return Some(FlagToken {
                header: header.to_string(),
                name: name.to_string(),
                separator: Separator::Equals,
                value: value.to_string(),
            });
        }

        if header.is_empty() {
            return Some(FlagToken::positional(rest));
        }

        let (separator, value) = match self.take_value() {
            Some(value) => (Separator::Space, value.to_string()),
            None => (Separator::None, String::new()),
        };
        Some(FlagToken {
            header: header.to_string(),
            name: rest.to_string(),
            separator,
            value,
        })
    }
}

/// Drive the tokenizer with a fallible per-token handler.
///
/// Returns the args after the delimiter (`None` if there was none). The first
/// handler error stops the scan; work done for earlier tokens stays done.
pub fn scan<'a, E>(
    args: &'a [String],
    mut handler: impl FnMut(FlagToken) -> Result<(), E>,
) -> Result<Option<&'a [String]>, E> {
    let mut tokens = FlagTokens::new(args);
    for token in tokens.by_ref() {
        handler(token)?;
    }
    Ok(tokens.remainder())
}
