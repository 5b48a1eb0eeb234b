//! Template classifier: flag tokens → substitution shapes.

use crate::args::error::ExpandError;
use crate::args::tokenizer::{FlagToken, Separator};

/// Prefix marking a binding reference.
pub const MARKER: char = '%';

/// A classified template token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedArg {
    /// `--flag=%name` or `--flag %name`: value substituted, flag kept.
    FlagValueRef { flag: FlagToken, binding: String },
    /// `--flag`, `--flag=v`, `--flag v`: forwarded as-is.
    PlainFlag(FlagToken),
    /// `%name`: resolved value as a bare argument.
    PositionalRef { binding: String },
    /// `--%name` or `--%name=`: becomes `--name=<value>`.
    FlagNameRef { header: String, binding: String },
    /// Bare word without marker.
    Literal(String),
}

impl ClassifiedArg {
    /// Classify a word known to be positional (no flag parsing).
    pub fn positional(word: &str) -> Self {
        match word.strip_prefix(MARKER) {
            Some(binding) => ClassifiedArg::PositionalRef {
                binding: binding.to_string(),
            },
            None => ClassifiedArg::Literal(word.to_string()),
        }
    }
}

/// Classify one template token. First matching shape wins.
pub fn classify(token: FlagToken) -> Result<ClassifiedArg, ExpandError> {
    let name_marked = token.name.starts_with(MARKER);
    let value_marked = token.value.starts_with(MARKER);

    match (token.is_flag(), name_marked, value_marked, token.value.is_empty()) {
        (true, false, true, _) => {
            let binding = token.value[MARKER.len_utf8()..].to_string();
            Ok(ClassifiedArg::FlagValueRef {
                flag: token,
                binding,
            })
        }
        (true, false, false, _) => Ok(ClassifiedArg::PlainFlag(token)),
        (false, true, _, true) => Ok(ClassifiedArg::PositionalRef {
            binding: token.name[MARKER.len_utf8()..].to_string(),
        }),
        (true, true, _, true) => Ok(ClassifiedArg::FlagNameRef {
            binding: token.name[MARKER.len_utf8()..].to_string(),
            header: token.header,
        }),
        (false, false, _, true) if token.separator == Separator::None => {
            Ok(ClassifiedArg::Literal(token.name))
        }
        _ => Err(ExpandError::MalformedTemplateToken {
            token: token.to_string(),
        }),
    }
}
