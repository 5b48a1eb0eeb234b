//! Argument assembler: rebuilds the argument vector for the child.

use crate::args::tokenizer::{FlagToken, Separator};

/// Builder for the arguments passed to the launched program.
#[derive(Debug, Clone, Default)]
pub struct ArgAssembler {
    args: Vec<String>,
}

impl ArgAssembler {
    /// Start with an empty arg list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flag using the reconstruction rule.
    ///
    /// - empty header: only the value, as one argument
    /// - `Equals`: `header+name=value` as one argument
    /// - `Space`: `header+name`, then the value as its own argument if non-empty
    /// - `None`: `header+name`
    pub fn push_flag(&mut self, flag: &FlagToken) {
        if flag.header.is_empty() {
            self.args.push(flag.value.clone());
            return;
        }

        let head = format!("{}{}", flag.header, flag.name);
        match flag.separator {
            Separator::Equals => self.args.push(format!("{}={}", head, flag.value)),
            Separator::Space => {
                self.args.push(head);
                if !flag.value.is_empty() {
                    self.args.push(flag.value.clone());
                }
            }
            Separator::None => self.args.push(head),
        }
    }

    /// Append one bare argument.
    pub fn push_arg(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Build the final argument list.
    pub fn build(self) -> Vec<String> {
        self.args
    }
}
