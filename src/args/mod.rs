//! Template expansion engine for cloudstrap.
//!
//! Raw args are processed in stages:
//!
//! ```text
//! Raw args → Tokenize → Parse bindings → Group → Classify → Resolve → Assemble → SpawnParams
//! ```
//!
//! Everything before the `--` delimiter is a binding (`name=RESOLVER:ARG`);
//! the first arg after it is the program, the rest is the template. Template
//! markers reference bindings by name:
//!
//! | shape          | example     | output             |
//! |----------------|-------------|--------------------|
//! | flag value     | `--x=%a`    | `--x=<a>`          |
//! | plain flag     | `--x=v`     | `--x=v`            |
//! | positional     | `%a`        | `<a>`              |
//! | flag name      | `--%a`      | `--a=<a>`          |
//!
//! A name bound more than once is handed out round-robin, and every reference
//! calls its resolver again.

mod assembler;
mod bag;
mod binding;
mod classifier;
mod error;
mod pipeline;
mod tokenizer;

pub use assembler::ArgAssembler;
pub use bag::{group_bindings, BindingBag};
pub use binding::{parse_bindings, Binding};
pub use classifier::{classify, ClassifiedArg, MARKER};
pub use error::ExpandError;
pub use pipeline::{expand, SpawnParams};
pub use tokenizer::{scan, FlagToken, FlagTokens, Separator, DELIMITER};
