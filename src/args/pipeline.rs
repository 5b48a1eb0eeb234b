//! Pipeline: ties all expansion stages together.

use std::collections::HashMap;

use crate::args::assembler::ArgAssembler;
use crate::args::bag::{group_bindings, BindingBag};
use crate::args::binding::parse_bindings;
use crate::args::classifier::{classify, ClassifiedArg};
use crate::args::error::ExpandError;
use crate::args::tokenizer::{FlagToken, FlagTokens, Separator, DELIMITER};
use crate::resolve::ResolverRegistry;

type Bags<'b, 'r> = HashMap<&'b str, BindingBag<'b, 'r>>;

/// Ready-to-use parameters for launching the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnParams {
    /// Program path (first template element, never rewritten).
    pub command: String,
    /// Fully expanded arguments.
    pub args: Vec<String>,
}

impl SpawnParams {
    /// Shell-quoted rendering of the command line.
    pub fn command_line(&self) -> String {
        shell_words::join(std::iter::once(&self.command).chain(&self.args))
    }
}

/// Expand `bindings... -- program template...` into spawn parameters.
///
/// This is the main entry point for the expansion engine. Resolvers run in
/// template order; the first error aborts the whole expansion.
pub fn expand(args: &[String], registry: &ResolverRegistry) -> Result<SpawnParams, ExpandError> {
    // Stage 1: Parse bindings
    let (bindings, template) = parse_bindings(args, registry)?;

    let Some((command, template)) = template.and_then(|t| t.split_first()) else {
        return Err(ExpandError::NoProgramSpecified);
    };

    // Stage 2: Group into round-robin bags
    let mut bags = group_bindings(&bindings);

    // Stage 3: Rewrite the template
    let args = rewrite(template, &mut bags)?;

    for (name, bag) in &bags {
        if !bag.is_used() {
            tracing::warn!(binding = %name, "Binding is never referenced by the template");
        }
    }

    tracing::debug!(
        command = %command,
        bindings = bindings.len(),
        args = args.len(),
        "Expanded template"
    );

    Ok(SpawnParams {
        command: command.clone(),
        args,
    })
}

fn rewrite(template: &[String], bags: &mut Bags<'_, '_>) -> Result<Vec<String>, ExpandError> {
    let mut out = ArgAssembler::new();
    let mut tokens = FlagTokens::new(template);

    for token in tokens.by_ref() {
        let source = token.to_string();
        substitute(classify(token)?, &source, bags, &mut out)?;
    }

    // End of options: the rest is positional only.
    if let Some(rest) = tokens.remainder() {
        out.push_arg(DELIMITER);
        for word in rest {
            substitute(ClassifiedArg::positional(word), word, bags, &mut out)?;
        }
    }

    Ok(out.build())
}

fn substitute(
    arg: ClassifiedArg,
    source: &str,
    bags: &mut Bags<'_, '_>,
    out: &mut ArgAssembler,
) -> Result<(), ExpandError> {
    match arg {
        ClassifiedArg::FlagValueRef { mut flag, binding } => {
            flag.value = resolve(bags, &binding, source)?;
            out.push_flag(&flag);
        }
        ClassifiedArg::PlainFlag(flag) => out.push_flag(&flag),
        ClassifiedArg::PositionalRef { binding } => {
            let value = resolve(bags, &binding, source)?;
            out.push_arg(value);
        }
        ClassifiedArg::FlagNameRef { header, binding } => {
            let value = resolve(bags, &binding, source)?;
            out.push_flag(&FlagToken {
                header,
                name: binding,
                separator: Separator::Equals,
                value,
            });
        }
        ClassifiedArg::Literal(word) => out.push_arg(word),
    }
    Ok(())
}

fn resolve(bags: &mut Bags<'_, '_>, binding: &str, source: &str) -> Result<String, ExpandError> {
    let bag = bags
        .get_mut(binding)
        .ok_or_else(|| ExpandError::UnknownBindingReference {
            name: binding.to_string(),
            token: source.to_string(),
        })?;
    bag.next().resolve()
}
