//! Binding parser: `name=resolver:arg` args → bindings.

use std::fmt;

use crate::args::error::ExpandError;
use crate::args::tokenizer::{scan, FlagToken, Separator};
use crate::resolve::{Resolver, ResolverRegistry};

/// A declared name tied to a resolver and its raw argument.
pub struct Binding<'r> {
    pub name: String,
    pub resolver_id: String,
    /// Everything after the first `:`; may contain further colons.
    pub raw_arg: String,
    resolver: &'r dyn Resolver,
}

impl fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("resolver_id", &self.resolver_id)
            .field("raw_arg", &self.raw_arg)
            .finish_non_exhaustive()
    }
}

impl<'r> Binding<'r> {
    /// Parse one pre-delimiter token against the registry.
    pub fn parse(token: FlagToken, registry: &'r ResolverRegistry) -> Result<Self, ExpandError> {
        if token.is_flag() || token.separator != Separator::Equals {
            return Err(ExpandError::MalformedBinding {
                token: token.to_string(),
                reason: "expected name=resolver:arg",
            });
        }
        if token.name.is_empty() {
            return Err(ExpandError::MalformedBinding {
                token: token.to_string(),
                reason: "empty binding name",
            });
        }

        let Some((resolver_id, raw_arg)) = token.value.split_once(':') else {
            return Err(ExpandError::MalformedBinding {
                token: token.to_string(),
                reason: "no resolver specified",
            });
        };

        let Some(resolver) = registry.get(resolver_id) else {
            return Err(ExpandError::UnknownResolver {
                resolver: resolver_id.to_string(),
                token: token.to_string(),
                available: registry.available(),
            });
        };

        Ok(Self {
            resolver_id: resolver_id.to_string(),
            raw_arg: raw_arg.to_string(),
            name: token.name,
            resolver,
        })
    }

    /// Invoke the resolver. Every call is a fresh invocation.
    pub fn resolve(&self) -> Result<String, ExpandError> {
        tracing::debug!(
            binding = %self.name,
            resolver = %self.resolver_id,
            arg = %self.raw_arg,
            "Resolving binding"
        );
        self.resolver
            .resolve(&self.name, &self.raw_arg)
            .map_err(|source| ExpandError::ResolverFailure {
                binding: self.name.clone(),
                resolver: self.resolver_id.clone(),
                source,
            })
    }
}

/// Parse every binding before the delimiter.
///
/// Returns the bindings in input order together with the args after the
/// delimiter (`None` if the delimiter is missing).
pub fn parse_bindings<'a, 'r>(
    args: &'a [String],
    registry: &'r ResolverRegistry,
) -> Result<(Vec<Binding<'r>>, Option<&'a [String]>), ExpandError> {
    let mut bindings = Vec::new();
    let template = scan(args, |token| -> Result<(), ExpandError> {
        bindings.push(Binding::parse(token, registry)?);
        Ok(())
    })?;
    Ok((bindings, template))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ResolveError;

    fn registry() -> ResolverRegistry {
        ResolverRegistry::new().with("s3", "stub", |_: &str, arg: &str| {
            Ok::<_, ResolveError>(format!("s3({arg})"))
        })
    }

    fn raw(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_preserves_order_and_duplicates() {
        let registry = registry();
        let args = raw(&["e=s3:A", "x=s3:X", "e=s3:B", "--", "tree"]);

        let (bindings, template) = parse_bindings(&args, &registry).unwrap();

        let parsed: Vec<_> = bindings
            .iter()
            .map(|b| (b.name.as_str(), b.resolver_id.as_str(), b.raw_arg.as_str()))
            .collect();
        assert_eq!(parsed, vec![("e", "s3", "A"), ("x", "s3", "X"), ("e", "s3", "B")]);
        assert_eq!(template, Some(&args[4..]));
    }

    #[test]
    fn test_only_first_colon_splits() {
        let registry = registry();
        let args = raw(&["u=s3:http://host:8080/a"]);

        let (bindings, template) = parse_bindings(&args, &registry).unwrap();

        assert_eq!(bindings[0].raw_arg, "http://host:8080/a");
        assert_eq!(template, None);
    }

    #[test]
    fn test_resolve_calls_resolver_with_name_and_arg() {
        let registry = ResolverRegistry::new().with("cat", "", |name: &str, arg: &str| {
            Ok::<_, ResolveError>(format!("{name}:{arg}"))
        });
        let args = raw(&["n=cat:v"]);
        let (bindings, _) = parse_bindings(&args, &registry).unwrap();
        assert_eq!(bindings[0].resolve().unwrap(), "n:v");
    }

    #[test]
    fn test_missing_colon_is_malformed() {
        let registry = registry();
        let err = parse_bindings(&raw(&["a=s3"]), &registry).unwrap_err();
        assert!(matches!(
            err,
            ExpandError::MalformedBinding { reason: "no resolver specified", .. }
        ));
    }

    #[test]
    fn test_non_binding_shapes_are_malformed() {
        let registry = registry();
        for bad in ["--a=s3:x", "plain", "-a"] {
            let err = parse_bindings(&raw(&[bad]), &registry).unwrap_err();
            assert!(
                matches!(err, ExpandError::MalformedBinding { .. }),
                "{bad} should be malformed, got {err:?}"
            );
        }
    }

    #[test]
    fn test_empty_name_is_malformed() {
        let registry = registry();
        let err = parse_bindings(&raw(&["=s3:x"]), &registry).unwrap_err();
        assert!(matches!(
            err,
            ExpandError::MalformedBinding { reason: "empty binding name", .. }
        ));
    }

    #[test]
    fn test_unknown_resolver_lists_available() {
        let registry = registry();
        let err = parse_bindings(&raw(&["a=ftp:x"]), &registry).unwrap_err();
        match err {
            ExpandError::UnknownResolver { resolver, token, available } => {
                assert_eq!(resolver, "ftp");
                assert_eq!(token, "a=ftp:x");
                assert_eq!(available, "s3");
            }
            other => panic!("expected UnknownResolver, got {other:?}"),
        }
    }
}
