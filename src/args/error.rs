use thiserror::Error;

use crate::resolve::ResolveError;

/// Errors that abort an expansion. None of them are retried.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// A pre-delimiter arg is not `name=resolver:arg`
    #[error("malformed binding '{token}': {reason}")]
    MalformedBinding { token: String, reason: &'static str },

    /// Binding names a resolver that is not registered
    #[error("unknown resolver '{resolver}' in binding '{token}' (available: {available})")]
    UnknownResolver {
        resolver: String,
        token: String,
        available: String,
    },

    /// Delimiter missing or nothing after it
    #[error("no program specified; expected '-- <program> [args...]'")]
    NoProgramSpecified,

    /// Template marker names a binding that was never declared
    #[error("template token '{token}' references undeclared binding '{name}'")]
    UnknownBindingReference { name: String, token: String },

    /// Template token matches none of the recognized shapes
    #[error("malformed template token '{token}'")]
    MalformedTemplateToken { token: String },

    /// The resolver itself failed
    #[error("resolver '{resolver}' failed for binding '{binding}': {source}")]
    ResolverFailure {
        binding: String,
        resolver: String,
        #[source]
        source: ResolveError,
    },
}
