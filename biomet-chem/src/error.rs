use thiserror::Error;

/// Errors that may occur when evaluating a chemistry model.
///
/// Numeric domain problems in the ratio functions are not reported here; they
/// propagate as NaN or infinity. Only results that are easy to misuse when
/// silently invalid are surfaced as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChemError {
    /// The operation is reserved but has no implementation yet.
    #[error("operation `{operation}` is not implemented")]
    NotImplemented {
        operation: &'static str,
        context: Option<String>,
    },

    /// The quantity does not exist for the given parameters.
    ///
    /// For example, an enzyme model whose deactivation enthalpy does not
    /// exceed its activation energy has no temperature optimum.
    #[error("`{quantity}` is undefined for the given parameters")]
    Undefined {
        quantity: &'static str,
        context: Option<String>,
    },
}
