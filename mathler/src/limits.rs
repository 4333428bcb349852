/// Resource limits applied to untrusted guesses
///
/// Guesses arrive from the network, so the evaluator refuses inputs that no
/// puzzle could ever need before doing any parsing work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum length of an expression in bytes, after normalization
    /// Real usage: 8 bytes, Limit: 256 (32x)
    pub max_expression_bytes: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_expression_bytes: 256,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
