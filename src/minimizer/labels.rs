//! Variable display names
//!
//! Term positions are the variables' identities; names are presentation
//! only. Defaults are sequential letters from 'A', falling back to
//! numbered names once the alphabet runs out.

use super::error::MinimizerError;
use std::sync::Arc;

/// Default display names for `count` variables: 'A'..'Z', then `V{index}`
pub(super) fn default_labels(count: usize) -> Vec<Arc<str>> {
    (0..count)
        .map(|i| {
            if i < 26 {
                let letter = (b'A' + i as u8) as char;
                Arc::from(letter.to_string().as_str())
            } else {
                Arc::from(format!("V{}", i).as_str())
            }
        })
        .collect()
}

/// Validate a supplied name list against the variable count
pub(super) fn labels_from<S: AsRef<str>>(
    expected: usize,
    names: &[S],
) -> Result<Vec<Arc<str>>, MinimizerError> {
    if names.len() != expected {
        return Err(MinimizerError::VariableCountMismatch {
            expected,
            supplied: names.len(),
        });
    }
    Ok(names.iter().map(|name| Arc::from(name.as_ref())).collect())
}
