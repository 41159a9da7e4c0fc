use crate::Line;

/// Checks whether a set of lines establishes the magic property.
pub trait Validator {
    /// Returns `true` iff `lines` is non-empty and every line sums to the
    /// same value.
    fn verify(&self, lines: &[Line]) -> bool;
}

/// The standard [`Validator`]: exact integer equality of line sums.
///
/// The first line's sum is taken as the expected magic constant. An empty
/// set verifies as `false` — with no lines there is no constant to agree
/// on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumValidator;

impl Validator for SumValidator {
    fn verify(&self, lines: &[Line]) -> bool {
        let Some(first) = lines.first() else {
            return false;
        };
        let expected: u32 = first.iter().sum();
        lines.iter().all(|line| line.iter().sum::<u32>() == expected)
    }
}
