//! Equation generation command

use crate::core::{Equation, Operator};
use crate::generator::{GenerateError, generate_equation_with, generate_for};
use rand::Rng;

/// Generate `count` equations, optionally restricted to one operator
///
/// # Errors
/// Returns the first `GenerateError` hit.
pub fn generate_equations<R: Rng>(
    count: usize,
    operator: Option<Operator>,
    rng: &mut R,
) -> Result<Vec<Equation>, GenerateError> {
    (0..count)
        .map(|_| match operator {
            Some(operator) => generate_for(operator, rng),
            None => generate_equation_with(rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_requested_count() {
        let equations = generate_equations(25, None, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(equations.len(), 25);
    }

    #[test]
    fn respects_operator() {
        let equations =
            generate_equations(20, Some(Operator::Divide), &mut StdRng::seed_from_u64(2)).unwrap();
        assert!(equations.iter().all(|eq| eq.operator() == Operator::Divide));
    }

    #[test]
    fn same_seed_same_equations() {
        let a = generate_equations(10, None, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_equations(10, None, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_count() {
        let equations = generate_equations(0, None, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(equations.is_empty());
    }
}
