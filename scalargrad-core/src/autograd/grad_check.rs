//! Numerical verification of analytical gradients.

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] ScalarGradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` is evaluated once on leaves built from `inputs` to obtain
/// analytical gradients via `backward()`, then twice per input on a fresh
/// graph with that input shifted by ±`epsilon`. The comparison accepts a
/// gradient when it is within `abs_tol` absolutely or `rel_tol` relatively
/// (approx's `relative_eq!` semantics).
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&Graph<f64>, &[Value<f64>]) -> Result<Value<f64>, ScalarGradError>,
{
    // --- 1. Analytical gradients ---
    let graph = Graph::new();
    let leaves: Vec<Value<f64>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves)?;
    output.backward();

    // Re-evaluates the function from scratch on perturbed inputs. A fresh
    // graph per evaluation keeps the probes out of the analytical graph.
    let eval = |probe: &[f64]| -> Result<f64, GradCheckError> {
        let g = Graph::new();
        let xs: Vec<Value<f64>> = probe.iter().map(|&x| g.leaf(x)).collect();
        Ok(func(&g, &xs)?.data())
    };

    // --- 2. Central differences, one input at a time ---
    for (i, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[i] = inputs[i] + epsilon;
        let loss_plus = eval(&shifted)?;
        shifted[i] = inputs[i] - epsilon;
        let loss_minus = eval(&shifted)?;

        if !loss_plus.is_finite() || !loss_minus.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !relative_eq!(
            analytical,
            numerical,
            epsilon = abs_tol,
            max_relative = rel_tol
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
