use anyhow::{Context, Result};
use std::fmt;

use mathvector::{MathVector, Operation, TaggedVector};

use crate::input::JobConfig;

/// Result of evaluating a job: a vector or a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Vector(MathVector),
    Scalar(f64),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Vector(v) => write!(f, "{}", v),
            Outcome::Scalar(x) => write!(f, "{:?}", x),
        }
    }
}

pub fn run_job(config: &JobConfig) -> Result<Outcome> {
    let operation = config.operation;
    let mut lhs = to_vector(&config.lhs).context("Invalid left-hand operand (lhs)")?;

    log::info!(
        "[MathVector::Eval] {} on {} vector of length {}",
        operation,
        lhs.orientation(),
        lhs.len()
    );
    if config.rhs.is_some() && !operation.requires_rhs() {
        log::warn!("Operation '{}' takes one operand; ignoring rhs", operation);
    }

    let outcome = match operation {
        Operation::Render => Outcome::Vector(lhs),
        Operation::Transpose => Outcome::Vector(lhs.transpose()),
        Operation::Scale => {
            lhs.scale(config.factor);
            Outcome::Vector(lhs)
        }
        Operation::Add => {
            let rhs = rhs_operand(config)?;
            let sum = lhs
                .add(&rhs)
                .with_context(|| format!("Operation '{}' failed", operation))?;
            Outcome::Vector(sum)
        }
        Operation::DotProduct => {
            let rhs = rhs_operand(config)?;
            let dot = lhs
                .dot_product(&rhs)
                .with_context(|| format!("Operation '{}' failed", operation))?;
            Outcome::Scalar(dot)
        }
        Operation::Magnitude => Outcome::Scalar(lhs.magnitude()),
        Operation::Normalize => {
            lhs.normalize()
                .with_context(|| format!("Operation '{}' failed", operation))?;
            Outcome::Vector(lhs)
        }
    };

    Ok(outcome)
}

fn rhs_operand(config: &JobConfig) -> Result<MathVector> {
    let rhs = config.rhs.as_ref().with_context(|| {
        format!(
            "Operation '{}' requires a right-hand operand (rhs)",
            config.operation
        )
    })?;
    to_vector(rhs).context("Invalid right-hand operand (rhs)")
}

fn to_vector(operand: &TaggedVector) -> mathvector::Result<MathVector> {
    MathVector::try_from(operand.clone())
}
