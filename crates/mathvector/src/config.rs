use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vector operations that can be requested by name, e.g. from a job file.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[default]
    Render,
    Transpose,
    Scale,
    Add,
    DotProduct,
    Magnitude,
    Normalize,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Render,
        Operation::Transpose,
        Operation::Scale,
        Operation::Add,
        Operation::DotProduct,
        Operation::Magnitude,
        Operation::Normalize,
    ];

    /// Whether the operation combines two vectors.
    pub fn requires_rhs(&self) -> bool {
        matches!(self, Operation::Add | Operation::DotProduct)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Render => "render",
            Operation::Transpose => "transpose",
            Operation::Scale => "scale",
            Operation::Add => "add",
            Operation::DotProduct => "dot_product",
            Operation::Magnitude => "magnitude",
            Operation::Normalize => "normalize",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "render" => Ok(Operation::Render),
            "transpose" => Ok(Operation::Transpose),
            "scale" => Ok(Operation::Scale),
            "add" => Ok(Operation::Add),
            "dot" | "dot_product" => Ok(Operation::DotProduct),
            "magnitude" => Ok(Operation::Magnitude),
            "normalize" => Ok(Operation::Normalize),
            _ => {
                let names: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
                Err(format!(
                    "Unknown operation: {}. Expected one of: {}",
                    s,
                    names.join(", ")
                ))
            }
        }
    }
}
