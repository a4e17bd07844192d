// src/noyau/operations.rs
//
// Table des opérations one-shot : `calculatrice <op> <a> <b>`
// Pures, sans état. Les erreurs sont typées pour que main distingue
// la division par zéro des autres échecs.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurOperation {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat hors de portée (dépassement)")]
    Debordement,

    #[error("résultat non réel (base négative, exposant fractionnaire)")]
    ResultatNonReel,
}

impl Operation {
    /// Symbole affiché dans la ligne de résultat.
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "×",
            Operation::Div => "÷",
            Operation::Pow => "^",
            Operation::Mod => "mod",
        }
    }

    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurOperation> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Sub => Ok(a - b),
            Operation::Mul => Ok(a * b),

            Operation::Div if b == 0.0 => Err(ErreurOperation::DivisionParZero),
            Operation::Div => Ok(a / b),

            // reste avec le signe du dividende (opérateur % de Rust)
            Operation::Mod if b == 0.0 => Err(ErreurOperation::DivisionParZero),
            Operation::Mod => Ok(a % b),

            Operation::Pow => puissance(a, b),
        }
    }
}

fn puissance(a: f64, b: f64) -> Result<f64, ErreurOperation> {
    // 0 ^ (négatif) = 1/0
    if a == 0.0 && b < 0.0 {
        return Err(ErreurOperation::DivisionParZero);
    }

    let r = a.powf(b);
    if r.is_nan() && !a.is_nan() && !b.is_nan() {
        return Err(ErreurOperation::ResultatNonReel);
    }
    if r.is_infinite() && a.is_finite() && b.is_finite() {
        return Err(ErreurOperation::Debordement);
    }
    Ok(r)
}
