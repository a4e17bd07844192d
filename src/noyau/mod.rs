//! Noyau de calcul
//!
//! Organisation interne :
//! - erreur.rs     : erreurs typées (division par zéro, domaine, syntaxe, parenthèses, dépassement)
//! - jetons.rs     : tokenisation du texte du tampon
//! - rpn.rs        : shunting-yard + évaluation rationnelle sur pile
//! - eval.rs       : pipeline complet
//! - fonctions.rs  : sin/cos/tan (degrés), log, ln, √, x², x³, %
//! - format.rs     : affichage flottant / entier, arrondi 8 décimales
//! - operations.rs : table one-shot (add, sub, mul, div, pow, mod)

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod operations;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::eval_expression;
pub use fonctions::FonctionSci;
pub use operations::{ErreurOperation, Operation};
