//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> valeur exacte (BigRational)
//!
//! Le texte évalué est celui du tampon : les opérateurs y sont déjà sous forme ASCII
//! (× et ÷ sont convertis à la saisie), aucune substitution ici.

use num_rational::BigRational;
use num_traits::ToPrimitive;
use tracing::trace;

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluer_rpn, to_rpn};

/// API publique : évalue une expression du tampon en valeur exacte.
pub fn eval_expression(expr_str: &str) -> Result<BigRational, ErreurCalcul> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::syntaxe("entrée vide"));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(jetons = %format_tokens(&jetons), rpn = %format_tokens(&rpn), "rpn");

    // 3) Valeur (pile, pas d’arbre)
    evaluer_rpn(&rpn)
}

/// Même pipeline, mais la valeur est ramenée en f64 (entrée des fonctions scientifiques).
pub fn eval_flottant(expr_str: &str) -> Result<f64, ErreurCalcul> {
    let r = eval_expression(expr_str)?;
    match r.to_f64() {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurCalcul::Debordement),
    }
}
