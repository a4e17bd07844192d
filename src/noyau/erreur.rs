// src/noyau/erreur.rs
//
// Erreurs du noyau (évaluation du tampon).
// Le tampon ne les affiche jamais telles quelles : la vue rend "Error".
// On garde quand même le type pour les logs et les tests.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    /// log/ln de v ≤ 0, √ de v < 0.
    #[error("hors domaine: {0}")]
    Domaine(&'static str),

    #[error("syntaxe: {0}")]
    Syntaxe(String),

    #[error("parenthèses déséquilibrées")]
    Desequilibre,

    /// Valeur non finie (inf / NaN) ou trop grande pour un f64.
    #[error("dépassement de capacité")]
    Debordement,
}

impl ErreurCalcul {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }
}
