// src/noyau/fonctions.rs
//
// Fonctions scientifiques (touches unaires)
// -----------------------------------------
// - Appliquées à la valeur courante du tampon (évaluée d’abord en entier)
// - sin/cos/tan : argument en DEGRÉS
// - Résultat arrondi à 8 décimales et écrit en flottant ("9.0" reste "9.0")
// - % : v/100, sans arrondi

use super::erreur::ErreurCalcul;
use super::eval::eval_flottant;
use super::format::{arrondi, format_flottant, DECIMALES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionSci {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Carre,
    Cube,
    Pourcent,
}

impl FonctionSci {
    /// Applique la fonction à une valeur finie.
    pub fn appliquer(self, v: f64) -> Result<f64, ErreurCalcul> {
        use FonctionSci::*;

        let r = match self {
            Sin => v.to_radians().sin(),
            Cos => v.to_radians().cos(),
            Tan => v.to_radians().tan(),

            Log | Ln if v <= 0.0 => return Err(ErreurCalcul::Domaine("logarithme de v ≤ 0")),
            Log => v.log10(),
            Ln => v.ln(),

            Sqrt if v < 0.0 => return Err(ErreurCalcul::Domaine("racine de v < 0")),
            Sqrt => v.sqrt(),

            Carre => v.powi(2),
            Cube => v.powi(3),
            Pourcent => v / 100.0,
        };

        if !r.is_finite() {
            return Err(ErreurCalcul::Debordement);
        }
        Ok(r)
    }

    /// % garde toute la précision, les autres sont arrondies.
    fn arrondit(self) -> bool {
        !matches!(self, FonctionSci::Pourcent)
    }
}

/// Évalue le texte du tampon, applique la fonction, et retourne le nouveau texte du tampon.
pub fn calculer(f: FonctionSci, texte: &str) -> Result<String, ErreurCalcul> {
    let v = eval_flottant(texte)?;
    let r = f.appliquer(v)?;

    let r = if f.arrondit() { arrondi(r, DECIMALES) } else { r };
    Ok(format_flottant(r))
}
