// src/noyau/format.rs
//
// Affichage des nombres.
// - format_flottant   : forme la plus courte qui relit le même f64 ("9.0", "2.23606798", "1e-05")
// - arrondi           : arrondi décimal correct (via l’écriture décimale exacte du f64)
// - format_resultat   : chemin "=" (entier exact si possible, sinon 8 décimales)
// - format_operation  : chemin one-shot (entier sans ".0" si possible)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, ToPrimitive};

use super::erreur::ErreurCalcul;

/// Précision de l’affichage du tampon.
pub const DECIMALES: usize = 8;

/// Écriture “calculatrice” d’un f64 :
/// - toujours un point décimal hors notation scientifique ("9.0")
/// - notation scientifique si l’exposant sort de [-4, 16) : "1e-05", "1.633123935319537e+16"
pub fn format_flottant(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // {:e} donne les chiffres minimaux : "2.23606798e0", "1e-5", "-1.5e16"
    let sci = format!("{x:e}");
    let (mantisse, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..16).contains(&exp) {
        let s = format!("{x}");
        if s.contains('.') {
            s
        } else {
            format!("{s}.0")
        }
    } else {
        let signe = if exp < 0 { '-' } else { '+' };
        format!("{mantisse}e{signe}{:02}", exp.abs())
    }
}

/// Arrondi à `decimales` chiffres après la virgule.
/// On passe par l’écriture décimale exacte (pas de x * 1e8 qui perd des bits).
pub fn arrondi(x: f64, decimales: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.decimales$}").parse::<f64>().unwrap_or(x)
}

/// Résultat de "=" :
/// - entier mathématique => écriture entière exacte (pas de ".0", pas de perte sur les grands entiers)
/// - sinon => arrondi à DECIMALES puis écriture flottante
pub fn format_resultat(r: &BigRational) -> Result<String, ErreurCalcul> {
    if r.denom().is_one() {
        return Ok(r.numer().to_string());
    }

    let v = r.to_f64().ok_or(ErreurCalcul::Debordement)?;
    if !v.is_finite() {
        return Err(ErreurCalcul::Debordement);
    }
    Ok(format_flottant(arrondi(v, DECIMALES)))
}

/// Résultat d’une opération one-shot : entier sans ".0" si possible, sinon tel quel.
pub fn format_operation(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        if let Some(n) = BigInt::from_f64(x) {
            return n.to_string();
        }
    }
    format_flottant(x)
}
