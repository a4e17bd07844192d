// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::ErreurCalcul;

/// Exposant décimal maximal accepté dans un littéral (1e-05, 1.5e+16...).
/// Au-delà, aucun f64 fini ne peut l’avoir produit.
const EXPOSANT_MAX: u32 = 400;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    // Produit par le shunting-yard seulement (moins unaire)
    Neg,

    LPar,
    RPar,
}

/// Tokenize le texte du tampon.
/// Supporte:
/// - décimaux (ex: 12, 0.5, 3., .25)
/// - exposant (ex: 1e-05, 1.633123935319537e+16) : c’est ce que produit l’affichage flottant
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Tout le reste (y compris "Error") est une erreur de syntaxe.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (r, suivant) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(r));
            i = suivant;
            continue;
        }

        return Err(ErreurCalcul::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Lit un littéral décimal à partir de `start`, retourne (valeur exacte, index suivant).
fn lire_nombre(chars: &[char], start: usize) -> Result<(BigRational, usize), ErreurCalcul> {
    let mut i = start;

    let mut chiffres = String::new();
    while i < chars.len() && chars[i].is_ascii_digit() {
        chiffres.push(chars[i]);
        i += 1;
    }

    let mut nb_frac: usize = 0;
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            chiffres.push(chars[i]);
            nb_frac += 1;
            i += 1;
        }
    }

    if chiffres.is_empty() {
        return Err(ErreurCalcul::syntaxe("point décimal isolé"));
    }

    // exposant : e[+-]chiffres (sinon 'e' reste un caractère inattendu)
    let mut exposant: i64 = 0;
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        let mut negatif = false;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            negatif = chars[j] == '-';
            j += 1;
        }
        let debut = j;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut {
            let txt: String = chars[debut..j].iter().collect();
            let e: u32 = txt
                .parse()
                .ok()
                .filter(|e| *e <= EXPOSANT_MAX)
                .ok_or(ErreurCalcul::Debordement)?;
            exposant = if negatif { -i64::from(e) } else { i64::from(e) };
            i = j;
        }
    }

    let mantisse = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurCalcul::syntaxe("nombre invalide"))?;

    // valeur = mantisse × 10^(exposant - nb_frac)
    let puissance = exposant - nb_frac as i64;
    let dix = BigInt::from(10);
    let r = if puissance >= 0 {
        BigRational::from_integer(mantisse * dix.pow(puissance as u32))
    } else {
        BigRational::new(mantisse, dix.pow((-puissance) as u32))
    };

    Ok((r, i))
}

/// Format utilitaire (logs) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
