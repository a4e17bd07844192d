//! src/app/touches.rs
//!
//! Lecture d’une touche : une ligne saisie -> `Touche`.
//! Les noms (sin, AC, DEL...) sont insensibles à la casse.
//! Ce qui n’est pas reconnu devient `Touche::Inconnue` (ignorée par le tampon).

use std::str::FromStr;

use crate::noyau::FonctionSci;

/// Opérateur binaire, déjà sous forme canonique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Forme ASCII écrite dans le tampon (× -> *, ÷ -> /).
    pub fn canonique(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Un ou plusieurs chiffres ASCII ("7", "42").
    Chiffres(String),
    Point,
    Operateur(Operateur),
    Fonction(FonctionSci),
    Pi,
    Ouvrante,
    Fermante,
    Egal,
    Efface,
    Supprime,
    Inconnue(String),
}

impl FromStr for Touche {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let brut = s.trim();
        let bas = brut.to_lowercase();

        let t = match bas.as_str() {
            c if !c.is_empty() && c.chars().all(|ch| ch.is_ascii_digit()) => {
                Touche::Chiffres(c.to_string())
            }
            "." => Touche::Point,

            "+" => Touche::Operateur(Operateur::Plus),
            "-" => Touche::Operateur(Operateur::Moins),
            "*" | "x" | "×" => Touche::Operateur(Operateur::Fois),
            "/" | "÷" => Touche::Operateur(Operateur::Divise),

            "sin" => Touche::Fonction(FonctionSci::Sin),
            "cos" => Touche::Fonction(FonctionSci::Cos),
            "tan" => Touche::Fonction(FonctionSci::Tan),
            "log" => Touche::Fonction(FonctionSci::Log),
            "ln" => Touche::Fonction(FonctionSci::Ln),
            "sqrt" | "√" => Touche::Fonction(FonctionSci::Sqrt),
            "x²" | "x^2" => Touche::Fonction(FonctionSci::Carre),
            "x³" | "x^3" => Touche::Fonction(FonctionSci::Cube),
            "%" => Touche::Fonction(FonctionSci::Pourcent),

            "π" | "pi" => Touche::Pi,
            "(" => Touche::Ouvrante,
            ")" => Touche::Fermante,
            "=" => Touche::Egal,
            "ac" | "clear" => Touche::Efface,
            "del" => Touche::Supprime,

            _ => Touche::Inconnue(brut.to_string()),
        };
        Ok(t)
    }
}

impl Touche {
    /// Raccourci infaillible pour la boucle et les tests.
    pub fn lire(s: &str) -> Touche {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}
