// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la forme infixe
// - Puis replier la RPN sur une pile de BigRational
//
// Règles:
// - Moins unaire: si '-' arrive quand on attend une valeur => Tok::Neg (préfixe, prioritaire)
// - Plus unaire: ignoré ("5 + + 3" == "5 + 3")
// - Pas de multiplication implicite: "2(3)" ou "(1)(2)" sont des erreurs de syntaxe

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurCalcul;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // vrai au début, après '(' et après un opérateur
    let mut attend_valeur = true;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurCalcul::syntaxe("deux valeurs consécutives"));
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurCalcul::syntaxe("'(' après une valeur"));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(ErreurCalcul::syntaxe("')' sans valeur"));
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalcul::Desequilibre),
                    }
                }
            }

            Tok::Minus if attend_valeur => ops.push(Tok::Neg),
            Tok::Plus if attend_valeur => {}

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(ErreurCalcul::syntaxe("opérateur sans opérande gauche"));
                }

                // tout est associatif à gauche : on sort tant que p_top >= p_tok
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
                attend_valeur = true;
            }

            Tok::Neg => return Err(ErreurCalcul::syntaxe("jeton interne inattendu")),
        }
    }

    if attend_valeur {
        return Err(ErreurCalcul::syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::Desequilibre);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de valeurs exactes.
/// Aucune récursion : la longueur de l’expression ne touche que le tas.
/// Seule erreur de calcul : division par zéro (détectée exactement).
pub fn evaluer_rpn(rpn: &[Tok]) -> Result<BigRational, ErreurCalcul> {
    let invalide = || ErreurCalcul::syntaxe("expression invalide");
    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r) => st.push(r),

            Tok::Neg => {
                let x = st.pop().ok_or_else(invalide)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(invalide)?;
                let a = st.pop().ok_or_else(invalide)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b.is_zero() {
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalcul::syntaxe("parenthèse inattendue en RPN"))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(invalide()),
    }
}
