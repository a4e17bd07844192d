//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés du noyau sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes :
//! - Les valeurs du tampon sont exactes (rationnels) : 0.1 + 0.2 vaut exactement 3/10.
//! - Les fonctions scientifiques passent par f64 puis arrondi à 8 décimales.
//! - mod suit le signe du dividende (opérateur % de Rust).

use std::time::{Duration, Instant};

use super::eval_expression;
use super::fonctions::calculer;
use super::format::format_resultat;
use super::{ErreurCalcul, ErreurOperation, FonctionSci, Operation};

fn affiche_ok(expr: &str) -> String {
    let r = eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    format_resultat(&r).unwrap_or_else(|e| panic!("expr={expr:?} format err={e}"))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Table one-shot ------------------------ */

#[test]
fn sci_division_inverse_sur_grille() {
    let valeurs = [-1e6, -12.5, -1.0, -0.1, 0.0, 0.3, 1.0, 7.0, 2.5e-3, 1e9];
    for &a in &valeurs {
        for &b in &valeurs {
            let r = Operation::Div.appliquer(a, b);
            if b == 0.0 {
                assert_eq!(r, Err(ErreurOperation::DivisionParZero), "div({a},{b})");
                continue;
            }
            let q = r.unwrap_or_else(|e| panic!("div({a},{b}) err={e}"));
            let ecart = (q * b - a).abs();
            assert!(ecart <= 1e-9 * a.abs().max(1.0), "div({a},{b})*{b} ≉ {a}");
        }
    }
}

#[test]
fn sci_modulo_meme_convention_que_l_hote() {
    let valeurs = [-9.5, -7.0, -1.0, 2.0, 3.0, 4.25, 10.0];
    for &a in &valeurs {
        for &b in &valeurs {
            let r = Operation::Mod.appliquer(a, b).unwrap();
            assert_eq!(r.to_bits(), (a % b).to_bits(), "mod({a},{b})");
        }
        assert_eq!(
            Operation::Mod.appliquer(a, 0.0),
            Err(ErreurOperation::DivisionParZero)
        );
    }
}

#[test]
fn sci_puissance_exposant_nul() {
    assert_eq!(Operation::Pow.appliquer(2.0, 8.0), Ok(256.0));
    for a in [-100.0, -1.5, 0.25, 3.0, 1e200] {
        assert_eq!(Operation::Pow.appliquer(a, 0.0), Ok(1.0), "pow({a},0)");
    }
}

/* ------------------------ Pipeline d’expression ------------------------ */

#[test]
fn sci_precedence_comme_l_arithmetique_usuelle() {
    assert_eq!(affiche_ok("2 + 3 * 4 - 6 / 2"), "11");
    assert_eq!(affiche_ok("(2 + 3) * (4 - 6) / 2"), "-5");
    assert_eq!(affiche_ok("((((7))))"), "7");
    assert_eq!(affiche_ok("1 - 2 - 3 - 4"), "-8");
    assert_eq!(affiche_ok("2 * - 3"), "-6");
}

#[test]
fn sci_exactitude_decimale() {
    // pas de bruit flottant sur les décimaux saisis
    assert_eq!(affiche_ok("0.1 + 0.2"), "0.3");
    assert_eq!(affiche_ok("0.1 * 3"), "0.3");
    assert_eq!(affiche_ok("1.1 * 1.1"), "1.21");
    assert_eq!(affiche_ok("0.7 + 0.1 + 0.2"), "1");
}

#[test]
fn sci_arrondi_huit_decimales() {
    assert_eq!(affiche_ok("1 / 7"), "0.14285714");
    assert_eq!(affiche_ok("2 / 3"), "0.66666667");
    assert_eq!(affiche_ok("1 / 3 * -1"), "-0.33333333");
    // arrondi qui tombe sur un entier : reste flottant ("1.0"), comme un résultat non entier
    assert_eq!(affiche_ok("1.000000001"), "1.0");
}

#[test]
fn sci_relecture_des_resultats_de_fonctions() {
    // un résultat de fonction ("1.633123935319537e+16", "1e-05") doit pouvoir être réévalué
    let t = calculer(FonctionSci::Tan, "90").unwrap();
    assert!(t.contains("e+16"), "tan(90°) = {t}");
    assert!(eval_expression(&t).is_ok());

    let p = calculer(FonctionSci::Pourcent, "0.001").unwrap();
    assert!(eval_expression(&p).is_ok(), "relecture de {p}");
}

#[test]
fn sci_erreurs_typees() {
    assert_eq!(eval_expression("1 / (2 - 2)"), Err(ErreurCalcul::DivisionParZero));
    assert_eq!(eval_expression("((1)"), Err(ErreurCalcul::Desequilibre));
    assert!(matches!(eval_expression("1 +"), Err(ErreurCalcul::Syntaxe(_))));
    assert!(matches!(
        calculer(FonctionSci::Sqrt, "0 - 1"),
        Err(ErreurCalcul::Domaine(_))
    ));
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_taille_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut expr = String::new();
    for k in 0..200 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    // 200 * 0.5 = 100
    assert_eq!(affiche_ok(&expr), "100");
}

#[test]
fn sci_stress_somme_tres_longue_sans_debordement_de_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(10_000);

    // 100 000 termes : l’évaluation ne doit dépendre que du tas
    let n = 100_000;
    let expr = vec!["1"; n].join(" + ");
    assert_eq!(affiche_ok(&expr), n.to_string());
    budget(t0, max);

    let expr = format!("{} 1", "- ".repeat(n));
    assert_eq!(affiche_ok(&expr), "1");
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_imbriquees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let n = 200;
    let expr = format!("{}1{}", "(".repeat(n), " + 1)".repeat(n));
    budget(t0, max);

    assert_eq!(affiche_ok(&expr), "201");
}

#[test]
fn sci_stress_bigint_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // gros entier contrôlé (100 chiffres)
    let big = "9".repeat(100);
    let expr = format!("{big} + 1");
    budget(t0, max);

    let attendu = format!("1{}", "0".repeat(100));
    assert_eq!(affiche_ok(&expr), attendu);
}
