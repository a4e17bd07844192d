// src/app/vue.rs
//
// Vue texte (terminal)
// --------------------
// Objectifs :
// - Écran : le tampon aligné à droite dans un cadre
// - Clavier : rappel des touches disponibles
// - Aide / bannières / usage one-shot
//
// Note :
// - Pas de couleurs ni d’animations : la vue ne fait que produire des chaînes.

use super::etat::Tampon;
use crate::noyau::format::{format_flottant, format_operation};
use crate::noyau::Operation;

/// Largeur utile de l’écran (le texte est aligné à droite).
const LARGEUR_ECRAN: usize = 52;

pub fn banniere() -> String {
    let barre = "═".repeat(56);
    format!(
        "╔{barre}╗\n║{:^56}║\n╚{barre}╝\n",
        "CALCULATRICE SCIENTIFIQUE"
    )
}

/// Cadre + tampon aligné à droite.
/// Sous le cadre : la cause d’un "Error", ou les parenthèses restant à fermer.
pub fn ecran(tampon: &Tampon) -> String {
    let trait_h = "─".repeat(LARGEUR_ECRAN + 2);
    let mut out = format!(
        "┌{trait_h}┐\n│ {:>largeur$} │\n└{trait_h}┘\n",
        tampon.affichage(),
        largeur = LARGEUR_ECRAN
    );

    if let Some(e) = tampon.erreur() {
        out.push_str(&format!("  ({e})\n"));
    } else if tampon.parentheses_ouvertes() > 0 {
        out.push_str(&format!(
            "  parenthèses ouvertes : {}\n",
            tampon.parentheses_ouvertes()
        ));
    }
    out
}

pub fn clavier() -> &'static str {
    "\
Fonctions :        [AC]  [DEL]  [√]  [x²]  [x³]  [%]
Trigonométrie :    [sin]  [cos]  [tan]  [log]  [ln]  [π]
Chiffres & opérations :
                   [7]  [8]  [9]  [÷]  [×]
                   [4]  [5]  [6]  [-]  [+]
                   [1]  [2]  [3]  [.]  [=]
                   [0]            [(]  [)]
Commandes : help | clear | history | exit
"
}

pub fn aide() -> &'static str {
    "\
╔═══════════════════════════════════════════════╗
║            OPÉRATIONS DISPONIBLES             ║
╠═══════════════════════════════════════════════╣
║  Chiffres : 0-9                               ║
║  Base : + - × ÷ =                             ║
║  Puissances : x² x³ √                         ║
║  Trigo : sin cos tan (en degrés)              ║
║  Log : log (base 10) ln (népérien)            ║
║  Autres : π % ( ) AC DEL                      ║
║  Alias : x ou * (×), / (÷), pi (π), sqrt (√)  ║
║  Zéros de tête acceptés : 05 = 5              ║
╚═══════════════════════════════════════════════╝
"
}

pub fn historique(tampon: &Tampon) -> String {
    if tampon.historique().is_empty() {
        return "Historique vide.\n".to_string();
    }
    let mut out = String::from("Historique :\n");
    for (i, r) in tampon.historique().iter().enumerate() {
        out.push_str(&format!("  {:>3}. {r}\n", i + 1));
    }
    out
}

pub fn ecran_efface() -> &'static str {
    "Écran effacé !\n"
}

pub fn au_revoir() -> &'static str {
    "Merci d’avoir utilisé la calculatrice, au revoir !\n"
}

/// Écran affiché sans opération ni -i.
pub fn usage() -> String {
    let mut out = banniere();
    out.push_str("\nUsage :\n  calculatrice <operation> <a> <b>\n\nOpérations :\n");
    let lignes = [
        ("add", "Addition", "add 5 3"),
        ("sub", "Soustraction", "sub 10 4"),
        ("mul", "Multiplication", "mul 6 7"),
        ("div", "Division", "div 20 4"),
        ("pow", "Puissance", "pow 2 8"),
        ("mod", "Modulo", "mod 10 3"),
    ];
    for (op, nom, exemple) in lignes {
        out.push_str(&format!("  {op:<4} →  {nom:<15} Exemple : {exemple}\n"));
    }
    out.push_str("\nMode interactif :\n  --interactive (ou -i)\n");
    out
}

/// Ligne de résultat one-shot : "5.0 + 3.0 = 8".
pub fn ligne_resultat(op: Operation, a: f64, b: f64, r: f64) -> String {
    format!(
        "{} {} {} = {}",
        format_flottant(a),
        op.symbole(),
        format_flottant(b),
        format_operation(r)
    )
}
