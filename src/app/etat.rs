//! src/app/etat.rs
//!
//! État du tampon d’affichage (sans vue, sans terminal).
//!
//! Rôle : contenir l’expression en cours + l’historique des résultats,
//! et appliquer les touches une par une.
//!
//! Contrats :
//! - Le tampon n’est jamais vide ("0" par défaut).
//! - Un seul point décimal dans tout le tampon.
//! - Aucune erreur ne remonte à l’appelant : l’échec est gardé dans `erreur`
//!   et la vue affiche "Error".
//! - Les opérateurs sont écrits sous forme ASCII dès la saisie.

use tracing::{debug, warn};

use super::touches::{Operateur, Touche};
use crate::noyau::fonctions::calculer;
use crate::noyau::format::format_resultat;
use crate::noyau::{eval_expression, ErreurCalcul};

/// Texte affiché quand la dernière évaluation a échoué.
pub const SENTINELLE_ERREUR: &str = "Error";

const TEXTE_PI: &str = "3.141592653589793";

/// Que faire d’une touche qui arrive pendant que l’écran affiche "Error".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeErreur {
    /// La touche repart d’un tampon "0" (7 -> "7").
    #[default]
    Efface,
    /// Compatibilité stricte : "Error" devient le texte du tampon (7 -> "Error7").
    Cascade,
}

#[derive(Clone, Debug)]
pub struct Tampon {
    // --- expression en cours / dernier résultat ---
    texte: String,

    // --- échec de la dernière évaluation (None = affichage normal) ---
    erreur: Option<ErreurCalcul>,

    // --- résultats de "=" (jamais purgé) ---
    historique: Vec<String>,

    // --- parenthèses ouvertes non fermées (peut devenir négatif) ---
    profondeur: i64,

    mode: ModeErreur,
}

impl Default for Tampon {
    fn default() -> Self {
        Self::new(ModeErreur::default())
    }
}

impl Tampon {
    pub fn new(mode: ModeErreur) -> Self {
        Self {
            texte: "0".to_string(),
            erreur: None,
            historique: Vec::new(),
            profondeur: 0,
            mode,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// Ce que l’écran montre.
    pub fn affichage(&self) -> &str {
        if self.erreur.is_some() {
            SENTINELLE_ERREUR
        } else {
            &self.texte
        }
    }

    pub fn erreur(&self) -> Option<&ErreurCalcul> {
        self.erreur.as_ref()
    }

    pub fn historique(&self) -> &[String] {
        &self.historique
    }

    /// Parenthèses ouvertes moins parenthèses fermées (0 = équilibré).
    pub fn parentheses_ouvertes(&self) -> i64 {
        self.profondeur
    }

    /* ------------------------ Touches ------------------------ */

    /// Applique une touche. Ne retourne jamais d’erreur.
    pub fn appliquer(&mut self, touche: &Touche) {
        if *touche == Touche::Efface {
            self.reset();
            return;
        }
        if self.erreur.is_some() {
            self.sortir_erreur();
            // "=" sur "Error" : simple effacement, rien à évaluer ni à historiser
            if self.mode == ModeErreur::Efface && *touche == Touche::Egal {
                return;
            }
        }

        match touche {
            Touche::Chiffres(c) => self.remplacer_zero_ou_ajouter(c),

            Touche::Point => {
                if !self.texte.contains('.') {
                    self.texte.push('.');
                }
            }

            Touche::Operateur(op) => self.ajouter_operateur(*op),

            Touche::Fonction(f) => match calculer(*f, &self.texte) {
                Ok(t) => self.remplacer(t),
                Err(e) => self.echec(e),
            },

            Touche::Pi => self.remplacer(TEXTE_PI.to_string()),

            Touche::Ouvrante => {
                self.remplacer_zero_ou_ajouter("(");
                self.profondeur += 1;
            }
            Touche::Fermante => {
                self.texte.push(')');
                self.profondeur -= 1;
            }

            Touche::Egal => self.evaluer(),

            Touche::Supprime => self.supprimer(),

            // déjà traité plus haut
            Touche::Efface => {}

            Touche::Inconnue(_) => {}
        }

        debug!(touche = ?touche, affichage = %self.affichage(), "touche appliquée");
    }

    /// AC : "0", erreur effacée. L’historique reste.
    pub fn reset(&mut self) {
        self.texte = "0".to_string();
        self.erreur = None;
        self.profondeur = 0;
    }

    /* ------------------------ Règles internes ------------------------ */

    fn remplacer_zero_ou_ajouter(&mut self, s: &str) {
        if self.texte == "0" {
            self.texte = s.to_string();
        } else {
            self.texte.push_str(s);
        }
    }

    fn ajouter_operateur(&mut self, op: Operateur) {
        // "0" + opérateur : ignoré (pas une erreur)
        if self.texte != "0" {
            self.texte.push(' ');
            self.texte.push(op.canonique());
            self.texte.push(' ');
        }
    }

    /// Remplace le tampon par un résultat (plus de parenthèses en cours).
    fn remplacer(&mut self, texte: String) {
        self.texte = texte;
        self.profondeur = 0;
    }

    fn evaluer(&mut self) {
        if self.profondeur != 0 {
            self.echec(ErreurCalcul::Desequilibre);
            return;
        }

        let res = eval_expression(&self.texte).and_then(|r| format_resultat(&r));
        match res {
            Ok(t) => {
                self.historique.push(t.clone());
                self.remplacer(t);
            }
            Err(e) => self.echec(e),
        }
    }

    fn supprimer(&mut self) {
        if self.texte.chars().count() <= 1 {
            self.texte = "0".to_string();
            self.profondeur = 0;
            return;
        }
        match self.texte.pop() {
            Some('(') => self.profondeur -= 1,
            Some(')') => self.profondeur += 1,
            _ => {}
        }
    }

    fn echec(&mut self, e: ErreurCalcul) {
        warn!(erreur = %e, texte = %self.texte, "évaluation impossible");
        self.profondeur = 0;
        match self.mode {
            ModeErreur::Efface => self.erreur = Some(e),
            ModeErreur::Cascade => {
                // le texte devient littéralement "Error" et sert de base aux touches suivantes
                self.texte = SENTINELLE_ERREUR.to_string();
                self.erreur = Some(e);
            }
        }
    }

    /// Première touche après un échec (hors AC).
    fn sortir_erreur(&mut self) {
        self.erreur = None;
        if self.mode == ModeErreur::Efface {
            self.reset();
        }
    }
}
