// src/app.rs
//
// Calculatrice — module App (mode interactif)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + touches.rs + vue.rs)
// - Ré-exporter Tampon / ModeErreur (pour main.rs)
// - Fournir la boucle lecture -> touche -> rendu
//
// Important:
// - La boucle reçoit sa source (BufRead) et sa sortie (Write) : stdin/stdout en vrai,
//   Cursor/Vec<u8> dans les tests.
// - Les méta-commandes (help, clear, history, exit) sont gérées ici, pas dans le tampon.

pub mod etat;
pub mod touches;
pub mod vue;

// Ré-export pratique : `use crate::app::{ModeErreur, Tampon};`
pub use etat::{ModeErreur, Tampon};

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::info;

use touches::Touche;

const INVITE: &str = "➜ Touche ou opération : ";

/// Boucle interactive. Se termine sur exit/quit ou fin d’entrée.
pub fn lancer_interactif<R: BufRead, W: Write>(
    mut source: R,
    mut sortie: W,
    mode: ModeErreur,
) -> anyhow::Result<()> {
    let mut tampon = Tampon::new(mode);
    info!(?mode, "session interactive");

    write!(sortie, "{}", vue::banniere())?;
    afficher_tout(&mut sortie, &tampon)?;

    let mut octets = Vec::new();
    loop {
        write!(sortie, "{INVITE}")?;
        sortie.flush()?;

        octets.clear();
        let lus = source
            .read_until(b'\n', &mut octets)
            .context("lecture de l’entrée interactive")?;
        if lus == 0 {
            // fin d’entrée (Ctrl-D)
            write!(sortie, "\n{}", vue::au_revoir())?;
            break;
        }

        // octets non UTF-8 : la ligne devient une touche inconnue, la session continue
        let ligne = String::from_utf8_lossy(&octets);
        let cmd = ligne.trim();
        if cmd.is_empty() {
            continue;
        }

        match cmd.to_lowercase().as_str() {
            "exit" | "quit" => {
                write!(sortie, "{}", vue::au_revoir())?;
                break;
            }
            "clear" | "ac" => {
                tampon.appliquer(&Touche::Efface);
                write!(sortie, "\n{}\n", vue::ecran_efface())?;
                afficher_tout(&mut sortie, &tampon)?;
            }
            "help" => write!(sortie, "\n{}\n", vue::aide())?,
            "history" => write!(sortie, "\n{}\n", vue::historique(&tampon))?,
            _ => {
                tampon.appliquer(&Touche::lire(cmd));
                write!(sortie, "\n{}", vue::ecran(&tampon))?;
            }
        }
    }

    info!(resultats = tampon.historique().len(), "fin de session");
    Ok(())
}

fn afficher_tout<W: Write>(sortie: &mut W, tampon: &Tampon) -> anyhow::Result<()> {
    write!(sortie, "\n{}\n{}\n", vue::ecran(tampon), vue::clavier())?;
    Ok(())
}
