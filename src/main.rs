// src/main.rs
//
// Calculatrice — point d’entrée (terminal)
// ----------------------------------------
// Deux formes:
// - ONE-SHOT    : `calculatrice <operation> <a> <b>` -> une ligne de résultat (ou d’erreur)
// - INTERACTIF  : `calculatrice -i` -> boucle sur le tampon d’affichage (stdin/stdout)
// Sans argument : écran d’usage.
//
// Code de sortie : 0 si succès, 1 si l’opération one-shot échoue ou si l’E/S casse.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

use app::{vue, ModeErreur};
use noyau::{ErreurOperation, Operation};

/// Calculatrice en ligne de commande (one-shot ou interactive)
#[derive(Parser, Debug)]
#[command(name = "calculatrice", version, about)]
struct Cli {
    /// Opération one-shot
    #[arg(value_enum)]
    operation: Option<Operation>,

    /// Premier opérande
    #[arg(allow_negative_numbers = true)]
    a: Option<f64>,

    /// Second opérande
    #[arg(allow_negative_numbers = true)]
    b: Option<f64>,

    /// Lance le mode interactif (une touche par ligne)
    #[arg(short, long)]
    interactive: bool,

    /// Compatibilité stricte : après "Error", les touches s’écrivent à la suite du texte
    #[arg(long)]
    cascade_erreurs: bool,

    /// Verbosité des logs sur stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logs(verbose: u8) {
    let niveau = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(niveau))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logs(cli.verbose);
    debug!(?cli, "arguments");

    if cli.interactive {
        let mode = if cli.cascade_erreurs {
            ModeErreur::Cascade
        } else {
            ModeErreur::Efface
        };
        return match app::lancer_interactif(io::stdin().lock(), io::stdout().lock(), mode) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("session interactive interrompue: {e:#}");
                ExitCode::FAILURE
            }
        };
    }

    let (op, a, b) = match (cli.operation, cli.a, cli.b) {
        (Some(op), Some(a), Some(b)) => (op, a, b),
        _ => {
            print!("{}", vue::usage());
            return ExitCode::SUCCESS;
        }
    };

    let code = match op.appliquer(a, b) {
        Ok(r) => {
            println!("{}", vue::ligne_resultat(op, a, b, r));
            ExitCode::SUCCESS
        }
        Err(ErreurOperation::DivisionParZero) => {
            println!("Erreur : division par zéro impossible");
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("Erreur : {e}");
            ExitCode::FAILURE
        }
    };

    // stdout peut être un tube fermé : rien d’autre à faire qu’ignorer
    let _ = io::stdout().flush();
    code
}
