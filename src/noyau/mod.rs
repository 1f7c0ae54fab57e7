//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - jetons.rs   : opérateurs, fonctions scientifiques, touches
//! - erreur.rs   : erreurs de calcul + style des messages
//! - format.rs   : affichage des nombres
//! - eval.rs     : calcul binaire / unaire (pur)
//! - saisie.rs   : accumulateur de saisie + historique

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod saisie;

#[cfg(test)]
mod tests_evaluateur;



// API publique minimale
pub use erreur::StyleErreur;
pub use eval::{calcul_binaire, calcul_unaire};
pub use jetons::{FonctionScientifique, Operateur, Touche};
pub use saisie::{ModeAffichage, Saisie};
