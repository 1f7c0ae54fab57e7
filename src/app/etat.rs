//! src/app/etat.rs
//!
//! État UI (sans vue, sans calcul).
//!
//! Rôle : posséder l’accumulateur du noyau, l’écran actif et le panneau scientifique.
//! Toute touche passe par `appuyer`, qui remplace l’accumulateur par son successeur.
//!
//! Contrats :
//! - Aucune évaluation ici (le noyau s’en charge).
//! - L’historique n’existe que dans l’accumulateur (pas de copie côté UI).

use crate::noyau::{Saisie, Touche};
use crate::reglages::Reglages;

/// Écran affiché.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ecran {
    #[default]
    Calculatrice,
    Historique,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub saisie: Saisie,
    pub ecran: Ecran,
    pub panneau_scientifique: bool,
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            saisie: Saisie::new(reglages.style_erreur),
            ecran: Ecran::Calculatrice,
            panneau_scientifique: reglages.panneau_scientifique_ouvert,
        }
    }

    /// Une touche : l’accumulateur est consommé puis remplacé.
    pub fn appuyer(&mut self, touche: Touche) {
        let saisie = std::mem::take(&mut self.saisie);
        self.saisie = saisie.appliquer(touche);
    }

    pub fn naviguer(&mut self, ecran: Ecran) {
        if self.ecran != ecran {
            tracing::debug!(?ecran, "navigation");
            self.ecran = ecran;
        }
    }

    pub fn basculer_panneau(&mut self) {
        self.panneau_scientifique = !self.panneau_scientifique;
    }
}
