//! src/reglages.rs
//!
//! Réglages utilisateur (reglages.toml), optionnels.
//!
//! Emplacement natif : <config_dir>/calculatrice-simple/reglages.toml
//! Fichier absent, illisible ou mal formé => valeurs par défaut (jamais bloquant).
//! En wasm : valeurs par défaut.
//!
//! Exemple :
//!   style_erreur = "bref"
//!   panneau_scientifique_ouvert = true

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::StyleErreur;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    /// Messages d’erreur détaillés ou "Error" partout.
    pub style_erreur: StyleErreur,
    /// Panneau scientifique déplié au lancement.
    pub panneau_scientifique_ouvert: bool,
}

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture impossible: {0}")]
    Lecture(#[from] std::io::Error),

    #[error("format invalide: {0}")]
    Format(#[from] toml::de::Error),
}

impl Reglages {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        Ok(toml::from_str(texte)?)
    }

    /// Charge les réglages du poste, ou les défauts (avec un warning si le fichier est fautif).
    pub fn charger() -> Self {
        match Self::charger_fichier() {
            Ok(Some(r)) => {
                tracing::info!(?r, "réglages chargés");
                r
            }
            Ok(None) => {
                tracing::debug!("pas de fichier de réglages, valeurs par défaut");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("réglages ignorés: {e}");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn charger_fichier() -> Result<Option<Self>, ErreurReglages> {
        let Some(chemin) = dirs::config_dir()
            .map(|d| d.join("calculatrice-simple").join("reglages.toml"))
        else {
            return Ok(None);
        };

        match std::fs::read_to_string(&chemin) {
            Ok(texte) => Self::depuis_toml(&texte).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn charger_fichier() -> Result<Option<Self>, ErreurReglages> {
        Ok(None)
    }
}
