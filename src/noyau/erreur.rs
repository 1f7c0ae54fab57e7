// src/noyau/erreur.rs
//
// Erreurs du noyau + rendu en chaîne
// ----------------------------------
// Le noyau calcule avec Result<f64, ErreurCalcul>.
// L’extérieur (saisie, vue) ne voit jamais que des chaînes :
// la conversion se fait ici, selon le StyleErreur choisi.

use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Un des opérandes n’est pas un nombre (ex: "", "abc", "1.2.3").
    #[error("Error: Invalid input")]
    EntreeInvalide,

    /// Division par un opérande droit valant exactement 0.0.
    #[error("Error: Division by zero")]
    DivisionParZero,

    /// Symbole d’opérateur absent ou non reconnu.
    #[error("Error")]
    OperateurInconnu,
}

/// Forme des messages d’erreur affichés.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleErreur {
    /// "Error: Invalid input", "Error: Division by zero", "Error".
    #[default]
    Detaille,
    /// "Error" partout.
    Bref,
}

/// Message générique (style bref, et opérateur inconnu dans tous les styles).
pub const ERREUR_BREVE: &str = "Error";

impl ErreurCalcul {
    /// Chaîne affichée à l’utilisateur pour cette erreur.
    pub fn message(self, style: StyleErreur) -> String {
        match style {
            StyleErreur::Detaille => self.to_string(),
            StyleErreur::Bref => ERREUR_BREVE.to_string(),
        }
    }
}
