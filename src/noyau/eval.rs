//! Noyau — évaluation (fonctions pures, sans état)
//!
//! - calcul binaire : deux opérandes texte + symbole -> chaîne résultat / erreur
//! - calcul unaire  : un opérande texte + fonction scientifique -> chaîne
//!
//! Aucune erreur ne sort d’ici autrement qu’en chaîne : c’est l’affichage qui la montre telle quelle.

use tracing::debug;

use super::erreur::{ErreurCalcul, StyleErreur};
use super::format::format_nombre;
use super::jetons::{FonctionScientifique, Operateur};

/// Lecture d’un opérande (pas de trim : les touches ne produisent pas d’espaces).
fn lire(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

/// Calcul binaire typé.
///
/// Les deux opérandes sont lus AVANT de regarder l’opérateur :
/// une entrée invalide l’emporte sur un opérateur inconnu.
pub fn calculer(gauche: &str, droite: &str, symbole: &str) -> Result<f64, ErreurCalcul> {
    let a = lire(gauche).ok_or(ErreurCalcul::EntreeInvalide)?;
    let b = lire(droite).ok_or(ErreurCalcul::EntreeInvalide)?;

    match Operateur::depuis_symbole(symbole).ok_or(ErreurCalcul::OperateurInconnu)? {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Divise => {
            if b == 0.0 {
                Err(ErreurCalcul::DivisionParZero)
            } else {
                Ok(a / b)
            }
        }
    }
}

/// API chaîne : résultat formaté, ou message d’erreur (style détaillé).
pub fn calcul_binaire(gauche: &str, droite: &str, symbole: &str) -> String {
    calcul_binaire_style(gauche, droite, symbole, StyleErreur::default())
}

pub fn calcul_binaire_style(
    gauche: &str,
    droite: &str,
    symbole: &str,
    style: StyleErreur,
) -> String {
    let sortie = match calculer(gauche, droite, symbole) {
        Ok(v) => format_nombre(v),
        Err(e) => e.message(style),
    };
    debug!(gauche, droite, symbole, resultat = %sortie, "calcul binaire");
    sortie
}

/// Transformation scientifique typée.
///
/// Entrée illisible : défaut propre à la fonction (0 ou 1), jamais d’erreur.
/// Retourne None seulement pour le carré d’une entrée illisible.
pub fn transformer(operande: &str, f: FonctionScientifique) -> Option<f64> {
    use FonctionScientifique::*;

    let x = lire(operande);
    let x_ou_defaut = || x.or(f.defaut()).unwrap_or(0.0);

    let v = match f {
        // Angles en degrés
        Sin => x_ou_defaut().to_radians().sin(),
        Cos => x_ou_defaut().to_radians().cos(),
        Tan => x_ou_defaut().to_radians().tan(),
        ArcTanDegres => x_ou_defaut().atan().to_degrees(),

        // Pas de contrôle de domaine : NaN / -inf se propagent
        Ln => x_ou_defaut().ln(),
        Log10 => x_ou_defaut().log10(),
        Log2 => x_ou_defaut().log2(),
        Racine => x_ou_defaut().sqrt(),

        Carre => x?.powi(2),

        // Constantes : l’opérande est ignoré
        Pi => std::f64::consts::PI,
        E => std::f64::consts::E,
    };
    Some(v)
}

/// Carré d’une entrée illisible.
const CARRE_ILLISIBLE: &str = "0";

/// API chaîne du panneau scientifique.
pub fn calcul_unaire(operande: &str, f: FonctionScientifique) -> String {
    let sortie = match transformer(operande, f) {
        Some(v) => format_nombre(v),
        None => CARRE_ILLISIBLE.to_string(),
    };
    debug!(operande, fonction = f.symbole(), resultat = %sortie, "calcul unaire");
    sortie
}
