//! Calculatrice simple
//!
//! - noyau    : évaluation + accumulateur de saisie (pur, sans UI, réutilisable)
//! - app      : état UI + vues egui (calculatrice / historique)
//! - reglages : reglages.toml optionnel

pub mod app;
pub mod noyau;
pub mod reglages;
