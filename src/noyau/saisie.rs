//! src/noyau/saisie.rs
//!
//! Accumulateur de saisie : l’état de la calculatrice entre deux touches.
//!
//! Contrats :
//! - État possédé, transitions pures : chaque touche consomme l’état et en rend un nouveau.
//! - Un seul opérateur en attente (le dernier choisi gagne, pas de priorité).
//! - Deux modes d’affichage : Saisie (expression en cours) / Resultat (dernier calcul).
//! - Historique en ajout seul, jamais effacé (pas même par Clear).

use tracing::{debug, trace};

use super::erreur::StyleErreur;
use super::eval::{calcul_binaire_style, calcul_unaire};
use super::jetons::{FonctionScientifique, Touche};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAffichage {
    #[default]
    Saisie,
    Resultat,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Saisie {
    gauche: Option<String>,
    operateur: Option<String>,
    courante: String,
    resultat: String,
    mode: ModeAffichage,
    historique: Vec<String>,
    style: StyleErreur,
}

impl Saisie {
    pub fn new(style: StyleErreur) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn gauche(&self) -> Option<&str> {
        self.gauche.as_deref()
    }

    pub fn operateur(&self) -> Option<&str> {
        self.operateur.as_deref()
    }

    pub fn courante(&self) -> &str {
        &self.courante
    }

    pub fn mode(&self) -> ModeAffichage {
        self.mode
    }

    /// Opérations terminées, la plus ancienne d’abord.
    pub fn historique(&self) -> &[String] {
        &self.historique
    }

    /// Valeur affichée : le résultat, ou "gauche op courante" (parties vides omises).
    pub fn affichage(&self) -> String {
        if self.mode == ModeAffichage::Resultat {
            return self.resultat.clone();
        }

        [
            self.gauche.as_deref().unwrap_or(""),
            self.operateur.as_deref().unwrap_or(""),
            self.courante.as_str(),
        ]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /* ------------------------ Transitions ------------------------ */

    /// Routage d’une touche vers la transition correspondante.
    #[must_use]
    pub fn appliquer(self, touche: Touche) -> Self {
        trace!(?touche, "touche");
        match touche {
            Touche::Chiffre(c) => self.ajouter_chiffre(c),
            Touche::Operateur(s) => self.choisir_operateur(&s),
            Touche::Egal => self.evaluer(),
            Touche::Fonction(f) => self.appliquer_fonction(f),
            Touche::Effacer => self.effacer(),
        }
    }

    /// Chiffre ou '.', ajouté tel quel (plusieurs '.' acceptés : "1.2.3" échouera au calcul).
    /// Tout autre caractère est ignoré.
    #[must_use]
    pub fn ajouter_chiffre(mut self, c: char) -> Self {
        if !(c.is_ascii_digit() || c == '.') {
            debug!(?c, "caractère ignoré");
            return self;
        }

        self.quitter_resultat();
        self.courante.push(c);
        self
    }

    /// Choix d’un opérateur. Depuis un résultat affiché, ce résultat devient l’opérande gauche.
    #[must_use]
    pub fn choisir_operateur(mut self, symbole: &str) -> Self {
        if self.mode == ModeAffichage::Resultat {
            self.mode = ModeAffichage::Saisie;
            self.gauche = Some(std::mem::take(&mut self.resultat));
            self.courante.clear();
        } else {
            // Verbatim, même vide ; un opérateur précédent est remplacé.
            self.gauche = Some(std::mem::take(&mut self.courante));
        }

        self.operateur = Some(symbole.to_string());
        self
    }

    /// "=" : calcule, affiche le résultat, l’ajoute à l’historique.
    #[must_use]
    pub fn evaluer(mut self) -> Self {
        if self.mode == ModeAffichage::Resultat {
            // "=" répété : le résultat devient l’opérande gauche, l’entrée repart vide.
            self.gauche = Some(std::mem::take(&mut self.resultat));
            self.courante.clear();
        }

        let gauche = self.gauche.as_deref().unwrap_or("");
        let operateur = self.operateur.as_deref().unwrap_or("");
        let resultat = calcul_binaire_style(gauche, &self.courante, operateur, self.style);

        let ligne = format!("{gauche} {operateur} {} = {resultat}", self.courante);
        debug!(%ligne, "historique");
        self.historique.push(ligne);

        self.resultat = resultat;
        self.mode = ModeAffichage::Resultat;
        self
    }

    /// Fonction scientifique appliquée sur place à l’entrée courante.
    /// Ne touche ni à l’opérande gauche, ni à l’opérateur, ni à l’historique.
    #[must_use]
    pub fn appliquer_fonction(mut self, f: FonctionScientifique) -> Self {
        self.quitter_resultat();
        self.courante = calcul_unaire(&self.courante, f);
        self
    }

    /// Clear : tout revient à vide, en mode Saisie (l’historique reste).
    #[must_use]
    pub fn effacer(self) -> Self {
        Self {
            historique: self.historique,
            style: self.style,
            ..Self::default()
        }
    }

    /// Sortie du mode Resultat par une nouvelle entrée : l’entrée repart de zéro.
    fn quitter_resultat(&mut self) {
        if self.mode == ModeAffichage::Resultat {
            self.courante.clear();
            self.mode = ModeAffichage::Saisie;
        }
    }
}
