// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Deux écrans :
// - Calculatrice : bandeau (DEG + accès historique), affichage, pavé, opérateurs,
//   bouton "Scientific" (hauteur animée) + panneau scientifique dépliable
// - Historique : opérations terminées, la plus récente en bas
//
// Chaque clic devient une Touche envoyée à AppCalc::appuyer (aucun calcul ici).

use eframe::egui;

use super::etat::{AppCalc, Ecran};
use crate::noyau::{FonctionScientifique, Operateur, Touche};

const ESPACE: f32 = 6.0;
const HAUTEUR_TOUCHE: f32 = 56.0;
const HAUTEUR_ECRAN: f32 = 120.0;

/// Hauteur du bouton "Scientific" (replié -> déplié), animée.
const PANNEAU_REPLIE: f32 = 40.0;
const PANNEAU_DEPLIE: f32 = 72.0;

const SARCELLE: egui::Color32 = egui::Color32::from_rgb(0x00, 0x96, 0x88);

/// (fond, texte) des rangées colorées.
const STYLE_OPERATEUR: (egui::Color32, egui::Color32) =
    (egui::Color32::LIGHT_GRAY, egui::Color32::BLACK);
const STYLE_SCIENTIFIQUE: (egui::Color32, egui::Color32) = (SARCELLE, egui::Color32::WHITE);

/// 'C' = Clear, le reste = chiffres / point.
const PAVE: [[char; 3]; 4] = [
    ['7', '8', '9'],
    ['4', '5', '6'],
    ['1', '2', '3'],
    ['.', '0', 'C'],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        match self.ecran {
            Ecran::Calculatrice => self.ui_calculatrice(ui),
            Ecran::Historique => self.ui_historique(ui),
        }
    }

    /* ------------------------ Écran calculatrice ------------------------ */

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        self.ui_bandeau(ui);
        ui.add_space(ESPACE);
        self.ui_affichage(ui);
        ui.add_space(ESPACE);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_pave_numerique(ui);
                self.ui_operateurs(ui);
                self.ui_scientifique(ui);
            });
    }

    fn ui_bandeau(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Les fonctions trig travaillent en degrés
            ui.label(egui::RichText::new("DEG").size(20.0));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let resp = ui
                    .add_sized(
                        [40.0, 40.0],
                        egui::Button::new(egui::RichText::new(":").size(24.0).strong()),
                    )
                    .on_hover_text("Historique");
                if resp.clicked() {
                    self.naviguer(Ecran::Historique);
                }
            });
        });
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(HAUTEUR_ECRAN);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.saisie.affichage())
                            .size(32.0)
                            .monospace(),
                    );
                });
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        let taille = [largeur_case(ui, 3), HAUTEUR_TOUCHE];

        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([ESPACE, ESPACE])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for c in ligne {
                        let (label, touche) = match c {
                            'C' => ("Clear".to_string(), Touche::Effacer),
                            _ => (c.to_string(), Touche::Chiffre(c)),
                        };
                        if touche_clavier(ui, &label, taille, None) {
                            self.appuyer(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_operateurs(&mut self, ui: &mut egui::Ui) {
        let taille = [largeur_case(ui, 5), HAUTEUR_TOUCHE];

        ui.horizontal(|ui| {
            for op in Operateur::TOUS {
                if touche_clavier(ui, op.symbole(), taille, Some(STYLE_OPERATEUR)) {
                    self.appuyer(Touche::operateur(op));
                }
            }
            if touche_clavier(ui, "=", taille, Some(STYLE_OPERATEUR)) {
                self.appuyer(Touche::Egal);
            }
        });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        let t = ui
            .ctx()
            .animate_bool(egui::Id::new("panneau_scientifique"), self.panneau_scientifique);
        let hauteur = egui::lerp(PANNEAU_REPLIE..=PANNEAU_DEPLIE, t);
        let largeur = ui.available_width();

        let bouton = egui::Button::new(
            egui::RichText::new("Scientific")
                .size(20.0)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(SARCELLE);
        if ui.add_sized([largeur, hauteur], bouton).clicked() {
            self.basculer_panneau();
        }

        if !self.panneau_scientifique {
            return;
        }

        let taille = [largeur_case(ui, 3), HAUTEUR_TOUCHE];
        egui::Grid::new("panneau_scientifique")
            .num_columns(3)
            .spacing([ESPACE, ESPACE])
            .show(ui, |ui| {
                for ligne in FonctionScientifique::PANNEAU {
                    for case in ligne {
                        match case {
                            Some(f) => {
                                if touche_clavier(ui, f.symbole(), taille, Some(STYLE_SCIENTIFIQUE)) {
                                    self.appuyer(Touche::Fonction(f));
                                }
                            }
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    /* ------------------------ Écran historique ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Retour").clicked() {
                self.naviguer(Ecran::Calculatrice);
            }
            ui.heading("Historique");
        });
        ui.separator();

        let lignes = self.saisie.historique();
        if lignes.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("Aucune opération pour l’instant").size(24.0));
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for ligne in lignes {
                    ui.monospace(ligne);
                }
            });
    }
}

/// Largeur d’une case quand `n` cases se partagent la ligne.
fn largeur_case(ui: &egui::Ui, n: usize) -> f32 {
    let n = n.max(1) as f32;
    ((ui.available_width() - (n - 1.0) * ESPACE) / n).max(32.0)
}

/// Gros bouton tactile ; true si cliqué.
fn touche_clavier(
    ui: &mut egui::Ui,
    label: &str,
    taille: [f32; 2],
    couleurs: Option<(egui::Color32, egui::Color32)>,
) -> bool {
    let texte = egui::RichText::new(label).size(24.0).strong();
    let bouton = match couleurs {
        Some((fond, encre)) => egui::Button::new(texte.color(encre)).fill(fond),
        None => egui::Button::new(texte),
    };
    ui.add_sized(taille, bouton).clicked()
}
