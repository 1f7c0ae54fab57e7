// src/app.rs
//
// Calculatrice simple — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier physique : chiffres/./opérateurs tapés, Enter = "=", Escape = Clear

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{Operateur, Touche};
use etat::Ecran;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Le clavier ne pilote que l’écran calculatrice.
        if self.ecran == Ecran::Calculatrice {
            for touche in touches_clavier(ctx) {
                self.appuyer(touche);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événements clavier de la frame -> touches de la calculatrice.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut touches = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(texte) => touches.extend(texte.chars().filter_map(touche_texte)),
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => touches.push(Touche::Egal),
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => touches.push(Touche::Effacer),
                _ => {}
            }
        }
        touches
    })
}

fn touche_texte(c: char) -> Option<Touche> {
    if c.is_ascii_digit() || c == '.' {
        return Some(Touche::Chiffre(c));
    }
    if c == '=' {
        return Some(Touche::Egal);
    }
    let mut buf = [0u8; 4];
    Operateur::depuis_symbole(c.encode_utf8(&mut buf)).map(Touche::operateur)
}
