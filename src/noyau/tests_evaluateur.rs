//! Tests de l’évaluateur : opérations binaires, erreurs, fonctions scientifiques.

use super::erreur::{ErreurCalcul, StyleErreur};
use super::eval::{calcul_binaire, calcul_binaire_style, calcul_unaire, calculer, transformer};
use super::jetons::FonctionScientifique::{self, *};

/* ------------------------ Binaire ------------------------ */

#[test]
fn binaire_quatre_operations() {
    assert_eq!(calcul_binaire("5", "3", "+"), "8.0");
    assert_eq!(calcul_binaire("5", "3", "-"), "2.0");
    assert_eq!(calcul_binaire("5", "3", "x"), "15.0");
    assert_eq!(calcul_binaire("6", "4", "÷"), "1.5");
    assert_eq!(calcul_binaire("0.1", "0.2", "+"), "0.30000000000000004");
}

#[test]
fn binaire_division_par_zero() {
    assert_eq!(calcul_binaire("7", "0", "÷"), "Error: Division by zero");
    assert_eq!(calcul_binaire("7", "0.0", "÷"), "Error: Division by zero");
    assert_eq!(calcul_binaire("7", "-0", "÷"), "Error: Division by zero");
    assert_eq!(calcul_binaire("0", "0", "/"), "Error: Division by zero");
}

#[test]
fn binaire_entree_invalide() {
    assert_eq!(calcul_binaire("abc", "1", "+"), "Error: Invalid input");
    assert_eq!(calcul_binaire("1", "", "+"), "Error: Invalid input");
    assert_eq!(calcul_binaire("1.2.3", "1", "+"), "Error: Invalid input");
    // Lecture avant l’opérateur : l’entrée invalide l’emporte
    assert_eq!(calcul_binaire("", "5", ""), "Error: Invalid input");
    assert_eq!(calcul_binaire("x", "5", "%"), "Error: Invalid input");
}

#[test]
fn binaire_operateur_inconnu() {
    assert_eq!(calcul_binaire("1", "2", "%"), "Error");
    assert_eq!(calcul_binaire("1", "2", ""), "Error");
    assert_eq!(calculer("1", "2", "^"), Err(ErreurCalcul::OperateurInconnu));
}

#[test]
fn binaire_style_bref() {
    let bref = StyleErreur::Bref;
    assert_eq!(calcul_binaire_style("1", "0", "÷", bref), "Error");
    assert_eq!(calcul_binaire_style("a", "0", "+", bref), "Error");
    assert_eq!(calcul_binaire_style("1", "2", "?", bref), "Error");
    assert_eq!(calcul_binaire_style("1", "2", "+", bref), "3.0");
}

#[test]
fn binaire_resultats_relus() {
    // Un résultat affiché doit pouvoir servir d’opérande (enchaînement)
    assert_eq!(calcul_binaire("1.0E7", "2", "x"), "2.0E7");
    assert_eq!(calcul_binaire("Infinity", "1", "-"), "Infinity");
    assert_eq!(calcul_binaire("NaN", "1", "+"), "NaN");
    assert_eq!(calcul_binaire("1e308", "10", "x"), "Infinity");
}

/* ------------------------ Unaire ------------------------ */

#[test]
fn unaire_trig_en_degres() {
    assert_eq!(calcul_unaire("0", Sin), "0.0");
    assert_eq!(calcul_unaire("0", Cos), "1.0");
    assert_eq!(calcul_unaire("0", Tan), "0.0");

    let s = transformer("30", Sin).unwrap_or(f64::NAN);
    assert!((s - 0.5).abs() < 1e-12, "sin(30°)={s}");
    let c = transformer("60", Cos).unwrap_or(f64::NAN);
    assert!((c - 0.5).abs() < 1e-12, "cos(60°)={c}");
    let t = transformer("45", Tan).unwrap_or(f64::NAN);
    assert!((t - 1.0).abs() < 1e-12, "tan(45°)={t}");
}

#[test]
fn unaire_arctan_en_degres() {
    let a = transformer("1", ArcTanDegres).unwrap_or(f64::NAN);
    assert!((a - 45.0).abs() < 1e-12, "atan(1)={a}");
    assert_eq!(calcul_unaire("0", ArcTanDegres), "0.0");
}

#[test]
fn unaire_logarithmes() {
    assert_eq!(calcul_unaire("100", Log10), "2.0");
    assert_eq!(calcul_unaire("8", Log2), "3.0");
    assert_eq!(calcul_unaire("1", Ln), "0.0");
    // Pas de contrôle de domaine
    assert_eq!(calcul_unaire("0", Ln), "-Infinity");
    assert_eq!(calcul_unaire("-1", Log10), "NaN");
}

#[test]
fn unaire_racine_et_carre() {
    assert_eq!(calcul_unaire("9", Racine), "3.0");
    assert_eq!(calcul_unaire("-4", Racine), "NaN");
    assert_eq!(calcul_unaire("3", Carre), "9.0");
    assert_eq!(calcul_unaire("-1.5", Carre), "2.25");
}

#[test]
fn unaire_defauts_entree_illisible() {
    // 0.0 pour sin/cos/tan/√/tan⁻¹
    assert_eq!(calcul_unaire("", Sin), "0.0");
    assert_eq!(calcul_unaire("", Cos), "1.0");
    assert_eq!(calcul_unaire("1.2.3", Racine), "0.0");
    assert_eq!(calcul_unaire("", ArcTanDegres), "0.0");
    // 1.0 pour ln/log/log2
    assert_eq!(calcul_unaire("", Ln), "0.0");
    assert_eq!(calcul_unaire("abc", Log10), "0.0");
    assert_eq!(calcul_unaire("", Log2), "0.0");
    // carré : "0" littéral
    assert_eq!(calcul_unaire("", Carre), "0");
    assert_eq!(calcul_unaire("..", Carre), "0");
}

#[test]
fn unaire_constantes_ignorent_operande() {
    for op in ["", "42", "n’importe quoi"] {
        assert_eq!(calcul_unaire(op, Pi), "3.141592653589793");
        assert_eq!(calcul_unaire(op, FonctionScientifique::E), "2.718281828459045");
    }
}
