// src/noyau/format.rs
//
// Affichage des nombres (convention “Double.toString”)
// ---------------------------------------------------
// - 1e-3 <= |x| < 1e7 (et zéro) : décimal, au moins un chiffre après le point ("8.0")
// - sinon : notation scientifique "1.0E7", "6.123233995736766E-17"
// - NaN / Infinity / -Infinity
//
// Chiffres : représentation la plus courte qui relit la même valeur (Rust la fournit).
// Aucun arrondi imposé.

const SEUIL_BAS: f64 = 1e-3;
const SEUIL_HAUT: f64 = 1e7;

/// Chaîne d’affichage d’un résultat numérique.
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let a = x.abs();
    if a == 0.0 || (SEUIL_BAS..SEUIL_HAUT).contains(&a) {
        // Debug f64 reste en décimal sur cette plage et garde toujours ".0"
        return format!("{x:?}");
    }

    format_scientifique(x)
}

/// "1e7" -> "1.0E7" ; "1.5e-5" -> "1.5E-5"
fn format_scientifique(x: f64) -> String {
    let brut = format!("{x:e}");
    let (mantisse, exposant) = match brut.split_once('e') {
        Some(parts) => parts,
        None => (brut.as_str(), "0"),
    };

    if mantisse.contains('.') {
        format!("{mantisse}E{exposant}")
    } else {
        format!("{mantisse}.0E{exposant}")
    }
}
