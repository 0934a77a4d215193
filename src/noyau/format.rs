// src/noyau/format.rs

use super::eval::{Ecart, Evaluation};
use super::formule::{Base, Terme};

/* ------------------------ Termes ------------------------ */

fn format_exposant(x: f64) -> String {
    // -359.1 -> "-359.1" ; 2.0 -> "2"
    format!("{x}")
}

/// Ω^(-359.1), π^(0.3), γ(0.5)^(2)
pub fn format_terme(t: &Terme) -> String {
    let exp = format_exposant(t.exposant);
    match t.base {
        Base::Gamma(g) => format!("γ({g})^({exp})"),
        b => format!("{}^({exp})", b.symbole()),
    }
}

/// Termes joints par ×, précédés de l’échelle.
pub fn format_formule(echelle: f64, termes: &[Terme]) -> String {
    let mut s = format_scientifique(echelle, 6);
    for t in termes {
        s.push_str(" × ");
        s.push_str(&format_terme(t));
    }
    s
}

/* ------------------------ Nombres ------------------------ */

/// Notation scientifique à `decimales` chiffres : 5.1036409520e-1
pub fn format_scientifique(x: f64, decimales: usize) -> String {
    format!("{x:.decimales$e}")
}

/// Pourcentage à 6 décimales : 0.124236 %
pub fn format_pourcentage(p: f64) -> String {
    format!("{p:.6} %")
}

/* ------------------------ Rapport ------------------------ */

pub fn format_ecart(e: &Ecart) -> String {
    format!(
        "écart absolu : {}\nécart relatif : {}",
        format_scientifique(e.absolu, 10),
        format_pourcentage(e.pourcentage)
    )
}

/// Démarche complète : une ligne par facteur, le produit, puis l’écart (si référence).
pub fn format_evaluation(termes: &[Terme], ev: &Evaluation, reference: Option<f64>) -> String {
    let mut lignes: Vec<String> = termes
        .iter()
        .zip(&ev.facteurs)
        .map(|(t, f)| format!("{:<14} = {}", format_terme(t), format_scientifique(*f, 10)))
        .collect();

    lignes.push(format!("théorique      = {:.10}", ev.theorique));

    if let (Some(r), Some(e)) = (reference, &ev.ecart) {
        lignes.push(format!("référence      = {r:.10}"));
        lignes.push(format_ecart(e));
    }

    lignes.join("\n")
}
