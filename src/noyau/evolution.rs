// src/noyau/evolution.rs
//
// Évolution de Ω avec le facteur de dilatation γ
// ----------------------------------------------
// - Ω(γ) = π × e^(1 − 1/γ)       (γ ∈ ]0, 1])
// - signature de formation       = |n| × ln(Ω_présent / Ω_formation)
// - croissance depuis une époque  = Ω_présent / Ω(γ)
// - correction lithium (BBN)     = ⁷Li/H prédit × (Ω(γ)/Ω_présent)^k, via evaluer
// - chronologie cosmique         : table fixe d’époques évaluées par Ω(γ)
//
// Politique aux bornes (valeurs définies, PAS des erreurs) :
// - γ ≤ 0           => Ω = 0 (singularité, limite Big Bang)
// - Ω_x ≤ 0         => signature = 0, croissance = 0
//
// Pas de canal d’erreur ici : une entrée NaN/∞ ressort NaN/∞ (IEEE-754).

use std::f64::consts::PI;

use super::constantes::{omega, LITHIUM_OBSERVE, LITHIUM_PREDIT_BBN};
use super::erreur::ErreurDomaine;
use super::eval::{evaluer, Evaluation};
use super::formule::{Base, Terme};

/// Ω(γ) = π × e^(1 − 1/γ).
///
/// Strictement croissante sur ]0, 1], Ω(1) = π.
/// γ ≤ 0 : politique de borne, renvoie 0 (singularité asymptotique).
/// γ = NaN : renvoie NaN (aucune politique, l’appelant valide ses entrées).
pub fn evolution_omega(gamma: f64) -> f64 {
    if gamma <= 0.0 {
        // politique : limite Big Bang, pas une erreur
        return 0.0;
    }
    PI * (1.0 - 1.0 / gamma).exp()
}

/// Signature d’époque de formation : |n| × ln(Ω_présent / Ω_formation).
///
/// Approximation logarithmique (évite Ω^n qui déborde pour n ≈ -359).
/// Un Ω ≤ 0 : politique de borne, renvoie 0.
/// Un Ω infini ou un exposant NaN se propagent tels quels (∞ / NaN).
pub fn signature_formation(omega_formation: f64, omega_present: f64, exposant: f64) -> f64 {
    if omega_formation <= 0.0 || omega_present <= 0.0 {
        // politique : pas de signature mesurable
        return 0.0;
    }
    exposant.abs() * (omega_present / omega_formation).ln()
}

/// Facteur de croissance de Ω entre une époque et le présent : Ω_présent / Ω(γ).
///
/// Recombinaison (γ = 0.25) : e² ≈ 7.39.
/// γ ≤ 0 (Ω = 0) : politique de borne, renvoie 0 (pas de rapport défini).
pub fn croissance_omega(gamma_formation: f64) -> f64 {
    let om_f = evolution_omega(gamma_formation);
    if om_f <= 0.0 {
        return 0.0;
    }
    omega() / om_f
}

/* ------------------------ Lithium primordial ------------------------ */

/// Exposant de e tel que e^x = (Ω(γ)/Ω_présent)^k.
///
/// Ω(γ)/(π/e) = e^(2 − 1/γ), donc x = k(2 − 1/γ).
fn exposant_suppression(gamma: f64, puissance: f64) -> f64 {
    puissance * (2.0 - 1.0 / gamma)
}

/// Termes de la correction : un seul facteur e^(k(2 − 1/γ)).
pub fn termes_lithium(gamma: f64, puissance: f64) -> Vec<Terme> {
    vec![Terme::new(Base::E, exposant_suppression(gamma, puissance))]
}

/// ⁷Li/H corrigé = prédit BBN × (Ω(γ)/Ω_présent)^k, comparé à l’observé.
///
/// γ ≤ 0 : Ω(γ) = 0, le rapport n’a pas de puissance réelle définie => erreur de domaine.
pub fn correction_lithium(gamma: f64, puissance: f64) -> Result<Evaluation, ErreurDomaine> {
    if gamma <= 0.0 {
        return Err(ErreurDomaine::BaseNonPositive {
            base: Base::Gamma(gamma),
            valeur: gamma,
            exposant: puissance,
        });
    }
    evaluer(
        LITHIUM_PREDIT_BBN,
        &termes_lithium(gamma, puissance),
        Some(LITHIUM_OBSERVE),
    )
}

/* ------------------------ Chronologie cosmique ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Epoque {
    pub nom: &'static str,
    pub temps: &'static str,
    pub gamma: f64,
    pub evenement: &'static str,
}

/// Époques clés (γ croissant).
pub const EPOQUES: [Epoque; 9] = [
    Epoque { nom: "Big Bang", temps: "10⁻⁴³ s", gamma: 0.001, evenement: "Singularité" },
    Epoque { nom: "Grande unification", temps: "10⁻³⁶ s", gamma: 0.01, evenement: "Transition GUT" },
    Epoque { nom: "Électrofaible", temps: "10⁻¹² s", gamma: 0.1, evenement: "Brisure de symétrie EW" },
    Epoque { nom: "Phase QCD", temps: "10⁻⁶ s", gamma: 0.15, evenement: "Quarks → hadrons" },
    Epoque { nom: "Nucléosynthèse", temps: "3 min", gamma: 0.167, evenement: "Noyaux légers" },
    Epoque { nom: "Recombinaison", temps: "380 kan", gamma: 0.250, evenement: "Atomes, CMB" },
    Epoque { nom: "PRÉSENT", temps: "13.8 Gan", gamma: 0.500, evenement: "Nous sommes ici" },
    Epoque { nom: "Énergie noire", temps: "~30 Gan", gamma: 0.7, evenement: "Expansion accélérée" },
    Epoque { nom: "Mort thermique", temps: "∞", gamma: 1.0, evenement: "Entropie maximale" },
];

/// Ω(γ) pour chaque époque, dans l’ordre de la table.
pub fn chronologie() -> Vec<(Epoque, f64)> {
    EPOQUES
        .iter()
        .map(|e| (*e, evolution_omega(e.gamma)))
        .collect()
}
