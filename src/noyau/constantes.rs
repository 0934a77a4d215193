// src/noyau/constantes.rs
//
// Constantes fixes du cadre Ω
// ---------------------------
// - bases : π, e, Ω = π/e (fonction pure, pas d’objet)
// - échelle de référence : masse de Planck (GeV)
// - valeur expérimentale : masse de l’électron (CODATA 2022, MeV)

use std::f64::consts::{E, PI};

/// Masse de Planck en GeV/c².
pub const MASSE_PLANCK_GEV: f64 = 1.220890e19;

/// Masse de l’électron, CODATA 2022, en MeV/c².
pub const MASSE_ELECTRON_EXPERIMENTALE: f64 = 0.5109989500;

/// Conversion GeV -> MeV.
pub const GEV_EN_MEV: f64 = 1000.0;

/// Exposant principal de la formule de l’électron (sur Ω).
pub const EXPOSANT_ELECTRON_OMEGA: f64 = -359.1;

/// Correction géométrique (sur π).
pub const EXPOSANT_ELECTRON_PI: f64 = 0.3;

/// Correction dynamique (sur e).
pub const EXPOSANT_ELECTRON_E: f64 = 0.1;

/// γ à la recombinaison (380 kan).
pub const GAMMA_RECOMBINAISON: f64 = 0.250;

/// γ à la nucléosynthèse primordiale (≈ 3 min).
pub const GAMMA_BBN: f64 = 0.167;

/// ⁷Li/H prédit par la nucléosynthèse standard.
pub const LITHIUM_PREDIT_BBN: f64 = 5.0e-10;

/// ⁷Li/H observé.
pub const LITHIUM_OBSERVE: f64 = 1.6e-10;

/// Puissance de Ω dans le taux de réaction (k ≈ 3-5, on prend 4).
pub const PUISSANCE_TAUX_REACTION: f64 = 4.0;

/// Ω = π/e ≈ 1.1557
pub fn omega() -> f64 {
    PI / E
}

/// Ω⁻¹ = e/π ≈ 0.8652
pub fn omega_inverse() -> f64 {
    E / PI
}
