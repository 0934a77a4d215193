//! Noyau — modèle de formule
//!
//! Une formule = échelle de référence × Π(base^exposant), comparée (ou non)
//! à une valeur de référence. Construite à partir de littéraux, jamais mutée.

use std::f64::consts::{E, PI};

use super::constantes::{
    omega, EXPOSANT_ELECTRON_E, EXPOSANT_ELECTRON_OMEGA, EXPOSANT_ELECTRON_PI, GEV_EN_MEV,
    MASSE_ELECTRON_EXPERIMENTALE, MASSE_PLANCK_GEV,
};
use super::erreur::ErreurDomaine;
use super::eval::{evaluer, Evaluation};

/// Bases admises dans un terme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Base {
    Pi,
    E,
    /// Ω = π/e
    Omega,
    /// Facteur de dilatation temporelle fourni par l’appelant.
    Gamma(f64),
}

impl Base {
    pub fn valeur(self) -> f64 {
        match self {
            Base::Pi => PI,
            Base::E => E,
            Base::Omega => omega(),
            Base::Gamma(g) => g,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Base::Pi => "π",
            Base::E => "e",
            Base::Omega => "Ω",
            Base::Gamma(_) => "γ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Terme {
    pub base: Base,
    pub exposant: f64,
}

impl Terme {
    pub const fn new(base: Base, exposant: f64) -> Self {
        Self { base, exposant }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Formule {
    pub nom: &'static str,
    pub echelle: f64,
    pub termes: Vec<Terme>,
    /// Absente si la formule n’a pas de contrepartie expérimentale.
    pub reference: Option<f64>,
}

impl Formule {
    pub fn evaluer(&self) -> Result<Evaluation, ErreurDomaine> {
        evaluer(self.echelle, &self.termes, self.reference)
    }
}

/* ------------------------ Formule concrète ------------------------ */

/// m_e = m_P × Ω^(-359.1) × π^(0.3) × e^(0.1), en MeV.
pub fn formule_electron() -> Formule {
    Formule {
        nom: "masse de l’électron",
        echelle: MASSE_PLANCK_GEV * GEV_EN_MEV,
        termes: vec![
            Terme::new(Base::Omega, EXPOSANT_ELECTRON_OMEGA),
            Terme::new(Base::Pi, EXPOSANT_ELECTRON_PI),
            Terme::new(Base::E, EXPOSANT_ELECTRON_E),
        ],
        reference: Some(MASSE_ELECTRON_EXPERIMENTALE),
    }
}

/// Raccourci : évalue la formule de l’électron.
pub fn masse_electron() -> Result<Evaluation, ErreurDomaine> {
    formule_electron().evaluer()
}
