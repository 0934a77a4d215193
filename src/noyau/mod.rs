//! Noyau Ω (pur, sans console)
//!
//! Organisation interne :
//! - constantes.rs : π, e, Ω = π/e, échelle de Planck, référence électron
//! - formule.rs    : Base / Terme / Formule + formule de l’électron
//! - eval.rs       : évaluateur (produit × échelle + écart)
//! - evolution.rs  : Ω(γ), signature de formation, croissance, lithium, chronologie
//! - erreur.rs     : erreurs de domaine
//! - lecture.rs    : décimales exactes de π, e, Ω, Ω⁻¹ (big int)
//! - format.rs     : rendu texte pour l’hôte

pub mod constantes;
pub mod erreur;
pub mod eval;
pub mod evolution;
pub mod format;
pub mod formule;
pub mod lecture;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use constantes::{omega, omega_inverse};
pub use erreur::ErreurDomaine;
pub use eval::{evaluer, Ecart, Evaluation};
pub use evolution::{
    chronologie, correction_lithium, croissance_omega, evolution_omega, signature_formation, Epoque,
};
pub use formule::{masse_electron, Base, Formule, Terme};
pub use lecture::{lire_constante, Constante};
