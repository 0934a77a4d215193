//! Évaluateur Ω
//!
//! - noyau : évaluateur pur (formules π, e, Ω = π/e, γ), appelable par n’importe quel hôte
//! - app   : hôte egui (natif + web) qui rend les résultats du noyau

pub mod app;
pub mod noyau;
