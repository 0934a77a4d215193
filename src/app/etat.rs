//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de l’évaluateur (section, entrées numériques, rapport, erreur)
//! et offrir des opérations simples (CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur la précision de lecture (digits).
//! - γ est stocké tel quel : la politique γ ≤ 0 appartient au noyau.

use crate::noyau::constantes::{omega, EXPOSANT_ELECTRON_OMEGA, GAMMA_BBN, PUISSANCE_TAUX_REACTION};

/// Précision de lecture par défaut (décimales exactes de π, e, Ω).
const DIGITS_DEFAUT: usize = 30;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// γ du présent dans la chronologie.
const GAMMA_DEFAUT: f64 = 0.5;

/// γ de la recombinaison (formation de l’électron, hypothèse par défaut).
const GAMMA_FORMATION_DEFAUT: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Electron,
    Evolution,
    Signature,
    Lithium,
    Chronologie,
    Constantes,
}

impl Section {
    pub const TOUTES: [Section; 6] = [
        Section::Electron,
        Section::Evolution,
        Section::Signature,
        Section::Lithium,
        Section::Chronologie,
        Section::Constantes,
    ];

    pub fn titre(self) -> &'static str {
        match self {
            Section::Electron => "Masse de l’électron",
            Section::Evolution => "Ω(γ)",
            Section::Signature => "Signature de formation",
            Section::Lithium => "Lithium primordial",
            Section::Chronologie => "Chronologie",
            Section::Constantes => "Constantes",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppOmega {
    pub section: Section,

    // --- entrées ---
    pub gamma: f64,
    pub gamma_formation: f64,
    pub omega_present: f64,
    pub exposant: f64,
    pub gamma_bbn: f64,
    pub puissance: f64,
    pub digits: usize,

    // --- sorties ---
    pub rapport: String,
    pub erreur: String,
    pub rapport_dispo: bool,
}

impl Default for AppOmega {
    fn default() -> Self {
        Self {
            section: Section::Electron,
            gamma: GAMMA_DEFAUT,
            gamma_formation: GAMMA_FORMATION_DEFAUT,
            omega_present: omega(),
            exposant: EXPOSANT_ELECTRON_OMEGA,
            gamma_bbn: GAMMA_BBN,
            puissance: PUISSANCE_TAUX_REACTION,
            digits: DIGITS_DEFAUT,
            rapport: String::new(),
            erreur: String::new(),
            rapport_dispo: false,
        }
    }
}

impl AppOmega {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrées par défaut + résultats).
    pub fn reset_total(&mut self) {
        let section = self.section;
        *self = Self::default();
        self.section = section;
    }

    /// CLR : effacer rapport + erreur (sans toucher aux entrées).
    pub fn clear_resultats(&mut self) {
        self.rapport.clear();
        self.erreur.clear();
        self.rapport_dispo = false;
    }

    /// Changer de section efface le rapport (il décrivait l’ancienne).
    pub fn set_section(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.clear_resultats();
        }
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : on CONSERVE le dernier rapport à l’écran, mais il n’est plus “à jour”.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.rapport_dispo = false;
    }

    /// Utilitaire : déposer un rapport complet.
    pub fn set_resultats(&mut self, rapport: impl Into<String>) {
        self.erreur.clear();
        self.rapport = rapport.into();
        self.rapport_dispo = true;
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }

    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = gamma;
    }
}
