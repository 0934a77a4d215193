// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppOmega (etat.rs) pour natif + wasm
// - Une section = un appel au noyau, rendu en texte monospace
// - Les erreurs de domaine deviennent des messages (le noyau ne parle jamais)

use eframe::egui;

use super::etat::{AppOmega, Section, DIGITS_MAX};
use crate::noyau::constantes::LITHIUM_OBSERVE;
use crate::noyau::evolution::termes_lithium;
use crate::noyau::format::{format_evaluation, format_formule};
use crate::noyau::formule::formule_electron;
use crate::noyau::{
    chronologie, correction_lithium, croissance_omega, evolution_omega, lire_constante,
    signature_formation, Constante, ErreurDomaine,
};

impl AppOmega {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Évaluateur Ω = π/e");
                ui.add_space(6.0);

                self.ui_sections(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entrees(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_rapport(ui);
            });
    }

    fn ui_sections(&mut self, ui: &mut egui::Ui) {
        let mut choix = self.section;
        ui.horizontal_wrapped(|ui| {
            for s in Section::TOUTES {
                ui.selectable_value(&mut choix, s, s.titre());
            }
        });
        self.set_section(choix);
    }

    fn ui_entrees(&mut self, ui: &mut egui::Ui) {
        match self.section {
            Section::Electron => {
                let f = formule_electron();
                ui.label(format!("{} :", f.nom));
                ui.monospace(format_formule(f.echelle, &f.termes));
            }
            Section::Evolution => {
                ui.horizontal(|ui| {
                    ui.label("γ :");
                    let mut g = self.gamma;
                    let resp = ui.add(egui::DragValue::new(&mut g).speed(0.001).range(-1.0..=1.0));
                    if resp.changed() {
                        self.set_gamma(g);
                    }
                });
            }
            Section::Signature => {
                egui::Grid::new("entrees_signature")
                    .num_columns(2)
                    .spacing([6.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("γ formation :");
                        ui.add(
                            egui::DragValue::new(&mut self.gamma_formation)
                                .speed(0.001)
                                .range(-1.0..=1.0),
                        );
                        ui.end_row();

                        ui.label("Ω présent :");
                        ui.add(egui::DragValue::new(&mut self.omega_present).speed(0.001));
                        ui.end_row();

                        ui.label("exposant :");
                        ui.add(egui::DragValue::new(&mut self.exposant).speed(0.1));
                        ui.end_row();
                    });
            }
            Section::Lithium => {
                egui::Grid::new("entrees_lithium")
                    .num_columns(2)
                    .spacing([6.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("γ BBN :");
                        ui.add(
                            egui::DragValue::new(&mut self.gamma_bbn)
                                .speed(0.001)
                                .range(-1.0..=1.0),
                        );
                        ui.end_row();

                        ui.label("puissance k :");
                        ui.add(egui::DragValue::new(&mut self.puissance).speed(0.1).range(0.0..=10.0));
                        ui.end_row();
                    });
                ui.label("⁷Li/H prédit × (Ω_BBN/Ω_présent)^k, comparé à l’observé.");
            }
            Section::Chronologie => {
                ui.label("γ fixé par époque.");
            }
            Section::Constantes => {
                ui.horizontal(|ui| {
                    ui.label("Lecture :");
                    let mut d = self.digits as u32;
                    let resp = ui.add(
                        egui::DragValue::new(&mut d)
                            .speed(1)
                            .range(0..=DIGITS_MAX as u32)
                            .suffix(" chiffres"),
                    );
                    if resp.changed() {
                        self.set_digits(d as usize);
                    }
                });
            }
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let calc = ui.add_sized([96.0, 32.0], egui::Button::new("Calculer"));
            if calc.clicked() {
                self.calcul_via_noyau();
            }

            let clr = ui
                .add_sized([56.0, 30.0], egui::Button::new("CLR"))
                .on_hover_text("Efface rapport + erreur");
            if clr.clicked() {
                self.clear_resultats();
            }

            let ac = ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale");
            if ac.clicked() {
                self.reset_total();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_rapport(&mut self, ui: &mut egui::Ui) {
        ui.label("Rapport :");
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(4.0 * ui.text_style_height(&egui::TextStyle::Monospace));
                if self.rapport_dispo {
                    ui.monospace(&self.rapport);
                } else if self.rapport.is_empty() {
                    ui.monospace("indisponible");
                } else {
                    // dernier rapport conservé après une erreur
                    ui.weak(&self.rapport);
                }
            });
    }

    /// Calcule la section courante via le noyau, puis dépose le rapport dans l’état UI.
    fn calcul_via_noyau(&mut self) {
        log::debug!("calcul section={:?}", self.section);

        match self.rapport_section() {
            Ok(txt) => self.set_resultats(txt),
            Err(e) => {
                log::warn!("erreur de domaine ({:?}): {e}", self.section);
                self.set_erreur(e.to_string());
            }
        }
    }

    /// Texte du rapport pour la section courante (un appel au noyau).
    fn rapport_section(&self) -> Result<String, ErreurDomaine> {
        let lignes: Vec<String> = match self.section {
            Section::Electron => {
                let f = formule_electron();
                let ev = f.evaluer()?;
                vec![format_evaluation(&f.termes, &ev, f.reference)]
            }

            Section::Evolution => {
                let om = evolution_omega(self.gamma);
                let mut l = vec![format!("Ω(γ={}) = {om:.10}", self.gamma)];
                if self.gamma <= 0.0 {
                    l.push("(limite singularité : γ ≤ 0 => Ω = 0)".to_string());
                }
                l
            }

            Section::Signature => {
                let om_f = evolution_omega(self.gamma_formation);
                let sig = signature_formation(om_f, self.omega_present, self.exposant);
                vec![
                    format!("Ω formation = {om_f:.6}"),
                    format!("Ω présent   = {:.6}", self.omega_present),
                    format!(
                        "croissance  = {:.6} (π/e ÷ Ω formation)",
                        croissance_omega(self.gamma_formation)
                    ),
                    format!("signature   = {sig:.6} (fraction)"),
                ]
            }

            Section::Lithium => {
                let ev = correction_lithium(self.gamma_bbn, self.puissance)?;
                let termes = termes_lithium(self.gamma_bbn, self.puissance);
                vec![format_evaluation(&termes, &ev, Some(LITHIUM_OBSERVE))]
            }

            Section::Chronologie => chronologie()
                .into_iter()
                .map(|(e, om)| {
                    format!(
                        "{:<20} {:<10} {:5.3}  {om:7.4}  {}",
                        e.nom, e.temps, e.gamma, e.evenement
                    )
                })
                .collect(),

            Section::Constantes => Constante::TOUTES
                .into_iter()
                .map(|c| format!("{:<10} {}", c.libelle(), lire_constante(c, self.digits)))
                .collect(),
        };

        Ok(lignes.join("\n"))
    }
}
