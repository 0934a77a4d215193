//! Tests scientifiques (campagne) : propriétés du noyau Ω.
//!
//! - déterminisme bit à bit
//! - exemple de l’électron (6 chiffres significatifs, écart ≈ 0.124 %)
//! - monotonie de Ω(γ) sur ]0, 1]
//! - politiques de borne (γ ≤ 0, Ω ≤ 0) distinctes des erreurs de domaine

use std::f64::consts::PI;

use super::constantes::{omega, GEV_EN_MEV, MASSE_ELECTRON_EXPERIMENTALE, MASSE_PLANCK_GEV};
use super::{evaluer, evolution_omega, signature_formation, Base, ErreurDomaine, Terme};

fn termes_electron() -> Vec<Terme> {
    vec![
        Terme::new(Base::Omega, -359.1),
        Terme::new(Base::Pi, 0.3),
        Terme::new(Base::E, 0.1),
    ]
}

fn assert_proche(a: f64, b: f64, tol: f64, ctx: &str) {
    assert!((a - b).abs() <= tol, "{ctx}: {a} vs {b} (tol {tol})");
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_determinisme_bit_a_bit() {
    let termes = termes_electron();
    let echelle = MASSE_PLANCK_GEV * GEV_EN_MEV;

    let a = evaluer(echelle, &termes, Some(MASSE_ELECTRON_EXPERIMENTALE)).unwrap();
    for _ in 0..100 {
        let b = evaluer(echelle, &termes, Some(MASSE_ELECTRON_EXPERIMENTALE)).unwrap();
        assert_eq!(a.theorique.to_bits(), b.theorique.to_bits());
        let (ea, eb) = (a.ecart.unwrap(), b.ecart.unwrap());
        assert_eq!(ea.absolu.to_bits(), eb.absolu.to_bits());
        assert_eq!(ea.pourcentage.to_bits(), eb.pourcentage.to_bits());
    }
}

#[test]
fn sci_termes_non_mutes() {
    let termes = termes_electron();
    let copie = termes.clone();

    let a = evaluer(1.0, &termes, None).unwrap();
    let b = evaluer(1.0, &termes, None).unwrap();

    assert_eq!(termes, copie);
    assert_eq!(a, b);
}

/* ------------------------ Exemple électron ------------------------ */

#[test]
fn sci_exemple_electron() {
    let ev = evaluer(
        MASSE_PLANCK_GEV * GEV_EN_MEV,
        &termes_electron(),
        Some(MASSE_ELECTRON_EXPERIMENTALE),
    )
    .unwrap();

    // 6 chiffres significatifs
    assert_eq!(format!("{:.6}", ev.theorique), "0.510364");

    let e = ev.ecart.unwrap();
    assert_proche(e.pourcentage, 0.124, 0.01, "écart %");
    assert_proche(
        e.absolu,
        MASSE_ELECTRON_EXPERIMENTALE - ev.theorique,
        1e-15,
        "écart absolu",
    );
}

#[test]
fn sci_reference_nulle_erreur_distincte() {
    let r = evaluer(1.0, &termes_electron(), Some(0.0));
    assert_eq!(r, Err(ErreurDomaine::ReferenceNulle));
}

/* ------------------------ Ω(γ) ------------------------ */

#[test]
fn sci_omega_monotone_points_cles() {
    let a = evolution_omega(0.1);
    let b = evolution_omega(0.5);
    let c = evolution_omega(1.0);
    assert!(a < b && b < c, "{a} < {b} < {c}");
    assert_proche(c, PI, 1e-15, "Ω(1)");
}

#[test]
fn sci_omega_monotone_balayage() {
    // balayage fin de ]0, 1] (commence là où e^(1 − 1/γ) ne sous-déborde plus)
    let mut prec = evolution_omega(0.002);
    let mut k = 3;
    while k <= 1000 {
        let g = k as f64 / 1000.0;
        let v = evolution_omega(g);
        assert!(v > prec, "γ={g}: {v} <= {prec}");
        prec = v;
        k += 1;
    }
}

#[test]
fn sci_omega_present_entre_bornes() {
    // Ω(γ) traverse π/e entre la recombinaison et la fin
    let op = omega();
    assert!(evolution_omega(0.25) < op);
    assert!(evolution_omega(1.0) > op);

    // γ tel que Ω(γ) = π/e : 1 − 1/γ = −1 => γ = 1/2
    assert_proche(evolution_omega(0.5), op, 1e-15, "Ω(1/2)");
}

#[test]
fn sci_politique_gamma() {
    // valeurs de politique, pas des erreurs
    assert_eq!(evolution_omega(0.0), 0.0);
    assert_eq!(evolution_omega(-5.0), 0.0);
}

/* ------------------------ Signature de formation ------------------------ */

#[test]
fn sci_signature_nulle_si_epoques_identiques() {
    let op = omega();
    for n in [-359.1, -10.0, 0.3, 1.0, 1e6] {
        assert_eq!(signature_formation(op, op, n), 0.0, "n={n}");
    }
}

#[test]
fn sci_signature_recombinaison() {
    // Ω(0.25) = π e^-3 ; ln(Ω_présent / Ω_recomb) = ln(e^2) = 2
    let om_recomb = evolution_omega(0.25);
    let s = signature_formation(om_recomb, omega(), -359.1);
    assert_proche(s, 359.1 * 2.0, 1e-9, "signature");
}

#[test]
fn sci_signature_symetrie_exposant() {
    let a = signature_formation(0.5, 1.2, -3.0);
    let b = signature_formation(0.5, 1.2, 3.0);
    assert_eq!(a, b);
}

#[test]
fn sci_politique_signature() {
    assert_eq!(signature_formation(-1.0, omega(), -359.1), 0.0);
    assert_eq!(signature_formation(omega(), 0.0, -359.1), 0.0);
}

/* ------------------------ Domaine ------------------------ */

#[test]
fn sci_gamma_comme_base() {
    // γ positif : permis, même avec exposant non entier
    let ev = evaluer(1.0, &[Terme::new(Base::Gamma(0.25), 0.5)], None).unwrap();
    assert_proche(ev.theorique, 0.5, 1e-15, "√0.25");

    // γ ≤ 0 : erreur de domaine (pas NaN)
    let r = evaluer(1.0, &[Terme::new(Base::Gamma(-0.25), 0.5)], None);
    assert!(matches!(r, Err(ErreurDomaine::BaseNonPositive { .. })));
}

#[test]
fn sci_exposants_negatifs_grands() {
    // e^-700 reste fini (≈ 9.86e-305) : pas d’erreur
    let ev = evaluer(1.0, &[Terme::new(Base::E, -700.0)], None).unwrap();
    assert!(ev.theorique > 0.0);
    assert_proche(ev.theorique.ln(), -700.0, 1e-9, "ln(e^-700)");
}
