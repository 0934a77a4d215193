//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariant clé : Ok => toutes les valeurs sont finies ; sinon ErreurDomaine (jamais NaN/∞)

use std::time::{Duration, Instant};

use super::{evaluer, evolution_omega, signature_formation, Base, ErreurDomaine, Terme};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    /// Réel dans [lo, hi[
    fn reel(&mut self, lo: f64, hi: f64) -> f64 {
        let u = self.next_u32() as f64 / (u32::MAX as f64 + 1.0);
        lo + (hi - lo) * u
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

fn gen_base(rng: &mut Rng) -> Base {
    match rng.pick(5) {
        0 => Base::Pi,
        1 => Base::E,
        2 => Base::Omega,
        // γ inclut volontairement 0 et des négatifs
        3 => Base::Gamma(rng.reel(-0.5, 1.0)),
        _ => Base::Gamma(0.0),
    }
}

fn gen_exposant(rng: &mut Rng) -> f64 {
    match rng.pick(4) {
        0 => rng.pick(9) as f64 - 4.0, // entier
        1 => -359.1,
        _ => rng.reel(-50.0, 50.0),
    }
}

fn gen_termes(rng: &mut Rng) -> Vec<Terme> {
    let n = rng.pick(5); // 0 terme possible
    (0..n)
        .map(|_| Terme::new(gen_base(rng), gen_exposant(rng)))
        .collect()
}

fn gen_echelle(rng: &mut Rng) -> f64 {
    match rng.pick(10) {
        0 => 0.0,
        1 => -rng.reel(1e-3, 1e3),
        _ => rng.reel(1e-3, 1e22),
    }
}

fn gen_reference(rng: &mut Rng) -> Option<f64> {
    match rng.pick(5) {
        0 => None,
        1 => Some(0.0),
        2 => Some(-1.0),
        _ => Some(rng.reel(1e-3, 1e3)),
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_evaluer_jamais_non_fini() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0x5eed_0e9a);

    let mut ok = 0usize;
    for _ in 0..5_000 {
        let echelle = gen_echelle(&mut rng);
        let termes = gen_termes(&mut rng);
        let reference = gen_reference(&mut rng);

        match evaluer(echelle, &termes, reference) {
            Ok(ev) => {
                ok += 1;
                assert!(echelle > 0.0);
                assert!(ev.theorique.is_finite(), "termes={termes:?}");
                assert_eq!(ev.facteurs.len(), termes.len());
                assert!(ev.facteurs.iter().all(|f| f.is_finite()));
                match (reference, ev.ecart) {
                    (Some(r), Some(e)) => {
                        assert!(r > 0.0);
                        assert!(e.absolu.is_finite() && e.absolu >= 0.0);
                        assert!(e.pourcentage.is_finite() && e.pourcentage >= 0.0);
                    }
                    (None, None) => {}
                    autre => panic!("écart incohérent: {autre:?}"),
                }
            }
            Err(ErreurDomaine::AucunTerme) => assert!(termes.is_empty()),
            Err(ErreurDomaine::EchelleInvalide(e)) => assert!(e <= 0.0),
            Err(ErreurDomaine::ReferenceNulle) => assert_eq!(reference, Some(0.0)),
            Err(ErreurDomaine::ReferenceInvalide(r)) => assert!(r < 0.0),
            Err(ErreurDomaine::BaseNonPositive { valeur, .. }) => assert!(valeur <= 0.0),
            Err(ErreurDomaine::ResultatNonFini) => {}
            Err(e) => panic!("erreur inattendue {e:?} pour termes={termes:?}"),
        }
        budget(t0, max);
    }

    // la campagne doit produire une part raisonnable de succès
    assert!(ok > 500, "trop peu de succès: {ok}");
}

#[test]
fn fuzz_evaluer_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let mut rng = Rng::new(42);

    for _ in 0..1_000 {
        let echelle = rng.reel(1e-3, 1e3);
        let termes = gen_termes(&mut rng);
        let reference = gen_reference(&mut rng);

        let a = evaluer(echelle, &termes, reference);
        let b = evaluer(echelle, &termes, reference);
        assert_eq!(a, b, "termes={termes:?}");
        budget(t0, max);
    }
}

#[test]
fn fuzz_omega_monotone_paires() {
    let mut rng = Rng::new(7);
    for _ in 0..2_000 {
        // ]0.01, 1] : e^(1 − 1/γ) reste représentable
        let a = rng.reel(0.01, 1.0);
        let b = rng.reel(0.01, 1.0);
        if a == b {
            continue;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        assert!(evolution_omega(lo) < evolution_omega(hi), "γ {lo} / {hi}");
    }
}

#[test]
fn fuzz_signature_finie_et_positive_si_croissance() {
    let mut rng = Rng::new(99);
    for _ in 0..2_000 {
        let g_form = rng.reel(0.05, 0.5);
        let g_pres = rng.reel(0.5, 1.0);
        let n = gen_exposant(&mut rng);

        let s = signature_formation(evolution_omega(g_form), evolution_omega(g_pres), n);
        assert!(s.is_finite());
        // Ω_présent ≥ Ω_formation => ln ≥ 0
        assert!(s >= 0.0, "s={s} γf={g_form} γp={g_pres} n={n}");
    }
}
