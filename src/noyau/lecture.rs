// src/noyau/lecture.rs
//
// Lecture haute précision des bases fixes (π, e, Ω, Ω⁻¹)
// -------------------------------------------------------
// - entiers “scalés” (×10^digits), troncature (jamais d’arrondi)
// - π : Machin, mis en cache par précision
// - e : Σ 1/k!
// - Ω = π/e et Ω⁻¹ = e/π : rationnels exacts des deux valeurs scalées

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Digits de garde pour amortir les erreurs de troncature des séries.
const GARDE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
    Omega,
    OmegaInverse,
}

impl Constante {
    pub const TOUTES: [Constante; 4] = [
        Constante::Pi,
        Constante::E,
        Constante::Omega,
        Constante::OmegaInverse,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Constante::Pi => "π",
            Constante::E => "e",
            Constante::Omega => "Ω = π/e",
            Constante::OmegaInverse => "Ω⁻¹ = e/π",
        }
    }
}

/// API publique : développement décimal tronqué à `digits` chiffres après la virgule.
pub fn lire_constante(c: Constante, digits: usize) -> String {
    let prec = digits + GARDE;
    let scaled = match c {
        Constante::Pi => pi_scaled_cached(prec),
        Constante::E => e_scaled_compute(prec),
        Constante::Omega => {
            let r = BigRational::new(pi_scaled_cached(prec), e_scaled_compute(prec));
            rational_scaled(&r, prec)
        }
        Constante::OmegaInverse => {
            let r = BigRational::new(e_scaled_compute(prec), pi_scaled_cached(prec));
            rational_scaled(&r, prec)
        }
    };
    scaled_to_decimal(scaled / pow10(GARDE), digits)
}

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let entier = &scaled / &scale;
    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{entier}");
    }

    let frac = (&scaled % &scale).to_str_radix(10);
    format!("{signe}{entier}.{frac:0>digits$}")
}

/// r -> entier “scalé” = floor(r * 10^digits) (r ≥ 0 ici)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    (r.numer() * pow10(digits)) / r.denom()
}

/* ------------------------ π (Machin) + cache ------------------------ */

/// arctan(1/q) scalé, série alternée z - z^3/3 + z^5/5 - ...
fn arctan_inv_q_scaled(q: i64, scale: &BigInt) -> BigInt {
    let q = BigInt::from(q);
    let q2 = &q * &q;

    let mut q_pow = q.clone(); // q^(2k+1)
    let mut k: i64 = 0;
    let mut sum = BigInt::zero();

    loop {
        let term = scale / (&q_pow * BigInt::from(2 * k + 1));
        if term.is_zero() {
            break;
        }
        if k % 2 == 0 {
            sum += term;
        } else {
            sum -= term;
        }
        q_pow *= &q2;
        k += 1;
    }

    sum
}

fn pi_scaled_compute(digits: usize) -> BigInt {
    let scale = pow10(digits + GARDE);

    // π = 16*atan(1/5) - 4*atan(1/239)
    let a = arctan_inv_q_scaled(5, &scale);
    let b = arctan_inv_q_scaled(239, &scale);

    (BigInt::from(16) * a - BigInt::from(4) * b) / pow10(GARDE)
}

static PI_CACHE: OnceLock<Mutex<HashMap<usize, BigInt>>> = OnceLock::new();

fn pi_scaled_cached(digits: usize) -> BigInt {
    let m = PI_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    // Un mutex empoisonné garde un cache cohérent (insert atomique) : on le reprend.
    let mut guard = m.lock().unwrap_or_else(|p| p.into_inner());

    guard
        .entry(digits)
        .or_insert_with(|| pi_scaled_compute(digits))
        .clone()
}

/* ------------------------ e (Σ 1/k!) ------------------------ */

fn e_scaled_compute(digits: usize) -> BigInt {
    let scale = pow10(digits + GARDE);

    // terme_k = scale / k!, calculé par divisions successives
    let mut term = scale.clone();
    let mut sum = BigInt::zero();
    let mut k: u32 = 1;

    while !term.is_zero() {
        sum += &term;
        term /= k;
        k += 1;
    }

    sum / pow10(GARDE)
}
