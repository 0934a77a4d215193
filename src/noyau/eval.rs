//! Noyau — évaluation (pipeline réel)
//!
//! vérif. entrées -> facteurs base^exposant (un par terme) -> produit × échelle
//!        -> vérif. finitude -> écart (si référence)
//!
//! Remarque : fonction pure. Pas de log, pas d’état partagé, pas de retry :
//! soit une valeur, soit une ErreurDomaine.

use super::erreur::ErreurDomaine;
use super::formule::{Base, Terme};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ecart {
    pub absolu: f64,
    pub pourcentage: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub theorique: f64,
    /// base^exposant pour chaque terme, dans l’ordre d’entrée (la “démarche”).
    pub facteurs: Vec<f64>,
    /// None si aucune référence n’a été fournie.
    pub ecart: Option<Ecart>,
}

/// API publique : théorique = échelle × Π(base_i ^ exposant_i), puis écart
/// absolu et relatif (%) contre la référence si elle est fournie.
pub fn evaluer(
    echelle: f64,
    termes: &[Terme],
    reference: Option<f64>,
) -> Result<Evaluation, ErreurDomaine> {
    if termes.is_empty() {
        return Err(ErreurDomaine::AucunTerme);
    }
    if !echelle.is_finite() {
        return Err(ErreurDomaine::EntreeNonFinie("échelle"));
    }
    if echelle <= 0.0 {
        return Err(ErreurDomaine::EchelleInvalide(echelle));
    }

    // Référence vérifiée AVANT le calcul : une référence nulle est une faute d’appel.
    if let Some(r) = reference {
        verifie_reference(r)?;
    }

    // 1) Facteurs
    let mut facteurs = Vec::with_capacity(termes.len());
    for t in termes {
        facteurs.push(facteur(t)?);
    }

    // 2) Produit
    let theorique = facteurs.iter().fold(echelle, |acc, f| acc * f);
    if !theorique.is_finite() {
        return Err(ErreurDomaine::ResultatNonFini);
    }

    // 3) Écart
    let ecart = reference.map(|r| ecart_contre(theorique, r));

    Ok(Evaluation {
        theorique,
        facteurs,
        ecart,
    })
}

fn verifie_reference(r: f64) -> Result<(), ErreurDomaine> {
    if r == 0.0 {
        return Err(ErreurDomaine::ReferenceNulle);
    }
    if !r.is_finite() || r < 0.0 {
        return Err(ErreurDomaine::ReferenceInvalide(r));
    }
    Ok(())
}

/// |théorique − r| et 100·|théorique − r|/r. `r` déjà vérifié (> 0, fini).
fn ecart_contre(theorique: f64, r: f64) -> Ecart {
    let absolu = (theorique - r).abs();
    Ecart {
        absolu,
        pourcentage: 100.0 * absolu / r,
    }
}

/// base^exposant pour un terme, avec contrôle de domaine.
/// - γ ≤ 0 : toujours une erreur (quel que soit l’exposant)
/// - autre base ≤ 0 : erreur si exposant non entier
/// - sous-débordement (ex. e^-800) : facteur 0.0 accepté, valeur finie
fn facteur(t: &Terme) -> Result<f64, ErreurDomaine> {
    if !t.exposant.is_finite() {
        return Err(ErreurDomaine::EntreeNonFinie("exposant"));
    }

    let b = t.base.valeur();
    let gamma = matches!(t.base, Base::Gamma(_));
    if !b.is_finite() {
        return Err(ErreurDomaine::EntreeNonFinie("base"));
    }

    if b <= 0.0 && (gamma || !est_entier(t.exposant)) {
        return Err(ErreurDomaine::BaseNonPositive {
            base: t.base,
            valeur: b,
            exposant: t.exposant,
        });
    }

    let v = if est_entier(t.exposant) && t.exposant.abs() <= i32::MAX as f64 {
        b.powi(t.exposant as i32)
    } else {
        b.powf(t.exposant)
    };

    if !v.is_finite() {
        return Err(ErreurDomaine::ResultatNonFini);
    }
    Ok(v)
}

fn est_entier(x: f64) -> bool {
    x.fract() == 0.0
}
