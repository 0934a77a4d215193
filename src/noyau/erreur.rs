// src/noyau/erreur.rs
//
// Erreurs de domaine du noyau.
// Une précondition mathématique violée => variante dédiée, jamais NaN/∞ silencieux.

use thiserror::Error;

use super::formule::Base;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurDomaine {
    /// Écart en % impossible : la référence est nulle (division par zéro).
    #[error("référence nulle : écart relatif indéfini")]
    ReferenceNulle,

    /// Référence négative ou non finie.
    #[error("référence invalide : {0} (réel positif attendu)")]
    ReferenceInvalide(f64),

    /// Base ≤ 0 sous un exposant non entier (ou γ ≤ 0) : indéfini dans les réels.
    #[error("terme indéfini : base {base:?} = {valeur} avec exposant {exposant}")]
    BaseNonPositive {
        base: Base,
        valeur: f64,
        exposant: f64,
    },

    /// Échelle de référence nulle ou négative (réel positif attendu).
    #[error("échelle invalide : {0} (réel positif attendu)")]
    EchelleInvalide(f64),

    /// Une formule sans terme n’a pas de sens.
    #[error("liste de termes vide")]
    AucunTerme,

    /// Entrée non finie (échelle, exposant).
    #[error("entrée non finie : {0}")]
    EntreeNonFinie(&'static str),

    /// Le produit déborde (±∞) ou devient NaN.
    #[error("résultat non fini (débordement)")]
    ResultatNonFini,
}
