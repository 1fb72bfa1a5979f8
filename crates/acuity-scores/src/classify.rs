//! Risk classification.
//!
//! One ordered threshold table per score; the highest band whose floor the
//! score reaches wins. Calculators obtain their risk level and their
//! interpretation string from the same band, so the two cannot disagree.

use acuity_core::models::result::RiskLevel;
use acuity_core::score_type::TimiVariant;

/// Risk level and interpretation drawn from one classification band.
#[derive(Debug, Clone)]
pub struct Classified {
    pub risk_level: RiskLevel,
    pub interpretation: String,
}

struct Threshold {
    floor: f64,
    level: &'static str,
    /// Present on scores whose risk level carries an event-rate description.
    description: Option<&'static str>,
    interpretation: &'static str,
}

const fn threshold(
    floor: f64,
    level: &'static str,
    description: Option<&'static str>,
    interpretation: &'static str,
) -> Threshold {
    Threshold {
        floor,
        level,
        description,
        interpretation,
    }
}

fn pick(bands: &[Threshold], score: f64) -> Classified {
    let band = bands
        .iter()
        .rev()
        .find(|b| score >= b.floor)
        .unwrap_or(&bands[0]);
    Classified {
        risk_level: match band.description {
            Some(description) => RiskLevel::detailed(band.level, description),
            None => RiskLevel::label(band.level),
        },
        interpretation: band.interpretation.to_string(),
    }
}

const EUROSCORE2: &[Threshold] = &[
    threshold(f64::NEG_INFINITY, "Faible", None, "Risque faible"),
    threshold(2.0, "Modéré", None, "Risque modéré"),
    threshold(5.0, "Élevé", None, "Risque élevé"),
];

pub fn euroscore2(score: f64) -> Classified {
    pick(EUROSCORE2, score)
}

const GRACE: &[Threshold] = &[
    threshold(
        f64::NEG_INFINITY,
        "Faible",
        Some("Risque de mortalité <1%"),
        "Risque faible de mortalité (<1%)",
    ),
    threshold(
        109.0,
        "Intermédiaire",
        Some("Risque de mortalité 1-3%"),
        "Risque intermédiaire de mortalité (1-3%)",
    ),
    threshold(
        140.0,
        "Élevé",
        Some("Risque de mortalité >3%"),
        "Risque élevé de mortalité (>3%)",
    ),
];

pub fn grace(score: f64) -> Classified {
    pick(GRACE, score)
}

const TIMI_STEMI: &[Threshold] = &[
    threshold(
        f64::NEG_INFINITY,
        "Faible",
        Some("Mortalité à 30 jours ~2%"),
        "Risque faible (mortalité ~2%)",
    ),
    threshold(
        3.0,
        "Intermédiaire",
        Some("Mortalité à 30 jours ~5%"),
        "Risque intermédiaire (mortalité ~5%)",
    ),
    threshold(
        5.0,
        "Élevé",
        Some("Mortalité à 30 jours ~12%"),
        "Risque élevé (mortalité ~12%)",
    ),
];

const TIMI_NSTEMI: &[Threshold] = &[
    threshold(
        f64::NEG_INFINITY,
        "Faible",
        Some("Événements à 14 jours ~5%"),
        "Risque faible (événements à 14j: ~5%)",
    ),
    threshold(
        3.0,
        "Intermédiaire",
        Some("Événements à 14 jours ~12%"),
        "Risque intermédiaire (événements à 14j: ~12%)",
    ),
    threshold(
        5.0,
        "Élevé",
        Some("Événements à 14 jours ~20%"),
        "Risque élevé (événements à 14j: ~20%)",
    ),
];

pub fn timi(score: f64, variant: TimiVariant) -> Classified {
    match variant {
        TimiVariant::Stemi => pick(TIMI_STEMI, score),
        TimiVariant::Nstemi => pick(TIMI_NSTEMI, score),
    }
}

const CHA2DS2VASC: &[Threshold] = &[
    threshold(
        f64::NEG_INFINITY,
        "Très faible",
        None,
        "Risque très faible d'AVC",
    ),
    threshold(1.0, "Faible", None, "Risque faible d'AVC"),
    threshold(2.0, "Modéré", None, "Risque modéré d'AVC"),
    threshold(3.0, "Élevé", None, "Risque élevé d'AVC"),
];

pub fn cha2ds2vasc(score: f64) -> Classified {
    pick(CHA2DS2VASC, score)
}

/// Sepsis is classified from the qSOFA and SOFA totals, not from the
/// composite score: either total ≥2 means sepsis is probable; exactly one
/// of them equal to 1 is an intermediate signal.
pub fn sepsis(qsofa: u8, sofa: u8) -> Classified {
    if sofa >= 2 || qsofa >= 2 {
        Classified {
            risk_level: RiskLevel::label("Élevé"),
            interpretation: "Risque élevé - Sepsis probable".to_string(),
        }
    } else if (qsofa == 1) != (sofa == 1) {
        Classified {
            risk_level: RiskLevel::label("Modéré"),
            interpretation: "Risque modéré - Surveillance rapprochée recommandée".to_string(),
        }
    } else {
        Classified {
            risk_level: RiskLevel::label("Faible"),
            interpretation: "Risque faible de sepsis".to_string(),
        }
    }
}

const CHILDPUGH: &[Threshold] = &[
    threshold(
        f64::NEG_INFINITY,
        "Faible",
        None,
        "Cirrhose compensée (classe A) - Survie à 1 an environ 100%",
    ),
    threshold(
        7.0,
        "Modéré",
        None,
        "Atteinte fonctionnelle significative (classe B) - Survie à 1 an environ 80%",
    ),
    threshold(
        10.0,
        "Élevé",
        None,
        "Cirrhose décompensée (classe C) - Survie à 1 an environ 45%",
    ),
];

pub fn childpugh(score: f64) -> Classified {
    pick(CHILDPUGH, score)
}

const MELD: &[Threshold] = &[
    threshold(f64::NEG_INFINITY, "Faible", None, "Risque faible"),
    threshold(10.0, "Modéré", None, "Risque modéré"),
    threshold(20.0, "Élevé", None, "Risque élevé"),
];

pub fn meld(score: f64) -> Classified {
    pick(MELD, score)
}

const BLATCHFORD: &[Threshold] = &[
    threshold(f64::NEG_INFINITY, "Très faible", None, "Risque très faible"),
    threshold(3.0, "Faible", None, "Risque faible"),
    threshold(6.0, "Modéré", None, "Risque modéré"),
    threshold(9.0, "Élevé", None, "Risque élevé"),
];

pub fn blatchford(score: f64) -> Classified {
    pick(BLATCHFORD, score)
}

const ROCKALL: &[Threshold] = &[
    threshold(
        f64::NEG_INFINITY,
        "Très faible",
        None,
        "Risque très faible de récidive hémorragique et de mortalité",
    ),
    threshold(3.0, "Modéré", None, "Risque modéré - Surveillance recommandée"),
    threshold(
        5.0,
        "Élevé",
        None,
        "Risque élevé - Prise en charge intensive nécessaire",
    ),
];

pub fn rockall(score: f64) -> Classified {
    pick(ROCKALL, score)
}
