use acuity_core::models::insight::{Insight, InsightKind};
use acuity_core::models::result::{ScoreResult, SofaComponents};
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use crate::error::ScoreError;
use crate::schema::ParamSpec;
use crate::tables::round2;
use crate::tables::sepsis as t;
use crate::{ScoreCalculator, classify, reliability};

/// Sepsis screening: qSOFA (0–3) and the six-organ SOFA (0–24), combined
/// into a weighted composite in [0, 1] with additive host risk factors.
/// Classification follows the totals, not the composite.
pub struct Sepsis;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::number("glasgow", true, 3.0, 15.0),
    ParamSpec::number("respiratoryRate", true, 0.0, 60.0),
    ParamSpec::number("systolicBP", true, 0.0, 300.0),
    ParamSpec::number("pao2fio2", true, 0.0, 600.0),
    ParamSpec::number("platelets", true, 0.0, 1000.0),
    ParamSpec::number("bilirubin", true, 0.0, 30.0),
    ParamSpec::number("meanArterialPressure", true, 0.0, 200.0),
    ParamSpec::number("creatinine", true, 0.0, 15.0),
    ParamSpec::flag("mechanicalVentilation", false),
    ParamSpec::number("urineOutput", false, 0.0, 10000.0),
    ParamSpec::number("dopamine", false, 0.0, 50.0),
    ParamSpec::flag("dobutamine", false),
    ParamSpec::number("epinephrine", false, 0.0, 5.0),
    ParamSpec::number("norepinephrine", false, 0.0, 5.0),
    ParamSpec::number("age", false, 0.0, 120.0),
    ParamSpec::flag("immunosuppression", false),
    ParamSpec::flag("recentSurgery", false),
    ParamSpec::flag("chronicDisease", false),
];

impl ScoreCalculator for Sepsis {
    fn score_type(&self) -> ScoreType {
        ScoreType::Sepsis
    }

    fn name(&self) -> &str {
        "Sepsis (qSOFA/SOFA)"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn compute(&self, params: &ParamSet, _subtype: Option<&str>) -> Result<ScoreResult, ScoreError> {
        let (reliability, missing) = reliability::assess(PARAMS, params);

        let qsofa = qsofa_points(params);
        let components = sofa_components(params);
        let sofa = components.total();

        let mut risk = t::QSOFA_WEIGHT * f64::from(qsofa) / t::QSOFA_MAX
            + t::SOFA_WEIGHT * f64::from(sofa) / t::SOFA_MAX;
        if let Some(age) = params.number("age")
            && age > t::AGE_THRESHOLD
        {
            risk += t::AGE_PER_DECADE * (age - t::AGE_THRESHOLD) / 10.0;
        }
        if params.flag("immunosuppression") == Some(true) {
            risk += t::IMMUNOSUPPRESSION;
        }
        if params.flag("recentSurgery") == Some(true) {
            risk += t::RECENT_SURGERY;
        }
        if params.flag("chronicDisease") == Some(true) {
            risk += t::CHRONIC_DISEASE;
        }
        let score = round2(risk.clamp(0.0, 1.0));

        let classified = classify::sepsis(qsofa, sofa);
        let mut result = ScoreResult::new(
            self.name(),
            score,
            classified.risk_level,
            classified.interpretation.clone(),
        );
        result.reliability = reliability;
        result.missing_parameters = missing;
        result.qsofa = Some(qsofa);
        result.sofa = Some(sofa);
        result.sofa_components = Some(components);
        result.insights = insights(qsofa, sofa, &components, classified.interpretation);
        Ok(result)
    }
}

fn qsofa_points(params: &ParamSet) -> u8 {
    let mut points = 0;
    if let Some(glasgow) = params.number("glasgow")
        && glasgow < t::GLASGOW_ALTERED
    {
        points += 1;
    }
    if let Some(rate) = params.number("respiratoryRate")
        && rate >= t::RESPIRATORY_RATE
    {
        points += 1;
    }
    if let Some(systolic) = params.number("systolicBP")
        && systolic <= t::SYSTOLIC_BP
    {
        points += 1;
    }
    points
}

fn sofa_components(params: &ParamSet) -> SofaComponents {
    let ventilated = params.flag("mechanicalVentilation") == Some(true);
    SofaComponents {
        respiratory: params
            .number("pao2fio2")
            .map(|ratio| respiratory(ratio, ventilated))
            .unwrap_or(0),
        coagulation: params.number("platelets").map(coagulation).unwrap_or(0),
        hepatic: params.number("bilirubin").map(hepatic).unwrap_or(0),
        cardiovascular: cardiovascular(params),
        neurological: params.number("glasgow").map(neurological).unwrap_or(0),
        renal: renal(params),
    }
}

/// PaO₂/FiO₂ ratio; the two highest grades require ventilatory support.
fn respiratory(ratio: f64, ventilated: bool) -> u8 {
    if ratio < 100.0 && ventilated {
        4
    } else if ratio < 200.0 && ventilated {
        3
    } else if ratio < 300.0 {
        2
    } else if ratio < 400.0 {
        1
    } else {
        0
    }
}

/// Platelets, ×10³/µL.
fn coagulation(platelets: f64) -> u8 {
    if platelets < 20.0 {
        4
    } else if platelets < 50.0 {
        3
    } else if platelets < 100.0 {
        2
    } else if platelets < 150.0 {
        1
    } else {
        0
    }
}

/// Bilirubin, mg/dL.
fn hepatic(bilirubin: f64) -> u8 {
    if bilirubin >= 12.0 {
        4
    } else if bilirubin >= 6.0 {
        3
    } else if bilirubin >= 2.0 {
        2
    } else if bilirubin >= 1.2 {
        1
    } else {
        0
    }
}

/// Mean arterial pressure or vasopressor doses (µg/kg/min).
fn cardiovascular(params: &ParamSet) -> u8 {
    let dopamine = params.number("dopamine").unwrap_or(0.0);
    let epinephrine = params.number("epinephrine").unwrap_or(0.0);
    let norepinephrine = params.number("norepinephrine").unwrap_or(0.0);
    let dobutamine = params.flag("dobutamine") == Some(true);

    if dopamine > 15.0 || epinephrine > 0.1 || norepinephrine > 0.1 {
        4
    } else if dopamine > 5.0 || epinephrine > 0.0 || norepinephrine > 0.0 {
        3
    } else if dopamine > 0.0 || dobutamine {
        2
    } else if params
        .number("meanArterialPressure")
        .is_some_and(|map| map < 70.0)
    {
        1
    } else {
        0
    }
}

fn neurological(glasgow: f64) -> u8 {
    if glasgow < 6.0 {
        4
    } else if glasgow < 10.0 {
        3
    } else if glasgow < 13.0 {
        2
    } else if glasgow < 15.0 {
        1
    } else {
        0
    }
}

/// Creatinine (mg/dL) graded against urine output (mL/day); the worse of
/// the two wins.
fn renal(params: &ParamSet) -> u8 {
    let by_creatinine = params
        .number("creatinine")
        .map(|creatinine| {
            if creatinine >= 5.0 {
                4
            } else if creatinine >= 3.5 {
                3
            } else if creatinine >= 2.0 {
                2
            } else if creatinine >= 1.2 {
                1
            } else {
                0
            }
        })
        .unwrap_or(0);
    let by_urine = params
        .number("urineOutput")
        .map(|urine| {
            if urine < 200.0 {
                4
            } else if urine < 500.0 {
                3
            } else {
                0
            }
        })
        .unwrap_or(0);
    by_creatinine.max(by_urine)
}

fn insights(
    qsofa: u8,
    sofa: u8,
    components: &SofaComponents,
    interpretation: String,
) -> Vec<Insight> {
    let recommendations = if sofa >= 2 || qsofa >= 2 {
        vec![
            "Hémocultures avant antibiothérapie",
            "Antibiothérapie large spectre dans l'heure",
            "Remplissage vasculaire 30 mL/kg si hypotension",
            "Contrôle du lactate",
        ]
    } else if qsofa == 1 || sofa == 1 {
        vec!["Réévaluation qSOFA/SOFA à 1h", "Surveillance des lactates"]
    } else {
        vec!["Surveillance standard"]
    };

    let mut clinical = Insight::new(InsightKind::Clinical, interpretation);
    clinical.category = Some("Risque".to_string());
    clinical.recommendations = Some(recommendations.into_iter().map(String::from).collect());
    let mut insights = vec![clinical];

    let failing: Vec<&str> = [
        (components.respiratory, "respiratoire"),
        (components.coagulation, "coagulation"),
        (components.hepatic, "hépatique"),
        (components.cardiovascular, "cardiovasculaire"),
        (components.neurological, "neurologique"),
        (components.renal, "rénale"),
    ]
    .iter()
    .filter(|(points, _)| *points >= 3)
    .map(|(_, organ)| *organ)
    .collect();

    if !failing.is_empty() {
        let mut critical = Insight::new(
            InsightKind::Critical,
            format!("Défaillance d'organe sévère: {}", failing.join(", ")),
        );
        critical.category = Some("Défaillance d'organe".to_string());
        insights.push(critical);
    }

    insights
}
