//! Risk-factor tables.
//!
//! Every numeric constant a calculator consults lives here, one module per
//! score. Banded tables are half-open `[lo, hi)` slices covering the whole
//! axis; step and label tables are plain const slices. Calculators never
//! carry their own copies of these values.

/// Half-open scoring band: `lo <= value < hi` yields `points`.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub lo: f64,
    pub hi: f64,
    pub points: f64,
}

pub const fn band(lo: f64, hi: f64, points: f64) -> Band {
    Band { lo, hi, points }
}

/// Points of the band containing `value`. Tables cover the whole axis, so
/// a miss only happens on NaN input and yields zero.
pub fn points(bands: &[Band], value: f64) -> f64 {
    bands
        .iter()
        .find(|b| value >= b.lo && value < b.hi)
        .map(|b| b.points)
        .unwrap_or(0.0)
}

/// Points for a label in a `(label, points)` table, `None` when the label
/// is not part of the table.
pub fn label_points(table: &[(&str, f64)], label: &str) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, points)| *points)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// EuroSCORE II logistic-model coefficients (Nashef 2012). The model is
/// `mortality % = 100 / (1 + e^-(INTERCEPT + Σ contributions))`.
pub mod euroscore2 {
    pub const INTERCEPT: f64 = -5.324537;

    /// Applied to `(age / 90)²`.
    pub const AGE: f64 = 0.0285181;
    pub const FEMALE: f64 = 0.2196434;
    /// Applied to creatinine (µmol/L) capped at `CREATININE_CEILING`.
    pub const CREATININE: f64 = 0.0024571;
    pub const CREATININE_CEILING: f64 = 350.0;

    /// LVEF 31–50%.
    pub const LVEF_MODERATE: f64 = 0.3150652;
    /// LVEF 21–30%.
    pub const LVEF_POOR: f64 = 0.8084096;
    /// LVEF ≤20%.
    pub const LVEF_VERY_POOR: f64 = 0.9346919;

    /// NYHA classes I–IV, indexed by `class - 1`.
    pub const NYHA: [f64; 4] = [0.0, 0.1070545, 0.2958358, 0.5597929];

    pub const DIABETES: f64 = 0.3542749;
    /// Systolic pulmonary pressure 31–55 mmHg.
    pub const PULMONARY_MODERATE: f64 = 0.1788899;
    /// Systolic pulmonary pressure >55 mmHg.
    pub const PULMONARY_SEVERE: f64 = 0.3491475;
    pub const PREVIOUS_CARDIAC_SURGERY: f64 = 1.118599;
    pub const CRITICAL_PREOPERATIVE_STATE: f64 = 1.086517;
    pub const ACTIVE_ENDOCARDITIS: f64 = 0.6194522;
    pub const CHRONIC_LUNG_DISEASE: f64 = 0.1886564;

    pub const URGENCY: &[(&str, f64)] = &[
        ("elective", 0.0),
        ("urgent", 0.3174673),
        ("emergency", 0.7039121),
        ("salvage", 1.362947),
    ];

    pub const WEIGHT_OF_INTERVENTION: &[(&str, f64)] = &[
        ("single", 0.0),
        ("double", 0.5521478),
        ("triple", 0.9724533),
    ];
}

/// GRACE additive point tables.
pub mod grace {
    use super::{Band, band};

    pub const AGE: &[Band] = &[
        band(f64::NEG_INFINITY, 30.0, 0.0),
        band(30.0, 40.0, 8.0),
        band(40.0, 50.0, 25.0),
        band(50.0, 60.0, 41.0),
        band(60.0, 70.0, 58.0),
        band(70.0, 80.0, 75.0),
        band(80.0, 90.0, 91.0),
        band(90.0, f64::INFINITY, 100.0),
    ];

    pub const HEART_RATE: &[Band] = &[
        band(f64::NEG_INFINITY, 50.0, 0.0),
        band(50.0, 70.0, 3.0),
        band(70.0, 90.0, 9.0),
        band(90.0, 110.0, 15.0),
        band(110.0, 150.0, 24.0),
        band(150.0, 200.0, 38.0),
        band(200.0, f64::INFINITY, 46.0),
    ];

    pub const SYSTOLIC_BP: &[Band] = &[
        band(f64::NEG_INFINITY, 80.0, 58.0),
        band(80.0, 100.0, 53.0),
        band(100.0, 120.0, 43.0),
        band(120.0, 140.0, 34.0),
        band(140.0, 160.0, 24.0),
        band(160.0, 200.0, 10.0),
        band(200.0, f64::INFINITY, 0.0),
    ];

    /// Creatinine in mg/dL.
    pub const CREATININE: &[Band] = &[
        band(f64::NEG_INFINITY, 0.4, 1.0),
        band(0.4, 0.8, 4.0),
        band(0.8, 1.2, 7.0),
        band(1.2, 1.6, 10.0),
        band(1.6, 2.0, 13.0),
        band(2.0, 4.0, 21.0),
        band(4.0, f64::INFINITY, 28.0),
    ];

    /// Killip classes I–IV, indexed by `class - 1`.
    pub const KILLIP: [f64; 4] = [0.0, 20.0, 39.0, 59.0];

    pub const CARDIAC_ARREST: f64 = 39.0;
    pub const ELEVATED_MARKERS: f64 = 14.0;
    pub const ST_DEVIATION: f64 = 28.0;
}

/// TIMI point values for both subtypes.
pub mod timi {
    // STEMI
    pub const AGE_75: u32 = 3;
    pub const AGE_65: u32 = 2;
    /// Diabetes, hypertension or angina, counted once.
    pub const RISK_CLUSTER: u32 = 1;
    /// Systolic BP < 100 mmHg.
    pub const LOW_SBP: u32 = 3;
    /// Heart rate > 100 bpm.
    pub const TACHYCARDIA: u32 = 2;
    /// Killip class II–IV.
    pub const KILLIP_ABOVE_1: u32 = 2;
    /// Weight < 67 kg.
    pub const LOW_WEIGHT: u32 = 1;
    /// Anterior ST elevation or left bundle branch block.
    pub const ANTERIOR_OR_LBBB: u32 = 1;
    /// Time to treatment > 4 h.
    pub const LATE_PRESENTATION: u32 = 1;

    /// NSTEMI: every met criterion scores one point.
    pub const NSTEMI_CRITERION: u32 = 1;
    pub const NSTEMI_AGE_THRESHOLD: f64 = 65.0;
    pub const NSTEMI_RISK_FACTOR_THRESHOLD: f64 = 3.0;
}

/// CHA₂DS₂-VASc points and the annual stroke risk table.
pub mod cha2ds2vasc {
    pub const AGE_75: u32 = 2;
    pub const AGE_65: u32 = 1;
    pub const FEMALE: u32 = 1;
    pub const CRITERION: u32 = 1;
    pub const STROKE: u32 = 2;

    /// Annual stroke risk (%) indexed by score, capped at 9.
    pub const ANNUAL_STROKE_RISK: [f64; 10] =
        [0.0, 1.3, 2.2, 3.2, 4.0, 6.7, 9.8, 9.6, 6.7, 15.2];
}

/// Sepsis composite weights and risk-factor bumps.
pub mod sepsis {
    pub const QSOFA_MAX: f64 = 3.0;
    pub const SOFA_MAX: f64 = 24.0;
    pub const QSOFA_WEIGHT: f64 = 0.4;
    pub const SOFA_WEIGHT: f64 = 0.6;

    /// qSOFA thresholds.
    pub const GLASGOW_ALTERED: f64 = 15.0;
    pub const RESPIRATORY_RATE: f64 = 22.0;
    pub const SYSTOLIC_BP: f64 = 100.0;

    /// Added per decade past `AGE_THRESHOLD`.
    pub const AGE_PER_DECADE: f64 = 0.04;
    pub const AGE_THRESHOLD: f64 = 65.0;
    pub const IMMUNOSUPPRESSION: f64 = 0.2;
    pub const RECENT_SURGERY: f64 = 0.1;
    pub const CHRONIC_DISEASE: f64 = 0.1;
}

/// Child-Pugh category tables; the numeric criteria are stepped in the
/// calculator (bilirubin and prothrombin bands are closed on the right and
/// do not fit half-open bands).
pub mod childpugh {
    pub const ASCITES: &[(&str, f64)] = &[("none", 1.0), ("mild", 2.0), ("severe", 3.0)];
    pub const ENCEPHALOPATHY: &[(&str, f64)] = &[("none", 1.0), ("mild", 2.0), ("severe", 3.0)];

    pub const CLASS_B_FLOOR: f64 = 7.0;
    pub const CLASS_C_FLOOR: f64 = 10.0;
}

/// MELD (classic, pre-2016) coefficients.
pub mod meld {
    pub const CREATININE: f64 = 0.957;
    pub const BILIRUBIN: f64 = 0.378;
    pub const INR: f64 = 1.12;
    pub const CONSTANT: f64 = 0.643;
    pub const SCALE: f64 = 10.0;

    /// Creatinine is clamped to this window before the logarithm.
    pub const CREATININE_FLOOR: f64 = 1.0;
    pub const CREATININE_CEILING: f64 = 4.0;
    /// Bilirubin and INR are floored at 1 before the logarithm.
    pub const LOG_FLOOR: f64 = 1.0;
}

/// Glasgow-Blatchford banded tables (Blatchford 2000).
pub mod blatchford {
    use super::{Band, band};

    /// Blood urea in mmol/L.
    pub const UREA: &[Band] = &[
        band(f64::NEG_INFINITY, 6.5, 0.0),
        band(6.5, 8.0, 2.0),
        band(8.0, 10.0, 3.0),
        band(10.0, 25.0, 4.0),
        band(25.0, f64::INFINITY, 6.0),
    ];

    /// Hemoglobin in g/dL, men.
    pub const HEMOGLOBIN_MEN: &[Band] = &[
        band(f64::NEG_INFINITY, 10.0, 6.0),
        band(10.0, 12.0, 3.0),
        band(12.0, 13.0, 1.0),
        band(13.0, f64::INFINITY, 0.0),
    ];

    /// Hemoglobin in g/dL, women.
    pub const HEMOGLOBIN_WOMEN: &[Band] = &[
        band(f64::NEG_INFINITY, 10.0, 6.0),
        band(10.0, 12.0, 1.0),
        band(12.0, f64::INFINITY, 0.0),
    ];

    pub const SYSTOLIC_BP: &[Band] = &[
        band(f64::NEG_INFINITY, 90.0, 3.0),
        band(90.0, 100.0, 2.0),
        band(100.0, 110.0, 1.0),
        band(110.0, f64::INFINITY, 0.0),
    ];

    /// Pulse ≥ 100 bpm.
    pub const TACHYCARDIA_THRESHOLD: f64 = 100.0;
    pub const TACHYCARDIA: f64 = 1.0;
    pub const MELENA: f64 = 1.0;
    pub const SYNCOPE: f64 = 2.0;
    pub const HEPATIC_DISEASE: f64 = 2.0;
    pub const CARDIAC_FAILURE: f64 = 2.0;
}

/// Pre-endoscopic Rockall tables.
pub mod rockall {
    use super::{Band, band};

    pub const AGE: &[Band] = &[
        band(f64::NEG_INFINITY, 60.0, 0.0),
        band(60.0, 80.0, 1.0),
        band(80.0, f64::INFINITY, 2.0),
    ];

    pub const SHOCK: &[(&str, f64)] = &[
        ("none", 0.0),
        ("tachycardia", 1.0),
        ("hypotension", 2.0),
    ];

    pub const COMORBIDITY: &[(&str, f64)] = &[
        ("none", 0.0),
        ("cardiac", 2.0),
        ("renal", 2.0),
        ("hepatic", 2.0),
        ("metastatic", 3.0),
    ];

    pub const DIAGNOSIS: &[(&str, f64)] = &[
        ("malloryWeiss", 0.0),
        ("other", 0.0),
        ("pepticUlcer", 1.0),
        ("cancer", 2.0),
    ];

    pub const STIGMATA: &[(&str, f64)] = &[
        ("none", 0.0),
        ("darkSpot", 0.0),
        ("adherentClot", 1.0),
        ("visibleVessel", 1.0),
        ("activeBleed", 2.0),
    ];
}
