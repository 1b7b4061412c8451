use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of features the model artifact was trained on.
pub const FEATURE_COUNT: usize = 10;

// ============ Borrower Input ============

/// Borrower attributes submitted for scoring.
///
/// Field order matters: `to_feature_vector` must emit values in the exact
/// column order the classifier was trained on. That ordering is a silent
/// contract with the model artifact and is pinned by tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BorrowerRecord {
    /// Revolving utilization of unsecured lines.
    pub revolving_utilization: f64,
    /// Ratio of monthly debt payments to gross monthly income.
    pub debt_ratio: f64,
    /// Gross monthly income in dollars.
    pub monthly_income: f64,
    /// Borrower age in years.
    pub age: u32,
    /// Number of times 30-59 days past due in the last two years.
    pub late_payments_30_59: u32,
    /// Number of open loans and credit lines.
    pub open_credit_lines: u32,
    /// Number of times 90 or more days past due.
    pub late_payments_90_plus: u32,
    /// Number of times 60-89 days past due in the last two years.
    pub late_payments_60_89: u32,
    /// Number of dependents in the household.
    pub dependents: u32,
    /// Number of mortgage and real estate loans.
    pub real_estate_loans: u32,
}

/// Declares how a single form control is rendered and bounded.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Form field name; matches the `BorrowerRecord` field ident.
    pub name: &'static str,
    /// Human-readable label shown next to the control.
    pub label: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Initial control value.
    pub default: f64,
    /// Input step for number controls.
    pub step: f64,
    /// Integer fields render as sliders; continuous fields as number inputs.
    pub integer: bool,
}

/// Per-field control configuration, in inference order.
///
/// Bounds are enforced structurally (HTML `min`/`max` on the client,
/// [`BorrowerRecord::clamped`] on the server); out-of-range values are never
/// an error path.
pub const FORM_FIELDS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec {
        name: "revolving_utilization",
        label: "Revolving Utilization of Unsecured Lines",
        min: 0.0,
        max: 22000.0,
        default: 0.0,
        step: 0.1,
        integer: false,
    },
    FieldSpec {
        name: "debt_ratio",
        label: "Debt Ratio",
        min: 0.0,
        max: 61106.5,
        default: 0.0,
        step: 0.1,
        integer: false,
    },
    FieldSpec {
        name: "monthly_income",
        label: "Monthly Income ($)",
        min: 0.0,
        max: 250000.0,
        default: 0.0,
        step: 100.0,
        integer: false,
    },
    FieldSpec {
        name: "age",
        label: "Age",
        min: 21.0,
        max: 101.0,
        default: 48.0,
        step: 1.0,
        integer: true,
    },
    FieldSpec {
        name: "late_payments_30_59",
        label: "Late Payments (30-59 days)",
        min: 0.0,
        max: 98.0,
        default: 0.0,
        step: 1.0,
        integer: true,
    },
    FieldSpec {
        name: "open_credit_lines",
        label: "Open Credit Lines",
        min: 0.0,
        max: 57.0,
        default: 8.0,
        step: 1.0,
        integer: true,
    },
    FieldSpec {
        name: "late_payments_90_plus",
        label: "Late Payments (90+ days)",
        min: 0.0,
        max: 98.0,
        default: 0.0,
        step: 1.0,
        integer: true,
    },
    FieldSpec {
        name: "late_payments_60_89",
        label: "Late Payments (60-89 days)",
        min: 0.0,
        max: 98.0,
        default: 0.0,
        step: 1.0,
        integer: true,
    },
    FieldSpec {
        name: "dependents",
        label: "Number of Dependents",
        min: 0.0,
        max: 8.0,
        default: 0.0,
        step: 1.0,
        integer: true,
    },
    FieldSpec {
        name: "real_estate_loans",
        label: "Real Estate Loans",
        min: 0.0,
        max: 29.0,
        default: 1.0,
        step: 1.0,
        integer: true,
    },
];

impl Default for BorrowerRecord {
    /// Initial form values, matching the control defaults in [`FORM_FIELDS`].
    fn default() -> Self {
        Self {
            revolving_utilization: 0.0,
            debt_ratio: 0.0,
            monthly_income: 0.0,
            age: 48,
            late_payments_30_59: 0,
            open_credit_lines: 8,
            late_payments_90_plus: 0,
            late_payments_60_89: 0,
            dependents: 0,
            real_estate_loans: 1,
        }
    }
}

impl BorrowerRecord {
    /// Packs the record into the single-row feature vector expected by the
    /// classifier. Positions follow [`FORM_FIELDS`] exactly; no scaling or
    /// normalization is applied.
    pub fn to_feature_vector(&self) -> [f32; FEATURE_COUNT] {
        [
            self.revolving_utilization as f32,
            self.debt_ratio as f32,
            self.monthly_income as f32,
            self.age as f32,
            self.late_payments_30_59 as f32,
            self.open_credit_lines as f32,
            self.late_payments_90_plus as f32,
            self.late_payments_60_89 as f32,
            self.dependents as f32,
            self.real_estate_loans as f32,
        ]
    }

    /// Returns a copy with every field clamped to its declared bounds.
    ///
    /// Mirrors the clamping the form controls already apply client-side, so
    /// direct API callers get the same structural guarantee. In-range records
    /// pass through unchanged.
    pub fn clamped(&self) -> Self {
        fn clamp_u32(value: u32, spec: &FieldSpec) -> u32 {
            value.clamp(spec.min as u32, spec.max as u32)
        }

        Self {
            revolving_utilization: self
                .revolving_utilization
                .clamp(FORM_FIELDS[0].min, FORM_FIELDS[0].max),
            debt_ratio: self.debt_ratio.clamp(FORM_FIELDS[1].min, FORM_FIELDS[1].max),
            monthly_income: self
                .monthly_income
                .clamp(FORM_FIELDS[2].min, FORM_FIELDS[2].max),
            age: clamp_u32(self.age, &FORM_FIELDS[3]),
            late_payments_30_59: clamp_u32(self.late_payments_30_59, &FORM_FIELDS[4]),
            open_credit_lines: clamp_u32(self.open_credit_lines, &FORM_FIELDS[5]),
            late_payments_90_plus: clamp_u32(self.late_payments_90_plus, &FORM_FIELDS[6]),
            late_payments_60_89: clamp_u32(self.late_payments_60_89, &FORM_FIELDS[7]),
            dependents: clamp_u32(self.dependents, &FORM_FIELDS[8]),
            real_estate_loans: clamp_u32(self.real_estate_loans, &FORM_FIELDS[9]),
        }
    }
}

// ============ Prediction Output ============

/// Binary outcome returned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    /// Label 0: the borrower is expected to repay.
    Repay,
    /// Label 1: the borrower is expected to default.
    Default,
}

impl RiskLabel {
    /// Maps the artifact's raw integer label onto the binary label space.
    /// Zero means repay; any other value means default.
    pub fn from_raw(raw: i64) -> Self {
        if raw == 0 {
            RiskLabel::Repay
        } else {
            RiskLabel::Default
        }
    }

    /// Numeric form of the label (0 = repay, 1 = default).
    pub fn as_u8(self) -> u8 {
        match self {
            RiskLabel::Repay => 0,
            RiskLabel::Default => 1,
        }
    }

    /// The fixed human-readable outcome message for this label.
    pub fn message(self) -> &'static str {
        match self {
            RiskLabel::Repay => "Prediction: The borrower is likely to repay the loan.",
            RiskLabel::Default => "Prediction: The borrower is likely to default.",
        }
    }
}

/// Response body for `POST /api/v1/predict`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictionResponse {
    /// Raw label value (0 = repay, 1 = default).
    pub label: u8,
    /// Symbolic outcome.
    pub outcome: RiskLabel,
    /// Fixed outcome message for display.
    pub message: String,
    /// When the prediction was produced.
    pub timestamp: DateTime<Utc>,
}

impl PredictionResponse {
    pub fn new(outcome: RiskLabel) -> Self {
        Self {
            label: outcome.as_u8(),
            outcome,
            message: outcome.message().to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Response body for `GET /api/v1/jokes/random`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JokeResponse {
    /// Index into the fixed joke list.
    pub index: usize,
    /// The selected joke.
    pub joke: String,
}

/// Response body for `GET /api/v1/model`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelInfo {
    /// Shape of the input tensor: one row of `FEATURE_COUNT` columns.
    pub input_shape: Vec<usize>,
    /// Feature names in inference order.
    pub features: Vec<String>,
    /// Service version.
    pub version: String,
}

impl ModelInfo {
    pub fn current() -> Self {
        Self {
            input_shape: vec![1, FEATURE_COUNT],
            features: FORM_FIELDS.iter().map(|f| f.label.to_string()).collect(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
