use serde::{Deserialize, Serialize};

/// Structured fields extracted from a tax document by the model.
///
/// The wire shape is fixed by the extraction prompt: camelCase keys, numeric
/// amounts, and a `"old"`/`"new"` regime recommendation. Every amount
/// defaults to 0 and the regime defaults to old when the model omits a
/// field; that is a fallback policy, not a computed guarantee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxExtraction {
    pub income_details: IncomeDetails,
    pub deduction_details: DeductionDetails,
    pub tax_regime: TaxRegime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeDetails {
    pub salary_income: f64,
    pub business_income: f64,
    pub capital_gains: f64,
    pub house_property_income: f64,
    pub other_income: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionDetails {
    #[serde(rename = "section80C")]
    pub section_80c: f64,
    #[serde(rename = "section80D")]
    pub section_80d: f64,
    pub hra: f64,
    pub lta: f64,
    pub nps: f64,
    #[serde(rename = "homeLoanInterest")]
    pub home_loan_interest: f64,
    #[serde(rename = "otherDeductions")]
    pub other_deductions: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    #[default]
    Old,
    New,
}
