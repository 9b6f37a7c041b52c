use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw financial totals for one committee reporting period, keyed by the
/// API's field names. Normalization renames and deletes keys in place; the
/// transformation is lossy and one-way.
pub type Totals = serde_json::Map<String, Value>;

/// Label and display hierarchy level for one summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpec {
    pub label: &'static str,
    pub level: u8,
}

/// One display-ready line: an amount paired with its formatting descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub amount: Value,
    pub spec: LineSpec,
}

/// The disclosure form a committee files, which determines which summary
/// fields apply. Detected up front from discriminator fields the API
/// includes in its totals responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormType {
    /// House/Senate candidate committee.
    F3,
    /// Presidential candidate committee.
    F3P,
    /// Party or PAC filer.
    F3X,
    /// No discriminator present; no field fixups apply.
    Unknown,
}

impl FormType {
    pub fn detect(totals: &Totals) -> FormType {
        if totals.contains_key("repayments_loans_made_by_candidate") {
            FormType::F3P
        } else if totals.contains_key("shared_fed_operating_expenditures") {
            FormType::F3X
        } else if totals.contains_key("all_other_loans") || totals.contains_key("loan_repayments") {
            FormType::F3
        } else {
            FormType::Unknown
        }
    }
}

/// Pagination block as returned inside API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
    pub count: u64,
}

/// Candidate and committee summaries for one search query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub candidates: Value,
    pub committees: Value,
}

/// Recent reports plus cumulative totals for one committee.
#[derive(Debug, Clone, Serialize)]
pub struct CommitteeFinancials {
    pub reports: Value,
    pub totals: Value,
}

/// One of the three staggered groups of Senate seats, plus the ad-hoc
/// group for seats currently filled by special election.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenateClass {
    One,
    Two,
    Three,
    Special,
}

impl SenateClass {
    pub const ALL: [SenateClass; 4] = [
        SenateClass::One,
        SenateClass::Two,
        SenateClass::Three,
        SenateClass::Special,
    ];
}
