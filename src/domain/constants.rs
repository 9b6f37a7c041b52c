use crate::domain::model::{LineSpec, SenateClass};

/// First year with electronic filing data; cycle sequences never reach it.
pub const START_YEAR: i32 = 1979;

/// State and territory postal codes mapped to display names.
const STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
    ("DC", "District of Columbia"),
    ("AS", "American Samoa"),
    ("GU", "Guam"),
    ("MP", "Northern Mariana Islands"),
    ("PR", "Puerto Rico"),
    ("VI", "U.S. Virgin Islands"),
];

pub fn state_name(code: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|(abbrev, _)| abbrev.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

const CLASS_ONE_STATES: &[&str] = &[
    "AZ", "CA", "CT", "DE", "FL", "HI", "IN", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE",
    "NV", "NJ", "NM", "NY", "ND", "OH", "PA", "RI", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI",
    "WY",
];

const CLASS_TWO_STATES: &[&str] = &[
    "AL", "AK", "AR", "CO", "DE", "GA", "ID", "IL", "IA", "KS", "KY", "LA", "ME", "MA", "MI", "MN",
    "MS", "MT", "NE", "NH", "NJ", "NM", "NC", "OK", "OR", "RI", "SC", "SD", "TN", "TX", "VA", "WV",
    "WY",
];

const CLASS_THREE_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS", "KY",
    "LA", "MD", "MO", "NV", "NH", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "SC", "SD", "UT", "VT",
    "WA", "WI",
];

/// Seats with a special election scheduled for the upcoming cycle.
const SPECIAL_ELECTION_STATES: &[&str] = &["FL", "OH"];

pub fn senate_class_states(class: SenateClass) -> &'static [&'static str] {
    match class {
        SenateClass::One => CLASS_ONE_STATES,
        SenateClass::Two => CLASS_TWO_STATES,
        SenateClass::Three => CLASS_THREE_STATES,
        SenateClass::Special => SPECIAL_ELECTION_STATES,
    }
}

/// Year of the next regular election for each class. Updated once per cycle.
pub fn next_senate_election(class: SenateClass) -> i32 {
    match class {
        SenateClass::One => 2030,
        SenateClass::Two => 2026,
        SenateClass::Three => 2028,
        SenateClass::Special => 2026,
    }
}

const fn line(label: &'static str, level: u8) -> LineSpec {
    LineSpec { label, level }
}

/// Display order and hierarchy for the raising panel. The normalizer's
/// renamed keys (`total_loan_repayments_made`,
/// `subtotal_offsets_to_operating_expenditures`) appear here alongside the
/// raw API names they replace, since different forms surface one or the
/// other.
pub const RAISING_FORMATTER: &[(&str, LineSpec)] = &[
    ("receipts", line("Total receipts", 1)),
    ("total_contributions", line("Total contributions", 2)),
    (
        "individual_contributions",
        line("Total individual contributions", 3),
    ),
    (
        "individual_itemized_contributions",
        line("Itemized individual contributions", 4),
    ),
    (
        "individual_unitemized_contributions",
        line("Unitemized individual contributions", 4),
    ),
    (
        "political_party_committee_contributions",
        line("Party committee contributions", 3),
    ),
    (
        "other_political_committee_contributions",
        line("Other committee contributions", 3),
    ),
    ("candidate_contribution", line("Candidate contributions", 3)),
    ("federal_funds", line("Presidential public funds", 3)),
    (
        "transfers_from_affiliated_party",
        line("Transfers from affiliated committees", 2),
    ),
    (
        "transfers_from_affiliated_committee",
        line("Transfers from affiliated committees", 2),
    ),
    (
        "transfers_from_other_authorized_committee",
        line("Transfers from other authorized committees", 2),
    ),
    ("loans_received", line("Total loans received", 2)),
    ("all_loans_received", line("Total loans received", 2)),
    (
        "loans_received_from_candidate",
        line("Loans made by candidate", 3),
    ),
    ("loans_made_by_candidate", line("Loans made by candidate", 3)),
    ("other_loans_received", line("Other loans", 3)),
    ("all_other_loans", line("Other loans", 3)),
    (
        "total_offsets_to_operating_expenditures",
        line("Total offsets to expenditures", 2),
    ),
    (
        "offsets_to_operating_expenditures",
        line("Offsets to operating expenditures", 2),
    ),
    (
        "subtotal_offsets_to_operating_expenditures",
        line("Offsets to operating expenditures", 3),
    ),
    (
        "offsets_to_legal_accounting",
        line("Offsets to legal and accounting", 3),
    ),
    (
        "offsets_to_fundraising_expenditures",
        line("Offsets to fundraising expenses", 3),
    ),
    (
        "loan_repayments_received",
        line("Loan repayments received", 2),
    ),
    ("loan_repayments_made", line("Loan repayments made", 2)),
    (
        "total_loan_repayments_made",
        line("Total loan repayments made", 2),
    ),
    (
        "repayments_loans_made_by_candidate",
        line("Repayments of candidate loans", 3),
    ),
    ("repayments_other_loans", line("Repayments of other loans", 3)),
    ("other_receipts", line("Other receipts", 2)),
];

/// Display order and hierarchy for the spending panel.
pub const SPENDING_FORMATTER: &[(&str, LineSpec)] = &[
    ("disbursements", line("Total disbursements", 1)),
    (
        "total_operating_expenditures",
        line("Total operating expenditures", 2),
    ),
    ("operating_expenditures", line("Operating expenditures", 2)),
    (
        "shared_fed_operating_expenditures",
        line("Allocated operating expenditures - federal", 3),
    ),
    (
        "shared_nonfed_operating_expenditures",
        line("Allocated operating expenditures - non-federal", 3),
    ),
    (
        "other_fed_operating_expenditures",
        line("Other federal operating expenditures", 3),
    ),
    (
        "transfers_to_affiliated_committee",
        line("Transfers to affiliated committees", 2),
    ),
    (
        "transfers_to_other_authorized_committee",
        line("Transfers to other authorized committees", 2),
    ),
    (
        "fundraising_disbursements",
        line("Fundraising disbursements", 2),
    ),
    (
        "exempt_legal_accounting_disbursement",
        line("Exempt legal and accounting disbursements", 2),
    ),
    (
        "fed_election_activity",
        line("Total federal election activity", 2),
    ),
    (
        "shared_fed_activity",
        line("Allocated federal election activity - federal share", 3),
    ),
    (
        "allocated_federal_election_levin_share",
        line("Allocated federal election activity - Levin share", 3),
    ),
    (
        "non_allocated_fed_election_activity",
        line("Federal election activity - federal only", 3),
    ),
    (
        "fed_candidate_committee_contributions",
        line("Contributions to other committees", 2),
    ),
    (
        "independent_expenditures",
        line("Independent expenditures", 2),
    ),
    (
        "coordinated_expenditures_by_party_committee",
        line("Coordinated party expenditures", 2),
    ),
    ("loans_made", line("Loans made", 2)),
    ("loan_repayments", line("Total loan repayments made", 2)),
    (
        "loan_repayments_candidate_loans",
        line("Repayments of candidate loans", 3),
    ),
    (
        "loan_repayments_other_loans",
        line("Repayments of other loans", 3),
    ),
    (
        "refunded_individual_contributions",
        line("Individual refunds", 2),
    ),
    (
        "refunded_political_party_committee_contributions",
        line("Party refunds", 2),
    ),
    (
        "refunded_other_political_committee_contributions",
        line("Other committee refunds", 2),
    ),
    ("other_disbursements", line("Other disbursements", 2)),
];

/// Display order for the cash summary panel.
pub const CASH_FORMATTER: &[(&str, LineSpec)] = &[
    (
        "cash_on_hand_beginning_period",
        line("Beginning cash on hand", 1),
    ),
    ("last_cash_on_hand_end_period", line("Ending cash on hand", 1)),
    (
        "last_debts_owed_to_committee",
        line("Debts/loans owed to committee", 1),
    ),
    (
        "last_debts_owed_by_committee",
        line("Debts/loans owed by committee", 1),
    ),
];

/// Display order for independent-expenditure-only filers.
pub const IE_FORMATTER: &[(&str, LineSpec)] = &[
    (
        "total_independent_contributions",
        line("Contributions received", 1),
    ),
    (
        "total_independent_expenditures",
        line("Independent expenditures", 1),
    ),
];
