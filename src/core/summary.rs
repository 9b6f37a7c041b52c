use crate::domain::constants::{
    CASH_FORMATTER, IE_FORMATTER, RAISING_FORMATTER, SPENDING_FORMATTER,
};
use crate::domain::model::{FormType, LineSpec, SummaryLine, Totals};

/// Projects totals through a formatter table: for each table key present in
/// `totals`, in table order, one line. Keys on either side without a match
/// on the other are dropped; absence is expected for form-specific fields
/// and never an error.
pub fn financial_summary_processor(
    totals: &Totals,
    formatter: &[(&str, LineSpec)],
) -> Vec<SummaryLine> {
    formatter
        .iter()
        .filter_map(|(key, spec)| {
            totals.get(*key).map(|amount| SummaryLine {
                amount: amount.clone(),
                spec: *spec,
            })
        })
        .collect()
}

fn rename(totals: &mut Totals, from: &str, to: &str) {
    if let Some(value) = totals.remove(from) {
        totals.insert(to.to_string(), value);
    }
}

/// Reconciles the API's raising schema with the display hierarchy, then
/// projects through the raising table. The API reports every filer through
/// one wide schema; which fields are real line items and which are
/// subtotals depends on the form, so each form gets its own fixup pass.
/// Renames and deletes mutate `totals` in place.
pub fn process_raising_data(totals: &mut Totals) -> Vec<SummaryLine> {
    match FormType::detect(totals) {
        FormType::F3P => {
            // loan_repayments_made is a subtotal on the presidential form,
            // not a single line item as on F3
            rename(totals, "loan_repayments_made", "total_loan_repayments_made");
            // presidential filers show total offsets with operating offsets
            // nested a level below; everyone else shows operating offsets at
            // the second level
            if totals.contains_key("total_offsets_to_operating_expenditures") {
                rename(
                    totals,
                    "offsets_to_operating_expenditures",
                    "subtotal_offsets_to_operating_expenditures",
                );
            }
        }
        FormType::F3 => {
            // presidential-only fields the API still includes on F3 rows
            for key in [
                "offsets_to_legal_accounting",
                "offsets_to_fundraising_expenditures",
                "total_offsets_to_operating_expenditures",
                "federal_funds",
            ] {
                totals.remove(key);
            }
        }
        FormType::F3X => {
            // operating_expenditures is a subtotal on F3X
            rename(
                totals,
                "operating_expenditures",
                "total_operating_expenditures",
            );
        }
        FormType::Unknown => {}
    }
    financial_summary_processor(totals, RAISING_FORMATTER)
}

/// Spending counterpart of [`process_raising_data`].
pub fn process_spending_data(totals: &mut Totals) -> Vec<SummaryLine> {
    if FormType::detect(totals) == FormType::F3 {
        // combined-candidate-disbursement fields that only apply to F3P
        totals.remove("fundraising_disbursements");
        totals.remove("exempt_legal_accounting_disbursement");
    }
    financial_summary_processor(totals, SPENDING_FORMATTER)
}

pub fn process_cash_data(totals: &Totals) -> Vec<SummaryLine> {
    financial_summary_processor(totals, CASH_FORMATTER)
}

pub fn process_ie_data(totals: &Totals) -> Vec<SummaryLine> {
    financial_summary_processor(totals, IE_FORMATTER)
}
