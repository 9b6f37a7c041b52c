use fecproxy::core::summary::{process_cash_data, process_raising_data, process_spending_data};
use fecproxy::domain::model::Totals;
use fecproxy::{ApiGateway, AppConfig};
use httpmock::prelude::*;
use serde_json::json;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    AppConfig::from_lookup(move |key| vars.get(key).cloned())
}

#[tokio::test]
async fn test_end_to_end_presidential_financial_summary() {
    let server = MockServer::start();

    let reports_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/committee/C00431445/reports")
            .query_param("page", "1")
            .query_param("per_page", "4")
            .query_param("api_key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "pagination": {"page": 1, "per_page": 4, "count": 96},
                "results": [
                    {"report_type": "Q2", "report_year": 2026},
                    {"report_type": "Q1", "report_year": 2026}
                ]
            }));
    });

    let totals_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/committee/C00431445/totals")
            .query_param("api_key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "pagination": {"page": 1, "per_page": 20, "count": 1},
                "results": [{
                    "receipts": 778642962.35,
                    "total_contributions": 715677692.51,
                    "individual_contributions": 658922447.09,
                    "federal_funds": 104.06,
                    "loan_repayments_made": 250000.0,
                    "repayments_loans_made_by_candidate": 250000.0,
                    "total_offsets_to_operating_expenditures": 1687626.97,
                    "offsets_to_operating_expenditures": 1601132.0,
                    "offsets_to_legal_accounting": 86494.97,
                    "disbursements": 775233602.9,
                    "fundraising_disbursements": 91868925.66,
                    "exempt_legal_accounting_disbursement": 7447663.61,
                    "last_cash_on_hand_end_period": 3934862.0,
                    "last_debts_owed_by_committee": 270962.95
                }]
            }));
    });

    let config = config_from(&[
        ("FEC_WEB_API_URL", &server.base_url()),
        ("FEC_WEB_API_KEY", "test-key"),
    ]);
    let gateway = ApiGateway::new(&config).unwrap();

    let financials = gateway.load_cmte_financials("C00431445").await.unwrap();

    reports_mock.assert();
    totals_mock.assert();
    assert_eq!(financials.reports.as_array().unwrap().len(), 2);

    let mut totals: Totals = financials.totals[0].as_object().unwrap().clone();

    let raising = process_raising_data(&mut totals);
    let raising_labels: Vec<_> = raising.iter().map(|line| line.spec.label).collect();
    assert_eq!(raising_labels[0], "Total receipts");
    assert!(raising_labels.contains(&"Total loan repayments made"));
    assert!(!raising_labels.contains(&"Loan repayments made"));
    // presidential offsets nest under the total
    assert!(totals.contains_key("subtotal_offsets_to_operating_expenditures"));

    let spending = process_spending_data(&mut totals);
    let spending_labels: Vec<_> = spending.iter().map(|line| line.spec.label).collect();
    assert_eq!(spending_labels[0], "Total disbursements");
    // presidential filers keep their combined disbursement lines
    assert!(spending_labels.contains(&"Fundraising disbursements"));

    let cash = process_cash_data(&totals);
    let cash_labels: Vec<_> = cash.iter().map(|line| line.spec.label).collect();
    assert_eq!(
        cash_labels,
        vec!["Ending cash on hand", "Debts/loans owed by committee"]
    );
}

#[tokio::test]
async fn test_end_to_end_house_candidate_summary_drops_presidential_fields() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/committee/C00199883/reports");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"results": []}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/committee/C00199883/totals");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "results": [{
                    "receipts": 1437000.0,
                    "all_other_loans": 25000.0,
                    "offsets_to_legal_accounting": 0.0,
                    "offsets_to_fundraising_expenditures": 0.0,
                    "total_offsets_to_operating_expenditures": 1200.0,
                    "federal_funds": 0.0,
                    "disbursements": 1390000.0,
                    "loan_repayments": 5000.0,
                    "fundraising_disbursements": 0.0,
                    "exempt_legal_accounting_disbursement": 0.0
                }]
            }));
    });

    let config = config_from(&[("FEC_WEB_API_URL", &server.base_url())]);
    let gateway = ApiGateway::new(&config).unwrap();

    let financials = gateway.load_cmte_financials("C00199883").await.unwrap();
    let mut totals: Totals = financials.totals[0].as_object().unwrap().clone();

    let raising = process_raising_data(&mut totals);
    let raising_labels: Vec<_> = raising.iter().map(|line| line.spec.label).collect();
    assert!(!raising_labels.contains(&"Presidential public funds"));
    assert!(!raising_labels.contains(&"Total offsets to expenditures"));
    assert!(raising_labels.contains(&"Other loans"));

    let spending = process_spending_data(&mut totals);
    let spending_labels: Vec<_> = spending.iter().map(|line| line.spec.label).collect();
    assert!(!spending_labels.contains(&"Fundraising disbursements"));
    assert!(!spending_labels.contains(&"Exempt legal and accounting disbursements"));
    assert!(spending_labels.contains(&"Total loan repayments made"));
}

#[tokio::test]
async fn test_search_flow_returns_both_listings() {
    let server = MockServer::start();

    let candidates_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/candidates")
            .query_param("per_page", "5")
            .query_param("q", "garcia");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "pagination": {"page": 1, "per_page": 5, "count": 38},
                "results": [{"name": "GARCIA, MARIA"}]
            }));
    });
    let committees_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/committees")
            .query_param("per_page", "5")
            .query_param("q", "garcia");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "pagination": {"page": 1, "per_page": 5, "count": 4},
                "results": [{"name": "GARCIA FOR CONGRESS"}]
            }));
    });

    let config = config_from(&[("FEC_WEB_API_URL", &server.base_url())]);
    let gateway = ApiGateway::new(&config).unwrap();

    let results = gateway.load_search_results(Some("garcia")).await.unwrap();

    candidates_mock.assert();
    committees_mock.assert();
    assert_eq!(results.candidates["results"][0]["name"], "GARCIA, MARIA");
    assert_eq!(
        results.committees["results"][0]["name"],
        "GARCIA FOR CONGRESS"
    );
}

#[tokio::test]
async fn test_search_flow_degrades_to_empty_listings_on_upstream_errors() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/candidates");
        then.status(502);
    });
    server.mock(|when, then| {
        when.method(GET).path("/committees");
        then.status(502);
    });

    let config = config_from(&[("FEC_WEB_API_URL", &server.base_url())]);
    let gateway = ApiGateway::new(&config).unwrap();

    let results = gateway.load_search_results(Some("garcia")).await.unwrap();

    assert_eq!(results.candidates, json!({}));
    assert_eq!(results.committees, json!({}));
}

#[tokio::test]
async fn test_cached_gateway_reuses_responses_across_identical_requests() {
    let server = MockServer::start();

    let totals_mock = server.mock(|when, then| {
        when.method(GET).path("/committee/C00000935/totals");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"results": [{"receipts": 1.0}]}));
    });
    let reports_mock = server.mock(|when, then| {
        when.method(GET).path("/committee/C00000935/reports");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"results": []}));
    });

    let config = config_from(&[
        ("FEC_WEB_API_URL", &server.base_url()),
        ("FEC_WEB_CACHE", "on"),
        ("FEC_WEB_CACHE_SIZE", "10"),
    ]);
    let gateway = ApiGateway::new(&config).unwrap();

    gateway.load_cmte_financials("C00000935").await.unwrap();
    gateway.load_cmte_financials("C00000935").await.unwrap();

    totals_mock.assert_hits(1);
    reports_mock.assert_hits(1);
}
