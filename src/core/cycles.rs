use crate::domain::constants::{
    next_senate_election, senate_class_states, state_name, START_YEAR,
};
use crate::domain::model::{Pagination, SenateClass};
use chrono::{Datelike, Duration, Local, NaiveDate};
use num_format::{Locale, ToFormattedString};

/// Two-year election cycle containing `year`: the next even year.
pub fn cycle_for_year(year: i32) -> i32 {
    year + year % 2
}

pub fn current_cycle() -> i32 {
    cycle_for_year(Local::now().year())
}

/// Inclusive (start, end) date pairs anchored to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRanges {
    pub month: (NaiveDate, NaiveDate),
    pub quarter: (NaiveDate, NaiveDate),
    pub year: (NaiveDate, NaiveDate),
    pub cycle: (NaiveDate, NaiveDate),
}

pub fn date_ranges() -> DateRanges {
    date_ranges_for(Local::now().date_naive())
}

pub fn date_ranges_for(today: NaiveDate) -> DateRanges {
    let year = today.year();
    let quarter = (today.month() - 1) / 3;
    let quarter_start_month = quarter * 3 + 1;
    let quarter_end_month = quarter * 3 + 3;
    let cycle = cycle_for_year(year);

    DateRanges {
        month: (
            ymd(year, today.month(), 1),
            ymd(year, today.month(), last_day_of_month(year, today.month())),
        ),
        quarter: (
            ymd(year, quarter_start_month, 1),
            ymd(
                year,
                quarter_end_month,
                last_day_of_month(year, quarter_end_month),
            ),
        ),
        year: (ymd(year, 1, 1), ymd(year, 12, 31)),
        cycle: (ymd(cycle - 1, 1, 1), ymd(cycle, 12, 31)),
    }
}

// Month is always 1-12 and day is checked against the month, so the
// construction cannot fail for the inputs this module produces.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    (ymd(next_year, next_month, 1) - Duration::days(1)).day()
}

/// Even years descending from `max_cycle` (or the current cycle), stopping
/// above the first year with data.
pub fn get_cycles(max_cycle: Option<i32>) -> Vec<i32> {
    let max = max_cycle.unwrap_or_else(current_cycle);
    let mut cycles = Vec::new();
    let mut year = max;
    while year > START_YEAR {
        cycles.push(year);
        year -= 2;
    }
    cycles
}

/// Election years for one senate class, descending by the 6-year term.
pub fn get_senate_cycles(class: SenateClass) -> Vec<i32> {
    let mut cycles = Vec::new();
    let mut year = next_senate_election(class);
    while year > START_YEAR {
        cycles.push(year);
        year -= 6;
    }
    cycles
}

/// Election years for every senate class the state belongs to.
pub fn get_state_senate_cycles(state: &str) -> Vec<i32> {
    let code = state.to_ascii_uppercase();
    let mut cycles = Vec::new();
    for class in SenateClass::ALL {
        if senate_class_states(class).contains(&code.as_str()) {
            cycles.extend(get_senate_cycles(class));
        }
    }
    cycles
}

/// Display title for an election page, e.g.
/// "2024 Election United States Senate - California - District 5".
pub fn election_title(
    cycle: i32,
    office: &str,
    state: Option<&str>,
    district: Option<&str>,
) -> String {
    let mut parts = vec![format!(
        "{} Election United States {}",
        cycle,
        capitalize(office)
    )];
    if let Some(state) = state {
        parts.push(state_name(state).unwrap_or(state).to_string());
    }
    if let Some(district) = district {
        parts.push(format!("District {}", district));
    }
    parts.join(" - ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// "X-Y of Z" line for a result listing.
pub fn page_info(pagination: &Pagination) -> String {
    let range_start = pagination.per_page * pagination.page.saturating_sub(1) + 1;
    // range_end stride is fixed at 10, not per_page; see DESIGN.md
    let range_end = pagination.page.saturating_sub(1) * 10 + pagination.per_page;
    format!(
        "{}-{} of {}",
        range_start,
        range_end,
        pagination.count.to_formatted_string(&Locale::en)
    )
}

pub fn two_days_ago() -> String {
    two_days_ago_from(Local::now().date_naive())
}

/// MM/DD/YY of two days before the given date, the freshness cutoff shown
/// next to bulk-download links.
pub fn two_days_ago_from(today: NaiveDate) -> String {
    (today - Duration::days(2)).format("%m/%d/%y").to_string()
}
