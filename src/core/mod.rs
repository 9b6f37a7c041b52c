pub mod cycles;
pub mod gateway;
pub mod summary;

pub use crate::domain::model::{
    CommitteeFinancials, FormType, LineSpec, Pagination, SearchResults, SummaryLine, Totals,
};
pub use crate::utils::error::Result;
