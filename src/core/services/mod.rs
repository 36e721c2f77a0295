pub mod budget_service;
pub mod category_service;
pub mod chart_service;
pub mod summary_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use chart_service::ChartService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;

use crate::errors::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Invalid(String),
}
