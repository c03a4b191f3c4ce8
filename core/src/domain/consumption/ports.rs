use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    consumption::{
        entities::{ConsumptionLog, ConsumptionLogDetails},
        value_objects::RecentConsumption,
    },
};

/// Repository trait for consumption logs
#[cfg_attr(test, mockall::automock)]
pub trait ConsumptionLogRepository: Send + Sync {
    fn create(
        &self,
        log: ConsumptionLog,
    ) -> impl Future<Output = Result<ConsumptionLogDetails, CoreError>> + Send;

    /// Logs in the window, joined, newest first.
    fn get_logs_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<ConsumptionLogDetails>, CoreError>> + Send;

    /// In-window log rows reduced to ingredient references, with dish entries
    /// pre-joined to their ingredient ids. Input to recency aggregation.
    fn get_recent_rows(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<RecentConsumption>, CoreError>> + Send;
}
