//! Outcome of one destination-side operation.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

/// Lifecycle of an operation inside the Router
#[cw_serde]
#[derive(Copy, Eq)]
pub enum ExecutionStatus {
    Pending,
    Executing,
    Completed,
    Failed,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Pending => "pending",
            ExecutionStatus::Executing => "executing",
            ExecutionStatus::Completed => "completed",
            ExecutionStatus::Failed => "failed",
        }
    }
}

/// Result the Router hands back to the MasterRouter as response data
#[cw_serde]
pub struct ExecutionResult {
    pub success: bool,
    /// Data returned by the downstream call, if any
    pub return_data: Option<Binary>,
    /// Failure reason when `success` is false
    pub error: Option<String>,
}

impl ExecutionResult {
    pub fn completed(return_data: Option<Binary>) -> Self {
        Self {
            success: true,
            return_data,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            return_data: None,
            error: Some(error.into()),
        }
    }

    pub fn status(&self) -> ExecutionStatus {
        if self.success {
            ExecutionStatus::Completed
        } else {
            ExecutionStatus::Failed
        }
    }
}
