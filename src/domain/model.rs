use crate::utils::error::{Result, SmokeError};

/// 一次視訊子系統初始化的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmokeOutcome {
    Initialized,
    InitFailed { message: String },
}

impl SmokeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SmokeOutcome::Initialized)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SmokeOutcome::Initialized => 0,
            SmokeOutcome::InitFailed { .. } => 1,
        }
    }

    /// 失敗結果轉為 `SmokeError::InitFailed`，方便以 `?` 傳遞
    pub fn into_result(self) -> Result<()> {
        match self {
            SmokeOutcome::Initialized => Ok(()),
            SmokeOutcome::InitFailed { message } => Err(SmokeError::InitFailed { message }),
        }
    }
}
