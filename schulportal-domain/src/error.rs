//! 领域层统一错误定义
//!
//! 聚焦事件分发、处理器失败、仓储与校验等最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 事件系统 ---
    #[error("event handler error: handler={handler}, reason={reason}")]
    EventHandler { handler: String, reason: String },
    #[error("event dispatch failed: event_type={event_type}, failed_handlers={}", .failures.len())]
    EventDispatch {
        event_type: &'static str,
        failures: Vec<HandlerFailure>,
    },
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },

    // --- 领域规则 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
}

/// 单个处理器的失败记录（随 `EventDispatch` 一并返回给发布方）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    pub handler: String,
    pub reason: String,
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
