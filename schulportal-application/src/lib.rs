//! Schulportal 应用层（schulportal-application）
//!
//! 连接领域核心与外部系统：
//! - 端口（`ports`）：下游系统（LDAP、OX、itslearning）的最小协议
//! - 处理器（`handlers`）：订阅领域事件并调用端口执行副作用
//! - 组合根（`wiring`）：构建事件总线并按启动顺序注册处理器
//! - 应用服务（`person_service`/`organisation_service`）：组合规约校验、
//!   拒绝非法操作、发布领域事实

pub mod error;
pub mod handlers;
pub mod organisation_service;
pub mod person_service;
pub mod ports;
pub mod wiring;

pub use error::AppError;
