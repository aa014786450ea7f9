//! Schulportal 领域层基础库（schulportal-domain）
//!
//! 提供学校管理平台（Schulportal）后端的进程内核心构件：
//! - 领域事件（`domain_event`）：不可变事实记录，带构造时生成的唯一标识与时间戳
//! - 事件系统（`eventing`）：按具体事件类型分发的进程内事件总线与处理器协议
//! - 规约（`specification`）：异步谓词的布尔组合子，用于表达复合业务规则
//! - 组织（`organisation`）：`Organisation` 实体、仓储协议与具体业务规约
//!
//! 本 crate 不包含持久化、HTTP 层与外部系统协议（Keycloak/LDAP/OX 等），
//! 仅定义领域层接口与最小必要的错误类型，外部系统以端口（trait）形式被消费。
//!
//! 典型用法：
//! 1. 使用 `#[domain_event]` 定义具体事件类型；
//! 2. 在组合根构建 `EventBus`，按启动顺序注册处理器，随后只读共享；
//! 3. 领域操作发生事实后构造事件并 `publish`；
//! 4. 通过 `Specification` 组合业务规则并在应用服务中求值。
//!
pub mod domain_event;
pub mod error;
pub mod eventing;
pub mod organisation;
pub mod specification;
pub mod value_object;

// 允许在本 crate 内部通过 ::schulportal_domain 进行自引用，
// 以便过程宏在本 crate 的事件定义与单元测试中也能解析到 ::schulportal_domain 路径。
extern crate self as schulportal_domain;
