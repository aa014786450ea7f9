//! 事件系统（Eventing）
//!
//! 进程内的事件分发：生产方构造具体事件并 `publish`，
//! 总线按事件的具体类型查找处理器并逐个 await 调用。

pub mod bus;
pub mod handler;

pub use bus::EventBus;
pub use handler::EventHandler;
