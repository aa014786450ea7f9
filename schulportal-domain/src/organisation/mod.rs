//! 组织（Organisation）
//!
//! 学校管理平台中的组织树节点：学校（Schule）、班级（Klasse）、
//! 学校承载方（Traeger）等。实体本身只承载数据与访问器，
//! 复合业务规则以规约（`specs`）形式表达并在应用服务中组合求值。

mod entity;
mod repository;
pub mod specs;

pub use entity::{Organisation, OrganisationsTyp};
pub use repository::OrganisationRepository;
