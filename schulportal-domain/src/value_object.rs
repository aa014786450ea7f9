//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象。此处集中定义各聚合的强类型 ID，
//! 避免裸 `Uuid` 在签名中丢失语义。
//!

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// 生成一个新的随机 ID（uuid v4）
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub const fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

uuid_id! {
    /// 事件唯一标识（进程内唯一即可，构造时生成）
    EventId
}

uuid_id! {
    /// 人员（Person）ID
    PersonId
}

uuid_id! {
    /// 组织（Organisation）ID：学校、班级、学校承载方等
    OrganisationId
}

uuid_id! {
    /// 角色（Rolle）ID
    RolleId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = EventId::new();
        let b = EventId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_roundtrip_uuid() {
        let raw = Uuid::new_v4();
        let id = OrganisationId::from_uuid(raw);
        assert_eq!(id.value(), raw);
        assert_eq!(id.to_string(), raw.to_string());
    }
}
