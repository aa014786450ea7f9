use super::Organisation;
use crate::error::DomainResult;
use crate::value_object::OrganisationId;
use async_trait::async_trait;

/// 组织仓储协议（由基础设施层实现，领域层仅消费）
#[async_trait]
pub trait OrganisationRepository: Send + Sync {
    async fn find_by_id(&self, id: &OrganisationId) -> DomainResult<Option<Organisation>>;

    /// 指定学校编号是否已被占用
    async fn kennung_vergeben(&self, kennung: &str) -> DomainResult<bool>;
}
