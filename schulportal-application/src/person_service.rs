//! 人员应用服务

use crate::error::AppError;
use schulportal_domain::domain_event::PersonDeletedEvent;
use schulportal_domain::eventing::EventBus;
use schulportal_domain::value_object::PersonId;
use std::sync::Arc;

pub struct PersonService {
    bus: Arc<EventBus>,
}

impl PersonService {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }

    /// 广播"人员已删除"的事实
    ///
    /// 删除本身由持久层先行完成；此处仅负责事实发布，
    /// 投递为至多一次——需要持久保证的调用方须在发布前单独落库。
    pub async fn person_geloescht(
        &self,
        person_id: PersonId,
        username: &str,
        email_address: Option<String>,
    ) -> Result<(), AppError> {
        let event = PersonDeletedEvent::new(person_id, username, email_address);
        self.bus.publish(&event).await?;
        Ok(())
    }
}
