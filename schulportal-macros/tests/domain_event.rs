use schulportal_domain::domain_event::{DomainEvent, EventMeta};
use schulportal_macros::domain_event;

#[domain_event]
struct ProbeEvent {
    wert: String,
}

#[domain_event(event_type = "Probe.Umbenannt")]
struct UmbenanntesEvent {
    wert: i32,
}

#[test]
fn test_injects_meta_and_implements_domain_event() {
    let event = ProbeEvent {
        meta: EventMeta::new(),
        wert: "x".into(),
    };

    assert_eq!(event.event_type(), "ProbeEvent");
    assert_eq!(ProbeEvent::EVENT_TYPE, "ProbeEvent");
    // meta 在构造时生成
    assert!(event.created_at() <= chrono::Utc::now());
}

#[test]
fn test_event_type_override() {
    let event = UmbenanntesEvent {
        meta: EventMeta::new(),
        wert: 1,
    };

    assert_eq!(event.event_type(), "Probe.Umbenannt");
}

#[test]
fn test_standard_derives_are_merged() {
    let event = ProbeEvent {
        meta: EventMeta::new(),
        wert: "x".into(),
    };

    let cloned = event.clone();
    assert_eq!(event, cloned);
    assert!(format!("{event:?}").contains("ProbeEvent"));
}
