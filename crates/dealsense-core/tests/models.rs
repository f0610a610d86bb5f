use dealsense_core::error::CoreError;
use dealsense_core::models::activity::ActivityRecord;
use dealsense_core::models::deal::{parse_similar_deals, DealRecord};

#[test]
fn missing_fields_take_defaults() {
    let deals = parse_similar_deals(r#"[{}]"#).unwrap();
    let deal = &deals[0];

    assert_eq!(deal.display_id(1), "Deal_1");
    assert_eq!(deal.metadata.outcome(), "unknown");
    assert_eq!(deal.metadata.deal_amount(), 0.0);
    assert_eq!(deal.metadata.deal_stage(), "unknown");
    assert_eq!(deal.total_activities(), 0);
    assert!(deal.activities.is_empty());
}

#[test]
fn null_fields_take_defaults() {
    let json = r#"[{
        "deal_id": null,
        "metadata": null,
        "activities": null
    }, {
        "deal_id": "D-2",
        "metadata": {"outcome": null, "deal_amount": null, "deal_stage": null},
        "activities": [{"activity_type": null, "content": null}]
    }]"#;

    let deals = parse_similar_deals(json).unwrap();
    assert_eq!(deals.len(), 2);
    assert_eq!(deals[0].display_id(1), "Deal_1");
    assert_eq!(deals[0].total_activities(), 0);

    assert_eq!(deals[1].display_id(2), "D-2");
    assert_eq!(deals[1].metadata.outcome(), "unknown");
    assert_eq!(deals[1].total_activities(), 1);
    assert_eq!(deals[1].activities[0].activity_type(), "unknown");
    assert_eq!(deals[1].activities[0].content(), "");
}

#[test]
fn recorded_total_overrides_attached_count() {
    let json = r#"[{
        "deal_id": "D-9",
        "metadata": {"outcome": "won", "deal_amount": 5000, "deal_stage": "closed_won", "total_activities": 42},
        "activities": [{"activity_type": "email", "content": "Sent proposal"}],
        "score": 0.93
    }]"#;

    let deals = parse_similar_deals(json).unwrap();
    let deal = &deals[0];
    assert_eq!(deal.metadata.outcome(), "won");
    assert_eq!(deal.metadata.deal_amount(), 5000.0);
    assert_eq!(deal.metadata.deal_stage(), "closed_won");
    assert_eq!(deal.total_activities(), 42);
    assert_eq!(deal.activities[0], ActivityRecord::new("email", "Sent proposal"));
}

#[test]
fn non_array_payload_is_rejected() {
    let err = parse_similar_deals(r#"{"deal_id": "D-1"}"#).unwrap_err();
    assert!(matches!(err, CoreError::NotAnArray(ref kind) if kind == "an object"));
}

#[test]
fn invalid_json_is_a_serialization_error() {
    let err = parse_similar_deals("[{").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn default_record_counts_attached_activities() {
    let deal = DealRecord {
        activities: vec![
            ActivityRecord::new("call", "Intro call"),
            ActivityRecord::new("note", ""),
        ],
        ..Default::default()
    };
    assert_eq!(deal.total_activities(), 2);
}

#[test]
fn numeric_deal_id_does_not_reject_payload() {
    let json = r#"[
        {"deal_id": 12345, "metadata": {"outcome": "won"}},
        {"deal_id": "D-2"}
    ]"#;

    let deals = parse_similar_deals(json).unwrap();
    assert_eq!(deals.len(), 2);
    assert_eq!(deals[0].display_id(1), "12345");
    assert_eq!(deals[0].metadata.outcome(), "won");
    assert_eq!(deals[1].display_id(2), "D-2");
}

#[test]
fn whole_float_total_is_accepted() {
    let deals = parse_similar_deals(r#"[{"metadata": {"total_activities": 7.0}}]"#).unwrap();
    assert_eq!(deals[0].total_activities(), 7);
}

#[test]
fn unusable_loose_fields_fall_back_to_defaults() {
    let json = r#"[{
        "deal_id": {"hubspot": 1},
        "metadata": {
            "outcome": true,
            "deal_stage": 3,
            "total_activities": 2.5
        },
        "activities": [{"activity_type": "call", "content": "Intro"}]
    }, {
        "metadata": {"total_activities": -4}
    }, {
        "metadata": {"total_activities": "seven"}
    }]"#;

    let deals = parse_similar_deals(json).unwrap();
    assert_eq!(deals.len(), 3);
    assert_eq!(deals[0].display_id(1), "Deal_1");
    assert_eq!(deals[0].metadata.outcome(), "true");
    assert_eq!(deals[0].metadata.deal_stage(), "3");
    assert_eq!(deals[0].total_activities(), 1);
    assert_eq!(deals[1].total_activities(), 0);
    assert_eq!(deals[2].total_activities(), 0);
}
