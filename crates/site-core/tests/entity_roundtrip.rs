//! Serde roundtrip and JsonSchema validation tests for all entity types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::schema_for;
use site_core::entities::*;
use site_core::enums::*;
use site_core::interval::Interval;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    interval_roundtrip,
    Interval,
    Interval::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap()
);

roundtrip_and_validate!(
    role_roundtrip,
    Role,
    Role {
        id: "superintendent".into(),
        name: "Superintendent".into(),
        trade: Some("field".into()),
    }
);

roundtrip_and_validate!(
    assignment_roundtrip,
    StaffAssignment,
    StaffAssignment {
        id: "asn-04".into(),
        role_id: "pe".into(),
        person: None,
        span: Interval::new(date(2024, 3, 1), date(2024, 11, 15)).unwrap(),
        fte: 0.5,
    }
);

roundtrip_and_validate!(
    activity_roundtrip,
    PlanActivity,
    PlanActivity {
        id: "act-09".into(),
        title: "Exterior envelope".into(),
        phase: Some("structure".into()),
        span: Interval::new(date(2024, 5, 1), date(2024, 9, 30)).unwrap(),
    }
);

roundtrip_and_validate!(
    staff_item_roundtrip,
    TimelineItem,
    TimelineItem::Staff(StaffAssignment {
        id: "asn-01".into(),
        role_id: "pm".into(),
        person: Some("R. Alvarez".into()),
        span: Interval::new(date(2024, 1, 1), date(2024, 6, 30)).unwrap(),
        fte: 1.0,
    })
);

roundtrip_and_validate!(
    activity_item_roundtrip,
    TimelineItem,
    TimelineItem::Activity(PlanActivity {
        id: "act-01".into(),
        title: "Closeout".into(),
        phase: Some("closeout".into()),
        span: Interval::new(date(2024, 11, 1), date(2024, 12, 20)).unwrap(),
    })
);

roundtrip_and_validate!(allocation_row_roundtrip, AllocationRow, {
    let mut row = AllocationRow::new("pm");
    row.cells.insert("2024-01".into(), 2.0);
    row.cells.insert("2024-02".into(), 1.5);
    row
});

roundtrip_and_validate!(plan_roundtrip, StaffingPlan, {
    let mut row = AllocationRow::new("pm");
    row.cells.insert("2024-01".into(), 2.0);
    StaffingPlan {
        id: "plan:riverside-tower".into(),
        granularity: Granularity::Month,
        roles: vec![Role {
            id: "pm".into(),
            name: "Project Manager".into(),
            trade: None,
        }],
        items: vec![TimelineItem::Staff(StaffAssignment {
            id: "asn-01".into(),
            role_id: "pm".into(),
            person: Some("R. Alvarez".into()),
            span: Interval::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap(),
            fte: 1.0,
        })],
        allocations: vec![row],
        setup_defaults: BTreeMap::from([("pm".to_string(), 1.0)]),
    }
});
