// File: crates/measure-core/tests/series.rs
// Purpose: Column shape, alignment, and target id properties of built chart configurations.

use measure_core::{build_series, Cell, ChartOptions, Measurement, Record, RecordSet, SeriesBuilder};
use serde_json::json;

#[test]
fn single_record_weight() {
    let set = RecordSet::new(vec![Record::new("2016-02-26", 82.0, 92.0, 59.0, 29.5)]);
    let cfg = build_series(&set, Measurement::Weight);

    assert_eq!(cfg.bindto, "#weight");
    assert_eq!(
        serde_json::to_value(&cfg.data.columns).unwrap(),
        json!([["day", "2016-02-26"], ["weight", 82]])
    );
}

#[test]
fn builtin_arm_column() {
    let set = RecordSet::builtin();
    let cfg = build_series(&set, Measurement::Arm);
    assert_eq!(
        serde_json::to_value(&cfg.data.columns.y).unwrap(),
        json!(["arm", 29.5, 28.5, 28.5, 28.5, 28.5, 28, 27.5, 28, 27, 27.5])
    );
}

#[test]
fn columns_align_for_every_measurement() {
    let set = RecordSet::builtin();
    let builder = SeriesBuilder::new(&set);
    for m in Measurement::ALL {
        let cfg = builder.build(m);
        let table = cfg.table();
        assert_eq!(table.x.len(), table.y.len(), "{m}");
        assert_eq!(table.x.len(), set.len() + 1);
        assert_eq!(table.x.label, "day");
        assert_eq!(table.y.label, m.name());
        assert_eq!(cfg.bindto, format!("#{}", m.name()));
        assert_eq!(cfg.target_id(), m.name());
        assert_eq!(cfg.measurement, m);

        for (i, (day, value)) in table.rows().enumerate() {
            let rec = &set.records()[i];
            assert_eq!(day, &Cell::Text(rec.day.clone()));
            assert_eq!(value, &Cell::from(rec.get(m)));
        }
    }
}

#[test]
fn build_is_idempotent() {
    let set = RecordSet::builtin();
    let builder = SeriesBuilder::new(&set);
    assert_eq!(builder.build(Measurement::Thigh), builder.build(Measurement::Thigh));
    assert_eq!(builder.build(Measurement::Thigh), build_series(&set, Measurement::Thigh));
}

#[test]
fn full_config_shape() {
    let set = RecordSet::new(vec![Record::new("2016-02-26", 82.0, 92.0, 59.0, 29.5)]);
    let cfg = build_series(&set, Measurement::Abdomen);
    assert_eq!(
        serde_json::to_value(&cfg).unwrap(),
        json!({
            "bindto": "#abdomen",
            "data": { "x": "day", "columns": [["day", "2016-02-26"], ["abdomen", 92]] },
            "axis": { "x": { "type": "timeseries", "tick": { "format": "%d/%m/%Y" } } }
        })
    );
}

#[test]
fn missing_values_become_null() {
    let set = RecordSet::new(vec![
        Record::new("2016-02-26", 82.0, 92.0, 59.0, 29.5),
        Record::blank("2016-03-05").with(Measurement::Weight, Some(80.2)),
    ]);
    let cfg = build_series(&set, Measurement::Arm);
    assert_eq!(serde_json::to_value(&cfg.data.columns.y).unwrap(), json!(["arm", 29.5, null]));
}

#[test]
fn empty_set_yields_header_only_columns() {
    let set = RecordSet::default();
    let cfg = build_series(&set, Measurement::Weight);
    assert_eq!(serde_json::to_value(&cfg.data.columns).unwrap(), json!([["day"], ["weight"]]));
}

#[test]
fn build_all_keeps_order_and_honours_options() {
    let set = RecordSet::builtin();
    let opts = ChartOptions { tick_format: "%Y-%m".to_string(), ..ChartOptions::default() };
    let builder = SeriesBuilder::with_options(&set, opts);
    let cfgs = builder.build_all(&[Measurement::Arm, Measurement::Weight]);
    let ids: Vec<_> = cfgs.iter().map(|c| c.bindto.as_str()).collect();
    assert_eq!(ids, ["#arm", "#weight"]);
    assert!(cfgs.iter().all(|c| c.axis.x.tick.format == "%Y-%m"));
}
