use figma_schema_core::{
    Constrain, ConstrainType, ExportSetting, ImageType, LayoutConstraint,
    LayoutConstraintHorizontal, LayoutConstraintVertical, LayoutGrid, LayoutGridAlignment,
};
use serde_json::json;

#[test]
fn constrain_tag_selects_meaning_of_value() {
    let setting: ExportSetting = serde_json::from_value(json!({
        "suffix": "-wide",
        "format": "SVG",
        "constraint": { "type": "WIDTH", "value": 320.0 }
    }))
    .unwrap();

    assert_eq!(setting.format, ImageType::Svg);
    assert_eq!(setting.constraint, Constrain::Width { value: 320.0 });
    assert_eq!(setting.constraint.constrain_type(), ConstrainType::Width);
    assert_eq!(setting.constraint.value(), 320.0);
}

#[test]
fn constrain_serializes_with_type_tag() {
    let constrain = Constrain::Height { value: 64.0 };
    assert_eq!(
        serde_json::to_value(constrain).unwrap(),
        json!({ "type": "HEIGHT", "value": 64.0 })
    );
}

#[test]
fn constrain_requires_value() {
    let err = serde_json::from_value::<Constrain>(json!({ "type": "SCALE" })).unwrap_err();
    assert!(err.to_string().contains("missing field `value`"), "unexpected error: {err}");
}

#[test]
fn layout_constraint_pairs_both_axes() {
    let constraint: LayoutConstraint = serde_json::from_value(json!({
        "vertical": "TOP_BOTTOM",
        "horizontal": "LEFT_RIGHT"
    }))
    .unwrap();
    assert_eq!(constraint.vertical, LayoutConstraintVertical::TopBottom);
    assert_eq!(constraint.horizontal, LayoutConstraintHorizontal::LeftRight);
}

#[test]
fn rows_grid_requires_directional_fields() {
    let err = serde_json::from_value::<LayoutGrid>(json!({
        "pattern": "ROWS",
        "sectionSize": 24.0,
        "visible": true,
        "color": { "r": 0.0, "g": 0.0, "b": 0.0, "a": 0.1 }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("missing field"), "unexpected error: {err}");
}

#[test]
fn square_grid_keeps_directional_fields_when_sent() {
    let fixture = json!({
        "pattern": "GRID",
        "sectionSize": 10.0,
        "visible": true,
        "color": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 0.1 },
        "alignment": "CENTER",
        "gutterSize": 0.0,
        "offset": 0.0,
        "count": 1
    });

    let grid: LayoutGrid = serde_json::from_value(fixture.clone()).unwrap();
    let LayoutGrid::Grid(square) = &grid else {
        panic!("expected square grid");
    };
    assert_eq!(square.alignment, Some(LayoutGridAlignment::Center));
    assert_eq!(grid.section_size(), 10.0);
    assert!(grid.visible());
    assert_eq!(grid.color().r, 1.0);
    assert_eq!(serde_json::to_value(grid).unwrap(), fixture);
}
