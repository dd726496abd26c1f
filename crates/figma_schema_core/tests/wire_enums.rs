use figma_schema_core::{
    BlendMode, ConstrainType, EasingType, EffectType, ImageScaleMode, ImageType,
    LayoutConstraintHorizontal, LayoutConstraintVertical, LayoutGridAlignment, LayoutGridPattern,
    NodeType, PaintType, PathWindingRule, StrokeAlign, StyleType, TextAlignHorizontal,
    TextAlignVertical,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

fn assert_wire_values<T>(all: &[T], as_str: fn(T) -> &'static str, expected: &[&str])
where
    T: Copy + PartialEq + Debug + Serialize + DeserializeOwned,
{
    let actual: Vec<&str> = all.iter().map(|value| as_str(*value)).collect();
    assert_eq!(actual, expected);

    for value in all {
        let json = serde_json::to_value(value).unwrap();
        assert_eq!(json, serde_json::Value::String(as_str(*value).to_string()));
        let decoded: T = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, *value);
    }
}

#[test]
fn blend_mode_has_nineteen_values() {
    assert_eq!(BlendMode::ALL.len(), 19);
    assert_wire_values(
        &BlendMode::ALL,
        BlendMode::as_str,
        &[
            "PASS_THROUGH",
            "NORMAL",
            "DARKEN",
            "MULTIPLY",
            "LINEAR_BURN",
            "COLOR_BURN",
            "LIGHTEN",
            "SCREEN",
            "LINEAR_DODGE",
            "COLOR_DODGE",
            "OVERLAY",
            "SOFT_LIGHT",
            "HARD_LIGHT",
            "DIFFERENCE",
            "EXCLUSION",
            "HUE",
            "SATURATION",
            "COLOR",
            "LUMINOSITY",
        ],
    );
}

#[test]
fn easing_type_has_three_values() {
    assert_wire_values(
        &EasingType::ALL,
        EasingType::as_str,
        &["EASE_IN", "EASE_OUT", "EASE_IN_AND_OUT"],
    );
}

#[test]
fn paint_and_effect_discriminants_match_wire_values() {
    assert_wire_values(
        &PaintType::ALL,
        PaintType::as_str,
        &[
            "SOLID",
            "GRADIENT_LINEAR",
            "GRADIENT_RADIAL",
            "GRADIENT_ANGULAR",
            "GRADIENT_DIAMOND",
            "IMAGE",
            "EMOJI",
        ],
    );
    assert_wire_values(
        &ImageScaleMode::ALL,
        ImageScaleMode::as_str,
        &["FILL", "FIT", "TILE", "STRETCH"],
    );
    assert_wire_values(
        &EffectType::ALL,
        EffectType::as_str,
        &["INNER_SHADOW", "DROP_SHADOW", "LAYER_BLUR", "BACKGROUND_BLUR"],
    );
}

#[test]
fn export_enums_match_wire_values() {
    assert_wire_values(&ImageType::ALL, ImageType::as_str, &["JPG", "PNG", "SVG"]);
    assert_wire_values(
        &ConstrainType::ALL,
        ConstrainType::as_str,
        &["SCALE", "WIDTH", "HEIGHT"],
    );
}

#[test]
fn layout_enums_match_wire_values() {
    assert_wire_values(
        &LayoutConstraintVertical::ALL,
        LayoutConstraintVertical::as_str,
        &["TOP", "BOTTOM", "CENTER", "TOP_BOTTOM", "SCALE"],
    );
    assert_wire_values(
        &LayoutConstraintHorizontal::ALL,
        LayoutConstraintHorizontal::as_str,
        &["LEFT", "RIGHT", "CENTER", "LEFT_RIGHT", "SCALE"],
    );
    assert_wire_values(
        &LayoutGridPattern::ALL,
        LayoutGridPattern::as_str,
        &["COLUMNS", "ROWS", "GRID"],
    );
    assert_wire_values(
        &LayoutGridAlignment::ALL,
        LayoutGridAlignment::as_str,
        &["MIN", "MAX", "CENTER"],
    );
}

#[test]
fn text_and_style_enums_match_wire_values() {
    assert_wire_values(
        &TextAlignHorizontal::ALL,
        TextAlignHorizontal::as_str,
        &["LEFT", "RIGHT", "CENTER", "JUSTIFIED"],
    );
    assert_wire_values(
        &TextAlignVertical::ALL,
        TextAlignVertical::as_str,
        &["TOP", "CENTER", "BOTTOM"],
    );
    assert_wire_values(
        &StyleType::ALL,
        StyleType::as_str,
        &["FILL", "TEXT", "EFFECT", "GRID"],
    );
}

#[test]
fn geometry_enums_match_wire_values() {
    assert_wire_values(
        &PathWindingRule::ALL,
        PathWindingRule::as_str,
        &["EVENODD", "NONZERO"],
    );
    assert_wire_values(
        &StrokeAlign::ALL,
        StrokeAlign::as_str,
        &["INSIDE", "OUTSIDE", "CENTER"],
    );
}

#[test]
fn node_type_covers_every_variant_tag() {
    assert_wire_values(
        &NodeType::ALL,
        NodeType::as_str,
        &[
            "DOCUMENT",
            "CANVAS",
            "FRAME",
            "GROUP",
            "VECTOR",
            "BOOLEAN",
            "BOOLEAN_OPERATION",
            "STAR",
            "LINE",
            "ELLIPSE",
            "REGULAR_POLYGON",
            "RECTANGLE",
            "TEXT",
            "SLICE",
            "COMPONENT",
            "INSTANCE",
        ],
    );
}

#[test]
fn wire_values_are_case_sensitive() {
    let err = serde_json::from_value::<BlendMode>(serde_json::json!("normal")).unwrap_err();
    assert!(err.to_string().contains("unknown variant"), "unexpected error: {err}");

    let err = serde_json::from_value::<EasingType>(serde_json::json!("EASE_IN_OUT")).unwrap_err();
    assert!(err.to_string().contains("unknown variant"), "unexpected error: {err}");
}
