use figma_schema_core::{ClientMeta, Comment, Component, Style, StyleType, Vector, Version};
use serde_json::json;

fn user() -> serde_json::Value {
    json!({ "handle": "ada", "img_url": "https://example.com/ada.png" })
}

#[test]
fn comment_with_canvas_position_decodes_as_position() {
    let fixture = json!({
        "id": "101",
        "client_meta": { "x": 120.0, "y": 48.5 },
        "file_key": "abcDEF",
        "parent_id": "",
        "user": user(),
        "created_at": "2019-04-01T10:00:00Z",
        "resolved_at": "",
        "order_id": 3,
        "message": "Looks good"
    });

    let comment: Comment = serde_json::from_value(fixture.clone()).unwrap();
    assert_eq!(comment.client_meta, ClientMeta::Position(Vector::new(120.0, 48.5)));
    assert_eq!(comment.client_meta.node_id(), None);
    assert_eq!(comment.order_id, Some(3));
    assert_eq!(comment.user.handle, "ada");
    assert!(!comment.is_reply());
    assert!(!comment.is_resolved());
    assert_eq!(serde_json::to_value(&comment).unwrap(), fixture);
}

#[test]
fn reply_pinned_to_frame_decodes_frame_offset() {
    let fixture = json!({
        "id": "102",
        "client_meta": { "node_id": "1:1", "node_offset": { "x": 4.0, "y": 8.0 } },
        "file_key": "abcDEF",
        "parent_id": "101",
        "user": user(),
        "created_at": "2019-04-01T11:00:00Z",
        "resolved_at": "2019-04-02T09:30:00Z",
        "message": "Fixed"
    });

    let comment: Comment = serde_json::from_value(fixture.clone()).unwrap();
    assert_eq!(comment.client_meta.node_id(), Some("1:1"));
    let ClientMeta::FrameOffset(offset) = &comment.client_meta else {
        panic!("expected frame offset");
    };
    assert_eq!(offset.node_offset, Vector::new(4.0, 8.0));
    assert_eq!(comment.order_id, None);
    assert!(comment.is_reply());
    assert!(comment.is_resolved());

    let encoded = serde_json::to_value(&comment).unwrap();
    assert!(encoded.get("order_id").is_none());
    assert_eq!(encoded, fixture);
}

#[test]
fn client_meta_with_neither_shape_is_rejected() {
    let err = serde_json::from_value::<ClientMeta>(json!({ "node_id": "1:1" })).unwrap_err();
    assert!(
        err.to_string().contains("did not match any variant"),
        "unexpected error: {err}"
    );
}

#[test]
fn version_and_component_records_use_snake_case_keys() {
    let version: Version = serde_json::from_value(json!({
        "id": "233",
        "created_at": "2019-05-01T00:00:00Z",
        "label": "v2",
        "description": "Second pass",
        "user": user()
    }))
    .unwrap();
    assert_eq!(version.label, "v2");
    assert_eq!(version.user.img_url, "https://example.com/ada.png");

    let component: Component = serde_json::from_value(json!({
        "name": "Button",
        "description": "Primary action"
    }))
    .unwrap();
    assert_eq!(component.name, "Button");
}

#[test]
fn style_carries_style_type_discriminant() {
    let style: Style = serde_json::from_value(json!({
        "name": "Heading/1",
        "style_type": "TEXT"
    }))
    .unwrap();
    assert_eq!(style.style_type, StyleType::Text);
    assert_eq!(
        serde_json::to_value(&style).unwrap(),
        json!({ "name": "Heading/1", "style_type": "TEXT" })
    );
}
