use super::*;

// =============================================================
// Inbound decoding
// =============================================================

#[test]
fn decode_tick_message() {
    let text = r#"{"changes":[[{"x":2,"y":3},{"id":7,"number":5}]]}"#;
    let msg = decode_server_message(text).expect("decode");
    let ServerMessage::Tick { changes } = msg else {
        panic!("expected Tick, got {msg:?}");
    };
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].0, Position { x: 2, y: 3 });
    assert_eq!(changes[0].1, SquareChange { id: Some(7), number: 5 });
}

#[test]
fn decode_tick_with_cleared_square() {
    let text = r#"{"changes":[[{"x":0,"y":0},{"id":null,"number":0}]]}"#;
    let msg = decode_server_message(text).expect("decode");
    let ServerMessage::Tick { changes } = msg else {
        panic!("expected Tick, got {msg:?}");
    };
    assert_eq!(changes[0].1.id, None);
}

#[test]
fn decode_tick_with_empty_changes() {
    let msg = decode_server_message(r#"{"changes":[]}"#).expect("decode");
    assert_eq!(msg, ServerMessage::Tick { changes: vec![] });
}

#[test]
fn decode_login_message() {
    let text = r#"{
        "id": 3,
        "color": [255, 0, 128],
        "spawn_point": {"x": 0, "y": 0},
        "config": {"size": 20, "max_number": 9},
        "snapshot": {
            "players": [[3, [255, 0, 128]]],
            "squares": [[{"x": 1, "y": 1}, {"owner": 3, "number": 1}]]
        }
    }"#;
    let msg = decode_server_message(text).expect("decode");
    let ServerMessage::Login(login) = msg else {
        panic!("expected Login, got {msg:?}");
    };
    assert_eq!(login.id, 3);
    assert_eq!(login.color, (255, 0, 128));
    assert_eq!(login.config.size, 20);
    assert_eq!(login.snapshot.players, vec![(3, (255, 0, 128))]);
    assert_eq!(
        login.snapshot.squares,
        vec![(Position { x: 1, y: 1 }, Square { owner: 3, number: 1 })]
    );
}

#[test]
fn decode_player_join_message() {
    let msg = decode_server_message(r#"{"player_join":[9,[10,20,30]]}"#).expect("decode");
    assert_eq!(msg, ServerMessage::PlayerJoin { player_join: (9, (10, 20, 30)) });
}

#[test]
fn decode_ignores_unknown_sibling_keys() {
    let text = r#"{"changes":[],"server_time":12345,"future_field":{"a":1}}"#;
    let msg = decode_server_message(text).expect("decode");
    assert_eq!(msg, ServerMessage::Tick { changes: vec![] });
}

#[test]
fn decode_rejects_invalid_json_as_parse_error() {
    let err = decode_server_message("{not json").expect_err("should fail");
    assert!(matches!(err, CodecError::Parse(_)));
}

#[test]
fn decode_rejects_unknown_shape() {
    let err = decode_server_message(r#"{"heartbeat":1}"#).expect_err("should fail");
    assert!(matches!(err, CodecError::UnknownShape));
}

#[test]
fn decode_rejects_non_object_payload() {
    let err = decode_server_message("[1,2,3]").expect_err("should fail");
    assert!(matches!(err, CodecError::UnknownShape));
}

// =============================================================
// Outbound encoding
// =============================================================

#[test]
fn encode_click_message_wire_shape() {
    let msg = ClientMessage::Click { position: Position { x: 4, y: 7 } };
    assert_eq!(
        encode_client_message(&msg),
        r#"{"type":"click","data":{"position":{"x":4,"y":7}}}"#
    );
}

#[test]
fn click_message_round_trips() {
    let msg = ClientMessage::Click { position: Position { x: 0, y: 19 } };
    let text = encode_client_message(&msg);
    let back: ClientMessage = serde_json::from_str(&text).expect("decode");
    assert_eq!(back, msg);
}

// =============================================================
// Data model details
// =============================================================

#[test]
fn position_is_hashable_map_key() {
    let mut map = std::collections::HashMap::new();
    map.insert(Position { x: 1, y: 2 }, "a");
    map.insert(Position { x: 1, y: 2 }, "b");
    assert_eq!(map.len(), 1);
    assert_eq!(map[&Position { x: 1, y: 2 }], "b");
}

#[test]
fn square_change_serializes_cleared_as_null_id() {
    let change = SquareChange { id: None, number: 0 };
    let text = serde_json::to_string(&change).expect("encode");
    assert_eq!(text, r#"{"id":null,"number":0}"#);
}

#[test]
fn color_serializes_as_three_tuple() {
    let color: Color = (1, 2, 3);
    assert_eq!(serde_json::to_string(&color).expect("encode"), "[1,2,3]");
}
