use film_packer_core::prelude::*;

fn inputs() -> Vec<PieceSpec> {
    vec![
        PieceSpec {
            id: "door".into(),
            width: 70,
            height: 30,
            count: 3,
            color: Some("#4D96FF".into()),
        },
        PieceSpec {
            id: "panel".into(),
            width: 42,
            height: 50,
            count: 2,
            color: Some("#FF6B6B".into()),
        },
        PieceSpec {
            id: "strip".into(),
            width: 12,
            height: 88,
            count: 6,
            color: None,
        },
    ]
}

#[test]
fn identical_inputs_yield_identical_layouts() {
    for axis in [LayoutAxis::Horizontal, LayoutAxis::Vertical] {
        let cfg = PackConfig::builder()
            .sheet_dimensions(128, 96)
            .axis(axis)
            .sheet_margin(4)
            .build();

        let a = pack_pieces(inputs(), cfg.clone()).unwrap();
        let b = pack_pieces(inputs(), cfg).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn color_tags_ride_along_untouched() {
    let cfg = PackConfig::builder().sheet_dimensions(128, 96).build();
    let layout = pack_pieces(inputs(), cfg).unwrap();

    for p in &layout.placements {
        match p.id.as_str() {
            "door" => assert_eq!(p.color.as_deref(), Some("#4D96FF")),
            "panel" => assert_eq!(p.color.as_deref(), Some("#FF6B6B")),
            _ => assert_eq!(p.color, None),
        }
    }
}

#[test]
fn layout_round_trips_through_json() {
    let cfg = PackConfig::builder().sheet_dimensions(128, 96).build();
    let layout = pack_pieces(inputs(), cfg).unwrap();

    let json = serde_json::to_string(&layout).unwrap();
    let back: Layout = serde_json::from_str(&json).unwrap();
    assert_eq!(layout, back);
}
