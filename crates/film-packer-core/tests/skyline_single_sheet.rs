use film_packer_core::prelude::*;

fn cfg(w: u32, h: u32) -> PackConfig {
    PackConfig::builder().sheet_dimensions(w, h).build()
}

fn piece(id: &str, w: u32, h: u32) -> Piece {
    Piece {
        id: id.into(),
        width: w,
        height: h,
        color: None,
    }
}

#[test]
fn first_piece_lands_at_origin() {
    let mut sheet = HorizontalSheet::new(&cfg(100, 100), 0, 0);
    let p = sheet.place(&piece("A", 60, 40)).expect("should fit");
    assert_eq!((p.x, p.y, p.width, p.height, p.sheet), (0, 0, 60, 40, 0));
}

#[test]
fn second_piece_sits_beside_the_first() {
    let mut sheet = HorizontalSheet::new(&cfg(100, 100), 0, 0);
    sheet.place(&piece("A", 60, 40)).unwrap();
    let b = sheet.place(&piece("B", 40, 30)).unwrap();
    assert_eq!((b.x, b.y), (60, 0));
}

#[test]
fn lowest_run_wins_over_scan_order() {
    let mut sheet = HorizontalSheet::new(&cfg(100, 100), 0, 0);
    // Tall piece on the left leaves the right side lower.
    sheet.place(&piece("A", 30, 80)).unwrap();
    let b = sheet.place(&piece("B", 50, 10)).unwrap();
    assert_eq!((b.x, b.y), (30, 0));
}

#[test]
fn equal_runs_coalesce_into_one() {
    let mut sheet = HorizontalSheet::new(&cfg(100, 100), 0, 0);
    sheet.place(&piece("A", 30, 80)).unwrap();
    sheet.place(&piece("B", 40, 80)).unwrap();
    // The left 70 units now form one run at level 80, so a 50-wide piece
    // goes on top of it; the low run on the right is only 30 wide and a
    // piece never bridges out of a run narrower than itself.
    let c = sheet.place(&piece("C", 50, 10)).unwrap();
    assert_eq!((c.x, c.y), (0, 80));
}

#[test]
fn rejects_when_every_candidate_exceeds_the_sheet() {
    let mut sheet = HorizontalSheet::new(&cfg(100, 100), 0, 0);
    sheet.place(&piece("A", 60, 60)).unwrap();
    assert!(!sheet.can_place(&piece("B", 60, 60)));
    assert!(sheet.place(&piece("B", 60, 60)).is_none());
}

#[test]
fn rejects_pieces_wider_than_the_sheet() {
    let mut sheet = HorizontalSheet::new(&cfg(100, 100), 0, 0);
    assert!(!sheet.can_place(&piece("W", 150, 10)));
    assert!(sheet.place(&piece("W", 150, 10)).is_none());
}

#[test]
fn fills_the_sheet_exactly() {
    let mut sheet = HorizontalSheet::new(&cfg(100, 100), 0, 0);
    let expected = [(0, 0), (50, 0), (0, 50), (50, 50)];
    for (i, want) in expected.iter().enumerate() {
        let p = sheet.place(&piece(&format!("p{i}"), 50, 50)).unwrap();
        assert_eq!((p.x, p.y), *want);
    }
    assert!(sheet.place(&piece("extra", 50, 50)).is_none());
}

#[test]
fn vertical_sheet_pushes_pieces_rightward() {
    let mut sheet = VerticalSheet::new(&cfg(100, 100), 0, 0);
    let a = sheet.place(&piece("A", 40, 60)).unwrap();
    assert_eq!((a.x, a.y), (0, 0));
    // The run below A is still at level zero, so B starts a new row there
    // rather than a new column.
    let b = sheet.place(&piece("B", 30, 40)).unwrap();
    assert_eq!((b.x, b.y), (0, 60));
}

#[test]
fn offset_shifts_placements_along_the_stacking_axis() {
    let mut sheet = HorizontalSheet::new(&cfg(100, 100), 1, 120);
    let a = sheet.place(&piece("A", 10, 10)).unwrap();
    assert_eq!((a.x, a.y, a.sheet), (0, 120, 1));

    let mut sheet = VerticalSheet::new(&cfg(100, 100), 2, 250);
    let a = sheet.place(&piece("A", 10, 10)).unwrap();
    assert_eq!((a.x, a.y, a.sheet), (250, 0, 2));
}

#[test]
fn zero_sized_pieces_are_never_placed() {
    let mut sheet = HorizontalSheet::new(&cfg(100, 100), 0, 0);
    assert!(sheet.place(&piece("flat", 0, 10)).is_none());
    assert!(sheet.place(&piece("thin", 10, 0)).is_none());
}
