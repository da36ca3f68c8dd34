use super::*;

fn frame_2x2(data: Vec<u8>) -> FrameBGRA {
    FrameBGRA {
        width: 2,
        height: 2,
        data,
    }
}

#[test]
fn swaps_red_and_blue_leaves_green_and_alpha() {
    let frame = frame_2x2(vec![
        1, 2, 3, 4, /* */ 5, 6, 7, 8, // row 0
        9, 10, 11, 12, /* */ 13, 14, 15, 16, // row 1
    ]);
    let rows: Vec<Vec<u8>> = rgba_rows(&frame).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec![3, 2, 1, 4, 7, 6, 5, 8]);
    assert_eq!(rows[1], vec![11, 10, 9, 12, 15, 14, 13, 16]);
}

#[test]
fn each_row_is_width_times_four_bytes() {
    let frame = frame_2x2(vec![0; 16]);
    for row in rgba_rows(&frame) {
        assert_eq!(row.len(), 8);
    }
}

#[test]
fn double_reorder_restores_the_original() {
    let frame = frame_2x2((0u8..16).collect());
    let once: Vec<u8> = rgba_rows(&frame).flatten().collect();
    let twice: Vec<u8> = rgba_rows(&frame_2x2(once)).flatten().collect();
    assert_eq!(twice, frame.data);
}
