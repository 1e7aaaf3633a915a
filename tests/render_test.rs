use tui_2048::core::{color_index, Board};
use tui_2048::term::{encode_full_into, tile_style, GameView, Screen, TILE_PALETTE};

fn ladder_board() -> Board {
    Board::from_rows([
        [0, 2, 4, 8],
        [16, 32, 64, 128],
        [256, 512, 1024, 2048],
        [4096, 8192, 16384, 131072],
    ])
    .unwrap()
}

#[test]
fn render_places_every_label_on_its_middle_row() {
    let board = ladder_board();
    let fb = GameView::default().render(&board, Screen::Playing { prompt: false });

    assert_eq!(fb.row_text(1), "         2     4     8");
    assert_eq!(fb.row_text(4), "  16    32    64   128");
    assert_eq!(fb.row_text(7), " 256   512  1024  2048");
    assert_eq!(fb.row_text(10), "4096  8192  16384 131072");
}

#[test]
fn render_colors_follow_tile_buckets() {
    let board = ladder_board();
    let fb = GameView::default().render(&board, Screen::Playing { prompt: false });

    for tile in board.tiles() {
        let x = tile.x as u16 * 6;
        let y = tile.y as u16 * 3;
        let style = fb.get(x, y).unwrap().style;
        assert_eq!(style, tile_style(color_index(tile.value)));
    }

    // Everything from 2048 up shares the last bucket.
    assert_eq!(fb.get(18, 6).unwrap().style, TILE_PALETTE[11]);
    assert_eq!(fb.get(0, 9).unwrap().style, TILE_PALETTE[11]);
    assert_eq!(fb.get(18, 9).unwrap().style, TILE_PALETTE[11]);
}

#[test]
fn encoded_frame_contains_labels_and_resets() {
    let board = ladder_board();
    let fb = GameView::default().render(&board, Screen::GameOver { highest_tile: 131072 });

    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("131072"));
    assert!(text.contains("Game over!"));
    assert!(text.contains("Highest tile: "));
    assert_eq!(text.matches("\x1b[0m").count(), fb.height() as usize);
}
