use noughts_core::{Position, SIDE};
use web_sys::{Element, MouseEvent};

/// `MouseEvent.button` value of the primary button.
const PRIMARY_BUTTON: i16 = 0;

/// A click on the board, relative to the board's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct BoardClick {
    pub point: (f64, f64),
    pub size: (f64, f64),
}

impl BoardClick {
    /// Reads the click point from `event` against the bounds of `board`, dropping
    /// anything but primary-button clicks.
    pub(crate) fn from_event(event: &MouseEvent, board: &Element) -> Option<Self> {
        if event.button() != PRIMARY_BUTTON {
            log::trace!("ignoring button {}", event.button());
            return None;
        }

        let rect = board.get_bounding_client_rect();
        Some(Self {
            point: (
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
            ),
            size: (rect.width(), rect.height()),
        })
    }

    pub(crate) fn position(self) -> Option<Position> {
        position_at(self.point, self.size)
    }
}

/// Maps a point inside a board of `size` to the cell under it.
pub(crate) fn position_at((x, y): (f64, f64), (width, height): (f64, f64)) -> Option<Position> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    if !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
        return None;
    }

    let side = f64::from(SIDE);
    let col = (x * side / width) as u8;
    let row = (y * side / height) as u8;
    Position::from_row_col(row.min(SIDE - 1), col.min(SIDE - 1)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: (f64, f64) = (300.0, 300.0);

    fn index_at(point: (f64, f64)) -> Option<u8> {
        position_at(point, SIZE).map(Position::index)
    }

    #[test]
    fn corners_map_to_corner_cells() {
        assert_eq!(index_at((0.0, 0.0)), Some(0));
        assert_eq!(index_at((299.9, 0.0)), Some(2));
        assert_eq!(index_at((0.0, 299.9)), Some(6));
        assert_eq!(index_at((299.9, 299.9)), Some(8));
    }

    #[test]
    fn cell_edges_belong_to_the_next_cell() {
        assert_eq!(index_at((99.9, 150.0)), Some(3));
        assert_eq!(index_at((100.0, 150.0)), Some(4));
        assert_eq!(index_at((200.0, 150.0)), Some(5));
    }

    #[test]
    fn non_square_board_scales_per_axis() {
        let at = |point| position_at(point, (600.0, 90.0)).map(Position::index);
        assert_eq!(at((450.0, 10.0)), Some(2));
        assert_eq!(at((250.0, 45.0)), Some(4));
        assert_eq!(at((10.0, 80.0)), Some(6));
    }

    #[test]
    fn points_outside_board_are_dropped() {
        assert_eq!(index_at((-1.0, 10.0)), None);
        assert_eq!(index_at((10.0, 300.0)), None);
        assert_eq!(index_at((f64::NAN, 10.0)), None);
        assert_eq!(position_at((0.0, 0.0), (0.0, 0.0)), None);
    }

    #[test]
    fn board_click_uses_its_own_bounds() {
        let click = BoardClick {
            point: (250.0, 20.0),
            size: SIZE,
        };
        assert_eq!(click.position().map(Position::index), Some(2));
    }
}
