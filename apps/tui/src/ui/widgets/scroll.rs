/// First visible row so that `selected_row` stays on screen
pub const fn scroll_offset(total_rows: usize, visible_rows: usize, selected_row: usize) -> usize {
    if visible_rows == 0 || total_rows <= visible_rows {
        return 0;
    }

    if selected_row >= visible_rows {
        let offset = selected_row + 1 - visible_rows;
        let last_offset = total_rows - visible_rows;
        if offset > last_offset {
            last_offset
        } else {
            offset
        }
    } else {
        0
    }
}

/// Number of card columns that fit into `width`, never less than one
pub const fn grid_columns(width: u16, min_card_width: u16) -> usize {
    if min_card_width == 0 || width < min_card_width {
        return 1;
    }
    (width / min_card_width) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_scroll_when_everything_fits() {
        assert_eq!(scroll_offset(3, 5, 2), 0);
        assert_eq!(scroll_offset(3, 0, 2), 0);
    }

    #[test]
    fn test_scroll_keeps_selection_on_last_visible_row() {
        assert_eq!(scroll_offset(10, 4, 3), 0);
        assert_eq!(scroll_offset(10, 4, 4), 1);
        assert_eq!(scroll_offset(10, 4, 9), 6);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(20, 34), 1);
        assert_eq!(grid_columns(118, 34), 3);
        assert_eq!(grid_columns(118, 0), 1);
    }
}
