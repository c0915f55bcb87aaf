use ratatui::layout::Rect;

/// Preferred size of the Counter section, borders included.
pub const SECTION_WIDTH: u16 = 60;
pub const SECTION_HEIGHT: u16 = 9;

/// Splits the screen into body and a three-row footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = 3.min(area.height);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    (body, footer)
}

/// Rect of the Counter section: centered in the body, shrunk to fit.
pub fn section_rect(body: Rect) -> Rect {
    centered_rect_by_size(body, SECTION_WIDTH, SECTION_HEIGHT)
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_takes_bottom_three_rows() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(body, Rect::new(0, 0, 80, 21));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn section_is_clamped_to_small_body() {
        let section = section_rect(Rect::new(0, 0, 20, 4));
        assert_eq!(section, Rect::new(0, 0, 20, 4));
    }

    #[test]
    fn section_is_centered() {
        let section = section_rect(Rect::new(0, 0, 80, 21));
        assert_eq!(section, Rect::new(10, 6, 60, 9));
    }
}
