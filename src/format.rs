//! Cell formatting shared by both generators

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

/// Fill applied to every header row.
pub const HEADER_FILL: Color = Color::RGB(0xC0C0C0);

/// Fill applied to rent rows whose status is unpaid.
pub const UNPAID_FILL: Color = Color::RGB(0xFFC7CE);

/// Rent status value that triggers the unpaid highlight.
pub const STATUS_UNPAID: &str = "غير مدفوع";

/// Build a cell format from the handful of knobs the sheets actually use.
///
/// Every cell gets thin borders on all sides and vertical centering; the
/// caller picks font size, weight, fill and horizontal alignment.
pub fn cell_format(font_size: f64, bold: bool, fill: Option<Color>, align: FormatAlign) -> Format {
    let mut format = Format::new()
        .set_font_size(font_size)
        .set_border(FormatBorder::Thin)
        .set_align(align)
        .set_align(FormatAlign::VerticalCenter);

    if bold {
        format = format.set_bold();
    }
    if let Some(color) = fill {
        format = format.set_background_color(color);
    }

    format
}

/// Default data cell format, with an optional row fill.
pub fn body_format(fill: Option<Color>) -> Format {
    cell_format(12.0, false, fill, FormatAlign::Center)
}

/// Bold, filled header cell format.
pub fn header_format() -> Format {
    cell_format(12.0, true, Some(HEADER_FILL), FormatAlign::Center)
}

/// Date cell format: the data cell format plus a date number format.
pub fn date_format(fill: Option<Color>) -> Format {
    body_format(fill).set_num_format("yyyy-mm-dd")
}

/// Conditional fill for a rent row: unpaid rows are highlighted, everything
/// else stays unfilled.
pub fn rent_row_fill(status: &str) -> Option<Color> {
    if status == STATUS_UNPAID {
        Some(UNPAID_FILL)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaid_status_is_highlighted() {
        assert_eq!(rent_row_fill("غير مدفوع"), Some(UNPAID_FILL));
    }

    #[test]
    fn test_other_statuses_are_not_highlighted() {
        assert_eq!(rent_row_fill("مدفوع"), None);
        assert_eq!(rent_row_fill(""), None);
        assert_eq!(rent_row_fill("unpaid"), None);
    }
}
