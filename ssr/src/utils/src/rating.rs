use serde::{Deserialize, Serialize};

/// Display forms of a rating or deviation value. The table cell shows the
/// value rounded to the nearest integer; hovering it reveals the
/// two-decimal form in the `title` tooltip. Both are derived from the same
/// stored float, which is never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingDisplay {
    pub cell: String,
    pub title: String,
}

impl RatingDisplay {
    pub fn from_value(value: f64) -> Self {
        Self {
            cell: format!("{value:.0}"),
            title: format!("{value:.2}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_rounds_to_nearest_integer() {
        let display = RatingDisplay::from_value(1523.456);
        assert_eq!(display.cell, "1523");
    }

    #[test]
    fn title_keeps_two_decimals() {
        let display = RatingDisplay::from_value(1523.456);
        assert_eq!(display.title, "1523.46");
    }

    #[test]
    fn whole_numbers_render_without_decimal_point() {
        let display = RatingDisplay::from_value(1800.0);
        assert_eq!(display.cell, "1800");
        assert_eq!(display.title, "1800.00");
    }

    #[test]
    fn rounds_up_past_the_half() {
        let display = RatingDisplay::from_value(99.7);
        assert_eq!(display.cell, "100");
        assert_eq!(display.title, "99.70");
    }
}
