//! Month partitioning: one horizontal band per distinct month.

use crate::core::Dataset;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthBand {
    pub month: String,
    pub y_start: f64,
    pub bandwidth: f64,
}

impl MonthBand {
    pub fn y_end(&self) -> f64 {
        self.y_start + self.bandwidth
    }

    pub fn center(&self) -> f64 {
        self.y_start + self.bandwidth / 2.0
    }

    pub fn contains(&self, y: f64, tolerance: f64) -> bool {
        y >= self.y_start - tolerance && y <= self.y_end() + tolerance
    }
}

/// Band scale over `[0, height)` with equal inner and outer padding,
/// centered. Months keep their order of first appearance.
pub fn partition_months(dataset: &Dataset, height: f64, padding: f64) -> Vec<MonthBand> {
    let months = dataset.months();
    let n = months.len() as f64;
    if months.is_empty() {
        return Vec::new();
    }

    let step = height / (n + padding);
    let bandwidth = step * (1.0 - padding);
    let offset = (height - step * (n - padding)) / 2.0;

    months
        .into_iter()
        .enumerate()
        .map(|(i, month)| MonthBand {
            month: month.to_string(),
            y_start: offset + step * i as f64,
            bandwidth,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;

    fn dataset(months: &[&str]) -> Dataset {
        Dataset::new(
            months
                .iter()
                .enumerate()
                .map(|(i, month)| Record {
                    index: i as u64,
                    month: month.to_string(),
                    sentiment: 0.0,
                    subjectivity: 0.0,
                    raw_text: String::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn single_month_is_centered_with_outer_padding() {
        let bands = partition_months(&dataset(&["Jan", "Jan"]), 600.0, 0.2);
        assert_eq!(bands.len(), 1);
        assert!((bands[0].y_start - 100.0).abs() < 1e-9);
        assert!((bands[0].bandwidth - 400.0).abs() < 1e-9);
        assert!((bands[0].center() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn order_follows_first_appearance_not_alphabet() {
        let bands = partition_months(&dataset(&["Mar", "Jan", "Mar", "Feb"]), 600.0, 0.2);
        let names: Vec<_> = bands.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(names, vec!["Mar", "Jan", "Feb"]);
        assert!(bands[0].y_start < bands[1].y_start);
        assert!(bands[1].y_start < bands[2].y_start);
    }

    #[test]
    fn bands_tile_height_without_overlap() {
        let height = 600.0;
        let padding = 0.2;
        let bands = partition_months(&dataset(&["a", "b", "c", "d", "e"]), height, padding);
        let step = bands[1].y_start - bands[0].y_start;
        let gap = step * padding;

        assert!(bands[0].y_start >= 0.0);
        assert!(bands.last().unwrap().y_end() <= height + 1e-9);
        for pair in bands.windows(2) {
            assert!(pair[0].y_end() <= pair[1].y_start);
            assert!((pair[1].y_start - pair[0].y_end() - gap).abs() < 1e-9);
        }

        let covered: f64 = bands.iter().map(|b| b.bandwidth).sum();
        let gaps = gap * (bands.len() - 1) as f64 + 2.0 * bands[0].y_start;
        assert!((covered + gaps - height).abs() < 1e-9);
    }

    #[test]
    fn identical_input_gives_identical_bands() {
        let data = dataset(&["x", "y", "x"]);
        assert_eq!(
            partition_months(&data, 600.0, 0.2),
            partition_months(&data, 600.0, 0.2)
        );
    }

    #[test]
    fn empty_dataset_has_no_bands() {
        assert!(partition_months(&Dataset::default(), 600.0, 0.2).is_empty());
    }
}
