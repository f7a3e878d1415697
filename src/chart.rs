#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    /// One value per chart label, on a 0..=100 scale.
    pub values: &'static [u32],
    pub fill: Rgba,
    pub border: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: &'static [&'static str],
    pub before: Dataset,
    pub after: Dataset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartView {
    Before,
    After,
}

pub const ACTIVE_BUTTON: &str = "bg-amber-600 text-white";
pub const INACTIVE_BUTTON: &str = "bg-transparent text-gray-700";

/// The benefits chart and which of its two datasets is on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct BenefitsChart {
    data: ChartData,
    view: ChartView,
}

impl BenefitsChart {
    pub fn new(data: ChartData) -> Self {
        Self {
            data,
            view: ChartView::Before,
        }
    }

    /// Returns whether the chart needs redrawing.
    pub fn show(&mut self, view: ChartView) -> bool {
        if self.view == view {
            return false;
        }
        self.view = view;
        true
    }

    pub fn view(&self) -> ChartView {
        self.view
    }

    pub fn dataset(&self) -> &Dataset {
        match self.view {
            ChartView::Before => &self.data.before,
            ChartView::After => &self.data.after,
        }
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.data.labels
    }

    /// Label/value pairs for the bars of the current dataset.
    pub fn bars(&self) -> Vec<(&'static str, u32)> {
        self.data
            .labels
            .iter()
            .copied()
            .zip(self.dataset().values.iter().copied())
            .collect()
    }

    /// Text drawn on each bar of the current dataset.
    pub fn bar_annotations(&self) -> Vec<String> {
        let label = self.dataset().label;
        self.dataset()
            .values
            .iter()
            .map(|value| bar_label(label, *value))
            .collect()
    }

    pub fn button_class(&self, view: ChartView) -> &'static str {
        if self.view == view {
            ACTIVE_BUTTON
        } else {
            INACTIVE_BUTTON
        }
    }
}

/// Text shown next to a bar: `"<dataset label>: <value>%"`.
pub fn bar_label(dataset_label: &str, value: u32) -> String {
    if dataset_label.is_empty() {
        format!("{}%", value)
    } else {
        format!("{}: {}%", dataset_label, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ChartData {
        ChartData {
            labels: &["Onboarding", "Clarity"],
            before: Dataset {
                label: "Before",
                values: &[100, 40],
                fill: Rgba::new(200, 150, 150, 0.6),
                border: Rgba::new(200, 150, 150, 1.0),
            },
            after: Dataset {
                label: "After",
                values: &[30, 95],
                fill: Rgba::new(217, 119, 6, 0.6),
                border: Rgba::new(217, 119, 6, 1.0),
            },
        }
    }

    #[test]
    fn starts_on_before() {
        let chart = BenefitsChart::new(data());
        assert_eq!(chart.view(), ChartView::Before);
        assert_eq!(chart.bars(), vec![("Onboarding", 100), ("Clarity", 40)]);
        assert_eq!(chart.button_class(ChartView::Before), ACTIVE_BUTTON);
        assert_eq!(chart.button_class(ChartView::After), INACTIVE_BUTTON);
    }

    #[test]
    fn toggling_swaps_dataset_and_buttons() {
        let mut chart = BenefitsChart::new(data());
        assert!(chart.show(ChartView::After));
        assert_eq!(chart.dataset().label, "After");
        assert_eq!(chart.bars(), vec![("Onboarding", 30), ("Clarity", 95)]);
        assert_eq!(chart.button_class(ChartView::After), ACTIVE_BUTTON);
        assert_eq!(chart.button_class(ChartView::Before), INACTIVE_BUTTON);
    }

    #[test]
    fn pressing_the_active_button_again_is_a_no_op() {
        let mut chart = BenefitsChart::new(data());
        chart.show(ChartView::After);
        let before = chart.clone();
        assert!(!chart.show(ChartView::After));
        assert_eq!(chart, before);
    }

    #[test]
    fn bar_labels() {
        assert_eq!(bar_label("After", 95), "After: 95%");
        assert_eq!(bar_label("", 30), "30%");
    }

    #[test]
    fn bar_annotations_carry_the_dataset_label() {
        let mut chart = BenefitsChart::new(data());
        assert_eq!(chart.bar_annotations(), vec!["Before: 100%", "Before: 40%"]);
        chart.show(ChartView::After);
        assert_eq!(chart.bar_annotations(), vec!["After: 30%", "After: 95%"]);
    }
}
