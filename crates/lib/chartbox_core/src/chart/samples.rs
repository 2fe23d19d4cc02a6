//! Built-in demo datasets.
//!
//! Five fixed chart payloads served without any model call, so the frontend
//! can be exercised offline. Constructed once at startup and never mutated;
//! shared across requests via `Arc`.

use super::{ChartPayload, ColorSpec, Series};

/// Read-only store of the demo datasets, in insertion order.
pub struct SampleStore {
    entries: Vec<(&'static str, ChartPayload)>,
}

impl SampleStore {
    /// Build the store with all demo datasets.
    pub fn new() -> Self {
        Self {
            entries: vec![
                ("sales", sales()),
                ("traffic", traffic()),
                ("products", products()),
                ("revenue", revenue()),
                ("growth", growth()),
            ],
        }
    }

    /// Dataset names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Look up a dataset by name.
    pub fn get(&self, name: &str) -> Option<&ChartPayload> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, payload)| payload)
    }

    /// All `(name, payload)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ChartPayload)> + '_ {
        self.entries.iter().map(|(name, payload)| (*name, payload))
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::new()
    }
}

fn per_point(colors: &[&str]) -> Option<ColorSpec> {
    Some(ColorSpec::PerPoint(
        colors.iter().map(|c| (*c).to_string()).collect(),
    ))
}

fn sales() -> ChartPayload {
    ChartPayload {
        labels: ["January", "February", "March", "April", "May", "June"]
            .map(String::from)
            .to_vec(),
        datasets: vec![Series {
            label: "Monthly Sales (2025)".into(),
            data: vec![12000.0, 19000.0, 15000.0, 25000.0, 22000.0, 30000.0],
            background_color: per_point(&[
                "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
            ]),
            border_color: Some("#333".into()),
            border_width: Some(1.0),
            ..Series::default()
        }],
        insights: "Sales show an upward trend with a peak in June. Q1 averaged $15,333 \
                   while Q2 averaged $25,667."
            .into(),
    }
}

fn traffic() -> ChartPayload {
    ChartPayload {
        labels: [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ]
        .map(String::from)
        .to_vec(),
        datasets: vec![Series {
            label: "Website Traffic".into(),
            data: vec![2500.0, 3200.0, 2800.0, 4100.0, 5200.0, 3800.0, 2100.0],
            background_color: Some(ColorSpec::Single("rgba(54, 162, 235, 0.5)".into())),
            border_color: Some("#36A2EB".into()),
            border_width: Some(2.0),
            ..Series::default()
        }],
        insights: "Website traffic peaks on Friday with 5,200 visitors. Weekdays average \
                   3,570 visitors compared to 2,950 on weekends."
            .into(),
    }
}

fn products() -> ChartPayload {
    ChartPayload {
        labels: ["Product A", "Product B", "Product C", "Product D", "Product E"]
            .map(String::from)
            .to_vec(),
        datasets: vec![Series {
            label: "Units Sold (Q1 2025)".into(),
            data: vec![450.0, 320.0, 280.0, 180.0, 240.0],
            background_color: per_point(&[
                "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF",
            ]),
            ..Series::default()
        }],
        insights: "Product A leads with 450 units sold. Top 3 products account for 68% of \
                   total sales."
            .into(),
    }
}

fn revenue() -> ChartPayload {
    ChartPayload {
        labels: ["Product A", "Product B", "Product C", "Product D"]
            .map(String::from)
            .to_vec(),
        datasets: vec![Series {
            label: "Revenue Distribution".into(),
            data: vec![35.0, 25.0, 20.0, 20.0],
            background_color: per_point(&["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0"]),
            ..Series::default()
        }],
        insights: "Product A generates 35% of total revenue. The top 2 products account \
                   for 60% of all revenue."
            .into(),
    }
}

fn growth() -> ChartPayload {
    ChartPayload {
        labels: ["Q1", "Q2", "Q3", "Q4"].map(String::from).to_vec(),
        datasets: vec![Series {
            label: "Revenue (in thousands)".into(),
            data: vec![65.0, 78.0, 90.0, 120.0],
            background_color: Some(ColorSpec::Single("rgba(75, 192, 75, 0.5)".into())),
            border_color: Some("#4BC0C0".into()),
            border_width: Some(2.0),
            fill: Some(true),
            ..Series::default()
        }],
        insights: "Quarter-over-quarter growth shows strong acceleration, with Q4 revenue \
                   85% higher than Q1. Annualized revenue projected at $353K."
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_preserve_insertion_order() {
        let store = SampleStore::new();
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["sales", "traffic", "products", "revenue", "growth"]);
    }

    #[test]
    fn get_returns_known_datasets() {
        let store = SampleStore::new();
        let sales = store.get("sales").unwrap();
        assert_eq!(sales.labels.len(), 6);
        assert_eq!(sales.datasets[0].data[5], 30000.0);
        assert!(store.get("unknown").is_none());
    }

    #[test]
    fn every_dataset_has_one_point_per_label() {
        let store = SampleStore::new();
        for (name, payload) in store.iter() {
            assert!(payload.validate().is_ok(), "dataset '{name}' is malformed");
        }
    }

    #[test]
    fn every_dataset_has_nonempty_insights() {
        let store = SampleStore::new();
        for (name, payload) in store.iter() {
            assert!(!payload.insights.is_empty(), "dataset '{name}' lacks insights");
        }
    }
}
