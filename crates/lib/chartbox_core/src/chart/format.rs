//! Per-kind chart formatting.
//!
//! Different charting front-ends expect different visual-style defaults per
//! chart kind; centralizing the reshaping here keeps it out of every handler.
//! Pure function, no I/O.

use super::{ChartPayload, ColorSpec, Series};

/// Default slice palette for pie/doughnut charts when the input series
/// carries no colors of its own.
pub const PIE_PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

/// Line stroke color; the fill is a translucent version of the same color.
const LINE_COLOR: &str = "#36A2EB";
const LINE_FILL: &str = "rgba(54, 162, 235, 0.1)";

/// The rendering style requested for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
    /// Any unrecognized kind; formatted as-is.
    Other,
}

impl ChartKind {
    /// Parse a `chartType` request string. Unknown strings map to
    /// [`ChartKind::Other`] rather than failing.
    pub fn parse(s: &str) -> Self {
        match s {
            "bar" => Self::Bar,
            "line" => Self::Line,
            "pie" => Self::Pie,
            "doughnut" => Self::Doughnut,
            _ => Self::Other,
        }
    }
}

/// Reshape `payload` to the rendering conventions of `kind`.
///
/// Pie, doughnut, and line charts are flattened to the first input series
/// with kind-specific styling defaults; bar and unrecognized kinds pass
/// through unchanged, as does any payload with no series at all.
pub fn format(kind: ChartKind, payload: ChartPayload) -> ChartPayload {
    match kind {
        ChartKind::Pie | ChartKind::Doughnut => format_pie(payload),
        ChartKind::Line => format_line(payload),
        ChartKind::Bar | ChartKind::Other => payload,
    }
}

/// Pie and doughnut charts render a single series with per-slice colors.
fn format_pie(payload: ChartPayload) -> ChartPayload {
    let Some(first) = payload.datasets.into_iter().next() else {
        // No series to flatten; serve the (empty) payload unchanged.
        return ChartPayload {
            labels: payload.labels,
            datasets: Vec::new(),
            insights: payload.insights,
        };
    };

    let background_color = first.background_color.unwrap_or_else(|| {
        ColorSpec::PerPoint(PIE_PALETTE.iter().map(|c| (*c).to_string()).collect())
    });

    ChartPayload {
        labels: payload.labels,
        datasets: vec![Series {
            label: first.label,
            data: first.data,
            background_color: Some(background_color),
            border_color: Some("#fff".into()),
            border_width: Some(2.0),
            ..Series::default()
        }],
        insights: payload.insights,
    }
}

/// Line charts get a fixed stroke color, translucent fill, smoothing, and
/// point styling.
fn format_line(payload: ChartPayload) -> ChartPayload {
    let Some(first) = payload.datasets.into_iter().next() else {
        return ChartPayload {
            labels: payload.labels,
            datasets: Vec::new(),
            insights: payload.insights,
        };
    };

    ChartPayload {
        labels: payload.labels,
        datasets: vec![Series {
            label: first.label,
            data: first.data,
            background_color: Some(ColorSpec::Single(LINE_FILL.into())),
            border_color: Some(LINE_COLOR.into()),
            border_width: Some(2.0),
            fill: Some(true),
            tension: Some(0.4),
            point_background_color: Some(LINE_COLOR.into()),
            point_border_color: Some("#fff".into()),
            point_border_width: Some(2.0),
            point_radius: Some(5.0),
        }],
        insights: payload.insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_series_payload() -> ChartPayload {
        ChartPayload {
            labels: vec!["A".into(), "B".into(), "C".into()],
            datasets: vec![
                Series {
                    label: "first".into(),
                    data: vec![1.0, 2.0, 3.0],
                    border_color: Some("#333".into()),
                    ..Series::default()
                },
                Series {
                    label: "second".into(),
                    data: vec![4.0, 5.0, 6.0],
                    ..Series::default()
                },
            ],
            insights: "trend".into(),
        }
    }

    #[test]
    fn pie_flattens_to_single_series_with_white_border() {
        let out = format(ChartKind::Pie, two_series_payload());
        assert_eq!(out.datasets.len(), 1);
        let series = &out.datasets[0];
        assert_eq!(series.label, "first");
        assert_eq!(series.data, vec![1.0, 2.0, 3.0]);
        assert_eq!(series.border_color.as_deref(), Some("#fff"));
        assert_eq!(series.border_width, Some(2.0));
        assert_eq!(out.labels, vec!["A", "B", "C"]);
        assert_eq!(out.insights, "trend");
    }

    #[test]
    fn doughnut_formats_like_pie() {
        let pie = format(ChartKind::Pie, two_series_payload());
        let doughnut = format(ChartKind::Doughnut, two_series_payload());
        assert_eq!(pie, doughnut);
    }

    #[test]
    fn pie_defaults_palette_when_input_has_no_colors() {
        let out = format(ChartKind::Pie, two_series_payload());
        let expected: Vec<String> = PIE_PALETTE.iter().map(|c| (*c).to_string()).collect();
        assert_eq!(
            out.datasets[0].background_color,
            Some(ColorSpec::PerPoint(expected))
        );
    }

    #[test]
    fn pie_keeps_input_colors_when_present() {
        let mut payload = two_series_payload();
        payload.datasets[0].background_color =
            Some(ColorSpec::PerPoint(vec!["#111".into(), "#222".into(), "#333".into()]));
        let out = format(ChartKind::Pie, payload);
        assert_eq!(
            out.datasets[0].background_color,
            Some(ColorSpec::PerPoint(vec![
                "#111".into(),
                "#222".into(),
                "#333".into()
            ]))
        );
    }

    #[test]
    fn line_sets_smoothing_and_point_styling() {
        let out = format(ChartKind::Line, two_series_payload());
        assert_eq!(out.datasets.len(), 1);
        let series = &out.datasets[0];
        assert_eq!(series.tension, Some(0.4));
        assert_eq!(series.point_radius, Some(5.0));
        assert_eq!(series.fill, Some(true));
        assert_eq!(series.border_color.as_deref(), Some("#36A2EB"));
        assert_eq!(
            series.background_color,
            Some(ColorSpec::Single("rgba(54, 162, 235, 0.1)".into()))
        );
        assert_eq!(series.point_border_color.as_deref(), Some("#fff"));
        assert_eq!(series.point_border_width, Some(2.0));
    }

    #[test]
    fn bar_is_identity() {
        let payload = two_series_payload();
        assert_eq!(format(ChartKind::Bar, payload.clone()), payload);
    }

    #[test]
    fn unrecognized_kind_is_identity() {
        let payload = two_series_payload();
        assert_eq!(
            format(ChartKind::parse("radar-3000"), payload.clone()),
            payload
        );
    }

    #[test]
    fn empty_datasets_pass_through() {
        let payload = ChartPayload {
            labels: vec!["A".into()],
            datasets: Vec::new(),
            insights: "none".into(),
        };
        let out = format(ChartKind::Pie, payload.clone());
        assert_eq!(out, payload);
    }

    #[test]
    fn parse_maps_known_kinds() {
        assert_eq!(ChartKind::parse("bar"), ChartKind::Bar);
        assert_eq!(ChartKind::parse("line"), ChartKind::Line);
        assert_eq!(ChartKind::parse("pie"), ChartKind::Pie);
        assert_eq!(ChartKind::parse("doughnut"), ChartKind::Doughnut);
        assert_eq!(ChartKind::parse("Pie"), ChartKind::Other);
    }
}
