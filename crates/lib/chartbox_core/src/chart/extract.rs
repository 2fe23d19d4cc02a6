//! Model-output extraction.
//!
//! Gemini is asked for bare JSON but routinely wraps its answer in a
//! markdown code fence or returns prose. Extraction is a two-case grammar:
//! optionally unwrap a single fenced block, then attempt a structured parse;
//! anything that fails to parse (or parses but is malformed) becomes a typed
//! fallback payload carrying the raw model text as its insight.

use super::format::PIE_PALETTE;
use super::{ChartPayload, ColorSpec, Series};

/// Insight text used when the model returned nothing usable at all.
const FALLBACK_INSIGHT: &str = "Data visualization showing trends over time.";

/// Result of extracting chart data from raw model text.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The model output parsed (and validated) as a chart payload.
    Parsed(ChartPayload),
    /// The model output was unusable; a fixed demo payload stands in.
    Fallback(ChartPayload),
}

impl Extraction {
    /// Whether the fallback payload was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Unwrap to the payload, whichever case produced it.
    pub fn into_payload(self) -> ChartPayload {
        match self {
            Self::Parsed(p) | Self::Fallback(p) => p,
        }
    }
}

/// Strip a single markdown code fence, if present.
///
/// Returns the content between the first ``` (optionally tagged `json`) and
/// the next ```; if there is no closing fence, everything after the opening
/// one; if there is no fence at all, the input unchanged.
pub fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let rest = &text[open + 3..];
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    match rest.find("```") {
        Some(close) => &rest[..close],
        None => rest,
    }
}

/// Parse raw model text into a chart payload, falling back on failure.
///
/// A payload that deserializes but fails [`ChartPayload::validate`] is
/// treated the same as unparseable text. Fallback is an expected case, not
/// an error.
pub fn extract_chart_payload(raw: &str) -> Extraction {
    let trimmed = raw.trim();
    let candidate = strip_code_fence(trimmed).trim();

    match serde_json::from_str::<ChartPayload>(candidate) {
        Ok(payload) if payload.validate().is_ok() => Extraction::Parsed(payload),
        _ => Extraction::Fallback(fallback_payload(trimmed)),
    }
}

/// The fixed demo payload used when model output is unusable; `raw_text`
/// becomes the insight so the caller still sees what the model said.
fn fallback_payload(raw_text: &str) -> ChartPayload {
    ChartPayload {
        labels: ["Jan", "Feb", "Mar", "Apr", "May"].map(String::from).to_vec(),
        datasets: vec![Series {
            label: "Sample Data".into(),
            data: vec![25.0, 40.0, 35.0, 50.0, 45.0],
            background_color: Some(ColorSpec::PerPoint(
                PIE_PALETTE[..5].iter().map(|c| (*c).to_string()).collect(),
            )),
            ..Series::default()
        }],
        insights: if raw_text.is_empty() {
            FALLBACK_INSIGHT.into()
        } else {
            raw_text.into()
        },
    }
}
