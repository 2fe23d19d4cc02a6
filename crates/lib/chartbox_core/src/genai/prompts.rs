//! Prompt builders for the analyze and insights endpoints.
//!
//! Kept in one place so the instructions the model sees stay in sync with
//! what [`crate::chart::extract`] can parse.

/// Prompt asking the model for chart data as a bare JSON object.
///
/// The structure in the prompt mirrors [`crate::chart::ChartPayload`];
/// extraction still tolerates a fenced answer because models wrap output in
/// markdown despite being told not to.
pub fn chart_data_prompt(query: &str, chart_type: &str) -> String {
    format!(
        r##"Based on this request: "{query}"

Generate JSON data for a {chart_type} chart with the following structure:
{{
    "labels": ["label1", "label2", "label3", "label4", "label5"],
    "datasets": [{{
        "label": "Data Series 1",
        "data": [value1, value2, value3, value4, value5],
        "backgroundColor": ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"]
    }}],
    "insights": "Brief insight about the data"
}}

Important:
- Use realistic numbers appropriate to the context
- Provide 5 data points minimum
- Use diverse colors for visualization
- Keep insights under 100 words
- Respond with ONLY valid JSON, no additional text or markdown"##
    )
}

/// Prompt asking the model for 2-3 concise insights about described data.
pub fn insights_prompt(description: &str) -> String {
    format!(
        "Provide 2-3 key insights about this chart/data: {description}\n\
         Keep insights concise and actionable."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_prompt_embeds_query_and_kind() {
        let prompt = chart_data_prompt("coffee sales by region", "pie");
        assert!(prompt.contains("\"coffee sales by region\""));
        assert!(prompt.contains("a pie chart"));
    }

    #[test]
    fn chart_prompt_demands_bare_json() {
        let prompt = chart_data_prompt("anything", "bar");
        assert!(prompt.contains("ONLY valid JSON"));
        assert!(prompt.contains("\"labels\""));
        assert!(prompt.contains("\"backgroundColor\""));
        assert!(prompt.contains("5 data points minimum"));
    }

    #[test]
    fn insights_prompt_embeds_description() {
        let prompt = insights_prompt("monthly revenue trend");
        assert!(prompt.contains("monthly revenue trend"));
        assert!(prompt.contains("2-3 key insights"));
    }
}
