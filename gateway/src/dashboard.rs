//! HTML dashboard
//!
//! One page: the win-count map plus the country and year selectors.
//! Changing a selector submits the form; the handler runs both lookups
//! and renders their sentences under the selectors.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use world_cup::{
    describe_country_wins, describe_final, display_text, parse_year, Dataset, NO_DATA_MESSAGE,
};

use crate::AppState;

pub const PAGE_TITLE: &str = "FIFA World Cup Dashboard";
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub country: Option<String>,
    pub year: Option<String>,
}

/// Output region text for both selectors.
#[derive(Debug, PartialEq, Eq)]
pub struct SelectionOutput {
    pub country: String,
    pub year: String,
}

impl SelectionOutput {
    pub fn resolve(dataset: &Dataset, query: &DashboardQuery) -> Self {
        let country = display_text(describe_country_wins(dataset, query.country.as_deref()));
        let year = display_text(
            parse_year(query.year.as_deref()).and_then(|year| describe_final(dataset, year)),
        );
        Self { country, year }
    }

    /// Both regions when the query string itself could not be read.
    pub fn no_data() -> Self {
        Self {
            country: NO_DATA_MESSAGE.to_string(),
            year: NO_DATA_MESSAGE.to_string(),
        }
    }
}

pub async fn dashboard(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Html<String>, (StatusCode, String)> {
    let dataset = &state.dataset;

    let (query, output) = match query {
        Ok(Query(query)) => {
            let output = SelectionOutput::resolve(dataset, &query);
            (query, output)
        }
        Err(rejection) => {
            tracing::debug!("Unreadable dashboard query: {}", rejection);
            (DashboardQuery::default(), SelectionOutput::no_data())
        }
    };

    let figure = serde_json::to_string(&dataset.choropleth())
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Html(render_page(dataset, &query, &output, &figure)))
}

fn render_page(
    dataset: &Dataset,
    query: &DashboardQuery,
    output: &SelectionOutput,
    figure_json: &str,
) -> String {
    let selected_country = query.country.as_deref().unwrap_or_default();
    let selected_year = query.year.as_deref().unwrap_or_default().trim();

    let country_options: String = dataset
        .country_options()
        .into_iter()
        .map(|country| {
            let selected = if country == selected_country { " selected" } else { "" };
            let country = escape_html(country);
            format!("      <option value=\"{country}\"{selected}>{country}</option>\n")
        })
        .collect();

    let year_options: String = dataset
        .year_options()
        .into_iter()
        .map(|year| {
            let selected = if year.to_string() == selected_year { " selected" } else { "" };
            format!("      <option value=\"{year}\"{selected}>{year}</option>\n")
        })
        .collect();

    // keep "</" out of the inline script
    let figure_json = figure_json.replace("</", "<\\/");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="{plotly}"></script>
  <style>
    body {{ font-family: Arial, sans-serif; padding: 20px; }}
    h1, h2 {{ color: red; }}
    select {{ min-width: 240px; padding: 4px; }}
    .output {{ color: red; font-size: 20px; margin-top: 10px; }}
  </style>
</head>
<body>
  <h1>🏆 {title}</h1>

  <h2>World Cup Winning Countries Map</h2>
  <div id="choropleth"></div>

  <form method="get" action="/">
    <br>
    <h2>Select a Country to View Wins</h2>
    <select id="country-dropdown" name="country" onchange="this.form.submit()">
      <option value="">Select a country</option>
{country_options}    </select>
    <div id="country-output" class="output">{country_output}</div>

    <br>
    <h2>Select a Year to View Final Match Info</h2>
    <select id="year-dropdown" name="year" onchange="this.form.submit()">
      <option value="">Select a year</option>
{year_options}    </select>
    <div id="match-output" class="output">{match_output}</div>
    <noscript><button type="submit">Show</button></noscript>
  </form>

  <script>
    const figure = {figure_json};
    Plotly.newPlot("choropleth", figure.data, figure.layout);
  </script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        plotly = PLOTLY_CDN,
        country_options = country_options,
        country_output = escape_html(&output.country),
        year_options = year_options,
        match_output = escape_html(&output.year),
        figure_json = figure_json,
    )
}

/// Escape text for HTML element content and quoted attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}
