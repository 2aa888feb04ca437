//! Choropleth figure for the win-count map
//!
//! Serializes to a Plotly figure (`data` + `layout`), keyed by ISO-3
//! code. Countries without a code are left off the map and listed in
//! `unmapped` so the caller can report them.

use serde::Serialize;

use crate::iso::iso3_code;
use crate::WinCountEntry;

pub const FIGURE_TITLE: &str = "Countries with FIFA World Cup Wins";

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethFigure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: FigureLayout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmapped: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub locations: Vec<&'static str>,
    pub z: Vec<u32>,
    /// Hover names
    pub text: Vec<String>,
    pub locationmode: &'static str,
    pub colorscale: &'static str,
    pub colorbar: ColorBar,
    pub hovertemplate: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FigureLayout {
    pub title: Title,
    pub geo: GeoLayout,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoLayout {
    pub scope: &'static str,
    pub projection: Projection,
    pub showframe: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ChoroplethFigure {
    pub fn from_win_counts(win_counts: &[WinCountEntry]) -> Self {
        let mut locations = Vec::with_capacity(win_counts.len());
        let mut z = Vec::with_capacity(win_counts.len());
        let mut text = Vec::with_capacity(win_counts.len());
        let mut unmapped = Vec::new();

        for entry in win_counts {
            match iso3_code(&entry.country) {
                Some(code) => {
                    locations.push(code);
                    z.push(entry.wins);
                    text.push(entry.country.clone());
                }
                None => unmapped.push(entry.country.clone()),
            }
        }

        Self {
            data: vec![ChoroplethTrace {
                kind: "choropleth",
                locations,
                z,
                text,
                locationmode: "ISO-3",
                colorscale: "Reds",
                colorbar: ColorBar {
                    title: Title { text: "Wins".to_string() },
                },
                hovertemplate: "<b>%{text}</b><br>Wins: %{z}<extra></extra>",
            }],
            layout: FigureLayout {
                title: Title { text: FIGURE_TITLE.to_string() },
                geo: GeoLayout {
                    scope: "world",
                    projection: Projection { kind: "natural earth" },
                    showframe: false,
                },
            },
            unmapped,
        }
    }

    /// Number of countries drawn on the map.
    pub fn mapped_count(&self) -> usize {
        self.data.iter().map(|trace| trace.locations.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dataset;

    #[test]
    fn test_figure_from_dataset() {
        let figure = Dataset::load().choropleth();
        assert!(figure.unmapped.is_empty());
        assert_eq!(figure.mapped_count(), 8);

        let trace = &figure.data[0];
        let brazil = trace.locations.iter().position(|c| *c == "BRA").unwrap();
        assert_eq!(trace.z[brazil], 5);
        assert_eq!(trace.text[brazil], "Brazil");
        assert_eq!(trace.z.iter().sum::<u32>(), 22);
    }

    #[test]
    fn test_missing_code_is_omitted() {
        let counts = vec![
            WinCountEntry { country: "Brazil".to_string(), wins: 5 },
            WinCountEntry { country: "Atlantis".to_string(), wins: 1 },
        ];
        let figure = ChoroplethFigure::from_win_counts(&counts);
        assert_eq!(figure.data[0].locations, vec!["BRA"]);
        assert_eq!(figure.unmapped, vec!["Atlantis".to_string()]);
    }

    #[test]
    fn test_serializes_as_plotly_figure() {
        let json = serde_json::to_value(Dataset::load().choropleth()).unwrap();
        assert_eq!(json["data"][0]["type"], "choropleth");
        assert_eq!(json["data"][0]["locationmode"], "ISO-3");
        assert_eq!(json["data"][0]["colorscale"], "Reds");
        assert_eq!(json["layout"]["geo"]["projection"]["type"], "natural earth");
        assert_eq!(json["layout"]["title"]["text"], FIGURE_TITLE);
        assert!(json.get("unmapped").is_none());
    }
}
