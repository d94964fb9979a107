use serde::{Deserialize, Serialize};

/// Point in the sparkline's 0-100 viewbox. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Capex projection sparkline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapexChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub points: Vec<ChartPoint>,
    pub max_value: f64,
    /// SVG polyline `points` attribute: "x,y x,y ..."
    pub polyline: String,
    /// Closed polygon under the line: "0,100 {polyline} 100,100"
    pub area: String,
}

impl CapexChart {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
