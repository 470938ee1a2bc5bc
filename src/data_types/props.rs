use eyre::{Result, WrapErr};
use serde::{Deserialize, Deserializer, Serialize};

use super::Record;
use crate::theme::Theme;

/// Rendering style of the chart. Modes are exclusive; `Area` also draws
/// the line and points on top of the filled area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    #[default]
    Line,
    Bar,
    Area,
    /// Any mode string the chart does not know. Axes are drawn, no series.
    #[serde(other)]
    Unsupported,
}

impl ChartMode {
    /// Whether points get the hover tooltip in this mode.
    pub fn has_hover(self) -> bool {
        matches!(self, Self::Line | Self::Area)
    }
}

/// Everything the host pushes into the chart on each update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartProps {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Record>,
    #[serde(default)]
    pub chart_type: ChartMode,
    #[serde(default)]
    pub theme: Theme,
}

impl ChartProps {
    pub fn new(data: Vec<Record>, chart_type: ChartMode, theme: Theme) -> Self {
        Self {
            data,
            chart_type,
            theme,
        }
    }

    /// Parses the host payload, e.g. `{"data": [...], "chartType": "bar", "theme": "dark"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid chart props")
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Record>>::deserialize(deserializer)?.unwrap_or_default())
}
