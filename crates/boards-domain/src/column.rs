use serde::{Deserialize, Serialize};

/// The palette the remote service assigns to select options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnColor {
    Default,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
}

impl Default for ColumnColor {
    fn default() -> Self {
        Self::Default
    }
}

impl ColumnColor {
    pub const ALL: [ColumnColor; 9] = [
        Self::Default,
        Self::Brown,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Pink,
        Self::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Brown => "brown",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Red => "red",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

/// One lane of a board. Immutable value type: mutations replace the
/// column inside the board's column sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "notionID")]
    pub notion_id: Option<String>,
    pub name: String,
    #[serde(rename = "colorName")]
    pub color_name: Option<ColumnColor>,
}

impl Column {
    pub fn new(notion_id: Option<String>, name: impl Into<String>, color_name: Option<ColumnColor>) -> Self {
        Self {
            notion_id,
            name: name.into(),
            color_name,
        }
    }

    /// A column without a remote id for a file-backed board. Names must be
    /// unique per board since they double as identity.
    pub fn local(name: impl Into<String>) -> Self {
        Self::new(None, name, None)
    }

    /// Remote option id when remote-backed, otherwise the name.
    pub fn id(&self) -> &str {
        self.notion_id.as_deref().unwrap_or(&self.name)
    }

    pub fn color(&self) -> ColumnColor {
        self.color_name.unwrap_or_default()
    }
}
