use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Layout axes.
///
/// The axis decides which way a sheet's skyline runs and which way finished
/// sheets are stacked on the output canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutAxis {
    /// Skyline runs left-to-right; pieces settle downward; sheets stack along `y`.
    Horizontal,
    /// Transpose of `Horizontal`: skyline runs top-to-bottom; pieces settle
    /// rightward; sheets stack along `x`.
    Vertical,
}

impl FromStr for LayoutAxis {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Self::Horizontal),
            "vertical" | "v" => Ok(Self::Vertical),
            _ => Err(()),
        }
    }
}

impl LayoutAxis {
    /// Distance between successive sheet origins along the stacking axis.
    pub fn stride(&self, sheet_width: u32, sheet_height: u32, margin: u32) -> u32 {
        match self {
            LayoutAxis::Horizontal => sheet_height + margin,
            LayoutAxis::Vertical => sheet_width + margin,
        }
    }

    /// Absolute origin of a sheet sitting `offset` units along the stacking axis.
    pub fn origin(&self, offset: u32) -> (u32, u32) {
        match self {
            LayoutAxis::Horizontal => (0, offset),
            LayoutAxis::Vertical => (offset, 0),
        }
    }
}

/// Sorting orders for deterministic packing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    AreaDesc,
    MaxSideDesc,
    HeightDesc,
    WidthDesc,
    None,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "area_desc" => Ok(Self::AreaDesc),
            "max_side_desc" => Ok(Self::MaxSideDesc),
            "height_desc" => Ok(Self::HeightDesc),
            "width_desc" => Ok(Self::WidthDesc),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// Sheet width in layout units.
    pub sheet_width: u32,
    /// Sheet height in layout units.
    pub sheet_height: u32,
    /// Which engine to use and how sheets stack.
    #[serde(default = "default_axis")]
    pub axis: LayoutAxis,
    /// Gap between successive sheets along the stacking axis.
    #[serde(default)]
    pub sheet_margin: u32,
    #[serde(default = "default_sort_order")]
    pub sort_order: SortOrder,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            sheet_width: 1024,
            sheet_height: 1024,
            axis: default_axis(),
            sheet_margin: 0,
            sort_order: default_sort_order(),
        }
    }
}

impl PackConfig {
    /// Validates the configuration parameters.
    ///
    /// Sheet dimensions must be non-zero, and a sheet plus its margin must
    /// fit the stacking axis, otherwise sheet offsets could not advance.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::PackError;

        if self.sheet_width == 0 || self.sheet_height == 0 {
            return Err(PackError::InvalidDimensions {
                width: self.sheet_width,
                height: self.sheet_height,
            });
        }

        let stacking = match self.axis {
            LayoutAxis::Horizontal => self.sheet_height,
            LayoutAxis::Vertical => self.sheet_width,
        };
        if stacking.checked_add(self.sheet_margin).is_none() {
            return Err(PackError::InvalidConfig(format!(
                "sheet_margin ({}) overflows the stacking axis",
                self.sheet_margin
            )));
        }

        Ok(())
    }
}

fn default_axis() -> LayoutAxis {
    LayoutAxis::Horizontal
}
fn default_sort_order() -> SortOrder {
    SortOrder::AreaDesc
}

/// Builder for `PackConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackConfigBuilder {
    cfg: PackConfig,
}

impl PackConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackConfig::default(),
        }
    }
    pub fn sheet_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.sheet_width = w;
        self.cfg.sheet_height = h;
        self
    }
    pub fn axis(mut self, v: LayoutAxis) -> Self {
        self.cfg.axis = v;
        self
    }
    pub fn sheet_margin(mut self, v: u32) -> Self {
        self.cfg.sheet_margin = v;
        self
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    pub fn build(self) -> PackConfig {
        self.cfg
    }
}

impl PackConfig {
    /// Create a fluent builder for `PackConfig`.
    pub fn builder() -> PackConfigBuilder {
        PackConfigBuilder::new()
    }
}
