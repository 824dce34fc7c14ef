//! Axis tags, dimension orders and iteration orders.
//!
//! Both orders are closed enums. String tags are accepted for configuration
//! files; `DimOrder` understands `"chw"`/`"hwc"` and `IterOrder` the
//! innermost-first tags `"tyx"`/`"txy"`.
use crate::error::WindowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of one axis in an array shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Channel,
    Height,
    Width,
}

/// Position of the channel axis relative to the spatial axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimOrder {
    /// `[channel, height, width]`
    #[serde(rename = "chw", alias = "channel_first")]
    ChannelHeightWidth,
    /// `[height, width, channel]`
    #[default]
    #[serde(rename = "hwc", alias = "channel_last")]
    HeightWidthChannel,
}

impl DimOrder {
    /// Axis tags in shape order.
    pub const fn axes(self) -> [Axis; 3] {
        match self {
            DimOrder::ChannelHeightWidth => [Axis::Channel, Axis::Height, Axis::Width],
            DimOrder::HeightWidthChannel => [Axis::Height, Axis::Width, Axis::Channel],
        }
    }

    /// Index of `axis` within a shape of this order.
    pub const fn position(self, axis: Axis) -> usize {
        match (self, axis) {
            (DimOrder::ChannelHeightWidth, Axis::Channel) => 0,
            (DimOrder::ChannelHeightWidth, Axis::Height) => 1,
            (DimOrder::ChannelHeightWidth, Axis::Width) => 2,
            (DimOrder::HeightWidthChannel, Axis::Height) => 0,
            (DimOrder::HeightWidthChannel, Axis::Width) => 1,
            (DimOrder::HeightWidthChannel, Axis::Channel) => 2,
        }
    }

    /// Match an explicit axis list against the known orders.
    ///
    /// A two-axis list `[Height, Width]` is read as channel-last with the
    /// channel axis absent.
    pub fn from_axes(axes: &[Axis]) -> Result<Self, WindowError> {
        let count = |tag: Axis| axes.iter().filter(|&&a| a == tag).count();
        if count(Axis::Width) != 1 || count(Axis::Height) != 1 || count(Axis::Channel) > 1 {
            return Err(WindowError::InvalidDimOrder(axes.to_vec()));
        }
        match axes {
            [Axis::Channel, Axis::Height, Axis::Width] => Ok(DimOrder::ChannelHeightWidth),
            [Axis::Height, Axis::Width, Axis::Channel] | [Axis::Height, Axis::Width] => {
                Ok(DimOrder::HeightWidthChannel)
            }
            _ => Err(WindowError::UnsupportedDimOrder(format!("{axes:?}"))),
        }
    }

    /// Read `(width, height)` out of a shape of this order.
    pub fn spatial_extent(self, shape: &[usize]) -> Result<(usize, usize), WindowError> {
        let wi = self.position(Axis::Width);
        let hi = self.position(Axis::Height);
        match (shape.get(wi), shape.get(hi)) {
            (Some(&width), Some(&height)) if width > 0 && height > 0 => Ok((width, height)),
            (Some(&width), Some(&height)) => Err(WindowError::InvalidDimensions { width, height }),
            _ => Err(WindowError::UnsupportedGeometry(format!(
                "shape {shape:?} has no width/height axes for {self}"
            ))),
        }
    }
}

impl fmt::Display for DimOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimOrder::ChannelHeightWidth => f.write_str("chw"),
            DimOrder::HeightWidthChannel => f.write_str("hwc"),
        }
    }
}

impl FromStr for DimOrder {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chw" | "channel_first" => Ok(DimOrder::ChannelHeightWidth),
            "hwc" | "channel_last" => Ok(DimOrder::HeightWidthChannel),
            other => Err(WindowError::UnsupportedDimOrder(other.to_string())),
        }
    }
}

/// Nesting order of the offset/transform cross product.
///
/// Transforms always vary fastest. The tag names the spatial axis that
/// varies slowest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IterOrder {
    /// `x` outermost, then `y`, then transform (`"tyx"`).
    #[serde(alias = "tyx")]
    XOuter,
    /// `y` outermost, then `x`, then transform (`"txy"`). Row-major.
    #[default]
    #[serde(alias = "txy")]
    YOuter,
}

impl fmt::Display for IterOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterOrder::XOuter => f.write_str("x_outer"),
            IterOrder::YOuter => f.write_str("y_outer"),
        }
    }
}

impl FromStr for IterOrder {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x_outer" | "tyx" => Ok(IterOrder::XOuter),
            "y_outer" | "txy" => Ok(IterOrder::YOuter),
            other => Err(WindowError::UnsupportedIterOrder(other.to_string())),
        }
    }
}
