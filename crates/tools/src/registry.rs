//! Per-tool parameter tables driving an external properties panel.
//!
//! Pure data: the tool set is a closed enumeration and each tool carries
//! fixed slider bounds and defaults. The panel reads this table; the engines
//! never do.

use raster::Rgb8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Brush,
    Eraser,
    Blur,
    Fill,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Brush, Tool::Eraser, Tool::Blur, Tool::Fill];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Brush => "brush",
            Tool::Eraser => "eraser",
            Tool::Blur => "blur",
            Tool::Fill => "fill",
        }
    }

    pub fn properties(self) -> ToolProperties {
        match self {
            Tool::Brush => ToolProperties {
                brush_size: Some(BRUSH_SIZE_BOUNDS),
                opacity: Some(OPACITY_BOUNDS),
                uses_color: true,
            },
            Tool::Eraser => ToolProperties {
                brush_size: Some(BRUSH_SIZE_BOUNDS),
                opacity: Some(OPACITY_BOUNDS),
                uses_color: false,
            },
            Tool::Blur => ToolProperties {
                brush_size: Some(BRUSH_SIZE_BOUNDS),
                opacity: None,
                uses_color: false,
            },
            Tool::Fill => ToolProperties {
                brush_size: None,
                opacity: None,
                uses_color: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl SliderBounds {
    pub fn clamp(self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolProperties {
    pub brush_size: Option<SliderBounds>,
    pub opacity: Option<SliderBounds>,
    pub uses_color: bool,
}

pub const BRUSH_SIZE_BOUNDS: SliderBounds = SliderBounds {
    min: 1,
    max: 100,
    default: 20,
};

pub const OPACITY_BOUNDS: SliderBounds = SliderBounds {
    min: 1,
    max: 100,
    default: 100,
};

pub const DEFAULT_COLOR: Rgb8 = Rgb8::BLACK;

/// The fixed swatch row offered next to the color picker.
pub const COLOR_SWATCHES: [Rgb8; 10] = [
    Rgb8 { r: 0x00, g: 0x00, b: 0x00 },
    Rgb8 { r: 0xFF, g: 0xFF, b: 0xFF },
    Rgb8 { r: 0xFF, g: 0x6B, b: 0x6B },
    Rgb8 { r: 0x4E, g: 0xCD, b: 0xC4 },
    Rgb8 { r: 0x45, g: 0xB7, b: 0xD1 },
    Rgb8 { r: 0x96, g: 0xCE, b: 0xB4 },
    Rgb8 { r: 0xFF, g: 0xEA, b: 0xA7 },
    Rgb8 { r: 0xDD, g: 0xA0, b: 0xDD },
    Rgb8 { r: 0x98, g: 0xD8, b: 0xC8 },
    Rgb8 { r: 0xF7, g: 0xDC, b: 0x6F },
];
