use serde::{Deserialize, Serialize};

use crate::foundation::core::Color;
use crate::foundation::error::{BridgeError, BridgeResult};
use crate::foundation::script::{ObjectWriter, ScriptLiteral, write_quoted};
use crate::style::expression::PropertyValue;
use crate::style::source::Source;
use crate::style::value::StyleValue;

/// Highest zoom level the engine accepts for layer zoom bounds.
pub const MAX_ZOOM: f64 = 24.0;

/// Closed set of layer kinds, serialized by their engine `type` names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    /// `fill`
    #[serde(rename = "fill")]
    Fill,
    /// `line`
    #[serde(rename = "line")]
    Line,
    /// `symbol`
    #[serde(rename = "symbol")]
    Symbol,
    /// `raster`
    #[serde(rename = "raster")]
    Raster,
    /// `circle`
    #[serde(rename = "circle")]
    Circle,
    /// `fill-extrusion`
    #[serde(rename = "fill-extrusion")]
    FillExtrusion,
    /// `heatmap`
    #[serde(rename = "heatmap")]
    Heatmap,
    /// `hillshade`
    #[serde(rename = "hillshade")]
    Hillshade,
    /// `background`
    #[serde(rename = "background")]
    Background,
}

impl LayerKind {
    /// Engine `type` name.
    pub fn as_str(self) -> &'static str {
        match self {
            LayerKind::Fill => "fill",
            LayerKind::Line => "line",
            LayerKind::Symbol => "symbol",
            LayerKind::Raster => "raster",
            LayerKind::Circle => "circle",
            LayerKind::FillExtrusion => "fill-extrusion",
            LayerKind::Heatmap => "heatmap",
            LayerKind::Hillshade => "hillshade",
            LayerKind::Background => "background",
        }
    }

    /// Background layers are the only kind drawn without a source.
    pub fn needs_source(self) -> bool {
        self != LayerKind::Background
    }
}

/// Layout `visibility`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// `visible`
    #[default]
    #[serde(rename = "visible")]
    Visible,
    /// `none`
    #[serde(rename = "none")]
    None,
}

impl Visibility {
    /// Engine keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::None => "none",
        }
    }
}

/// Reference frame for `*-translate` and hillshade illumination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// `map`
    #[serde(rename = "map")]
    Map,
    /// `viewport`
    #[serde(rename = "viewport")]
    Viewport,
}

impl Anchor {
    /// Engine keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::Map => "map",
            Anchor::Viewport => "viewport",
        }
    }
}

/// `raster-resampling`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RasterResampling {
    /// `linear`
    #[default]
    #[serde(rename = "linear")]
    Linear,
    /// `nearest`
    #[serde(rename = "nearest")]
    Nearest,
}

impl RasterResampling {
    /// Engine keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            RasterResampling::Linear => "linear",
            RasterResampling::Nearest => "nearest",
        }
    }
}

/// `symbol-placement`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolPlacement {
    /// `point`
    #[default]
    #[serde(rename = "point")]
    Point,
    /// `line`
    #[serde(rename = "line")]
    Line,
    /// `line-center`
    #[serde(rename = "line-center")]
    LineCenter,
}

impl SymbolPlacement {
    /// Engine keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolPlacement::Point => "point",
            SymbolPlacement::Line => "line",
            SymbolPlacement::LineCenter => "line-center",
        }
    }
}

/// `text-anchor`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    /// `center`
    #[default]
    #[serde(rename = "center")]
    Center,
    /// `left`
    #[serde(rename = "left")]
    Left,
    /// `right`
    #[serde(rename = "right")]
    Right,
    /// `top`
    #[serde(rename = "top")]
    Top,
    /// `bottom`
    #[serde(rename = "bottom")]
    Bottom,
    /// `top-left`
    #[serde(rename = "top-left")]
    TopLeft,
    /// `top-right`
    #[serde(rename = "top-right")]
    TopRight,
    /// `bottom-left`
    #[serde(rename = "bottom-left")]
    BottomLeft,
    /// `bottom-right`
    #[serde(rename = "bottom-right")]
    BottomRight,
}

impl TextAnchor {
    /// Engine keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Center => "center",
            TextAnchor::Left => "left",
            TextAnchor::Right => "right",
            TextAnchor::Top => "top",
            TextAnchor::Bottom => "bottom",
            TextAnchor::TopLeft => "top-left",
            TextAnchor::TopRight => "top-right",
            TextAnchor::BottomLeft => "bottom-left",
            TextAnchor::BottomRight => "bottom-right",
        }
    }
}

impl ScriptLiteral for Visibility {
    fn write_script(&self, out: &mut String) {
        write_quoted(out, self.as_str());
    }
}

impl ScriptLiteral for Anchor {
    fn write_script(&self, out: &mut String) {
        write_quoted(out, self.as_str());
    }
}

impl ScriptLiteral for RasterResampling {
    fn write_script(&self, out: &mut String) {
        write_quoted(out, self.as_str());
    }
}

impl ScriptLiteral for SymbolPlacement {
    fn write_script(&self, out: &mut String) {
        write_quoted(out, self.as_str());
    }
}

impl ScriptLiteral for TextAnchor {
    fn write_script(&self, out: &mut String) {
        write_quoted(out, self.as_str());
    }
}

fn or_number(v: &Option<StyleValue>, default: f64) -> StyleValue {
    v.clone().unwrap_or(StyleValue::Number(default))
}

fn or_color(v: &Option<StyleValue>, default: Color) -> StyleValue {
    v.clone().unwrap_or(StyleValue::Color(default))
}

/// Paint properties of a `fill` layer.
///
/// Every field is optional so that "unset" survives round trips; the accessors apply the engine
/// defaults, and serialization goes through the accessors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillPaint {
    /// `fill-antialias`, default `true`.
    pub antialias: Option<bool>,
    /// `fill-opacity`, default `1`.
    pub opacity: Option<StyleValue>,
    /// `fill-color`, default opaque black.
    pub color: Option<StyleValue>,
    /// `fill-outline-color`, no default (engine falls back to the fill color).
    pub outline_color: Option<StyleValue>,
    /// `fill-translate` in pixels, default `[0, 0]`.
    pub translate: Option<[f64; 2]>,
    /// `fill-translate-anchor`, default `map`.
    pub translate_anchor: Option<Anchor>,
    /// `fill-pattern`, no default.
    pub pattern: Option<StyleValue>,
}

impl FillPaint {
    /// Effective `fill-antialias`.
    pub fn antialias(&self) -> bool {
        self.antialias.unwrap_or(true)
    }

    /// Effective `fill-opacity`.
    pub fn opacity(&self) -> StyleValue {
        or_number(&self.opacity, 1.0)
    }

    /// Effective `fill-color`.
    pub fn color(&self) -> StyleValue {
        or_color(&self.color, Color::BLACK)
    }

    /// Effective `fill-translate`.
    pub fn translate(&self) -> [f64; 2] {
        self.translate.unwrap_or([0.0, 0.0])
    }

    /// Effective `fill-translate-anchor`.
    pub fn translate_anchor(&self) -> Anchor {
        self.translate_anchor.unwrap_or(Anchor::Map)
    }

    fn write(&self, w: &mut ObjectWriter) {
        w.field("fill-antialias", &self.antialias())
            .field("fill-opacity", &self.opacity())
            .field("fill-color", &self.color())
            .opt_field("fill-outline-color", self.outline_color.as_ref())
            .field("fill-translate", &self.translate()[..])
            .field("fill-translate-anchor", &self.translate_anchor())
            .opt_field("fill-pattern", self.pattern.as_ref());
    }
}

/// Layout properties of a `fill` layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillLayout {
    /// `visibility`, default `visible`.
    pub visibility: Option<Visibility>,
    /// `fill-sort-key`, no default.
    pub sort_key: Option<StyleValue>,
}

impl FillLayout {
    fn write(&self, w: &mut ObjectWriter) {
        w.field("visibility", &self.visibility.unwrap_or_default())
            .opt_field("fill-sort-key", self.sort_key.as_ref());
    }
}

/// Layout shared by kinds that only carry `visibility`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BasicLayout {
    /// `visibility`, default `visible`.
    pub visibility: Option<Visibility>,
}

impl BasicLayout {
    fn write(&self, w: &mut ObjectWriter) {
        w.field("visibility", &self.visibility.unwrap_or_default());
    }
}

/// Paint properties of a `raster` layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RasterPaint {
    /// `raster-opacity`, default `1`.
    pub opacity: Option<StyleValue>,
    /// `raster-hue-rotate` in degrees, default `0`.
    pub hue_rotate: Option<StyleValue>,
    /// `raster-brightness-min`, default `0`.
    pub brightness_min: Option<StyleValue>,
    /// `raster-brightness-max`, default `1`.
    pub brightness_max: Option<StyleValue>,
    /// `raster-saturation`, default `0`.
    pub saturation: Option<StyleValue>,
    /// `raster-contrast`, default `0`.
    pub contrast: Option<StyleValue>,
    /// `raster-resampling`, default `linear`.
    pub resampling: Option<RasterResampling>,
    /// `raster-fade-duration` in milliseconds, default `300`.
    pub fade_duration: Option<f64>,
}

impl RasterPaint {
    /// Effective `raster-opacity`.
    pub fn opacity(&self) -> StyleValue {
        or_number(&self.opacity, 1.0)
    }

    /// Effective `raster-hue-rotate`.
    pub fn hue_rotate(&self) -> StyleValue {
        or_number(&self.hue_rotate, 0.0)
    }

    /// Effective `raster-brightness-min`.
    pub fn brightness_min(&self) -> StyleValue {
        or_number(&self.brightness_min, 0.0)
    }

    /// Effective `raster-brightness-max`.
    pub fn brightness_max(&self) -> StyleValue {
        or_number(&self.brightness_max, 1.0)
    }

    /// Effective `raster-saturation`.
    pub fn saturation(&self) -> StyleValue {
        or_number(&self.saturation, 0.0)
    }

    /// Effective `raster-contrast`.
    pub fn contrast(&self) -> StyleValue {
        or_number(&self.contrast, 0.0)
    }

    /// Effective `raster-resampling`.
    pub fn resampling(&self) -> RasterResampling {
        self.resampling.unwrap_or_default()
    }

    /// Effective `raster-fade-duration`.
    pub fn fade_duration(&self) -> f64 {
        self.fade_duration.unwrap_or(300.0)
    }

    fn write(&self, w: &mut ObjectWriter) {
        w.field("raster-opacity", &self.opacity())
            .field("raster-hue-rotate", &self.hue_rotate())
            .field("raster-brightness-min", &self.brightness_min())
            .field("raster-brightness-max", &self.brightness_max())
            .field("raster-saturation", &self.saturation())
            .field("raster-contrast", &self.contrast())
            .field("raster-resampling", &self.resampling())
            .field("raster-fade-duration", &self.fade_duration());
    }
}

/// Paint properties of a `heatmap` layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeatmapPaint {
    /// `heatmap-radius` in pixels, default `30`.
    pub radius: Option<StyleValue>,
    /// `heatmap-weight`, default `1`.
    pub weight: Option<StyleValue>,
    /// `heatmap-intensity`, default `1`.
    pub intensity: Option<StyleValue>,
    /// `heatmap-color`, an expression over `["heatmap-density"]`; engine default when unset.
    pub color: Option<StyleValue>,
    /// `heatmap-opacity`, default `1`.
    pub opacity: Option<StyleValue>,
}

impl HeatmapPaint {
    /// Effective `heatmap-radius`.
    pub fn radius(&self) -> StyleValue {
        or_number(&self.radius, 30.0)
    }

    /// Effective `heatmap-weight`.
    pub fn weight(&self) -> StyleValue {
        or_number(&self.weight, 1.0)
    }

    /// Effective `heatmap-intensity`.
    pub fn intensity(&self) -> StyleValue {
        or_number(&self.intensity, 1.0)
    }

    /// Effective `heatmap-opacity`.
    pub fn opacity(&self) -> StyleValue {
        or_number(&self.opacity, 1.0)
    }

    fn write(&self, w: &mut ObjectWriter) {
        w.field("heatmap-radius", &self.radius())
            .field("heatmap-weight", &self.weight())
            .field("heatmap-intensity", &self.intensity())
            .opt_field("heatmap-color", self.color.as_ref())
            .field("heatmap-opacity", &self.opacity());
    }
}

/// Paint properties of a `hillshade` layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HillshadePaint {
    /// `hillshade-illumination-direction` in degrees, default `335`.
    pub illumination_direction: Option<StyleValue>,
    /// `hillshade-illumination-anchor`, default `viewport`.
    pub illumination_anchor: Option<Anchor>,
    /// `hillshade-exaggeration`, default `0.5`.
    pub exaggeration: Option<StyleValue>,
    /// `hillshade-shadow-color`, default black.
    pub shadow_color: Option<StyleValue>,
    /// `hillshade-highlight-color`, default white.
    pub highlight_color: Option<StyleValue>,
    /// `hillshade-accent-color`, default black.
    pub accent_color: Option<StyleValue>,
}

impl HillshadePaint {
    /// Effective `hillshade-illumination-direction`.
    pub fn illumination_direction(&self) -> StyleValue {
        or_number(&self.illumination_direction, 335.0)
    }

    /// Effective `hillshade-illumination-anchor`.
    pub fn illumination_anchor(&self) -> Anchor {
        self.illumination_anchor.unwrap_or(Anchor::Viewport)
    }

    /// Effective `hillshade-exaggeration`.
    pub fn exaggeration(&self) -> StyleValue {
        or_number(&self.exaggeration, 0.5)
    }

    /// Effective `hillshade-shadow-color`.
    pub fn shadow_color(&self) -> StyleValue {
        or_color(&self.shadow_color, Color::BLACK)
    }

    /// Effective `hillshade-highlight-color`.
    pub fn highlight_color(&self) -> StyleValue {
        or_color(&self.highlight_color, Color::WHITE)
    }

    /// Effective `hillshade-accent-color`.
    pub fn accent_color(&self) -> StyleValue {
        or_color(&self.accent_color, Color::BLACK)
    }

    fn write(&self, w: &mut ObjectWriter) {
        w.field(
            "hillshade-illumination-direction",
            &self.illumination_direction(),
        )
        .field("hillshade-illumination-anchor", &self.illumination_anchor())
        .field("hillshade-exaggeration", &self.exaggeration())
        .field("hillshade-shadow-color", &self.shadow_color())
        .field("hillshade-highlight-color", &self.highlight_color())
        .field("hillshade-accent-color", &self.accent_color());
    }
}

/// Layout properties of a `symbol` layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolLayout {
    /// `visibility`, default `visible`.
    pub visibility: Option<Visibility>,
    /// `symbol-placement`, default `point`.
    pub placement: Option<SymbolPlacement>,
    /// `symbol-sort-key`, no default.
    pub sort_key: Option<StyleValue>,
    /// `icon-image`, no default.
    pub icon_image: Option<StyleValue>,
    /// `icon-size`, default `1`.
    pub icon_size: Option<StyleValue>,
    /// `icon-allow-overlap`, default `false`.
    pub icon_allow_overlap: Option<bool>,
    /// `text-field`, no default.
    pub text_field: Option<StyleValue>,
    /// `text-font` font stack, engine default when unset.
    pub text_font: Option<Vec<String>>,
    /// `text-size`, default `16`.
    pub text_size: Option<StyleValue>,
    /// `text-anchor`, default `center`.
    pub text_anchor: Option<TextAnchor>,
    /// `text-offset` in ems, default `[0, 0]`.
    pub text_offset: Option<[f64; 2]>,
    /// `text-allow-overlap`, default `false`.
    pub text_allow_overlap: Option<bool>,
}

impl SymbolLayout {
    /// Effective `icon-size`.
    pub fn icon_size(&self) -> StyleValue {
        or_number(&self.icon_size, 1.0)
    }

    /// Effective `text-size`.
    pub fn text_size(&self) -> StyleValue {
        or_number(&self.text_size, 16.0)
    }

    /// Effective `text-offset`.
    pub fn text_offset(&self) -> [f64; 2] {
        self.text_offset.unwrap_or([0.0, 0.0])
    }

    fn write(&self, w: &mut ObjectWriter) {
        w.field("visibility", &self.visibility.unwrap_or_default())
            .field("symbol-placement", &self.placement.unwrap_or_default())
            .opt_field("symbol-sort-key", self.sort_key.as_ref())
            .opt_field("icon-image", self.icon_image.as_ref())
            .field("icon-size", &self.icon_size())
            .field(
                "icon-allow-overlap",
                &self.icon_allow_overlap.unwrap_or(false),
            )
            .opt_field("text-field", self.text_field.as_ref())
            .opt_field("text-font", self.text_font.as_ref())
            .field("text-size", &self.text_size())
            .field("text-anchor", &self.text_anchor.unwrap_or_default())
            .field("text-offset", &self.text_offset()[..])
            .field(
                "text-allow-overlap",
                &self.text_allow_overlap.unwrap_or(false),
            );
    }
}

/// Paint properties of a `symbol` layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolPaint {
    /// `icon-opacity`, default `1`.
    pub icon_opacity: Option<StyleValue>,
    /// `icon-color`, default black (SDF icons only).
    pub icon_color: Option<StyleValue>,
    /// `text-color`, default black.
    pub text_color: Option<StyleValue>,
    /// `text-opacity`, default `1`.
    pub text_opacity: Option<StyleValue>,
    /// `text-halo-color`, default transparent.
    pub text_halo_color: Option<StyleValue>,
    /// `text-halo-width` in pixels, default `0`.
    pub text_halo_width: Option<StyleValue>,
}

impl SymbolPaint {
    /// Effective `icon-opacity`.
    pub fn icon_opacity(&self) -> StyleValue {
        or_number(&self.icon_opacity, 1.0)
    }

    /// Effective `icon-color`.
    pub fn icon_color(&self) -> StyleValue {
        or_color(&self.icon_color, Color::BLACK)
    }

    /// Effective `text-color`.
    pub fn text_color(&self) -> StyleValue {
        or_color(&self.text_color, Color::BLACK)
    }

    /// Effective `text-opacity`.
    pub fn text_opacity(&self) -> StyleValue {
        or_number(&self.text_opacity, 1.0)
    }

    /// Effective `text-halo-color`.
    pub fn text_halo_color(&self) -> StyleValue {
        or_color(&self.text_halo_color, Color::TRANSPARENT)
    }

    /// Effective `text-halo-width`.
    pub fn text_halo_width(&self) -> StyleValue {
        or_number(&self.text_halo_width, 0.0)
    }

    fn write(&self, w: &mut ObjectWriter) {
        w.field("icon-opacity", &self.icon_opacity())
            .field("icon-color", &self.icon_color())
            .field("text-color", &self.text_color())
            .field("text-opacity", &self.text_opacity())
            .field("text-halo-color", &self.text_halo_color())
            .field("text-halo-width", &self.text_halo_width());
    }
}

/// Kind-specific paint and layout records.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerStyle {
    /// `fill` layer.
    Fill {
        /// Paint record.
        paint: FillPaint,
        /// Layout record.
        layout: FillLayout,
    },
    /// `raster` layer.
    Raster {
        /// Paint record.
        paint: RasterPaint,
        /// Layout record.
        layout: BasicLayout,
    },
    /// `heatmap` layer.
    Heatmap {
        /// Paint record.
        paint: HeatmapPaint,
        /// Layout record.
        layout: BasicLayout,
    },
    /// `hillshade` layer.
    Hillshade {
        /// Paint record.
        paint: HillshadePaint,
        /// Layout record.
        layout: BasicLayout,
    },
    /// `symbol` layer.
    Symbol {
        /// Paint record.
        paint: SymbolPaint,
        /// Layout record.
        layout: SymbolLayout,
    },
    /// Any kind without a typed record; properties are written in the given order.
    Untyped {
        /// Layer kind.
        kind: LayerKind,
        /// Paint properties by engine name.
        paint: Vec<(String, StyleValue)>,
        /// Layout properties by engine name.
        layout: Vec<(String, StyleValue)>,
    },
}

impl LayerStyle {
    /// Default `fill` style.
    pub fn fill() -> Self {
        LayerStyle::Fill {
            paint: FillPaint::default(),
            layout: FillLayout::default(),
        }
    }

    /// Default `raster` style.
    pub fn raster() -> Self {
        LayerStyle::Raster {
            paint: RasterPaint::default(),
            layout: BasicLayout::default(),
        }
    }

    /// Default `heatmap` style.
    pub fn heatmap() -> Self {
        LayerStyle::Heatmap {
            paint: HeatmapPaint::default(),
            layout: BasicLayout::default(),
        }
    }

    /// Default `hillshade` style.
    pub fn hillshade() -> Self {
        LayerStyle::Hillshade {
            paint: HillshadePaint::default(),
            layout: BasicLayout::default(),
        }
    }

    /// Default `symbol` style.
    pub fn symbol() -> Self {
        LayerStyle::Symbol {
            paint: SymbolPaint::default(),
            layout: SymbolLayout::default(),
        }
    }

    /// Untyped style with no properties set.
    pub fn untyped(kind: LayerKind) -> Self {
        LayerStyle::Untyped {
            kind,
            paint: Vec::new(),
            layout: Vec::new(),
        }
    }

    /// Layer kind tag.
    pub fn kind(&self) -> LayerKind {
        match self {
            LayerStyle::Fill { .. } => LayerKind::Fill,
            LayerStyle::Raster { .. } => LayerKind::Raster,
            LayerStyle::Heatmap { .. } => LayerKind::Heatmap,
            LayerStyle::Hillshade { .. } => LayerKind::Hillshade,
            LayerStyle::Symbol { .. } => LayerKind::Symbol,
            LayerStyle::Untyped { kind, .. } => *kind,
        }
    }

    fn layout_literal(&self) -> String {
        let mut w = ObjectWriter::new();
        match self {
            LayerStyle::Fill { layout, .. } => layout.write(&mut w),
            LayerStyle::Raster { layout, .. }
            | LayerStyle::Heatmap { layout, .. }
            | LayerStyle::Hillshade { layout, .. } => layout.write(&mut w),
            LayerStyle::Symbol { layout, .. } => layout.write(&mut w),
            LayerStyle::Untyped { layout, .. } => {
                for (name, value) in layout {
                    w.field(name, value);
                }
            }
        }
        w.finish()
    }

    fn paint_literal(&self) -> String {
        let mut w = ObjectWriter::new();
        match self {
            LayerStyle::Fill { paint, .. } => paint.write(&mut w),
            LayerStyle::Raster { paint, .. } => paint.write(&mut w),
            LayerStyle::Heatmap { paint, .. } => paint.write(&mut w),
            LayerStyle::Hillshade { paint, .. } => paint.write(&mut w),
            LayerStyle::Symbol { paint, .. } => paint.write(&mut w),
            LayerStyle::Untyped { paint, .. } => {
                for (name, value) in paint {
                    w.field(name, value);
                }
            }
        }
        w.finish()
    }
}

/// A style layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Layer identifier, unique within its style (not checked here).
    pub id: String,
    /// Source identifier; absent only for `background` layers.
    pub source: Option<String>,
    /// Layer inside a vector-tile source.
    pub source_layer: Option<String>,
    /// Minimum zoom at which the layer is visible.
    pub min_zoom: Option<f64>,
    /// Maximum zoom at which the layer is visible.
    pub max_zoom: Option<f64>,
    /// Feature filter.
    pub filter: Option<PropertyValue>,
    /// Kind-specific paint/layout.
    pub style: LayerStyle,
}

impl Layer {
    /// Layer kind tag.
    pub fn kind(&self) -> LayerKind {
        self.style.kind()
    }

    /// Validate the layer on its own: identifiers, source presence and zoom bounds.
    pub fn validate(&self) -> BridgeResult<()> {
        if self.id.trim().is_empty() {
            return Err(BridgeError::validation("layer id must be non-empty"));
        }
        match (&self.source, self.kind().needs_source()) {
            (None, true) => {
                return Err(BridgeError::validation(format!(
                    "layer '{}' of type {} needs a source",
                    self.id,
                    self.kind().as_str()
                )));
            }
            (Some(_), false) => {
                return Err(BridgeError::validation(format!(
                    "layer '{}' of type background cannot have a source",
                    self.id
                )));
            }
            _ => {}
        }
        validate_zoom_range(&self.id, self.min_zoom, self.max_zoom)
    }

    /// Validate the source-layer rule against the source this layer draws from.
    ///
    /// Vector-tile sources require a source layer; every other source forbids one.
    pub fn validate_against(&self, source: &Source) -> BridgeResult<()> {
        self.validate()?;
        if self.source.as_deref() != Some(source.id.as_str()) {
            return Err(BridgeError::validation(format!(
                "layer '{}' does not draw from source '{}'",
                self.id, source.id
            )));
        }
        match (source.is_vector_tile(), &self.source_layer) {
            (true, None) => Err(BridgeError::validation(format!(
                "layer '{}' needs a source-layer for vector source '{}'",
                self.id, source.id
            ))),
            (false, Some(_)) => Err(BridgeError::validation(format!(
                "layer '{}' cannot set a source-layer for non-vector source '{}'",
                self.id, source.id
            ))),
            _ => Ok(()),
        }
    }
}

pub(crate) fn validate_zoom_range(
    id: &str,
    min_zoom: Option<f64>,
    max_zoom: Option<f64>,
) -> BridgeResult<()> {
    for (name, z) in [("minzoom", min_zoom), ("maxzoom", max_zoom)] {
        if let Some(z) = z
            && !(0.0..=MAX_ZOOM).contains(&z)
        {
            return Err(BridgeError::validation(format!(
                "layer '{id}' {name} must be within [0, 24]"
            )));
        }
    }
    if let (Some(min), Some(max)) = (min_zoom, max_zoom)
        && min > max
    {
        return Err(BridgeError::validation(format!(
            "layer '{id}' minzoom must be <= maxzoom"
        )));
    }
    Ok(())
}

impl ScriptLiteral for Layer {
    fn write_script(&self, out: &mut String) {
        let mut w = ObjectWriter::new();
        w.field("id", &self.id)
            .field("type", self.kind().as_str())
            .opt_field("source", self.source.as_ref())
            .opt_field("source-layer", self.source_layer.as_ref())
            .opt_field("minzoom", self.min_zoom.as_ref())
            .opt_field("maxzoom", self.max_zoom.as_ref())
            .opt_field("filter", self.filter.as_ref())
            .raw_field("layout", &self.style.layout_literal())
            .raw_field("paint", &self.style.paint_literal());
        out.push_str(&w.finish());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/layer.rs"]
mod tests;
