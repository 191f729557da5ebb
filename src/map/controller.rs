use crate::bridge::{Bridge, decode_document};
use crate::command::{
    AddLayer, AddSource, AnimationOptions, CameraOptions, EaseTo, FitBounds, FitBoundsOptions,
    FlyTo, GetBearing, GetBounds, GetCenter, GetLayerIds, GetPitch, GetZoom, HasLayer, HasSource,
    IsMoving, IsSourceLoaded, IsStyleLoaded, JumpTo, MoveLayer, RemoveLayer, RemoveSource,
    ResetPaintProperty, SetBearing, SetCenter, SetFilter, SetLayerZoomRange, SetLayoutProperty,
    SetMaxBounds, SetMaxZoom, SetMinZoom, SetPaintProperty, SetPitch, SetStyle, SetZoom, ZoomIn,
    ZoomOut,
};
use crate::foundation::core::{LngLat, LngLatBounds};
use crate::foundation::error::BridgeResult;
use crate::style::document::StyleDocument;
use crate::style::expression::PropertyValue;
use crate::style::layer::Layer;
use crate::style::source::Source;
use crate::style::value::StyleValue;

/// Typed facade over the map instance behind a [`Bridge`].
#[derive(Clone, Debug)]
pub struct MapController {
    bridge: Bridge,
}

impl MapController {
    /// Wrap a bridge.
    pub fn new(bridge: Bridge) -> Self {
        Self { bridge }
    }

    /// Underlying bridge, for commands without a typed method.
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    /// Current zoom level.
    pub async fn zoom(&self) -> BridgeResult<f64> {
        self.bridge.execute(&GetZoom).await.into_number()
    }

    /// Jump to zoom level `z`.
    pub async fn set_zoom(&self, z: f64) -> BridgeResult<()> {
        self.bridge.execute(&SetZoom(z)).await.into_unit()
    }

    /// Current center.
    pub async fn center(&self) -> BridgeResult<LngLat> {
        decode_document(self.bridge.execute(&GetCenter).await)
    }

    /// Move the center.
    pub async fn set_center(&self, center: LngLat) -> BridgeResult<()> {
        self.bridge.execute(&SetCenter(center)).await.into_unit()
    }

    /// Current bearing in degrees.
    pub async fn bearing(&self) -> BridgeResult<f64> {
        self.bridge.execute(&GetBearing).await.into_number()
    }

    /// Rotate to `deg`.
    pub async fn set_bearing(&self, deg: f64) -> BridgeResult<()> {
        self.bridge.execute(&SetBearing(deg)).await.into_unit()
    }

    /// Current pitch in degrees.
    pub async fn pitch(&self) -> BridgeResult<f64> {
        self.bridge.execute(&GetPitch).await.into_number()
    }

    /// Tilt to `deg`.
    pub async fn set_pitch(&self, deg: f64) -> BridgeResult<()> {
        self.bridge.execute(&SetPitch(deg)).await.into_unit()
    }

    /// Zoom in one level.
    pub async fn zoom_in(&self, options: Option<AnimationOptions>) -> BridgeResult<()> {
        self.bridge.execute(&ZoomIn(options)).await.into_unit()
    }

    /// Zoom out one level.
    pub async fn zoom_out(&self, options: Option<AnimationOptions>) -> BridgeResult<()> {
        self.bridge.execute(&ZoomOut(options)).await.into_unit()
    }

    /// Change the camera without animation.
    pub async fn jump_to(&self, camera: CameraOptions) -> BridgeResult<()> {
        self.bridge.execute(&JumpTo(camera)).await.into_unit()
    }

    /// Fly to `camera`.
    pub async fn fly_to(
        &self,
        camera: CameraOptions,
        animation: Option<AnimationOptions>,
    ) -> BridgeResult<()> {
        self.bridge
            .execute(&FlyTo { camera, animation })
            .await
            .into_unit()
    }

    /// Ease to `camera`.
    pub async fn ease_to(
        &self,
        camera: CameraOptions,
        animation: Option<AnimationOptions>,
    ) -> BridgeResult<()> {
        self.bridge
            .execute(&EaseTo { camera, animation })
            .await
            .into_unit()
    }

    /// Fit the viewport to `bounds`.
    pub async fn fit_bounds(
        &self,
        bounds: LngLatBounds,
        options: Option<FitBoundsOptions>,
    ) -> BridgeResult<()> {
        self.bridge
            .execute(&FitBounds { bounds, options })
            .await
            .into_unit()
    }

    /// Visible bounds.
    pub async fn bounds(&self) -> BridgeResult<LngLatBounds> {
        decode_document(self.bridge.execute(&GetBounds).await)
    }

    /// Restrict panning to `bounds`; `None` lifts the restriction.
    pub async fn set_max_bounds(&self, bounds: Option<LngLatBounds>) -> BridgeResult<()> {
        self.bridge.execute(&SetMaxBounds(bounds)).await.into_unit()
    }

    /// Lower zoom limit; `None` restores the default.
    pub async fn set_min_zoom(&self, z: Option<f64>) -> BridgeResult<()> {
        self.bridge.execute(&SetMinZoom(z)).await.into_unit()
    }

    /// Upper zoom limit; `None` restores the default.
    pub async fn set_max_zoom(&self, z: Option<f64>) -> BridgeResult<()> {
        self.bridge.execute(&SetMaxZoom(z)).await.into_unit()
    }

    /// Whether the camera is animating.
    pub async fn is_moving(&self) -> BridgeResult<bool> {
        self.bridge.execute(&IsMoving).await.into_bool()
    }

    /// Replace the whole style.
    pub async fn set_style(&self, url: impl Into<String>) -> BridgeResult<()> {
        self.bridge.execute(&SetStyle(url.into())).await.into_unit()
    }

    /// Add a source.
    pub async fn add_source(&self, source: Source) -> BridgeResult<()> {
        self.bridge.execute(&AddSource(source)).await.into_unit()
    }

    /// Remove a source.
    pub async fn remove_source(&self, id: impl Into<String>) -> BridgeResult<()> {
        self.bridge.execute(&RemoveSource(id.into())).await.into_unit()
    }

    /// Add a layer on top, or below `before`.
    pub async fn add_layer(&self, layer: Layer, before: Option<String>) -> BridgeResult<()> {
        self.bridge
            .execute(&AddLayer { layer, before })
            .await
            .into_unit()
    }

    /// Remove a layer.
    pub async fn remove_layer(&self, id: impl Into<String>) -> BridgeResult<()> {
        self.bridge.execute(&RemoveLayer(id.into())).await.into_unit()
    }

    /// Move a layer to the top, or below `before`.
    pub async fn move_layer(
        &self,
        id: impl Into<String>,
        before: Option<String>,
    ) -> BridgeResult<()> {
        let cmd = MoveLayer {
            id: id.into(),
            before,
        };
        self.bridge.execute(&cmd).await.into_unit()
    }

    /// Set a paint property.
    pub async fn set_paint_property(
        &self,
        layer: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> BridgeResult<()> {
        let cmd = SetPaintProperty {
            layer: layer.into(),
            name: name.into(),
            value: value.into(),
        };
        self.bridge.execute(&cmd).await.into_unit()
    }

    /// Restore a paint property to its default.
    pub async fn reset_paint_property(
        &self,
        layer: impl Into<String>,
        name: impl Into<String>,
    ) -> BridgeResult<()> {
        let cmd = ResetPaintProperty {
            layer: layer.into(),
            name: name.into(),
        };
        self.bridge.execute(&cmd).await.into_unit()
    }

    /// Set a layout property.
    pub async fn set_layout_property(
        &self,
        layer: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> BridgeResult<()> {
        let cmd = SetLayoutProperty {
            layer: layer.into(),
            name: name.into(),
            value: value.into(),
        };
        self.bridge.execute(&cmd).await.into_unit()
    }

    /// Replace or, with `None`, remove a layer filter.
    pub async fn set_filter(
        &self,
        layer: impl Into<String>,
        filter: Option<PropertyValue>,
    ) -> BridgeResult<()> {
        let cmd = SetFilter {
            layer: layer.into(),
            filter,
        };
        self.bridge.execute(&cmd).await.into_unit()
    }

    /// Set a layer's zoom bounds.
    pub async fn set_layer_zoom_range(
        &self,
        layer: impl Into<String>,
        min_zoom: f64,
        max_zoom: f64,
    ) -> BridgeResult<()> {
        let cmd = SetLayerZoomRange {
            layer: layer.into(),
            min_zoom,
            max_zoom,
        };
        self.bridge.execute(&cmd).await.into_unit()
    }

    /// Whether a layer exists.
    pub async fn has_layer(&self, id: impl Into<String>) -> BridgeResult<bool> {
        self.bridge.execute(&HasLayer(id.into())).await.into_bool()
    }

    /// Whether a source exists.
    pub async fn has_source(&self, id: impl Into<String>) -> BridgeResult<bool> {
        self.bridge.execute(&HasSource(id.into())).await.into_bool()
    }

    /// Whether a source has finished loading.
    pub async fn is_source_loaded(&self, id: impl Into<String>) -> BridgeResult<bool> {
        self.bridge
            .execute(&IsSourceLoaded(id.into()))
            .await
            .into_bool()
    }

    /// Whether the style has finished loading.
    pub async fn is_style_loaded(&self) -> BridgeResult<bool> {
        self.bridge.execute(&IsStyleLoaded).await.into_bool()
    }

    /// Layer ids, bottom to top.
    pub async fn layer_ids(&self) -> BridgeResult<Vec<String>> {
        decode_document(self.bridge.execute(&GetLayerIds).await)
    }

    /// Add every source and layer of `doc`, stopping at the first failure.
    #[tracing::instrument(skip_all, fields(sources = doc.sources.len(), layers = doc.layers.len()))]
    pub async fn install(&self, doc: &StyleDocument) -> BridgeResult<()> {
        for cmd in doc.install_commands()? {
            self.bridge.execute(cmd.as_ref()).await.into_unit()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/map/controller.rs"]
mod tests;
