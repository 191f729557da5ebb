use serde::Serialize;

use crate::command::{Command, MAP, ResultShape};
use crate::foundation::core::{LngLat, LngLatBounds, Padding};
use crate::foundation::error::{BridgeError, BridgeResult};
use crate::foundation::script::{ScriptCall, encode_document};
use crate::style::layer::MAX_ZOOM;

/// Target camera for `jumpTo`, `flyTo` and `easeTo`. Unset fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CameraOptions {
    /// Map center.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LngLat>,
    /// Zoom level.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::foundation::script::finite_opt"
    )]
    pub zoom: Option<f64>,
    /// Bearing in degrees.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::foundation::script::finite_opt"
    )]
    pub bearing: Option<f64>,
    /// Pitch in degrees.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::foundation::script::finite_opt"
    )]
    pub pitch: Option<f64>,
    /// Viewport padding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

/// Animation controls merged into the camera document of animated transitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AnimationOptions {
    /// Duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    /// `flyTo` speed factor.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::foundation::script::finite_opt"
    )]
    pub speed: Option<f64>,
    /// `flyTo` zoom curve.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::foundation::script::finite_opt"
    )]
    pub curve: Option<f64>,
    /// Animate even when the user prefers reduced motion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub essential: Option<bool>,
}

/// Options for `fitBounds`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FitBoundsOptions {
    /// Padding around the bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    /// Upper zoom limit for the fitted camera.
    #[serde(
        rename = "maxZoom",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::foundation::script::finite_opt"
    )]
    pub max_zoom: Option<f64>,
    /// Use a linear transition instead of a flight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linear: Option<bool>,
    /// Duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

#[derive(Serialize)]
struct AnimatedCamera<'a> {
    #[serde(flatten)]
    camera: &'a CameraOptions,
    #[serde(flatten)]
    animation: Option<&'a AnimationOptions>,
}

fn map_call(method: &str) -> ScriptCall {
    ScriptCall::method(MAP, method)
}

/// `map.getZoom();`
#[derive(Clone, Debug, PartialEq)]
pub struct GetZoom;

impl Command for GetZoom {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("getZoom").statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Number
    }
}

/// `map.setZoom(z);`
#[derive(Clone, Debug, PartialEq)]
pub struct SetZoom(pub f64);

impl Command for SetZoom {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("setZoom").arg(self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `JSON.stringify(map.getCenter());`
#[derive(Clone, Debug, PartialEq)]
pub struct GetCenter;

impl Command for GetCenter {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("getCenter").stringified())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Document
    }
}

/// `map.setCenter([lng,lat]);`
#[derive(Clone, Debug, PartialEq)]
pub struct SetCenter(pub LngLat);

impl Command for SetCenter {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("setCenter").arg(self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.getBearing();`
#[derive(Clone, Debug, PartialEq)]
pub struct GetBearing;

impl Command for GetBearing {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("getBearing").statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Number
    }
}

/// `map.setBearing(deg);`
#[derive(Clone, Debug, PartialEq)]
pub struct SetBearing(pub f64);

impl Command for SetBearing {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("setBearing").arg(self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.getPitch();`
#[derive(Clone, Debug, PartialEq)]
pub struct GetPitch;

impl Command for GetPitch {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("getPitch").statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Number
    }
}

/// `map.setPitch(deg);`
#[derive(Clone, Debug, PartialEq)]
pub struct SetPitch(pub f64);

impl Command for SetPitch {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("setPitch").arg(self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.zoomIn([options]);`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoomIn(pub Option<AnimationOptions>);

impl Command for ZoomIn {
    fn render(&self) -> BridgeResult<String> {
        let options = self.0.as_ref().map(encode_document).transpose()?;
        Ok(map_call("zoomIn").opt_raw_arg(options).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.zoomOut([options]);`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoomOut(pub Option<AnimationOptions>);

impl Command for ZoomOut {
    fn render(&self) -> BridgeResult<String> {
        let options = self.0.as_ref().map(encode_document).transpose()?;
        Ok(map_call("zoomOut").opt_raw_arg(options).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.jumpTo({...});`
#[derive(Clone, Debug, PartialEq)]
pub struct JumpTo(pub CameraOptions);

impl Command for JumpTo {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("jumpTo")
            .raw_arg(encode_document(&self.0)?)
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.flyTo({...camera, ...animation});`
#[derive(Clone, Debug, PartialEq)]
pub struct FlyTo {
    /// Target camera.
    pub camera: CameraOptions,
    /// Flight controls.
    pub animation: Option<AnimationOptions>,
}

impl Command for FlyTo {
    fn render(&self) -> BridgeResult<String> {
        let doc = encode_document(&AnimatedCamera {
            camera: &self.camera,
            animation: self.animation.as_ref(),
        })?;
        Ok(map_call("flyTo").raw_arg(doc).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.easeTo({...camera, ...animation});`
#[derive(Clone, Debug, PartialEq)]
pub struct EaseTo {
    /// Target camera.
    pub camera: CameraOptions,
    /// Transition controls.
    pub animation: Option<AnimationOptions>,
}

impl Command for EaseTo {
    fn render(&self) -> BridgeResult<String> {
        let doc = encode_document(&AnimatedCamera {
            camera: &self.camera,
            animation: self.animation.as_ref(),
        })?;
        Ok(map_call("easeTo").raw_arg(doc).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.fitBounds([[sw],[ne]][, options]);`
#[derive(Clone, Debug, PartialEq)]
pub struct FitBounds {
    /// Bounds to fit.
    pub bounds: LngLatBounds,
    /// Optional fit controls; omitted from the call when absent.
    pub options: Option<FitBoundsOptions>,
}

impl Command for FitBounds {
    fn render(&self) -> BridgeResult<String> {
        self.bounds.validate()?;
        let options = self.options.as_ref().map(encode_document).transpose()?;
        Ok(map_call("fitBounds")
            .arg(self.bounds)
            .opt_raw_arg(options)
            .statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `JSON.stringify(map.getBounds());`
#[derive(Clone, Debug, PartialEq)]
pub struct GetBounds;

impl Command for GetBounds {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("getBounds").stringified())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Document
    }
}

/// `map.setMaxBounds(bounds);`, where `None` renders `null` and clears the restriction.
#[derive(Clone, Debug, PartialEq)]
pub struct SetMaxBounds(pub Option<LngLatBounds>);

impl Command for SetMaxBounds {
    fn render(&self) -> BridgeResult<String> {
        if let Some(bounds) = &self.0 {
            bounds.validate()?;
        }
        Ok(map_call("setMaxBounds").arg(self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

fn check_zoom_limit(z: Option<f64>) -> BridgeResult<()> {
    match z {
        Some(z) if !(0.0..=MAX_ZOOM).contains(&z) => Err(BridgeError::validation(format!(
            "zoom limit {z} must be within [0, 24]"
        ))),
        _ => Ok(()),
    }
}

/// `map.setMinZoom(z);`, where `None` renders `null` and restores the default.
#[derive(Clone, Debug, PartialEq)]
pub struct SetMinZoom(pub Option<f64>);

impl Command for SetMinZoom {
    fn render(&self) -> BridgeResult<String> {
        check_zoom_limit(self.0)?;
        Ok(map_call("setMinZoom").arg(self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.setMaxZoom(z);`, where `None` renders `null` and restores the default.
#[derive(Clone, Debug, PartialEq)]
pub struct SetMaxZoom(pub Option<f64>);

impl Command for SetMaxZoom {
    fn render(&self) -> BridgeResult<String> {
        check_zoom_limit(self.0)?;
        Ok(map_call("setMaxZoom").arg(self.0).statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::None
    }
}

/// `map.isMoving();`
#[derive(Clone, Debug, PartialEq)]
pub struct IsMoving;

impl Command for IsMoving {
    fn render(&self) -> BridgeResult<String> {
        Ok(map_call("isMoving").statement())
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Bool
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/camera.rs"]
mod tests;
