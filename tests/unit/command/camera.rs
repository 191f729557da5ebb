use super::*;

fn bounds() -> LngLatBounds {
    LngLatBounds::new(LngLat::new(-10.0, -5.0), LngLat::new(10.0, 5.0))
}

#[test]
fn scalar_getters_are_bare_statements() {
    assert_eq!(GetZoom.render().unwrap(), "map.getZoom();");
    assert_eq!(GetZoom.shape(), ResultShape::Number);
    assert_eq!(GetBearing.render().unwrap(), "map.getBearing();");
    assert_eq!(GetPitch.render().unwrap(), "map.getPitch();");
    assert_eq!(IsMoving.render().unwrap(), "map.isMoving();");
    assert_eq!(IsMoving.shape(), ResultShape::Bool);
}

#[test]
fn structured_getters_are_stringified() {
    assert_eq!(
        GetCenter.render().unwrap(),
        "JSON.stringify(map.getCenter());"
    );
    assert_eq!(
        GetBounds.render().unwrap(),
        "JSON.stringify(map.getBounds());"
    );
    assert!(GetBounds.shape().is_document());
}

#[test]
fn setters_render_numbers_with_a_fraction() {
    assert_eq!(SetZoom(5.0).render().unwrap(), "map.setZoom(5.0);");
    assert_eq!(SetBearing(-17.5).render().unwrap(), "map.setBearing(-17.5);");
    assert_eq!(SetPitch(f64::NAN).render().unwrap(), "map.setPitch(0.0);");
    assert_eq!(
        SetCenter(LngLat::new(2.35, 48.85)).render().unwrap(),
        "map.setCenter([2.35,48.85]);"
    );
    assert_eq!(SetZoom(5.0).shape(), ResultShape::None);
}

#[test]
fn fit_bounds_without_options_has_a_single_argument() {
    let cmd = FitBounds {
        bounds: bounds(),
        options: None,
    };
    assert_eq!(
        cmd.render().unwrap(),
        "map.fitBounds([[-10.0,-5.0],[10.0,5.0]]);"
    );
}

#[test]
fn fit_bounds_options_use_wire_names() {
    let cmd = FitBounds {
        bounds: bounds(),
        options: Some(FitBoundsOptions {
            padding: Some(Padding::uniform(10.0)),
            max_zoom: Some(12.0),
            duration: Some(250),
            ..FitBoundsOptions::default()
        }),
    };
    assert_eq!(
        cmd.render().unwrap(),
        "map.fitBounds([[-10.0,-5.0],[10.0,5.0]], \
         {\"padding\":{\"top\":10.0,\"bottom\":10.0,\"left\":10.0,\"right\":10.0},\
         \"maxZoom\":12.0,\"duration\":250});"
    );
}

#[test]
fn fit_bounds_rejects_inverted_latitudes() {
    let cmd = FitBounds {
        bounds: LngLatBounds::new(LngLat::new(0.0, 10.0), LngLat::new(1.0, -10.0)),
        options: None,
    };
    assert!(matches!(cmd.render(), Err(BridgeError::Validation(_))));
}

#[test]
fn clearing_limits_renders_explicit_null() {
    assert_eq!(SetMaxBounds(None).render().unwrap(), "map.setMaxBounds(null);");
    assert_eq!(
        SetMaxBounds(Some(bounds())).render().unwrap(),
        "map.setMaxBounds([[-10.0,-5.0],[10.0,5.0]]);"
    );
    assert_eq!(SetMinZoom(None).render().unwrap(), "map.setMinZoom(null);");
    assert_eq!(SetMaxZoom(Some(18.0)).render().unwrap(), "map.setMaxZoom(18.0);");
}

#[test]
fn zoom_limits_outside_range_are_rejected() {
    assert!(SetMinZoom(Some(-1.0)).render().is_err());
    assert!(SetMaxZoom(Some(25.0)).render().is_err());
}

#[test]
fn zoom_in_drops_absent_options() {
    assert_eq!(ZoomIn(None).render().unwrap(), "map.zoomIn();");
    let opts = AnimationOptions {
        duration: Some(300),
        ..AnimationOptions::default()
    };
    assert_eq!(
        ZoomOut(Some(opts)).render().unwrap(),
        "map.zoomOut({\"duration\":300});"
    );
}

#[test]
fn jump_to_omits_unset_fields() {
    let cmd = JumpTo(CameraOptions {
        center: Some(LngLat::new(1.0, 2.0)),
        pitch: Some(45.0),
        ..CameraOptions::default()
    });
    assert_eq!(
        cmd.render().unwrap(),
        "map.jumpTo({\"center\":[1.0,2.0],\"pitch\":45.0});"
    );
}

#[test]
fn fly_to_merges_camera_and_animation() {
    let cmd = FlyTo {
        camera: CameraOptions {
            center: Some(LngLat::new(1.0, 2.0)),
            zoom: Some(3.0),
            ..CameraOptions::default()
        },
        animation: Some(AnimationOptions {
            duration: Some(500),
            essential: Some(true),
            ..AnimationOptions::default()
        }),
    };
    assert_eq!(
        cmd.render().unwrap(),
        "map.flyTo({\"center\":[1.0,2.0],\"zoom\":3.0,\"duration\":500,\"essential\":true});"
    );
}

#[test]
fn ease_to_without_animation_is_camera_only() {
    let cmd = EaseTo {
        camera: CameraOptions {
            bearing: Some(90.0),
            ..CameraOptions::default()
        },
        animation: None,
    };
    assert_eq!(cmd.render().unwrap(), "map.easeTo({\"bearing\":90.0});");
}

#[test]
fn rendering_is_deterministic() {
    let cmd = FitBounds {
        bounds: bounds(),
        options: Some(FitBoundsOptions {
            linear: Some(true),
            ..FitBoundsOptions::default()
        }),
    };
    assert_eq!(cmd.render().unwrap(), cmd.clone().render().unwrap());
}
