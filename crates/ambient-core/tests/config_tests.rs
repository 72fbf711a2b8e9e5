// Host-side tests for variants, config validation, palettes and theme values.

use ambient_core::*;

#[test]
fn variants_map_to_their_configs() {
    let classic = BackdropConfig::for_variant(Variant::Classic);
    assert_eq!(classic.orb_count, CLASSIC_ORB_COUNT);
    assert_eq!(classic.palette, Palette::classic());
    assert_eq!(classic.overlay.pattern, OverlayPattern::Noise);

    let paired = BackdropConfig::for_variant(Variant::Paired);
    assert_eq!(paired.orb_count, PAIRED_ORB_COUNT);
    assert_eq!(paired.palette, Palette::paired());
    assert_eq!(paired.overlay.pattern, OverlayPattern::Glyphs);

    assert_eq!(BackdropConfig::default(), classic);
    for v in Variant::all() {
        assert!(BackdropConfig::for_variant(*v).validate().is_ok());
    }
}

#[test]
fn variant_ids_round_trip_and_default() {
    for v in Variant::all() {
        assert_eq!(Variant::from_id(v.id()).unwrap(), *v);
    }
    assert_eq!(Variant::from_id("").unwrap(), Variant::Classic);
    assert_eq!(Variant::from_id(" Paired ").unwrap(), Variant::Paired);
    match Variant::from_id("sparkles") {
        Err(BackdropError::UnknownVariant(id)) => assert_eq!(id, "sparkles"),
        other => panic!("expected UnknownVariant, got {other:?}"),
    }
}

#[test]
fn validate_rejects_out_of_range_values() {
    let base = BackdropConfig::default();
    let bad = [
        BackdropConfig { orb_count: 0, ..base.clone() },
        BackdropConfig { orb_count: MAX_ORBS + 1, ..base.clone() },
        BackdropConfig { speed: -0.1, ..base.clone() },
        BackdropConfig { speed: f32::NAN, ..base.clone() },
        BackdropConfig { radius_min: 0.0, ..base.clone() },
        BackdropConfig { radius_span: -1.0, ..base.clone() },
        BackdropConfig { palette: Palette::new(&[], &[]), ..base.clone() },
        BackdropConfig {
            palette: Palette::new(&PAIRED_DARK_COLORS, &CLASSIC_COLORS),
            ..base.clone()
        },
    ];
    for config in bad {
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BackdropError::InvalidConfig(_)), "{err}");
    }
    assert!(BackdropConfig { speed: 0.0, radius_span: 0.0, ..base }.validate().is_ok());
}

#[test]
fn log_level_attr_defaults_to_info() {
    assert_eq!(log_level_from_attr(None), log::Level::Info);
    assert_eq!(log_level_from_attr(Some("")), log::Level::Info);
    assert_eq!(log_level_from_attr(Some("chatty")), log::Level::Info);
    assert_eq!(log_level_from_attr(Some("debug")), log::Level::Debug);
    assert_eq!(log_level_from_attr(Some(" WARN ")), log::Level::Warn);
}

#[test]
fn palette_picks_by_theme_and_wraps_slots() {
    let p = Palette::paired();
    assert_eq!(p.len(), 4);
    assert_eq!(p.color(0, Theme::Dark), PAIRED_DARK_COLORS[0]);
    assert_eq!(p.color(2, Theme::Light), PAIRED_LIGHT_COLORS[2]);
    assert_eq!(p.color(5, Theme::Dark), PAIRED_DARK_COLORS[1]);

    let classic = Palette::classic();
    assert_eq!(classic.color(1, Theme::Dark), classic.color(1, Theme::Light));
    assert_eq!(Palette::new(&[], &[]).color(0, Theme::Dark), Rgba::transparent());
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(CLASSIC_COLORS[0].to_css(), "rgba(59, 130, 246, 0.03)");
    assert_eq!(Rgba::new(236, 72, 153, 0.5).to_css(), "rgba(236, 72, 153, 0.5)");
}

#[test]
fn theme_helpers() {
    assert_eq!(Theme::from_dark_flag(true), Theme::Dark);
    assert_eq!(Theme::from_dark_flag(false), Theme::Light);
    assert!(Theme::Dark.is_dark());
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::default(), Theme::Light);

    let shared = SharedTheme::new(Theme::Light);
    let reader = shared.clone();
    shared.toggle();
    assert_eq!(reader.current(), Theme::Dark);
    shared.set(Theme::Light);
    assert_eq!(reader.current(), Theme::Light);
    assert_eq!(Theme::Dark.current(), Theme::Dark);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(CLASSIC_ORB_COUNT <= MAX_ORBS);
    assert!(PAIRED_ORB_COUNT <= MAX_ORBS);
    assert_eq!(CLASSIC_COLORS.len(), CLASSIC_ORB_COUNT);
    assert_eq!(PAIRED_DARK_COLORS.len(), PAIRED_ORB_COUNT);
    assert_eq!(PAIRED_LIGHT_COLORS.len(), PAIRED_ORB_COUNT);

    // Orbs drift far slower than they are wide, so they never skip a seam
    assert!(ORB_SPEED / 2.0 < ORB_RADIUS_MIN);
    assert!(ORB_RADIUS_MIN > 0.0 && ORB_RADIUS_SPAN > 0.0);

    for o in [NOISE_OPACITY_LIGHT, NOISE_OPACITY_DARK, GLYPH_OPACITY_LIGHT, GLYPH_OPACITY_DARK] {
        assert!(o > 0.0 && o < 1.0);
    }
    for c in CLASSIC_COLORS.iter().chain(&PAIRED_DARK_COLORS).chain(&PAIRED_LIGHT_COLORS) {
        assert!(c.a > 0.0 && c.a <= 1.0);
    }
}
