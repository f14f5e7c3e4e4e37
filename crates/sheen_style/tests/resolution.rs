use sheen_core::{Color, EdgeInsets, Material};
use sheen_style::{
    keys, resolve_style, ButtonStyle, ComponentKind, ComponentState, ControlRole, ControlSize,
    Environment, IconAlignment, LabelTier, ListItemStyle, ListStyle, Overrides, ScrollerStyle,
    Source, StyleContext, ThemeRef,
};
use sheen_theme::themes::default::light;
use sheen_theme::{Appearance, CornerRounding, GeometryToken, ThemePreset};

fn all_kinds() -> Vec<ComponentKind> {
    vec![
        ComponentKind::Button,
        ComponentKind::ListItem,
        ComponentKind::List {
            content_height: 180.0,
        },
        ComponentKind::Scroller,
        ComponentKind::Divider,
        ComponentKind::Label(LabelTier::Primary),
        ComponentKind::Label(LabelTier::Secondary),
        ComponentKind::Label(LabelTier::Tertiary),
    ]
}

fn sample_states() -> Vec<ComponentState> {
    let idle = ComponentState::idle();
    vec![
        idle,
        idle.hovered(true),
        idle.hovered(true).pressed(true),
        idle.focused(true),
        idle.disabled(true),
        idle.selected(true),
        idle.role(ControlRole::Primary),
        idle.role(ControlRole::Destructive).hovered(true),
        idle.control_size(ControlSize::Mini),
    ]
}

fn busy_environment() -> Environment {
    Environment::root()
        .scoped(
            Overrides::new()
                .set(keys::BUTTON_BORDERED, true)
                .set(keys::TINT, Color::from_hex(0xff9500))
                .set(keys::LIST_FIXED_HEIGHT, 200.0),
        )
        .scoped(
            Overrides::new()
                .set(keys::LIST_MATERIAL, Material::Sidebar)
                .set(keys::CONTROL_SIZE, ControlSize::Small),
        )
}

#[test]
fn test_resolution_is_deterministic() {
    for preset in ThemePreset::all() {
        let theme = preset.build();
        for env in [Environment::root(), busy_environment()] {
            for appearance in [Appearance::Light, Appearance::Dark] {
                let cx = StyleContext::new(&theme, &env, appearance);
                for kind in all_kinds() {
                    for state in sample_states() {
                        let first = serde_json::to_string(&resolve_style(&cx, kind, &state))
                            .expect("style serializes");
                        let second = serde_json::to_string(&resolve_style(&cx, kind, &state))
                            .expect("style serializes");
                        assert_eq!(first, second, "{kind:?} {state:?} {appearance}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_overrides_win_regardless_of_theme() {
    let insets = EdgeInsets::symmetric(20.0, 2.0);
    let env = Environment::root().scoped(
        Overrides::new()
            .set(keys::BUTTON_CORNER_RADIUS, 3.0)
            .set(keys::BUTTON_PADDING, insets)
            .set(keys::BUTTON_MIN_HEIGHT, 40.0)
            .set(keys::ICON_SPACING, 11.0)
            .set(keys::ICON_ALIGNMENT, IconAlignment::Trailing)
            .set(keys::BUTTON_MATERIAL, Material::HudWindow)
            .set(keys::LIST_ITEM_CORNER_RADIUS, 0.0)
            .set(keys::SCROLLER_WIDTH, 14.0)
            .set(keys::SCROLLER_THUMB_COLOR, Color::WHITE)
            .set(keys::SCROLLER_ALWAYS_VISIBLE, true),
    );

    for preset in ThemePreset::all() {
        let theme = preset.build();
        let cx = StyleContext::new(&theme, &env, Appearance::Light);
        let state = ComponentState::idle().control_size(ControlSize::Large);

        let button = ButtonStyle::resolve(&cx, &state);
        assert_eq!(button.corner_radius, 3.0);
        assert_eq!(button.padding, insets);
        assert_eq!(button.min_height, 40.0);
        assert_eq!(button.icon_spacing, 11.0);
        assert_eq!(button.icon_alignment, IconAlignment::Trailing);
        assert_eq!(button.material, Material::HudWindow);

        assert_eq!(ListItemStyle::resolve(&cx, &state).corner_radius, 0.0);

        let scroller = ScrollerStyle::resolve(&cx, &state);
        assert_eq!(scroller.width, 14.0);
        assert_eq!(scroller.thumb_color, Color::WHITE);
        assert!(scroller.always_visible);
    }
}

#[test]
fn test_fallback_chain() {
    // Default leaves the scroller width to the built-in constant
    let default = ThemePreset::Default.build();
    let graphite = ThemePreset::Graphite.build();
    let root = Environment::root();

    let cx = StyleContext::new(&default, &root, Appearance::Light);
    let width = cx.lookup_geometry(keys::SCROLLER_WIDTH, GeometryToken::ScrollerWidth);
    assert_eq!(width.source, Source::Builtin);
    assert_eq!(width.value, 8.0);
    assert_eq!(ScrollerStyle::resolve(&cx, &ComponentState::idle()).width, 8.0);

    let cx = StyleContext::new(&graphite, &root, Appearance::Light);
    let width = cx.lookup_geometry(keys::SCROLLER_WIDTH, GeometryToken::ScrollerWidth);
    assert_eq!(width.source, Source::Theme);
    assert_eq!(Some(width.value), graphite.geometry().scroller_width);

    let env = root.scoped(Overrides::new().set(keys::SCROLLER_WIDTH, 5.0));
    let cx = StyleContext::new(&graphite, &env, Appearance::Light);
    let width = cx.lookup_geometry(keys::SCROLLER_WIDTH, GeometryToken::ScrollerWidth);
    assert_eq!(width.source, Source::Override);
    assert_eq!(width.value, 5.0);

    // Removing the override falls back to the theme again
    let cx = StyleContext::new(&graphite, &root, Appearance::Light);
    assert_eq!(
        ScrollerStyle::resolve(&cx, &ComponentState::idle()).width,
        graphite.geometry().scroller_width.unwrap_or_default()
    );
}

#[test]
fn test_default_builtin_constants() {
    let theme = ThemePreset::Default.build();
    let env = Environment::root();
    let cx = StyleContext::new(&theme, &env, Appearance::Light);
    let idle = ComponentState::idle();

    let item = ListItemStyle::resolve(&cx, &idle);
    assert_eq!(item.corner_radius, 6.0);
    assert_eq!(item.padding, EdgeInsets::symmetric(10.0, 6.0));
    let divider = item.divider.expect("dividers are on by default");
    assert_eq!(divider.inset, 0.0);

    let button = ButtonStyle::resolve(&cx, &idle);
    assert_eq!(button.min_height, 28.0);
    assert_eq!(button.icon_spacing, 6.0);
}

#[test]
fn test_appearance_changes_only_colors() {
    let theme = ThemePreset::Default.build();
    let env = busy_environment();
    let light_cx = StyleContext::new(&theme, &env, Appearance::Light);
    let dark_cx = StyleContext::new(&theme, &env, Appearance::Dark);
    let state = ComponentState::idle().hovered(true);

    let light_button = ButtonStyle::resolve(&light_cx, &state);
    let dark_button = ButtonStyle::resolve(&dark_cx, &state);
    assert_ne!(light_button.foreground, dark_button.foreground);
    assert_ne!(light_button.background, dark_button.background);
    assert_eq!(light_button.corner_radius, dark_button.corner_radius);
    assert_eq!(light_button.padding, dark_button.padding);
    assert_eq!(light_button.min_height, dark_button.min_height);
    assert_eq!(light_button.border_width, dark_button.border_width);
    assert_eq!(light_button.icon_spacing, dark_button.icon_spacing);

    let light_list = ListStyle::resolve(&light_cx, &state, 120.0);
    let dark_list = ListStyle::resolve(&dark_cx, &state, 120.0);
    assert_ne!(light_list.background, dark_list.background);
    assert_eq!(light_list.corners, dark_list.corners);
    assert_eq!(light_list.content_spacing, dark_list.content_spacing);
}

#[test]
fn test_conditional_rounding_boundaries() {
    let threshold = 200.0;
    let theme = ThemePreset::Default.build();
    let env = Environment::root().scoped(Overrides::new().set(keys::LIST_FIXED_HEIGHT, threshold));
    let cx = StyleContext::new(&theme, &env, Appearance::Light);
    let idle = ComponentState::idle();

    for (height, rounded) in [
        (threshold - 1.0, true),
        (threshold, true),
        (threshold + 1.0, false),
    ] {
        let list = ListStyle::resolve(&cx, &idle, height);
        assert_eq!(list.top_rounding, CornerRounding::ConditionalOnFixedHeight);
        assert_eq!(list.top_rounded, rounded, "height {height}");
        assert_eq!(list.bottom_rounded, rounded, "height {height}");
    }

    // Without a threshold the list is unbounded and stays square
    let root = Environment::root();
    let cx = StyleContext::new(&theme, &root, Appearance::Light);
    assert!(!ListStyle::resolve(&cx, &idle, 1.0).top_rounded);
}

#[test]
fn test_never_and_always_ignore_content_height() {
    let theme = ThemePreset::Default.build();
    let env = Environment::root().scoped(
        Overrides::new()
            .set(keys::LIST_FIXED_HEIGHT, 100.0)
            .set(keys::LIST_TOP_ROUNDING, CornerRounding::Always)
            .set(keys::LIST_BOTTOM_ROUNDING, CornerRounding::Never),
    );
    let cx = StyleContext::new(&theme, &env, Appearance::Light);

    for height in [0.0, 100.0, 5_000.0] {
        let list = ListStyle::resolve(&cx, &ComponentState::idle(), height);
        assert!(list.top_rounded);
        assert!(!list.bottom_rounded);
    }
}

#[test]
fn test_button_end_to_end() {
    let theme: ThemeRef = ThemePreset::Default.build();
    let root = Environment::root();
    let idle = ComponentState::idle();

    let cx = StyleContext::new(&theme, &root, Appearance::Light);
    let baseline = ButtonStyle::resolve(&cx, &idle);
    assert_eq!(Some(baseline.corner_radius), theme.geometry().button_corner_radius);
    assert_eq!(baseline.corner_radius, 6.0);
    assert_eq!(baseline.foreground, light::LABEL);

    for radius in [0.0, 2.5, 20.0] {
        let env = root.scoped(Overrides::new().set(keys::BUTTON_CORNER_RADIUS, radius));
        let cx = StyleContext::new(&theme, &env, Appearance::Light);
        let styled = ButtonStyle::resolve(&cx, &idle);
        assert_eq!(
            styled,
            ButtonStyle {
                corner_radius: radius,
                ..baseline.clone()
            }
        );
    }
}
