use sheen_core::Color;
use sheen_style::{
    keys, ButtonStyle, ComponentKind, ComponentState, CompositionPass, Environment, Overrides,
    ResolvedStyle, StyleContext, StyleObserver,
};
use sheen_theme::{Appearance, ThemePreset};

/// Minimal composition tree: each node may attach overrides and holds a button
struct Node {
    name: &'static str,
    overrides: Overrides,
    children: Vec<Node>,
}

impl Node {
    fn new(name: &'static str, overrides: Overrides, children: Vec<Node>) -> Self {
        Self {
            name,
            overrides,
            children,
        }
    }
}

fn walk(pass: &mut CompositionPass, node: &Node, out: &mut Vec<(&'static str, f32)>) {
    pass.with_scope(node.overrides.clone(), |pass| {
        match pass.resolve(ComponentKind::Button, &ComponentState::idle()) {
            ResolvedStyle::Button(button) => out.push((node.name, button.corner_radius)),
            other => panic!("unexpected style {other:?}"),
        }
        for child in &node.children {
            walk(pass, child, out);
        }
    });
}

#[test]
fn test_override_visible_exactly_in_subtree() {
    let tree = Node::new(
        "window",
        Overrides::new(),
        vec![
            Node::new(
                "sidebar",
                Overrides::new().set(keys::BUTTON_CORNER_RADIUS, 2.0),
                vec![
                    Node::new("sidebar.row", Overrides::new(), vec![]),
                    Node::new(
                        "sidebar.pill",
                        Overrides::new().set(keys::BUTTON_CORNER_RADIUS, 14.0),
                        vec![],
                    ),
                    Node::new("sidebar.footer", Overrides::new(), vec![]),
                ],
            ),
            Node::new("content", Overrides::new(), vec![]),
        ],
    );

    let mut pass = CompositionPass::new(ThemePreset::Default.build(), Appearance::Light);
    let mut radii = Vec::new();
    walk(&mut pass, &tree, &mut radii);

    assert_eq!(
        radii,
        vec![
            ("window", 6.0),
            ("sidebar", 2.0),
            ("sidebar.row", 2.0),
            ("sidebar.pill", 14.0),
            ("sidebar.footer", 2.0),
            ("content", 6.0),
        ]
    );
    assert!(pass.environment().is_root());
}

#[test]
fn test_scoped_environment_leaves_parent_untouched() {
    let parent = Environment::root().scoped(Overrides::new().set(keys::LIST_HAS_DIVIDER, false));
    let child = parent.scoped(Overrides::new().set(keys::TINT, Color::WHITE));

    assert_eq!(child.get(keys::LIST_HAS_DIVIDER), Some(false));
    assert_eq!(child.get(keys::TINT), Some(Color::WHITE));
    assert_eq!(parent.get(keys::TINT), None);
    assert_eq!(parent.depth(), 1);
    assert_eq!(child.depth(), 2);
}

#[test]
fn test_pass_starts_from_application_environment() {
    let app = Environment::root().scoped(Overrides::new().set(keys::BUTTON_BORDERED, true));
    let mut pass = CompositionPass::with_environment(
        ThemePreset::Graphite.build(),
        Appearance::Dark,
        app,
    );

    {
        let scope = pass.enter(Overrides::new().set(keys::BUTTON_BORDERED, false));
        assert_eq!(scope.environment().get(keys::BUTTON_BORDERED), Some(false));
    }
    assert_eq!(pass.environment().get(keys::BUTTON_BORDERED), Some(true));
    assert_eq!(pass.environment().depth(), 1);
}

#[test]
fn test_observer_follows_pass_scopes() {
    let mut pass = CompositionPass::new(ThemePreset::Default.build(), Appearance::Light);
    let mut observer = StyleObserver::<ButtonStyle>::new();
    let idle = ComponentState::idle();

    assert!(observer.observe(&pass.context(), &idle, &()).is_some());
    assert!(observer.observe(&pass.context(), &idle, &()).is_none());

    {
        let scope = pass.enter(Overrides::new().set(keys::BUTTON_CORNER_RADIUS, 9.0));
        let radius = observer
            .observe(&scope.context(), &idle, &())
            .map(|style| style.corner_radius);
        assert_eq!(radius, Some(9.0));
    }

    // Leaving the scope is itself an input change
    let radius = observer
        .observe(&pass.context(), &idle, &())
        .map(|style| style.corner_radius);
    assert_eq!(radius, Some(6.0));

    pass.set_appearance(Appearance::Dark);
    let cx: StyleContext<'_> = pass.context();
    let style = observer.observe(&cx, &idle, &()).cloned();
    assert_eq!(style, Some(ButtonStyle::resolve(&cx, &idle)));
}
