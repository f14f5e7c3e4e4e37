//! Per-instance interaction state

use serde::{Deserialize, Serialize};

/// Discrete size class of a control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlSize {
    Large,
    #[default]
    Regular,
    Small,
    Mini,
}

impl ControlSize {
    /// Factor applied to regular-size paddings and heights from the theme or
    /// the built-in tables. Overrides are absolute and never scaled.
    pub fn scale(self) -> f32 {
        match self {
            ControlSize::Large => 1.25,
            ControlSize::Regular => 1.0,
            ControlSize::Small => 0.8,
            ControlSize::Mini => 0.65,
        }
    }

    /// Built-in label font size
    pub fn font_size(self) -> f32 {
        match self {
            ControlSize::Large => 15.0,
            ControlSize::Regular => 13.0,
            ControlSize::Small => 11.0,
            ControlSize::Mini => 9.0,
        }
    }
}

/// Semantic role of a control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlRole {
    #[default]
    Normal,
    /// Default action, drawn with the accent color
    Primary,
    /// Destructive action, drawn with the danger color
    Destructive,
}

/// Interaction state snapshot of one component instance
///
/// Recomputed by the component on every interaction event and never shared
/// between instances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ComponentState {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
    pub disabled: bool,
    pub selected: bool,
    /// Explicit size tier; `None` inherits the environment's tier
    pub control_size: Option<ControlSize>,
    pub role: ControlRole,
}

impl ComponentState {
    /// Idle state: nothing hovered, pressed, or disabled
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn control_size(mut self, size: ControlSize) -> Self {
        self.control_size = Some(size);
        self
    }

    pub fn role(mut self, role: ControlRole) -> Self {
        self.role = role;
        self
    }

    /// Hovered or pressed while enabled
    pub fn is_engaged(&self) -> bool {
        !self.disabled && (self.hovered || self.pressed)
    }
}
