use serde::{Deserialize, Serialize};

/// Modifier keys held while an input event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub control: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    #[must_use]
    pub const fn control() -> Self {
        Self {
            control: true,
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    #[must_use]
    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// Modifier binding used by gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKey {
    Shift,
    Control,
    Alt,
    Meta,
    /// Either Control or Meta (pinch gestures arrive as Control+wheel on most
    /// platforms, Meta is the macOS habit).
    ControlOrMeta,
}

impl ModifierKey {
    #[must_use]
    pub fn is_held(self, modifiers: Modifiers) -> bool {
        match self {
            Self::Shift => modifiers.shift,
            Self::Control => modifiers.control,
            Self::Alt => modifiers.alt,
            Self::Meta => modifiers.meta,
            Self::ControlOrMeta => modifiers.control || modifiers.meta,
        }
    }
}

/// Pointer or wheel event normalized by the host adapter.
///
/// Positions and deltas are logical pixels relative to the surface's
/// bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    #[serde(default)]
    pub delta_x: f64,
    #[serde(default)]
    pub delta_y: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    #[must_use]
    pub const fn at(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            delta_x: 0.0,
            delta_y: 0.0,
            modifiers: Modifiers::NONE,
        }
    }

    #[must_use]
    pub const fn wheel(client_x: f64, client_y: f64, delta_x: f64, delta_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            delta_x,
            delta_y,
            modifiers: Modifiers::NONE,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.client_x.is_finite()
            && self.client_y.is_finite()
            && self.delta_x.is_finite()
            && self.delta_y.is_finite()
    }
}
