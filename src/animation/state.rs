use serde::{Deserialize, Serialize};

/// Which arrangement the decorations are heading toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayState {
    /// Tree silhouette
    #[default]
    Assembled,
    /// Loose cloud around the tree
    Scattered,
}

impl DisplayState {
    pub fn is_assembled(self) -> bool {
        self == DisplayState::Assembled
    }

    pub fn flipped(self) -> Self {
        match self {
            DisplayState::Assembled => DisplayState::Scattered,
            DisplayState::Scattered => DisplayState::Assembled,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayState::Assembled => "assembled",
            DisplayState::Scattered => "scattered",
        }
    }

    /// Caption for the control that flips away from this state
    pub fn action_label(self) -> &'static str {
        match self {
            DisplayState::Assembled => "SCATTER GIFTS",
            DisplayState::Scattered => "ASSEMBLE TREE",
        }
    }
}

/// Two-valued signal owned by the UI layer
///
/// No debounce: every flip takes effect on the next frame read.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateToggle {
    state: DisplayState,
}

impl StateToggle {
    pub fn new(initial: DisplayState) -> Self {
        Self { state: initial }
    }

    pub fn get(&self) -> DisplayState {
        self.state
    }

    /// Flip and return the new state
    pub fn flip(&mut self) -> DisplayState {
        self.state = self.state.flipped();
        log::debug!("display state -> {}", self.state.label());
        self.state
    }
}
