use crate::ui::counter::intent::CounterIntent;

/// The two interactive controls rendered by the Counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Increment,
    Decrement,
}

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the accent color.
    Primary,
    /// Outlined only.
    Secondary,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::Increment, Control::Decrement];

    pub fn label(self) -> &'static str {
        match self {
            Control::Increment => "Increment",
            Control::Decrement => "Decrement",
        }
    }

    pub fn variant(self) -> ButtonVariant {
        match self {
            Control::Increment => ButtonVariant::Primary,
            Control::Decrement => ButtonVariant::Secondary,
        }
    }

    pub fn intent(self) -> CounterIntent {
        match self {
            Control::Increment => CounterIntent::Increment,
            Control::Decrement => CounterIntent::Decrement,
        }
    }

    /// The other control. With two controls, next and previous coincide.
    pub fn toggled(self) -> Self {
        match self {
            Control::Increment => Control::Decrement,
            Control::Decrement => Control::Increment,
        }
    }

    /// Rendered button text, e.g. `[ Increment ]`.
    pub fn button_text(self) -> String {
        format!("[ {} ]", self.label())
    }
}
