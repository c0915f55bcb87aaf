use crate::ui::counter::control::{ButtonVariant, Control};
use crate::ui::counter::state::CounterState;
use crate::ui::theme::{
    ACCENT, ACCENT_TEXT, BODY_TEXT, FOCUS_HIGHLIGHT, GLOBAL_BORDER, HEADING_TEXT,
    SECONDARY_BORDER,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Static line shown under the heading.
pub const DESCRIPTION: &str = "I am built with ratatui - try adjusting the count!";

const BUTTON_GAP: u16 = 2;

/// Where each part of the Counter lands inside a given area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLayout {
    pub heading: Rect,
    pub description: Rect,
    pub increment: Rect,
    pub decrement: Rect,
}

impl CounterLayout {
    pub fn button(&self, control: Control) -> Rect {
        match control {
            Control::Increment => self.increment,
            Control::Decrement => self.decrement,
        }
    }

    /// Control whose button covers the given cell, if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        Control::ALL
            .into_iter()
            .find(|control| self.button(*control).contains(position))
    }
}

/// Renders a Counter section: heading, description, and the two buttons.
pub struct CounterView<'a> {
    state: &'a CounterState,
    focus: Option<Control>,
}

impl<'a> CounterView<'a> {
    pub fn new(state: &'a CounterState) -> Self {
        Self { state, focus: None }
    }

    /// Marks one control as keyboard-focused.
    pub fn focused(mut self, control: Control) -> Self {
        self.focus = Some(control);
        self
    }

    fn block() -> Block<'static> {
        Block::default()
            .title(Span::styled(" Counter ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
    }

    pub fn layout(area: Rect) -> CounterLayout {
        let inner = Self::block().inner(area);
        let [heading, _, description, _, buttons, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let increment_width = Control::Increment.button_text().chars().count() as u16;
        let decrement_width = Control::Decrement.button_text().chars().count() as u16;
        let [increment, _, decrement, _] = Layout::horizontal([
            Constraint::Length(increment_width),
            Constraint::Length(BUTTON_GAP),
            Constraint::Length(decrement_width),
            Constraint::Min(0),
        ])
        .areas(buttons);

        CounterLayout {
            heading,
            description,
            increment,
            decrement,
        }
    }

    fn button_style(&self, control: Control) -> Style {
        let base = match control.variant() {
            ButtonVariant::Primary => Style::default()
                .fg(ACCENT_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Secondary => Style::default().fg(SECONDARY_BORDER),
        };
        if self.focus == Some(control) {
            match control.variant() {
                ButtonVariant::Primary => base.add_modifier(Modifier::UNDERLINED),
                ButtonVariant::Secondary => base
                    .fg(HEADING_TEXT)
                    .bg(FOCUS_HIGHLIGHT)
                    .add_modifier(Modifier::UNDERLINED),
            }
        } else {
            base
        }
    }
}

impl Widget for CounterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Self::layout(area);
        Self::block().render(area, buf);

        Paragraph::new(self.state.heading())
            .style(
                Style::default()
                    .fg(HEADING_TEXT)
                    .add_modifier(Modifier::BOLD),
            )
            .render(layout.heading, buf);
        Paragraph::new(DESCRIPTION)
            .style(Style::default().fg(BODY_TEXT))
            .render(layout.description, buf);

        for control in Control::ALL {
            Paragraph::new(control.button_text())
                .style(self.button_style(control))
                .render(layout.button(control), buf);
        }
    }
}
