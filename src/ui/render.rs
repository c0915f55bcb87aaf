use crate::ui::app::App;
use crate::ui::counter::CounterView;
use crate::ui::footer::Footer;
use crate::ui::layout::{layout_regions, section_rect};
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Draws one full frame and records the Counter's layout on the app.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (body, footer) = layout_regions(area);
    let section = section_rect(body);

    frame.render_widget(Clear, body);
    frame.render_widget(CounterView::new(app.counter()).focused(app.focus()), section);
    app.set_layout(CounterView::layout(section));

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}
