//! Vertical bar chart primitive
//!
//! Renders a labelled bar series using iced's Canvas. Value labels are
//! passed in pre-formatted so the primitive stays free of locale logic.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, Text};
use iced::{Color, Element, Length, Point, Renderer, Theme, mouse};

use crate::ui::theme;

/// One bar in the series
#[derive(Debug, Clone)]
pub struct BarEntry {
    /// Category label drawn under the bar
    pub label: String,
    pub value: f32,
    /// Formatted value drawn above the bar
    pub display: String,
}

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct BarChart {
    entries: Vec<BarEntry>,
    bar_color: Color,
}

impl BarChart {
    pub fn new(entries: Vec<BarEntry>) -> Self {
        Self {
            entries,
            bar_color: theme::CHART_COLORS[0],
        }
    }

    pub fn bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }
}

impl<Message> Program<Message> for BarChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let left_margin = 12.0;
        let right_margin = 12.0;
        let top_margin = 28.0; // Space for value labels
        let bottom_margin = 26.0; // Space for category labels
        let graph_width = bounds.width - left_margin - right_margin;
        let graph_height = bounds.height - top_margin - bottom_margin;

        if self.entries.is_empty() || graph_width <= 0.0 || graph_height <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let max_value = self
            .entries
            .iter()
            .map(|e| e.value)
            .fold(0.0_f32, f32::max)
            .max(1.0);

        // Horizontal gridlines at quarter steps
        for step in 0..=4 {
            let y = top_margin + graph_height * (step as f32 / 4.0);
            let line = Path::line(
                Point::new(left_margin, y),
                Point::new(left_margin + graph_width, y),
            );
            let color = if step == 4 {
                theme::border_color(theme)
            } else {
                theme::divider(theme)
            };
            frame.stroke(&line, Stroke::default().with_color(color).with_width(1.0));
        }

        let slot = graph_width / self.entries.len() as f32;
        let bar_width = (slot * 0.5).min(90.0);

        for (i, entry) in self.entries.iter().enumerate() {
            let center_x = left_margin + slot * (i as f32 + 0.5);
            let x = center_x - bar_width / 2.0;
            let bar_height = (entry.value / max_value) * graph_height;
            let y = top_margin + graph_height - bar_height;

            if bar_height >= 1.0 {
                let bar = Path::new(|builder| {
                    builder.move_to(Point::new(x, top_margin + graph_height));
                    builder.line_to(Point::new(x, y));
                    builder.line_to(Point::new(x + bar_width, y));
                    builder.line_to(Point::new(x + bar_width, top_margin + graph_height));
                    builder.close();
                });
                frame.fill(&bar, self.bar_color);
            }

            // Value above the bar
            let value_text = Text {
                content: entry.display.clone(),
                position: Point::new(center_x, y - 6.0),
                color: theme::text_primary(theme),
                size: iced::Pixels(12.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                align_y: iced::alignment::Vertical::Bottom,
                ..Text::default()
            };
            frame.fill_text(value_text);

            // Category label under the baseline
            let label_text = Text {
                content: entry.label.clone(),
                position: Point::new(center_x, top_margin + graph_height + 8.0),
                color: theme::text_muted(theme),
                size: iced::Pixels(11.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                align_y: iced::alignment::Vertical::Top,
                ..Text::default()
            };
            frame.fill_text(label_text);
        }

        vec![frame.into_geometry()]
    }
}

/// Create a bar chart element filling the available width
pub fn view_bar_chart<'a, Message: 'a>(chart: BarChart, height: f32) -> Element<'a, Message> {
    Canvas::new(chart)
        .width(Length::Fill)
        .height(height)
        .into()
}
