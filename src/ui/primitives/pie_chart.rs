//! Pie chart primitive
//!
//! Draws proportional wedges with a swatch legend on the right. Slice
//! colors cycle through the shared chart palette.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Text, path::Arc};
use iced::{Element, Length, Point, Radians, Renderer, Theme, mouse};

use crate::ui::theme;

/// One wedge of the pie
#[derive(Debug, Clone)]
pub struct PieSlice {
    pub label: String,
    pub value: f32,
    /// Formatted share drawn next to the legend label
    pub display: String,
}

/// Pie chart configuration
#[derive(Debug, Clone)]
pub struct PieChart {
    slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn new(slices: Vec<PieSlice>) -> Self {
        Self { slices }
    }
}

impl<Message> Program<Message> for PieChart {
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

        let total: f32 = self.slices.iter().map(|s| s.value).sum();
        if total <= 0.0 {
            return vec![frame.into_geometry()];
        }

        // Pie on the left half, legend on the right
        let padding = 12.0;
        let pie_area = (bounds.width * 0.5).min(bounds.height);
        let radius = pie_area / 2.0 - padding;
        let center = Point::new(padding + pie_area / 2.0, bounds.height / 2.0);

        let mut start_angle = -std::f32::consts::FRAC_PI_2;
        for (i, slice) in self.slices.iter().enumerate() {
            let sweep = (slice.value / total) * std::f32::consts::TAU;
            let wedge = Path::new(|builder| {
                builder.move_to(center);
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start_angle),
                    end_angle: Radians(start_angle + sweep),
                });
                builder.close();
            });
            frame.fill(&wedge, theme::CHART_COLORS[i % theme::CHART_COLORS.len()]);
            start_angle += sweep;
        }

        // Legend
        let legend_x = padding + pie_area + 24.0;
        let row_height = 26.0;
        let legend_top = bounds.height / 2.0 - row_height * self.slices.len() as f32 / 2.0;

        for (i, slice) in self.slices.iter().enumerate() {
            let y = legend_top + row_height * i as f32 + row_height / 2.0;

            let swatch = Path::new(|builder| {
                builder.move_to(Point::new(legend_x, y - 6.0));
                builder.line_to(Point::new(legend_x + 12.0, y - 6.0));
                builder.line_to(Point::new(legend_x + 12.0, y + 6.0));
                builder.line_to(Point::new(legend_x, y + 6.0));
                builder.close();
            });
            frame.fill(&swatch, theme::CHART_COLORS[i % theme::CHART_COLORS.len()]);

            let label = Text {
                content: format!("{} ({})", slice.label, slice.display),
                position: Point::new(legend_x + 20.0, y),
                color: theme::text_secondary(theme),
                size: iced::Pixels(13.0),
                align_x: iced::alignment::Horizontal::Left.into(),
                align_y: iced::alignment::Vertical::Center,
                ..Text::default()
            };
            frame.fill_text(label);
        }

        vec![frame.into_geometry()]
    }
}

/// Create a pie chart element filling the available width
pub fn view_pie_chart<'a, Message: 'a>(chart: PieChart, height: f32) -> Element<'a, Message> {
    Canvas::new(chart)
        .width(Length::Fill)
        .height(height)
        .into()
}
