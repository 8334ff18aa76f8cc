//! Line chart primitive
//!
//! Time-series style polyline with point markers and a soft fill under
//! the curve. The vertical axis always starts at zero.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, Text};
use iced::{Color, Element, Length, Point, Renderer, Theme, mouse};

use crate::ui::theme;

/// One sample along the horizontal axis
#[derive(Debug, Clone)]
pub struct LinePoint {
    pub label: String,
    pub value: f32,
}

/// Line chart configuration
#[derive(Debug, Clone)]
pub struct LineChart {
    points: Vec<LinePoint>,
    line_color: Color,
}

impl LineChart {
    pub fn new(points: Vec<LinePoint>) -> Self {
        Self {
            points,
            line_color: theme::CHART_COLORS[0],
        }
    }

    pub fn line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }
}

impl<Message> Program<Message> for LineChart {
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

        let left_margin = 44.0; // Space for value labels
        let right_margin = 16.0;
        let top_margin = 12.0;
        let bottom_margin = 26.0;
        let graph_width = bounds.width - left_margin - right_margin;
        let graph_height = bounds.height - top_margin - bottom_margin;

        if self.points.len() < 2 || graph_width <= 0.0 || graph_height <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let max_value = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(0.0_f32, f32::max)
            .max(1.0);
        // Headroom so the peak does not touch the frame edge
        let scale_max = max_value * 1.1;

        // Horizontal gridlines with value labels
        for step in 0..=4 {
            let fraction = step as f32 / 4.0;
            let y = top_margin + graph_height * fraction;
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

            let value = scale_max * (1.0 - fraction);
            let label = Text {
                content: format!("{}", value.round() as i64),
                position: Point::new(left_margin - 8.0, y),
                color: theme::text_muted(theme),
                size: iced::Pixels(10.0),
                align_x: iced::alignment::Horizontal::Right.into(),
                align_y: iced::alignment::Vertical::Center,
                ..Text::default()
            };
            frame.fill_text(label);
        }

        let point_pos = |i: usize, value: f32| {
            let t = i as f32 / (self.points.len() - 1) as f32;
            let x = left_margin + t * graph_width;
            let y = top_margin + graph_height * (1.0 - (value / scale_max).clamp(0.0, 1.0));
            Point::new(x, y)
        };

        // Soft fill under the curve
        let fill_path = Path::new(|builder| {
            builder.move_to(Point::new(left_margin, top_margin + graph_height));
            for (i, point) in self.points.iter().enumerate() {
                builder.line_to(point_pos(i, point.value));
            }
            builder.line_to(Point::new(
                left_margin + graph_width,
                top_margin + graph_height,
            ));
            builder.close();
        });
        frame.fill(
            &fill_path,
            Color {
                a: 0.15,
                ..self.line_color
            },
        );

        // Polyline
        let curve = Path::new(|builder| {
            for (i, point) in self.points.iter().enumerate() {
                let pos = point_pos(i, point.value);
                if i == 0 {
                    builder.move_to(pos);
                } else {
                    builder.line_to(pos);
                }
            }
        });
        frame.stroke(
            &curve,
            Stroke::default()
                .with_color(self.line_color)
                .with_width(2.0),
        );

        // Point markers and x labels
        for (i, point) in self.points.iter().enumerate() {
            let pos = point_pos(i, point.value);
            frame.fill(&Path::circle(pos, 3.5), self.line_color);

            let label = Text {
                content: point.label.clone(),
                position: Point::new(pos.x, top_margin + graph_height + 8.0),
                color: theme::text_muted(theme),
                size: iced::Pixels(10.0),
                align_x: iced::alignment::Horizontal::Center.into(),
                align_y: iced::alignment::Vertical::Top,
                ..Text::default()
            };
            frame.fill_text(label);
        }

        vec![frame.into_geometry()]
    }
}

/// Create a line chart element filling the available width
pub fn view_line_chart<'a, Message: 'a>(chart: LineChart, height: f32) -> Element<'a, Message> {
    Canvas::new(chart)
        .width(Length::Fill)
        .height(height)
        .into()
}
