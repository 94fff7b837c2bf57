//! Nested bar chart drawn with the egui painter.

use demog_dashboard::Chart;
use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, RichText, Sense, Stroke, Ui, Vec2};

use crate::layout::{layout, ticks};
use crate::theme::{self, spacing};

/// Chart canvas plus legend
pub struct ChartView;

impl ChartView {
    pub fn show(ui: &mut Ui, chart: &Chart, plot_height: f32) {
        ui.label(RichText::new(chart.title()).strong().size(16.0));
        ui.add_space(spacing::XS);
        Self::legend(ui, chart);
        ui.add_space(spacing::SM);

        let size = Vec2::new(
            ui.available_width(),
            plot_height + theme::chart::LABEL_BAND,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let frame = response.rect;
        let plot = Rect::from_min_max(
            Pos2::new(frame.left() + theme::chart::AXIS_GUTTER, frame.top()),
            Pos2::new(frame.right(), frame.bottom() - theme::chart::LABEL_BAND),
        );

        let text_color = ui.visuals().text_color();
        let grid_color = ui.visuals().weak_text_color().linear_multiply(0.3);
        let ceiling = chart.value_ceiling();

        for tick in ticks(ceiling, theme::chart::TICKS) {
            let y = plot.bottom() - (tick / ceiling) as f32 * plot.height();
            painter.line_segment(
                [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
                Stroke::new(1.0, grid_color),
            );
            painter.text(
                Pos2::new(plot.left() - spacing::XS, y),
                Align2::RIGHT_CENTER,
                tick_label(tick, chart.is_ratio()),
                FontId::proportional(theme::chart::TICK_FONT),
                text_color,
            );
        }

        let members = chart.legend().len();
        let geometry = layout(
            chart.factors().len(),
            members,
            &chart.series().values,
            plot.width(),
            plot.height(),
            ceiling,
        );

        let mut hovered = None;
        let pointer = response.hover_pos();
        for bar in &geometry.bars {
            let rect = Rect::from_min_max(
                Pos2::new(plot.left() + bar.left, plot.bottom() - bar.height),
                Pos2::new(plot.left() + bar.right, plot.bottom()),
            );
            let color = chart
                .legend()
                .get(bar.member)
                .map_or(Color32::GRAY, |entry| theme::to_color32(entry.color));
            painter.rect_filled(rect, CornerRadius::same(2), color);
            if pointer.is_some_and(|pos| {
                plot.contains(pos) && bar.contains_x(pos.x - plot.left())
            }) {
                hovered = Some(*bar);
            }
        }

        for (group, center) in geometry.group_centers.iter().enumerate() {
            if group % geometry.label_stride != 0 {
                continue;
            }
            if let Some(label) = chart.factors().get(group) {
                painter.text(
                    Pos2::new(plot.left() + center, plot.bottom() + spacing::XS),
                    Align2::CENTER_TOP,
                    label,
                    FontId::proportional(theme::chart::LABEL_FONT),
                    text_color,
                );
            }
        }

        if let Some(bar) = hovered {
            let factor = chart.factors().get(bar.group).map_or("", String::as_str);
            let member = chart
                .legend()
                .get(bar.member)
                .map_or("", |entry| entry.label.as_str());
            response.on_hover_text(format!(
                "{factor} / {member}: {}",
                tick_label(bar.value, chart.is_ratio())
            ));
        }
    }

    fn legend(ui: &mut Ui, chart: &Chart) {
        ui.horizontal(|ui| {
            for entry in chart.legend() {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                ui.painter()
                    .rect_filled(rect, CornerRadius::same(2), theme::to_color32(entry.color));
                ui.label(&entry.label);
                ui.add_space(spacing::SM);
            }
        });
    }
}

fn tick_label(value: f64, ratio: bool) -> String {
    if ratio {
        format!("{value:.2}")
    } else {
        format!("{value:.0}")
    }
}
