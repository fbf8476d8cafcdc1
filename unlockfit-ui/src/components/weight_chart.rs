//! Weight Chart Component
//!
//! Weight-over-time line chart using HTML5 Canvas. Dates are categorical: points are spaced
//! evenly in the current display order, so entries sharing a date stay distinguishable.

use leptos::*;
use unlockfit::chart::WeightSeries;
use unlockfit::tracker::WeightUnit;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::GlobalState;

const LINE_COLOR: &str = "#FF9800";
const GRID_LINES: usize = 5;

/// Weight chart, drawn in `unit`
#[component]
pub fn WeightChart(
    #[prop(into)]
    unit: Signal<WeightUnit>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when entries, order or unit change
    create_effect(move |_| {
        let series = state
            .entries
            .with(|entries| WeightSeries::build(entries, state.order.get(), unit.get()));

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &series);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </div>
    }
}

/// Plot area inside the canvas margins
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn new(canvas_width: f64, canvas_height: f64) -> Self {
        let (margin_left, margin_right, margin_top, margin_bottom) = (60.0, 20.0, 20.0, 40.0);
        Self {
            left: margin_left,
            top: margin_top,
            width: canvas_width - margin_left - margin_right,
            height: canvas_height - margin_top - margin_bottom,
        }
    }

    /// X position of point `index` out of `count`; a lone point sits in the middle
    fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + (index as f64 / (count - 1) as f64) * self.width
    }

    /// Y position of `value` (inverted because canvas y grows downward)
    fn y_at(&self, value: f64, min: f64, max: f64) -> f64 {
        self.top + ((max - value) / (max - min)) * self.height
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, series: &WeightSeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = PlotArea::new(width, height);

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let Some((y_min, y_max)) = series.display_bounds() else {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No entries yet", width / 2.0 - 50.0, height / 2.0);
        return;
    };

    // Dashed horizontal grid with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    let dash = js_sys::Array::of2(&4.0.into(), &4.0.into());
    let _ = ctx.set_line_dash(&dash);

    ctx.set_fill_style(&"#9ca3af".into()); // gray-400
    ctx.set_font("12px sans-serif");
    for i in 0..=GRID_LINES {
        let fraction = i as f64 / GRID_LINES as f64;
        let y = area.top + fraction * area.height;
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();

        let value = y_max - fraction * (y_max - y_min);
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }
    let _ = ctx.fill_text(series.unit.label(), 5.0, area.top - 6.0);
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    let count = series.points.len();

    // Line through the points in display order
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in series.points.iter().enumerate() {
        let x = area.x_at(i, count);
        let y = area.y_at(point.weight, y_min, y_max);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Points and date labels
    ctx.set_font("12px sans-serif");
    for (i, point) in series.points.iter().enumerate() {
        let x = area.x_at(i, count);
        let y = area.y_at(point.weight, y_min, y_max);

        ctx.set_fill_style(&LINE_COLOR.into());
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();

        ctx.set_fill_style(&"#9ca3af".into());
        let label = point.date.format("%m/%d").to_string();
        let _ = ctx.fill_text(&label, x - 15.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_area_margins() {
        let area = PlotArea::new(800.0, 400.0);
        assert_eq!(area.width, 720.0);
        assert_eq!(area.height, 340.0);
    }

    #[test]
    fn test_x_spacing() {
        let area = PlotArea::new(800.0, 400.0);
        assert_eq!(area.x_at(0, 3), 60.0);
        assert_eq!(area.x_at(1, 3), 420.0);
        assert_eq!(area.x_at(2, 3), 780.0);
        assert_eq!(area.x_at(0, 1), 420.0);
    }

    #[test]
    fn test_y_is_inverted() {
        let area = PlotArea::new(800.0, 400.0);
        assert_eq!(area.y_at(90.0, 50.0, 90.0), area.top);
        assert_eq!(area.y_at(50.0, 50.0, 90.0), area.top + area.height);
    }
}
