use yew::prelude::*;
use web_sys::{window, HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use std::f64::consts::PI;
use shared::constants::SECTOR_SPAN_DEGREES;
use shared::prize_table::PRIZE_TABLE;
use shared::sector::Sector;

const SECTOR_COLORS: [&str; 4] = [
    "#64748b", // Slate (no prize)
    "#06b6d4", // Cyan
    "#8b5cf6", // Violet
    "#f59e0b", // Amber
];

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Accumulated rotation in degrees.
    pub angle: f64,
    pub is_spinning: bool,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn draw_wheel(context: &CanvasRenderingContext2d, width: f64, height: f64, angle: f64, is_spinning: bool) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;
    let dark = is_dark_mode();

    // Clear canvas
    context.clear_rect(0.0, 0.0, width, height);

    // Outer glow
    context.begin_path();
    let glow_intensity = if is_spinning { 0.25 } else { 0.15 };
    if dark {
        context.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow_intensity));
    } else {
        context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
    }
    let _ = context.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    // Everything up to the matching restore turns with the wheel
    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(angle.to_radians());
    let _ = context.translate(-center_x, -center_y);

    // Four equal segments, one per sector
    for sector in Sector::ALL {
        let start = sector.start_degrees().to_radians();
        let end = (sector.start_degrees() + SECTOR_SPAN_DEGREES).to_radians();

        context.begin_path();
        context.set_fill_style_str(SECTOR_COLORS[sector.index()]);
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.close_path();
        context.fill();

        // Divider
        context.begin_path();
        context.set_stroke_style_str(if dark { "rgba(255, 255, 255, 0.7)" } else { "rgba(255, 255, 255, 0.9)" });
        context.set_line_width(2.5);
        context.move_to(center_x, center_y);
        context.line_to(center_x + radius * start.cos(), center_y + radius * start.sin());
        context.stroke();
    }

    // Shimmer over the whole face while spinning
    if is_spinning {
        let shimmer = (js_sys::Date::now() / 400.0).sin() * 0.1 + 0.1;
        context.begin_path();
        context.set_fill_style_str(&format!("rgba(255, 255, 255, {})", shimmer));
        let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
        context.fill();
    }

    // Labels
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_shadow_color(if dark { "rgba(0, 0, 0, 0.7)" } else { "rgba(0, 0, 0, 0.5)" });
    context.set_shadow_blur(3.0);
    context.set_shadow_offset_x(1.0);
    context.set_shadow_offset_y(1.0);
    context.set_font("bold 20px 'Segoe UI', Roboto, system-ui, sans-serif");

    for sector in Sector::ALL {
        let middle = (sector.start_degrees() + SECTOR_SPAN_DEGREES / 2.0).to_radians();
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(middle);
        let _ = context.translate(radius * 0.6, 0.0);
        let _ = context.fill_text(PRIZE_TABLE[sector.index()].label, 0.0, 0.0);
        context.restore();
    }

    // Reset shadow for subsequent drawing
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
    context.set_shadow_offset_x(0.0);
    context.set_shadow_offset_y(0.0);

    // Back to the unrotated frame
    context.restore();

    // Hub
    let inner_radius = radius * 0.2;
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#8b5cf6" });
    let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_fill_style_str(if dark { "#d8b4fe" } else { "#ffffff" });
    let _ = context.arc(center_x, center_y, inner_radius * 0.3, 0.0, 2.0 * PI);
    context.fill();

    // Outer ring
    context.begin_path();
    if is_spinning {
        let pulse = (js_sys::Date::now() / 400.0).sin() * 0.2 + 0.5;
        context.set_stroke_style_str(&format!("rgba(180, 130, 255, {})", pulse));
        context.set_line_width(5.0);
    } else {
        context.set_stroke_style_str("rgba(130, 100, 255, 0.5)");
        context.set_line_width(4.0);
    }
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    // Pointer, fixed at the top
    context.set_shadow_color(if is_spinning { "rgba(255, 215, 130, 0.8)" } else { "rgba(255, 215, 0, 0.6)" });
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });

    // Triangle pointing down into the wheel
    let pointer_width = 20.0;
    let pointer_height = 30.0;
    context.begin_path();
    context.move_to(center_x, center_y - radius + 5.0);
    context.line_to(center_x - pointer_width, center_y - radius - pointer_height);
    context.line_to(center_x + pointer_width, center_y - radius - pointer_height);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            // f64 isn't PartialEq-stable for deps, compare the bits instead
            (props.angle.to_bits(), props.is_spinning),
            move |(angle_bits, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(context) = context_2d(&canvas) {
                        draw_wheel(
                            &context,
                            canvas.width() as f64,
                            canvas.height() as f64,
                            f64::from_bits(*angle_bits),
                            *is_spinning,
                        );
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
