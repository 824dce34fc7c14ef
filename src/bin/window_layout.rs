use serde::Serialize;
use sliding_window::config::layout::load_config;
use sliding_window::io::write_json_file;
use sliding_window::{DimOrder, IterOrder, Rect, WindowLayout};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let (width, height) = config
        .layout
        .dim_order
        .spatial_extent(&config.shape)
        .map_err(|e| e.to_string())?;
    let layout = WindowLayout::from_sizing(width, height, config.sizing, &config.layout)
        .map_err(|e| e.to_string())?;
    let windows: Vec<Rect> = layout.windows().iter().map(|w| w.rect()).collect();

    let summary = LayoutSummary {
        width,
        height,
        window_width: layout.window_width(),
        window_height: layout.window_height(),
        step_x: layout.step_x(),
        step_y: layout.step_y(),
        dim_order: layout.dim_order(),
        iter_order: layout.iter_order(),
        window_count: windows.len(),
        windows,
    };

    println!(
        "{}x{} input -> {} windows of {}x{} (step {}x{}, {})",
        summary.width,
        summary.height,
        summary.window_count,
        summary.window_width,
        summary.window_height,
        summary.step_x,
        summary.step_y,
        summary.iter_order
    );

    match &config.output.json_out {
        Some(path) => {
            write_json_file(path, &summary)?;
            println!("Layout written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn usage() -> String {
    "Usage: window_layout <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutSummary {
    width: usize,
    height: usize,
    window_width: usize,
    window_height: usize,
    step_x: usize,
    step_y: usize,
    dim_order: DimOrder,
    iter_order: IterOrder,
    window_count: usize,
    windows: Vec<Rect>,
}
