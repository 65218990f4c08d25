use anyhow::Context;
use draftkit::{init_logging, BoardSettings, Controller, Point, RasterSurface};
use draftkit_board::renderer;

/// Headless entry point: builds a small demonstration drawing with one
/// segment per built-in style and renders it to a PNG. A GUI host would
/// instead own a window and feed events into the [`Controller`].
fn main() -> anyhow::Result<()> {
    init_logging()?;

    tracing::info!(
        version = draftkit::VERSION,
        built = draftkit::BUILD_DATE,
        "draftkit starting"
    );

    let settings = BoardSettings::load_default();

    let width = 1024u32;
    let height = 768u32;
    let mut controller = Controller::new(width as f64, height as f64);
    {
        let canvas = controller.canvas_mut();
        canvas.set_background(settings.colors.background);
        canvas.set_grid_color(settings.colors.grid);
        canvas.set_grid_step(settings.grid_step)?;
        canvas.set_base_thickness_px(settings.base_thickness_px());
        canvas.apply_color(settings.colors.segment);
        canvas.viewport_mut().set_zoom(settings.default_zoom);

        let style_ids: Vec<String> = canvas
            .styles()
            .iter_sorted()
            .into_iter()
            .map(|s| s.id.clone())
            .collect();
        for (i, style_id) in style_ids.iter().enumerate() {
            let y = 10.0 * i as f64;
            canvas.apply_style(style_id)?;
            canvas.add_segment(Point::new(-40.0, y), Point::new(40.0, y));
        }
        canvas.fit_all();
    }

    let mut surface = RasterSurface::new(width, height)?;
    renderer::render_scene(
        controller.canvas(),
        controller.active_points(),
        &mut surface,
    );

    let status = controller.status();
    tracing::info!(
        segments = controller.canvas().segments().len(),
        camera = %controller.canvas().viewport(),
        mode = %status.mode_text,
        "board ready"
    );

    let output = std::path::Path::new("draftkit.png");
    surface
        .save_png(output)
        .with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(path = %output.display(), "rendered demonstration board");

    Ok(())
}
