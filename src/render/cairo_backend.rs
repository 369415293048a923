use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::core::Rect;
use crate::error::{ViewportError, ViewportResult};
use crate::render::{Color, Font, Painter};

/// Cairo + Pango + PangoCairo painter backend.
///
/// Cairo has a single source pattern, so stroke and fill colors are kept here
/// and applied right before the matching `stroke`/`fill`.
#[derive(Debug)]
pub struct CairoPainter {
    context: Context,
    surface: Option<ImageSurface>,
    stroke_color: Color,
    fill_color: Color,
    font: FontDescription,
    // Cairo's save/restore doesn't cover our cached colors.
    saved_colors: Vec<(Color, Color)>,
}

impl CairoPainter {
    /// Paints on an external context, e.g. a GTK draw callback.
    #[must_use]
    pub fn from_context(context: Context) -> Self {
        Self {
            context,
            surface: None,
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            fill_color: Color::rgb(0.0, 0.0, 0.0),
            font: FontDescription::from_string("Sans 12px"),
            saved_colors: Vec::new(),
        }
    }

    /// Creates an offscreen ARGB surface of the given physical size.
    ///
    /// Fails with `Configuration` when the surface or context can't be created.
    pub fn new_image(width: i32, height: i32) -> ViewportResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ViewportError::Configuration(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height).map_err(|err| {
            ViewportError::Configuration(format!("failed to create cairo surface: {err}"))
        })?;
        let context = Context::new(&surface).map_err(|err| {
            ViewportError::Configuration(format!("failed to create cairo context: {err}"))
        })?;
        let mut painter = Self::from_context(context);
        painter.surface = Some(surface);
        Ok(painter)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    fn apply_color(&self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }

    fn layout(&self, text: &str) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&self.font));
        layout.set_text(text);
        layout
    }
}

impl Painter for CairoPainter {
    fn set_stroke_style(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_font(&mut self, font: &Font) {
        self.font = FontDescription::from_string(&format!("{} {}px", font.family, font.size_px));
    }

    fn clear_rect(&mut self, rect: Rect) -> ViewportResult<()> {
        self.context.save().map_err(|err| map_backend_error("save", err))?;
        self.context.set_operator(Operator::Clear);
        self.context.new_path();
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("clear rectangle", err))?;
        self.context
            .restore()
            .map_err(|err| map_backend_error("restore", err))
    }

    fn fill_rect(&mut self, rect: Rect) -> ViewportResult<()> {
        self.apply_color(self.fill_color);
        self.context.new_path();
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("fill rectangle", err))
    }

    fn stroke_rect(&mut self, rect: Rect) -> ViewportResult<()> {
        self.apply_color(self.stroke_color);
        self.context.new_path();
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("stroke rectangle", err))
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn arc(&mut self, center_x: f64, center_y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.context
            .arc(center_x, center_y, radius, start_angle, end_angle);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn stroke(&mut self) -> ViewportResult<()> {
        self.apply_color(self.stroke_color);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("stroke path", err))
    }

    fn fill(&mut self) -> ViewportResult<()> {
        self.apply_color(self.fill_color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("fill path", err))
    }

    fn save(&mut self) -> ViewportResult<()> {
        self.saved_colors.push((self.stroke_color, self.fill_color));
        self.context.save().map_err(|err| map_backend_error("save", err))
    }

    fn restore(&mut self) -> ViewportResult<()> {
        if let Some((stroke, fill)) = self.saved_colors.pop() {
            self.stroke_color = stroke;
            self.fill_color = fill;
        }
        self.context
            .restore()
            .map_err(|err| map_backend_error("restore", err))
    }

    fn clip(&mut self, rect: Rect) -> ViewportResult<()> {
        self.context.new_path();
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context.clip();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ViewportResult<()> {
        let layout = self.layout(text);
        // Pango positions by the top-left corner; shift up to the baseline.
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        self.apply_color(self.fill_color);
        self.context.move_to(x, y - baseline);
        pangocairo::functions::show_layout(&self.context, &layout);
        Ok(())
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        let (width, _height) = self.layout(text).pixel_size();
        f64::from(width)
    }
}

fn map_backend_error(operation: &str, err: cairo::Error) -> ViewportError {
    ViewportError::Backend(format!("failed to {operation}: {err}"))
}
