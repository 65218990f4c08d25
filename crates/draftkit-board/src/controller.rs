//! Pointer-driven interaction state machine.
//!
//! Three long-lived modes: `Idle` (selection clicks), `Creating`
//! (two-point segment construction with live preview), and `Panning`
//! (drag-to-pan). The host environment translates its concrete input
//! devices into the event types here and calls one `handle_*` entry
//! point per event category; the controller owns the canvas and applies
//! every mutation synchronously.
//!
//! Construction points always travel through the coordinate entry
//! fields: a click writes the resolved world point into the fields, and
//! the preview is recomputed from the fields, so manual entry and mouse
//! clicks share a single code path. Unparseable fields silently clear
//! the preview.

use draftkit_core::constants::{ROTATE_STEP_DEG, ZOOM_STEP};
use draftkit_core::units::{AngleUnit, CoordinateSystem};
use draftkit_core::{Error, Point, Result};

use crate::canvas::Canvas;

/// Interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Waiting; clicks select segments
    Idle,
    /// Two-point segment construction in progress
    Creating,
    /// Drag-to-pan
    Panning,
}

impl Mode {
    /// Status-bar label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::Creating => "Creating segment",
            Mode::Panning => "Panning",
        }
    }
}

/// Modifier keys held during an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

/// Pointer button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Pointer event phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Move,
    Release,
}

/// A pointer event in screen coordinates
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub button: PointerButton,
    pub x: f64,
    pub y: f64,
    pub modifiers: Modifiers,
}

/// Named keys the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Delete,
    Plus,
    Minus,
    ArrowLeft,
    ArrowRight,
    F11,
}

/// Coordinate entry fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    P1X,
    P1Y,
    /// X, or radius in polar mode
    P2A,
    /// Y, or angle in polar mode
    P2B,
}

/// What the host must do after an event, beyond redrawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing special; redraw as usual
    Redraw,
    /// Escape pressed while idle: ask the user about exiting
    RequestExitConfirm,
}

/// Status values for the host's info panel and status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInfo {
    /// World coordinates under the cursor.
    pub cursor_world: Point,
    /// Zoom relative to the default level, percent.
    pub zoom_percent: f64,
    /// View rotation in degrees.
    pub rotation_degrees: f64,
    /// Mode label, or the selection count when something is selected.
    pub mode_text: String,
    /// Active first construction/selection point.
    pub p1: Option<Point>,
    /// Active second construction/selection point.
    pub p2: Option<Point>,
    /// Length of the active segment.
    pub length: Option<f64>,
    /// Angle of the active segment, in the configured unit.
    pub angle: Option<f64>,
}

/// Raw text content of the four coordinate entry fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PointFields {
    p1_x: String,
    p1_y: String,
    p2_a: String,
    p2_b: String,
}

impl PointFields {
    fn clear(&mut self) {
        *self = Self::default();
    }

    fn get(&self, field: Field) -> &str {
        match field {
            Field::P1X => &self.p1_x,
            Field::P1Y => &self.p1_y,
            Field::P2A => &self.p2_a,
            Field::P2B => &self.p2_b,
        }
    }

    fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::P1X => &mut self.p1_x,
            Field::P1Y => &mut self.p1_y,
            Field::P2A => &mut self.p2_a,
            Field::P2B => &mut self.p2_b,
        };
        *slot = value.to_string();
    }

    fn p2_is_set(&self) -> bool {
        !self.p2_a.is_empty() || !self.p2_b.is_empty()
    }

    fn p1_is_set(&self) -> bool {
        !self.p1_x.is_empty() || !self.p1_y.is_empty()
    }
}

/// Tolerant numeric field parsing; accepts a decimal comma.
fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim().replace(',', ".");
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The interaction state machine. Owns the canvas.
#[derive(Debug, Clone)]
pub struct Controller {
    canvas: Canvas,
    mode: Mode,
    fields: PointFields,
    coord_system: CoordinateSystem,
    angle_unit: AngleUnit,
    points_clicked: u8,
    drag_anchor: Option<(f64, f64)>,
    cursor_world: Point,
    fullscreen: bool,
}

impl Controller {
    /// Creates a controller over an empty canvas of the given size.
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self::with_canvas(Canvas::new(view_width, view_height))
    }

    /// Creates a controller over an existing canvas.
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            mode: Mode::Idle,
            fields: PointFields::default(),
            coord_system: CoordinateSystem::default(),
            angle_unit: AngleUnit::default(),
            points_clicked: 0,
            drag_anchor: None,
            cursor_world: Point::default(),
            fullscreen: false,
        }
    }

    /// The canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable canvas access for host-driven operations (style edits,
    /// colors, fit-to-view).
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Fullscreen flag toggled by F11; the host applies it.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Active interpretation of the second-point fields.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coord_system
    }

    /// Angle unit for polar entry and status readouts.
    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    /// Raw content of one coordinate field (for host display).
    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Switches interaction mode, discarding transient state of the
    /// mode being left.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            tracing::debug!(from = self.mode.label(), to = mode.label(), "mode change");
        }
        self.mode = mode;
        self.points_clicked = 0;
        self.drag_anchor = None;
        if mode != Mode::Creating {
            self.fields.clear();
            self.canvas.clear_preview();
        }
    }

    /// Enters segment construction (the "new segment" tool).
    pub fn start_creating(&mut self) {
        self.set_mode(Mode::Creating);
    }

    /// Enters drag-to-pan (the "hand" tool).
    pub fn start_panning(&mut self) {
        self.set_mode(Mode::Panning);
    }

    /// Handles a pointer press/move/release.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Outcome {
        match event.kind {
            PointerKind::Press => self.on_pointer_press(event),
            PointerKind::Move => self.on_pointer_move(event),
            PointerKind::Release => {
                self.drag_anchor = None;
            }
        }
        Outcome::Redraw
    }

    fn on_pointer_press(&mut self, event: PointerEvent) {
        // Middle button always arms a pan drag, whatever the mode
        if event.button == PointerButton::Middle {
            self.drag_anchor = Some((event.x, event.y));
            return;
        }

        match self.mode {
            Mode::Creating => match event.button {
                PointerButton::Left => self.resolve_click_point(event.x, event.y),
                PointerButton::Right => self.unset_last_point(),
                PointerButton::Middle => {}
            },
            Mode::Panning => {
                if event.button == PointerButton::Left {
                    self.drag_anchor = Some((event.x, event.y));
                }
            }
            Mode::Idle => {
                if event.button == PointerButton::Left {
                    let world = self.canvas.viewport().screen_to_world(event.x, event.y);
                    if let Some(id) = self.canvas.select_at(&world, event.modifiers.ctrl) {
                        self.sync_defaults_from(id);
                    }
                }
            }
        }
    }

    fn on_pointer_move(&mut self, event: PointerEvent) {
        self.cursor_world = self.canvas.viewport().screen_to_world(event.x, event.y);
        if let Some((ax, ay)) = self.drag_anchor {
            self.canvas
                .viewport_mut()
                .pan_by(event.x - ax, event.y - ay);
            self.drag_anchor = Some((event.x, event.y));
        }
    }

    /// Handles a wheel notch at a screen position; positive `delta`
    /// zooms in toward the cursor.
    pub fn handle_wheel(&mut self, x: f64, y: f64, delta: f64) -> Outcome {
        let factor = if delta > 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
        self.canvas.viewport_mut().zoom_at_point(factor, x, y);
        Outcome::Redraw
    }

    /// Handles a named key press.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Outcome {
        match key {
            Key::Enter => {
                if self.mode == Mode::Creating && self.canvas.preview().is_some() {
                    self.canvas.commit_preview();
                    self.set_mode(Mode::Idle);
                }
            }
            Key::Escape => match self.mode {
                Mode::Creating | Mode::Panning => self.set_mode(Mode::Idle),
                Mode::Idle => return Outcome::RequestExitConfirm,
            },
            Key::Delete => self.canvas.delete_selected(),
            Key::Plus => self.canvas.viewport_mut().zoom_at_center(ZOOM_STEP),
            Key::Minus => self.canvas.viewport_mut().zoom_at_center(1.0 / ZOOM_STEP),
            Key::ArrowLeft => {
                self.canvas
                    .viewport_mut()
                    .rotate_by(ROTATE_STEP_DEG, modifiers.shift);
            }
            Key::ArrowRight => {
                self.canvas
                    .viewport_mut()
                    .rotate_by(-ROTATE_STEP_DEG, modifiers.shift);
            }
            Key::F11 => self.fullscreen = !self.fullscreen,
        }
        Outcome::Redraw
    }

    /// Updates one coordinate entry field and recomputes the preview.
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.fields.set(field, value);
        self.update_preview();
    }

    /// Parses and applies a grid step field. The one entry field whose
    /// validation error surfaces to the user.
    pub fn apply_grid_step(&mut self, raw: &str) -> Result<()> {
        let step = parse_field(raw).ok_or_else(|| Error::InvalidNumber {
            value: raw.to_string(),
        })?;
        self.canvas.set_grid_step(step)
    }

    /// Switches between Cartesian and polar second-point entry,
    /// re-deriving the field contents so the described point stays put.
    pub fn set_coordinate_system(&mut self, system: CoordinateSystem) {
        if system == self.coord_system {
            return;
        }
        let p2 = self.parse_p2();
        self.coord_system = system;
        if let Some(p2) = p2 {
            self.write_p2_fields(&p2);
        }
        self.update_preview();
    }

    /// Switches the angle unit used for polar entry and readouts.
    pub fn set_angle_unit(&mut self, unit: AngleUnit) {
        if unit == self.angle_unit {
            return;
        }
        let p2 = self.parse_p2();
        self.angle_unit = unit;
        if let Some(p2) = p2 {
            if self.coord_system == CoordinateSystem::Polar {
                self.write_p2_fields(&p2);
            }
        }
    }

    /// Status values for display.
    pub fn status(&self) -> StatusInfo {
        let (p1, p2) = self.active_points();
        let segment = match (p1, p2) {
            (Some(a), Some(b)) => Some(draftkit_core::Segment::new(a, b)),
            _ => None,
        };
        let mode_text = if self.canvas.selection().is_empty() {
            self.mode.label().to_string()
        } else {
            format!("Selected: {}", self.canvas.selection().len())
        };
        StatusInfo {
            cursor_world: self.cursor_world,
            zoom_percent: self.canvas.viewport().zoom_percent(),
            rotation_degrees: self.canvas.viewport().rotation_degrees(),
            mode_text,
            p1,
            p2,
            length: segment.as_ref().map(|s| s.length()),
            angle: segment
                .as_ref()
                .map(|s| self.angle_unit.from_radians(s.angle())),
        }
    }

    /// The construction/selection points to mark on the canvas: the
    /// endpoints of the first selected segment, or the points resolved
    /// so far while creating.
    pub fn active_points(&self) -> (Option<Point>, Option<Point>) {
        if let Some(&first) = self.canvas.selection().ids().first() {
            if let Some(obj) = self.canvas.segment(first) {
                return (Some(obj.segment.start), Some(obj.segment.end));
            }
        }
        if self.mode == Mode::Creating {
            return (self.parse_p1(), self.parse_p2());
        }
        (None, None)
    }

    fn resolve_click_point(&mut self, x: f64, y: f64) {
        let world = self.canvas.viewport().screen_to_world(x, y);
        match self.points_clicked {
            0 => {
                self.fields.set(Field::P1X, &format!("{:.2}", world.x));
                self.fields.set(Field::P1Y, &format!("{:.2}", world.y));
                self.points_clicked = 1;
            }
            1 => {
                self.write_p2_fields(&world);
                self.points_clicked = 2;
            }
            _ => {}
        }
        self.update_preview();
    }

    /// Right-click while creating: un-sets the most recently resolved
    /// point instead of opening a context menu.
    fn unset_last_point(&mut self) {
        if self.fields.p2_is_set() {
            self.fields.set(Field::P2A, "");
            self.fields.set(Field::P2B, "");
            self.points_clicked = 1;
        } else if self.fields.p1_is_set() {
            self.fields.set(Field::P1X, "");
            self.fields.set(Field::P1Y, "");
            self.points_clicked = 0;
        }
        self.update_preview();
    }

    fn sync_defaults_from(&mut self, id: u64) {
        let Some(obj) = self.canvas.segment(id) else {
            return;
        };
        let style_id = obj.style_id.clone();
        let color = obj.color;
        // The hit segment's attributes become the defaults for new work
        if self.canvas.apply_style(&style_id).is_err() {
            tracing::warn!(style = %style_id, "selected segment references an unknown style");
        }
        self.canvas.apply_color(color);
    }

    fn parse_p1(&self) -> Option<Point> {
        Some(Point::new(
            parse_field(&self.fields.p1_x)?,
            parse_field(&self.fields.p1_y)?,
        ))
    }

    fn parse_p2(&self) -> Option<Point> {
        let a = parse_field(&self.fields.p2_a)?;
        let b = parse_field(&self.fields.p2_b)?;
        match self.coord_system {
            CoordinateSystem::Cartesian => Some(Point::new(a, b)),
            CoordinateSystem::Polar => {
                // Polar entry is relative to P1; an unparseable P1 falls
                // back to the origin
                let p1 = self.parse_p1().unwrap_or_default();
                Some(Point::polar_offset(&p1, a, self.angle_unit.to_radians(b)))
            }
        }
    }

    fn write_p2_fields(&mut self, p2: &Point) {
        match self.coord_system {
            CoordinateSystem::Cartesian => {
                self.fields.set(Field::P2A, &format!("{:.2}", p2.x));
                self.fields.set(Field::P2B, &format!("{:.2}", p2.y));
            }
            CoordinateSystem::Polar => {
                let p1 = self.parse_p1().unwrap_or_default();
                let dx = p2.x - p1.x;
                let dy = p2.y - p1.y;
                let r = (dx * dx + dy * dy).sqrt();
                let theta = self.angle_unit.from_radians(dy.atan2(dx));
                self.fields.set(Field::P2A, &format!("{:.2}", r));
                self.fields.set(Field::P2B, &format!("{:.2}", theta));
            }
        }
    }

    fn update_preview(&mut self) {
        if self.mode != Mode::Creating {
            return;
        }
        match (self.parse_p1(), self.parse_p2()) {
            (Some(p1), Some(p2)) => self.canvas.set_preview(p1, p2),
            // Invalid or incomplete fields: drop the preview, no error
            _ => self.canvas.clear_preview(),
        }
    }
}
