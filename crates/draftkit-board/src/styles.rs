//! Line style catalog: the built-in GOST set plus user-defined copies.
//!
//! Built-in styles are immutable and non-deletable. Custom styles are
//! full copies with generated ids; their dash parameters are clamped to
//! the style's declared limits on every edit rather than rejected.

use std::collections::HashMap;

use draftkit_core::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the fallback style segments are reassigned to when their style
/// is deleted.
pub const DEFAULT_STYLE_ID: &str = "solid_main";

/// Fundamental stroke shape of a line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseType {
    /// Unbroken line
    Solid,
    /// Dash, gap
    Dashed,
    /// Dash, gap, dot, gap
    DashDot,
    /// Dash, gap, dot, gap, dot, gap
    DashDotDot,
    /// Sinusoidal wave along the segment
    Wave,
    /// Straight runs broken by zigzag pulses
    Zigzag,
}

impl BaseType {
    /// True for the base types driven by a dash/gap pattern.
    pub fn requires_pattern(&self) -> bool {
        matches!(self, Self::Dashed | Self::DashDot | Self::DashDotDot)
    }
}

/// Dash/gap lengths in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub dash_mm: f64,
    pub gap_mm: f64,
}

impl DashPattern {
    pub fn new(dash_mm: f64, gap_mm: f64) -> Self {
        Self { dash_mm, gap_mm }
    }
}

/// Editable range for a style's dash parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashLimits {
    pub min_dash: f64,
    pub max_dash: f64,
    pub min_gap: f64,
    pub max_gap: f64,
}

impl DashLimits {
    pub fn new(min_dash: f64, max_dash: f64, min_gap: f64, max_gap: f64) -> Self {
        Self {
            min_dash,
            max_dash,
            min_gap,
            max_gap,
        }
    }

    /// Clamps a pattern into this range.
    pub fn clamp(&self, pattern: DashPattern) -> DashPattern {
        DashPattern::new(
            pattern.dash_mm.clamp(self.min_dash, self.max_dash),
            pattern.gap_mm.clamp(self.min_gap, self.max_gap),
        )
    }
}

/// A named line-drawing style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Stable catalog key.
    pub id: String,
    /// Human-readable name shown in style pickers.
    pub display_name: String,
    /// Stroke shape; drives the geometry generator.
    pub base_type: BaseType,
    /// Main styles draw at the full base thickness S, others at S/2.
    pub is_main: bool,
    /// Present iff `base_type.requires_pattern()`.
    pub dash_pattern: Option<DashPattern>,
    /// Editable range for the dash parameters, when they exist.
    pub limits: Option<DashLimits>,
    /// Custom styles are editable and deletable; built-ins are not.
    pub is_custom: bool,
}

/// The set of known line styles, keyed by id.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    styles: HashMap<String, LineStyle>,
}

impl StyleCatalog {
    /// Creates a catalog seeded with the built-in GOST styles.
    pub fn new() -> Self {
        let mut styles = HashMap::new();
        for style in builtin_styles() {
            styles.insert(style.id.clone(), style);
        }
        Self { styles }
    }

    /// Looks up a style by id.
    pub fn get(&self, id: &str) -> Option<&LineStyle> {
        self.styles.get(id)
    }

    /// True if the id exists in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.styles.contains_key(id)
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// True if the catalog holds no styles (never true in practice).
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Styles ordered for display: built-ins first, then customs, each
    /// group alphabetical by display name.
    pub fn iter_sorted(&self) -> Vec<&LineStyle> {
        let mut styles: Vec<&LineStyle> = self.styles.values().collect();
        styles.sort_by(|a, b| {
            (a.is_custom, &a.display_name).cmp(&(b.is_custom, &b.display_name))
        });
        styles
    }

    /// Creates an editable copy of an existing style.
    ///
    /// The copy gets a generated `custom_<hex>` id, a "Copy of" display
    /// name, and widened dash limits so the user can explore freely.
    /// Returns the new id.
    pub fn duplicate(&mut self, id: &str) -> Result<String> {
        let original = self
            .styles
            .get(id)
            .ok_or_else(|| Error::UnknownStyle { id: id.to_string() })?;

        let new_id = format!("custom_{}", &Uuid::new_v4().simple().to_string()[..8]);
        let mut copy = original.clone();
        copy.id = new_id.clone();
        copy.display_name = format!("Copy of {}", original.display_name);
        copy.is_custom = true;
        if copy.limits.is_some() {
            copy.limits = Some(DashLimits::new(0.1, 200.0, 0.1, 200.0));
        }

        tracing::debug!(source = id, new = %new_id, "duplicated line style");
        self.styles.insert(new_id.clone(), copy);
        Ok(new_id)
    }

    /// Sets a style's dash parameters, clamped to its limits.
    ///
    /// Styles without a dash pattern ignore the edit silently.
    pub fn set_dash_pattern(&mut self, id: &str, dash_mm: f64, gap_mm: f64) -> Result<()> {
        let style = self
            .styles
            .get_mut(id)
            .ok_or_else(|| Error::UnknownStyle { id: id.to_string() })?;

        if style.dash_pattern.is_none() {
            return Ok(());
        }
        let pattern = DashPattern::new(dash_mm, gap_mm);
        style.dash_pattern = Some(match style.limits {
            Some(limits) => limits.clamp(pattern),
            None => pattern,
        });
        Ok(())
    }

    /// Renames a custom style. Built-ins are rejected.
    pub fn rename(&mut self, id: &str, display_name: &str) -> Result<()> {
        let style = Self::get_custom_mut(&mut self.styles, id)?;
        style.display_name = display_name.to_string();
        Ok(())
    }

    /// Changes whether a custom style draws at the full base thickness.
    /// Built-ins are rejected.
    pub fn set_is_main(&mut self, id: &str, is_main: bool) -> Result<()> {
        let style = Self::get_custom_mut(&mut self.styles, id)?;
        style.is_main = is_main;
        Ok(())
    }

    /// Removes a custom style from the catalog and returns it.
    ///
    /// Built-ins are rejected. The caller is responsible for
    /// reassigning segments that still reference the removed id (see
    /// `Canvas::remove_style`).
    pub fn remove(&mut self, id: &str) -> Result<LineStyle> {
        let style = self
            .styles
            .get(id)
            .ok_or_else(|| Error::UnknownStyle { id: id.to_string() })?;
        if !style.is_custom {
            tracing::warn!(id, "attempted to delete a built-in style");
            return Err(Error::BuiltinStyleImmutable { id: id.to_string() });
        }
        self.styles
            .remove(id)
            .ok_or_else(|| Error::UnknownStyle { id: id.to_string() })
    }

    fn get_custom_mut<'a>(
        styles: &'a mut HashMap<String, LineStyle>,
        id: &str,
    ) -> Result<&'a mut LineStyle> {
        let style = styles
            .get_mut(id)
            .ok_or_else(|| Error::UnknownStyle { id: id.to_string() })?;
        if !style.is_custom {
            tracing::warn!(id, "attempted to edit a built-in style");
            return Err(Error::BuiltinStyleImmutable { id: id.to_string() });
        }
        Ok(style)
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// The GOST 2.303 standard line set.
fn builtin_styles() -> Vec<LineStyle> {
    let builtin = |id: &str,
                   display_name: &str,
                   base_type: BaseType,
                   is_main: bool,
                   dash_pattern: Option<DashPattern>,
                   limits: Option<DashLimits>| LineStyle {
        id: id.to_string(),
        display_name: display_name.to_string(),
        base_type,
        is_main,
        dash_pattern,
        limits,
        is_custom: false,
    };

    vec![
        builtin(
            "solid_main",
            "Continuous thick (main)",
            BaseType::Solid,
            true,
            None,
            None,
        ),
        builtin("solid_thin", "Continuous thin", BaseType::Solid, false, None, None),
        builtin("solid_wave", "Continuous wavy", BaseType::Wave, false, None, None),
        builtin(
            "solid_zigzag",
            "Continuous thin with zigzags",
            BaseType::Zigzag,
            false,
            None,
            None,
        ),
        builtin(
            "dashed",
            "Dashed",
            BaseType::Dashed,
            false,
            Some(DashPattern::new(5.0, 2.0)),
            Some(DashLimits::new(2.0, 8.0, 1.0, 2.0)),
        ),
        builtin(
            "dash_dot_main",
            "Dash-dot thick",
            BaseType::DashDot,
            true,
            Some(DashPattern::new(5.0, 3.0)),
            Some(DashLimits::new(3.0, 8.0, 3.0, 4.0)),
        ),
        builtin(
            "dash_dot_thin",
            "Dash-dot thin",
            BaseType::DashDot,
            false,
            Some(DashPattern::new(15.0, 4.0)),
            Some(DashLimits::new(5.0, 30.0, 3.0, 5.0)),
        ),
        builtin(
            "dash_dot_dot",
            "Dash-dot-dot",
            BaseType::DashDotDot,
            false,
            Some(DashPattern::new(15.0, 5.0)),
            Some(DashLimits::new(5.0, 30.0, 4.0, 6.0)),
        ),
    ]
}
