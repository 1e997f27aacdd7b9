//! Registries of physical photo and paper sizes
//!
//! Each registry holds the built-in sizes followed by any custom sizes the
//! user added, plus the current selection. Sizes are addressed by a
//! registry-unique [`SizeId`], so custom sizes with identical labels stay
//! selectable even though [`SizeRegistry::find_by_label`] only returns the
//! first match.

use crate::types::*;

/// Handle to a size inside one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeId(pub u64);

/// Physical dimensions in millimeters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalSize {
    pub id: SizeId,
    pub width_mm: f64,
    pub height_mm: f64,
    pub label: String,
    pub is_custom: bool,
}

impl PhysicalSize {
    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        self.width_mm / self.height_mm
    }

    pub fn dimensions_mm(&self) -> (f64, f64) {
        (self.width_mm, self.height_mm)
    }
}

/// Which pool a registry holds. Photo and paper sizes are never interchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Photo,
    Paper,
}

const BUILTIN_PHOTO_SIZES: &[(f64, f64, &str)] = &[
    (50.8, 50.8, "2x2 inch"),
    (35.0, 45.0, "Passport (35x45mm)"),
    (89.0, 127.0, "3.5x5 inch"),
    (102.0, 152.0, "4x6 inch"),
    (127.0, 178.0, "5x7 inch"),
    (203.0, 254.0, "8x10 inch"),
    (254.0, 305.0, "10x12 inch"),
    (25.0, 35.0, "ID Photo (25x35mm)"),
    (40.0, 60.0, "Visa (40x60mm)"),
];

const BUILTIN_PAPER_SIZES: &[(f64, f64, &str)] = &[
    (210.0, 297.0, "A4"),
    (216.0, 279.0, "Letter"),
    (182.0, 257.0, "B5"),
    (148.0, 210.0, "A5"),
    (297.0, 420.0, "A3"),
    (257.0, 364.0, "B4"),
    (105.0, 148.0, "A6"),
];

/// Ordered collection of sizes with a current selection
#[derive(Debug, Clone)]
pub struct SizeRegistry {
    kind: SizeKind,
    sizes: Vec<PhysicalSize>,
    selected: SizeId,
    next_id: u64,
}

impl SizeRegistry {
    /// Registry pre-populated with the built-in sizes of `kind`.
    /// The first built-in entry is selected.
    pub fn with_builtins(kind: SizeKind) -> Self {
        let table = match kind {
            SizeKind::Photo => BUILTIN_PHOTO_SIZES,
            SizeKind::Paper => BUILTIN_PAPER_SIZES,
        };

        let sizes: Vec<PhysicalSize> = table
            .iter()
            .enumerate()
            .map(|(idx, &(width_mm, height_mm, label))| PhysicalSize {
                id: SizeId(idx as u64),
                width_mm,
                height_mm,
                label: label.to_string(),
                is_custom: false,
            })
            .collect();

        Self {
            kind,
            next_id: sizes.len() as u64,
            selected: SizeId(0),
            sizes,
        }
    }

    pub fn photo_sizes() -> Self {
        Self::with_builtins(SizeKind::Photo)
    }

    pub fn paper_sizes() -> Self {
        Self::with_builtins(SizeKind::Paper)
    }

    pub fn kind(&self) -> SizeKind {
        self.kind
    }

    pub fn sizes(&self) -> &[PhysicalSize] {
        &self.sizes
    }

    pub fn get(&self, id: SizeId) -> Option<&PhysicalSize> {
        self.sizes.iter().find(|s| s.id == id)
    }

    /// First size whose label matches
    pub fn find_by_label(&self, label: &str) -> Option<&PhysicalSize> {
        self.sizes.iter().find(|s| s.label == label)
    }

    /// Currently selected size. The registry always holds the built-ins, so
    /// there is always a selection.
    pub fn selected(&self) -> &PhysicalSize {
        self.get(self.selected).unwrap_or(&self.sizes[0])
    }

    pub fn select(&mut self, id: SizeId) -> Result<&PhysicalSize> {
        if self.get(id).is_none() {
            return Err(LayoutError::SizeNotFound(id.0));
        }
        self.selected = id;
        Ok(self.selected())
    }

    /// Add a user-defined size and select it.
    pub fn add_custom(&mut self, width_mm: f64, height_mm: f64) -> Result<&PhysicalSize> {
        validate_dimensions(width_mm, height_mm)?;

        let id = SizeId(self.next_id);
        self.next_id += 1;
        self.sizes.push(PhysicalSize {
            id,
            width_mm,
            height_mm,
            label: custom_label(width_mm, height_mm),
            is_custom: true,
        });
        self.selected = id;
        log::debug!("Added custom {:?} size {}×{}mm", self.kind, width_mm, height_mm);

        Ok(self.selected())
    }

    /// Remove a custom size. Built-in sizes cannot be removed. When the
    /// removed size was selected, the selection falls back to the first entry.
    pub fn delete(&mut self, id: SizeId) -> Result<PhysicalSize> {
        let idx = self
            .sizes
            .iter()
            .position(|s| s.id == id)
            .ok_or(LayoutError::SizeNotFound(id.0))?;

        if !self.sizes[idx].is_custom {
            return Err(LayoutError::NotCustom(self.sizes[idx].label.clone()));
        }

        let removed = self.sizes.remove(idx);
        if self.selected == id {
            self.selected = self.sizes[0].id;
        }

        Ok(removed)
    }
}

/// Reject non-positive (or non-finite) dimensions
pub fn validate_dimensions(width_mm: f64, height_mm: f64) -> Result<()> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(width_mm) && valid(height_mm) {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension {
            width: width_mm,
            height: height_mm,
        })
    }
}

fn custom_label(width_mm: f64, height_mm: f64) -> String {
    format!("Custom {}×{}mm", width_mm, height_mm)
}
