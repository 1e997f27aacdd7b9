//! Application state owned by the worker

use photo_layout::{
    Background, ImageLibrary, LayoutGeometry, LayoutMode, LayoutOptions, LayoutOverrides,
    LayoutStatistics, PhysicalSize, PreviewPage, Result, SizeId, SizeKind, SizeRegistry,
    SizeSpec, build_preview, calculate_layout, calculate_statistics,
};

/// Everything a layout session knows: the size registries, the uploaded
/// images and the current layout settings.
#[derive(Debug, Clone)]
pub struct Session {
    pub photo_sizes: SizeRegistry,
    pub paper_sizes: SizeRegistry,
    pub library: ImageLibrary,
    pub mode: LayoutMode,
    pub overrides: LayoutOverrides,
    pub background: Background,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            photo_sizes: SizeRegistry::photo_sizes(),
            paper_sizes: SizeRegistry::paper_sizes(),
            library: ImageLibrary::new(),
            mode: LayoutMode::default(),
            overrides: LayoutOverrides::default(),
            background: Background::default(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self, kind: SizeKind) -> &SizeRegistry {
        match kind {
            SizeKind::Photo => &self.photo_sizes,
            SizeKind::Paper => &self.paper_sizes,
        }
    }

    pub fn registry_mut(&mut self, kind: SizeKind) -> &mut SizeRegistry {
        match kind {
            SizeKind::Photo => &mut self.photo_sizes,
            SizeKind::Paper => &mut self.paper_sizes,
        }
    }

    pub fn photo(&self) -> &PhysicalSize {
        self.photo_sizes.selected()
    }

    pub fn paper(&self) -> &PhysicalSize {
        self.paper_sizes.selected()
    }

    /// Slot grid for the current selection
    pub fn geometry(&self) -> LayoutGeometry {
        calculate_layout(self.photo(), self.paper(), self.mode, &self.overrides)
    }

    pub fn statistics(&self) -> Result<LayoutStatistics> {
        calculate_statistics(self.library.len(), &self.geometry(), self.paper())
    }

    pub fn preview(&self) -> Vec<PreviewPage> {
        build_preview(
            self.library.images(),
            &self.geometry(),
            self.photo(),
            self.paper(),
        )
    }

    /// Snapshot of the current settings as a configuration
    pub fn options(&self) -> LayoutOptions {
        LayoutOptions {
            photo_size: size_spec(self.photo()),
            paper_size: size_spec(self.paper()),
            mode: self.mode,
            overrides: self.overrides,
            background: self.background,
        }
    }

    /// Apply a loaded configuration. Named sizes are selected from the
    /// registries, custom sizes are added to them.
    pub fn apply_options(&mut self, options: &LayoutOptions) -> Result<()> {
        options.validate()?;

        self.select_spec(SizeKind::Photo, &options.photo_size)?;
        self.select_spec(SizeKind::Paper, &options.paper_size)?;
        self.mode = options.mode;
        self.overrides = options.overrides;
        self.background = options.background;

        Ok(())
    }

    fn select_spec(&mut self, kind: SizeKind, spec: &SizeSpec) -> Result<SizeId> {
        let resolved = spec.resolve(kind)?;
        let registry = self.registry_mut(kind);

        let id = if resolved.is_custom {
            let existing = registry
                .sizes()
                .iter()
                .find(|s| s.is_custom && s.dimensions_mm() == resolved.dimensions_mm())
                .map(|s| s.id);
            match existing {
                Some(id) => id,
                None => registry.add_custom(resolved.width_mm, resolved.height_mm)?.id,
            }
        } else {
            resolved.id
        };

        registry.select(id)?;
        Ok(id)
    }
}

fn size_spec(size: &PhysicalSize) -> SizeSpec {
    if size.is_custom {
        SizeSpec::Custom {
            width_mm: size.width_mm,
            height_mm: size.height_mm,
        }
    } else {
        SizeSpec::Named(size.label.clone())
    }
}
