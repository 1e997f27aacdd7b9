use crate::layout::{LayoutGeometry, calculate_layout};
use crate::sizes::{PhysicalSize, SizeKind, SizeRegistry, validate_dimensions};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A photo or paper size as written in a configuration: either the label of
/// a built-in size or explicit dimensions.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeSpec {
    Named(String),
    Custom { width_mm: f64, height_mm: f64 },
}

impl SizeSpec {
    pub fn named(label: impl Into<String>) -> Self {
        SizeSpec::Named(label.into())
    }

    /// Resolve against the built-in sizes of `kind`.
    ///
    /// Labels match exactly first, then case-insensitively.
    pub fn resolve(&self, kind: SizeKind) -> Result<PhysicalSize> {
        let mut registry = SizeRegistry::with_builtins(kind);
        match self {
            SizeSpec::Named(label) => registry
                .find_by_label(label)
                .or_else(|| {
                    registry
                        .sizes()
                        .iter()
                        .find(|size| size.label.eq_ignore_ascii_case(label))
                })
                .cloned()
                .ok_or_else(|| {
                    LayoutError::Config(format!("Unknown {:?} size '{}'", kind, label))
                }),
            SizeSpec::Custom {
                width_mm,
                height_mm,
            } => registry.add_custom(*width_mm, *height_mm).cloned(),
        }
    }
}

/// Complete layout configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    // Sizes
    pub photo_size: SizeSpec,
    pub paper_size: SizeSpec,

    // Arrangement
    pub mode: LayoutMode,
    pub overrides: LayoutOverrides,

    // Output
    pub background: Background,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            photo_size: SizeSpec::named("2x2 inch"),
            paper_size: SizeSpec::named("A4"),
            mode: LayoutMode::default(),
            overrides: LayoutOverrides::default(),
            background: Background::default(),
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn photo(&self) -> Result<PhysicalSize> {
        self.photo_size.resolve(SizeKind::Photo)
    }

    pub fn paper(&self) -> Result<PhysicalSize> {
        self.paper_size.resolve(SizeKind::Paper)
    }

    /// Slot grid for these options
    pub fn geometry(&self) -> Result<LayoutGeometry> {
        Ok(calculate_layout(
            &self.photo()?,
            &self.paper()?,
            self.mode,
            &self.overrides,
        ))
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        for spec in [&self.photo_size, &self.paper_size] {
            if let SizeSpec::Custom {
                width_mm,
                height_mm,
            } = spec
            {
                validate_dimensions(*width_mm, *height_mm)?;
            }
        }
        self.photo()?;
        self.paper()?;

        let padding = self.overrides.custom_padding_mm.unwrap_or(self.mode.padding_mm());
        if !padding.is_finite() || padding < 0.0 {
            return Err(LayoutError::Config(format!(
                "Padding must be zero or positive, got {}mm",
                padding
            )));
        }

        self.overrides.validate()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // A size is either a bare label string or a {width_mm, height_mm} map
    impl Serialize for SizeSpec {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;
            match self {
                SizeSpec::Named(label) => serializer.serialize_str(label),
                SizeSpec::Custom {
                    width_mm,
                    height_mm,
                } => {
                    let mut s = serializer.serialize_struct("Custom", 2)?;
                    s.serialize_field("width_mm", width_mm)?;
                    s.serialize_field("height_mm", height_mm)?;
                    s.end()
                }
            }
        }
    }

    impl<'de> Deserialize<'de> for SizeSpec {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            use serde::de::{self, MapAccess, Visitor};
            use std::fmt;

            struct SizeSpecVisitor;

            impl<'de> Visitor<'de> for SizeSpecVisitor {
                type Value = SizeSpec;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a size label or {width_mm, height_mm}")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<SizeSpec, E>
                where
                    E: de::Error,
                {
                    Ok(SizeSpec::Named(value.to_string()))
                }

                fn visit_map<M>(self, mut map: M) -> std::result::Result<SizeSpec, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut width_mm = None;
                    let mut height_mm = None;

                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "width_mm" => width_mm = Some(map.next_value()?),
                            "height_mm" => height_mm = Some(map.next_value()?),
                            _ => {
                                let _: serde::de::IgnoredAny = map.next_value()?;
                            }
                        }
                    }

                    match (width_mm, height_mm) {
                        (Some(w), Some(h)) => Ok(SizeSpec::Custom {
                            width_mm: w,
                            height_mm: h,
                        }),
                        _ => Err(de::Error::missing_field("width_mm or height_mm")),
                    }
                }
            }

            deserializer.deserialize_any(SizeSpecVisitor)
        }
    }
}
