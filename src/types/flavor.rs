//! Flavor type: one branded build variant of the app.

use serde::Serialize;

use super::{ColourScheme, Glyph};

/// A branded app variant with its colours and glyph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flavor {
    /// Directory name under the Android source tree (e.g. `patient`).
    pub name: String,
    /// Human label for progress output (e.g. "Teal").
    pub label: String,
    pub scheme: ColourScheme,
    pub glyph: Glyph,
}

impl Flavor {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        scheme: ColourScheme,
        glyph: Glyph,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            scheme,
            glyph,
        }
    }

    /// Flutter build command that picks up this flavor's assets.
    pub fn build_hint(&self) -> String {
        format!(
            "flutter build apk --flavor {name} -t lib/main_{name}.dart",
            name = self.name
        )
    }
}

/// Builtin flavors used when no manifest overrides them.
pub struct BuiltinFlavors;

impl BuiltinFlavors {
    pub fn patient() -> Flavor {
        Flavor::new("patient", "Teal", ColourScheme::TEAL, Glyph::Heart)
    }

    pub fn doctor() -> Flavor {
        Flavor::new("doctor", "Indigo", ColourScheme::INDIGO, Glyph::Cross)
    }

    /// All builtin flavors, in generation order.
    pub fn all() -> Vec<Flavor> {
        vec![Self::patient(), Self::doctor()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins() {
        let all = BuiltinFlavors::all();
        let names: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["patient", "doctor"]);
        assert_eq!(all[0].glyph, Glyph::Heart);
        assert_eq!(all[1].glyph, Glyph::Cross);
    }

    #[test]
    fn test_build_hint() {
        assert_eq!(
            BuiltinFlavors::doctor().build_hint(),
            "flutter build apk --flavor doctor -t lib/main_doctor.dart"
        );
    }
}
