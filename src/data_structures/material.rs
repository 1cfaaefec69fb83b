//! Shading descriptions shared by every model that uses them.

use crate::data_structures::color::Color;

/// Specular exponent applied to lit materials unless stated otherwise.
pub const DEFAULT_SPECULAR_POWER: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Lit by the scene lights: flat diffuse color plus a white highlight.
    Diffuse { color: Color, specular_power: f32 },
    /// Self-lit: black diffuse base with an emitted color on top. Used for
    /// light sources and the translucent-looking zone volumes.
    Emissive { color: Color },
}

/// An immutable material. Tables hand it out behind an `Arc`, never mutate it.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    name: &'static str,
    shading: Shading,
}

impl Material {
    pub fn diffuse(name: &'static str, color: Color) -> Self {
        Self {
            name,
            shading: Shading::Diffuse {
                color,
                specular_power: DEFAULT_SPECULAR_POWER,
            },
        }
    }

    pub fn emissive(name: &'static str, color: Color) -> Self {
        Self {
            name,
            shading: Shading::Emissive { color },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shading(&self) -> Shading {
        self.shading
    }

    pub fn is_emissive(&self) -> bool {
        matches!(self.shading, Shading::Emissive { .. })
    }

    /// The color a viewer perceives, e.g. for legends or swatches.
    pub fn base_color(&self) -> Color {
        match self.shading {
            Shading::Diffuse { color, .. } | Shading::Emissive { color } => color,
        }
    }

    pub fn to_uniform(&self) -> MaterialUniform {
        match self.shading {
            Shading::Diffuse {
                color,
                specular_power,
            } => MaterialUniform {
                diffuse: color.to_linear_rgba(),
                emissive: [0.0, 0.0, 0.0, 1.0],
                specular_power,
                emissive_only: 0,
                _padding: [0; 2],
            },
            Shading::Emissive { color } => MaterialUniform {
                diffuse: Color::BLACK.to_linear_rgba(),
                emissive: color.to_linear_rgba(),
                specular_power: 0.0,
                emissive_only: 1,
                _padding: [0; 2],
            },
        }
    }
}

/**
 * The layout the fragment shader sees for a material. Colors are linear.
 * The trailing padding keeps the struct a multiple of 16 bytes for uniform buffers.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub diffuse: [f32; 4],
    pub emissive: [f32; 4],
    pub specular_power: f32,
    pub emissive_only: u32,
    _padding: [u32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<MaterialUniform>() % 16, 0);
    }

    #[test]
    fn emissive_material_has_black_diffuse() {
        let m = Material::emissive("Zone", Color::rgb(30, 30, 30));
        let u = m.to_uniform();
        assert_eq!(u.diffuse, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(u.emissive_only, 1);
        assert!(u.emissive[0] > 0.0);
        assert_eq!(m.base_color(), Color::rgb(30, 30, 30));
    }

    #[test]
    fn diffuse_material_uses_default_specular() {
        let m = Material::diffuse("Sun", Color::ORANGE);
        assert!(!m.is_emissive());
        assert_eq!(m.to_uniform().specular_power, DEFAULT_SPECULAR_POWER);
        assert_eq!(m.to_uniform().emissive_only, 0);
    }
}
