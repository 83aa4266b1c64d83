use glam::{Vec3, Vec4};

/// Primitive shapes the renderer knows how to tessellate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// Unit-radius UV sphere; `detail` selects the tessellation level.
    Sphere { detail: SphereDetail },
    /// Unit cube centred at the origin.
    Cube,
    /// Torus with major radius 1 and the given tube radius in thousandths.
    Torus { tube_milli: u16 },
    /// Unit quad in the XY plane facing +Z.
    Quad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SphereDetail {
    Low,
    High,
}

/// Texture a material samples from; resolved by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// The remotely loaded planet surface map.
    Earth,
    /// "UI UX" caption plate on the orbiting marker.
    UiPlate,
    /// Rasterised text label for the service at this index.
    Label(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Lambert-lit surface with an emissive term.
    Lit,
    /// Unlit, alpha blended; used for labels and particles.
    Unlit,
    /// View-dependent rim glow, blended additively.
    ///
    /// `view` is refreshed every frame from the camera position so intensity
    /// tracks the viewing angle.
    Glow { view: Vec3, c: f32, p: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec4,
    pub emissive: Vec3,
    pub shading: Shading,
    pub texture: Option<TextureSlot>,
    /// Blend additively regardless of shading.
    pub additive: bool,
}

impl Material {
    pub fn lit(color: Vec4) -> Self {
        Self {
            color,
            emissive: Vec3::ZERO,
            shading: Shading::Lit,
            texture: None,
            additive: false,
        }
    }

    pub fn unlit(color: Vec4) -> Self {
        Self {
            shading: Shading::Unlit,
            ..Self::lit(color)
        }
    }

    pub fn glow(color: Vec4, c: f32, p: f32) -> Self {
        Self {
            shading: Shading::Glow {
                view: Vec3::Z,
                c,
                p,
            },
            ..Self::lit(color)
        }
    }

    pub fn with_emissive(mut self, emissive: Vec3) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_texture(mut self, slot: TextureSlot) -> Self {
        self.texture = Some(slot);
        self
    }

    pub fn with_additive(mut self) -> Self {
        self.additive = true;
        self
    }

    #[inline]
    pub fn is_glow(&self) -> bool {
        matches!(self.shading, Shading::Glow { .. })
    }

    /// Replace the glow view vector; no-op for other shading modes.
    pub fn set_glow_view(&mut self, v: Vec3) {
        if let Shading::Glow { view, .. } = &mut self.shading {
            *view = v;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Renderable {
    pub geometry: Geometry,
    pub material: Material,
}
