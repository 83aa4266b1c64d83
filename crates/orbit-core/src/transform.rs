use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

/// Local transform of a scene node.
///
/// Rotation is stored as XYZ Euler angles in radians so that drag and nudge
/// commands can address yaw/pitch directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    pub fn set_quat(&mut self, q: Quat) {
        let (x, y, z) = q.to_euler(EulerRot::XYZ);
        self.rotation = Vec3::new(x, y, z);
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

/// Orientation whose local +Z axis points from `from` towards `to`.
///
/// Falls back to identity when the points coincide, and picks another up
/// vector when the direction is parallel to `up`.
pub fn facing_rotation(from: Vec3, to: Vec3, up: Vec3) -> Quat {
    let Some(z) = (to - from).try_normalize() else {
        return Quat::IDENTITY;
    };
    let x = match up.cross(z).try_normalize() {
        Some(x) => x,
        None => Vec3::X.cross(z).try_normalize().unwrap_or(Vec3::Z),
    };
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}
