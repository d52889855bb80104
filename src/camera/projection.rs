//! Render-time matrices derived from [`CameraState`].
//!
//! Conventions follow the legacy fixed-function setup the viewport was built
//! around: OpenGL clip space (`[-1, 1]` depth), eye on the -Y axis looking
//! at the origin with +Z up, and an aspect term of `sqrt(width / height)`
//! split between the horizontal and vertical extents.

use glam::{DMat4, DVec3, DVec4};

use super::state::CameraState;

/// Far clip distance. Orthographic views clip symmetrically at ± this.
pub const FAR_PLANE: f64 = 100_000.0;
/// Near clip distance for perspective views.
pub const NEAR_PLANE: f64 = 10.0;
/// Width in pixels of scene lines that do not set their own.
pub const SCENE_LINE_WIDTH: f32 = 2.0;

/// A white directional light, fixed relative to the viewer.
///
/// The direction is given before the eye transform and the scene rotation,
/// so the lighting does not turn with the scene. Hosts are expected to
/// renormalize transformed normals and let vertex colors drive the ambient
/// and diffuse material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Direction toward the light (`w = 0` in homogeneous terms).
    pub direction: DVec3,
    /// RGBA diffuse intensity.
    pub diffuse: [f32; 4],
}

/// The two scene lights: one from the front upper left, one opposite it.
pub const SCENE_LIGHTS: [DirectionalLight; 2] = [
    DirectionalLight {
        direction: DVec3::new(-1.0, -1.0, 1.0),
        diffuse: [1.0; 4],
    },
    DirectionalLight {
        direction: DVec3::new(1.0, 1.0, -1.0),
        diffuse: [1.0; 4],
    },
];

/// Equivalent of `glFrustum`.
#[must_use]
pub fn frustum(
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
) -> DMat4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;
    DMat4::from_cols(
        DVec4::new(2.0 * near / w, 0.0, 0.0, 0.0),
        DVec4::new(0.0, 2.0 * near / h, 0.0, 0.0),
        DVec4::new((right + left) / w, (top + bottom) / h, -(far + near) / d, -1.0),
        DVec4::new(0.0, 0.0, -2.0 * far * near / d, 0.0),
    )
}

/// The `sqrt(width / height)` aspect term. A zero height counts as one
/// pixel.
#[must_use]
pub fn aspect_term(width: u32, height: u32) -> f64 {
    (f64::from(width.max(1)) / f64::from(height.max(1))).sqrt()
}

/// Eye transform shared by the scene and the corner axes: eye at
/// `(0, -distance, 0)`, looking at the origin, +Z up.
#[must_use]
pub fn look_at(distance: f64) -> DMat4 {
    DMat4::look_at_rh(DVec3::new(0.0, -distance, 0.0), DVec3::ZERO, DVec3::Z)
}

/// Scene rotation `Rx(rx) · Ry(ry) · Rz(rz)`.
#[must_use]
pub fn rotation_matrix(rotation: DVec3) -> DMat4 {
    DMat4::from_rotation_x(rotation.x.to_radians())
        * DMat4::from_rotation_y(rotation.y.to_radians())
        * DMat4::from_rotation_z(rotation.z.to_radians())
}

/// Map a point through `transform` to window pixels (origin bottom-left),
/// like `gluProject`. Returns `None` when the point lands on `w = 0`.
#[must_use]
pub fn project_to_window(transform: DMat4, point: DVec3, viewport: (u32, u32)) -> Option<DVec3> {
    let clip = transform * point.extend(1.0);
    if clip.w == 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    let (w, h) = (f64::from(viewport.0), f64::from(viewport.1));
    Some(DVec3::new(
        w * (ndc.x + 1.0) / 2.0,
        h * (ndc.y + 1.0) / 2.0,
        (ndc.z + 1.0) / 2.0,
    ))
}

/// Matrices for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSetup {
    /// Viewport size in pixels.
    pub viewport: (u32, u32),
    /// `sqrt(width / height)`.
    pub aspect: f64,
    /// Projection, including the eye transform.
    pub projection: DMat4,
    /// Scene rotation only.
    pub rotation: DMat4,
    /// Scene rotation followed by the camera translation.
    pub model: DMat4,
    /// Whether `projection` is orthographic.
    pub ortho: bool,
    /// Scene lights.
    pub lights: [DirectionalLight; 2],
    /// Width in pixels for scene lines.
    pub line_width: f32,
}

impl FrameSetup {
    /// Build the frame matrices for `camera` in a `viewport`-sized surface.
    #[must_use]
    pub fn new(camera: &CameraState, viewport: (u32, u32)) -> Self {
        let a = aspect_term(viewport.0, viewport.1);
        let d = camera.distance;
        let lens = if camera.ortho {
            DMat4::orthographic_rh_gl(
                -a * d / 10.0,
                a * d / 10.0,
                -(1.0 / a) * d / 10.0,
                (1.0 / a) * d / 10.0,
                -FAR_PLANE,
                FAR_PLANE,
            )
        } else {
            frustum(-a, a, -(1.0 / a), 1.0 / a, NEAR_PLANE, FAR_PLANE)
        };
        let rotation = rotation_matrix(camera.rotation);

        Self {
            viewport,
            aspect: a,
            projection: lens * look_at(d),
            rotation,
            model: rotation * DMat4::from_translation(camera.translation),
            ortho: camera.ortho,
            lights: SCENE_LIGHTS,
            line_width: SCENE_LINE_WIDTH,
        }
    }

    /// Full transform for scene geometry.
    #[must_use]
    pub fn model_view_projection(&self) -> DMat4 {
        self.projection * self.model
    }

    /// Transform for geometry attached to the rotation center (before the
    /// camera translation).
    #[must_use]
    pub fn rotation_view_projection(&self) -> DMat4 {
        self.projection * self.rotation
    }

    /// Project a world-space point to window pixels.
    #[must_use]
    pub fn project(&self, point: DVec3) -> Option<DVec3> {
        project_to_window(self.model_view_projection(), point, self.viewport)
    }

    /// GPU-friendly copy of the frame matrices.
    #[must_use]
    pub fn uniform(&self) -> ViewUniform {
        ViewUniform {
            projection: self.projection.as_mat4().to_cols_array_2d(),
            model: self.model.as_mat4().to_cols_array_2d(),
            lights: self
                .lights
                .map(|light| light.direction.as_vec3().extend(0.0).to_array()),
            viewport: [self.viewport.0 as f32, self.viewport.1 as f32],
            aspect: self.aspect as f32,
            ortho: u32::from(self.ortho),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform buffer layout of a [`FrameSetup`], column-major f32.
pub struct ViewUniform {
    /// Projection including the eye transform.
    pub projection: [[f32; 4]; 4],
    /// Scene rotation and translation.
    pub model: [[f32; 4]; 4],
    /// Light directions, `w = 0`.
    pub lights: [[f32; 4]; 2],
    /// Viewport size in pixels (the edge shader's x/y scale).
    pub viewport: [f32; 2],
    /// `sqrt(width / height)`.
    pub aspect: f32,
    /// 1 for orthographic, 0 for perspective.
    pub ortho: u32,
}
