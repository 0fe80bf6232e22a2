/// Frame-stepped rendering context
use crate::config::{ConfigError, DrawOptions, RenderConfig};
use crate::depth::sort_by_depth;
use crate::geometry::Mesh;
use crate::pipeline::{project_mesh, FrameStats};
use crate::projection::{Camera, ProjectedTriangle, Viewport};
use crate::raster::FrameBuffer;
use crate::transform::{RotationState, Transform};

/// Side length of the square drawn on each vertex when `DrawOptions::vertices` is set
const VERTEX_MARKER_SIZE: i32 = 4;

/// Destination for finished frames, e.g. a window or terminal
pub trait PresentationSink {
    type Error;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}

/// Owns everything that changes from frame to frame: the rotation
/// accumulator, this frame's triangles and the pixel buffer.
///
/// Each frame is `update` (geometry) followed by `render` (pixels). The
/// mesh is only borrowed, so one mesh can feed several renderers.
pub struct Renderer {
    config: RenderConfig,
    camera: Camera,
    viewport: Viewport,
    rotation: RotationState,
    triangles: Vec<ProjectedTriangle>,
    frame: FrameBuffer,
    stats: FrameStats,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let viewport = config.viewport();
        Ok(Self {
            camera: config.camera(),
            frame: FrameBuffer::new(viewport.width as usize, viewport.height as usize),
            viewport,
            rotation: RotationState::zero(),
            triangles: Vec::new(),
            stats: FrameStats::default(),
            config,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Nudge the rotation outside the per-frame delta
    pub fn rotate_by(&mut self, dx: f32, dy: f32, dz: f32) {
        self.rotation.rotate(dx, dy, dz);
    }

    pub fn culling(&self) -> bool {
        self.config.cull_backfaces
    }

    pub fn set_culling(&mut self, enabled: bool) {
        self.config.cull_backfaces = enabled;
    }

    pub fn toggle_culling(&mut self) -> bool {
        self.config.cull_backfaces = !self.config.cull_backfaces;
        self.config.cull_backfaces
    }

    pub fn draw_options_mut(&mut self) -> &mut DrawOptions {
        &mut self.config.draw
    }

    /// The transform for the current rotation
    pub fn transform(&self) -> Transform {
        Transform::new(
            &self.rotation,
            self.config.base_rotation(),
            self.config.camera_z_offset,
        )
    }

    /// Whether `mesh` stays in front of the projection plane at every
    /// orientation with the configured camera offset
    pub fn fits(&self, mesh: &Mesh) -> bool {
        self.transform().is_safe_for(mesh)
    }

    /// Advance the rotation and rebuild this frame's triangles, sorted
    /// farthest first
    pub fn update(&mut self, mesh: &Mesh) -> FrameStats {
        self.rotation.advance(&self.config.rotation_delta());

        let transform = self.transform();
        self.stats = project_mesh(
            mesh,
            &transform,
            &self.camera,
            &self.viewport,
            self.config.cull_backfaces,
            &mut self.triangles,
        );
        sort_by_depth(&mut self.triangles);

        log::trace!(
            "frame: {} faces, {} culled, {} skipped, {} drawn",
            self.stats.faces,
            self.stats.culled,
            self.stats.skipped,
            self.stats.projected
        );
        self.stats
    }

    /// Draw the current triangles into a freshly cleared buffer
    pub fn render(&mut self) -> &FrameBuffer {
        let draw = self.config.draw;
        let colors = self.config.colors;

        self.frame.clear(colors.background);
        if draw.grid {
            self.frame
                .draw_grid(self.config.grid_spacing as usize, colors.grid);
        }

        for triangle in &self.triangles {
            if draw.fill {
                self.frame.fill_triangle(&triangle.points, colors.fill);
            }
            if draw.wireframe {
                self.frame.draw_triangle(&triangle.points, colors.wireframe);
            }
            if draw.vertices {
                for point in &triangle.points {
                    self.frame.draw_rect(
                        point.x.round() as i32 - VERTEX_MARKER_SIZE / 2,
                        point.y.round() as i32 - VERTEX_MARKER_SIZE / 2,
                        VERTEX_MARKER_SIZE,
                        VERTEX_MARKER_SIZE,
                        colors.vertex,
                    );
                }
            }
        }

        &self.frame
    }

    /// `update` then `render`
    pub fn frame(&mut self, mesh: &Mesh) -> &FrameBuffer {
        self.update(mesh);
        self.render()
    }

    /// Render and hand the buffer to a sink
    pub fn present<S: PresentationSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        let frame = self.render();
        sink.present(frame)
    }

    /// This frame's triangles in draw order
    pub fn triangles(&self) -> &[ProjectedTriangle] {
        &self.triangles
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}
