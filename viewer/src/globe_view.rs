//! The globe widget: owns the scene, camera, and GPU resources, and draws
//! into a caller-provided render pass.

use engine::borders;
use engine::config::GlobeConfig;
use engine::marker::Marker;
use engine::scene::{GlobeScene, MARKER_DOT_RADIUS};

use crate::globe::mesh::{self, SphereMesh};
use crate::globe::pipeline::DEPTH_FORMAT;
use crate::globe::{GlobeRenderer, OrbitCamera};

const GLOBE_STACKS: u32 = 64;
const GLOBE_SLICES: u32 = 64;
const DOT_STACKS: u32 = 8;
const DOT_SLICES: u32 = 8;

pub struct GlobeView {
    renderer: GlobeRenderer,
    pub camera: OrbitCamera,
    scene: GlobeScene,
    markers: Vec<Marker>,
    globe_mesh: SphereMesh,
    dot_mesh: SphereMesh,
    border_lines: Option<(wgpu::Buffer, u32)>,
    graticule_lines: Option<(wgpu::Buffer, u32)>,
    marker_instances: Option<(wgpu::Buffer, u32)>,
    depth_view: wgpu::TextureView,
    depth_size: (u32, u32),
}

impl GlobeView {
    /// Builds the widget from caller input. Call [`GlobeView::resize`] before
    /// the first frame so the depth attachment matches the surface.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        markers: &[Marker],
        config: GlobeConfig,
    ) -> Self {
        let boundaries = borders::parse(borders::WORLD_BORDERS_STR)
            .unwrap_or_else(|e| panic!("embedded boundary data: {e}"));
        let scene = GlobeScene::compose(markers, config, &boundaries);
        log::info!(
            "[globe] r={} markers={} borders={} graticules={} atmosphere={}",
            scene.radius,
            scene.marker_dots.len(),
            scene.border_segments.len(),
            scene.graticule_segments.len(),
            scene.atmosphere.is_some()
        );

        let renderer = GlobeRenderer::new(device, surface_format);
        let globe_mesh = mesh::build_sphere_mesh(device, GLOBE_STACKS, GLOBE_SLICES, "globe mesh");
        let dot_mesh = mesh::build_sphere_mesh(device, DOT_STACKS, DOT_SLICES, "marker dot mesh");
        let border_lines =
            mesh::upload_line_segments(device, &scene.border_segments, "border lines");
        let graticule_lines =
            mesh::upload_line_segments(device, &scene.graticule_segments, "graticule lines");
        let marker_instances =
            mesh::upload_marker_instances(device, &scene.marker_dots, MARKER_DOT_RADIUS);

        let camera = OrbitCamera::default();
        let (depth_view, depth_size) = create_depth(device, 1, 1);
        renderer.update_uniforms(
            queue,
            &scene,
            camera.view_proj(),
            glam::Mat4::IDENTITY.to_cols_array_2d(),
            camera.eye(),
        );

        Self {
            renderer,
            camera,
            scene,
            markers: markers.to_vec(),
            globe_mesh,
            dot_mesh,
            border_lines,
            graticule_lines,
            marker_instances,
            depth_view,
            depth_size,
        }
    }

    /// Swaps in a new appearance bundle and recomposes the scene; accumulated
    /// rotation carries over so the globe does not snap back.
    pub fn set_config(&mut self, device: &wgpu::Device, config: GlobeConfig) {
        let boundaries = borders::parse(borders::WORLD_BORDERS_STR)
            .unwrap_or_else(|e| panic!("embedded boundary data: {e}"));
        let mut scene = GlobeScene::compose(&self.markers, config, &boundaries);
        scene.rotation_y = self.scene.rotation_y;
        scene.frame = self.scene.frame;
        self.graticule_lines =
            mesh::upload_line_segments(device, &scene.graticule_segments, "graticule lines");
        self.scene = scene;
    }

    /// Current composed scene.
    pub fn scene(&self) -> &GlobeScene {
        &self.scene
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        self.camera.aspect = width as f32 / height as f32;
        if (width, height) != self.depth_size {
            let (view, size) = create_depth(device, width, height);
            self.depth_view = view;
            self.depth_size = size;
        }
    }

    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// Per-frame tick: orbit input, idle spin, uniform upload.
    pub fn update(
        &mut self,
        queue: &wgpu::Queue,
        dt: f32,
        egui_ctx: &egui::Context,
        ui_hijacked: bool,
    ) {
        self.camera.update_from_input(egui_ctx, ui_hijacked);
        self.camera.auto_rotate(dt);
        self.scene.advance_frame();
        let model = glam::Mat4::from_rotation_y(self.scene.rotation_y).to_cols_array_2d();
        self.renderer.update_uniforms(
            queue,
            &self.scene,
            self.camera.view_proj(),
            model,
            self.camera.eye(),
        );
    }

    /// Draws every layer. Opaque first, then lines, then the translucent
    /// shell last.
    pub fn render<'a>(&'a self, rpass: &mut wgpu::RenderPass<'a>) {
        self.renderer.draw_globe(rpass, &self.globe_mesh);
        if let Some((buf, count)) = &self.border_lines {
            self.renderer.draw_lines(rpass, buf, *count);
        }
        if let Some((buf, count)) = &self.graticule_lines {
            self.renderer.draw_lines(rpass, buf, *count);
        }
        if let Some((buf, count)) = &self.marker_instances {
            self.renderer.draw_markers(rpass, &self.dot_mesh, buf, *count);
        }
        if self.scene.atmosphere.is_some() {
            self.renderer.draw_atmosphere(rpass, &self.globe_mesh);
        }
    }
}

fn create_depth(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::TextureView, (u32, u32)) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("globe depth"),
        size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    (tex.create_view(&wgpu::TextureViewDescriptor::default()), (width, height))
}
