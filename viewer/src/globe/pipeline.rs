use wgpu::util::DeviceExt;

use engine::scene::{GlobeScene, ATMOSPHERE_OPACITY};

use super::mesh::{LineVertex, MarkerInstance, SphereMesh, SphereVertex};

/// Depth attachment format shared by every globe pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    globe_color: [f32; 4],
    emissive: [f32; 4],
    polygon_color: [f32; 4],
    atmosphere_color: [f32; 4],
    ambient_light: [f32; 4],
    dir_left_light: [f32; 4],
    dir_top_light: [f32; 4],
    point_light: [f32; 4],
    params: [f32; 4],
}

impl Globals {
    fn zeroed() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

pub struct GlobeRenderer {
    pub globe_pipeline: wgpu::RenderPipeline,
    pub line_pipeline: wgpu::RenderPipeline,
    pub marker_pipeline: wgpu::RenderPipeline,
    pub atmosphere_pipeline: wgpu::RenderPipeline,
    pub bind_group: wgpu::BindGroup,
    pub uniform_buf: wgpu::Buffer,
}

impl GlobeRenderer {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let uniform_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globe uniforms"),
            contents: bytemuck::bytes_of(&Globals::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globe bgl uniforms"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    min_binding_size: None,
                    has_dynamic_offset: false,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globe bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            }],
        });

        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("globe pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let module = |label: &str, src: &str| {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(src.into()),
            })
        };
        let globe_vert = module("globe vert", include_str!("../shaders/globe.vert.wgsl"));
        let globe_frag = module("globe frag", include_str!("../shaders/globe.frag.wgsl"));
        let lines_vert = module("lines vert", include_str!("../shaders/lines.vert.wgsl"));
        let lines_frag = module("lines frag", include_str!("../shaders/lines.frag.wgsl"));
        let marker_vert = module("marker vert", include_str!("../shaders/marker.vert.wgsl"));
        let marker_frag = module("marker frag", include_str!("../shaders/marker.frag.wgsl"));
        let atmo_vert = module("atmosphere vert", include_str!("../shaders/atmosphere.vert.wgsl"));
        let atmo_frag = module("atmosphere frag", include_str!("../shaders/atmosphere.frag.wgsl"));

        let sphere_layout = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
            }],
        }];

        let line_layout = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
            }],
        }];

        let marker_layout = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<SphereVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                }],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MarkerInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        shader_location: 1,
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                    },
                    wgpu::VertexAttribute {
                        shader_location: 2,
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                    },
                    wgpu::VertexAttribute {
                        shader_location: 3,
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                    },
                ],
            },
        ];

        let color_target = Some(wgpu::ColorTargetState {
            format: surface_format,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            write_mask: wgpu::ColorWrites::ALL,
        });

        let depth_rw = wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        };

        let globe_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("globe pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &globe_vert,
                entry_point: "main",
                buffers: &sphere_layout,
            },
            fragment: Some(wgpu::FragmentState {
                module: &globe_frag,
                entry_point: "main",
                targets: &[color_target.clone()],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(depth_rw.clone()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        // Lines sit exactly on the sphere; the bias keeps them from
        // z-fighting the surface they trace.
        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("globe line pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &lines_vert,
                entry_point: "main",
                buffers: &line_layout,
            },
            fragment: Some(wgpu::FragmentState {
                module: &lines_frag,
                entry_point: "main",
                targets: &[color_target.clone()],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState { constant: -2, slope_scale: 0.0, clamp: 0.0 },
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let marker_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("marker pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &marker_vert,
                entry_point: "main",
                buffers: &marker_layout,
            },
            fragment: Some(wgpu::FragmentState {
                module: &marker_frag,
                entry_point: "main",
                targets: &[color_target.clone()],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(depth_rw),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        // Inside faces only, drawn last with no depth write: the shell shows
        // as a rim around the limb and never occludes the surface.
        let atmosphere_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("atmosphere pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &atmo_vert,
                entry_point: "main",
                buffers: &sphere_layout,
            },
            fragment: Some(wgpu::FragmentState {
                module: &atmo_frag,
                entry_point: "main",
                targets: &[color_target],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Front),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        Self {
            globe_pipeline,
            line_pipeline,
            marker_pipeline,
            atmosphere_pipeline,
            bind_group,
            uniform_buf,
        }
    }

    pub fn update_uniforms(
        &self,
        queue: &wgpu::Queue,
        scene: &GlobeScene,
        view_proj: [[f32; 4]; 4],
        model: [[f32; 4]; 4],
        eye: glam::Vec3,
    ) {
        let cfg = &scene.config;
        let mut emissive = cfg.emissive.to_linear_rgba();
        emissive[3] = cfg.emissive_intensity;
        let mut atmosphere_color = cfg.atmosphere_color.to_linear_rgba();
        atmosphere_color[3] = ATMOSPHERE_OPACITY;
        let atmosphere_radius = scene.atmosphere.map_or(scene.radius, |a| a.radius);
        let u = Globals {
            view_proj,
            model,
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            globe_color: cfg.globe_color.to_linear_rgba(),
            emissive,
            polygon_color: cfg.polygon_color.to_linear_rgba(),
            atmosphere_color,
            ambient_light: cfg.ambient_light.to_linear_rgba(),
            dir_left_light: cfg.directional_left_light.to_linear_rgba(),
            dir_top_light: cfg.directional_top_light.to_linear_rgba(),
            point_light: cfg.point_light.to_linear_rgba(),
            params: [scene.radius, cfg.shininess, atmosphere_radius, 0.0],
        };
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&u));
    }

    pub fn draw_globe<'a>(&'a self, rpass: &mut wgpu::RenderPass<'a>, mesh: &'a SphereMesh) {
        rpass.set_pipeline(&self.globe_pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.vertex_buf.slice(..));
        rpass.set_index_buffer(mesh.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    pub fn draw_lines<'a>(
        &'a self,
        rpass: &mut wgpu::RenderPass<'a>,
        line_buf: &'a wgpu::Buffer,
        vertex_count: u32,
    ) {
        rpass.set_pipeline(&self.line_pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, line_buf.slice(..));
        rpass.draw(0..vertex_count, 0..1);
    }

    pub fn draw_markers<'a>(
        &'a self,
        rpass: &mut wgpu::RenderPass<'a>,
        mesh: &'a SphereMesh,
        instance_buf: &'a wgpu::Buffer,
        instance_count: u32,
    ) {
        rpass.set_pipeline(&self.marker_pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.vertex_buf.slice(..));
        rpass.set_vertex_buffer(1, instance_buf.slice(..));
        rpass.set_index_buffer(mesh.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..mesh.index_count, 0, 0..instance_count);
    }

    pub fn draw_atmosphere<'a>(&'a self, rpass: &mut wgpu::RenderPass<'a>, mesh: &'a SphereMesh) {
        rpass.set_pipeline(&self.atmosphere_pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.vertex_buf.slice(..));
        rpass.set_index_buffer(mesh.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
