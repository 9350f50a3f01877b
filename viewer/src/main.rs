//! Terrella demo binary: the sample globe with three city markers.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

use egui_wgpu::Renderer as EguiRenderer;
use egui_wgpu::ScreenDescriptor;
use egui_winit::State as EguiWinitState;
use rand::seq::SliceRandom;
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use engine::color::Color;
use engine::config::GlobeConfig;
use engine::marker::Marker;
use viewer::globe_view::GlobeView;

/// Marker palette of the sample fixture.
const MARKER_PALETTE: [&str; 3] = ["#06b6d4", "#3b82f6", "#6366f1"];

fn sample_markers() -> Vec<Marker> {
    let mut rng = rand::thread_rng();
    let mut pick = |id: &str, label: &str, lat: f64, lon: f64| Marker {
        id: id.to_string(),
        label: Some(label.to_string()),
        color: MARKER_PALETTE
            .choose(&mut rng)
            .copied()
            .unwrap_or(MARKER_PALETTE[0])
            .parse::<Color>()
            .unwrap_or_else(|e| panic!("palette color: {e}")),
        lat,
        lon,
    };
    vec![
        pick("sfo", "San Francisco", 37.77, -122.42),
        pick("lon", "London", 51.51, -0.13),
        pick("syd", "Sydney", -33.87, 151.21),
    ]
}

struct GpuState<'w> {
    _instance: wgpu::Instance,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window) -> Self {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = match instance.create_surface(window) {
            Ok(s) => s,
            Err(e) => panic!("create surface: {e}"),
        };

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .unwrap_or_else(|| panic!("no suitable GPU adapters"));

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .unwrap_or_else(|e| panic!("request device: {e}"));

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Self { _instance: instance, surface, device, queue, config }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("[viewer] terrella v{} starting", engine::version());

    let event_loop = EventLoop::new().unwrap_or_else(|e| panic!("event loop: {e}"));
    let title = format!("Terrella v{}", engine::version());
    let window_init = WindowBuilder::new()
        .with_title(title)
        .build(&event_loop)
        .unwrap_or_else(|e| panic!("create window: {e}"));

    // Leak the window to obtain a 'static reference for the surface lifetime without unsafe.
    let window: &'static Window = Box::leak(Box::new(window_init));
    let mut gpu = pollster::block_on(GpuState::new(window));
    let egui_ctx = egui::Context::default();
    let mut egui_state =
        EguiWinitState::new(egui_ctx.clone(), egui::ViewportId::ROOT, &event_loop, None, None);
    let surface_format = gpu.config.format;
    let mut egui_renderer = EguiRenderer::new(&gpu.device, surface_format, None, 1);

    let markers = sample_markers();
    let mut config = GlobeConfig::default();
    let mut view = GlobeView::new(&gpu.device, &gpu.queue, surface_format, &markers, config);
    let size = window.inner_size();
    view.resize(&gpu.device, size.width, size.height);

    let mut show_hud = true;
    let mut last_frame = std::time::Instant::now();
    let mut fps: f32 = 0.0;

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::AboutToWait => {
                    window.request_redraw();
                }
                Event::WindowEvent { event, window_id } if window_id == window.id() => {
                    let _ = egui_state.on_window_event(window, &event);
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => {
                            gpu.resize(size);
                            view.resize(&gpu.device, size.width, size.height);
                        }
                        WindowEvent::RedrawRequested => {
                            let now = std::time::Instant::now();
                            let dt = now.duration_since(last_frame).as_secs_f32();
                            last_frame = now;
                            if dt > 0.0 {
                                fps = 0.9 * fps + 0.1 * (1.0 / dt);
                            }

                            let mut config_changed = false;
                            let raw_input = egui_state.take_egui_input(window);
                            let full_output = egui_ctx.run(raw_input, |ctx| {
                                if ctx.input(|i| i.key_pressed(egui::Key::H)) {
                                    show_hud = !show_hud;
                                }
                                egui::TopBottomPanel::top("hud").show_animated(
                                    ctx,
                                    show_hud,
                                    |ui| {
                                        ui.horizontal_wrapped(|ui| {
                                            ui.label("H: HUD");
                                            ui.separator();
                                            config_changed |= ui
                                                .checkbox(&mut config.show_graticules, "Graticules")
                                                .changed();
                                            config_changed |= ui
                                                .checkbox(&mut config.show_atmosphere, "Atmosphere")
                                                .changed();
                                            ui.separator();
                                            for m in &markers {
                                                let [r, g, b, _] = m.color.to_srgb_f32();
                                                let swatch = egui::Color32::from_rgb(
                                                    (r * 255.0) as u8,
                                                    (g * 255.0) as u8,
                                                    (b * 255.0) as u8,
                                                );
                                                let name = m.label.as_deref().unwrap_or(&m.id);
                                                ui.colored_label(swatch, format!("● {name}"));
                                            }
                                            ui.separator();
                                            ui.label(format!("FPS: {fps:.0}"));
                                        });
                                    },
                                );
                            });

                            if config_changed {
                                view.set_config(&gpu.device, config);
                            }
                            let ui_hijacked = egui_ctx.wants_pointer_input();
                            view.update(&gpu.queue, dt, &egui_ctx, ui_hijacked);

                            for (id, image_delta) in &full_output.textures_delta.set {
                                egui_renderer.update_texture(
                                    &gpu.device,
                                    &gpu.queue,
                                    *id,
                                    image_delta,
                                );
                            }
                            for id in &full_output.textures_delta.free {
                                egui_renderer.free_texture(id);
                            }
                            let ppp = window.scale_factor() as f32;
                            let paint_jobs = egui_ctx.tessellate(full_output.shapes, ppp);

                            let frame = match gpu.surface.get_current_texture() {
                                Ok(f) => f,
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    gpu.resize(window.inner_size());
                                    return;
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    elwt.exit();
                                    return;
                                }
                                Err(wgpu::SurfaceError::Timeout) => {
                                    return;
                                }
                            };
                            let target =
                                frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
                            let mut encoder = gpu.device.create_command_encoder(
                                &wgpu::CommandEncoderDescriptor { label: Some("encoder") },
                            );

                            {
                                let mut rpass =
                                    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                                        label: Some("globe pass"),
                                        color_attachments: &[Some(
                                            wgpu::RenderPassColorAttachment {
                                                view: &target,
                                                resolve_target: None,
                                                ops: wgpu::Operations {
                                                    load: wgpu::LoadOp::Clear(wgpu::Color {
                                                        r: 0.02,
                                                        g: 0.02,
                                                        b: 0.04,
                                                        a: 1.0,
                                                    }),
                                                    store: wgpu::StoreOp::Store,
                                                },
                                            },
                                        )],
                                        depth_stencil_attachment: Some(
                                            wgpu::RenderPassDepthStencilAttachment {
                                                view: view.depth_view(),
                                                depth_ops: Some(wgpu::Operations {
                                                    load: wgpu::LoadOp::Clear(1.0),
                                                    store: wgpu::StoreOp::Discard,
                                                }),
                                                stencil_ops: None,
                                            },
                                        ),
                                        occlusion_query_set: None,
                                        timestamp_writes: None,
                                    });
                                view.render(&mut rpass);
                            }

                            let screen_desc = ScreenDescriptor {
                                size_in_pixels: [gpu.config.width, gpu.config.height],
                                pixels_per_point: ppp,
                            };
                            egui_renderer.update_buffers(
                                &gpu.device,
                                &gpu.queue,
                                &mut encoder,
                                &paint_jobs,
                                &screen_desc,
                            );

                            {
                                let mut rpass =
                                    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                                        label: Some("egui pass"),
                                        color_attachments: &[Some(
                                            wgpu::RenderPassColorAttachment {
                                                view: &target,
                                                resolve_target: None,
                                                ops: wgpu::Operations {
                                                    load: wgpu::LoadOp::Load,
                                                    store: wgpu::StoreOp::Store,
                                                },
                                            },
                                        )],
                                        depth_stencil_attachment: None,
                                        occlusion_query_set: None,
                                        timestamp_writes: None,
                                    });
                                egui_renderer.render(&mut rpass, &paint_jobs, &screen_desc);
                            }
                            gpu.queue.submit(std::iter::once(encoder.finish()));
                            frame.present();

                            egui_state.handle_platform_output(window, full_output.platform_output);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        })
        .unwrap_or_else(|e| panic!("run app: {e}"));
}
