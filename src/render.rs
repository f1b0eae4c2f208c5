use crate::constants::{FOG_FAR, FOG_NEAR, SUN_POSITION, TONE_MAPPING_EXPOSURE};
use crate::core::{CpuMesh, LightingPreset};
use glam::{Mat4, Vec3};
use web_sys as web;

mod post;
mod scene;
mod targets;
use scene::{GpuMesh, SceneResources};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    sun_dir: [f32; 4],
    fog: [f32; 4],
    ambient: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
}

impl ObjectUniforms {
    pub(crate) fn from_model(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: model.inverse().transpose().to_cols_array_2d(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    time: f32,
    fade: f32,
    night: f32,
    flash: f32,
    exposure: f32,
    _pad: f32,
}

/// Models the scene can hold, each uploaded once its asset loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshSlot {
    Map,
    Product,
    Drone,
}

/// Per-frame inputs for the two passes.
pub struct FrameParams {
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub lighting: LightingPreset,
    pub time: f32,
    pub fade: f32,
    pub night: f32,
    pub flash: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    scene: SceneResources,
    post: post::PostResources,
    bg_post: wgpu::BindGroup,
    map: Option<GpuMesh>,
    product: Option<GpuMesh>,
    drone: Option<GpuMesh>,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let scene = scene::create_scene_resources(&device);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, format);
        let bg_post = post::create_bind_group(&device, &post, &linear_sampler, &targets.hdr_view);
        log::info!("[gpu] ready {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            linear_sampler,
            scene,
            post,
            bg_post,
            map: None,
            product: None,
            drone: None,
            width,
            height,
        })
    }

    pub fn upload_mesh(&mut self, slot: MeshSlot, mesh: &CpuMesh) {
        let label = match slot {
            MeshSlot::Map => "map_mesh",
            MeshSlot::Product => "product_mesh",
            MeshSlot::Drone => "drone_mesh",
        };
        let gpu_mesh = GpuMesh::upload(&self.device, &self.scene.object_bgl, label, mesh);
        *self.slot_mut(slot) = Some(gpu_mesh);
    }

    /// Update a model's transform; no-op until that model is uploaded.
    pub fn set_model(&self, slot: MeshSlot, model: Mat4) {
        if let Some(m) = self.slot(slot) {
            m.set_model(&self.queue, model);
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            self.targets.recreate(&self.device, width, height);
            self.bg_post = post::create_bind_group(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets.hdr_view,
            );
        }
    }

    pub fn render(&mut self, params: &FrameParams) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let lighting = &params.lighting;
        let sun = SUN_POSITION.normalize();
        let scene_u = SceneUniforms {
            view_proj: params.view_proj.to_cols_array_2d(),
            eye: params.eye.extend(1.0).to_array(),
            sun_dir: [sun.x, sun.y, sun.z, lighting.sun_intensity],
            fog: [
                lighting.fog_rgb[0],
                lighting.fog_rgb[1],
                lighting.fog_rgb[2],
                FOG_NEAR,
            ],
            ambient: [lighting.ambient_intensity, FOG_FAR, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&scene_u));

        // Pass 1: lit scene -> HDR target
        {
            let bg = lighting.background_rgb;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene.pipeline);
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);
            for mesh in [&self.map, &self.product, &self.drone].into_iter().flatten() {
                mesh.draw(&mut rpass);
            }
        }

        // Pass 2: drone-camera post effect -> swapchain
        let post_u = PostUniforms {
            resolution: [self.width as f32, self.height as f32],
            time: params.time,
            fade: params.fade,
            night: params.night,
            flash: params.flash,
            exposure: TONE_MAPPING_EXPOSURE,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&post_u));
        post::draw_fullscreen(&mut encoder, &self.post, &self.bg_post, &view);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn slot(&self, slot: MeshSlot) -> Option<&GpuMesh> {
        match slot {
            MeshSlot::Map => self.map.as_ref(),
            MeshSlot::Product => self.product.as_ref(),
            MeshSlot::Drone => self.drone.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: MeshSlot) -> &mut Option<GpuMesh> {
        match slot {
            MeshSlot::Map => &mut self.map,
            MeshSlot::Product => &mut self.product,
            MeshSlot::Drone => &mut self.drone,
        }
    }
}
