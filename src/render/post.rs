use super::PostUniforms;

const FULLSCREEN_VS: &str = "vs_fullscreen";
const DRONE_FS: &str = "fs_drone";

/// Drone-camera grade: samples the HDR scene and writes the swapchain.
pub(crate) struct PostResources {
    pub(crate) bgl: wgpu::BindGroupLayout, // scene tex, sampler, uniforms
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) pipeline: wgpu::RenderPipeline,
}

fn fragment_entry(binding: u32, ty: wgpu::BindingType) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty,
        count: None,
    }
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("drone_post_bgl"),
        entries: &[
            fragment_entry(
                0,
                wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
            ),
            fragment_entry(
                1,
                wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            ),
            fragment_entry(
                2,
                wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<PostUniforms>() as u64
                    ),
                },
            ),
        ],
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("drone_post_uniforms"),
        size: std::mem::size_of::<PostUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("drone_post_layout"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    // Fullscreen triangle generated in the vertex shader; no vertex buffers.
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("drone_post_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: post_shader,
            entry_point: Some(FULLSCREEN_VS),
            buffers: &[],
            compilation_options: Default::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: post_shader,
            entry_point: Some(DRONE_FS),
            targets: &[Some(swap_format.into())],
            compilation_options: Default::default(),
        }),
        cache: None,
        multiview: None,
    });

    PostResources {
        bgl,
        uniform_buffer,
        pipeline,
    }
}

/// Rebuilt whenever the HDR target is recreated.
pub(crate) fn create_bind_group(
    device: &wgpu::Device,
    post: &PostResources,
    sampler: &wgpu::Sampler,
    scene_view: &wgpu::TextureView,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("drone_post_bg"),
        layout: &post.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(scene_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: post.uniform_buffer.as_entire_binding(),
            },
        ],
    })
}

pub(crate) fn draw_fullscreen(
    encoder: &mut wgpu::CommandEncoder,
    post: &PostResources,
    bind_group: &wgpu::BindGroup,
    target: &wgpu::TextureView,
) {
    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("drone_post"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                // every pixel is overwritten
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    pass.set_pipeline(&post.pipeline);
    pass.set_bind_group(0, bind_group, &[]);
    pass.draw(0..3, 0..1);
}
