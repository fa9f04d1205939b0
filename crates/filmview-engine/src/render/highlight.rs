use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::error::ConfigureError;
use crate::framing::{ChannelWeights, TransformUniform};

use super::quad::{QuadVertex, UNIT_QUAD, UNIT_QUAD_VERTEX_COUNT};
use super::{RenderCtx, RenderTarget};

const CLEAR: wgpu::Color = wgpu::Color::BLACK;

/// Look of the highlight before channel weighting.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HighlightStyle {
    /// Linear RGB. Values above 1.0 render over-bright on extended-range
    /// surfaces (a whiteout backlight).
    pub base_color: [f32; 3],
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self { base_color: [1.0; 3] }
    }
}

/// Fragment-stage uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TintUniform {
    pub weights: [f32; 4],
    pub base: [f32; 4],
}

impl TintUniform {
    pub fn new(style: HighlightStyle, weights: ChannelWeights) -> Self {
        let [r, g, b] = style.base_color;
        Self {
            weights: weights.to_lanes(),
            base: [r, g, b, 1.0],
        }
    }
}

/// Pipeline and buffers for the single highlight quad.
///
/// Everything is created once in `new` and never rebuilt; only the two
/// uniform buffers are rewritten per frame.
pub struct HighlightRenderer {
    style: HighlightStyle,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    transform_ubo: wgpu::Buffer,
    tint_ubo: wgpu::Buffer,
    quad_vbo: wgpu::Buffer,
}

impl HighlightRenderer {
    pub fn new(ctx: &RenderCtx<'_>, style: HighlightStyle) -> Result<Self, ConfigureError> {
        // Uncaptured validation errors panic; route them into the result instead.
        let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("filmview highlight shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/highlight.wgsl").into()),
        });

        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("filmview highlight bgl"),
                entries: &[
                    uniform_entry(0, wgpu::ShaderStages::VERTEX, size_of_u64::<TransformUniform>()),
                    uniform_entry(1, wgpu::ShaderStages::FRAGMENT, size_of_u64::<TintUniform>()),
                ],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("filmview highlight pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("filmview highlight pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            return Err(ConfigureError::pipeline_build(err.to_string()));
        }

        let transform_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("filmview transform ubo"),
            size: size_of_u64::<TransformUniform>(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let tint_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("filmview tint ubo"),
            size: size_of_u64::<TintUniform>(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("filmview highlight bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: transform_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: tint_ubo.as_entire_binding(),
                },
            ],
        });

        let quad_vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("filmview unit quad vbo"),
            contents: bytemuck::cast_slice(&UNIT_QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("highlight pipeline built for {:?}", ctx.surface_format);

        Ok(Self {
            style,
            pipeline,
            bind_group,
            transform_ubo,
            tint_ubo,
            quad_vbo,
        })
    }

    /// Uploads this frame's uniforms. Must run before `draw` records the pass.
    pub fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        transform: &TransformUniform,
        weights: ChannelWeights,
    ) {
        let tint = TintUniform::new(self.style, weights);
        queue.write_buffer(&self.transform_ubo, 0, bytemuck::bytes_of(transform));
        queue.write_buffer(&self.tint_ubo, 0, bytemuck::bytes_of(&tint));
    }

    /// Records one pass: clear to opaque black, then the quad.
    pub fn draw(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("filmview highlight pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));
        rpass.draw(0..UNIT_QUAD_VERTEX_COUNT, 0..1);
    }
}

fn size_of_u64<T>() -> u64 {
    std::mem::size_of::<T>() as u64
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages, size: u64) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(size),
        },
        count: None,
    }
}
