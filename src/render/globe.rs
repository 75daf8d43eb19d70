use super::helpers::{self, PipelineSpec};
use crate::constants::ALPHA_CUTOFF;
use globe_core::constants::{TILE_HEIGHT_SEGMENTS, TILE_WIDTH_SEGMENTS};
use globe_core::geometry::build_tile_mesh;
use globe_core::viewport::Tile;
use globe_core::TileVertex;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use web_sys as web;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct TileUniforms {
    model: [[f32; 4]; 4],
    params: [f32; 4],
}

const TILE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

struct TileGpu {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    transparent: bool,
    // Absent until the image has been uploaded.
    bind_group: Option<wgpu::BindGroup>,
}

/// Per-tile meshes, textures and the two tile pipelines.
pub(crate) struct TileResources {
    opaque_pipeline: wgpu::RenderPipeline,
    blended_pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    tiles: Vec<TileGpu>,
}

impl TileResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        globals_bgl: &wgpu::BindGroupLayout,
        tiles: &[Tile],
        radius: f32,
    ) -> Self {
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("tile_bgl"),
            entries: &[
                helpers::uniform_entry(0),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tile_layout"),
            bind_group_layouts: &[globals_bgl, &bgl],
            push_constant_ranges: &[],
        });
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(globe_core::GLOBE_WGSL.into()),
        });
        let buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TileVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &TILE_ATTRS,
        }];
        let spec = |label: &'static str, blend: Option<wgpu::BlendState>| PipelineSpec {
            label,
            layout: &layout,
            shader: &shader,
            vs_entry: "vs_tile",
            fs_entry: "fs_tile",
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            color_format,
            blend,
            depth_write: true,
        };
        let opaque_pipeline = helpers::make_pipeline(device, spec("tile_opaque", None));
        let blended_pipeline = helpers::make_pipeline(
            device,
            spec("tile_blended", Some(wgpu::BlendState::ALPHA_BLENDING)),
        );
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("tile_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let tiles = tiles
            .iter()
            .map(|tile| {
                let mesh = build_tile_mesh(
                    &tile.patch,
                    radius,
                    TILE_WIDTH_SEGMENTS,
                    TILE_HEIGHT_SEGMENTS,
                );
                TileGpu {
                    vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("tile_vb"),
                        contents: bytemuck::cast_slice(&mesh.vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    }),
                    index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("tile_ib"),
                        contents: bytemuck::cast_slice(&mesh.indices),
                        usage: wgpu::BufferUsages::INDEX,
                    }),
                    index_count: mesh.indices.len() as u32,
                    uniform_buffer: helpers::uniform_buffer(
                        device,
                        "tile_ub",
                        std::mem::size_of::<TileUniforms>() as u64,
                    ),
                    transparent: tile.placement.project.is_transparent,
                    bind_group: None,
                }
            })
            .collect();

        Self {
            opaque_pipeline,
            blended_pipeline,
            bgl,
            sampler,
            tiles,
        }
    }

    /// Copy a decoded image into a fresh texture for tile `index`.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        index: usize,
        bitmap: web::ImageBitmap,
    ) {
        let Some(tile) = self.tiles.get_mut(index) else {
            return;
        };
        let (width, height) = (bitmap.width(), bitmap.height());
        let (texture, view) = helpers::create_color_texture(
            device,
            "tile_tex",
            width,
            height,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::ImageBitmap(bitmap),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
        );
        tile.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tile_bg"),
            layout: &self.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: tile.uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        }));
        log::debug!("[render] tile {index} texture {width}x{height}");
    }

    /// Model matrix per tile: the globe orientation times the hover scale.
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, globe: Mat4, tiles: &[Tile]) {
        for (gpu, tile) in self.tiles.iter().zip(tiles) {
            let u = TileUniforms {
                model: (globe * Mat4::from_scale(Vec3::splat(tile.scale))).to_cols_array_2d(),
                params: [if gpu.transparent { ALPHA_CUTOFF } else { 0.0 }, 0.0, 0.0, 0.0],
            };
            queue.write_buffer(&gpu.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, transparent: bool) {
        let pipeline = if transparent {
            &self.blended_pipeline
        } else {
            &self.opaque_pipeline
        };
        rpass.set_pipeline(pipeline);
        for tile in self.tiles.iter().filter(|t| t.transparent == transparent) {
            let Some(bg) = &tile.bind_group else {
                continue;
            };
            rpass.set_bind_group(1, bg, &[]);
            rpass.set_vertex_buffer(0, tile.vertex_buffer.slice(..));
            rpass.set_index_buffer(tile.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..tile.index_count, 0, 0..1);
        }
    }
}
