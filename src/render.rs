use crate::constants::LIGHT_DIR;
use glam::Vec3;
use orbit_core::texture::{white_pixel, TextureImage};
use orbit_core::{collect_draws, Camera, DrawItem, Geometry, Pass, SceneGraph, Shading, TextureSlot};
use web_sys as web;

mod helpers;
mod labels;
mod meshes;
mod targets;

pub use labels::{rasterize_label, rasterize_plate};
use meshes::MeshCache;
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    camera_pos: [f32; 4],
}

/// Per-draw data streamed into the instance buffer each frame.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    // rgb emissive, w shading mode
    emissive_mode: [f32; 4],
    glow: [f32; 4],
    params: [f32; 4],
}

impl InstanceRaw {
    fn from_draw(d: &DrawItem) -> Self {
        let (mode, glow, p) = match d.shading {
            Shading::Lit => (0.0, [0.0, 0.0, 1.0, 0.0], 1.0),
            Shading::Unlit => (1.0, [0.0, 0.0, 1.0, 0.0], 1.0),
            Shading::Glow { view, c, p } => (2.0, [view.x, view.y, view.z, c], p),
        };
        Self {
            model: d.model.to_cols_array_2d(),
            color: d.color.to_array(),
            emissive_mode: [d.emissive.x, d.emissive.y, d.emissive.z, mode],
            glow,
            params: [p, 0.0, 0.0, 0.0],
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 8] = wgpu::vertex_attr_array![
    3 => Float32x4, 4 => Float32x4, 5 => Float32x4, 6 => Float32x4,
    7 => Float32x4, 8 => Float32x4, 9 => Float32x4, 10 => Float32x4
];

/// Draws sharing a pipeline, mesh and texture, submitted as one instanced call.
struct Batch {
    pass: Pass,
    geometry: Geometry,
    texture: Option<TextureSlot>,
    instances: Vec<InstanceRaw>,
}

fn batch_draws(draws: &[DrawItem]) -> Vec<Batch> {
    let mut batches: Vec<Batch> = Vec::new();
    for d in draws {
        let raw = InstanceRaw::from_draw(d);
        match batches
            .iter_mut()
            .find(|b| b.pass == d.pass && b.geometry == d.geometry && b.texture == d.texture)
        {
            Some(b) => b.instances.push(raw),
            None => batches.push(Batch {
                pass: d.pass,
                geometry: d.geometry,
                texture: d.texture,
                instances: vec![raw],
            }),
        }
    }
    // opaque, then alpha-blended, then additive glow
    batches.sort_by_key(|b| b.pass);
    batches
}

struct BoundTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    opaque_pipeline: wgpu::RenderPipeline,
    transparent_pipeline: wgpu::RenderPipeline,
    additive_pipeline: wgpu::RenderPipeline,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    white: BoundTexture,
    earth: Option<BoundTexture>,
    ui_plate: Option<BoundTexture>,
    labels: Vec<BoundTexture>,

    meshes: MeshCache,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, clear: [f64; 3]) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(orbit_core::SCENE_WGSL.into()),
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_layout"),
            bind_group_layouts: &[&globals_layout, &texture_layout],
            push_constant_ranges: &[],
        });
        let buffers = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<orbit_core::mesh::Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRS,
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceRaw>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRS,
            },
        ];
        let opaque_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            &buffers,
            format,
            "opaque_pipeline",
            None,
            true,
            Some(wgpu::Face::Back),
        );
        let transparent_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            &buffers,
            format,
            "transparent_pipeline",
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
            None,
        );
        let additive_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            &buffers,
            format,
            "additive_pipeline",
            Some(helpers::ADDITIVE),
            false,
            Some(wgpu::Face::Back),
        );

        let instance_capacity = 256;
        let instance_buffer = create_instance_buffer(&device, instance_capacity);
        let white = bind_texture(
            &device,
            &queue,
            &texture_layout,
            &sampler,
            "white_tex",
            &white_pixel(),
        );

        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);
        Ok(Self {
            surface,
            targets: RenderTargets::new(&device, width, height),
            device,
            queue,
            config,
            opaque_pipeline,
            transparent_pipeline,
            additive_pipeline,
            globals_buffer,
            globals_bind_group,
            texture_layout,
            sampler,
            white,
            earth: None,
            ui_plate: None,
            labels: Vec::new(),
            meshes: MeshCache::default(),
            instance_buffer,
            instance_capacity,
            width,
            height,
            clear_color: wgpu::Color {
                r: clear[0],
                g: clear[1],
                b: clear[2],
                a: 1.0,
            },
        })
    }

    pub fn set_earth_texture(&mut self, image: &TextureImage) {
        self.earth = Some(bind_texture(
            &self.device,
            &self.queue,
            &self.texture_layout,
            &self.sampler,
            "earth_tex",
            image,
        ));
    }

    pub fn set_ui_plate_texture(&mut self, image: &TextureImage) {
        self.ui_plate = Some(bind_texture(
            &self.device,
            &self.queue,
            &self.texture_layout,
            &self.sampler,
            "ui_plate_tex",
            image,
        ));
    }

    /// Replace the label textures; index `i` backs `TextureSlot::Label(i)`.
    pub fn set_label_textures(&mut self, images: &[TextureImage]) {
        self.labels = images
            .iter()
            .map(|img| {
                bind_texture(
                    &self.device,
                    &self.queue,
                    &self.texture_layout,
                    &self.sampler,
                    "label_tex",
                    img,
                )
            })
            .collect();
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
    }

    fn bind_group_for(&self, slot: Option<TextureSlot>) -> &wgpu::BindGroup {
        let bound = match slot {
            Some(TextureSlot::Earth) => self.earth.as_ref(),
            Some(TextureSlot::UiPlate) => self.ui_plate.as_ref(),
            Some(TextureSlot::Label(i)) => self.labels.get(i),
            None => None,
        };
        &bound.unwrap_or(&self.white).bind_group
    }

    pub fn render(&mut self, graph: &SceneGraph, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let draws = collect_draws(graph);
        let batches = batch_draws(&draws);

        let light = Vec3::from(LIGHT_DIR).normalize();
        let globals = Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            light_dir: light.extend(0.0).to_array(),
            camera_pos: camera.eye.extend(1.0).to_array(),
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let total: usize = batches.iter().map(|b| b.instances.len()).sum();
        if total > self.instance_capacity {
            self.instance_capacity = total.next_power_of_two();
            self.instance_buffer = create_instance_buffer(&self.device, self.instance_capacity);
        }
        let mut ranges = Vec::with_capacity(batches.len());
        let mut offset = 0u32;
        for b in &batches {
            self.meshes.ensure(&self.device, b.geometry);
            let n = b.instances.len() as u32;
            self.queue.write_buffer(
                &self.instance_buffer,
                offset as u64 * std::mem::size_of::<InstanceRaw>() as u64,
                bytemuck::cast_slice(&b.instances),
            );
            ranges.push(offset..offset + n);
            offset += n;
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            let mut current: Option<Pass> = None;
            for (b, range) in batches.iter().zip(ranges) {
                let Some(mesh) = self.meshes.get(b.geometry) else {
                    continue;
                };
                if current != Some(b.pass) {
                    rpass.set_pipeline(match b.pass {
                        Pass::Opaque => &self.opaque_pipeline,
                        Pass::Transparent => &self.transparent_pipeline,
                        Pass::Additive => &self.additive_pipeline,
                    });
                    current = Some(b.pass);
                }
                rpass.set_bind_group(1, self.bind_group_for(b.texture), &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, range);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instances"),
        size: (capacity.max(1) * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn bind_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    label: &str,
    image: &TextureImage,
) -> BoundTexture {
    let (texture, view) = helpers::upload_rgba(device, queue, label, image);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    BoundTexture {
        _texture: texture,
        bind_group,
    }
}
