use glam::{EulerRot, Mat4, Vec3};
use scroll_core::constants::{LIGHT_DIRECTION, LIGHT_INTENSITY, PARTICLE_SIZE, TOON_BANDS};
use scroll_core::{particle_field, Camera, FrameUpdate, SceneConfig, TrackedObject};
use web_sys as web;

mod helpers;
mod meshes;
mod particles;

use meshes::{create_mesh_pipeline, MeshResources};
use particles::{create_particle_resources, ParticleResources};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    light: [f32; 4],
    color: [f32; 4],
    camera_right: [f32; 4],
    camera_up: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
}

impl ObjectUniforms {
    fn new(position: Vec3, rotation: Vec3) -> Self {
        let rot = Mat4::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
        Self {
            model: (Mat4::from_translation(position) * rot).to_cols_array_2d(),
            normal_matrix: rot.to_cols_array_2d(),
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    depth_view: wgpu::TextureView,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,

    mesh_pipeline: wgpu::RenderPipeline,
    meshes: Vec<MeshResources>,
    particles: ParticleResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    material_color: [f32; 3],
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene: &SceneConfig,
        objects: &[TrackedObject],
    ) -> anyhow::Result<Self> {
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
        // Transparent canvas so the page background shows through.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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
        log::info!("[gpu] surface {}x{} format={:?} alpha={:?}", width, height, format, alpha_mode);

        let depth_view = helpers::create_depth_view(&device, width, height);

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bgl = helpers::uniform_layout(
            &device,
            "globals_bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let globals_bind_group = helpers::uniform_bind_group(
            &device,
            "globals_bg",
            &globals_bgl,
            &globals_buffer,
        );

        let object_bgl = helpers::uniform_layout(&device, "object_bgl", wgpu::ShaderStages::VERTEX);
        let mesh_pipeline = create_mesh_pipeline(&device, &globals_bgl, &object_bgl, format);
        let meshes = objects
            .iter()
            .map(|obj| MeshResources::new(&device, &object_bgl, obj))
            .collect::<Vec<_>>();

        let positions = particle_field(
            scene.particle_count,
            scene.objects_distance,
            objects.len(),
            scene.particle_seed,
        );
        let particles = create_particle_resources(&device, &globals_bgl, format, &positions);
        log::info!(
            "[gpu] meshes={} triangles={} particles={}",
            meshes.len(),
            meshes.iter().map(|m| m.index_count / 3).sum::<u32>(),
            positions.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            globals_buffer,
            globals_bind_group,
            mesh_pipeline,
            meshes,
            particles,
            width,
            height,
            clear_color: wgpu::Color::TRANSPARENT,
            material_color: scene.material_color,
        })
    }

    pub fn set_material_color(&mut self, rgb: [f32; 3]) {
        self.material_color = rgb;
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
            self.depth_view = helpers::create_depth_view(&self.device, width, height);
        }
    }

    fn write_globals(&self, camera: &Camera) {
        let right = camera.forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(camera.forward).normalize_or_zero();
        // Render with the drawable's aspect; the controller only knows the window.
        let mut cam = camera.clone();
        cam.aspect = self.width as f32 / self.height.max(1) as f32;
        let light = Vec3::from_array(LIGHT_DIRECTION).normalize_or_zero();
        let color = helpers::srgb_to_linear(self.material_color);
        let globals = Globals {
            view_proj: cam.view_projection().to_cols_array_2d(),
            light: [light.x, light.y, light.z, LIGHT_INTENSITY],
            color: [color[0], color[1], color[2], 1.0],
            camera_right: right.extend(0.0).to_array(),
            camera_up: up.extend(0.0).to_array(),
            params: [TOON_BANDS as f32, PARTICLE_SIZE, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
    }

    pub fn render(&mut self, camera: &Camera, update: &FrameUpdate) -> Result<(), wgpu::SurfaceError> {
        self.write_globals(camera);
        for (mesh, rotation) in self.meshes.iter().zip(&update.rotations) {
            let u = ObjectUniforms::new(mesh.position, *rotation);
            self.queue
                .write_buffer(&mesh.object_buffer, 0, bytemuck::bytes_of(&u));
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
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            for mesh in &self.meshes {
                mesh.draw(&mut rpass);
            }

            self.particles.draw(&mut rpass, &self.globals_bind_group);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

