use pulse_core::{Camera, ParticleInstance, POINT_COLOR, POINT_WORLD_SCALE};
use web_sys as web;

mod points;

use points::{create_points_resources, PointsResources, PointsUniforms};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    points: PointsResources,
    instance_count: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// Bind a surface to `canvas` and upload the initial particle buffer.
    ///
    /// The surface keeps the canvas' size at creation; there is no resize path.
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        instances: &[ParticleInstance],
    ) -> anyhow::Result<Self> {
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

        let points = create_points_resources(&device, format, instances.len());

        let camera = Camera::for_viewport(width, height);
        let view: glam::Mat4 = camera.view_matrix();
        let proj: glam::Mat4 = camera.projection_matrix();
        let uniforms = PointsUniforms {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            color: POINT_COLOR,
            size_scale: POINT_WORLD_SCALE,
            _pad: [0.0; 3],
        };
        queue.write_buffer(&points.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        queue.write_buffer(&points.instance_buffer, 0, bytemuck::cast_slice(instances));

        log::info!(
            "[gpu] ready {}x{} format={:?} particles={}",
            width,
            height,
            format,
            instances.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            points,
            instance_count: instances.len() as u32,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Draw one frame. `updated` carries the particle buffer when it changed since the last upload.
    pub fn render(&mut self, updated: Option<&[ParticleInstance]>) -> Result<(), wgpu::SurfaceError> {
        if let Some(instances) = updated {
            self.queue.write_buffer(
                &self.points.instance_buffer,
                0,
                bytemuck::cast_slice(instances),
            );
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
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.points.pipeline);
            rpass.set_bind_group(0, &self.points.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.points.instance_buffer.slice(..));
            rpass.draw(0..6, 0..self.instance_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
