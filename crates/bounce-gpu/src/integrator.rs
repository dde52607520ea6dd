//! GPU-resident variant of the integrate pass.

use bounce_core::{Particle, DT, WINDOW_HEIGHT, WINDOW_WIDTH};
use bounce_sim::{Error, Integrator, Result};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Kernel parameters (matches the WGSL `Params` struct).
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Params {
    count: u32,
    dt: f32,
    width: f32,
    height: f32,
}

/// Device-side buffers, sized to the particle count they were created for.
struct Buffers {
    particle_buffer: wgpu::Buffer,
    staging_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    capacity: usize,
}

/// Data-parallel integrator: upload, dispatch, readback, once per tick.
///
/// The kernel in `shaders/integrate.wgsl` mirrors
/// [`bounce_core::step_particle`] field for field; the host side only manages
/// buffers and the blocking readback.
pub struct GpuIntegrator {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::ComputePipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    params_buffer: wgpu::Buffer,
    buffers: Option<Buffers>,
}

impl GpuIntegrator {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Integrate Compute Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/integrate.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Integrate Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: false },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Integrate Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("Integrate Pipeline"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: Some("main"),
            compilation_options: Default::default(),
            cache: None,
        });

        let params_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Integrate Params Buffer"),
            contents: bytemuck::cast_slice(&[Params {
                count: 0,
                dt: DT,
                width: WINDOW_WIDTH,
                height: WINDOW_HEIGHT,
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        log::info!("GPU integrator ready");

        Self {
            device,
            queue,
            pipeline,
            bind_group_layout,
            params_buffer,
            buffers: None,
        }
    }

    /// (Re)create device buffers when the particle count changes. The store
    /// is not resized mid-run, so this normally happens exactly once.
    fn ensure_buffers(&mut self, count: usize) {
        if matches!(&self.buffers, Some(b) if b.capacity == count) {
            return;
        }

        let size = (count * std::mem::size_of::<Particle>()) as u64;
        let particle_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Particle Buffer"),
            size,
            usage: wgpu::BufferUsages::STORAGE
                | wgpu::BufferUsages::COPY_DST
                | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        let staging_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Particle Staging Buffer"),
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Integrate Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: particle_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: self.params_buffer.as_entire_binding(),
                },
            ],
        });

        log::debug!("device buffers allocated for {count} particles");

        self.buffers = Some(Buffers {
            particle_buffer,
            staging_buffer,
            bind_group,
            capacity: count,
        });
    }
}

impl Integrator for GpuIntegrator {
    fn advance(&mut self, particles: &mut [Particle]) -> Result<()> {
        let count = particles.len();
        if count == 0 {
            return Ok(());
        }
        self.ensure_buffers(count);
        let buffers = self
            .buffers
            .as_ref()
            .ok_or_else(|| Error::Backend("device buffers missing".into()))?;

        // Host -> device copy of the whole store.
        self.queue.write_buffer(
            &buffers.particle_buffer,
            0,
            bytemuck::cast_slice(particles),
        );
        self.queue.write_buffer(
            &self.params_buffer,
            0,
            bytemuck::cast_slice(&[Params {
                count: count as u32,
                dt: DT,
                width: WINDOW_WIDTH,
                height: WINDOW_HEIGHT,
            }]),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Integrate Encoder"),
            });

        // One logical thread per particle, 256 per workgroup.
        let workgroup_count = (count as u32).div_ceil(256);
        {
            let mut compute_pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("Integrate Compute Pass"),
                timestamp_writes: None,
            });
            compute_pass.set_pipeline(&self.pipeline);
            compute_pass.set_bind_group(0, &buffers.bind_group, &[]);
            compute_pass.dispatch_workgroups(workgroup_count, 1, 1);
        }

        // Device -> host copy back for the host-side collision pass.
        let size = (count * std::mem::size_of::<Particle>()) as u64;
        encoder.copy_buffer_to_buffer(
            &buffers.particle_buffer,
            0,
            &buffers.staging_buffer,
            0,
            size,
        );

        self.queue.submit(std::iter::once(encoder.finish()));

        let slice = buffers.staging_buffer.slice(..size);
        slice.map_async(wgpu::MapMode::Read, |_| {});
        self.device
            .poll(wgpu::PollType::Wait {
                submission_index: None,
                timeout: None,
            })
            .map_err(|e| Error::Backend(format!("device poll failed: {e:?}")))?;

        {
            let data = slice.get_mapped_range();
            let bytes: &[u8] = &data;
            particles.copy_from_slice(bytemuck::cast_slice(bytes));
        }
        buffers.staging_buffer.unmap();

        Ok(())
    }
}
