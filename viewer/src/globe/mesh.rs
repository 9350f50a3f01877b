use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use geo::Vec3;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct SphereVertex {
    pub pos_unit: [f32; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct MarkerInstance {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

pub struct SphereMesh {
    pub vertex_buf: wgpu::Buffer,
    pub index_buf: wgpu::Buffer,
    pub index_count: u32,
}

/// Builds a unit lat/long sphere; the shaders scale it to the radius they
/// need. Triangles wind counter-clockwise seen from outside.
pub fn build_sphere_mesh(
    device: &wgpu::Device,
    stacks: u32,
    slices: u32,
    label: &str,
) -> SphereMesh {
    let mut verts: Vec<SphereVertex> = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    for i in 0..=stacks {
        let theta = std::f32::consts::PI * i as f32 / stacks as f32;
        let (stheta, ctheta) = theta.sin_cos();
        for j in 0..=slices {
            let phi = std::f32::consts::TAU * j as f32 / slices as f32;
            let (sphi, cphi) = phi.sin_cos();
            verts.push(SphereVertex { pos_unit: [stheta * cphi, ctheta, stheta * sphi] });
        }
    }

    let mut indices: Vec<u32> = Vec::with_capacity((stacks * slices * 6) as usize);
    let at = |i: u32, j: u32| i * (slices + 1) + j;
    for i in 0..stacks {
        for j in 0..slices {
            let a = at(i, j);
            let b = at(i + 1, j);
            let c = at(i, j + 1);
            let d = at(i + 1, j + 1);
            indices.extend_from_slice(&[a, d, b, a, c, d]);
        }
    }

    let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&verts),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    SphereMesh { vertex_buf, index_buf, index_count: indices.len() as u32 }
}

/// Uploads world-space line segments as a LineList vertex buffer.
/// Returns `None` for an empty set so callers can skip the draw.
pub fn upload_line_segments(
    device: &wgpu::Device,
    segments: &[[Vec3; 2]],
    label: &str,
) -> Option<(wgpu::Buffer, u32)> {
    if segments.is_empty() {
        return None;
    }
    let mut verts: Vec<LineVertex> = Vec::with_capacity(segments.len() * 2);
    for [a, b] in segments {
        verts.push(LineVertex { pos: a.to_array() });
        verts.push(LineVertex { pos: b.to_array() });
    }
    let buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&verts),
        usage: wgpu::BufferUsages::VERTEX,
    });
    Some((buf, verts.len() as u32))
}

/// Uploads one instance per marker dot.
pub fn upload_marker_instances(
    device: &wgpu::Device,
    dots: &[engine::scene::MarkerDot],
    dot_radius: f32,
) -> Option<(wgpu::Buffer, u32)> {
    if dots.is_empty() {
        return None;
    }
    let instances: Vec<MarkerInstance> = dots
        .iter()
        .map(|d| MarkerInstance {
            center: d.position.to_array(),
            radius: dot_radius,
            color: d.color.to_linear_rgba(),
        })
        .collect();
    let buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("marker instances"),
        contents: bytemuck::cast_slice(&instances),
        usage: wgpu::BufferUsages::VERTEX,
    });
    Some((buf, instances.len() as u32))
}
