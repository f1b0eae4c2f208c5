use super::bounds::Aabb;
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Flattened, world-baked geometry ready for upload.
#[derive(Clone, Debug, Default)]
pub struct CpuMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl CpuMesh {
    /// Append a primitive, transforming positions and normals by `world` and
    /// rebasing its indices. Missing indices mean a plain triangle list.
    pub fn append(
        &mut self,
        world: &Mat4,
        positions: &[[f32; 3]],
        normals: Option<&[[f32; 3]]>,
        indices: Option<&[u32]>,
        color: [f32; 3],
    ) {
        let base = self.vertices.len() as u32;
        let normal_m = world.inverse().transpose();
        for (i, p) in positions.iter().enumerate() {
            let n = normals
                .and_then(|ns| ns.get(i))
                .map(|n| Vec3::from_array(*n))
                .unwrap_or(Vec3::Y);
            self.vertices.push(MeshVertex {
                position: world.transform_point3(Vec3::from_array(*p)).to_array(),
                normal: normal_m
                    .transform_vector3(n)
                    .normalize_or_zero()
                    .to_array(),
                color,
            });
        }
        let count = positions.len() as u32;
        match indices {
            Some(idx) if idx.iter().all(|&i| i < count) => {
                self.indices.extend(idx.iter().map(|i| base + i))
            }
            // malformed index buffer: keep the vertices for bounds, draw nothing
            Some(_) => {}
            None => self.indices.extend(base..base + count),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| Vec3::from_array(v.position)))
    }
}
