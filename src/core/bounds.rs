use glam::{Mat4, Vec3};

/// Axis-aligned bounding box in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box enclosing a set of points; `None` when there are none.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |b, p| Self {
            min: b.min.min(p),
            max: b.max.max(p),
        }))
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Box enclosing all eight transformed corners.
    pub fn transformed(&self, m: &Mat4) -> Aabb {
        let (lo, hi) = (self.min, self.max);
        let corners = (0..8).map(|i| {
            let c = Vec3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            );
            m.transform_point3(c)
        });
        // eight corners, never empty
        Aabb::from_points(corners).unwrap_or(*self)
    }
}

/// Horizontal rectangle the camera must stay inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl MapBounds {
    /// Build from two corners in any order; always satisfies `min <= max`.
    pub fn new(x0: f32, x1: f32, z0: f32, z1: f32) -> Self {
        Self {
            min_x: x0.min(x1),
            max_x: x0.max(x1),
            min_z: z0.min(z1),
            max_z: z0.max(z1),
        }
    }

    pub fn from_aabb(b: &Aabb) -> Self {
        Self::new(b.min.x, b.max.x, b.min.z, b.max.z)
    }

    /// Clamp X and Z into the rectangle; Y is untouched.
    #[inline]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y,
            p.z.clamp(self.min_z, self.max_z),
        )
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_z..=self.max_z).contains(&p.z)
    }
}

/// Uniform scale + recentre that maps raw map geometry into world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapFit {
    pub scale: f32,
    pub center: Vec3,
}

impl MapFit {
    /// Scale so the largest extent equals `target_extent` and centre on the
    /// origin. Degenerate (zero-size) geometry keeps scale 1.
    pub fn new(raw: &Aabb, target_extent: f32) -> Self {
        let largest = raw.size().max_element();
        let scale = if largest > f32::EPSILON {
            target_extent / largest
        } else {
            1.0
        };
        Self {
            scale,
            center: raw.center(),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale)) * Mat4::from_translation(-self.center)
    }

    pub fn fitted(&self, raw: &Aabb) -> Aabb {
        raw.transformed(&self.matrix())
    }

    pub fn bounds(&self, raw: &Aabb) -> MapBounds {
        MapBounds::from_aabb(&self.fitted(raw))
    }
}
