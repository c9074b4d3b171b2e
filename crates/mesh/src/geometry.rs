use cgmath::{InnerSpace, Zero};

pub type Vector3 = cgmath::Vector3<f32>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

/// Smallest sine of the angle between two edges for which a triangle is still
/// considered to span a plane.
pub const DEGENERATE_SINE: f32 = 1e-6;

/// Returns `v` scaled to unit length, or `None` if `v` is zero, not finite, or
/// shorter than `min_length`.
///
/// Works for any finite `v`: the vector is divided by its largest component before
/// the length is taken, so squaring neither underflows nor overflows.
pub fn try_normalize(v: Vector3, min_length: f32) -> Option<Vector3> {
    let largest = v.x.abs().max(v.y.abs()).max(v.z.abs());
    if !(largest > 0.0 && largest.is_finite()) {
        return None;
    }
    let w = v / largest;
    let length = w.magnitude();
    // NaN fails the comparison.
    if length * largest > min_length {
        Some(w / length)
    } else {
        None
    }
}

/// A triangle stored by value.
///
/// Points are expected in counter-clockwise order when looking at the front of
/// the triangle, so the right-hand rule over `p0 -> p1 -> p2` gives the outward
/// normal.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl Triangle {
    pub fn new(p0: Vector3, p1: Vector3, p2: Vector3) -> Self {
        Self { p0, p1, p2 }
    }

    /// The two edge vectors leaving `p0`: `(p1 - p0, p2 - p0)`.
    pub fn edges(&self) -> (Vector3, Vector3) {
        (self.p1 - self.p0, self.p2 - self.p0)
    }

    /// Arithmetic mean of the three points.
    pub fn center(&self) -> Vector3 {
        (self.p0 + self.p1 + self.p2) / 3.0
    }

    /// Cross product of the two edges. Its length is twice the triangle area.
    pub fn scaled_normal(&self) -> Vector3 {
        let (u, v) = self.edges();
        u.cross(v)
    }

    /// Unit normal following the winding order.
    ///
    /// Returns `None` for zero-area triangles: either an edge has zero length or
    /// the sine of the angle between the edges is below `DEGENERATE_SINE`. Both
    /// edges are normalized first, so the answer does not depend on the triangle's
    /// size.
    pub fn normal(&self) -> Option<Vector3> {
        let (u, v) = self.edges();
        let u = try_normalize(u, 0.0)?;
        let v = try_normalize(v, 0.0)?;
        try_normalize(u.cross(v), DEGENERATE_SINE)
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        Self {
            p0: Vector3::zero(),
            p1: Vector3::zero(),
            p2: Vector3::zero(),
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    pub min: Vector3,
    pub max: Vector3,
}

impl Aabb {
    /// Computes the tightest box around `points`, or `None` if there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vector3>,
    {
        let mut points = points.into_iter();
        let first = *points.next()?;
        Some(points.fold(
            Aabb {
                min: first,
                max: first,
            },
            |mut bb, p| {
                bb.min.x = bb.min.x.min(p.x);
                bb.min.y = bb.min.y.min(p.y);
                bb.min.z = bb.min.z.min(p.z);
                bb.max.x = bb.max.x.max(p.x);
                bb.max.y = bb.max.y.max(p.y);
                bb.max.z = bb.max.z.max(p.z);
                bb
            },
        ))
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) / 2.0
    }

    /// Side lengths along x, y and z.
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// Length of the longest side.
    pub fn max_extent(&self) -> f32 {
        let e = self.extent();
        e.x.max(e.y).max(e.z)
    }
}
